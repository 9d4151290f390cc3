pub mod dataset;
pub mod loader;
pub mod neighbors;
pub mod point;
pub mod selection;

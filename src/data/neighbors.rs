//! K-nearest-neighbor search by Euclidean distance.
//!
//! Datasets are small (a few hundred points), so this is a linear scan
//! followed by a stable sort; no spatial index.

use serde::{Deserialize, Serialize};

use super::point::{Point, PointId};

/// Default number of neighbors highlighted in neighbor mode.
pub const DEFAULT_NEIGHBOR_COUNT: usize = 5;

/// Which points are left out of the neighbor search besides the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborExclusion {
    /// Only the reference point itself (by id). Other points at the same
    /// coordinates are ordinary neighbors at distance zero.
    #[default]
    Identity,
    /// The reference point and every point sharing its coordinates.
    Position,
}

/// Return up to `k` ids nearest to `reference`, closest first.
///
/// Ties keep dataset order. An out-of-range `reference` yields an empty list.
pub fn nearest(
    reference: PointId,
    points: &[Point],
    k: usize,
    exclusion: NeighborExclusion,
) -> Vec<PointId> {
    let Some(origin) = points.get(reference) else {
        return Vec::new();
    };

    let mut candidates: Vec<(PointId, f64)> = points
        .iter()
        .enumerate()
        .filter(|(id, p)| match exclusion {
            NeighborExclusion::Identity => *id != reference,
            NeighborExclusion::Position => *id != reference && !p.same_position(origin),
        })
        .map(|(id, p)| (id, origin.distance(p)))
        .collect();

    // stable: equal distances stay in dataset order
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    candidates.truncate(k);
    candidates.into_iter().map(|(id, _)| id).collect()
}

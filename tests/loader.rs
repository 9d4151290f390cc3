use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use scatterview::data::loader::read_points;
use scatterview::{CsvDatasetLoader, DatasetKey, DatasetLoader, LoadError, LoadQueue, Point};

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn reads_x_y_label_rows() {
    let key = DatasetKey::from("t");
    let pts = read_points(&key, "1,2,a\n-3.5, 4 ,b\n".as_bytes()).unwrap();
    assert_eq!(pts, vec![Point::new(1.0, 2.0, "a"), Point::new(-3.5, 4.0, "b")]);
}

#[test]
fn missing_label_is_empty() {
    let key = DatasetKey::from("t");
    let pts = read_points(&key, "1,2\n".as_bytes()).unwrap();
    assert_eq!(pts, vec![Point::new(1.0, 2.0, "")]);
}

#[test]
fn malformed_rows_are_skipped() {
    let key = DatasetKey::from("t");
    let body = "x,y,label\n1,2,a\nfoo,3,b\n4,NaN,c\n5\n\n6,7,d\n";
    let pts = read_points(&key, body.as_bytes()).unwrap();
    assert_eq!(pts, vec![Point::new(1.0, 2.0, "a"), Point::new(6.0, 7.0, "d")]);
}

#[test]
fn csv_loader_reads_key_file_from_root() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(&dir, "data1.csv", "0,0,a\n10,10,b\n");
    let loader = CsvDatasetLoader::new(dir.path());
    let pts = loader.load(&DatasetKey::from("data1")).unwrap();
    assert_eq!(pts.len(), 2);
    assert_eq!(loader.locate(&DatasetKey::from("x")), dir.path().join("x.csv"));
}

#[test]
fn source_override_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "elsewhere.csv", "1,1,foo\n");
    let loader = CsvDatasetLoader::new("/nonexistent").with_source(DatasetKey::from("data2"), &path);
    let pts = loader.load(&DatasetKey::from("data2")).unwrap();
    assert_eq!(pts, vec![Point::new(1.0, 1.0, "foo")]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let loader = CsvDatasetLoader::new(dir.path());
    let err = loader.load(&DatasetKey::from("nope")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("nope"));
}

/// Loader whose latency is encoded in the key: `"slow"` takes 300 ms.
struct DelayedLoader;

impl DatasetLoader for DelayedLoader {
    fn load(&self, key: &DatasetKey) -> Result<Vec<Point>, LoadError> {
        if key.as_str() == "slow" {
            std::thread::sleep(Duration::from_millis(300));
        }
        Ok(vec![Point::new(0.0, 0.0, key.as_str())])
    }
}

#[test]
fn queue_delivers_latest_request() {
    let mut q = LoadQueue::new(Arc::new(DelayedLoader));
    let ticket = q.request(DatasetKey::from("fast"));
    assert!(q.is_pending());
    let outcome = q.wait(Duration::from_secs(5)).unwrap();
    assert_eq!(outcome.ticket, ticket);
    assert_eq!(outcome.key.as_str(), "fast");
    assert!(!q.is_pending());
}

#[test]
fn stale_result_is_discarded() {
    let mut q = LoadQueue::new(Arc::new(DelayedLoader));
    let old = q.request(DatasetKey::from("slow"));
    let new = q.request(DatasetKey::from("fast"));
    assert!(new > old);

    let outcome = q.wait(Duration::from_secs(5)).unwrap();
    assert_eq!(outcome.key.as_str(), "fast");

    // the slow result arrives later and must not surface
    assert!(q.wait(Duration::from_millis(600)).is_none());
    assert!(q.poll().is_none());
}

#[test]
fn older_fast_result_is_discarded_when_newer_is_slow() {
    let mut q = LoadQueue::new(Arc::new(DelayedLoader));
    q.request(DatasetKey::from("fast"));
    q.request(DatasetKey::from("slow"));
    let outcome = q.wait(Duration::from_secs(5)).unwrap();
    assert_eq!(outcome.key.as_str(), "slow");
}

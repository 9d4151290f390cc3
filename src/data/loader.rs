//! Dataset loading.
//!
//! A [`DatasetLoader`] turns a [`DatasetKey`] into points. [`CsvDatasetLoader`]
//! reads `<root>/<key>.csv` (or a per-key override). [`LoadQueue`] runs loads
//! on worker threads and hands results back over a channel, tagging every
//! request with a [`LoadTicket`] so that only the most recent request is ever
//! applied.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;

use super::dataset::DatasetKey;
use super::point::Point;

/// Source of point data for a dataset key.
pub trait DatasetLoader: Send + Sync {
    fn load(&self, key: &DatasetKey) -> Result<Vec<Point>, LoadError>;
}

/// Loads headerless `x,y,label` CSV files.
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    root: PathBuf,
    sources: HashMap<DatasetKey, PathBuf>,
}

impl CsvDatasetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sources: HashMap::new(),
        }
    }

    /// Read `key` from `path` instead of `<root>/<key>.csv`.
    pub fn with_source(mut self, key: DatasetKey, path: impl Into<PathBuf>) -> Self {
        self.sources.insert(key, path.into());
        self
    }

    /// Resource locator for `key`.
    pub fn locate(&self, key: &DatasetKey) -> PathBuf {
        self.sources
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.root.join(format!("{key}.csv")))
    }
}

impl DatasetLoader for CsvDatasetLoader {
    fn load(&self, key: &DatasetKey) -> Result<Vec<Point>, LoadError> {
        let path = self.locate(key);
        let file = File::open(&path).map_err(|source| LoadError::Io {
            key: key.clone(),
            path: path.clone(),
            source,
        })?;
        let points = read_points(key, file)?;
        log::info!("Loaded {} points for dataset '{}' from {:?}", points.len(), key, path);
        Ok(points)
    }
}

/// Parse headerless `x,y[,label]` records.
///
/// Rows whose x or y is not a finite number are skipped (with a warning), so a
/// partly broken file yields a partial dataset. Only an I/O failure while
/// reading fails the whole load.
pub fn read_points<R: Read>(key: &DatasetKey, reader: R) -> Result<Vec<Point>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        match record {
            Ok(record) => match parse_record(&record) {
                Some(p) => points.push(p),
                None => log::warn!("Dataset '{}': skipping malformed row {}: {:?}", key, row + 1, record),
            },
            Err(e) if e.is_io_error() => {
                return Err(LoadError::Csv {
                    key: key.clone(),
                    source: e,
                });
            }
            Err(e) => log::warn!("Dataset '{}': skipping unreadable row {}: {}", key, row + 1, e),
        }
    }
    Ok(points)
}

fn parse_record(record: &StringRecord) -> Option<Point> {
    let parse = |i: usize| {
        record
            .get(i)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    };
    let x = parse(0)?;
    let y = parse(1)?;
    let label = record.get(2).unwrap_or_default();
    Some(Point::new(x, y, label))
}

/// Sequence number of a load request. Later requests have larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// A finished load, delivered back to the UI thread.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub key: DatasetKey,
    pub result: Result<Vec<Point>, LoadError>,
}

/// Runs loads in the background and keeps only the newest result.
pub struct LoadQueue {
    loader: Arc<dyn DatasetLoader>,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    next_ticket: u64,
    latest: Option<LoadTicket>,
}

impl LoadQueue {
    pub fn new(loader: Arc<dyn DatasetLoader>) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self {
            loader,
            tx,
            rx,
            next_ticket: 0,
            latest: None,
        }
    }

    /// Start loading `key`. Any earlier request still in flight becomes stale.
    pub fn request(&mut self, key: DatasetKey) -> LoadTicket {
        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.latest = Some(ticket);

        let loader = Arc::clone(&self.loader);
        let tx = self.tx.clone();
        let worker_key = key.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("load-{key}"))
            .spawn(move || {
                let result = loader.load(&worker_key);
                // receiver gone means the viewer was dropped
                let _ = tx.send(LoadOutcome {
                    ticket,
                    key: worker_key,
                    result,
                });
            });
        if let Err(e) = spawned {
            log::error!("Failed to spawn loader thread for dataset '{}': {}", key, e);
            let _ = self.tx.send(LoadOutcome {
                ticket,
                key: key.clone(),
                result: Err(LoadError::WorkerDisconnected(key)),
            });
        }
        ticket
    }

    /// Whether the most recent request has not been delivered yet.
    pub fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Non-blocking: return the result of the latest request if it has arrived.
    ///
    /// Results of superseded requests are dropped.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(fresh) = self.accept(outcome) {
                return Some(fresh);
            }
        }
        None
    }

    /// Block for up to `timeout` waiting for the latest request.
    pub fn wait(&mut self, timeout: Duration) -> Option<LoadOutcome> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    if let Some(fresh) = self.accept(outcome) {
                        return Some(fresh);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None;
                }
            }
        }
    }

    fn accept(&mut self, outcome: LoadOutcome) -> Option<LoadOutcome> {
        if Some(outcome.ticket) == self.latest {
            self.latest = None;
            Some(outcome)
        } else {
            log::debug!(
                "Discarding stale load of dataset '{}' ({:?})",
                outcome.key,
                outcome.ticket
            );
            None
        }
    }
}

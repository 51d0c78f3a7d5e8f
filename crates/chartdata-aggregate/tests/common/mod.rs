//! Shared test doubles for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use chartdata_core::{KeyedValues, Values2D};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

pub const EPSILON: f64 = 1e-7;

/// Table double with scripted dimensions and cells that records every read
///
/// The reported counts are independent of the scripted cells, so tests can
/// model malformed tables. Unscripted cells read as `None`.
pub struct ScriptedTable {
    rows: isize,
    columns: isize,
    cells: HashMap<(isize, isize), Option<f64>>,
    reads: Mutex<Vec<(isize, isize)>>,
}

impl ScriptedTable {
    pub fn new(rows: isize, columns: isize) -> Self {
        Self {
            rows,
            columns,
            cells: HashMap::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Build from a grid of values; dimensions follow the grid
    pub fn from_grid(grid: &[&[Option<f64>]]) -> Self {
        let columns = grid.first().map_or(0, |r| r.len()) as isize;
        let mut table = Self::new(grid.len() as isize, columns);
        for (r, row) in grid.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                table = table.with_cell(r as isize, c as isize, *value);
            }
        }
        table
    }

    pub fn with_cell(mut self, row: isize, column: isize, value: Option<f64>) -> Self {
        self.cells.insert((row, column), value);
        self
    }

    pub fn reads(&self) -> Vec<(isize, isize)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn was_read(&self, row: isize, column: isize) -> bool {
        self.reads().contains(&(row, column))
    }
}

impl Values2D for ScriptedTable {
    fn row_count(&self) -> isize {
        self.rows
    }

    fn column_count(&self) -> isize {
        self.columns
    }

    fn value(&self, row: isize, column: isize) -> Option<f64> {
        self.reads.lock().unwrap().push((row, column));
        self.cells.get(&(row, column)).copied().flatten()
    }
}

/// Keyed-values double backed by parallel vectors, counting reads
pub struct ScriptedKeyedValues {
    keys: Vec<i32>,
    values: Vec<Option<f64>>,
    value_reads: Mutex<usize>,
}

impl ScriptedKeyedValues {
    pub fn new(entries: &[(i32, Option<f64>)]) -> Self {
        Self {
            keys: entries.iter().map(|(k, _)| *k).collect(),
            values: entries.iter().map(|(_, v)| *v).collect(),
            value_reads: Mutex::new(0),
        }
    }

    pub fn value_reads(&self) -> usize {
        *self.value_reads.lock().unwrap()
    }
}

impl KeyedValues for ScriptedKeyedValues {
    type Key = i32;

    fn item_count(&self) -> usize {
        self.keys.len()
    }

    fn key(&self, index: usize) -> i32 {
        self.keys[index]
    }

    fn value(&self, index: usize) -> Option<f64> {
        *self.value_reads.lock().unwrap() += 1;
        self.values[index]
    }
}

/// Subscriber that records the name of every span it sees
#[derive(Clone, Default)]
pub struct SpanRecorder {
    names: Arc<Mutex<Vec<&'static str>>>,
    next_id: Arc<AtomicU64>,
}

impl SpanRecorder {
    pub fn names(&self) -> Vec<&'static str> {
        self.names.lock().unwrap().clone()
    }

    /// Run `f` with this recorder as the thread's default subscriber
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::subscriber::with_default(self.clone(), f)
    }
}

impl Subscriber for SpanRecorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, span: &Attributes<'_>) -> Id {
        self.names.lock().unwrap().push(span.metadata().name());
        Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, _event: &Event<'_>) {}

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

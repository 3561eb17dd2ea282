//! Benchmark driver: prepare an index once, then time every query against it.
use crate::{
    bst::{Bst, TreeSearch},
    input::read_input_file,
    merge_sort::is_sorted,
    report::{ResultSink, TextSink},
    search::{BinarySearch, SequentialSearch, SortedVec},
    timer::{serialize_ms, serialize_opt_ms, timed, Stopwatch},
    Result, SearchIndex, SearchScheme,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::{path::Path, time::Duration};

/// Which index the dataset is prepared into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Merge sort the data, then run sequential and binary search per query.
    #[default]
    Array,
    /// Insert the data into a BST, then run tree search per query.
    Tree,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Emit the preparation time before the query results.
    pub time_prep: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            mode: Mode::Array,
            time_prep: true,
        }
    }
}

/// Outcome of one timed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Timing {
    pub found: bool,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_ms")]
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum QueryRecord {
    Array {
        query: i32,
        sequential: Timing,
        binary: Timing,
    },
    Tree {
        query: i32,
        tree: Timing,
    },
}

impl QueryRecord {
    pub fn query(&self) -> i32 {
        match *self {
            QueryRecord::Array { query, .. } | QueryRecord::Tree { query, .. } => query,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub data_len: usize,
    pub query_len: usize,
    /// Time to sort or build the tree. `None` when not requested.
    #[serde(rename = "prep_ms", serialize_with = "serialize_opt_ms")]
    pub prep: Option<Duration>,
    pub records: Vec<QueryRecord>,
}

/// A prepared index, ready to answer queries.
pub enum Benchmark {
    Array(SortedVec),
    Tree(Bst),
}

fn time_search<I>(index: &I, scheme: &dyn SearchScheme<I>, q: i32) -> Timing {
    let watch = Stopwatch::start();
    let found = scheme.query_one(index, q);
    Timing {
        found,
        elapsed: watch.elapsed(),
    }
}

impl Benchmark {
    /// Build the index for `mode` and return how long that took.
    pub fn prepare(data: Vec<i32>, mode: Mode) -> (Self, Duration) {
        match mode {
            Mode::Array => {
                info!("Sorting data...");
                let (index, elapsed) = timed(|| SortedVec::new(data));
                (Benchmark::Array(index), elapsed)
            }
            Mode::Tree => {
                info!("Building tree...");
                let (tree, elapsed) = timed(|| <Bst as SearchIndex>::new(data));
                debug!("Tree of {} nodes has height {}", tree.len(), tree.height());
                (Benchmark::Tree(tree), elapsed)
            }
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Benchmark::Array(_) => Mode::Array,
            Benchmark::Tree(_) => Mode::Tree,
        }
    }

    /// Run and individually time every search of this mode for `q`.
    pub fn query(&self, q: i32) -> QueryRecord {
        match self {
            Benchmark::Array(vals) => QueryRecord::Array {
                query: q,
                sequential: time_search(vals, &SequentialSearch, q),
                binary: time_search(vals, &BinarySearch, q),
            },
            Benchmark::Tree(tree) => QueryRecord::Tree {
                query: q,
                tree: time_search(tree, &TreeSearch, q),
            },
        }
    }
}

/// Prepare `data` according to `config` and stream one record per query, in order, to `sink`.
pub fn run(
    data: Vec<i32>,
    queries: &[i32],
    config: RunConfig,
    sink: &mut impl ResultSink,
) -> Result<RunReport> {
    let data_len = data.len();
    let (bench, prep) = Benchmark::prepare(data, config.mode);
    info!("Preparation took {prep:?}");
    let prep = config.time_prep.then_some(prep);
    if let Some(prep) = prep {
        sink.prep_time(prep)?;
    }

    match config.mode {
        Mode::Array => info!("Running linear and binary-search algorithms..."),
        Mode::Tree => info!("Running tree search..."),
    }
    let mut records = Vec::with_capacity(queries.len());
    for &q in queries {
        let record = bench.query(q);
        sink.record(&record)?;
        records.push(record);
    }
    sink.finish()?;
    info!("Finished running search algorithms!");

    Ok(RunReport {
        mode: config.mode,
        data_len,
        query_len: queries.len(),
        prep,
        records,
    })
}

/// Read `input`, create `output`, then prepare and search.
///
/// A malformed input fails before `output` is touched, and an output that cannot be created
/// fails before any preparation or search runs.
pub fn run_files(input: &Path, output: &Path, config: RunConfig) -> Result<RunReport> {
    info!("Reading {input:?}..");
    let dataset = read_input_file(input)?;
    info!(
        "Read {} values ({}) and {} queries",
        dataset.data.len(),
        size::Size::from_bytes(dataset.data.len() * std::mem::size_of::<i32>()),
        dataset.queries.len()
    );
    if config.mode == Mode::Tree && dataset.data.len() > 1 && is_sorted(&dataset.data) {
        warn!("Input is already sorted; the tree degenerates into a chain");
    }

    let mut sink = TextSink::create(output)?;
    let report = run(dataset.data, &dataset.queries, config, &mut sink)?;
    info!("Wrote {} results to {output:?}", report.records.len());
    Ok(report)
}

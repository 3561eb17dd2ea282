pub mod bst;
pub mod driver;
pub mod error;
pub mod input;
pub mod merge_sort;
pub mod report;
pub mod search;
pub mod timer;
pub mod util;

pub use error::{Error, Result};

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

/// Construct the data structure from the raw, unsorted dataset.
///
/// Building the index is the "preparation" step of a benchmark run and is timed separately
/// from the queries.
pub trait SearchIndex: Sized {
    fn new(vals: Vec<i32>) -> Self;

    // Convenience methods to forward to a search scheme.
    fn query_one(&self, q: i32, scheme: &(impl SearchScheme<Self> + ?Sized)) -> bool {
        scheme.query_one(self, q)
    }
    fn query(&self, qs: &[i32], scheme: &(impl SearchScheme<Self> + ?Sized)) -> Vec<bool> {
        scheme.query(self, qs)
    }
}

/// A membership search strategy over an index.
pub trait SearchScheme<INDEX> {
    fn query_one(&self, index: &INDEX, q: i32) -> bool;
    fn query(&self, index: &INDEX, qs: &[i32]) -> Vec<bool> {
        qs.iter().map(|&q| self.query_one(index, q)).collect()
    }
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

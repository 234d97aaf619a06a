//! Progress reporting during dispatch

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};

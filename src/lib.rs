pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod vocab;

pub use crate::core::{default_table, merge, normalize, validate_coverage, MergedTable};
pub use error::{AutogenError, Result};
pub use pipeline::{run, Plan};

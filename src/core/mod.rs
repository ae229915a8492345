//! 병음 정규화 / 병합 핵심 로직

pub mod merger;
pub mod normalizer;
pub mod substitution;

pub use merger::{merge, MergedTable, Merger, DEFAULT_SEPARATOR};
pub use normalizer::{normalize, observed_alphabet, validate_coverage, CoverageMode};
pub use substitution::{default_table, SubstitutionTable};

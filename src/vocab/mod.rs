//! 어휘 목록 입력

mod level;
mod reader;

pub use level::{LoadedLevel, VocabLevel};
pub use reader::{parse_tsv, read_tsv, VocabEntry};

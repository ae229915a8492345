//! 출력 파일 생성 (QC TSV, Rust 상수 소스) 및 덮어쓰기 확인

mod prompt;
mod qc;
mod rust_source;

pub use prompt::confirm_overwrite;
pub use qc::render_qc;
pub use rust_source::render_rust_source;

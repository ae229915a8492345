//! hsk-autogen - HSK 어휘 목록 -> 병음 검색 테이블 생성기

use clap::Parser;
use hsk_autogen::cli::{execute, exit_status, Cli};
use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = execute(&cli, &mut stdin().lock(), &mut stdout());
    ExitCode::from(exit_status(&result, &mut stderr()))
}

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, save_config};
use crate::core::default_table;
use crate::emit::confirm_overwrite;
use crate::error::{AutogenError, Result};
use crate::pipeline::{run, Plan};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "HSK 어휘 TSV -> 병음 검색 테이블(Rust 상수) 생성기"
)]
pub struct Cli {
    /// 확인 없이 덮어쓰기
    #[arg(short, long)]
    pub yes: bool,

    /// 검증/병합만 하고 파일은 쓰지 않음
    #[arg(long, conflicts_with = "yes")]
    pub check: bool,

    /// 설정 파일 (기본: ./hsk-autogen.json, 없으면 내장 기본값)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 현재 설정을 JSON으로 저장하고 종료
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}

fn emit_line<W: Write>(output: &mut W, line: &str) -> Result<()> {
    writeln!(output, "{}", line).map_err(|e| AutogenError::io("<stdout>", e))
}

/// CLI 한 번 실행
///
/// 프롬프트는 `input`에서 응답을 읽고, 안내/요약은 `output`에 씀
pub fn execute<R, W>(cli: &Cli, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let config = load_config(cli.config.as_deref())?;

    if let Some(path) = &cli.write_config {
        save_config(&config, path)?;
        return emit_line(output, &format!("설정 저장: {}", path.display()));
    }

    // 테이블 길이 검사는 여기서 (입력 검사보다 먼저)
    let table = default_table()?;

    if cli.check {
        let plan = Plan::build(&config, table)?;
        emit_line(output, &plan.summary())?;
        for key in plan.merged.unique_duplicates() {
            emit_line(output, &format!("  중복: {}", key))?;
        }
        return Ok(());
    }

    let plan = if cli.yes {
        run(&config, table, |_| Ok(true))?
    } else {
        run(&config, table, |files| {
            confirm_overwrite(&mut *input, &mut *output, files)
        })?
    };

    emit_line(output, &plan.summary())
}

/// 실행 결과 -> 종료 코드 (성공 0, 그 외 1)
///
/// 거부는 `no changes made`, 나머지 에러는 진단 메시지를 `err`에 씀
pub fn exit_status<W: Write>(result: &Result<()>, err: &mut W) -> u8 {
    // stderr 쓰기 실패는 무시 (종료 코드가 우선)
    match result {
        Ok(()) => 0,
        Err(AutogenError::UserAbort) => {
            let _ = writeln!(err, "no changes made");
            1
        }
        Err(e) => {
            log::debug!("치명적 에러: {:?}", e);
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}

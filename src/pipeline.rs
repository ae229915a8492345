//! 읽기 -> 검증 -> 정규화/병합 -> (확인) -> 쓰기
//!
//! 출력물은 전부 메모리에서 먼저 만들어 두고, 확인을 받은 뒤에만 파일을 씁니다.
//! 검증 실패나 정규화 실패 시 파일은 하나도 바뀌지 않습니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AutogenConfig;
use crate::core::{merge, validate_coverage, MergedTable, SubstitutionTable};
use crate::emit::{render_qc, render_rust_source};
use crate::error::{AutogenError, Result};
use crate::vocab::LoadedLevel;

/// 쓰기 직전 상태의 실행 계획
#[derive(Debug, Clone)]
pub struct Plan {
    pub levels: Vec<LoadedLevel>,
    /// (QC 경로, 내용)
    pub qc_files: Vec<(PathBuf, String)>,
    pub merged: MergedTable,
    pub output: PathBuf,
    /// 생성될 Rust 소스
    pub source: String,
}

impl Plan {
    /// 설정의 급수 파일들을 읽어 계획 생성
    pub fn build(config: &AutogenConfig, table: &SubstitutionTable) -> Result<Self> {
        let levels = config
            .levels
            .iter()
            .map(|level| level.load())
            .collect::<Result<Vec<_>>>()?;
        Self::from_levels(config, table, levels)
    }

    /// 이미 읽어 둔 급수로 계획 생성
    pub fn from_levels(
        config: &AutogenConfig,
        table: &SubstitutionTable,
        levels: Vec<LoadedLevel>,
    ) -> Result<Self> {
        validate_coverage(
            table,
            levels.iter().flat_map(|l| l.entries.iter()),
            config.coverage,
        )?;

        let qc_files = levels
            .iter()
            .map(|l| render_qc(table, l).map(|qc| (l.level.qc.clone(), qc)))
            .collect::<Result<Vec<_>>>()?;

        let merged = merge(table, &levels, config.separator)?;
        let source = render_rust_source(&merged);

        Ok(Self {
            levels,
            qc_files,
            merged,
            output: config.output.clone(),
            source,
        })
    }

    /// 덮어쓰게 될 파일 목록
    pub fn output_files(&self) -> Vec<PathBuf> {
        self.qc_files
            .iter()
            .map(|(path, _)| path.clone())
            .chain(std::iter::once(self.output.clone()))
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.levels.iter().map(|l| l.entries.len()).sum()
    }

    /// 요약 한 줄
    pub fn summary(&self) -> String {
        format!(
            "{}개 급수, {}개 항목 -> {}개 키 (중복 키 {}개)",
            self.levels.len(),
            self.entry_count(),
            self.merged.len(),
            self.merged.unique_duplicates().len()
        )
    }

    /// QC 파일들과 생성 소스를 통째로 덮어씀
    pub fn write(&self) -> Result<()> {
        for (path, content) in &self.qc_files {
            write_file(path, content)?;
        }
        write_file(&self.output, &self.source)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| AutogenError::io(path, e))?;
    log::info!("작성: {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// 전체 실행
///
/// `confirm`은 덮어쓸 파일 목록을 받아 진행 여부를 반환. 거부 시 `UserAbort`.
pub fn run<F>(config: &AutogenConfig, table: &SubstitutionTable, confirm: F) -> Result<Plan>
where
    F: FnOnce(&[PathBuf]) -> std::io::Result<bool>,
{
    let plan = Plan::build(config, table)?;
    log::info!("{}", plan.summary());

    let files = plan.output_files();
    let proceed = confirm(files.as_slice()).map_err(|e| AutogenError::io("<stdin>", e))?;
    if !proceed {
        return Err(AutogenError::UserAbort);
    }

    plan.write()?;
    Ok(plan)
}

//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{CoverageMode, DEFAULT_SEPARATOR};
use crate::error::{AutogenError, Result};
use crate::vocab::VocabLevel;

/// 작업 디렉토리에서 자동으로 찾는 설정 파일 이름
pub const DEFAULT_CONFIG_FILE: &str = "hsk-autogen.json";

/// 생성기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AutogenConfig {
    /// 급수 목록 (이 순서대로 병합)
    #[serde(default = "default_levels")]
    pub levels: Vec<VocabLevel>,
    /// 생성할 Rust 소스 경로
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// 병합된 한자 사이 구분자
    #[serde(default = "default_separator")]
    pub separator: char,
    /// 치환 테이블 커버리지 판정 방식
    #[serde(default)]
    pub coverage: CoverageMode,
}

fn default_levels() -> Vec<VocabLevel> {
    vec![
        VocabLevel::new("hsk1", "hsk1.tsv", "hsk1-QC-do-not-edit.tsv"),
        VocabLevel::new("hsk2", "hsk2.tsv", "hsk2-QC-do-not-edit.tsv"),
    ]
}

fn default_output() -> PathBuf {
    PathBuf::from("../src/autogen_hsk.rs")
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for AutogenConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            output: default_output(),
            separator: default_separator(),
            coverage: CoverageMode::default(),
        }
    }
}

impl AutogenConfig {
    /// 덮어쓰게 될 파일 (QC 파일들, 생성 소스 순)
    pub fn output_files(&self) -> Vec<PathBuf> {
        self.levels
            .iter()
            .map(|l| l.qc.clone())
            .chain(std::iter::once(self.output.clone()))
            .collect()
    }
}

/// 설정 파일 로드
///
/// - 경로 지정: 파일이 없거나 파싱 실패 시 에러
/// - 미지정: 작업 디렉토리의 `hsk-autogen.json`, 없으면 기본값
pub fn load_config(path: Option<&Path>) -> Result<AutogenConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !p.exists() {
                log::debug!("설정 파일 없음, 기본값 사용");
                return Ok(AutogenConfig::default());
            }
            p
        }
    };

    let content = fs::read_to_string(&path).map_err(|e| AutogenError::io(&path, e))?;
    let config = serde_json::from_str(&content)
        .map_err(|e| AutogenError::Config(format!("{}: {}", path.display(), e)))?;
    log::info!("설정 로드: {}", path.display());
    Ok(config)
}

/// 설정 파일 저장
pub fn save_config(config: &AutogenConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AutogenError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|e| AutogenError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AutogenConfig::default();
        assert_eq!(config.levels.len(), 2);
        assert_eq!(config.levels[0].src, PathBuf::from("hsk1.tsv"));
        assert_eq!(config.levels[1].qc, PathBuf::from("hsk2-QC-do-not-edit.tsv"));
        assert_eq!(config.output, PathBuf::from("../src/autogen_hsk.rs"));
        assert_eq!(config.separator, '\t');
        assert_eq!(config.coverage, CoverageMode::Exact);
    }

    #[test]
    fn test_output_files_order() {
        let config = AutogenConfig::default();
        assert_eq!(
            config.output_files(),
            vec![
                PathBuf::from("hsk1-QC-do-not-edit.tsv"),
                PathBuf::from("hsk2-QC-do-not-edit.tsv"),
                PathBuf::from("../src/autogen_hsk.rs"),
            ]
        );
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = AutogenConfig {
            levels: vec![VocabLevel::new("hsk3", "hsk3.tsv", "hsk3-QC.tsv")],
            output: PathBuf::from("out.rs"),
            separator: '|',
            coverage: CoverageMode::Subset,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AutogenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{"output": "gen.rs"}"#;
        let config: AutogenConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.output, PathBuf::from("gen.rs"));
        assert_eq!(config.levels, default_levels());
        assert_eq!(config.separator, '\t');
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{"coverage": "subset"}"#).unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.coverage, CoverageMode::Subset);
    }

    #[test]
    fn test_load_invalid_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(Some(path.as_path())), Err(AutogenError::Config(_))));
    }

    #[test]
    fn test_load_missing_explicit_is_error() {
        let err = load_config(Some(Path::new("/nonexistent/cfg.json"))).unwrap_err();
        assert!(matches!(err, AutogenError::Io { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cfg.json");
        let config = AutogenConfig::default();
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap(), config);
    }
}

//! HSK 급수별 어휘 목록

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::reader::{read_tsv, VocabEntry};
use crate::error::Result;

/// 급수 하나: 원본 TSV와 검수용(QC) TSV 경로
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VocabLevel {
    pub name: String,
    /// 원본 어휘 목록
    pub src: PathBuf,
    /// 검수용 출력 (매 실행마다 덮어씀)
    pub qc: PathBuf,
}

impl VocabLevel {
    pub fn new(name: impl Into<String>, src: impl Into<PathBuf>, qc: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            src: src.into(),
            qc: qc.into(),
        }
    }

    /// 원본 TSV 읽기
    pub fn load(&self) -> Result<LoadedLevel> {
        let entries = read_tsv(&self.src)?;
        log::info!("{}: {}개 항목 ({})", self.name, entries.len(), self.src.display());
        Ok(LoadedLevel {
            level: self.clone(),
            entries,
        })
    }
}

/// 읽어 들인 급수 (파일 순서 유지)
#[derive(Debug, Clone)]
pub struct LoadedLevel {
    pub level: VocabLevel,
    pub entries: Vec<VocabEntry>,
}

impl LoadedLevel {
    /// 테스트나 메모리 입력용
    pub fn from_entries(level: VocabLevel, entries: Vec<VocabEntry>) -> Self {
        Self { level, entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("hsk1.tsv");
        fs::write(&src, "爱\tài\n八\tbā\n").unwrap();

        let level = VocabLevel::new("hsk1", &src, dir.path().join("hsk1-QC.tsv"));
        let loaded = level.load().unwrap();
        assert_eq!(loaded.level.name, "hsk1");
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.entries[1], VocabEntry::new("八", "bā"));
    }

    #[test]
    fn test_serde_field_names() {
        let json = r#"{"name":"hsk3","src":"hsk3.tsv","qc":"hsk3-QC.tsv"}"#;
        let level: VocabLevel = serde_json::from_str(json).unwrap();
        assert_eq!(level, VocabLevel::new("hsk3", "hsk3.tsv", "hsk3-QC.tsv"));
    }
}

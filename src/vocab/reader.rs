//! 어휘 TSV 파일 읽기
//!
//! 한 줄에 `한자<TAB>병음` 레코드 하나. 헤더 없음, UTF-8.

use std::fs;
use std::path::Path;

use crate::error::{AutogenError, Result};

/// 어휘 목록의 한 줄 (한자, 병음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub hanzi: String,
    pub pinyin: String,
}

impl VocabEntry {
    pub fn new(hanzi: impl Into<String>, pinyin: impl Into<String>) -> Self {
        Self {
            hanzi: hanzi.into(),
            pinyin: pinyin.into(),
        }
    }
}

/// TSV 텍스트를 파일 순서대로 파싱
///
/// 빈 줄은 건너뛰고, 필드가 정확히 2개가 아니거나 빈 필드가 있는 첫 줄에서 중단합니다.
/// 줄 끝의 빈 필드(`爱\tài\t`)는 세지 않습니다.
/// `source`는 에러 메시지에 쓰일 이름 (보통 파일 경로)
pub fn parse_tsv(text: &str, source: &str) -> Result<Vec<VocabEntry>> {
    let mut entries = Vec::new();

    // lines()가 \n, \r\n 모두 제거
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let mut fields: Vec<&str> = line.split('\t').collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        match fields.as_slice() {
            [hanzi, pinyin] if !hanzi.is_empty() && !pinyin.is_empty() => {
                entries.push(VocabEntry::new(*hanzi, *pinyin))
            }
            _ => {
                return Err(AutogenError::MalformedRecord {
                    source: source.to_string(),
                    line: idx + 1,
                    fields: fields.len(),
                })
            }
        }
    }

    Ok(entries)
}

/// TSV 파일 읽기
pub fn read_tsv(path: &Path) -> Result<Vec<VocabEntry>> {
    let text = fs::read_to_string(path).map_err(|e| AutogenError::io(path, e))?;
    parse_tsv(&text, &path.display().to_string())
}

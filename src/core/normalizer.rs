//! 병음 정규화 및 치환 테이블 커버리지 검사
//!
//! 정규화 순서:
//! 1. 소문자화
//! 2. 제거 문자(공백, 아포스트로피) 삭제
//! 3. 치환 테이블을 문자 단위로 적용
//!
//! 결과는 반드시 ASCII여야 하며, 아니면 테이블이 불완전한 것이므로 치명적 에러.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::substitution::SubstitutionTable;
use crate::error::{AutogenError, Result};
use crate::vocab::VocabEntry;

/// 커버리지 판정 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoverageMode {
    /// 검출 문자 집합 == 원본 알파벳 (쓰이지 않는 테이블 문자도 에러)
    #[default]
    Exact,
    /// 검출 문자 집합 ⊆ 원본 알파벳
    Subset,
}

/// 병음 하나를 ASCII 검색 키로 정규화
pub fn normalize(table: &SubstitutionTable, pinyin: &str) -> Result<String> {
    let normalized: String = pinyin
        .to_lowercase()
        .chars()
        .filter(|&c| !table.is_elided(c))
        .map(|c| table.map_char(c))
        .collect();

    if !normalized.is_ascii() {
        return Err(AutogenError::NonAsciiKey {
            input: pinyin.to_string(),
            output: normalized,
        });
    }
    Ok(normalized)
}

/// 소문자화한 병음에 등장하는 문자들 (정렬, 중복 제거)
pub fn observed_alphabet<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a VocabEntry>,
{
    let chars: BTreeSet<char> = entries
        .into_iter()
        .flat_map(|entry| entry.pinyin.to_lowercase().chars().collect::<Vec<_>>())
        .collect();
    chars.into_iter().collect()
}

/// 입력 전체의 병음 문자 집합이 테이블 원본 알파벳과 맞는지 검사
///
/// 출력 파일을 건드리기 전, 실행마다 한 번 호출
pub fn validate_coverage<'a, I>(table: &SubstitutionTable, entries: I, mode: CoverageMode) -> Result<()>
where
    I: IntoIterator<Item = &'a VocabEntry>,
{
    let detected = observed_alphabet(entries);
    let expected = table.source_alphabet();

    let ok = match mode {
        CoverageMode::Exact => detected == expected,
        CoverageMode::Subset => detected.chars().all(|c| table.contains(c)),
    };

    if ok {
        log::debug!("치환 테이블 커버리지 확인: {}자", detected.chars().count());
        Ok(())
    } else {
        Err(AutogenError::CoverageMismatch {
            detected,
            expected: expected.to_string(),
        })
    }
}

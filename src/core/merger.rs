//! 정규화된 병음 키 기준 중복 병합
//!
//! 예: ["he", "he"] / ["喝", "和"] -> ["he"] / ["喝\t和"]
//!
//! 급수 선언 순서, 파일 순서대로 처리하며 처음 등장한 키가 슬롯을 차지합니다.
//! 이후 같은 키가 나오면 그 슬롯의 한자 그룹 뒤에 구분자와 함께 덧붙입니다.

use std::collections::{HashMap, HashSet};

use super::normalizer::normalize;
use super::substitution::SubstitutionTable;
use crate::error::Result;
use crate::vocab::LoadedLevel;

/// 한자 그룹 구분자 기본값
pub const DEFAULT_SEPARATOR: char = '\t';

/// 병합 결과
///
/// `hanzi_groups[i]`와 `keys[i]`가 한 쌍. 두 벡터 길이는 항상 같고 `keys`에는 중복이 없음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTable {
    pub hanzi_groups: Vec<String>,
    pub keys: Vec<String>,
    /// 병합이 일어난 키 (발생할 때마다 기록, 반복 가능)
    pub duplicates: Vec<String>,
    separator: char,
    /// 키 -> 슬롯 인덱스
    index: HashMap<String, usize>,
}

impl MergedTable {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// 중복 키 (처음 등장 순서, 한 번씩)
    pub fn unique_duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.duplicates
            .iter()
            .filter(|key| seen.insert(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// 키가 차지한 슬롯 인덱스
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// 키 -> 후보 한자 목록 (역방향 조회)
    pub fn lookup(&self, key: &str) -> Option<Vec<&str>> {
        let idx = self.index_of(key)?;
        Some(self.hanzi_groups[idx].split(self.separator).collect())
    }
}

/// 한 항목씩 밀어 넣는 병합기
#[derive(Debug)]
pub struct Merger {
    separator: char,
    hanzi_groups: Vec<String>,
    keys: Vec<String>,
    duplicates: Vec<String>,
    first_index_of: HashMap<String, usize>,
}

impl Merger {
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            hanzi_groups: Vec::new(),
            keys: Vec::new(),
            duplicates: Vec::new(),
            first_index_of: HashMap::new(),
        }
    }

    /// 정규화된 키와 한자 하나 추가
    pub fn push(&mut self, hanzi: &str, key: String) {
        if let Some(&idx) = self.first_index_of.get(&key) {
            // 중복 키 -> 첫 슬롯에 덧붙임
            let group = &mut self.hanzi_groups[idx];
            group.push(self.separator);
            group.push_str(hanzi);
            log::debug!("병합: {} -> {}", key, group);
            self.duplicates.push(key);
        } else {
            self.first_index_of.insert(key.clone(), self.keys.len());
            self.hanzi_groups.push(hanzi.to_string());
            self.keys.push(key);
        }
    }

    pub fn finish(self) -> MergedTable {
        MergedTable {
            hanzi_groups: self.hanzi_groups,
            keys: self.keys,
            duplicates: self.duplicates,
            separator: self.separator,
            index: self.first_index_of,
        }
    }
}

/// 급수 목록 전체를 순서대로 정규화 + 병합
pub fn merge(
    table: &SubstitutionTable,
    levels: &[LoadedLevel],
    separator: char,
) -> Result<MergedTable> {
    let mut merger = Merger::new(separator);
    for level in levels {
        for entry in &level.entries {
            let key = normalize(table, &entry.pinyin)?;
            merger.push(&entry.hanzi, key);
        }
    }
    Ok(merger.finish())
}

//! 병음 -> ASCII 문자 치환 테이블

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::error::{AutogenError, Result};

/// 원본 알파벳 (코드포인트 순서)
/// 입력 병음에서 실제로 검출되는 문자 집합과 일치해야 함
pub const PINYIN_SOURCE: &str = " 'abcdefghijklmnopqrstuwxyzàáèéìíòóùúāēěīōūǎǐǒǔǚ";
/// 대상 알파벳 (PINYIN_SOURCE와 같은 위치끼리 대응)
pub const PINYIN_TARGET: &str = " 'abcdefghijklmnopqrstuwxyzaaeeiioouuaeeiouaiouv";
/// 치환 전에 제거되는 문자 (공백, 아포스트로피)
pub const PINYIN_ELIDE: &str = " '";

lazy_static! {
    static ref DEFAULT_TABLE: Result<SubstitutionTable> =
        SubstitutionTable::new(PINYIN_SOURCE, PINYIN_TARGET, PINYIN_ELIDE);
}

/// 기본 병음 치환 테이블 (프로세스 전체에서 한 번만 생성)
pub fn default_table() -> Result<&'static SubstitutionTable> {
    match &*DEFAULT_TABLE {
        Ok(table) => Ok(table),
        Err(_) => Err(AutogenError::AlphabetLengthMismatch {
            source_len: PINYIN_SOURCE.chars().count(),
            target_len: PINYIN_TARGET.chars().count(),
        }),
    }
}

/// 문자 단위 치환 테이블 + 제거 문자 집합
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    /// 선언된 원본 알파벳 그대로 (커버리지 비교용)
    source: String,
    map: BTreeMap<char, char>,
    elide: Vec<char>,
}

impl SubstitutionTable {
    /// 원본/대상 알파벳의 문자 수가 다르면 설정 에러
    pub fn new(source: &str, target: &str, elide: &str) -> Result<Self> {
        let source_len = source.chars().count();
        let target_len = target.chars().count();
        if source_len != target_len {
            return Err(AutogenError::AlphabetLengthMismatch {
                source_len,
                target_len,
            });
        }

        let mut map = BTreeMap::new();
        for (from, to) in source.chars().zip(target.chars()) {
            // 같은 문자가 두 번 나오면 앞의 것 사용
            map.entry(from).or_insert(to);
        }

        Ok(Self {
            source: source.to_string(),
            map,
            elide: elide.chars().collect(),
        })
    }

    /// 선언된 원본 알파벳
    pub fn source_alphabet(&self) -> &str {
        &self.source
    }

    pub fn is_elided(&self, c: char) -> bool {
        self.elide.contains(&c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    /// 테이블에 없는 문자는 그대로 반환
    pub fn map_char(&self, c: char) -> char {
        self.map.get(&c).copied().unwrap_or(c)
    }
}

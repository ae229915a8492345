//! 검수용(QC) TSV 생성
//!
//! 원본 항목마다 `한자<TAB>원본 병음<TAB>정규화 키` 한 줄. 사람이 눈으로 확인하는 용도.

use crate::core::{normalize, SubstitutionTable};
use crate::error::Result;
use crate::vocab::LoadedLevel;

/// 급수 하나의 QC 파일 내용 (파일 순서 유지)
pub fn render_qc(table: &SubstitutionTable, level: &LoadedLevel) -> Result<String> {
    let mut out = String::new();
    for entry in &level.entries {
        let key = normalize(table, &entry.pinyin)?;
        out.push_str(&entry.hanzi);
        out.push('\t');
        out.push_str(&entry.pinyin);
        out.push('\t');
        out.push_str(&key);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::default_table;
    use crate::vocab::{VocabEntry, VocabLevel};

    #[test]
    fn test_render_lines() {
        let level = LoadedLevel::from_entries(
            VocabLevel::new("hsk1", "hsk1.tsv", "hsk1-QC.tsv"),
            vec![VocabEntry::new("喝", "hē"), VocabEntry::new("飞机", "fēi jī")],
        );
        let qc = render_qc(default_table().unwrap(), &level).unwrap();
        assert_eq!(qc, "喝\thē\the\n飞机\tfēi jī\tfeiji\n");
    }

    #[test]
    fn test_duplicates_listed_individually() {
        let level = LoadedLevel::from_entries(
            VocabLevel::new("hsk1", "hsk1.tsv", "hsk1-QC.tsv"),
            vec![VocabEntry::new("喝", "hē"), VocabEntry::new("和", "hé")],
        );
        let qc = render_qc(default_table().unwrap(), &level).unwrap();
        assert_eq!(qc.lines().count(), 2);
    }

    #[test]
    fn test_empty_level() {
        let level = LoadedLevel::from_entries(VocabLevel::new("x", "x.tsv", "x-QC.tsv"), vec![]);
        assert_eq!(render_qc(default_table().unwrap(), &level).unwrap(), "");
    }
}

//! 병합 결과 -> Rust 상수 소스 생성
//!
//! `HANZI`와 `PINYIN` 두 배열은 인덱스로 짝을 이룹니다.
//! 같은 입력이면 항상 바이트 단위로 같은 출력이 나와야 하므로 순서는 병합 순서 그대로.

use crate::core::MergedTable;

/// 생성 파일 머리말
const HEADER: &str = "\
// This file is automatically generated. DO NOT MAKE EDITS HERE!
// To make changes, edit the vocabulary TSV files and rerun hsk-autogen
";

/// Rust 문자열 리터럴 내부용 이스케이프
fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn write_array(out: &mut String, name: &str, values: &[String]) {
    out.push_str(&format!("pub const {}: &[&'static str] = &[\n", name));
    for v in values {
        out.push_str(&format!("    &\"{}\",\n", escape_literal(v)));
    }
    out.push_str("];\n");
}

/// 생성 파일 전체 내용
pub fn render_rust_source(merged: &MergedTable) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    out.push_str("// The hanzi values for these duplicate pinyin search keys were merged:\n");
    for key in merged.unique_duplicates() {
        out.push_str(&format!("//  {}\n", key));
    }
    out.push('\n');

    write_array(&mut out, "HANZI", &merged.hanzi_groups);
    out.push('\n');
    write_array(&mut out, "PINYIN", &merged.keys);
    out
}

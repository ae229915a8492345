//! 덮어쓰기 확인 프롬프트

use std::io::{BufRead, Write};
use std::path::PathBuf;

/// "a, b, and c" 형식으로 파일 목록 나열
fn list_files(files: &[PathBuf]) -> String {
    let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} and {}", a, b),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// 덮어쓸 파일을 알리고 y/N 응답을 기다림
///
/// `y` 또는 `Y`만 승인. EOF, 빈 줄, 그 외 모든 응답은 거부.
/// 재질문이나 타임아웃 없음.
pub fn confirm_overwrite<R, W>(input: &mut R, output: &mut W, files: &[PathBuf]) -> std::io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(
        output,
        "This will overwrite {}\nProceed? [y/N]: ",
        list_files(files)
    )?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim_end_matches(['\n', '\r']);
    Ok(answer == "y" || answer == "Y")
}

//! 생성기 전체에서 사용하는 에러 타입
//!
//! 모든 에러는 치명적이며 실행 전체를 중단합니다. 재시도나 부분 성공은 없고,
//! 입력이나 치환 테이블을 고친 뒤 처음부터 다시 실행하는 것이 유일한 복구 방법입니다.

use std::fmt;
use std::path::{Path, PathBuf};

/// 생성기 에러
#[derive(Debug)]
pub enum AutogenError {
    /// 파일 읽기/쓰기 실패
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// 설정 파일 파싱 실패
    Config(String),
    /// 치환 테이블의 원본/대상 알파벳 길이 불일치
    AlphabetLengthMismatch { source_len: usize, target_len: usize },
    /// 입력 병음에서 검출된 문자 집합과 테이블 원본 알파벳 불일치
    CoverageMismatch { detected: String, expected: String },
    /// 정규화 결과에 ASCII가 아닌 문자가 남음
    NonAsciiKey { input: String, output: String },
    /// 탭으로 구분된 필드가 정확히 2개가 아닌 줄
    MalformedRecord {
        source: String,
        line: usize,
        fields: usize,
    },
    /// 사용자가 덮어쓰기 확인을 거부
    UserAbort,
}

impl AutogenError {
    /// 경로 정보를 붙인 I/O 에러 생성
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AutogenError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 치환 테이블 설정 문제인지 (알파벳 길이/커버리지)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            AutogenError::AlphabetLengthMismatch { .. } | AutogenError::CoverageMismatch { .. }
        )
    }
}

impl fmt::Display for AutogenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutogenError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            AutogenError::Config(s) => write!(f, "설정 파일 오류: {}", s),
            AutogenError::AlphabetLengthMismatch {
                source_len,
                target_len,
            } => write!(
                f,
                "치환 테이블 길이 불일치: source {}자, target {}자. \
                 source/target 알파벳을 함께 수정하세요",
                source_len, target_len
            ),
            AutogenError::CoverageMismatch { detected, expected } => {
                writeln!(f, "입력 병음에 사용된 문자가 치환 테이블 source 알파벳과 다릅니다")?;
                writeln!(f, " detected: \"{}\"", detected)?;
                writeln!(f, " expected: \"{}\"", expected)?;
                write!(
                    f,
                    "병음이 ASCII로 정규화되도록 source/target 알파벳을 갱신하세요"
                )
            }
            AutogenError::NonAsciiKey { input, output } => write!(
                f,
                "normalize({}) 결과 {} 에 ASCII가 아닌 문자가 남았습니다. 치환 테이블을 확인하세요",
                input, output
            ),
            AutogenError::MalformedRecord {
                source,
                line,
                fields,
            } => write!(
                f,
                "{}:{}: 필드 {}개 (hanzi<TAB>pinyin 2개 필요)",
                source, line, fields
            ),
            AutogenError::UserAbort => write!(f, "no changes made"),
        }
    }
}

impl std::error::Error for AutogenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutogenError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AutogenError {
    fn from(e: serde_json::Error) -> Self {
        AutogenError::Config(e.to_string())
    }
}

/// 생성기 Result 별칭
pub type Result<T> = std::result::Result<T, AutogenError>;

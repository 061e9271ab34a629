//! User-facing dashboard messages.

use crate::config::API_KEY_VAR;
use crate::seoul::FetchError;

/// Severity of a notice, mapped to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message box shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// CSS class for the notice box.
    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Warning => "notice notice-warning",
            NoticeLevel::Error => "notice notice-error",
        }
    }

    /// The access key is missing; fetching is disabled.
    pub fn missing_key() -> Vec<Self> {
        vec![
            Self::new(NoticeLevel::Warning, "⚠️ API_KEY를 설정해주세요."),
            Self::new(
                NoticeLevel::Info,
                format!(
                    "💡 {API_KEY_VAR} 환경 변수를 설정하거나 ARRIVALS_FIXTURES로 저장된 응답을 사용하세요."
                ),
            ),
        ]
    }

    /// The station input is empty.
    pub fn enter_station() -> Self {
        Self::new(NoticeLevel::Info, "👆 위에 역 이름을 입력해주세요.")
    }

    /// Valid response with zero arrivals.
    pub fn no_trains() -> Self {
        Self::new(NoticeLevel::Warning, "⚠️ 현재 도착 예정인 열차가 없습니다.")
    }

    /// Notices for a failed fetch: the specific cause, then a hint.
    pub fn from_fetch_error(err: &FetchError) -> Vec<Self> {
        let cause = match err {
            FetchError::NotConfigured(_) => return Self::missing_key(),
            FetchError::InvalidSetup(message) => {
                return vec![Self::new(
                    NoticeLevel::Error,
                    format!("⚠️ 설정 오류: {message}"),
                )];
            }
            FetchError::Transport(e) => Self::new(
                NoticeLevel::Error,
                format!("⚠️ API 호출 중 오류가 발생했습니다: {e}"),
            ),
            FetchError::Json { message, .. } => Self::new(
                NoticeLevel::Error,
                format!("⚠️ API 호출 중 오류가 발생했습니다: {message}"),
            ),
            FetchError::Api { message, .. } => {
                Self::new(NoticeLevel::Error, format!("⚠️ API 오류: {message}"))
            }
            FetchError::UnexpectedShape { keys } => Self::new(
                NoticeLevel::Warning,
                format!(
                    "⚠️ 예상치 못한 API 응답 형식입니다. 응답 키: [{}]",
                    keys.join(", ")
                ),
            ),
        };

        vec![
            cause,
            Self::new(
                NoticeLevel::Error,
                "⚠️ 해당 역을 찾을 수 없습니다. 역 이름을 확인해주세요.",
            ),
        ]
    }
}

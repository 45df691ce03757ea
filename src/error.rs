use thiserror::Error;

/// 서비스 계층의 오류 분류
///
/// 경계 계층(핸들러)은 이 분류만 보고 상태 코드를 결정한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입력값 검증 실패
    #[error("{0}")]
    Validation(String),

    /// 참조 대상 없음
    #[error("{0}")]
    NotFound(String),

    /// 저장소 호출 제한 시간 초과
    #[error("storage deadline exceeded")]
    Timeout,

    /// 그 외 저장소 오류 (request_id UNIQUE 위반 포함)
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

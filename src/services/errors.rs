use thiserror::Error;

/// Failures that abort page assembly.
///
/// Most backend absence degrades to empty data; only required data that is
/// missing ends up here.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Required backend data unavailable: {0}")]
    Unavailable(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("laptop id is not valid: {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("laptop {0} already exists")]
    AlreadyExists(String),

    #[error("image is too large: {size} > {limit}")]
    ResourceExhausted { size: usize, limit: usize },

    #[error("request is cancelled")]
    Cancelled,

    #[error("deadline is exceeded")]
    DeadlineExceeded,

    #[error("internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Unknown(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidArgument(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CatalogError::Internal(message.into())
    }
}

impl From<CatalogError> for tonic::Status {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidIdentifier(_) | CatalogError::InvalidArgument(_) => {
                tonic::Status::invalid_argument(message)
            }
            CatalogError::AlreadyExists(_) => tonic::Status::already_exists(message),
            CatalogError::ResourceExhausted { .. } => tonic::Status::resource_exhausted(message),
            CatalogError::Cancelled => tonic::Status::cancelled(message),
            CatalogError::DeadlineExceeded => tonic::Status::deadline_exceeded(message),
            CatalogError::Internal(_) => tonic::Status::internal(message),
            CatalogError::Unknown(_) => tonic::Status::unknown(message),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CatalogError::InvalidIdentifier("x".into()), Code::InvalidArgument),
            (CatalogError::invalid("laptop is required"), Code::InvalidArgument),
            (CatalogError::AlreadyExists("id".into()), Code::AlreadyExists),
            (
                CatalogError::ResourceExhausted { size: 2, limit: 1 },
                Code::ResourceExhausted,
            ),
            (CatalogError::Cancelled, Code::Cancelled),
            (CatalogError::DeadlineExceeded, Code::DeadlineExceeded),
            (CatalogError::internal("disk full"), Code::Internal),
            (CatalogError::Unknown("cannot receive chunk".into()), Code::Unknown),
        ];

        for (error, code) in cases {
            let status: tonic::Status = error.into();
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_status_keeps_message() {
        let status: tonic::Status = CatalogError::ResourceExhausted {
            size: 1_048_577,
            limit: 1_048_576,
        }
        .into();
        assert_eq!(status.message(), "image is too large: 1048577 > 1048576");
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: CatalogError = std::io::Error::other("no space left").into();
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}

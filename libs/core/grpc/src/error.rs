use std::time::Duration;
use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while building channels or reading transport metadata
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Failed to establish connection
  #[error("Connection failed: {0}")]
  ConnectionFailed(tonic::transport::Error),

  /// Connection timeout
  #[error("Connection timeout after {0:?}")]
  ConnectionTimeout(Duration),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  /// Malformed `grpc-timeout` header
  #[error("Invalid grpc-timeout value: {0:?}")]
  InvalidTimeout(String),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri(_) | GrpcError::InvalidConfig(_) | GrpcError::InvalidTimeout(_) => {
        tonic::Status::invalid_argument(err.to_string())
      }
      GrpcError::ConnectionFailed(_) | GrpcError::ConnectionTimeout(_) => {
        tonic::Status::unavailable(err.to_string())
      }
    }
  }
}

// ============================================================================
// Generic Error Conversion Traits
// ============================================================================

/// Extension trait for `Result<T, String>` produced by proto → domain conversions
///
/// # Example
/// ```ignore
/// use grpc_client::ToTonicResult;
///
/// let laptop: Laptop = proto.try_into().to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
  /// Convert the error to a `tonic::Status` with INVALID_ARGUMENT code
  fn to_tonic(self) -> Result<T, tonic::Status>;

  /// Convert the error to a `tonic::Status` with a custom code
  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status>;
}

impl<T> ToTonicResult<T> for Result<T, String> {
  fn to_tonic(self) -> Result<T, tonic::Status> {
    self.map_err(tonic::Status::invalid_argument)
  }

  fn to_tonic_with_code(self, code: tonic::Code) -> Result<T, tonic::Status> {
    self.map_err(|e| tonic::Status::new(code, e))
  }
}

/// Extension trait for turning a missing proto field into a `tonic::Status`
///
/// # Example
/// ```ignore
/// use grpc_client::ToTonicOption;
///
/// let laptop = request.laptop.ok_or_invalid("laptop is required")?;
/// ```
pub trait ToTonicOption<T> {
  /// Convert None to a `tonic::Status` with NOT_FOUND code
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status>;

  /// Convert None to a `tonic::Status` with INVALID_ARGUMENT code
  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status>;
}

impl<T> ToTonicOption<T> for Option<T> {
  fn ok_or_not_found(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::not_found(message.into()))
  }

  fn ok_or_invalid(self, message: impl Into<String>) -> Result<T, tonic::Status> {
    self.ok_or_else(|| tonic::Status::invalid_argument(message.into()))
  }
}

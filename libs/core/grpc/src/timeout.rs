//! `grpc-timeout` header parsing.
//!
//! The header carries at most eight ASCII digits followed by a unit:
//! `H` hours, `M` minutes, `S` seconds, `m` milliseconds, `u` microseconds, `n` nanoseconds.

use std::time::Duration;

use tonic::metadata::MetadataMap;

use crate::error::{GrpcError, GrpcResult};

pub const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

const MAX_DIGITS: usize = 8;

/// Parse a raw `grpc-timeout` value such as `"250m"` or `"5S"`.
pub fn parse_grpc_timeout(value: &str) -> GrpcResult<Duration> {
  let invalid = || GrpcError::InvalidTimeout(value.to_string());

  let unit = value.chars().last().ok_or_else(invalid)?;
  let digits = &value[..value.len() - unit.len_utf8()];
  if digits.is_empty() || digits.len() > MAX_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return Err(invalid());
  }
  let amount: u64 = digits.parse().map_err(|_| invalid())?;

  let duration = match unit {
    'H' => Duration::from_secs(amount * 60 * 60),
    'M' => Duration::from_secs(amount * 60),
    'S' => Duration::from_secs(amount),
    'm' => Duration::from_millis(amount),
    'u' => Duration::from_micros(amount),
    'n' => Duration::from_nanos(amount),
    _ => return Err(invalid()),
  };
  Ok(duration)
}

/// Timeout requested by the caller, if any.
///
/// A malformed header is logged and treated as absent.
pub fn request_deadline(metadata: &MetadataMap) -> Option<Duration> {
  let raw = metadata.get(GRPC_TIMEOUT_HEADER)?.to_str().ok()?;
  match parse_grpc_timeout(raw) {
    Ok(duration) => Some(duration),
    Err(error) => {
      tracing::warn!(target: "grpc_client", %error, "ignoring grpc-timeout header");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_every_unit() {
    assert_eq!(parse_grpc_timeout("2H").unwrap(), Duration::from_secs(7200));
    assert_eq!(parse_grpc_timeout("3M").unwrap(), Duration::from_secs(180));
    assert_eq!(parse_grpc_timeout("5S").unwrap(), Duration::from_secs(5));
    assert_eq!(parse_grpc_timeout("250m").unwrap(), Duration::from_millis(250));
    assert_eq!(parse_grpc_timeout("40u").unwrap(), Duration::from_micros(40));
    assert_eq!(parse_grpc_timeout("99999999n").unwrap(), Duration::from_nanos(99_999_999));
  }

  #[test]
  fn test_parse_rejects_malformed_values() {
    for raw in ["", "S", "10", "10x", "-5S", "123456789S", "1.5S"] {
      assert!(
        matches!(parse_grpc_timeout(raw), Err(GrpcError::InvalidTimeout(_))),
        "{raw:?} should be rejected"
      );
    }
  }

  #[test]
  fn test_request_deadline_from_metadata() {
    let mut metadata = MetadataMap::new();
    assert_eq!(request_deadline(&metadata), None);

    metadata.insert(GRPC_TIMEOUT_HEADER, "100m".parse().unwrap());
    assert_eq!(request_deadline(&metadata), Some(Duration::from_millis(100)));

    metadata.insert(GRPC_TIMEOUT_HEADER, "soon".parse().unwrap());
    assert_eq!(request_deadline(&metadata), None);
  }
}

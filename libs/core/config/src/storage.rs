use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::path::PathBuf;

/// Default upload cap: 1 MiB.
pub const DEFAULT_MAX_IMAGE_SIZE: usize = 1 << 20;

/// Where uploaded images land and how big they may be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageStorageConfig {
    pub image_dir: PathBuf,
    pub max_image_size: usize,
}

impl ImageStorageConfig {
    pub fn new(image_dir: impl Into<PathBuf>, max_image_size: usize) -> Self {
        Self {
            image_dir: image_dir.into(),
            max_image_size,
        }
    }
}

impl Default for ImageStorageConfig {
    fn default() -> Self {
        Self::new("img", DEFAULT_MAX_IMAGE_SIZE)
    }
}

impl FromEnv for ImageStorageConfig {
    /// - `IMAGE_DIR`: defaults to `img`
    /// - `MAX_IMAGE_SIZE`: bytes, defaults to 1048576, must be non-zero and fit in a `u32`
    fn from_env() -> Result<Self, ConfigError> {
        let image_dir = env_or_default("IMAGE_DIR", "img");
        if image_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "IMAGE_DIR".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let max_image_size = env_parse("MAX_IMAGE_SIZE", DEFAULT_MAX_IMAGE_SIZE)?;
        if max_image_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_IMAGE_SIZE".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if u32::try_from(max_image_size).is_err() {
            return Err(ConfigError::InvalidValue {
                key: "MAX_IMAGE_SIZE".to_string(),
                reason: format!("must not exceed {} bytes", u32::MAX),
            });
        }

        Ok(Self::new(image_dir, max_image_size))
    }
}

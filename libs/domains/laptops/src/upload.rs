//! Chunked image upload assembly.
//!
//! ```text
//! AwaitingMetadata ──begin──▶ Receiving ──finish──▶ Finalizing
//!         │                      │
//!         └───────abort──────────┴──────▶ Aborted
//! ```

use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    AwaitingMetadata,
    Receiving,
    Finalizing,
    Aborted,
}

/// Bytes of one upload, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledImage {
    pub laptop_id: String,
    pub image_type: String,
    pub data: Vec<u8>,
}

impl AssembledImage {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// One client-streaming upload
///
/// Chunks that would push the total past `max_size` are refused before they are
/// buffered, and the session aborts.
#[derive(Debug)]
pub struct UploadSession {
    state: UploadState,
    laptop_id: String,
    image_type: String,
    buffer: Vec<u8>,
    max_size: usize,
}

impl UploadSession {
    pub fn new(max_size: usize) -> Self {
        Self {
            state: UploadState::AwaitingMetadata,
            laptop_id: String::new(),
            image_type: String::new(),
            buffer: Vec::new(),
            max_size,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn laptop_id(&self) -> &str {
        &self.laptop_id
    }

    pub fn image_type(&self) -> &str {
        &self.image_type
    }

    /// Bytes accepted so far.
    pub fn received(&self) -> usize {
        self.buffer.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Record the upload target. The caller has already checked that the laptop exists.
    pub fn begin(
        &mut self,
        laptop_id: impl Into<String>,
        image_type: impl Into<String>,
    ) -> CatalogResult<()> {
        self.expect_state(UploadState::AwaitingMetadata, "image info")?;

        let image_type = image_type.into();
        if image_type.contains(['/', '\\']) || image_type.contains("..") {
            self.abort();
            return Err(CatalogError::invalid(format!(
                "image type {image_type:?} is not a file extension"
            )));
        }

        self.laptop_id = laptop_id.into();
        self.image_type = image_type;
        self.state = UploadState::Receiving;
        Ok(())
    }

    /// Append one chunk and return the running total.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> CatalogResult<usize> {
        self.expect_state(UploadState::Receiving, "chunk data")?;

        let size = self.buffer.len() + chunk.len();
        if size > self.max_size {
            self.abort();
            return Err(CatalogError::ResourceExhausted {
                size,
                limit: self.max_size,
            });
        }

        self.buffer.extend_from_slice(chunk);
        debug!(
            laptop_id = %self.laptop_id,
            chunk_size = chunk.len(),
            total = size,
            "received a chunk"
        );
        Ok(size)
    }

    /// Close the session and hand over its bytes.
    pub fn finish(&mut self) -> CatalogResult<AssembledImage> {
        self.expect_state(UploadState::Receiving, "end of upload")?;
        self.state = UploadState::Finalizing;
        Ok(AssembledImage {
            laptop_id: std::mem::take(&mut self.laptop_id),
            image_type: std::mem::take(&mut self.image_type),
            data: std::mem::take(&mut self.buffer),
        })
    }

    /// Drop buffered bytes. Nothing from an aborted session is persisted.
    pub fn abort(&mut self) {
        self.state = UploadState::Aborted;
        self.buffer = Vec::new();
    }

    fn expect_state(&mut self, expected: UploadState, what: &str) -> CatalogResult<()> {
        if self.state == expected {
            return Ok(());
        }
        let current = self.state;
        if current != UploadState::Aborted {
            self.abort();
        }
        Err(CatalogError::invalid(format!(
            "unexpected {what} while upload is {current:?}"
        )))
    }
}

use serde::{Deserialize, Serialize};

use crate::SplitterError;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SplitterConfig {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_chunk_overlap() -> usize {
    DEFAULT_CHUNK_OVERLAP
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl SplitterConfig {
    /// Check the `chunk_size > chunk_overlap` invariant without building a splitter.
    ///
    /// # Errors
    ///
    /// Returns [`SplitterError::ZeroChunkSize`] for a zero chunk size and
    /// [`SplitterError::OverlapTooLarge`] when the overlap is not strictly
    /// smaller than the chunk size.
    pub fn validate(&self) -> Result<(), SplitterError> {
        if self.chunk_size == 0 {
            return Err(SplitterError::ZeroChunkSize);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(SplitterError::OverlapTooLarge {
                chunk_size: self.chunk_size,
                chunk_overlap: self.chunk_overlap,
            });
        }
        Ok(())
    }
}

//! Character-based text splitting into bounded, overlapping chunks.
//!
//! [`CharacterTextSplitter`] cuts each document into windows of at most
//! `chunk_size` characters, preferring to end a window on whitespace, and
//! starts the next window `chunk_overlap` characters before the previous one
//! ended. All lengths and offsets are counted in `char`s.

pub mod character;
pub mod config;
pub mod error;
pub mod types;

pub use character::CharacterTextSplitter;
pub use config::SplitterConfig;
pub use error::SplitterError;
pub use types::{Chunk, ChunkSpan};

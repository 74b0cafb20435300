use serde::Serialize;

/// Half-open `[start, end)` range of a chunk, in characters from the start of its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkSpan {
    pub start: usize,
    pub end: usize,
}

impl ChunkSpan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A chunk together with the document it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Position of the source document in the input sequence.
    pub document_index: usize,
    #[serde(flatten)]
    pub span: ChunkSpan,
    pub content: String,
}

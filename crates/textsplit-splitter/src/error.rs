/// Invalid splitter parameters, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitterError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error(
        "chunk size must be greater than chunk overlap (chunk_size={chunk_size}, chunk_overlap={chunk_overlap})"
    )]
    OverlapTooLarge {
        chunk_size: usize,
        chunk_overlap: usize,
    },
}

use crate::config::SplitterConfig;
use crate::error::SplitterError;
use crate::types::{Chunk, ChunkSpan};

/// Characters a chunk boundary may be moved back onto.
const BOUNDARY_CHARS: [char; 3] = [' ', '\t', '\n'];

/// Splits text into chunks of at most `chunk_size` characters, each starting
/// `chunk_overlap` characters before the end of the previous one.
///
/// A chunk that does not reach the end of its document is shortened so that
/// it ends right before a space, tab, or newline. When a whole window holds
/// no such character the chunk is cut at exactly `chunk_size` (a forced
/// break). The last chunk of a document is never adjusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        let config = SplitterConfig::default();
        Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}

impl TryFrom<SplitterConfig> for CharacterTextSplitter {
    type Error = SplitterError;

    fn try_from(config: SplitterConfig) -> Result<Self, Self::Error> {
        Self::from_config(&config)
    }
}

impl CharacterTextSplitter {
    /// # Errors
    ///
    /// Returns [`SplitterError`] if `chunk_size` is zero or not strictly
    /// greater than `chunk_overlap`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, SplitterError> {
        Self::from_config(&SplitterConfig {
            chunk_size,
            chunk_overlap,
        })
    }

    /// # Errors
    ///
    /// Returns [`SplitterError`] if the configuration is invalid.
    pub fn from_config(config: &SplitterConfig) -> Result<Self, SplitterError> {
        config.validate()?;
        Ok(Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        })
    }

    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[must_use]
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split one document into chunk strings.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        self.walk(&chars)
            .into_iter()
            .map(|span| chars[span.start..span.end].iter().collect())
            .collect()
    }

    /// Character ranges of the chunks [`split`](Self::split) would return.
    #[must_use]
    pub fn split_spans(&self, text: &str) -> Vec<ChunkSpan> {
        let chars: Vec<char> = text.chars().collect();
        self.walk(&chars)
    }

    /// Split every document in order and concatenate the results.
    ///
    /// Chunks never cross document boundaries.
    #[must_use]
    pub fn split_texts<I>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        texts
            .into_iter()
            .flat_map(|text| self.split(text.as_ref()))
            .collect()
    }

    /// Like [`split_texts`](Self::split_texts), keeping the source document
    /// index and character range of each chunk.
    #[must_use]
    pub fn split_texts_with_spans<I>(&self, texts: I) -> Vec<Chunk>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut chunks = Vec::new();
        for (document_index, text) in texts.into_iter().enumerate() {
            let chars: Vec<char> = text.as_ref().chars().collect();
            chunks.extend(self.walk(&chars).into_iter().map(|span| Chunk {
                document_index,
                span,
                content: chars[span.start..span.end].iter().collect(),
            }));
        }
        chunks
    }

    fn walk(&self, chars: &[char]) -> Vec<ChunkSpan> {
        let (spans, forced_breaks) = self.boundaries(chars);
        if forced_breaks > 0 {
            tracing::warn!(
                forced_breaks,
                chunk_size = self.chunk_size,
                "no whitespace within chunk window, split mid-word"
            );
        }
        spans
    }

    /// Chunk ranges plus the number of chunks cut mid-word.
    fn boundaries(&self, chars: &[char]) -> (Vec<ChunkSpan>, usize) {
        let len = chars.len();
        let mut spans = Vec::new();
        let mut forced_breaks = 0usize;
        let mut start = 0;

        while start < len {
            let mut end = start + self.chunk_size;
            if end < len {
                let hard_end = end;
                while end > start && !BOUNDARY_CHARS.contains(&chars[end]) {
                    end -= 1;
                }
                if end == start {
                    end = hard_end;
                    forced_breaks += 1;
                }
            } else {
                end = len;
            }

            spans.push(ChunkSpan { start, end });
            if end == len {
                break;
            }

            // A boundary pulled back to within `chunk_overlap` of `start`
            // would stall the cursor; continue from `end` in that case.
            let next = end.saturating_sub(self.chunk_overlap);
            start = if next > start { next } else { end };
        }

        (spans, forced_breaks)
    }
}

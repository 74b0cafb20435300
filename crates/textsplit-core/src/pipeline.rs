use std::path::Path;

use textsplit_loader::{DocumentLoader, DocumentMetadata, DocumentSource, encoding_for_label};
use textsplit_splitter::{CharacterTextSplitter, Chunk};

use crate::{Config, PipelineError};

/// Documents read from a path and the chunks cut from them.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// One entry per loaded document; `Chunk::document_index` points into it.
    pub documents: Vec<DocumentMetadata>,
    pub chunks: Vec<Chunk>,
}

impl PipelineOutput {
    #[must_use]
    pub fn source_of(&self, chunk: &Chunk) -> Option<&str> {
        self.documents
            .get(chunk.document_index)
            .map(|m| m.source.as_str())
    }
}

pub struct ChunkingPipeline {
    splitter: CharacterTextSplitter,
    source: DocumentSource,
}

impl ChunkingPipeline {
    #[must_use]
    pub fn new(splitter: CharacterTextSplitter, source: DocumentSource) -> Self {
        Self { splitter, source }
    }

    /// # Errors
    ///
    /// Returns [`PipelineError::Splitter`] if the splitter parameters are invalid
    /// and [`PipelineError::Load`] if the loader encoding is unknown.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let splitter = CharacterTextSplitter::from_config(&config.splitter)?;
        let encoding = encoding_for_label(&config.loader.encoding)?;
        let source = DocumentSource::new(config.loader.max_file_size).with_encoding(encoding);
        Ok(Self::new(splitter, source))
    }

    #[must_use]
    pub fn splitter(&self) -> &CharacterTextSplitter {
        &self.splitter
    }

    /// Load every document under `path` and split them in load order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Load`] if the path is invalid or any file fails to load.
    pub async fn run(&self, path: &Path) -> Result<PipelineOutput, PipelineError> {
        let loaded = self.source.load(path).await?;

        let (documents, texts): (Vec<_>, Vec<_>) = loaded
            .into_iter()
            .map(|doc| (doc.metadata, doc.content))
            .unzip();
        let chunks = self.splitter.split_texts_with_spans(&texts);

        tracing::info!(
            path = %path.display(),
            documents = documents.len(),
            chunks = chunks.len(),
            chunk_size = self.splitter.chunk_size(),
            chunk_overlap = self.splitter.chunk_overlap(),
            "split documents"
        );

        Ok(PipelineOutput { documents, chunks })
    }
}

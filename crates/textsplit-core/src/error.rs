use textsplit_loader::LoadError;
use textsplit_splitter::SplitterError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid splitter configuration: {0}")]
    Splitter(#[from] SplitterError),

    #[error("failed to load documents: {0}")]
    Load(#[from] LoadError),
}

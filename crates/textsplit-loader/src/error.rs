use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path is neither a file nor a directory: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("file too large: {0} bytes")]
    FileTooLarge(u64),

    #[error("file is not valid {encoding}: {}", .path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[cfg(feature = "pdf")]
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),
}

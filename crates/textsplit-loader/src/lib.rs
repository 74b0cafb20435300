//! Document loading: `.txt` and `.pdf` files, alone or from a directory tree.

pub mod error;
pub mod loader;
pub mod source;
pub mod types;

pub use error::LoadError;
pub use encoding_rs::Encoding;
pub use loader::{DEFAULT_ENCODING, TextLoader, encoding_for_label};
pub use source::DocumentSource;
pub use types::{Document, DocumentMetadata};

#[cfg(feature = "pdf")]
pub use loader::PdfLoader;

/// Default maximum file size: 50 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

pub trait DocumentLoader: Send + Sync {
    fn load(
        &self,
        path: &std::path::Path,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<Document>, LoadError>> + Send + '_>,
    >;

    fn supported_extensions(&self) -> &[&str];
}

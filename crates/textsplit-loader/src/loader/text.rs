use std::borrow::Cow;
use std::path::Path;
use std::pin::Pin;

use encoding_rs::Encoding;

use super::super::{DEFAULT_MAX_FILE_SIZE, Document, DocumentLoader, DocumentMetadata, LoadError};

/// Label of the encoding text files are read with unless configured otherwise.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Resolve a WHATWG encoding label such as `utf-8`, `latin1` or `shift_jis`.
///
/// # Errors
///
/// Returns [`LoadError::UnknownEncoding`] if the label names no known encoding.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding, LoadError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| LoadError::UnknownEncoding(label.to_owned()))
}

pub struct TextLoader {
    pub max_file_size: u64,
    /// Bytes that are malformed in this encoding fail the load.
    pub encoding: &'static Encoding,
}

impl Default for TextLoader {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl DocumentLoader for TextLoader {
    fn load(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<Document>, LoadError>> + Send + '_>>
    {
        let path = path.to_path_buf();
        let max_size = self.max_file_size;
        let encoding = self.encoding;
        Box::pin(async move {
            let path = tokio::fs::canonicalize(&path).await?;

            let meta = tokio::fs::metadata(&path).await?;
            if meta.len() > max_size {
                return Err(LoadError::FileTooLarge(meta.len()));
            }

            let bytes = tokio::fs::read(&path).await?;
            let content = encoding
                .decode_without_bom_handling_and_without_replacement(&bytes)
                .map(Cow::into_owned)
                .ok_or_else(|| LoadError::Decode {
                    path: path.clone(),
                    encoding: encoding.name(),
                })?;
            tracing::debug!(
                path = %path.display(),
                bytes = bytes.len(),
                encoding = encoding.name(),
                "loaded text file"
            );

            Ok(vec![Document {
                content,
                metadata: DocumentMetadata {
                    source: path.display().to_string(),
                    content_type: "text/plain".to_owned(),
                },
            }])
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }
}

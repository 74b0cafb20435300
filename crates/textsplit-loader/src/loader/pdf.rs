use std::path::Path;
use std::pin::Pin;

use super::super::{DEFAULT_MAX_FILE_SIZE, Document, DocumentLoader, DocumentMetadata, LoadError};

/// Extracts the text of every page and joins the pages with a single space.
pub struct PdfLoader {
    pub max_file_size: u64,
}

impl Default for PdfLoader {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

fn join_pages(pages: &[String]) -> String {
    pages.join(" ")
}

impl DocumentLoader for PdfLoader {
    fn load(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<Document>, LoadError>> + Send + '_>>
    {
        let path = path.to_path_buf();
        let max_size = self.max_file_size;
        Box::pin(async move {
            let path = tokio::fs::canonicalize(&path).await?;

            let meta = tokio::fs::metadata(&path).await?;
            if meta.len() > max_size {
                return Err(LoadError::FileTooLarge(meta.len()));
            }

            let source = path.display().to_string();
            let path_buf = path.clone();
            let pages = tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_by_pages(&path_buf)
                    .map_err(|e| LoadError::Pdf(e.to_string()))
            })
            .await
            .map_err(|e| LoadError::Io(std::io::Error::other(e)))??;

            tracing::debug!(path = %source, pages = pages.len(), "extracted PDF text");

            Ok(vec![Document {
                content: join_pages(&pages),
                metadata: DocumentMetadata {
                    source,
                    content_type: "application/pdf".to_owned(),
                },
            }])
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }
}

use std::path::{Path, PathBuf};
use std::pin::Pin;

#[cfg(feature = "pdf")]
use crate::PdfLoader;
use crate::{DEFAULT_MAX_FILE_SIZE, Document, DocumentLoader, Encoding, LoadError, TextLoader};

#[cfg(feature = "pdf")]
const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "pdf"];
#[cfg(not(feature = "pdf"))]
const SUPPORTED_EXTENSIONS: &[&str] = &["txt"];

const PDF_ENABLED: bool = cfg!(feature = "pdf");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Pdf,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => Some(Format::Text),
        Some("pdf") => Some(Format::Pdf),
        _ => None,
    }
}

/// Every regular file under `root`, hidden files included, sorted by path.
///
/// Symlinks to files are kept; symlinked directories are not descended into.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in ignore::WalkBuilder::new(root).standard_filters(false).build() {
        let entry = entry?;
        let is_file = match entry.file_type() {
            Some(ft) if ft.is_symlink() => match std::fs::metadata(entry.path()) {
                Ok(meta) => meta.is_file(),
                Err(e) => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        "skipping broken symlink: {e}"
                    );
                    false
                }
            },
            Some(ft) => ft.is_file(),
            None => false,
        };
        if is_file {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Loads a single `.txt`/`.pdf` file, or every such file below a directory.
///
/// Each call returns a fresh list; nothing is retained between calls.
pub struct DocumentSource {
    text: TextLoader,
    #[cfg(feature = "pdf")]
    pdf: PdfLoader,
}

impl Default for DocumentSource {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl DocumentSource {
    #[must_use]
    pub fn new(max_file_size: u64) -> Self {
        Self {
            text: TextLoader {
                max_file_size,
                ..TextLoader::default()
            },
            #[cfg(feature = "pdf")]
            pdf: PdfLoader { max_file_size },
        }
    }

    /// Decode `.txt` files with `encoding` instead of UTF-8.
    #[must_use]
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.text.encoding = encoding;
        self
    }

    /// Load `path` and keep only the text of each document.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentLoader::load`].
    pub async fn load_texts(&self, path: &Path) -> Result<Vec<String>, LoadError> {
        let documents = self.load(path).await?;
        Ok(documents.into_iter().map(|d| d.content).collect())
    }

    async fn load_file(&self, path: &Path, format: Format) -> Result<Vec<Document>, LoadError> {
        match format {
            Format::Text => self.text.load(path).await,
            #[cfg(feature = "pdf")]
            Format::Pdf => self.pdf.load(path).await,
            #[cfg(not(feature = "pdf"))]
            Format::Pdf => Err(LoadError::UnsupportedFormat(format!(
                "{}: PDF support is not enabled",
                path.display()
            ))),
        }
    }

    async fn load_directory(&self, root: &Path) -> Result<Vec<Document>, LoadError> {
        let walk_root = root.to_path_buf();
        let files = tokio::task::spawn_blocking(move || collect_files(&walk_root))
            .await
            .map_err(|e| LoadError::Io(std::io::Error::other(e)))??;

        let mut documents = Vec::new();
        for path in files {
            let Some(format) = format_of(&path) else {
                tracing::debug!(path = %path.display(), "skipping unsupported file");
                continue;
            };
            if format == Format::Pdf && !PDF_ENABLED {
                tracing::warn!(path = %path.display(), "skipping PDF, support is not enabled");
                continue;
            }
            documents.extend(self.load_file(&path, format).await?);
        }

        tracing::info!(
            root = %root.display(),
            documents = documents.len(),
            "loaded directory"
        );
        Ok(documents)
    }
}

impl DocumentLoader for DocumentSource {
    fn load(
        &self,
        path: &Path,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<Document>, LoadError>> + Send + '_>>
    {
        let path = path.to_path_buf();
        Box::pin(async move {
            let meta = match tokio::fs::metadata(&path).await {
                Ok(meta) => meta,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(LoadError::InvalidPath(path));
                }
                Err(e) => return Err(e.into()),
            };

            if meta.is_dir() {
                return self.load_directory(&path).await;
            }
            if !meta.is_file() {
                return Err(LoadError::InvalidPath(path));
            }

            match format_of(&path) {
                Some(format) => self.load_file(&path, format).await,
                None => Err(LoadError::UnsupportedFormat(format!(
                    "{} is neither a .txt nor a .pdf file",
                    path.display()
                ))),
            }
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        SUPPORTED_EXTENSIONS
    }
}

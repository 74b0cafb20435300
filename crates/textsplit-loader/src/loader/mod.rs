#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfLoader;
pub use text::{DEFAULT_ENCODING, TextLoader, encoding_for_label};

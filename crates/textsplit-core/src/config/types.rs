use serde::{Deserialize, Serialize};
pub use textsplit_splitter::SplitterConfig;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoaderConfig {
    /// Files larger than this many bytes are rejected.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Encoding label used to decode `.txt` files (`utf-8`, `latin1`, ...).
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_max_file_size() -> u64 {
    textsplit_loader::DEFAULT_MAX_FILE_SIZE
}

fn default_encoding() -> String {
    textsplit_loader::DEFAULT_ENCODING.to_owned()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            encoding: default_encoding(),
        }
    }
}

use super::Config;

impl Config {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("TEXTSPLIT_CHUNK_SIZE") {
            if let Ok(size) = v.parse::<usize>() {
                self.splitter.chunk_size = size;
            } else {
                tracing::warn!("ignoring invalid TEXTSPLIT_CHUNK_SIZE value: {v}");
            }
        }
        if let Ok(v) = std::env::var("TEXTSPLIT_CHUNK_OVERLAP") {
            if let Ok(overlap) = v.parse::<usize>() {
                self.splitter.chunk_overlap = overlap;
            } else {
                tracing::warn!("ignoring invalid TEXTSPLIT_CHUNK_OVERLAP value: {v}");
            }
        }
        if let Ok(v) = std::env::var("TEXTSPLIT_MAX_FILE_SIZE") {
            if let Ok(bytes) = v.parse::<u64>() {
                self.loader.max_file_size = bytes;
            } else {
                tracing::warn!("ignoring invalid TEXTSPLIT_MAX_FILE_SIZE value: {v}");
            }
        }
        if let Ok(v) = std::env::var("TEXTSPLIT_ENCODING") {
            self.loader.encoding = v;
        }
    }
}

use std::io::Write;

use serial_test::serial;

use super::*;

const ENV_KEYS: [&str; 4] = [
    "TEXTSPLIT_CHUNK_SIZE",
    "TEXTSPLIT_CHUNK_OVERLAP",
    "TEXTSPLIT_MAX_FILE_SIZE",
    "TEXTSPLIT_ENCODING",
];

fn clear_env() {
    for key in ENV_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.splitter.chunk_size, 1000);
    assert_eq!(config.splitter.chunk_overlap, 200);
    assert_eq!(config.loader.max_file_size, 50 * 1024 * 1024);
    assert_eq!(config.loader.encoding, "utf-8");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn defaults_when_file_missing() {
    clear_env();
    let config = Config::load(Path::new("/nonexistent/textsplit.toml")).unwrap();
    assert_eq!(config.splitter.chunk_size, 1000);
    assert_eq!(config.splitter.chunk_overlap, 200);
}

#[test]
#[serial]
fn parse_toml_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[splitter]
chunk_size = 512
chunk_overlap = 64

[loader]
max_file_size = 1024
encoding = "windows-1252"
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.splitter.chunk_size, 512);
    assert_eq!(config.splitter.chunk_overlap, 64);
    assert_eq!(config.loader.max_file_size, 1024);
    assert_eq!(config.loader.encoding, "windows-1252");
}

#[test]
#[serial]
fn partial_sections_use_defaults() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[splitter]\nchunk_size = 300\n").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.splitter.chunk_size, 300);
    assert_eq!(config.splitter.chunk_overlap, 200);
    assert_eq!(config.loader.max_file_size, 50 * 1024 * 1024);
}

#[test]
#[serial]
fn malformed_toml_is_an_error() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[splitter\nchunk_size = ").unwrap();

    assert!(Config::load(file.path()).is_err());
}

#[test]
#[serial]
fn negative_overlap_is_a_parse_error() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[splitter]\nchunk_overlap = -5\n").unwrap();

    assert!(Config::load(file.path()).is_err());
}

#[test]
#[serial]
fn env_overrides_file_values() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[splitter]\nchunk_size = 512\nchunk_overlap = 64\n").unwrap();

    unsafe {
        std::env::set_var("TEXTSPLIT_CHUNK_SIZE", "2000");
        std::env::set_var("TEXTSPLIT_CHUNK_OVERLAP", "100");
        std::env::set_var("TEXTSPLIT_MAX_FILE_SIZE", "4096");
        std::env::set_var("TEXTSPLIT_ENCODING", "latin1");
    }
    let config = Config::load(file.path()).unwrap();
    clear_env();

    assert_eq!(config.splitter.chunk_size, 2000);
    assert_eq!(config.splitter.chunk_overlap, 100);
    assert_eq!(config.loader.max_file_size, 4096);
    assert_eq!(config.loader.encoding, "latin1");
}

#[test]
#[serial]
fn invalid_env_values_are_ignored() {
    clear_env();
    unsafe {
        std::env::set_var("TEXTSPLIT_CHUNK_SIZE", "large");
        std::env::set_var("TEXTSPLIT_CHUNK_OVERLAP", "-3");
        std::env::set_var("TEXTSPLIT_MAX_FILE_SIZE", "lots");
    }
    let config = Config::load(Path::new("/nonexistent/textsplit.toml")).unwrap();
    clear_env();

    assert_eq!(config.splitter.chunk_size, 1000);
    assert_eq!(config.splitter.chunk_overlap, 200);
    assert_eq!(config.loader.max_file_size, 50 * 1024 * 1024);
}

#[test]
fn validate_rejects_overlap_not_below_size() {
    let config = Config {
        splitter: SplitterConfig {
            chunk_size: 100,
            chunk_overlap: 100,
        },
        loader: LoaderConfig::default(),
    };
    let err = config.validate().unwrap_err();
    assert!(format!("{err:#}").contains("chunk size must be greater than chunk overlap"));
}

#[test]
fn validate_accepts_overlap_one_below_size() {
    let config = Config {
        splitter: SplitterConfig {
            chunk_size: 100,
            chunk_overlap: 99,
        },
        loader: LoaderConfig::default(),
    };
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_unknown_encoding() {
    let config = Config {
        loader: LoaderConfig {
            encoding: "klingon".to_owned(),
            ..LoaderConfig::default()
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("invalid [loader] configuration"));
    assert!(msg.contains("unknown text encoding: klingon"));
}

#[test]
#[serial]
fn invalid_max_file_size_keeps_other_overrides() {
    clear_env();
    unsafe {
        std::env::set_var("TEXTSPLIT_MAX_FILE_SIZE", "12MB");
        std::env::set_var("TEXTSPLIT_CHUNK_SIZE", "640");
    }
    let config = Config::load(Path::new("/nonexistent/textsplit.toml")).unwrap();
    clear_env();

    assert_eq!(config.loader.max_file_size, 50 * 1024 * 1024);
    assert_eq!(config.splitter.chunk_size, 640);
}

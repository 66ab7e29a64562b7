use crate::conf::{ConfigError, SiteConfig};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::str::FromStr;

#[test]
fn empty_document_yields_defaults() {
    let cfg = SiteConfig::from_str("").unwrap();

    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.server.root, PathBuf::from("."));
    assert_eq!(cfg.server.threads, None);
    assert!(cfg.server.banner);
    assert_eq!(
        cfg.static_files.index_files,
        vec!["index.html".to_string(), "index.htm".to_string()]
    );
    assert!(cfg.static_files.directory_listing);
    assert_eq!(cfg.static_files.small_file_threshold, 256 * 1024);
    assert_eq!(cfg.static_files.max_file_size, None);
}

#[test]
fn sections_override_individual_fields() {
    let cfg = SiteConfig::from_str(
        r#"
        [server]
        listen = "127.0.0.1:9000"
        root = "public"
        threads = 4

        [static_files]
        directory_listing = false
        max_file_size = 1024
        "#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
    assert_eq!(cfg.server.root, PathBuf::from("public"));
    assert_eq!(cfg.server.threads, Some(4));
    assert!(cfg.server.banner);
    assert!(!cfg.static_files.directory_listing);
    assert_eq!(cfg.static_files.max_file_size, Some(1024));
    assert_eq!(cfg.static_files.index_files.len(), 2);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SiteConfig::from_str(
        r#"
        [server]
        lisen = "127.0.0.1:9000"
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}

#[test]
fn from_file_reports_missing_file() {
    let err = SiteConfig::from_file(&PathBuf::from("/definitely/not/here.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }), "got {err:?}");
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

#[test]
fn public_url_uses_localhost_and_configured_port() {
    let cfg = SiteConfig::from_str(
        r#"
        [server]
        listen = "0.0.0.0:8123"
        "#,
    )
    .unwrap();

    assert_eq!(cfg.public_url().unwrap(), "http://localhost:8123");
}

//! Tests for `resolve`.

use super::parse;
use crate::cli::commands::resolve_arg;
use crate::cli::{Cli, CliCommand};
use argload_core::config::{ScopedConfig, FOLLOW_URLPARAM_KEY};
use argload_core::{register_uri_param_handler, LoadedContent, Session};
use clap::Parser;
use std::io::Write;

fn session(flag: Option<&str>) -> Session {
    let mut cfg = ScopedConfig::new();
    if let Some(flag) = flag {
        cfg.set(FOLLOW_URLPARAM_KEY, flag);
    }
    let mut session = Session::new(cfg);
    register_uri_param_handler(&mut session);
    session
}

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["argload", "resolve", "user-data", "file://init.sh"]) {
        CliCommand::Resolve {
            param,
            value,
            service,
            operation,
        } => {
            assert_eq!(param, "user-data");
            assert_eq!(value, "file://init.sh");
            assert_eq!(service, "cli");
            assert_eq!(operation, "resolve");
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_event_segments() {
    match parse(&[
        "argload",
        "resolve",
        "body",
        "fileb://blob.bin",
        "--service",
        "s3api",
        "--operation",
        "put-object",
    ]) {
        CliCommand::Resolve {
            service, operation, ..
        } => {
            assert_eq!(service, "s3api");
            assert_eq!(operation, "put-object");
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_requires_value() {
    assert!(Cli::try_parse_from(["argload", "resolve", "user-data"]).is_err());
}

#[test]
fn resolve_arg_loads_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"#!/bin/sh\necho hi\n").unwrap();
    f.flush().unwrap();
    let value = format!("file://{}", f.path().display());
    let got = resolve_arg(&session(None), "ec2", "run-instances", "user-data", &value).unwrap();
    assert_eq!(got, LoadedContent::Text("#!/bin/sh\necho hi\n".to_string()));
}

#[test]
fn resolve_arg_passes_plain_values_through() {
    let got = resolve_arg(&session(None), "cli", "resolve", "bucket", "my-bucket").unwrap();
    assert_eq!(got, LoadedContent::Text("my-bucket".to_string()));
}

#[test]
fn resolve_arg_keeps_urls_when_disabled() {
    let got = resolve_arg(
        &session(Some("false")),
        "cli",
        "resolve",
        "policy",
        "https://example.com/policy.json",
    )
    .unwrap();
    assert_eq!(
        got,
        LoadedContent::Text("https://example.com/policy.json".to_string())
    );
}

#[test]
fn resolve_arg_error_names_parameter_and_path() {
    let err = resolve_arg(
        &session(None),
        "cli",
        "resolve",
        "policy",
        "file://file/does/not/existsasdf.txt",
    )
    .unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.starts_with("Error parsing parameter 'policy'"), "{msg}");
    assert!(msg.contains("file/does/not/existsasdf.txt"), "{msg}");
}

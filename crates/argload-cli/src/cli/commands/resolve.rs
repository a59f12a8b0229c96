//! `argload resolve <param> <value>` – print what an argument value resolves to.

use anyhow::{Context, Result};
use argload_core::config::ScopedConfig;
use argload_core::{register_uri_param_handler, ArgValue, LoadedContent, Session};
use std::io::{self, Write};

pub fn run_resolve(
    cfg: ScopedConfig,
    service: &str,
    operation: &str,
    param: &str,
    value: &str,
) -> Result<()> {
    let mut session = Session::new(cfg);
    register_uri_param_handler(&mut session);

    let content = resolve_arg(&session, service, operation, param, value)?;
    let mut out = io::stdout().lock();
    out.write_all(content.as_bytes())?;
    if let LoadedContent::Text(text) = &content {
        if !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// The loaded content, or the value itself when nothing claimed it.
pub(crate) fn resolve_arg(
    session: &Session,
    service: &str,
    operation: &str,
    param: &str,
    value: &str,
) -> Result<LoadedContent> {
    let loaded = session
        .load_arg(service, operation, param, &ArgValue::from(value))
        .with_context(|| format!("Error parsing parameter '{param}'"))?;
    Ok(loaded.unwrap_or_else(|| LoadedContent::Text(value.to_string())))
}

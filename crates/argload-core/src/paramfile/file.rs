//! `file://` and `fileb://` loaders.

use super::Loader;
use crate::error::ResourceLoadingError;
use crate::value::LoadedContent;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Decode as UTF-8.
    Text,
    /// Return bytes as-is.
    Binary,
}

/// Reads a local file named by the value with its prefix stripped.
#[derive(Debug, Clone, Copy)]
pub struct FileLoader {
    mode: FileMode,
}

impl FileLoader {
    pub fn text() -> Self {
        Self {
            mode: FileMode::Text,
        }
    }

    pub fn binary() -> Self {
        Self {
            mode: FileMode::Binary,
        }
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }
}

impl Loader for FileLoader {
    fn load(&self, prefix: &str, value: &str) -> Result<LoadedContent, ResourceLoadingError> {
        let raw = value.strip_prefix(prefix).unwrap_or(value);
        read_file(&expand_path(raw), self.mode)
    }
}

fn read_file(path: &Path, mode: FileMode) -> Result<LoadedContent, ResourceLoadingError> {
    let bytes = fs::read(path).map_err(|e| {
        ResourceLoadingError::new(format!(
            "Unable to load paramfile {}: {}",
            path.display(),
            e
        ))
    })?;
    tracing::debug!("loaded {} bytes from {}", bytes.len(), path.display());

    match mode {
        FileMode::Binary => Ok(LoadedContent::Binary(bytes)),
        FileMode::Text => String::from_utf8(bytes)
            .map(LoadedContent::Text)
            .map_err(|e| {
                ResourceLoadingError::new(format!(
                    "Unable to load paramfile ({}), text contents could not be decoded \
                     ({}). If this is a binary file, use the fileb:// prefix instead of \
                     the file:// prefix.",
                    path.display(),
                    e.utf8_error()
                ))
            }),
    }
}

/// Expands a leading `~` to the home directory, then `$VAR` and `${VAR}`
/// references from the environment. Unknown variables are left as written.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = expand_vars_with(&expand_home(raw), |name| std::env::var(name).ok());
    PathBuf::from(expanded)
}

fn expand_home(raw: &str) -> String {
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return raw.to_string();
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home.display().to_string(),
        Some(home) => home.join(rest).display().to_string(),
        None => raw.to_string(),
    }
}

fn expand_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let name = &braced[..end];
                if let Some(v) = Some(name).filter(|n| !n.is_empty()).and_then(&lookup) {
                    out.push_str(&v);
                    rest = &braced[end + 1..];
                    continue;
                }
            }
        } else {
            let len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..len];
            if let Some(v) = Some(name).filter(|n| !n.is_empty()).and_then(&lookup) {
                out.push_str(&v);
                rest = &after[len..];
                continue;
            }
        }

        out.push('$');
        rest = after;
    }
    out.push_str(rest);
    out
}

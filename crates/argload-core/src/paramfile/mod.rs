//! Paramfile resolution: turn `file://`, `fileb://`, `http://` and `https://`
//! argument values into the content they reference.
//!
//! A [`PrefixMap`] associates literal prefixes with [`Loader`]s.
//! [`get_paramfile`] finds the first prefix the value starts with and asks
//! its loader for the content. Values that match nothing, or are not
//! strings, resolve to `None`.

mod file;
mod prefix_map;
mod remote;

pub use file::{expand_path, FileLoader, FileMode};
pub use prefix_map::PrefixMap;
pub use remote::UrlLoader;

use crate::error::ResourceLoadingError;
use crate::value::{ArgValue, LoadedContent};
use std::sync::Arc;

pub const FILE_PREFIX: &str = "file://";
pub const FILEB_PREFIX: &str = "fileb://";
pub const HTTP_PREFIX: &str = "http://";
pub const HTTPS_PREFIX: &str = "https://";

/// Prefixes that reach out over the network.
pub const REMOTE_PREFIXES: [&str; 2] = [HTTP_PREFIX, HTTPS_PREFIX];

/// Loads the resource behind a prefixed argument value.
///
/// `value` is the full argument value, prefix included; each loader decides
/// whether the prefix is part of the address (URLs) or not (file paths).
pub trait Loader: Send + Sync {
    fn load(&self, prefix: &str, value: &str) -> Result<LoadedContent, ResourceLoadingError>;
}

impl<F> Loader for F
where
    F: Fn(&str, &str) -> Result<LoadedContent, ResourceLoadingError> + Send + Sync,
{
    fn load(&self, prefix: &str, value: &str) -> Result<LoadedContent, ResourceLoadingError> {
        self(prefix, value)
    }
}

/// Wraps a closure as a shareable loader.
pub fn loader_fn<F>(f: F) -> Arc<dyn Loader>
where
    F: Fn(&str, &str) -> Result<LoadedContent, ResourceLoadingError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Resolves an argument value against `prefixes`.
///
/// Returns `Ok(None)` for non-string values and for strings that start with
/// no known prefix.
pub fn get_paramfile(
    value: &ArgValue,
    prefixes: &PrefixMap,
) -> Result<Option<LoadedContent>, ResourceLoadingError> {
    match value.as_str() {
        Some(s) => get_paramfile_str(s, prefixes),
        None => Ok(None),
    }
}

pub fn get_paramfile_str(
    value: &str,
    prefixes: &PrefixMap,
) -> Result<Option<LoadedContent>, ResourceLoadingError> {
    for (prefix, loader) in prefixes.iter() {
        if value.starts_with(prefix) {
            return loader.load(prefix, value).map(Some);
        }
    }
    Ok(None)
}

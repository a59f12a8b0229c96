//! Ordered prefix → loader table.

use super::{FileLoader, Loader, UrlLoader};
use super::{FILEB_PREFIX, FILE_PREFIX, HTTPS_PREFIX, HTTP_PREFIX, REMOTE_PREFIXES};
use crate::http::{CurlClient, HttpClient};
use std::fmt;
use std::sync::Arc;

/// Literal prefixes and their loaders, checked in insertion order.
#[derive(Clone, Default)]
pub struct PrefixMap {
    entries: Vec<(String, Arc<dyn Loader>)>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// `file://` (text) and `fileb://` (binary).
    pub fn local() -> Self {
        let mut map = Self::new();
        map.insert(FILE_PREFIX, Arc::new(FileLoader::text()));
        map.insert(FILEB_PREFIX, Arc::new(FileLoader::binary()));
        map
    }

    /// `http://` and `https://` over libcurl.
    pub fn remote() -> Self {
        Self::remote_with_client(Arc::new(CurlClient::default()))
    }

    pub fn remote_with_client(client: Arc<dyn HttpClient>) -> Self {
        let loader: Arc<dyn Loader> = Arc::new(UrlLoader::new(client));
        let mut map = Self::new();
        map.insert(HTTP_PREFIX, Arc::clone(&loader));
        map.insert(HTTPS_PREFIX, loader);
        map
    }

    /// All four prefixes: local first, then remote.
    pub fn default_map() -> Self {
        Self::default_with_client(Arc::new(CurlClient::default()))
    }

    pub fn default_with_client(client: Arc<dyn HttpClient>) -> Self {
        let mut map = Self::local();
        map.extend(Self::remote_with_client(client));
        map
    }

    /// Adds `prefix`, replacing the loader in place if it is already present.
    pub fn insert(&mut self, prefix: impl Into<String>, loader: Arc<dyn Loader>) {
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = loader,
            None => self.entries.push((prefix, loader)),
        }
    }

    pub fn remove(&mut self, prefix: &str) -> Option<Arc<dyn Loader>> {
        let idx = self.entries.iter().position(|(p, _)| p == prefix)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn extend(&mut self, other: PrefixMap) {
        for (prefix, loader) in other.entries {
            self.insert(prefix, loader);
        }
    }

    /// Copy of this map with `http://` and `https://` dropped.
    pub fn without_remote(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|(p, _)| !REMOTE_PREFIXES.contains(&p.as_str()))
            .cloned()
            .collect();
        Self { entries }
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.iter().any(|(p, _)| p == prefix)
    }

    pub fn get(&self, prefix: &str) -> Option<&Arc<dyn Loader>> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, loader)| loader)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Loader)> {
        self.entries.iter().map(|(p, l)| (p.as_str(), l.as_ref()))
    }
}

impl fmt::Debug for PrefixMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.prefixes()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceLoadingError;
    use crate::paramfile::loader_fn;
    use crate::value::LoadedContent;

    fn stub() -> Arc<dyn Loader> {
        loader_fn(|_, _| Err(ResourceLoadingError::new("stub")))
    }

    #[test]
    fn canonical_maps() {
        let local: Vec<_> = PrefixMap::local().prefixes().map(String::from).collect();
        assert_eq!(local, ["file://", "fileb://"]);
        let remote: Vec<_> = PrefixMap::remote().prefixes().map(String::from).collect();
        assert_eq!(remote, ["http://", "https://"]);
        let all = PrefixMap::default_map();
        assert_eq!(all.len(), 4);
        for p in ["file://", "fileb://", "http://", "https://"] {
            assert!(all.contains(p), "missing {p}");
        }
    }

    #[test]
    fn insert_replaces_existing_prefix() {
        let mut map = PrefixMap::local();
        map.insert(
            "file://",
            loader_fn(|_, _| Ok(LoadedContent::Text("replaced".to_string()))),
        );
        assert_eq!(map.len(), 2);
        let first: Vec<_> = map.prefixes().collect();
        assert_eq!(first, ["file://", "fileb://"]);
        let loaded = map.get("file://").unwrap().load("file://", "file://x").unwrap();
        assert_eq!(loaded.as_text(), Some("replaced"));
    }

    #[test]
    fn remove_and_without_remote() {
        let mut map = PrefixMap::default_map();
        assert!(map.remove("https://").is_some());
        assert!(map.remove("https://").is_none());
        assert_eq!(map.len(), 3);

        let local_only = PrefixMap::default_map().without_remote();
        let prefixes: Vec<_> = local_only.prefixes().collect();
        assert_eq!(prefixes, ["file://", "fileb://"]);
    }

    #[test]
    fn without_remote_keeps_custom_prefixes() {
        let mut map = PrefixMap::new();
        map.insert("foo", stub());
        map.insert("http://", stub());
        map.insert("bar", stub());
        let filtered = map.without_remote();
        let prefixes: Vec<_> = filtered.prefixes().collect();
        assert_eq!(prefixes, ["foo", "bar"]);
    }

    #[test]
    fn debug_lists_prefixes() {
        assert_eq!(
            format!("{:?}", PrefixMap::local()),
            r#"["file://", "fileb://"]"#
        );
    }
}

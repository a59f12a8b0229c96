//! URI argument handler: resolves `file://`, `fileb://`, `http://` and
//! `https://` argument values when a `load-cli-arg` event fires.

use crate::config::{FollowUrlParam, ScopedConfig};
use crate::events::{EventHandler, HandlerContext, HandlerResult, LoadArgEvent};
use crate::http::HttpClient;
use crate::paramfile::{get_paramfile, PrefixMap};
use crate::session::Session;
use crate::value::ArgValue;
use std::sync::Arc;

/// Pattern the handler is registered under: every service, operation and argument.
pub const LOAD_CLI_ARG_PATTERN: &str = "load-cli-arg.*.*.*";

/// Resolves prefixed argument values through a [`PrefixMap`].
///
/// With `cli_follow_urlparam = false` in the scoped config, `http://` and
/// `https://` are dropped from whichever map the handler holds, including a
/// caller-supplied one. Other prefixes are unaffected by the flag.
#[derive(Debug, Clone)]
pub struct UriArgumentHandler {
    prefixes: PrefixMap,
}

impl Default for UriArgumentHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UriArgumentHandler {
    /// `file://`, `fileb://`, `http://` and `https://`.
    pub fn new() -> Self {
        Self::with_prefixes(PrefixMap::default_map())
    }

    /// Default prefixes, fetching URLs through `client`.
    pub fn with_http_client(client: Arc<dyn HttpClient>) -> Self {
        Self::with_prefixes(PrefixMap::default_with_client(client))
    }

    /// Exactly `prefixes`, whatever they are.
    pub fn with_prefixes(prefixes: PrefixMap) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Prefixes offered to the resolver under `config`.
    pub fn prefix_map_for(&self, config: &ScopedConfig) -> PrefixMap {
        match config.follow_urlparam() {
            FollowUrlParam::Unset | FollowUrlParam::Enabled => self.prefixes.clone(),
            FollowUrlParam::Disabled => self.prefixes.without_remote(),
        }
    }

    pub fn resolve(&self, value: &ArgValue, config: &ScopedConfig) -> HandlerResult {
        get_paramfile(value, &self.prefix_map_for(config))
    }
}

impl EventHandler for UriArgumentHandler {
    fn handle(&self, event: &LoadArgEvent<'_>, ctx: &HandlerContext<'_>) -> HandlerResult {
        let loaded = self.resolve(event.value, ctx.config)?;
        if let Some(content) = &loaded {
            tracing::debug!(
                "substituted {} bytes for parameter {}",
                content.len(),
                event.param
            );
        }
        Ok(loaded)
    }
}

/// Subscribes a default [`UriArgumentHandler`] to every argument load on `session`.
pub fn register_uri_param_handler(session: &mut Session) {
    session.register(LOAD_CLI_ARG_PATTERN, Arc::new(UriArgumentHandler::new()));
}

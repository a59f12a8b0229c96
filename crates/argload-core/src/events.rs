//! Hierarchical publish/subscribe for argument-load events.
//!
//! Event names are dot-separated (`load-cli-arg.ec2.run-instances.user-data`).
//! A pattern matches a name when each of its segments equals the name's
//! segment at that position or is `*`. Patterns shorter than the name match
//! every descendant, so `load-cli-arg` sees all argument loads.

use crate::config::ScopedConfig;
use crate::error::ResourceLoadingError;
use crate::value::{ArgValue, LoadedContent};
use std::sync::Arc;

/// Payload of a per-argument load event.
#[derive(Debug, Clone, Copy)]
pub struct LoadArgEvent<'a> {
    /// Argument name as typed on the command line, without dashes.
    pub param: &'a str,
    pub value: &'a ArgValue,
}

/// Read-only session state handed to every handler.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub config: &'a ScopedConfig,
}

/// `Some` is a replacement for the argument value; the emitter's caller applies it.
pub type HandlerResult = Result<Option<LoadedContent>, ResourceLoadingError>;

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &LoadArgEvent<'_>, ctx: &HandlerContext<'_>) -> HandlerResult;
}

impl<F> EventHandler for F
where
    F: Fn(&LoadArgEvent<'_>, &HandlerContext<'_>) -> HandlerResult + Send + Sync,
{
    fn handle(&self, event: &LoadArgEvent<'_>, ctx: &HandlerContext<'_>) -> HandlerResult {
        self(event, ctx)
    }
}

/// Wraps a closure as a shareable handler.
pub fn handler_fn<F>(f: F) -> Arc<dyn EventHandler>
where
    F: Fn(&LoadArgEvent<'_>, &HandlerContext<'_>) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}

struct Registration {
    segments: Vec<String>,
    handler: Arc<dyn EventHandler>,
}

impl Registration {
    fn matches(&self, name: &[&str]) -> bool {
        self.segments.len() <= name.len()
            && self
                .segments
                .iter()
                .zip(name)
                .all(|(p, n)| p == "*" || p == n)
    }

    fn specificity(&self) -> usize {
        self.segments.iter().filter(|s| *s != "*").count()
    }
}

#[derive(Default)]
pub struct EventBus {
    registrations: Vec<Registration>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handler` to `pattern`. Registering the same handler twice
    /// makes it run twice.
    pub fn register(&mut self, pattern: &str, handler: Arc<dyn EventHandler>) {
        tracing::debug!("registering handler for {}", pattern);
        self.registrations.push(Registration {
            segments: pattern.split('.').map(String::from).collect(),
            handler,
        });
    }

    pub fn handler_count(&self) -> usize {
        self.registrations.len()
    }

    /// Handlers for `name`, most specific pattern first; ties keep
    /// registration order.
    fn matching(&self, name: &str) -> Vec<&Registration> {
        let segments: Vec<&str> = name.split('.').collect();
        let mut found: Vec<&Registration> = self
            .registrations
            .iter()
            .filter(|r| r.matches(&segments))
            .collect();
        found.sort_by_key(|r| std::cmp::Reverse(r.specificity()));
        found
    }

    /// Calls every matching handler and collects their results in call order.
    pub fn emit(
        &self,
        name: &str,
        event: &LoadArgEvent<'_>,
        ctx: &HandlerContext<'_>,
    ) -> Vec<HandlerResult> {
        let handlers = self.matching(name);
        tracing::trace!("emit {} to {} handler(s)", name, handlers.len());
        handlers
            .into_iter()
            .map(|r| r.handler.handle(event, ctx))
            .collect()
    }

    /// Calls matching handlers until one returns a replacement or an error.
    pub fn emit_until_response(
        &self,
        name: &str,
        event: &LoadArgEvent<'_>,
        ctx: &HandlerContext<'_>,
    ) -> HandlerResult {
        for r in self.matching(name) {
            if let Some(content) = r.handler.handle(event, ctx)? {
                return Ok(Some(content));
            }
        }
        Ok(None)
    }
}

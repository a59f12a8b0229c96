//! Session: scoped configuration plus the event bus handlers subscribe to.

use crate::config::ScopedConfig;
use crate::events::{EventBus, EventHandler, HandlerContext, HandlerResult, LoadArgEvent};
use crate::value::ArgValue;
use std::sync::Arc;

/// Prefix of every per-argument load event.
pub const LOAD_CLI_ARG: &str = "load-cli-arg";

/// Event name for loading `param` of `service` `operation`.
pub fn load_arg_event_name(service: &str, operation: &str, param: &str) -> String {
    format!("{LOAD_CLI_ARG}.{service}.{operation}.{param}")
}

#[derive(Default)]
pub struct Session {
    config: ScopedConfig,
    bus: EventBus,
}

impl Session {
    pub fn new(config: ScopedConfig) -> Self {
        Self {
            config,
            bus: EventBus::new(),
        }
    }

    pub fn scoped_config(&self) -> &ScopedConfig {
        &self.config
    }

    pub fn scoped_config_mut(&mut self) -> &mut ScopedConfig {
        &mut self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn register(&mut self, pattern: &str, handler: Arc<dyn EventHandler>) {
        self.bus.register(pattern, handler);
    }

    pub fn emit(&self, name: &str, event: &LoadArgEvent<'_>) -> Vec<HandlerResult> {
        self.bus.emit(name, event, &self.context())
    }

    pub fn emit_until_response(&self, name: &str, event: &LoadArgEvent<'_>) -> HandlerResult {
        self.bus.emit_until_response(name, event, &self.context())
    }

    /// Fires `load-cli-arg.<service>.<operation>.<param>` and returns the first
    /// replacement value offered, if any.
    pub fn load_arg(
        &self,
        service: &str,
        operation: &str,
        param: &str,
        value: &ArgValue,
    ) -> HandlerResult {
        let name = load_arg_event_name(service, operation, param);
        self.emit_until_response(&name, &LoadArgEvent { param, value })
    }

    fn context(&self) -> HandlerContext<'_> {
        HandlerContext {
            config: &self.config,
        }
    }
}

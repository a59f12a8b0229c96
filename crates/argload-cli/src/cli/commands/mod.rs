//! CLI command handlers, one per file.

mod config;
mod resolve;

pub use config::run_config;
pub use resolve::run_resolve;

#[cfg(test)]
pub(crate) use config::describe_follow_urlparam;
#[cfg(test)]
pub(crate) use resolve::resolve_arg;

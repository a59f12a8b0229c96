pub mod config;
pub mod error;
pub mod events;
pub mod handler;
pub mod http;
pub mod logging;
pub mod paramfile;
pub mod session;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ResourceLoadingError;
pub use handler::{register_uri_param_handler, UriArgumentHandler};
pub use paramfile::{get_paramfile, PrefixMap};
pub use session::Session;
pub use value::{ArgValue, LoadedContent};

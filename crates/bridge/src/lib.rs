//! Command bridge between the launcher UI and the OS.
//!
//! A named command with an argument bag comes in, one handler runs, and a
//! [`CommandResult`] goes back. Handler faults never escape [`CommandBridge::handle`].

pub mod actions;
pub mod app_query;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod icons;
pub mod registry;
pub mod result;

pub use actions::ActionDispatcher;
pub use app_query::AppQueryService;
pub use config::{BridgeConfig, IconCacheConfig, SearchConfig};
pub use dispatcher::CommandBridge;
pub use error::{BridgeError, ErrorKind};
pub use icons::{IconCache, IconRenderer};
pub use registry::HandlerRegistry;
pub use result::{Arguments, Command, CommandResult};

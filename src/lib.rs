pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod router;
pub mod source;

pub use data::{Journey, NamePolicy};
pub use error::{BuildError, LoadError, RouteError};
pub use network::{Network, NetworkOptions};
pub use router::Router;

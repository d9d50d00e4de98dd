//! Supported Ethereum JSON-RPC transports.

pub mod http;
pub use self::http::Http;

//! Node endpoint taken from positional arguments.

use std::fmt;

/// Port used when none is given.
pub const DEFAULT_PORT: &str = "8545";
/// Host used when none is given: the first container on the default docker bridge.
pub const DEFAULT_HOST: &str = "172.17.0.2";

/// Where the JSON-RPC node listens.
///
/// Values are not validated; a bad host or port shows up as a transport error on the first call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEndpoint {
    host: String,
    port: String,
}

impl NodeEndpoint {
    /// Endpoint at `host:port`.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        NodeEndpoint {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Reads `[port] [host]`, falling back to the defaults for missing ones.
    /// Anything after the host is ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let port = args.next().unwrap_or_else(|| DEFAULT_PORT.to_owned());
        let host = args.next().unwrap_or_else(|| DEFAULT_HOST.to_owned());
        NodeEndpoint { host, port }
    }

    /// Host part.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port part.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// HTTP URL of the node.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NodeEndpoint {
    fn default() -> Self {
        NodeEndpoint::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for NodeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

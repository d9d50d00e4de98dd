//! Single ether transfer over Ethereum JSON-RPC.
//!
//! A thin client layer (transports, typed namespaces) plus [`TransferDemo`],
//! which moves a fixed amount between the node's first two managed accounts
//! and reports balances before and after.

#![warn(missing_docs)]

/// Re-export of `jsonrpc-core` message types.
pub use jsonrpc_core as rpc;

/// Re-export of the `futures` crate.
#[macro_use]
pub extern crate futures;

// it needs to be before other modules
// otherwise the macro for tests is not available.
#[macro_use]
pub mod helpers;

pub mod api;
pub mod config;
pub mod confirm;
pub mod demo;
pub mod error;
pub mod transports;
pub mod types;
pub mod units;

pub use crate::api::Web3;
pub use crate::demo::TransferDemo;
pub use crate::error::{Error, Result};

/// Assigned RequestId
pub type RequestId = usize;

/// Transport implementation
pub trait Transport: std::fmt::Debug + Clone + Unpin {
    /// The type of future this transport returns when a call is made.
    type Out: futures::Future<Output = error::Result<rpc::Value>> + Unpin;

    /// Prepare serializable RPC call for given method with parameters.
    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call);

    /// Execute prepared RPC call.
    fn send(&self, id: RequestId, request: rpc::Call) -> Self::Out;

    /// Execute remote method with given parameters.
    fn execute(&self, method: &str, params: Vec<rpc::Value>) -> Self::Out {
        let (id, request) = self.prepare(method, params);
        self.send(id, request)
    }
}

impl<X, T> Transport for X
where
    T: Transport + ?Sized,
    X: std::ops::Deref<Target = T>,
    X: std::fmt::Debug,
    X: Clone,
    X: Unpin,
{
    type Out = T::Out;

    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call) {
        (**self).prepare(method, params)
    }

    fn send(&self, id: RequestId, request: rpc::Call) -> Self::Out {
        (**self).send(id, request)
    }
}

//! Transfer Error
use crate::rpc::error::Error as RPCError;
use crate::types::H256;
use derive_more::{Display, From};
use serde_json::Error as SerdeError;
use std::io::Error as IoError;

/// Crate-wide `Result` type.
pub type Result<T = ()> = std::result::Result<T, Error>;

/// Transport-depended error.
#[derive(Display, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// Transport-specific error code.
    #[display(fmt = "code {}", _0)]
    Code(u16),
    /// Arbitrary, developer-readable description of the occurred error.
    #[display(fmt = "{}", _0)]
    Message(String),
}

/// Errors which can abort a transfer run.
#[derive(Debug, Display, From)]
pub enum Error {
    /// server is unreachable
    #[display(fmt = "Server is unreachable")]
    Unreachable,
    /// decoder error
    #[display(fmt = "Decoder error: {}", _0)]
    Decoder(String),
    /// invalid response
    #[display(fmt = "Got invalid response: {}", _0)]
    #[from(ignore)]
    InvalidResponse(String),
    /// transport error
    #[display(fmt = "Transport error: {}", _0)]
    #[from(ignore)]
    Transport(TransportError),
    /// rpc error
    #[display(fmt = "RPC error: {:?}", _0)]
    Rpc(RPCError),
    /// io error
    #[display(fmt = "IO error: {}", _0)]
    Io(IoError),
    /// the node manages fewer accounts than a transfer needs
    #[display(fmt = "Node manages {} account(s), a transfer needs at least 2", _0)]
    #[from(ignore)]
    NotEnoughAccounts(usize),
    /// the node refused the transaction at submission time
    #[display(fmt = "Transaction error: {}", _0)]
    #[from(ignore)]
    Rejected(String),
    /// no receipt showed up within the polling bound; the transaction may still be mined
    #[display(fmt = "No Tx receipt received for {:?} after {} attempts", hash, attempts)]
    #[from(ignore)]
    NoReceipt {
        /// hash of the submitted transaction
        hash: H256,
        /// receipt lookups performed
        attempts: usize,
    },
    /// amount could not be converted between units
    #[display(fmt = "Invalid amount: {}", _0)]
    #[from(ignore)]
    InvalidAmount(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use self::Error::*;
        match *self {
            Unreachable
            | Decoder(_)
            | InvalidResponse(_)
            | Transport { .. }
            | NotEnoughAccounts(_)
            | Rejected(_)
            | NoReceipt { .. }
            | InvalidAmount(_) => None,
            Rpc(ref e) => Some(e),
            Io(ref e) => Some(e),
        }
    }
}

impl From<SerdeError> for Error {
    fn from(err: SerdeError) -> Self {
        Error::Decoder(format!("{:?}", err))
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        use self::Error::*;
        match self {
            Unreachable => Unreachable,
            Decoder(s) => Decoder(s.clone()),
            InvalidResponse(s) => InvalidResponse(s.clone()),
            Transport(s) => Transport(s.clone()),
            Rpc(e) => Rpc(e.clone()),
            Io(e) => Io(IoError::from(e.kind())),
            NotEnoughAccounts(n) => NotEnoughAccounts(*n),
            Rejected(s) => Rejected(s.clone()),
            NoReceipt { hash, attempts } => NoReceipt {
                hash: *hash,
                attempts: *attempts,
            },
            InvalidAmount(s) => InvalidAmount(s.clone()),
        }
    }
}

#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        use self::Error::*;
        match (self, other) {
            (Unreachable, Unreachable) => true,
            (Decoder(a), Decoder(b)) | (InvalidResponse(a), InvalidResponse(b)) => a == b,
            (Transport(a), Transport(b)) => a == b,
            (Rpc(a), Rpc(b)) => a == b,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            (NotEnoughAccounts(a), NotEnoughAccounts(b)) => a == b,
            (Rejected(a), Rejected(b)) | (InvalidAmount(a), InvalidAmount(b)) => a == b,
            (
                NoReceipt { hash, attempts },
                NoReceipt {
                    hash: other_hash,
                    attempts: other_attempts,
                },
            ) => hash == other_hash && attempts == other_attempts,
            _ => false,
        }
    }
}

//! Web3 Types

mod block;
mod transaction;
mod transaction_request;
mod uint;

pub use self::block::BlockNumber;
pub use self::transaction::Receipt as TransactionReceipt;
pub use self::transaction_request::TransactionRequest;
pub use self::uint::{H160, H256, U256, U64};

/// Address
pub type Address = H160;
/// Index in block
pub type Index = U64;

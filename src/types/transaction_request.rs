use crate::types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Send Transaction Parameters
///
/// Signed by the node, so `from` has to be one of its managed accounts.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Sender address
    pub from: Address,
    /// Recipient address (None for contract creation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Supplied gas (None for sensible default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// Gas price (None for sensible default)
    #[serde(rename = "gasPrice")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// Transferred value (None for no transfer)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// Transaction nonce (None for next available nonce)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U256>,
}

impl TransactionRequest {
    /// Plain value transfer with every field pinned.
    pub fn ether_transfer(
        from: Address,
        nonce: U256,
        gas_price: U256,
        gas: U256,
        to: Address,
        value: U256,
    ) -> Self {
        TransactionRequest {
            from,
            to: Some(to),
            gas: Some(gas),
            gas_price: Some(gas_price),
            value: Some(value),
            nonce: Some(nonce),
        }
    }
}

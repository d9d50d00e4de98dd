use crate::types::{Address, Index, H256, U256, U64};
use serde::{Deserialize, Serialize};

/// "Receipt" of an executed transaction: details of its execution.
///
/// Nodes return `null` instead of a receipt until the transaction is mined.
/// Everything but the hash may be `null` or absent, e.g. on pending receipts.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Transaction hash.
    #[serde(rename = "transactionHash")]
    pub transaction_hash: H256,
    /// Index within the block.
    #[serde(rename = "transactionIndex", default)]
    pub transaction_index: Option<Index>,
    /// Hash of the block this transaction was included within.
    #[serde(rename = "blockHash", default)]
    pub block_hash: Option<H256>,
    /// Number of the block this transaction was included within.
    #[serde(rename = "blockNumber", default)]
    pub block_number: Option<U64>,
    /// Sender
    #[serde(default)]
    pub from: Option<Address>,
    /// Recipient (None when contract creation)
    #[serde(default)]
    pub to: Option<Address>,
    /// Cumulative gas used within the block after this was executed.
    #[serde(rename = "cumulativeGasUsed", default)]
    pub cumulative_gas_used: Option<U256>,
    /// Gas used by this transaction alone.
    ///
    /// Gas used is `None` if the the client is running in light client mode.
    #[serde(rename = "gasUsed", default)]
    pub gas_used: Option<U256>,
    /// Contract address created, or `None` if not a deployment.
    #[serde(rename = "contractAddress", default)]
    pub contract_address: Option<Address>,
    /// Status: either 1 (success) or 0 (failure). Only present after activation of EIP-658
    #[serde(default)]
    pub status: Option<U64>,
    /// Effective gas price
    #[serde(rename = "effectiveGasPrice", default)]
    pub effective_gas_price: Option<U256>,
}

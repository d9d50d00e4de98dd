pub use ethereum_types::{H160, H256, U256, U64};

//! One ether transfer between the node's first two managed accounts.
//!
//! Every step is a single JSON-RPC round trip awaited before the next one starts.
//! The sending account is assumed to have no other writer while the run lasts:
//! the nonce is read right before submission and never reconciled.

use crate::{
    api::Web3,
    confirm::{self, Retry, Sleep, Timer},
    error::{Error, Result},
    types::{Address, BlockNumber, TransactionReceipt, TransactionRequest, H256, U256},
    units::{self, Ether, Unit},
    Transport,
};
use derive_more::Display;
use std::io::Write;

/// Gas price of the transfer, in wei.
pub const GAS_PRICE: u64 = 9_000;
/// Gas limit of the transfer.
pub const GAS_LIMIT: u64 = 1_000_000;
/// Amount moved per run, in ether.
pub const TRANSFER_AMOUNT: &str = "0.124";

/// Progress of a run. A failing step ends the run right there.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Asking the node for its client version.
    Connecting,
    /// Sender and receiver are known.
    AccountsListed,
    /// Balances before the transfer are printed.
    #[display(fmt = "BalancesRead(before)")]
    BalancesBefore,
    /// The node accepted the transaction.
    Submitted,
    /// Waiting for the receipt.
    Polling,
    /// The receipt arrived.
    Confirmed,
    /// Balances after the transfer are printed.
    #[display(fmt = "BalancesRead(after)")]
    BalancesAfter,
    /// Run completed.
    Done,
    /// A step returned an error; the run ends there.
    Failed,
}

/// Runs the transfer against a node reached through `T`.
#[derive(Debug, Clone)]
pub struct TransferDemo<T: Transport, S = Timer> {
    web3: Web3<T>,
    retry: Retry,
    sleeper: S,
}

impl<T: Transport> TransferDemo<T> {
    /// Demo over `web3`, polling receipts every second, 40 times at most.
    pub fn new(web3: Web3<T>) -> Self {
        TransferDemo {
            web3,
            retry: Retry::default(),
            sleeper: Timer,
        }
    }
}

impl<T: Transport, S: Sleep> TransferDemo<T, S> {
    /// Replaces the sleep used between receipt lookups.
    pub fn with_sleep<U: Sleep>(self, sleeper: U) -> TransferDemo<T, U> {
        TransferDemo {
            web3: self.web3,
            retry: self.retry,
            sleeper,
        }
    }

    /// Replaces the receipt polling bound.
    pub fn with_retry(self, retry: Retry) -> Self {
        TransferDemo { retry, ..self }
    }

    /// Connects, transfers [`TRANSFER_AMOUNT`] from the first account to the second
    /// and writes balances before and after to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result {
        let result = self.run_stages(out).await;
        if let Err(ref err) = result {
            log::debug!("Stage: {} ({})", Stage::Failed, err);
        }
        result
    }

    async fn run_stages<W: Write>(&self, out: &mut W) -> Result {
        enter(Stage::Connecting);
        let version = self.web3.web3().client_version().await?;
        writeln!(out, "Connected to {}", version)?;

        let (sending, receiving) = self.accounts().await?;
        enter(Stage::AccountsListed);
        let value = units::to_wei(TRANSFER_AMOUNT, Unit::Ether)?;

        writeln!(out, "Before TX:")?;
        self.print_account_balance(out, sending, "sendingAddress").await?;
        self.print_account_balance(out, receiving, "receivingAddress").await?;
        enter(Stage::BalancesBefore);

        let hash = self.transfer(sending, receiving, value).await?;
        enter(Stage::Submitted);
        let receipt = self.wait_for_receipt(hash).await?;
        enter(Stage::Confirmed);
        log::info!("{:?} included in block {:?}", hash, receipt.block_number);

        writeln!(out, "After TX:")?;
        self.print_account_balance(out, sending, "sendingAddress").await?;
        self.print_account_balance(out, receiving, "receivingAddress").await?;
        enter(Stage::BalancesAfter);

        enter(Stage::Done);
        Ok(())
    }

    /// First two accounts managed by the node, as (sender, receiver).
    pub async fn accounts(&self) -> Result<(Address, Address)> {
        let accounts = self.web3.eth().accounts().await?;
        match accounts.as_slice() {
            [sending, receiving, ..] => Ok((*sending, *receiving)),
            _ => Err(Error::NotEnoughAccounts(accounts.len())),
        }
    }

    /// Balance of `address` at the latest block.
    pub async fn balance(&self, address: Address) -> Result<Ether> {
        let wei = self.web3.eth().balance(address, Some(BlockNumber::Latest)).await?;
        Ok(Ether(wei))
    }

    /// Submits `value` wei from `from` to `to` and returns the transaction hash.
    ///
    /// A node-side refusal becomes `Error::Rejected` carrying the node's message; nothing is retried.
    pub async fn transfer(&self, from: Address, to: Address, value: U256) -> Result<H256> {
        let eth = self.web3.eth();
        let nonce = eth.transaction_count(from, Some(BlockNumber::Latest)).await?;
        let tx = TransactionRequest::ether_transfer(from, nonce, GAS_PRICE.into(), GAS_LIMIT.into(), to, value);
        log::debug!("Sending {} wei from {:?} to {:?} with nonce {}", value, from, to, nonce);

        match eth.send_transaction(tx).await {
            Ok(hash) => {
                log::info!("Transaction {:?} submitted", hash);
                Ok(hash)
            }
            Err(Error::Rpc(err)) => Err(Error::Rejected(err.message)),
            Err(err) => Err(err),
        }
    }

    /// Polls for the receipt of `hash`.
    pub async fn wait_for_receipt(&self, hash: H256) -> Result<TransactionReceipt> {
        enter(Stage::Polling);
        confirm::wait_for_receipt(&self.web3.eth(), hash, self.retry, &self.sleeper).await
    }

    /// Addresses are printed as full lowercase hex whatever casing the node used.
    async fn print_account_balance<W: Write>(&self, out: &mut W, address: Address, name: &str) -> Result {
        let balance = self.balance(address).await?;
        writeln!(out, "{} {:?} balance : {}", name, address, balance)?;
        Ok(())
    }
}

fn enter(stage: Stage) {
    log::debug!("Stage: {}", stage);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rpc, transports::test::TestTransport};
    use futures::{executor::block_on, future::BoxFuture};
    use serde_json::json;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy)]
    struct NoSleep;

    impl Sleep for NoSleep {
        fn sleep(&self, _duration: Duration) -> BoxFuture<'static, ()> {
            Box::pin(futures::future::ready(()))
        }
    }

    const SENDER: &str = "0x0000000000000000000000000000000000000123";
    const RECEIVER: &str = "0x0000000000000000000000000000000000000456";
    const HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000111";

    fn demo(transport: &TestTransport) -> TransferDemo<&TestTransport, NoSleep> {
        TransferDemo::new(Web3::new(transport)).with_sleep(NoSleep)
    }

    fn quoted(value: &str) -> String {
        format!("{:?}", value)
    }

    #[test]
    fn full_run_prints_balances_around_the_transfer() {
        let mut transport = TestTransport::default();
        transport.add_response(json!("Geth/v1.13.5-stable"));
        transport.add_response(json!([SENDER, RECEIVER]));
        transport.add_response(json!("0xde0b6b3a7640000"));
        transport.add_response(json!("0x0"));
        transport.add_response(json!("0x0"));
        transport.add_response(json!(HASH));
        transport.add_response(json!({ "transactionHash": HASH, "blockNumber": "0x1" }));
        transport.add_response(json!("0xc282d5bcbfa16c0"));
        transport.add_response(json!("0x1b88957d0260000"));

        let mut out = Vec::new();
        block_on(demo(&transport).run(&mut out)).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "Connected to Geth/v1.13.5-stable\n\
                 Before TX:\n\
                 sendingAddress {sender} balance : 1\n\
                 receivingAddress {receiver} balance : 0\n\
                 After TX:\n\
                 sendingAddress {sender} balance : 0.875999999811\n\
                 receivingAddress {receiver} balance : 0.124\n",
                sender = SENDER,
                receiver = RECEIVER,
            )
        );

        transport.assert_request("web3_clientVersion", &[]);
        transport.assert_request("eth_accounts", &[]);
        transport.assert_request("eth_getBalance", &[quoted(SENDER), quoted("latest")]);
        transport.assert_request("eth_getBalance", &[quoted(RECEIVER), quoted("latest")]);
        transport.assert_request("eth_getTransactionCount", &[quoted(SENDER), quoted("latest")]);
        transport.assert_request(
            "eth_sendTransaction",
            &[format!(
                r#"{{"from":"{}","gas":"0xf4240","gasPrice":"0x2328","nonce":"0x0","to":"{}","value":"0x1b88957d0260000"}}"#,
                SENDER, RECEIVER
            )],
        );
        transport.assert_request("eth_getTransactionReceipt", &[quoted(HASH)]);
        transport.assert_request("eth_getBalance", &[quoted(SENDER), quoted("latest")]);
        transport.assert_request("eth_getBalance", &[quoted(RECEIVER), quoted("latest")]);
        transport.assert_no_more_requests();
    }

    #[test]
    fn single_account_stops_before_any_balance_call() {
        let mut transport = TestTransport::default();
        transport.add_response(json!("Ganache/v7.9.1"));
        transport.add_response(json!([SENDER]));

        let mut out = Vec::new();
        let result = block_on(demo(&transport).run(&mut out));

        assert_eq!(result, Err(Error::NotEnoughAccounts(1)));
        assert_eq!(String::from_utf8(out).unwrap(), "Connected to Ganache/v7.9.1\n");
        transport.assert_request("web3_clientVersion", &[]);
        transport.assert_request("eth_accounts", &[]);
        transport.assert_no_more_requests();
    }

    #[test]
    fn node_error_on_submission_is_a_rejection() {
        let mut transport = TestTransport::default();
        transport.add_response(json!("0x7"));
        transport.add_error(rpc::Error {
            code: rpc::ErrorCode::ServerError(-32000),
            message: "nonce too low".into(),
            data: None,
        });

        let from = Address::from_low_u64_be(0x123);
        let to = Address::from_low_u64_be(0x456);
        let result = block_on(demo(&transport).transfer(from, to, 1.into()));

        assert_eq!(result, Err(Error::Rejected("nonce too low".into())));
        transport.assert_request("eth_getTransactionCount", &[quoted(SENDER), quoted("latest")]);
        transport.assert_request(
            "eth_sendTransaction",
            &[format!(
                r#"{{"from":"{}","gas":"0xf4240","gasPrice":"0x2328","nonce":"0x7","to":"{}","value":"0x1"}}"#,
                SENDER, RECEIVER
            )],
        );
        transport.assert_no_more_requests();
    }

    #[test]
    fn transport_failure_on_submission_is_not_a_rejection() {
        let mut transport = TestTransport::default();
        transport.add_response(json!("0x0"));

        let from = Address::from_low_u64_be(0x123);
        let to = Address::from_low_u64_be(0x456);
        let result = block_on(demo(&transport).transfer(from, to, 1.into()));

        assert_eq!(result, Err(Error::Unreachable));
    }

    #[test]
    fn receipt_wait_honours_custom_bound() {
        let mut transport = TestTransport::default();
        for _ in 0..3 {
            transport.add_response(rpc::Value::Null);
        }
        let retry = Retry {
            interval: Duration::from_millis(10),
            max_attempts: 3,
        };
        let hash = H256::from_low_u64_be(0x111);

        let result = block_on(demo(&transport).with_retry(retry).wait_for_receipt(hash));

        assert_eq!(result, Err(Error::NoReceipt { hash, attempts: 3 }));
        assert_eq!(transport.requests_for("eth_getTransactionReceipt"), 3);
    }

    #[test]
    fn balance_is_reported_in_ether() {
        let mut transport = TestTransport::default();
        transport.add_response(json!("0x1b88957d0260000"));

        let balance = block_on(demo(&transport).balance(Address::from_low_u64_be(0x123))).unwrap();

        assert_eq!(balance.to_string(), "0.124");
    }

    #[test]
    fn stages_render_like_the_run_states() {
        assert_eq!(Stage::BalancesBefore.to_string(), "BalancesRead(before)");
        assert_eq!(Stage::Polling.to_string(), "Polling");
        assert_eq!(Stage::Failed.to_string(), "Failed");
    }

    #[test]
    fn checksummed_accounts_are_printed_lowercase() {
        let mut transport = TestTransport::default();
        transport.add_response(json!("Geth/v1.13.5-stable"));
        transport.add_response(json!([
            "0x52908400098527886E0F7030069857D2E4169EE7",
            "0x8617E340B3D01FA5F11F306F4090FD50E238070D"
        ]));
        transport.add_response(json!("0x0"));
        transport.add_response(json!("0x0"));
        transport.add_response(json!("0x0"));
        transport.add_error(rpc::Error {
            code: rpc::ErrorCode::ServerError(-32000),
            message: "insufficient funds for gas * price + value".into(),
            data: None,
        });

        let mut out = Vec::new();
        let result = block_on(demo(&transport).run(&mut out));

        assert_eq!(
            result,
            Err(Error::Rejected("insufficient funds for gas * price + value".into()))
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Connected to Geth/v1.13.5-stable\n\
             Before TX:\n\
             sendingAddress 0x52908400098527886e0f7030069857d2e4169ee7 balance : 0\n\
             receivingAddress 0x8617e340b3d01fa5f11f306f4090fd50e238070d balance : 0\n"
        );
    }
}

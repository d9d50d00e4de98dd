use web3_transfer::{config::NodeEndpoint, transports::Http, Error, TransferDemo, Web3};

/// Usage: `web3-transfer [port] [host]`
///
/// Moves 0.124 ether between the first two accounts of the node and prints balances
/// before and after. Log output is controlled through `RUST_LOG`.
#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{}", exit_message(&err));
        std::process::exit(1);
    }
}

async fn run() -> web3_transfer::Result {
    let endpoint = NodeEndpoint::from_args(std::env::args().skip(1));
    log::info!("Using node at {}", endpoint);

    let transport = Http::new(&endpoint.url())?;
    let demo = TransferDemo::new(Web3::new(transport));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out).await
}

fn exit_message(err: &Error) -> String {
    format!("Error: {}", err)
}

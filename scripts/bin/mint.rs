//! Mint one NFT through the contract's `safeMint` function

use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use helpers::{init_tracing, setup_script, MintArgs, MintRunner, PassthroughAdapter, ScriptSetup};

#[tokio::main]
async fn main() -> ExitCode {
    // a missing .env file is fine, the flags and environment still apply
    dotenv::dotenv().ok();
    let args = match MintArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // usage errors are setup failures like any other
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    init_tracing();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: MintArgs) -> anyhow::Result<()> {
    let config = args.into_config()?;
    tracing::info!(
        rpc_url = %config.network.rpc_url,
        contract = %config.contract_address,
        recipient = %config.recipient,
        "mint configuration"
    );

    // instantiate client and bind the contract
    let ScriptSetup {
        client,
        contract,
        recipient,
    } = setup_script(&config, PassthroughAdapter)?;

    let outcome = MintRunner::new(&client, &contract).run(recipient).await;
    if outcome.is_success() {
        println!("{outcome}");
    } else {
        eprintln!("{outcome}");
    }

    Ok(())
}

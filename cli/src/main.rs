// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use ethers::types::U256;
use reqwest::Url;
use stderrlog::Timestamp;

use composer_provider::{
    util::{parse_address, parse_amount},
    EvmProvider,
};
use composer_sdk::{network::Network, Composer};

/// Command line args
#[derive(Clone, Debug, Parser)]
#[command(name = "composer", author, version, about, long_about = None)]
struct Cli {
    /// Account address used as the sender when estimating gas.
    account: Option<String>,
    /// Target network
    #[arg(long, env, default_value = "testnet")]
    network: Network,
    /// Node RPC URL; the network default is used if not given
    #[arg(long, env)]
    rpc_url: Option<Url>,
    /// Bearer token for any Authorization header
    #[arg(long, env)]
    rpc_auth_token: Option<String>,
    /// Timeout for calls to the node RPC API
    #[arg(long, value_parser = humantime::parse_duration, default_value = "60s")]
    timeout: Duration,
    /// Deposit amount in the token's smallest unit
    #[arg(long, value_parser = parse_amount, default_value = "99")]
    amount: U256,
    /// Also estimate gas for delivering the composed operation
    #[arg(long, default_value_t = false)]
    estimate_gas: bool,
    /// Logging verbosity (repeat for more verbose logging)
    #[arg(short, long, env, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Silence logging
    #[arg(short, long, env, default_value_t = false)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(cli.quiet)
        .verbosity(cli.verbosity as usize)
        .timestamp(Timestamp::Millisecond)
        .init()
        .unwrap();

    let account = match &cli.account {
        Some(account) => parse_address(account)?,
        None => return Err(anyhow!("please provide an account address")),
    };

    let config = cli.network.config()?;
    let rpc_url = cli.rpc_url.clone().unwrap_or_else(|| config.rpc_url.clone());
    let provider = EvmProvider::new_http(rpc_url, Some(cli.timeout), cli.rpc_auth_token.clone())?;

    let txs = Composer::deposit_transactions(&config, cli.amount);
    let calldata = Composer::operation_calldata(&provider, config.composer, &txs).await?;
    println!("{}", calldata);

    if cli.estimate_gas {
        let gas = Composer::estimate_gas(&provider, &config, account, &calldata).await?;
        println!("Estimated gas: {}", gas);
    }

    Ok(())
}

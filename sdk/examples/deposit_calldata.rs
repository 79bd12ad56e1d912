// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::env;

use anyhow::anyhow;
use ethers::types::U256;

use composer_provider::{util::parse_address, EvmProvider};
use composer_sdk::{network::Network, Composer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(anyhow!("missing account address"));
    }
    let account = parse_address(&args[1])?;

    // Use testnet network defaults
    let network = Network::Testnet;
    let config = network.config()?;

    // Setup network provider
    let provider = EvmProvider::new_http(config.rpc_url.clone(), None, None)?;

    // Compose an approve + deposit pair into a single operation payload
    let txs = Composer::deposit_transactions(&config, U256::from(99u64));
    let calldata = Composer::operation_calldata(&provider, config.composer, &txs).await?;
    println!("composed calldata: {}", calldata);

    // Estimate delivery gas for the composed payload
    let gas = Composer::estimate_gas(&provider, &config, account, &calldata).await?;
    println!("estimated gas: {}", gas);

    Ok(())
}

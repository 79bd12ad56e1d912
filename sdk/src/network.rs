// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use ethers::types::Address;
use reqwest::Url;

use composer_provider::util::parse_address;

pub const TESTNET_CHAIN_ID: u64 = 11155420;
pub const TESTNET_RPC_URL: &str = "https://sepolia.optimism.io";

pub const TESTNET_COMPOSER_ADDRESS: &str = "0x15d1d4ba9095379eafd6ec62711c581fd09ba703";
pub const TESTNET_USDT_ADDRESS: &str = "0x9352001271a0af0d09a4e7f6c431663a2d5aa9d2";
pub const TESTNET_POOL_USDT_ADDRESS: &str = "0x0d7aB83370b492f2AB096c80111381674456e8d8";
pub const TESTNET_VAULT_ADDRESS: &str = "0x42c2dfd03934ee63c869a973834b16ce3fb97399";
pub const TESTNET_RECEIVER_ADDRESS: &str = "0x436f795B64E23E6cE7792af4923A68AFD3967952";
pub const TESTNET_LZ_ENDPOINT_ADDRESS: &str = "0x6EDCE65403992e310A62460808c4b910D972f10f";

pub const MAINNET_CHAIN_ID: u64 = 137;
pub const MAINNET_RPC_URL: &str = "https://polygon-rpc.com";

pub const MAINNET_COMPOSER_ADDRESS: &str = "0x533e75a2879bd2F2eAA8780f8CA1684dbC189362";
pub const MAINNET_USDT_ADDRESS: &str = "0xc2132D05D31c914a87C6611C10748AEb04B58e8F";
pub const MAINNET_POOL_USDT_ADDRESS: &str = "0xd47b03ee6d86Cf251ee7860FB2ACf9f91B9fD4d7";
pub const MAINNET_VAULT_ADDRESS: &str = "0xBb287E6017d3DEb0e2E65061e8684eab21060123";
pub const MAINNET_RECEIVER_ADDRESS: &str = "0xbE988fC9F6F8ad1EBb3A58B6c25BD6be9D1F56fe";
pub const MAINNET_LZ_ENDPOINT_ADDRESS: &str = "0x1a44076050125825900e736c501f859c50fE728c";

/// Contract addresses and chain parameters for one network.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// The EVM chain ID.
    pub chain_id: u64,
    /// The default node RPC endpoint.
    pub rpc_url: Url,
    /// The universal composer contract address.
    pub composer: Address,
    /// The USDT token contract address.
    pub usdt: Address,
    /// The Stargate USDT pool address.
    pub pool_usdt: Address,
    /// The Yearn V3 vault address.
    pub vault: Address,
    /// The vault share receiver address.
    pub receiver: Address,
    /// The LayerZero endpoint address.
    pub lz_endpoint: Address,
}

/// Supported networks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Network {
    /// Optimism Sepolia.
    Testnet,
    /// Polygon.
    Mainnet,
}

impl Network {
    /// The static configuration record for this network.
    pub fn config(&self) -> anyhow::Result<NetworkConfig> {
        match self {
            Network::Testnet => Ok(NetworkConfig {
                chain_id: TESTNET_CHAIN_ID,
                rpc_url: Url::parse(TESTNET_RPC_URL)?,
                composer: parse_address(TESTNET_COMPOSER_ADDRESS)?,
                usdt: parse_address(TESTNET_USDT_ADDRESS)?,
                pool_usdt: parse_address(TESTNET_POOL_USDT_ADDRESS)?,
                vault: parse_address(TESTNET_VAULT_ADDRESS)?,
                receiver: parse_address(TESTNET_RECEIVER_ADDRESS)?,
                lz_endpoint: parse_address(TESTNET_LZ_ENDPOINT_ADDRESS)?,
            }),
            Network::Mainnet => Ok(NetworkConfig {
                chain_id: MAINNET_CHAIN_ID,
                rpc_url: Url::parse(MAINNET_RPC_URL)?,
                composer: parse_address(MAINNET_COMPOSER_ADDRESS)?,
                usdt: parse_address(MAINNET_USDT_ADDRESS)?,
                pool_usdt: parse_address(MAINNET_POOL_USDT_ADDRESS)?,
                vault: parse_address(MAINNET_VAULT_ADDRESS)?,
                receiver: parse_address(MAINNET_RECEIVER_ADDRESS)?,
                lz_endpoint: parse_address(MAINNET_LZ_ENDPOINT_ADDRESS)?,
            }),
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(anyhow!("unknown network: {}", s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Testnet => write!(f, "testnet"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::str::FromStr;

use anyhow::anyhow;
use ethers::types::{Address, U256};

/// Parse a 0x-prefixed EVM address from string.
///
/// The input must start with "0x" and be exactly 42 characters long.
pub fn parse_address(s: &str) -> anyhow::Result<Address> {
    if !s.starts_with("0x") || s.len() != 42 {
        return Err(anyhow!("invalid address format: {}", s));
    }
    Address::from_str(s).map_err(|e| anyhow!("invalid address {}: {}", s, e))
}

/// Parse a token amount in the token's smallest unit from a decimal string.
pub fn parse_amount(s: &str) -> anyhow::Result<U256> {
    U256::from_dec_str(s).map_err(|e| anyhow!("invalid amount {}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_accepts_checksummed_and_lowercase() {
        let addr = parse_address("0x436f795B64E23E6cE7792af4923A68AFD3967952").unwrap();
        assert_eq!(
            addr,
            parse_address("0x436f795b64e23e6ce7792af4923a68afd3967952").unwrap()
        );
    }

    #[test]
    fn parse_address_rejects_missing_prefix() {
        assert!(parse_address("436f795B64E23E6cE7792af4923A68AFD3967952ab").is_err());
    }

    #[test]
    fn parse_address_rejects_wrong_length() {
        assert!(parse_address("0x436f79").is_err());
        assert!(parse_address("0x436f795B64E23E6cE7792af4923A68AFD396795200").is_err());
    }

    #[test]
    fn parse_address_rejects_non_hex() {
        assert!(parse_address("0x436f795B64E23E6cE7792af4923A68AFD39679zz").is_err());
    }

    #[test]
    fn parse_amount_decimal_only() {
        assert_eq!(parse_amount("99").unwrap(), U256::from(99u64));
        assert!(parse_amount("0x63").is_err());
    }
}

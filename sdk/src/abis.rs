// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use ethers::contract::abigen;

abigen!(Erc20, "$CARGO_MANIFEST_DIR/abis/erc20.abi.json");

abigen!(YearnV3Vault, "$CARGO_MANIFEST_DIR/abis/yearn_v3_vault.abi.json");

abigen!(
    UniversalComposer,
    "$CARGO_MANIFEST_DIR/abis/universal_composer.abi.json"
);

// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod evm;
pub mod util;

pub use evm::EvmProvider;

// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod abis;
pub mod composer;
pub mod network;
pub mod operation;

pub use composer::Composer;

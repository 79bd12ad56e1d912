// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::anyhow;
use ethers::types::{NameOrAddress, TransactionRequest};

use crate::abis::Operation;

/// Normalize a transaction descriptor into a composer [`Operation`].
///
/// A descriptor without a destination address is rejected; absent value and
/// calldata default to zero and empty.
pub fn to_operation(tx: &TransactionRequest) -> anyhow::Result<Operation> {
    let to = match &tx.to {
        Some(NameOrAddress::Address(to)) => *to,
        Some(NameOrAddress::Name(name)) => {
            return Err(anyhow!(
                "transaction destination must be an address; got ENS name {}",
                name
            ))
        }
        None => return Err(anyhow!("transaction is missing a destination address")),
    };
    Ok(Operation {
        to,
        value: tx.value.unwrap_or_default(),
        data: tx.data.clone().unwrap_or_default(),
    })
}

/// Normalize a list of descriptors, failing on the first invalid one.
pub fn to_operations(txs: &[TransactionRequest]) -> anyhow::Result<Vec<Operation>> {
    txs.iter().map(to_operation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::{Address, Bytes, U256};

    #[test]
    fn transform_requires_destination() {
        let tx = TransactionRequest::new().value(1u64);
        assert!(to_operation(&tx).is_err());
    }

    #[test]
    fn transform_rejects_ens_names() {
        let tx = TransactionRequest::new().to("vault.eth");
        assert!(to_operation(&tx).is_err());
    }

    #[test]
    fn transform_defaults_value_and_data() {
        let to = Address::repeat_byte(0x11);
        let op = to_operation(&TransactionRequest::new().to(to)).unwrap();
        assert_eq!(op.to, to);
        assert_eq!(op.value, U256::zero());
        assert!(op.data.is_empty());
    }

    #[test]
    fn transform_keeps_explicit_fields() {
        let to = Address::repeat_byte(0x22);
        let data = Bytes::from(vec![0xde, 0xad]);
        let tx = TransactionRequest::new().to(to).value(7u64).data(data.clone());
        let op = to_operation(&tx).unwrap();
        assert_eq!(op.value, U256::from(7u64));
        assert_eq!(op.data, data);
    }

    #[test]
    fn transform_list_fails_on_first_invalid() {
        let good = TransactionRequest::new().to(Address::repeat_byte(0x33));
        let bad = TransactionRequest::new();
        assert!(to_operations(&[good.clone()]).is_ok());
        assert!(to_operations(&[good, bad]).is_err());
    }
}

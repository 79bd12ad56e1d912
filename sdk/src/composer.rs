// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use ethers::{
    abi::AbiEncode,
    types::{transaction::eip2718::TypedTransaction, Address, Bytes, TransactionRequest, U256},
};

use composer_provider::EvmProvider;

use crate::{
    abis::{ApproveCall, DepositCall, LzComposeCall, UniversalComposer},
    network::NetworkConfig,
    operation::to_operations,
};

/// A static wrapper around composer contract methods.
pub struct Composer {}

impl Composer {
    /// Build the sub-transaction pair for a vault deposit: approve the vault
    /// to spend `amount` of the token, then deposit `amount` for the
    /// configured receiver.
    pub fn deposit_transactions(config: &NetworkConfig, amount: U256) -> Vec<TransactionRequest> {
        let approve = ApproveCall {
            spender: config.vault,
            amount,
        }
        .encode();
        let deposit = DepositCall {
            assets: amount,
            receiver: config.receiver,
        }
        .encode();

        vec![
            TransactionRequest::new()
                .to(config.usdt)
                .data(Bytes::from(approve)),
            TransactionRequest::new()
                .to(config.vault)
                .data(Bytes::from(deposit)),
        ]
    }

    /// Ask the composer contract to encode a list of sub-transactions as one
    /// composed operation payload.
    pub async fn operation_calldata(
        provider: &EvmProvider,
        composer: Address,
        txs: &[TransactionRequest],
    ) -> anyhow::Result<Bytes> {
        let operations = to_operations(txs)?;
        tracing::debug!(
            "requesting composed calldata for {} operations from {}",
            operations.len(),
            composer
        );

        let contract = UniversalComposer::new(composer, provider.client());
        let calldata = contract.encode_operation(operations).call().await?;
        Ok(calldata)
    }

    /// Estimate the gas needed to deliver an already-composed operation
    /// payload to the composer through the LayerZero endpoint's `lzCompose`
    /// callback.
    pub async fn estimate_gas(
        provider: &EvmProvider,
        config: &NetworkConfig,
        account: Address,
        message: &Bytes,
    ) -> anyhow::Result<U256> {
        let tx = Self::delivery_transaction(config, account, message);
        let gas = provider.estimate_gas(&tx).await?;
        tracing::debug!("estimated gas: {}", gas);
        Ok(gas)
    }

    /// The delivery transaction whose gas is estimated: `lzCompose` on the
    /// LayerZero endpoint, carrying the composed message.
    fn delivery_transaction(
        config: &NetworkConfig,
        account: Address,
        message: &Bytes,
    ) -> TypedTransaction {
        TransactionRequest::new()
            .from(account)
            .to(config.lz_endpoint)
            .value(0u64)
            .data(Self::lz_compose_calldata(config, message))
            .into()
    }

    /// Calldata for `lzCompose` carrying the composed message, as the
    /// endpoint delivers it from the pool to the composer.
    fn lz_compose_calldata(config: &NetworkConfig, message: &Bytes) -> Bytes {
        let call = LzComposeCall {
            from: config.pool_usdt,
            to: config.composer,
            guid: [0u8; 32],
            index: 0,
            message: message.clone(),
            extra_data: Bytes::new(),
        };
        Bytes::from(call.encode())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ethers::{
        abi::AbiDecode,
        providers::{Http, Provider},
        types::NameOrAddress,
        utils::id,
    };

    use super::*;
    use crate::network::{Network, TESTNET_RPC_URL};

    fn testnet() -> NetworkConfig {
        Network::Testnet.config().unwrap()
    }

    #[test]
    fn deposit_transactions_use_standard_selectors() {
        let config = testnet();
        let amount = U256::from(99u64);
        let txs = Composer::deposit_transactions(&config, amount);
        assert_eq!(txs.len(), 2);

        assert_eq!(txs[0].to, Some(NameOrAddress::Address(config.usdt)));
        let approve = txs[0].data.as_ref().unwrap();
        assert_eq!(hex::encode(&approve[..4]), "095ea7b3");
        assert_eq!(&approve[16..36], config.vault.as_bytes());
        assert_eq!(U256::from_big_endian(&approve[36..68]), amount);

        assert_eq!(txs[1].to, Some(NameOrAddress::Address(config.vault)));
        let deposit = txs[1].data.as_ref().unwrap();
        assert_eq!(hex::encode(&deposit[..4]), "6e553f65");
        assert_eq!(U256::from_big_endian(&deposit[4..36]), amount);
        assert_eq!(&deposit[48..68], config.receiver.as_bytes());
    }

    #[test]
    fn lz_compose_calldata_embeds_message() {
        let config = testnet();
        let message = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
        let calldata = Composer::lz_compose_calldata(&config, &message);

        let selector = id("lzCompose(address,address,bytes32,uint16,bytes,bytes)");
        assert_eq!(&calldata[..4], &selector[..]);

        let decoded = LzComposeCall::decode(&calldata).unwrap();
        assert_eq!(decoded.from, config.pool_usdt);
        assert_eq!(decoded.to, config.composer);
        assert_eq!(decoded.guid, [0u8; 32]);
        assert_eq!(decoded.index, 0);
        assert_eq!(decoded.message, message);
        assert!(decoded.extra_data.is_empty());
    }

    #[test]
    fn delivery_transaction_reuses_composed_message() {
        let config = testnet();
        let account = Address::repeat_byte(0x44);
        let message = Bytes::from(vec![0x01, 0x02, 0x03]);
        let tx = Composer::delivery_transaction(&config, account, &message);

        assert_eq!(tx.from(), Some(&account));
        assert_eq!(tx.to(), Some(&NameOrAddress::Address(config.lz_endpoint)));
        assert_eq!(tx.value(), Some(&U256::zero()));

        let decoded = LzComposeCall::decode(tx.data().unwrap()).unwrap();
        assert_eq!(decoded.message, message);
    }

    #[test]
    fn encode_operation_request_targets_composer() {
        let config = testnet();
        let client = Arc::new(Provider::<Http>::try_from(TESTNET_RPC_URL).unwrap());
        let contract = UniversalComposer::new(config.composer, client);

        let txs = Composer::deposit_transactions(&config, U256::from(99u64));
        let call = contract.encode_operation(to_operations(&txs).unwrap());
        let calldata = call.calldata().unwrap();

        let selector = id("encodeOperation((address,uint256,bytes)[])");
        assert_eq!(&calldata[..4], &selector[..]);
        assert_eq!(
            call.tx.to(),
            Some(&NameOrAddress::Address(config.composer))
        );
    }
}

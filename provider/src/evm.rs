// Copyright 2024 Composer Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::Arc;
use std::time::Duration;

use ethers::{
    providers::{Authorization, Http, Middleware, Provider},
    types::{transaction::eip2718::TypedTransaction, U256},
};
use reqwest::{header::HeaderValue, Client, Url};

/// Default polling time used by the ethers provider to check for pending
/// transactions and events. The ethers default is 7s; the chains this tool
/// targets have block times at or below one second.
const ETH_PROVIDER_POLLING_TIME: Duration = Duration::from_secs(1);

/// A read-only EVM JSON-RPC provider.
#[derive(Clone, Debug)]
pub struct EvmProvider {
    inner: Arc<Provider<Http>>,
}

impl EvmProvider {
    /// Create a provider over an HTTP endpoint with an optional request
    /// timeout and bearer authorization token.
    pub fn new_http(
        url: Url,
        timeout: Option<Duration>,
        auth_token: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut client = Client::builder();
        if let Some(auth_token) = auth_token {
            let auth = Authorization::Bearer(auth_token);
            let mut auth_value = HeaderValue::from_str(&auth.to_string())?;
            auth_value.set_sensitive(true);
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(reqwest::header::AUTHORIZATION, auth_value);
            client = client.default_headers(headers);
        }
        if let Some(timeout) = timeout {
            client = client.timeout(timeout);
        }
        let client = client.build()?;

        tracing::debug!("using HTTP client to submit requests to: {}", url);
        let provider = Http::new_with_client(url, client);
        let mut provider = Provider::new(provider);
        provider.set_interval(ETH_PROVIDER_POLLING_TIME);

        Ok(Self {
            inner: Arc::new(provider),
        })
    }

    /// The underlying ethers client, for binding contract instances.
    pub fn client(&self) -> Arc<Provider<Http>> {
        self.inner.clone()
    }

    /// Ask the node for a gas estimate of the given transaction.
    pub async fn estimate_gas(&self, tx: &TypedTransaction) -> anyhow::Result<U256> {
        Ok(self.inner.estimate_gas(tx, None).await?)
    }
}

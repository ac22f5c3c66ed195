//! # Connect Wallet
//!
//! The click-driven connection flow:
//!
//! 1. `eth_requestAccounts` (the wallet may prompt the user)
//! 2. show the first account and reveal the info panel
//! 3. `eth_chainId`, only after step 1 succeeded
//! 4. show `Detected Network: <label>`
//!
//! Without a provider the user gets one alert and nothing else happens. Every other
//! failure is logged to the console and returned; the page shows no error state. A
//! failure in step 3 leaves the address from step 2 on screen.
//!
//! Nothing guards against a second click while a request is pending; both attempts run
//! and the last write to each element wins.

use shared::chain::Network;
use shared::dto::provider::{ConnectionResult, GetChainId, RequestAccounts, RpcMethod};
use shared::utils::truncate_address;

use crate::error::{ConnectError, ProviderError};
use crate::services::display::Sinks;
use crate::services::wallet::WalletProvider;
use crate::utils::constants::MISSING_PROVIDER_ALERT;
use crate::utils::network_info_text;

/// Run one connection attempt against `provider`, writing results into `sinks`.
///
/// Returns the connection on full success. `Err` carries the reason the attempt
/// stopped; callers need not report it, it has already been logged.
pub async fn connect_wallet<P: WalletProvider>(
    provider: Option<&P>,
    sinks: &Sinks<'_>,
) -> Result<ConnectionResult, ConnectError> {
    let Some(provider) = provider else {
        sinks.alerts.alert(MISSING_PROVIDER_ALERT);
        return Err(ConnectError::ProviderMissing);
    };

    let result = request_connection(provider, sinks).await;
    if let Err(err) = &result {
        log::error!("Error connecting wallet: {}", err);
    }
    result
}

async fn request_connection<P: WalletProvider>(
    provider: &P,
    sinks: &Sinks<'_>,
) -> Result<ConnectionResult, ConnectError> {
    let accounts = provider
        .request(RequestAccounts)
        .await
        .map_err(request_failed::<RequestAccounts>)?;

    let active = accounts.first().ok_or(ConnectError::NoAccounts)?;
    sinks.address.set_text(active);
    sinks.info_panel.reveal();

    let chain_id = provider
        .request(GetChainId)
        .await
        .map_err(request_failed::<GetChainId>)?;

    let network = Network::from_chain_id(&chain_id);
    sinks.network.set_text(&network_info_text(network));

    log::info!(
        "Wallet connected: {} on {} ({})",
        truncate_address(active),
        network,
        chain_id
    );

    Ok(ConnectionResult { accounts, chain_id })
}

fn request_failed<M: RpcMethod>(source: ProviderError) -> ConnectError {
    ConnectError::Request {
        method: M::METHOD,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureReason;
    use crate::services::display::{AlertSink, PanelSink, TextSink};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use shared::dto::provider::{
        ProviderMethod, ProviderRpcError, UNSUPPORTED_METHOD, USER_REJECTED_REQUEST,
    };
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    const FIRST: &str = "0xABC0000000000000000000000000000000000001";
    const SECOND: &str = "0xDEF0000000000000000000000000000000000002";

    /// Provider answering from a fixed table, recording every call.
    #[derive(Default)]
    struct FakeProvider {
        responses: HashMap<ProviderMethod, Result<Value, ProviderError>>,
        calls: RefCell<Vec<ProviderMethod>>,
    }

    impl FakeProvider {
        fn with(mut self, method: ProviderMethod, response: Result<Value, ProviderError>) -> Self {
            self.responses.insert(method, response);
            self
        }

        fn connected(chain_id: &str) -> Self {
            Self::default()
                .with(ProviderMethod::RequestAccounts, Ok(json!([FIRST, SECOND])))
                .with(ProviderMethod::ChainId, Ok(json!(chain_id)))
        }

        fn calls(&self) -> Vec<ProviderMethod> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for FakeProvider {
        async fn request<M: RpcMethod>(&self, _method: M) -> Result<M::Response, ProviderError> {
            self.calls.borrow_mut().push(M::METHOD);
            match self.responses.get(&M::METHOD) {
                Some(Ok(value)) => serde_json::from_value(value.clone())
                    .map_err(|e| ProviderError::Malformed(e.to_string())),
                Some(Err(err)) => Err(err.clone()),
                None => Err(ProviderError::Rpc(ProviderRpcError::new(
                    UNSUPPORTED_METHOD,
                    "The requested method is not supported by this provider.",
                ))),
            }
        }
    }

    #[derive(Default)]
    struct RecordingText {
        text: RefCell<Option<String>>,
        writes: Cell<usize>,
    }

    impl RecordingText {
        fn preset(text: &str) -> Self {
            let sink = Self::default();
            *sink.text.borrow_mut() = Some(text.to_string());
            sink
        }

        fn text(&self) -> Option<String> {
            self.text.borrow().clone()
        }
    }

    impl TextSink for RecordingText {
        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = Some(text.to_string());
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingPanel {
        visible: Cell<bool>,
    }

    impl PanelSink for RecordingPanel {
        fn reveal(&self) {
            self.visible.set(true);
        }
    }

    #[derive(Default)]
    struct RecordingAlerts {
        messages: RefCell<Vec<String>>,
    }

    impl AlertSink for RecordingAlerts {
        fn alert(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct Page {
        address: RecordingText,
        network: RecordingText,
        panel: RecordingPanel,
        alerts: RecordingAlerts,
    }

    impl Page {
        fn sinks(&self) -> Sinks<'_> {
            Sinks {
                address: &self.address,
                network: &self.network,
                info_panel: &self.panel,
                alerts: &self.alerts,
            }
        }
    }

    fn rejection() -> ProviderError {
        ProviderError::Rpc(ProviderRpcError::new(
            USER_REJECTED_REQUEST,
            "User rejected the request.",
        ))
    }

    #[tokio::test]
    async fn test_connect_displays_first_account_and_network() {
        let provider = FakeProvider::connected("0x89");
        let page = Page::default();

        let result = connect_wallet(Some(&provider), &page.sinks()).await.unwrap();

        assert_eq!(result.active_account(), Some(FIRST));
        assert_eq!(result.accounts, vec![FIRST.to_string(), SECOND.to_string()]);
        assert_eq!(result.chain_id.as_str(), "0x89");
        assert_eq!(page.address.text().as_deref(), Some(FIRST));
        assert_eq!(
            page.network.text().as_deref(),
            Some("Detected Network: Polygon Mainnet")
        );
        assert!(page.panel.visible.get());
        assert!(page.alerts.messages.borrow().is_empty());
        assert_eq!(
            provider.calls(),
            vec![ProviderMethod::RequestAccounts, ProviderMethod::ChainId]
        );
    }

    #[tokio::test]
    async fn test_connect_labels_each_network() {
        let cases = [
            ("0x1", "Detected Network: Ethereum Mainnet"),
            ("0x89", "Detected Network: Polygon Mainnet"),
            ("0xaa36a7", "Detected Network: Other Network"),
            ("0x38", "Detected Network: Other Network"),
        ];

        for (chain_id, expected) in cases {
            let provider = FakeProvider::connected(chain_id);
            let page = Page::default();
            connect_wallet(Some(&provider), &page.sinks()).await.unwrap();
            assert_eq!(page.network.text().as_deref(), Some(expected), "chain {chain_id}");
        }
    }

    #[tokio::test]
    async fn test_missing_provider_alerts_once() {
        let page = Page::default();

        let err = connect_wallet::<FakeProvider>(None, &page.sinks())
            .await
            .unwrap_err();

        assert_eq!(err.reason(), FailureReason::ProviderMissing);
        assert_eq!(
            *page.alerts.messages.borrow(),
            vec![MISSING_PROVIDER_ALERT.to_string()]
        );
        assert_eq!(page.address.writes.get(), 0);
        assert_eq!(page.network.writes.get(), 0);
        assert!(!page.panel.visible.get());
    }

    #[tokio::test]
    async fn test_rejected_accounts_leave_page_untouched() {
        let provider = FakeProvider::default()
            .with(ProviderMethod::RequestAccounts, Err(rejection()))
            .with(ProviderMethod::ChainId, Ok(json!("0x1")));
        let page = Page::default();

        let err = connect_wallet(Some(&provider), &page.sinks()).await.unwrap_err();

        assert_eq!(err.reason(), FailureReason::UserRejected);
        assert!(!page.panel.visible.get());
        assert_eq!(page.address.writes.get(), 0);
        assert_eq!(page.network.writes.get(), 0);
        assert!(page.alerts.messages.borrow().is_empty());
        assert_eq!(provider.calls(), vec![ProviderMethod::RequestAccounts]);
    }

    #[tokio::test]
    async fn test_chain_id_failure_keeps_address_and_prior_network_text() {
        let provider = FakeProvider::default()
            .with(ProviderMethod::RequestAccounts, Ok(json!([FIRST])))
            .with(
                ProviderMethod::ChainId,
                Err(ProviderError::Thrown("disconnected".to_string())),
            );
        let page = Page {
            network: RecordingText::preset("Detected Network: Ethereum Mainnet"),
            ..Page::default()
        };

        let err = connect_wallet(Some(&provider), &page.sinks()).await.unwrap_err();

        assert_eq!(err.reason(), FailureReason::ProviderFailure);
        assert_eq!(page.address.text().as_deref(), Some(FIRST));
        assert!(page.panel.visible.get());
        assert_eq!(
            page.network.text().as_deref(),
            Some("Detected Network: Ethereum Mainnet")
        );
        assert_eq!(page.network.writes.get(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_chain_id_method_is_a_provider_failure() {
        let provider = FakeProvider::default()
            .with(ProviderMethod::RequestAccounts, Ok(json!([FIRST])));
        let page = Page::default();

        let err = connect_wallet(Some(&provider), &page.sinks()).await.unwrap_err();

        assert_eq!(err.reason(), FailureReason::ProviderFailure);
        match err {
            ConnectError::Request {
                method,
                source: ProviderError::Rpc(rpc),
            } => {
                assert_eq!(method, ProviderMethod::ChainId);
                assert_eq!(rpc.code, UNSUPPORTED_METHOD);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(page.address.text().as_deref(), Some(FIRST));
        assert_eq!(page.network.writes.get(), 0);
    }

    #[tokio::test]
    async fn test_malformed_chain_id_is_a_failure() {
        let provider = FakeProvider::default()
            .with(ProviderMethod::RequestAccounts, Ok(json!([FIRST])))
            .with(ProviderMethod::ChainId, Ok(json!(137)));
        let page = Page::default();

        let err = connect_wallet(Some(&provider), &page.sinks()).await.unwrap_err();

        assert_eq!(err.reason(), FailureReason::MalformedResponse);
        assert_eq!(page.address.text().as_deref(), Some(FIRST));
        assert_eq!(page.network.writes.get(), 0);
    }

    #[tokio::test]
    async fn test_malformed_accounts_is_a_failure() {
        let provider = FakeProvider::default()
            .with(ProviderMethod::RequestAccounts, Ok(json!({ "account": FIRST })));
        let page = Page::default();

        let err = connect_wallet(Some(&provider), &page.sinks()).await.unwrap_err();

        assert_eq!(err.reason(), FailureReason::MalformedResponse);
        assert!(!page.panel.visible.get());
        assert_eq!(provider.calls(), vec![ProviderMethod::RequestAccounts]);
    }

    #[tokio::test]
    async fn test_empty_account_list_is_a_failure() {
        let provider = FakeProvider::connected("0x1")
            .with(ProviderMethod::RequestAccounts, Ok(json!([])));
        let page = Page::default();

        let err = connect_wallet(Some(&provider), &page.sinks()).await.unwrap_err();

        assert_eq!(err, ConnectError::NoAccounts);
        assert!(!page.panel.visible.get());
        assert_eq!(page.address.writes.get(), 0);
        assert_eq!(provider.calls(), vec![ProviderMethod::RequestAccounts]);
    }

    #[tokio::test]
    async fn test_connecting_twice_is_idempotent() {
        let provider = FakeProvider::connected("0x1");
        let once = Page::default();
        let twice = Page::default();

        let first = connect_wallet(Some(&provider), &once.sinks()).await.unwrap();
        connect_wallet(Some(&provider), &twice.sinks()).await.unwrap();
        let second = connect_wallet(Some(&provider), &twice.sinks()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(once.address.text(), twice.address.text());
        assert_eq!(once.network.text(), twice.network.text());
        assert!(twice.panel.visible.get());
    }
}

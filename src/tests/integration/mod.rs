//! End-to-end wallet call scenarios

use crate::{
    application::services::WalletClient,
    domain::wallet::WalletInfo,
    shared::error::AppError,
    tests::{
        common::{
            assertions::{assert_no_result, assert_rpc_error},
            MockTransport,
        },
        fixtures::{self, ADDRESS, TXID},
    },
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_over(transport: &Arc<MockTransport>, confirmations: i64) -> WalletClient {
    WalletClient::with_transport(transport.clone(), confirmations)
}

/// Scenarios over an in-memory transport
mod scenarios {
    use super::*;

    #[tokio::test]
    async fn test_create_address_returns_result() {
        let transport = MockTransport::replying(json!({"result": "Dabc123..."}));
        let address = client_over(&transport, 6).create_address().await;
        assert_eq!(address, Ok("Dabc123...".to_string()));
    }

    #[tokio::test]
    async fn test_daemon_error_fails_every_method() {
        let transport = MockTransport::replying(json!({"error": {"code": -5, "message": "Invalid address"}}));
        let client = client_over(&transport, 6);

        assert_rpc_error(client.create_address().await, -5, "Invalid address");
        assert_rpc_error(client.get_balance().await, -5, "Invalid address");
        assert_rpc_error(client.get_balance_by_address(ADDRESS).await, -5, "Invalid address");
        assert_rpc_error(client.get_wallet_info().await, -5, "Invalid address");
        assert_rpc_error(client.send_to_address(ADDRESS, 1.0).await, -5, "Invalid address");
        assert_rpc_error(client.get_transaction(TXID).await, -5, "Invalid address");
        assert_rpc_error(client.check_transaction(TXID).await, -5, "Invalid address");
        assert_rpc_error(client.set_fee(0.001).await, -5, "Invalid address");
    }

    #[tokio::test]
    async fn test_string_confirmations_meet_threshold() {
        let transport = MockTransport::replying(json!({"result": {"confirmations": "6"}}));
        assert_eq!(client_over(&transport, 6).check_transaction(TXID).await, Ok(true));
    }

    #[tokio::test]
    async fn test_one_below_threshold_is_unsettled() {
        let transport = MockTransport::replying(fixtures::transaction_reply(json!(5)));
        assert_eq!(client_over(&transport, 6).check_transaction(TXID).await, Ok(false));
    }

    #[tokio::test]
    async fn test_empty_envelope_is_no_result() {
        let transport = MockTransport::replying(json!({}));
        let client = client_over(&transport, 6);

        // NoResult is produced by the client, not sent by the daemon
        assert_no_result(client.get_balance().await);
        assert_no_result(client.create_address().await);
        assert_no_result(client.get_balance_by_address(ADDRESS).await);
        assert_no_result(client.get_wallet_info().await);
        assert_no_result(client.send_to_address(ADDRESS, 1.0).await);
        assert_no_result(client.check_transaction(TXID).await);
        assert_no_result(client.set_fee(0.001).await);
        assert_eq!(client.get_transaction(TXID).await, Ok(Default::default()));
    }

    #[tokio::test]
    async fn test_inert_error_member_is_success() {
        let transport = MockTransport::replying(json!({
            "result": 42.0,
            "error": {"code": 0, "message": "nothing to see"}
        }));
        assert_eq!(client_over(&transport, 6).get_balance().await, Ok(42.0));
    }

    #[tokio::test]
    async fn test_wallet_info_numeric_and_string_forms_agree() {
        let numeric = MockTransport::replying(fixtures::wallet_info_reply());
        let stringly = MockTransport::replying(fixtures::wallet_info_reply_stringly());

        let a = client_over(&numeric, 6).get_wallet_info().await.unwrap();
        let b = client_over(&stringly, 6).get_wallet_info().await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.walletversion, "169900");
        assert_eq!(a.balance, 1520.75);
        assert_eq!(a.txcount, 118);
    }

    #[tokio::test]
    async fn test_wallet_info_with_scalar_result_is_no_result() {
        let transport = MockTransport::replying(json!({"result": "wallet.dat"}));
        assert_no_result(client_over(&transport, 6).get_wallet_info().await);
    }

    #[tokio::test]
    async fn test_wallet_info_with_empty_object_is_default() {
        let transport = MockTransport::replying(json!({"result": {}}));
        assert_eq!(client_over(&transport, 6).get_wallet_info().await, Ok(WalletInfo::default()));
    }

    #[tokio::test]
    async fn test_get_transaction_passes_object_through() {
        let reply = fixtures::transaction_reply(json!(12));
        let transport = MockTransport::replying(reply.clone());
        let tx = client_over(&transport, 6).get_transaction(TXID).await.unwrap();
        assert_eq!(serde_json::Value::Object(tx), reply["result"]);
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_json_error() {
        let transport = MockTransport::replying_raw("<html>502 Bad Gateway</html>");
        let err = client_over(&transport, 6).get_balance().await.unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        assert_eq!(err.rpc_code(), None);
    }
}

/// Scenarios over a real HTTP transport against a mock daemon
mod http {
    use super::*;

    async fn client_for(mock_server: &MockServer) -> WalletClient {
        crate::tests::config::init();
        let app_config = crate::tests::config::test_config(&format!("{}/", mock_server.uri()));
        WalletClient::new(&app_config.daemon).unwrap()
    }

    #[tokio::test]
    async fn test_check_transaction_over_http() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "gettransaction", "params": [TXID]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::transaction_reply(json!("6"))))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        assert_eq!(client.check_transaction(TXID).await, Ok(true));
    }

    #[tokio::test]
    async fn test_daemon_error_with_http_500() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(fixtures::error_reply(-6, "Insufficient funds")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        assert_rpc_error(client.send_to_address(ADDRESS, 100000.0).await, -6, "Insufficient funds");
    }

    #[tokio::test]
    async fn test_no_retry_on_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        assert_eq!(client.get_balance().await, Err(AppError::Http { status: 503 }));
    }

    #[tokio::test]
    async fn test_wallet_info_over_http() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({"method": "getwalletinfo"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::wallet_info_reply_stringly()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server).await;
        let info = client.get_wallet_info().await.unwrap();
        assert_eq!(info.keypoolsize, 1000);
        assert_eq!(info.immature_balance, 72000.0);
        assert_eq!(info.hdmasterkeyid, "6f2e9c4b0d3a1f5e7c8b9a0d1e2f3a4b5c6d7e8f");
    }
}

//! Unit tests for the typed account queries
//!
//! Every query runs against a `ScriptedTransport`, covering the success path,
//! a transport failure and a remote error object, plus the decoding edge
//! cases of each result shape.

use crate::{
    shared::error::{ClientError, ErrorKind, SentinelExt, ERROR_SENTINEL},
    tests::{
        common::{scripted_client, transport_failure, ScriptedTransport},
        config, fixtures,
    },
    AccountClient, ClientConfig,
};
use serde_json::json;

/// Scalar queries: count and bandwidth
pub mod scalar {
    use super::*;

    #[tokio::test]
    async fn test_account_count_success_and_failures() {
        config::init();
        let (client, transport) = scripted_client(vec![
            Ok(fixtures::integer_response(1111)),
            transport_failure(),
            Ok(fixtures::remote_error_response(500, "some error")),
        ]);

        assert_eq!(client.get_account_count().await.unwrap(), 1111);

        let err = client.get_account_count().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);

        let failed = client.get_account_count().await;
        assert_eq!(
            failed.clone().unwrap_err(),
            ClientError::remote(500, "some error")
        );
        assert_eq!(failed.or_sentinel(), ERROR_SENTINEL);

        assert_eq!(transport.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_account_count_from_numeric_string() {
        let (client, _) = scripted_client(vec![Ok(crate::domain::RpcResponse::success(
            json!("1111"),
            1,
        ))]);
        assert_eq!(client.get_account_count().await.unwrap(), 1111);
    }

    #[tokio::test]
    async fn test_account_count_rejects_non_integer() {
        let (client, _) = scripted_client(vec![Ok(crate::domain::RpcResponse::success(
            json!({"count": 1111}),
            1,
        ))]);
        let result = client.get_account_count().await;
        assert_eq!(result.clone().unwrap_err().kind(), ErrorKind::Decode);
        assert_eq!(result.or_sentinel(), -1);
    }

    #[tokio::test]
    async fn test_account_bandwidth_success_and_failures() {
        let (client, transport) = scripted_client(vec![
            Ok(fixtures::integer_response(1111)),
            transport_failure(),
            Ok(fixtures::remote_error_response(500, "some error")),
        ]);

        assert_eq!(client.get_account_bandwidth("jrswab").await.unwrap(), 1111);

        let err = client.get_account_bandwidth("jrswab").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);

        let failed = client.get_account_bandwidth("jrswab").await;
        assert_eq!(
            failed.clone().unwrap_err(),
            ClientError::remote(500, "some error")
        );
        assert_eq!(failed.or_sentinel(), ERROR_SENTINEL);

        let requests = transport.requests().await;
        assert_eq!(requests[0].method, "get_account_bandwidth");
        assert_eq!(
            serde_json::to_value(&requests[0].params).unwrap(),
            json!(["jrswab", "forum"])
        );
    }

    #[tokio::test]
    async fn test_unsupported_bandwidth_method_is_an_ordinary_remote_error() {
        let (client, _) = scripted_client(vec![
            Ok(fixtures::remote_error_response(
                -32601,
                "Could not find method get_account_bandwidth",
            )),
            Ok(fixtures::integer_response(1_370_484)),
        ]);

        let err = client.get_account_bandwidth("jrswab").await.unwrap_err();
        assert!(err.is_method_not_found());

        // the client stays usable afterwards
        assert_eq!(client.get_account_count().await.unwrap(), 1_370_484);
    }
}

/// Reputation lookup
pub mod reputation {
    use super::*;

    #[tokio::test]
    async fn test_reputation_parsed_from_string() {
        let (client, transport) = scripted_client(vec![Ok(fixtures::reputation_response("1111"))]);

        assert_eq!(client.get_account_reputation("jrswab").await.unwrap(), 1111);

        let requests = transport.requests().await;
        assert_eq!(requests[0].method, "get_account_reputations");
        assert_eq!(
            serde_json::to_value(&requests[0].params).unwrap(),
            json!(["jrswab", 1])
        );
    }

    #[tokio::test]
    async fn test_non_numeric_reputation() {
        let (client, _) = scripted_client(vec![Ok(fixtures::reputation_response("high"))]);

        let result = client.get_account_reputation("jrswab").await;
        let err = result.clone().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("reputation not numeric"));
        assert_eq!(result.or_sentinel(), -1);
    }

    #[tokio::test]
    async fn test_reputation_errors_propagate() {
        let (client, _) = scripted_client(vec![
            transport_failure(),
            Ok(fixtures::remote_error_response(500, "some error")),
        ]);

        assert_eq!(client.get_account_reputation("jrswab").await.or_sentinel(), -1);
        let err = client.get_account_reputation("jrswab").await.unwrap_err();
        assert_eq!(err.remote_code(), Some(500));
    }
}

/// Account history
pub mod history {
    use super::*;

    #[tokio::test]
    async fn test_history_success_and_failures() {
        let (client, transport) = scripted_client(vec![
            Ok(crate::domain::RpcResponse::success(json!([]), 1)),
            transport_failure(),
            Ok(fixtures::remote_error_response(500, "some error")),
        ]);

        let history = client.get_account_history("jrswab", 1000, 1).await.unwrap();
        assert!(history.is_empty());
        assert!(client.get_account_history("jrswab", 1000, 1).await.is_err());
        assert!(client.get_account_history("jrswab", 1000, 1).await.is_err());

        let requests = transport.requests().await;
        assert_eq!(
            serde_json::to_value(&requests[0].params).unwrap(),
            json!(["jrswab", 1000, 1])
        );
    }

    #[tokio::test]
    async fn test_history_keeps_entries_opaque() {
        let (client, _) = scripted_client(vec![Ok(crate::domain::RpcResponse::success(
            json!([[999, {"trx_id": "abc", "op": ["vote", {"weight": 10000}]}]]),
            1,
        ))]);

        let history = client.get_account_history("jrswab", -1, 1).await.unwrap();
        assert_eq!(history[0][0], json!(999));
        assert_eq!(history[0][1]["op"][0], json!("vote"));
    }

    #[tokio::test]
    async fn test_history_rejects_flat_list() {
        let (client, _) = scripted_client(vec![Ok(crate::domain::RpcResponse::success(
            json!([1, 2, 3]),
            1,
        ))]);

        let err = client.get_account_history("jrswab", -1, 3).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}

/// Batch account lookup
pub mod accounts {
    use super::*;

    #[tokio::test]
    async fn test_zero_names_fail_before_sending() {
        let (client, transport) = scripted_client(vec![Ok(fixtures::single_account_response())]);

        let err = client.get_accounts::<&str>(&[]).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(transport.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_single_account() {
        let (client, transport) = scripted_client(vec![Ok(fixtures::single_account_response())]);

        let accounts = client.get_accounts(&["jrswab"]).await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "jrswab");
        assert_eq!(accounts[0].id, 222785);
        assert_eq!(accounts[0].hbd_balance, "4.863 HBD");
        assert_eq!(accounts[0].posting.account_auths[0].0, "peakd.app");

        let requests = transport.requests().await;
        assert_eq!(requests[0].method, "get_accounts");
        assert_eq!(
            serde_json::to_value(&requests[0].params).unwrap(),
            json!([["jrswab"]])
        );
    }

    #[tokio::test]
    async fn test_server_order_is_preserved() {
        let (client, _) = scripted_client(vec![Ok(fixtures::multi_account_response())]);

        let accounts = client.get_accounts(&["jrswab", "hiveio"]).await.unwrap();
        let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["hiveio", "jrswab"]);
    }

    #[tokio::test]
    async fn test_length_follows_the_server_not_the_request() {
        let (client, _) = scripted_client(vec![Ok(fixtures::multi_account_response())]);

        let accounts = client.get_accounts(&["jrswab"]).await.unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let (client, _) = scripted_client(vec![
            transport_failure(),
            Ok(fixtures::remote_error_response(500, "some error")),
            Ok(crate::domain::RpcResponse::success(json!([{"post_count": "lots"}]), 1)),
        ]);

        let names = ["jrswab"];
        assert_eq!(client.get_accounts(&names).await.unwrap_err().kind(), ErrorKind::Transport);
        assert_eq!(client.get_accounts(&names).await.unwrap_err().kind(), ErrorKind::Remote);
        assert_eq!(client.get_accounts(&names).await.unwrap_err().kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_owned_names_are_accepted() {
        let (client, _) = scripted_client(vec![Ok(fixtures::single_account_response())]);

        let names = vec!["jrswab".to_string()];
        assert_eq!(client.get_accounts(&names).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_account_single() {
        let (client, _) = scripted_client(vec![
            Ok(fixtures::single_account_response()),
            Ok(crate::domain::RpcResponse::success(json!([]), 1)),
        ]);

        let account = client.get_account("jrswab").await.unwrap();
        assert_eq!(account.map(|a| a.id), Some(222785));

        assert!(client.get_account("nobody-here").await.unwrap().is_none());
    }
}

/// Behavior shared by every query
pub mod client {
    use super::*;

    #[tokio::test]
    async fn test_identical_responses_decode_identically() {
        let transport = ScriptedTransport::always(fixtures::multi_account_response());
        let client = AccountClient::with_transport(ClientConfig::default(), transport);

        let first = client.get_accounts(&["jrswab", "hiveio"]).await.unwrap();
        let second = client.get_accounts(&["jrswab", "hiveio"]).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_requests_carry_protocol_constants() {
        let (client, transport) = scripted_client(vec![Ok(fixtures::integer_response(1))]);
        client.get_account_count().await.unwrap();

        let wire = serde_json::to_value(&transport.requests().await[0]).unwrap();
        assert_eq!(
            wire,
            json!({"jsonrpc": "2.0", "method": "get_account_count", "params": [], "id": 1})
        );
    }

    #[tokio::test]
    async fn test_no_retry_after_failure() {
        let (client, transport) = scripted_client(vec![
            transport_failure(),
            Ok(fixtures::integer_response(1)),
        ]);

        assert!(client.get_account_count().await.is_err());
        assert_eq!(transport.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_envelope_without_result_is_a_decode_error() {
        let empty = crate::domain::RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: None,
            id: None,
        };
        let (client, _) = scripted_client(vec![Ok(empty)]);

        let err = client.get_account_count().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_endpoint_defaults_and_overrides() {
        assert_eq!(AccountClient::new().unwrap().endpoint(), "https://api.hive.blog");

        let client =
            AccountClient::from_endpoints(["https://anyx.io", "https://api.deathwing.me"]).unwrap();
        assert_eq!(client.endpoint(), "https://anyx.io");
    }

    #[test]
    fn test_invalid_endpoint_is_a_config_error() {
        let err = AccountClient::with_endpoint("ftp://api.hive.blog").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}

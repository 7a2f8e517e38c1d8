use httpmock::prelude::*;
use researcher_client::{
    AccountPager, AccountStatus, ClientError, HttpAccountService, ResearcherClient, Session,
    TomlConfig,
};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

const TOKEN: &str = "test-session-token";

fn client_for(server: &MockServer) -> ResearcherClient<HttpAccountService> {
    let config = TomlConfig::new(server.base_url(), TOKEN.to_string());
    Session::new(&config).unwrap().researcher_client()
}

fn account(first: &str, last: &str, status: &str) -> serde_json::Value {
    json!({
        "firstName": first,
        "lastName": last,
        "email": format!("{}.{}@example.org", first.to_lowercase(), last.to_lowercase()),
        "id": format!("{}-{}", first, last),
        "status": status,
        "createdOn": "2024-01-15T09:30:00.000Z",
        "type": "AccountSummary"
    })
}

#[tokio::test]
async fn test_first_page_contains_known_accounts() {
    let server = MockServer::start_async().await;
    let body = json!({
        "items": [
            account("Ada", "Lovelace", "enabled"),
            account("Grace", "Hopper", "unverified"),
            account("Alan", "Turing", "disabled"),
            account("Barbara", "Liskov", "enabled")
        ],
        "offsetBy": 0,
        "pageSize": 10,
        "total": 4,
        "type": "PagedResourceList"
    });

    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/participants")
                .query_param("offsetBy", "0")
                .query_param("pageSize", "10")
                .header("bridge-session", TOKEN)
                .header("accept", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(body);
        })
        .await;

    let client = client_for(&server);
    let page = client.list_accounts(0, 10).await.unwrap();
    api_mock.assert_async().await;

    assert!(page.len() > 2);
    assert_eq!(page.offset_by(), 0);
    assert!(page.len() as u64 <= page.total());
    for summary in page.items() {
        assert!(!summary.first_name.is_empty());
        assert!(!summary.last_name.is_empty());
        assert!(!summary.email.is_empty());
        assert!(summary.created_on.is_some());
    }
    assert_eq!(page.items()[1].status, AccountStatus::Unverified);
}

#[tokio::test]
async fn test_negative_offset_never_hits_server() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(200).json_body(json!({"items": [], "offsetBy": 0, "total": 0}));
        })
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.list_accounts(-1, 10).await);
    assert!(err.is_invalid_argument());

    assert_eq!(api_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_page_size_below_minimum_never_hits_server() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(200).json_body(json!({"items": [], "offsetBy": 0, "total": 0}));
        })
        .await;

    let client = client_for(&server);
    let err = assert_err!(client.list_accounts(0, 4).await);
    assert!(matches!(err, ClientError::InvalidArgument { ref field, .. } if field == "pageSize"));
    assert_ok!(client.list_accounts(0, 5).await);

    assert_eq!(api_mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_missing_offset_is_echoed_from_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/participants")
                .query_param("offsetBy", "20");
            then.status(200)
                .json_body(json!({"items": [account("Ada", "Lovelace", "enabled")], "total": 21}));
        })
        .await;

    let page = client_for(&server).list_accounts(20, 5).await.unwrap();
    assert_eq!(page.offset_by(), 20);
    assert_eq!(page.total(), 21);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_email_filter_is_sent() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/participants")
                .query_param("emailFilter", "lovelace");
            then.status(200).json_body(json!({
                "items": [account("Ada", "Lovelace", "enabled")],
                "offsetBy": 0,
                "total": 1
            }));
        })
        .await;

    let page = client_for(&server)
        .list_accounts_filtered(0, 25, Some("lovelace"))
        .await
        .unwrap();
    api_mock.assert_async().await;
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_oversized_page_is_rejected() {
    let server = MockServer::start_async().await;
    let items: Vec<_> = (0..6)
        .map(|i| account("User", &format!("N{}", i), "enabled"))
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(200)
                .json_body(json!({"items": items, "offsetBy": 0, "total": 50}));
        })
        .await;

    let err = client_for(&server).list_accounts(0, 5).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unauthorized_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(401).body("{\"message\":\"Not signed in.\"}");
        })
        .await;

    let err = client_for(&server).list_accounts(0, 10).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized { status: 401 }));
}

#[tokio::test]
async fn test_forbidden_session() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(403).body("{\"message\":\"Caller does not have permission.\"}");
        })
        .await;

    let err = client_for(&server).list_accounts(0, 10).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized { status: 403 }));
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    // nothing listens on port 1
    let config = TomlConfig::new("http://127.0.0.1:1".to_string(), TOKEN.to_string());
    let client = Session::new(&config).unwrap().researcher_client();

    let err = client.list_accounts(0, 10).await.unwrap_err();
    assert!(matches!(err, ClientError::Api(_)));
}

#[tokio::test]
async fn test_server_error_is_propagated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(503).body("maintenance");
        })
        .await;

    let err = client_for(&server).list_accounts(0, 10).await.unwrap_err();
    match err {
        ClientError::HttpStatus { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/participants");
            then.status(200)
                .json_body(json!({"items": [{"firstName": "Ada"}], "total": 1}));
        })
        .await;

    let err = client_for(&server).list_accounts(0, 10).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_pager_walks_all_pages() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/participants")
                .query_param("offsetBy", "0")
                .query_param("pageSize", "5");
            then.status(200).json_body(json!({
                "items": (0..5).map(|i| account("First", &format!("P{}", i), "enabled")).collect::<Vec<_>>(),
                "offsetBy": 0,
                "total": 7
            }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/participants")
                .query_param("offsetBy", "5")
                .query_param("pageSize", "5");
            then.status(200).json_body(json!({
                "items": (5..7).map(|i| account("Second", &format!("P{}", i), "enabled")).collect::<Vec<_>>(),
                "offsetBy": 5,
                "total": 7
            }));
        })
        .await;

    let client = client_for(&server);
    let accounts = AccountPager::new(&client, 0, 5)
        .unwrap()
        .collect_all(None)
        .await
        .unwrap();

    assert_eq!(accounts.len(), 7);
    assert_eq!(accounts[6].last_name, "P6");
    first.assert_hits_async(1).await;
    second.assert_hits_async(1).await;
}

#[test]
fn test_session_rejects_blank_token() {
    let config = TomlConfig::new("https://research.example.org".to_string(), " ".to_string());
    assert!(Session::new(&config).is_err());
}

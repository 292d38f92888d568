use super::*;
use crate::web::http::{HttpError, MockHttpClient};
use crate::web::storage::MemoryTokenStore;

// =========================================================
// 辅助函数
// =========================================================

fn api_with_token(client: MockHttpClient) -> RemindlyApi<MockHttpClient, MemoryTokenStore> {
    RemindlyApi::with_parts(
        "https://api.example.com/api/",
        client,
        MemoryTokenStore::with_token("tok-123"),
    )
}

fn api_anonymous(client: MockHttpClient) -> RemindlyApi<MockHttpClient, MemoryTokenStore> {
    RemindlyApi::with_parts("https://api.example.com/api", client, MemoryTokenStore::new())
}

const SCHEDULE_JSON: &str = r#"{
    "_id": "s1",
    "customerName": "Ann",
    "dispatchDate": "2024-01-01",
    "deliveryDate": "2024-01-05",
    "phone": "0123456789",
    "email": "a@x.com",
    "notes": "",
    "status": "Active"
}"#;

// =========================================================
// 请求构建
// =========================================================

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let client = MockHttpClient::new();
    client.push_response(200, "[]");
    let api = api_with_token(client.clone());

    api.list_schedules().await.unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
    // 基地址末尾斜杠被规整掉
    assert_eq!(requests[0].url, "https://api.example.com/api/schedules");
}

#[tokio::test]
async fn no_auth_header_without_token() {
    let client = MockHttpClient::new();
    client.push_response(200, "[]");
    let api = api_anonymous(client.clone());

    api.list_schedules().await.unwrap();

    assert_eq!(client.requests()[0].header("Authorization"), None);
}

#[tokio::test]
async fn get_requests_carry_no_body() {
    let client = MockHttpClient::new();
    client.push_response(200, "{\"total\":1,\"active\":1,\"completed\":0}");
    let api = api_with_token(client.clone());

    let stats = api.get_stats().await.unwrap();
    assert_eq!(stats.total, 1);

    let req = &client.requests()[0];
    assert!(req.body.is_none());
    assert_eq!(req.url, "https://api.example.com/api/schedules/stats");
}

#[tokio::test]
async fn schedule_detail_path_contains_the_id() {
    let client = MockHttpClient::new();
    client.push_response(200, SCHEDULE_JSON);
    let api = api_with_token(client.clone());

    let schedule = api.get_schedule("s1").await.unwrap();
    assert_eq!(schedule.customer_name, "Ann");
    assert_eq!(client.requests()[0].url, "https://api.example.com/api/schedules/s1");
}

// =========================================================
// 认证端点
// =========================================================

#[tokio::test]
async fn login_parses_the_session_response() {
    let client = MockHttpClient::new();
    client.push_response(200, r#"{"token":"tok-9","id":"u1","name":"Ann"}"#);
    let api = api_anonymous(client.clone());

    let resp = api.login("a@x.com", "secret").await.unwrap();
    assert_eq!(resp.token, "tok-9");
    assert_eq!(resp.id, "u1");

    let body = client.requests()[0].body.clone().unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["email"], "a@x.com");
    assert_eq!(value["password"], "secret");
}

#[tokio::test]
async fn login_failure_surfaces_the_backend_message() {
    let client = MockHttpClient::new();
    client.push_response(401, r#"{"message":"Invalid credentials"}"#);
    let api = api_anonymous(client);

    let err = api.login("a@x.com", "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn adopted_token_is_used_by_later_requests() {
    let client = MockHttpClient::new();
    client.push_response(200, "[]");
    let api = api_anonymous(client.clone());

    api.adopt_token("fresh");
    api.list_schedules().await.unwrap();
    assert_eq!(client.requests()[0].header("Authorization"), Some("Bearer fresh"));

    client.push_response(200, "[]");
    api.clear_token();
    api.list_schedules().await.unwrap();
    assert_eq!(client.requests()[1].header("Authorization"), None);
}

#[tokio::test]
async fn reset_password_ignores_the_response_body() {
    let client = MockHttpClient::new();
    client.push_response(200, r#"{"message":"sent"}"#);
    let api = api_anonymous(client);

    assert!(api.reset_password("a@x.com").await.is_ok());
}

// =========================================================
// 变更类端点的状态码策略
// =========================================================

#[tokio::test]
async fn create_passes_4xx_back_as_data() {
    let client = MockHttpClient::new();
    client.push_response(400, r#"{"message":"dispatch date in the past"}"#);
    let api = api_with_token(client);

    let outcome = api.create_schedule(&ScheduleDraft::default()).await.unwrap();
    match outcome {
        MutationOutcome::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "dispatch date in the past");
        }
        MutationOutcome::Ok(_) => panic!("4xx 不应当作成功"),
    }
}

#[tokio::test]
async fn create_success_returns_the_created_schedule() {
    let client = MockHttpClient::new();
    client.push_response(201, SCHEDULE_JSON);
    let api = api_with_token(client.clone());

    let draft = ScheduleDraft {
        customer_name: "Ann".into(),
        dispatch_date: "2024-01-01".into(),
        delivery_date: "2024-01-05".into(),
        phone: "0123456789".into(),
        email: "a@x.com".into(),
        notes: String::new(),
    };
    let outcome = api.create_schedule(&draft).await.unwrap();
    assert!(matches!(outcome, MutationOutcome::Ok(ref s) if s.id == "s1"));

    // 日期按 ISO 字符串原样进入请求体
    let body = client.requests()[0].body.clone().unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["dispatchDate"], "2024-01-01");
    assert_eq!(value["deliveryDate"], "2024-01-05");
}

#[tokio::test]
async fn update_uses_put_on_the_id_path() {
    let client = MockHttpClient::new();
    client.push_response(200, SCHEDULE_JSON);
    let api = api_with_token(client.clone());

    api.update_schedule("s1", &ScheduleDraft::default()).await.unwrap();

    let req = &client.requests()[0];
    assert_eq!(req.url, "https://api.example.com/api/schedules/s1");
    assert_eq!(req.method, remindly_shared::protocol::Method::Put);
}

#[tokio::test]
async fn delete_with_5xx_is_an_error() {
    let client = MockHttpClient::new();
    client.push_response(500, r#"{"message":"boom"}"#);
    let api = api_with_token(client);

    let err = api.delete_schedule("s1").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn network_failure_is_an_error() {
    let client = MockHttpClient::new();
    client.push_error(HttpError::NetworkError("offline".to_string()));
    let api = api_with_token(client);

    let err = api.list_schedules().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_message() {
    let client = MockHttpClient::new();
    client.push_response(404, "not found");
    let api = api_with_token(client);

    let err = api.list_schedules().await.unwrap_err();
    assert_eq!(err.to_string(), "请求失败 (HTTP 404)");
}

// =========================================================
// 通知端点
// =========================================================

#[tokio::test]
async fn send_notification_posts_the_batch_payload() {
    let client = MockHttpClient::new();
    client.push_response(200, r#"{"message":"ok"}"#);
    let api = api_with_token(client.clone());

    let mut draft = NotificationDraft::default();
    draft.toggle("c1");
    draft.toggle("c2");
    draft.message = "您的包裹即将送达".to_string();

    let outcome = api.send_notification(&draft).await.unwrap();
    assert!(matches!(outcome, MutationOutcome::Ok(_)));

    let req = &client.requests()[0];
    assert_eq!(req.url, "https://api.example.com/api/notifications/send");
    let value: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(value["customerIds"], serde_json::json!(["c1", "c2"]));
    assert_eq!(value["channel"], "email");
}

#[tokio::test]
async fn history_parses_read_only_records() {
    let client = MockHttpClient::new();
    client.push_response(
        200,
        r#"[{
            "id": "n1",
            "customerName": "Ann",
            "message": "hi",
            "channel": "sms",
            "sentAt": "2024-01-02T10:00:00Z",
            "status": "sent"
        }]"#,
    );
    let api = api_with_token(client);

    let history = api.get_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].channel, remindly_shared::Channel::Sms);
    assert_eq!(history[0].status, remindly_shared::NotificationStatus::Sent);
}

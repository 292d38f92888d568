use super::delete_and_prune;
use crate::api::{ApiError, RemindlyApi};
use crate::web::http::{HttpError, MockHttpClient};
use crate::web::storage::MemoryTokenStore;
use remindly_shared::{CalendarDate, Schedule, ScheduleStatus};

fn schedule(id: &str) -> Schedule {
    Schedule {
        id: id.to_string(),
        customer_name: format!("客户 {}", id),
        dispatch_date: CalendarDate::parse("2024-01-01").unwrap(),
        delivery_date: CalendarDate::parse("2024-01-05").unwrap(),
        phone: "0123456789".into(),
        email: "c@x.com".into(),
        notes: String::new(),
        status: ScheduleStatus::Active,
    }
}

fn api_with(client: MockHttpClient) -> RemindlyApi<MockHttpClient, MemoryTokenStore> {
    RemindlyApi::with_parts("http://test/api", client, MemoryTokenStore::with_token("t"))
}

#[tokio::test]
async fn prunes_only_the_confirmed_schedule() {
    let client = MockHttpClient::new();
    client.push_response(200, r#"{"message":"deleted"}"#);
    let api = api_with(client.clone());

    let mut list = vec![schedule("a"), schedule("b"), schedule("c")];
    delete_and_prune(&api, &mut list, "b").await.unwrap();

    assert_eq!(
        list.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "c"]
    );
    assert_eq!(client.requests()[0].url, "http://test/api/schedules/b");
}

#[tokio::test]
async fn rejected_delete_keeps_list_intact() {
    let client = MockHttpClient::new();
    client.push_response(404, r#"{"message":"排程不存在"}"#);
    let api = api_with(client);

    let mut list = vec![schedule("a"), schedule("b")];
    let err = delete_and_prune(&api, &mut list, "b").await.unwrap_err();

    assert_eq!(list.len(), 2);
    assert_eq!(
        err,
        ApiError::Status {
            status: 404,
            message: "排程不存在".to_string()
        }
    );
}

// 服务端 5xx：删除不生效，本地列表不得变化
#[tokio::test]
async fn server_error_keeps_list_intact() {
    let client = MockHttpClient::new();
    client.push_response(500, r#"{"message":"internal"}"#);
    let api = api_with(client);

    let mut list = vec![schedule("a"), schedule("b")];
    let result = delete_and_prune(&api, &mut list, "a").await;

    assert!(result.is_err());
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn network_failure_keeps_list_intact() {
    let client = MockHttpClient::new();
    client.push_error(HttpError::NetworkError("连接中断".to_string()));
    let api = api_with(client);

    let mut list = vec![schedule("a")];
    let result = delete_and_prune(&api, &mut list, "a").await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(list.len(), 1);
}

//! API 端点契约
//!
//! 用 trait 把每个端点的请求体、响应类型、路径与方法绑定在一起，
//! HTTP 客户端按契约泛型分发，新增端点时只需补一条定义。

use crate::{
    Customer, NotificationDraft, NotificationRecord, Schedule, ScheduleDraft, ScheduleStats,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// API 请求使用的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// GET 与 DELETE 不携带请求体
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

/// 端点契约：请求类型 + 响应类型 + 路径 + 方法
pub trait ApiRequest: Serialize {
    /// 该请求对应的响应类型
    type Response: DeserializeOwned;
    /// URL 路径（基地址之后的部分）
    const PATH: &'static str;
    /// HTTP 方法
    const METHOD: Method;

    /// 实际请求路径；带资源 id 的端点覆盖此方法
    fn path(&self) -> String {
        Self::PATH.to_string()
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

/// 登录/注册成功后的会话响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: String,
    pub name: String,
}

/// 只关心可选 message 字段的通用确认响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: Method = Method::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/register";
    const METHOD: Method = Method::Post;
}

/// 发送重置密码邮件；响应内容不被消费
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

impl ApiRequest for ResetPasswordRequest {
    type Response = Confirmation;
    const PATH: &'static str = "/auth/reset-password";
    const METHOD: Method = Method::Post;
}

// =========================================================
// 排程 (Schedules)
// =========================================================

/// 拉取全部排程（顺序以后端返回为准，客户端不排序）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSchedulesRequest;

impl ApiRequest for ListSchedulesRequest {
    type Response = Vec<Schedule>;
    const PATH: &'static str = "/schedules";
    const METHOD: Method = Method::Get;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetScheduleRequest {
    pub id: String,
}

impl ApiRequest for GetScheduleRequest {
    type Response = Schedule;
    const PATH: &'static str = "/schedules";
    const METHOD: Method = Method::Get;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.id)
    }
}

// 创建直接复用表单草稿作为请求体
impl ApiRequest for ScheduleDraft {
    type Response = Schedule;
    const PATH: &'static str = "/schedules";
    const METHOD: Method = Method::Post;
}

/// 更新排程：id 只进路径，请求体就是草稿本身
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub draft: ScheduleDraft,
}

impl ApiRequest for UpdateScheduleRequest {
    type Response = Schedule;
    const PATH: &'static str = "/schedules";
    const METHOD: Method = Method::Put;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScheduleRequest {
    pub id: String,
}

impl ApiRequest for DeleteScheduleRequest {
    type Response = Confirmation;
    const PATH: &'static str = "/schedules";
    const METHOD: Method = Method::Delete;

    fn path(&self) -> String {
        format!("{}/{}", Self::PATH, self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetStatsRequest;

impl ApiRequest for GetStatsRequest {
    type Response = ScheduleStats;
    const PATH: &'static str = "/schedules/stats";
    const METHOD: Method = Method::Get;
}

// =========================================================
// 通知 (Notifications)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCustomersRequest;

impl ApiRequest for ListCustomersRequest {
    type Response = Vec<Customer>;
    const PATH: &'static str = "/notifications/customers";
    const METHOD: Method = Method::Get;
}

// 通知草稿本身就是批量发送的请求体
impl ApiRequest for NotificationDraft {
    type Response = Confirmation;
    const PATH: &'static str = "/notifications/send";
    const METHOD: Method = Method::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHistoryRequest;

impl ApiRequest for GetHistoryRequest {
    type Response = Vec<NotificationRecord>;
    const PATH: &'static str = "/notifications/history";
    const METHOD: Method = Method::Get;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_endpoints_interpolate_the_path() {
        let get = GetScheduleRequest { id: "abc".into() };
        assert_eq!(get.path(), "/schedules/abc");

        let del = DeleteScheduleRequest { id: "42".into() };
        assert_eq!(del.path(), "/schedules/42");
        assert_eq!(DeleteScheduleRequest::METHOD, Method::Delete);
    }

    #[test]
    fn static_endpoints_use_const_path() {
        assert_eq!(ListSchedulesRequest.path(), "/schedules");
        assert_eq!(GetStatsRequest.path(), "/schedules/stats");
        assert_eq!(GetHistoryRequest.path(), "/notifications/history");
    }

    #[test]
    fn update_body_excludes_the_id() {
        let req = UpdateScheduleRequest {
            id: "s9".into(),
            draft: ScheduleDraft {
                customer_name: "Ann".into(),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["customerName"], "Ann");
    }

    #[test]
    fn only_post_and_put_carry_a_body() {
        assert!(Method::Post.has_body());
        assert!(Method::Put.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
    }
}

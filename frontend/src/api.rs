//! API 客户端
//!
//! 所有出站 HTTP 通信的唯一入口：固定基地址与 JSON 内容类型，
//! 每次请求前从 Token 存储读取 Bearer Token（存在则附加）。
//! 端点契约见 `remindly_shared::protocol`。
//!
//! 错误策略：传输失败与 5xx 一律返回 `Err`；读取类端点对其余
//! 非 2xx 也返回 `Err`（优先取响应体中的 `message` 字段）；
//! 变更类端点（创建/更新/删除/发送）把 500 以下的失败状态作为
//! 数据返回（[`MutationOutcome::Rejected`]），由调用方检查。

use crate::web::http::{FetchHttpClient, HttpClient, HttpError, HttpRequest};
use crate::web::storage::{BrowserTokenStore, TokenStore};
use leptos::prelude::*;
use remindly_shared::protocol::{
    ApiRequest, AuthResponse, Confirmation, DeleteScheduleRequest, GetHistoryRequest,
    GetScheduleRequest, GetStatsRequest, ListCustomersRequest, ListSchedulesRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest, UpdateScheduleRequest,
};
use remindly_shared::{
    Customer, NotificationDraft, NotificationRecord, Schedule, ScheduleDraft, ScheduleStats,
};
use serde::de::DeserializeOwned;

/// 编译期注入的 API 基地址，未设置时使用生产环境默认值
pub fn default_base_url() -> &'static str {
    option_env!("REMINDLY_API_URL").unwrap_or("https://schedule-app-73c2.onrender.com/api")
}

// =========================================================
// 错误类型
// =========================================================

/// API 调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 传输层失败（连接不上、请求构建失败等）
    Network(String),
    /// 响应体无法解析为期望的类型
    Decode(String),
    /// 后端返回的非 2xx 状态
    Status { status: u16, message: String },
}

impl ApiError {
    /// 是否为 401，调用方据此触发隐式登出
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
            ApiError::Status { message, .. } => write!(f, "{}", message),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        ApiError::Network(e.to_string())
    }
}

/// 变更类调用的结果：500 以下的失败状态不抛错，作为数据交给调用方
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Ok(T),
    Rejected { status: u16, message: String },
}

/// 从响应体中提取后端给出的 message 字段，没有则退回通用文案
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("请求失败 (HTTP {})", status))
}

// =========================================================
// 客户端
// =========================================================

/// Remindly API 客户端
///
/// HTTP 发送与 Token 存取均为注入的抽象，生产环境使用浏览器
/// fetch + LocalStorage，测试环境替换为内存实现。
#[derive(Clone)]
pub struct RemindlyApi<C = FetchHttpClient, S = BrowserTokenStore> {
    base_url: String,
    client: C,
    tokens: S,
}

impl RemindlyApi {
    /// 生产环境客户端
    pub fn new() -> Self {
        Self::with_parts(default_base_url(), FetchHttpClient, BrowserTokenStore)
    }
}

impl Default for RemindlyApi {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient, S: TokenStore> RemindlyApi<C, S> {
    pub fn with_parts(base_url: &str, client: C, tokens: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 登录/注册成功后持久化 Token
    pub fn adopt_token(&self, token: &str) {
        self.tokens.set(token);
    }

    /// 登出或会话过期时清除 Token
    pub fn clear_token(&self) {
        self.tokens.clear();
    }

    /// 按端点契约构建并发送请求
    async fn dispatch<R: ApiRequest>(&self, req: &R) -> Result<crate::web::http::HttpResponse, ApiError> {
        let mut http_req = HttpRequest::new(&self.url(&req.path()), R::METHOD)
            .with_header("Content-Type", "application/json");

        // Token 每次出站前读取一次，存在才附加
        if let Some(token) = self.tokens.get() {
            http_req = http_req.with_header("Authorization", &format!("Bearer {}", token));
        }

        if R::METHOD.has_body() {
            let body = serde_json::to_string(req)
                .map_err(|e| ApiError::Decode(format!("请求序列化失败: {}", e)))?;
            http_req = http_req.with_body(body);
        }

        Ok(self.client.send(http_req).await?)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 读取类调用：任何非 2xx 都视为错误
    async fn fetch<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let res = self.dispatch(req).await?;
        if !res.ok() {
            return Err(ApiError::Status {
                status: res.status,
                message: error_message(res.status, &res.body),
            });
        }
        Self::decode(&res.body)
    }

    /// 变更类调用：5xx 抛错，500 以下的失败作为 `Rejected` 返回
    async fn mutate<R: ApiRequest>(&self, req: &R) -> Result<MutationOutcome<R::Response>, ApiError> {
        let res = self.dispatch(req).await?;
        if res.status >= 500 {
            return Err(ApiError::Status {
                status: res.status,
                message: error_message(res.status, &res.body),
            });
        }
        if !res.ok() {
            return Ok(MutationOutcome::Rejected {
                status: res.status,
                message: error_message(res.status, &res.body),
            });
        }
        Ok(MutationOutcome::Ok(Self::decode(&res.body)?))
    }

    // ---------------------------------------------------------
    // 认证
    // ---------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.fetch(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.fetch(&RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        })
        .await
    }

    /// 发送重置密码邮件，响应内容不被消费
    pub async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        self.fetch(&ResetPasswordRequest {
            email: email.to_string(),
        })
        .await
        .map(|_: Confirmation| ())
    }

    // ---------------------------------------------------------
    // 排程
    // ---------------------------------------------------------

    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        self.fetch(&ListSchedulesRequest).await
    }

    pub async fn get_schedule(&self, id: &str) -> Result<Schedule, ApiError> {
        self.fetch(&GetScheduleRequest { id: id.to_string() }).await
    }

    pub async fn create_schedule(
        &self,
        draft: &ScheduleDraft,
    ) -> Result<MutationOutcome<Schedule>, ApiError> {
        self.mutate(draft).await
    }

    pub async fn update_schedule(
        &self,
        id: &str,
        draft: &ScheduleDraft,
    ) -> Result<MutationOutcome<Schedule>, ApiError> {
        self.mutate(&UpdateScheduleRequest {
            id: id.to_string(),
            draft: draft.clone(),
        })
        .await
    }

    pub async fn delete_schedule(
        &self,
        id: &str,
    ) -> Result<MutationOutcome<Confirmation>, ApiError> {
        self.mutate(&DeleteScheduleRequest { id: id.to_string() }).await
    }

    pub async fn get_stats(&self) -> Result<ScheduleStats, ApiError> {
        self.fetch(&GetStatsRequest).await
    }

    // ---------------------------------------------------------
    // 通知
    // ---------------------------------------------------------

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.fetch(&ListCustomersRequest).await
    }

    pub async fn send_notification(
        &self,
        draft: &NotificationDraft,
    ) -> Result<MutationOutcome<Confirmation>, ApiError> {
        self.mutate(draft).await
    }

    pub async fn get_history(&self) -> Result<Vec<NotificationRecord>, ApiError> {
        self.fetch(&GetHistoryRequest).await
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> RemindlyApi {
    use_context::<RemindlyApi>().expect("RemindlyApi should be provided")
}

#[cfg(test)]
mod tests;

//! 认证模块
//!
//! 管理当前会话状态（匿名 / 已认证），与路由系统解耦：路由服务
//! 只消费注入的认证信号。状态只通过 login/register/logout 三个
//! 操作变更，不存在“认证中”的中间态暴露给消费者。
//!
//! 会话标志与持久化 Token 可能失同步（刷新页面、Token 服务端过
//! 期）。约定：刷新后回到匿名态；任何 API 调用返回 401 视为隐式
//! 登出（见 [`expire_session`]）。

use crate::api::{ApiError, RemindlyApi};
use crate::web::http::HttpClient;
use crate::web::storage::TokenStore;
use leptos::prelude::*;
use remindly_shared::Session;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（仅在认证成功后存在）
    pub user: Option<Session>,
    /// 是否正在初始化
    pub is_loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            user: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 页面加载后总是从匿名态开始；残留的旧 Token 不会自动恢复会话，
/// 只会在下一次登录或登出时被覆盖/清除。
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.is_loading = false;
    });
}

/// 登录：成功后持久化 Token 并采用返回的身份字段
pub async fn login<C: HttpClient, S: TokenStore>(
    ctx: &AuthContext,
    api: &RemindlyApi<C, S>,
    email: String,
    password: String,
) -> Result<(), String> {
    let resp = api.login(&email, &password).await.map_err(|e| e.to_string())?;
    api.adopt_token(&resp.token);
    ctx.set_state.update(|state| {
        state.user = Some(Session {
            user_id: resp.id,
            email,
            name: resp.name,
        });
    });
    Ok(())
}

/// 注册：契约与登录一致
pub async fn register<C: HttpClient, S: TokenStore>(
    ctx: &AuthContext,
    api: &RemindlyApi<C, S>,
    email: String,
    password: String,
    name: String,
) -> Result<(), String> {
    let resp = api
        .register(&email, &password, &name)
        .await
        .map_err(|e| e.to_string())?;
    api.adopt_token(&resp.token);
    ctx.set_state.update(|state| {
        state.user = Some(Session {
            user_id: resp.id,
            email,
            name: resp.name,
        });
    });
    Ok(())
}

/// 发送重置密码邮件（不改变会话状态）
pub async fn reset_password<C: HttpClient, S: TokenStore>(
    api: &RemindlyApi<C, S>,
    email: String,
) -> Result<(), String> {
    api.reset_password(&email).await.map_err(|e| e.to_string())
}

/// 注销：无条件清除会话与持久化 Token
///
/// 导航由路由服务监听认证状态变化自动处理。
pub fn logout<C: HttpClient, S: TokenStore>(ctx: &AuthContext, api: &RemindlyApi<C, S>) {
    api.clear_token();
    ctx.set_state.update(|state| {
        state.user = None;
    });
}

/// 会话过期处理：后端返回 401 时的隐式登出
pub fn expire_session<C: HttpClient, S: TokenStore>(ctx: &AuthContext, api: &RemindlyApi<C, S>) {
    web_sys::console::log_1(&"[Auth] Session expired (401). Logging out.".into());
    logout(ctx, api);
}

/// 把 API 错误转为用户可见文案；401 同时触发隐式登出
pub fn describe_api_error(ctx: &AuthContext, api: &RemindlyApi, err: &ApiError) -> String {
    if err.is_unauthorized() {
        expire_session(ctx, api);
        return "登录已过期，请重新登录".to_string();
    }
    err.to_string()
}

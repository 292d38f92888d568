//! Remindly 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 后端 API 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod create_schedule;
    pub mod dashboard;
    mod date_input;
    pub mod forgot_password;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod manage_schedules;
    pub mod notifications;
    pub mod register;
    mod status_badge;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web;

use crate::api::RemindlyApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::create_schedule::CreateSchedulePage;
use crate::components::dashboard::DashboardPage;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::manage_schedules::ManageSchedulesPage;
use crate::components::notifications::NotificationsPage;
use crate::components::register::RegisterPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。受保护页面统一包在
/// 导航外壳 [`Layout`] 里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <Layout><DashboardPage /></Layout>
        }
        .into_any(),
        AppRoute::CreateSchedule => view! {
            <Layout><CreateSchedulePage /></Layout>
        }
        .into_any(),
        AppRoute::ManageSchedules => view! {
            <Layout><ManageSchedulesPage /></Layout>
        }
        .into_any(),
        AppRoute::EditSchedule(_) => view! {
            <Layout>
                <div class="card bg-base-100 shadow max-w-lg mx-auto">
                    <div class="card-body text-center">
                        <h2 class="card-title justify-center">"编辑排程"</h2>
                        <p class="text-base-content/70">"编辑功能开发中"</p>
                    </div>
                </div>
            </Layout>
        }
        .into_any(),
        AppRoute::Notifications => view! {
            <Layout><NotificationsPage /></Layout>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 提供 API 客户端（HTTP 发送与 Token 存取都在其内部）
    provide_context(RemindlyApi::new());

    // 3. 初始化认证状态（刷新后总是回到匿名态）
    init_auth(&auth_ctx);

    // 4. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 5. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

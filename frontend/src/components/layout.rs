//! 受保护页面的外壳
//!
//! 顶部导航栏（页面链接 + 注销按钮）加内容区域。注销后的跳转
//! 由路由服务监听认证状态变化自动完成。

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Truck};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let router = use_router();

    let user_name = move || {
        auth_ctx
            .state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        logout(&auth_ctx, &api);
    };

    let current = router.current_route();
    let link_class = move |path: &str| {
        if current.get().to_path() == path {
            "btn btn-ghost btn-sm btn-active"
        } else {
            "btn btn-ghost btn-sm"
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-lg px-4">
                <div class="flex-1 gap-2">
                    <Truck attr:class="h-6 w-6 text-primary" />
                    <span class="text-xl font-bold">"Remindly 配送提醒"</span>
                </div>
                <div class="flex-none gap-1">
                    <Link to="/dashboard">
                        <span class=move || link_class("/dashboard")>"控制面板"</span>
                    </Link>
                    <Link to="/create-schedule">
                        <span class=move || link_class("/create-schedule")>"新建排程"</span>
                    </Link>
                    <Link to="/manage-schedules">
                        <span class=move || link_class("/manage-schedules")>"排程管理"</span>
                    </Link>
                    <Link to="/notifications">
                        <span class=move || link_class("/notifications")>"通知中心"</span>
                    </Link>
                    <span class="badge badge-neutral hidden md:inline-flex mx-2">
                        {user_name}
                    </span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                        <LogOut attr:class="h-4 w-4" /> "注销"
                    </button>
                </div>
            </div>
            <main class="max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
        </div>
    }
}

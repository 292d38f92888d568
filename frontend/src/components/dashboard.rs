//! 控制面板
//!
//! 聚合统计卡片 + 最近的进行中排程。数据在挂载时一次性加载，
//! 右上角提供手动刷新。

use crate::api::use_api;
use crate::auth::{describe_api_error, use_auth};
use crate::components::icons::{CheckCircle, Clock, Package, Plus, RefreshCw};
use crate::components::status_badge::StatusBadge;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use remindly_shared::{Schedule, ScheduleStats, ScheduleStatus};

/// 取进行中的排程，按送达日期升序，最多 `limit` 条
fn upcoming(schedules: &[Schedule], limit: usize) -> Vec<Schedule> {
    let mut active: Vec<Schedule> = schedules
        .iter()
        .filter(|s| s.status == ScheduleStatus::Active)
        .cloned()
        .collect();
    active.sort_by_key(|s| s.delivery_date);
    active.truncate(limit);
    active
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let (stats, set_stats) = signal(ScheduleStats::default());
    let (schedules, set_schedules) = signal(Vec::<Schedule>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_is_loading.set(true);
            set_error_msg.set(None);
            spawn_local(async move {
                // 两个请求串行发出，统计失败不影响列表展示
                match api.get_stats().await {
                    Ok(s) => set_stats.set(s),
                    Err(e) => set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e))),
                }
                match api.list_schedules().await {
                    Ok(list) => set_schedules.set(list),
                    Err(e) => set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e))),
                }
                set_is_loading.set(false);
            });
        }
    };

    // 挂载时加载
    {
        let load = load.clone();
        Effect::new(move |prev: Option<()>| {
            if prev.is_none() {
                load();
            }
        });
    }

    let on_refresh = {
        let load = load.clone();
        move |_| load()
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"控制面板"</h1>
                    <p class="text-base-content/70">"配送排程概览"</p>
                </div>
                <div class="flex gap-2">
                    <button on:click=on_refresh class="btn btn-ghost btn-sm gap-2" disabled=move || is_loading.get()>
                        <RefreshCw attr:class="h-4 w-4" /> "刷新"
                    </button>
                    <Link to="/create-schedule">
                        <span class="btn btn-primary btn-sm gap-2">
                            <Plus attr:class="h-4 w-4" /> "新建排程"
                        </span>
                    </Link>
                </div>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-figure text-primary">
                        <Package attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"排程总数"</div>
                    <div class="stat-value">{move || stats.get().total}</div>
                </div>
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-figure text-success">
                        <Clock attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"进行中"</div>
                    <div class="stat-value text-success">{move || stats.get().active}</div>
                </div>
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-figure text-info">
                        <CheckCircle attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"已完成"</div>
                    <div class="stat-value text-info">{move || stats.get().completed}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"即将送达"</h2>
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-8">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        }
                    >
                        <Show
                            when=move || !upcoming(&schedules.get(), 5).is_empty()
                            fallback=|| view! {
                                <p class="text-base-content/60 py-4">"暂无进行中的排程"</p>
                            }
                        >
                            <div class="overflow-x-auto">
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"客户"</th>
                                            <th>"发货日期"</th>
                                            <th>"送达日期"</th>
                                            <th>"状态"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || upcoming(&schedules.get(), 5)
                                            key=|s| s.id.clone()
                                            children=|s: Schedule| {
                                                view! {
                                                    <tr>
                                                        <td class="font-medium">{s.customer_name.clone()}</td>
                                                        <td>{s.dispatch_date.to_string()}</td>
                                                        <td>{s.delivery_date.to_string()}</td>
                                                        <td><StatusBadge status=s.status /></td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remindly_shared::CalendarDate;

    fn schedule(id: &str, delivery: &str, status: ScheduleStatus) -> Schedule {
        Schedule {
            id: id.to_string(),
            customer_name: format!("客户 {}", id),
            dispatch_date: CalendarDate::parse("2024-01-01").unwrap(),
            delivery_date: CalendarDate::parse(delivery).unwrap(),
            phone: "0123456789".into(),
            email: "c@x.com".into(),
            notes: String::new(),
            status,
        }
    }

    #[test]
    fn upcoming_keeps_only_active_sorted_by_delivery() {
        let list = vec![
            schedule("a", "2024-03-01", ScheduleStatus::Active),
            schedule("b", "2024-02-01", ScheduleStatus::Completed),
            schedule("c", "2024-01-15", ScheduleStatus::Active),
        ];
        let up = upcoming(&list, 5);
        assert_eq!(
            up.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            vec!["c", "a"]
        );
    }

    #[test]
    fn upcoming_respects_limit() {
        let list: Vec<Schedule> = (0..10)
            .map(|i| schedule(&format!("s{}", i), "2024-01-10", ScheduleStatus::Active))
            .collect();
        assert_eq!(upcoming(&list, 5).len(), 5);
    }
}

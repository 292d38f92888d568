//! 排程管理页面
//!
//! 列表在挂载时加载一次，之后的搜索与状态过滤全部在内存中完成，
//! 不再发起请求。删除采用两段式：先等后端确认，成功才从本地列表
//! 移除，失败时列表保持原样。

use crate::api::{ApiError, MutationOutcome, RemindlyApi, use_api};
use crate::auth::{describe_api_error, use_auth};
use crate::components::icons::{Edit2, Filter, Search, Trash2};
use crate::components::status_badge::StatusBadge;
use crate::web::http::HttpClient;
use crate::web::router::Link;
use crate::web::storage::TokenStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use remindly_shared::{Schedule, StatusFilter, filter_schedules};

/// 删除一条排程并在确认成功后从本地列表移除
///
/// 任何失败（后端拒绝、5xx、传输错误）都保持列表不变。
pub(crate) async fn delete_and_prune<C: HttpClient, S: TokenStore>(
    api: &RemindlyApi<C, S>,
    schedules: &mut Vec<Schedule>,
    id: &str,
) -> Result<(), ApiError> {
    match api.delete_schedule(id).await? {
        MutationOutcome::Ok(_) => {
            schedules.retain(|s| s.id != id);
            Ok(())
        }
        MutationOutcome::Rejected { status, message } => {
            Err(ApiError::Status { status, message })
        }
    }
}

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("确定删除 {} 的配送排程?", name))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
pub fn ManageSchedulesPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let (schedules, set_schedules) = signal(Vec::<Schedule>::new());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (is_loading, set_is_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (deleting_id, set_deleting_id) = signal(Option::<String>::None);

    {
        let api = api.clone();
        Effect::new(move |prev: Option<()>| {
            if prev.is_some() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.list_schedules().await {
                    Ok(list) => set_schedules.set(list),
                    Err(e) => set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e))),
                }
                set_is_loading.set(false);
            });
        });
    }

    // 过滤是纯内存操作，输入变化即重算
    let filtered = move || filter_schedules(&schedules.get(), &search.get(), status_filter.get());

    let on_delete = Callback::new(move |schedule: Schedule| {
        if !confirm_delete(&schedule.customer_name) {
            return;
        }
        set_deleting_id.set(Some(schedule.id.clone()));
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let mut list = schedules.get_untracked();
            match delete_and_prune(&api, &mut list, &schedule.id).await {
                Ok(()) => set_schedules.set(list),
                Err(e) => set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e))),
            }
            set_deleting_id.set(None);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"排程管理"</h1>
                <p class="text-base-content/70">"查看、搜索并管理全部配送排程"</p>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="flex flex-col md:flex-row gap-4">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="按客户姓名或邮箱搜索"
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </label>
                <label class="select select-bordered flex items-center gap-2 md:w-52">
                    <Filter attr:class="h-4 w-4 opacity-60" />
                    <select
                        class="grow bg-transparent outline-none"
                        on:change=move |ev| {
                            set_status_filter.set(StatusFilter::from_value(&event_target_value(&ev)));
                        }
                    >
                        <option value="all" selected=move || status_filter.get() == StatusFilter::All>
                            "全部状态"
                        </option>
                        <option value="Active">"进行中"</option>
                        <option value="Completed">"已完成"</option>
                        <option value="Canceled">"已取消"</option>
                    </select>
                </label>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <Show
                        when=move || !is_loading.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-12">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        }
                    >
                        <Show
                            when=move || !filtered().is_empty()
                            fallback=|| view! {
                                <p class="text-base-content/60 text-center py-12">"没有匹配的排程"</p>
                            }
                        >
                            <div class="overflow-x-auto">
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"客户"</th>
                                            <th>"发货日期"</th>
                                            <th>"送达日期"</th>
                                            <th>"联系方式"</th>
                                            <th>"状态"</th>
                                            <th class="text-right">"操作"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=filtered
                                            key=|s| s.id.clone()
                                            children=move |s: Schedule| {
                                                let row = s.clone();
                                                let row_id = s.id.clone();
                                                let is_deleting = move || {
                                                    deleting_id.get().as_deref() == Some(row_id.as_str())
                                                };
                                                view! {
                                                    <tr>
                                                        <td class="font-medium">{s.customer_name.clone()}</td>
                                                        <td>{s.dispatch_date.to_string()}</td>
                                                        <td>{s.delivery_date.to_string()}</td>
                                                        <td>
                                                            <div class="text-sm">{s.phone.clone()}</div>
                                                            <div class="text-xs opacity-60">{s.email.clone()}</div>
                                                        </td>
                                                        <td><StatusBadge status=s.status /></td>
                                                        <td class="text-right">
                                                            <div class="flex justify-end gap-1">
                                                                <Link to=format!("/edit-schedule/{}", s.id)>
                                                                    <span class="btn btn-ghost btn-xs">
                                                                        <Edit2 attr:class="h-4 w-4" />
                                                                    </span>
                                                                </Link>
                                                                <button
                                                                    class="btn btn-ghost btn-xs text-error"
                                                                    disabled=is_deleting
                                                                    on:click=move |_| on_delete.run(row.clone())
                                                                >
                                                                    <Trash2 attr:class="h-4 w-4" />
                                                                </button>
                                                            </div>
                                                        </td>
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
mod tests;

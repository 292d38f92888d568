//! 通知中心页面
//!
//! 发送面板 + 历史记录两个标签页。发送是一次批量请求：选中的
//! 客户集合、消息与渠道打包提交，校验不通过时不发起任何请求。

use crate::api::{MutationOutcome, use_api};
use crate::auth::{describe_api_error, use_auth};
use crate::components::icons::{Mail, MessageSquare, Send};
use leptos::prelude::*;
use leptos::task::spawn_local;
use remindly_shared::{Channel, Customer, NotificationDraft, NotificationRecord, NotificationStatus};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Compose,
    History,
}

fn channel_from_value(value: &str) -> Channel {
    match value {
        "sms" => Channel::Sms,
        "whatsapp" => Channel::Whatsapp,
        _ => Channel::Email,
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let (tab, set_tab) = signal(Tab::Compose);
    let (customers, set_customers) = signal(Vec::<Customer>::new());
    let (history, set_history) = signal(Vec::<NotificationRecord>::new());
    let draft = RwSignal::new(NotificationDraft::default());
    let (is_loading, set_is_loading) = signal(true);
    let (is_sending, set_is_sending) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    // 挂载时加载客户列表与历史
    {
        let api = api.clone();
        Effect::new(move |prev: Option<()>| {
            if prev.is_some() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.list_customers().await {
                    Ok(list) => set_customers.set(list),
                    Err(e) => set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e))),
                }
                match api.get_history().await {
                    Ok(list) => set_history.set(list),
                    Err(e) => set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e))),
                }
                set_is_loading.set(false);
            });
        });
    }

    let all_selected = move || {
        let list = customers.get();
        !list.is_empty() && list.iter().all(|c| draft.read().is_selected(&c.id))
    };

    let toggle_all = move |_| {
        let list = customers.get_untracked();
        draft.update(|d| {
            if list.iter().all(|c| d.is_selected(&c.id)) {
                d.customer_ids.clear();
            } else {
                d.customer_ids = list.iter().map(|c| c.id.clone()).collect();
            }
        });
    };

    let on_send = Callback::new(move |_| {
        let current = draft.get_untracked();
        if let Err(msg) = current.validate() {
            set_error_msg.set(Some(msg));
            return;
        }

        set_is_sending.set(true);
        set_error_msg.set(None);
        set_success_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.send_notification(&current).await {
                Ok(MutationOutcome::Ok(confirmation)) => {
                    draft.update(|d| d.clear_after_send());
                    set_success_msg.set(Some(
                        confirmation.message.unwrap_or_else(|| "通知已发送".to_string()),
                    ));
                    // 发送成功后刷新历史
                    if let Ok(list) = api.get_history().await {
                        set_history.set(list);
                    }
                }
                Ok(MutationOutcome::Rejected { message, .. }) => {
                    set_error_msg.set(Some(message));
                }
                Err(e) => {
                    set_error_msg.set(Some(describe_api_error(&auth_ctx, &api, &e)));
                }
            }
            set_is_sending.set(false);
        });
    });

    let selected_count = move || draft.read().customer_ids.len();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"通知中心"</h1>
                <p class="text-base-content/70">"向客户批量发送配送提醒"</p>
            </div>

            <div role="tablist" class="tabs tabs-boxed w-fit">
                <a
                    role="tab"
                    class=move || if tab.get() == Tab::Compose { "tab tab-active" } else { "tab" }
                    on:click=move |_| set_tab.set(Tab::Compose)
                >
                    "发送通知"
                </a>
                <a
                    role="tab"
                    class=move || if tab.get() == Tab::History { "tab tab-active" } else { "tab" }
                    on:click=move |_| set_tab.set(Tab::History)
                >
                    "发送历史"
                </a>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>
            <Show when=move || success_msg.get().is_some()>
                <div role="alert" class="alert alert-success">
                    <span>{move || success_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-12">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
            >
                <Show
                    when=move || tab.get() == Tab::Compose
                    fallback=move || view! { <HistoryTable history=history /> }
                >
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <div class="flex items-center justify-between">
                                    <h2 class="card-title">"选择客户"</h2>
                                    <label class="label cursor-pointer gap-2">
                                        <span class="label-text">"全选"</span>
                                        <input
                                            type="checkbox"
                                            class="checkbox checkbox-sm"
                                            prop:checked=all_selected
                                            on:change=toggle_all
                                        />
                                    </label>
                                </div>
                                <Show
                                    when=move || !customers.get().is_empty()
                                    fallback=|| view! {
                                        <p class="text-base-content/60 py-4">"暂无客户"</p>
                                    }
                                >
                                    <div class="overflow-y-auto max-h-96 space-y-1">
                                        <For
                                            each=move || customers.get()
                                            key=|c| c.id.clone()
                                            children=move |c: Customer| {
                                                let id = c.id.clone();
                                                let id_for_toggle = c.id.clone();
                                                view! {
                                                    <label class="flex items-center gap-3 p-2 rounded-lg hover:bg-base-200 cursor-pointer">
                                                        <input
                                                            type="checkbox"
                                                            class="checkbox checkbox-sm"
                                                            prop:checked=move || draft.read().is_selected(&id)
                                                            on:change=move |_| {
                                                                draft.update(|d| d.toggle(&id_for_toggle));
                                                            }
                                                        />
                                                        <div class="flex-1">
                                                            <div class="font-medium">{c.name.clone()}</div>
                                                            <div class="text-xs opacity-60">{c.email.clone()}</div>
                                                        </div>
                                                        <div class="text-xs opacity-60">
                                                            "最近送达: " {c.last_delivery.clone()}
                                                        </div>
                                                    </label>
                                                }
                                            }
                                        />
                                    </div>
                                </Show>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow h-fit">
                            <div class="card-body">
                                <h2 class="card-title">
                                    <MessageSquare attr:class="h-5 w-5" /> "通知内容"
                                </h2>
                                <div class="form-control">
                                    <label class="label" for="channel">
                                        <span class="label-text">"发送渠道"</span>
                                    </label>
                                    <select
                                        id="channel"
                                        class="select select-bordered"
                                        on:change=move |ev| {
                                            let channel = channel_from_value(&event_target_value(&ev));
                                            draft.update(|d| d.channel = channel);
                                        }
                                    >
                                        <option value="email" selected=move || draft.read().channel == Channel::Email>
                                            {Channel::Email.label()}
                                        </option>
                                        <option value="sms" selected=move || draft.read().channel == Channel::Sms>
                                            {Channel::Sms.label()}
                                        </option>
                                        <option value="whatsapp" selected=move || draft.read().channel == Channel::Whatsapp>
                                            {Channel::Whatsapp.label()}
                                        </option>
                                    </select>
                                </div>
                                <div class="form-control">
                                    <label class="label" for="message">
                                        <span class="label-text">"消息"</span>
                                    </label>
                                    <textarea
                                        id="message"
                                        rows="5"
                                        placeholder="您好，您的包裹预计明天送达..."
                                        class="textarea textarea-bordered w-full"
                                        prop:value=move || draft.read().message.clone()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            draft.update(|d| d.message = value);
                                        }
                                    ></textarea>
                                </div>
                                <div class="card-actions justify-between items-center mt-2">
                                    <span class="text-sm opacity-60">
                                        {move || format!("已选 {} 位客户", selected_count())}
                                    </span>
                                    <button
                                        class="btn btn-primary gap-2"
                                        disabled=move || is_sending.get()
                                        on:click=move |_| on_send.run(())
                                    >
                                        {move || if is_sending.get() {
                                            view! { <span class="loading loading-spinner"></span> "发送中..." }.into_any()
                                        } else {
                                            view! { <Send attr:class="h-4 w-4" /> "发送" }.into_any()
                                        }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn HistoryTable(history: ReadSignal<Vec<NotificationRecord>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body p-0">
                <Show
                    when=move || !history.get().is_empty()
                    fallback=|| view! {
                        <p class="text-base-content/60 text-center py-12">"暂无发送记录"</p>
                    }
                >
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"客户"</th>
                                    <th>"消息"</th>
                                    <th>"渠道"</th>
                                    <th>"发送时间"</th>
                                    <th>"状态"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || history.get()
                                    key=|r| r.id.clone()
                                    children=|r: NotificationRecord| {
                                        view! {
                                            <tr>
                                                <td class="font-medium">{r.customer_name.clone()}</td>
                                                <td class="max-w-xs truncate">{r.message.clone()}</td>
                                                <td>
                                                    <span class="badge badge-ghost gap-1">
                                                        <Mail attr:class="h-3 w-3" />
                                                        {r.channel.label()}
                                                    </span>
                                                </td>
                                                <td class="text-sm opacity-70">{r.sent_at.clone()}</td>
                                                <td>
                                                    {match r.status {
                                                        NotificationStatus::Sent => view! {
                                                            <span class="badge badge-success badge-outline">"已发送"</span>
                                                        }.into_any(),
                                                        NotificationStatus::Failed => view! {
                                                            <span class="badge badge-error badge-outline">"失败"</span>
                                                        }.into_any(),
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::channel_from_value;
    use remindly_shared::Channel;

    #[test]
    fn channel_values_map_to_variants() {
        assert_eq!(channel_from_value("email"), Channel::Email);
        assert_eq!(channel_from_value("sms"), Channel::Sms);
        assert_eq!(channel_from_value("whatsapp"), Channel::Whatsapp);
        // 未知值退回默认渠道
        assert_eq!(channel_from_value("fax"), Channel::Email);
    }
}

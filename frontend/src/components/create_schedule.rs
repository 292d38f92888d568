//! 新建排程页面
//!
//! 错误展示采用“首次提交后实时”策略：提交前不打扰输入，
//! 提交一次后任何字段变化都重新校验。发货日期变化会使已选的
//! 更早送达日期重新变为无效并阻止提交。

mod form_state;

pub use form_state::{ScheduleFormState, SubmitState, delivery_lower_bound};

use crate::api::{MutationOutcome, use_api};
use crate::auth::{describe_api_error, use_auth};
use crate::components::date_input::DateInput;
use crate::components::icons::Plus;
use crate::web::clock::local_today;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use remindly_shared::validate_draft;

#[component]
pub fn CreateSchedulePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let router = use_router();

    let form = ScheduleFormState::new(local_today());

    // 首次提交后，任何输入变化都触发重新校验
    Effect::new(move |_| {
        let draft = form.draft();
        if form.attempted.get() {
            form.errors.set(validate_draft(&draft, form.today()));
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.validate() {
            return;
        }

        form.submit.set(SubmitState::Submitting);
        let draft = form.draft_untracked().normalized();

        let api = api.clone();
        spawn_local(async move {
            match api.create_schedule(&draft).await {
                Ok(MutationOutcome::Ok(_)) => {
                    form.reset();
                    form.submit.set(SubmitState::Succeeded);
                    // 短暂展示成功提示后跳转到排程管理页
                    set_timeout(
                        move || router.navigate("/manage-schedules"),
                        std::time::Duration::from_millis(800),
                    );
                }
                Ok(MutationOutcome::Rejected { message, .. }) => {
                    form.submit.set(SubmitState::Failed(message));
                }
                Err(e) => {
                    let msg = describe_api_error(&auth_ctx, &api, &e);
                    form.submit.set(SubmitState::Failed(msg));
                }
            }
        });
    };

    let is_submitting = move || form.submit.get() == SubmitState::Submitting;
    let failure_msg = move || match form.submit.get() {
        SubmitState::Failed(msg) => Some(msg),
        _ => None,
    };

    let errors = form.errors;
    let field_class = move |has_error: bool| {
        if has_error {
            "input input-bordered input-error w-full"
        } else {
            "input input-bordered w-full"
        }
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"新建排程"</h1>
                <p class="text-base-content/70">"登记一条新的客户配送排程"</p>
            </div>

            <Show when=move || form.submit.get() == SubmitState::Succeeded>
                <div role="alert" class="alert alert-success">
                    <span>"排程创建成功"</span>
                </div>
            </Show>
            <Show when=move || failure_msg().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || failure_msg().unwrap_or_default()}</span>
                </div>
            </Show>

            <form class="card bg-base-100 shadow" on:submit=on_submit>
                <div class="card-body space-y-2">
                    <div class="form-control">
                        <label class="label" for="customer-name">
                            <span class="label-text">"客户姓名"</span>
                        </label>
                        <input
                            id="customer-name"
                            type="text"
                            placeholder="客户姓名"
                            class=move || field_class(errors.get().customer_name.is_some())
                            prop:value=form.customer_name
                            on:input=move |ev| form.customer_name.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().customer_name.is_some()>
                            <label class="label">
                                <span class="label-text-alt text-error">
                                    {move || errors.get().customer_name.unwrap_or_default()}
                                </span>
                            </label>
                        </Show>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <DateInput
                            id="dispatch-date"
                            label="发货日期"
                            value=form.dispatch_date
                            min=form.dispatch_min()
                            error=Signal::derive(move || errors.get().dispatch_date)
                        />
                        <DateInput
                            id="delivery-date"
                            label="送达日期"
                            value=form.delivery_date
                            min=form.delivery_min()
                            error=Signal::derive(move || errors.get().delivery_date)
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="phone">
                            <span class="label-text">"联系电话"</span>
                        </label>
                        <input
                            id="phone"
                            type="tel"
                            placeholder="+86 138 0000 0000"
                            class=move || field_class(errors.get().phone.is_some())
                            prop:value=form.phone
                            on:input=move |ev| form.phone.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().phone.is_some()>
                            <label class="label">
                                <span class="label-text-alt text-error">
                                    {move || errors.get().phone.unwrap_or_default()}
                                </span>
                            </label>
                        </Show>
                    </div>

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"邮箱"</span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="customer@example.com"
                            class=move || field_class(errors.get().email.is_some())
                            prop:value=form.email
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                        />
                        <Show when=move || errors.get().email.is_some()>
                            <label class="label">
                                <span class="label-text-alt text-error">
                                    {move || errors.get().email.unwrap_or_default()}
                                </span>
                            </label>
                        </Show>
                    </div>

                    <div class="form-control">
                        <label class="label" for="notes">
                            <span class="label-text">"备注（可选）"</span>
                        </label>
                        <textarea
                            id="notes"
                            placeholder="配送注意事项等"
                            class="textarea textarea-bordered w-full"
                            prop:value=form.notes
                            on:input=move |ev| form.notes.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary gap-2" disabled=is_submitting>
                            {move || if is_submitting() {
                                view! { <span class="loading loading-spinner"></span> "提交中..." }.into_any()
                            } else {
                                view! { <Plus attr:class="h-4 w-4" /> "创建排程" }.into_any()
                            }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

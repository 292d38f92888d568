//! 忘记密码页面
//!
//! 只发送重置邮件，不改变会话状态。成功后停留在本页显示提示。

use crate::api::use_api;
use crate::auth::reset_password;
use crate::components::icons::Mail;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = use_api();

    let (email, set_email) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() {
            set_error_msg.set(Some("请填写邮箱".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            match reset_password(&api, email.get_untracked()).await {
                Ok(()) => set_sent.set(true),
                Err(msg) => set_error_msg.set(Some(msg)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Mail attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"重置密码"</h1>
                        <p class="text-base-content/70">"输入邮箱，我们会发送重置链接"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || sent.get()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>"重置邮件已发送，请查收邮箱"</span>
                            </div>
                        </Show>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "发送中..." }.into_any()
                                } else {
                                    "发送重置邮件".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center text-sm mt-2">
                            <Link to="/">
                                <span class="link">"返回登录"</span>
                            </Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

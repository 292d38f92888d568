//! 日期输入组件
//!
//! `min` 是响应式属性：送达日期的下界跟随已选发货日期变化。
//! 注意 `min` 只约束输入控件，已选中的更早值由校验层拦截。

use leptos::prelude::*;

#[component]
pub fn DateInput(
    /// 输入控件 id
    id: &'static str,
    /// 标签文字
    label: &'static str,
    /// 字段值信号
    value: RwSignal<String>,
    /// 允许的最小日期（YYYY-MM-DD）
    #[prop(into)]
    min: Signal<String>,
    /// 当前校验错误
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type="date"
                class=move || {
                    if error.get().is_some() {
                        "input input-bordered input-error w-full"
                    } else {
                        "input input-bordered w-full"
                    }
                }
                min=move || min.get()
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <label class="label">
                    <span class="label-text-alt text-error">
                        {move || error.get().unwrap_or_default()}
                    </span>
                </label>
            </Show>
        </div>
    }
}

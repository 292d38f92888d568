//! 排程状态徽章

use leptos::prelude::*;
use remindly_shared::ScheduleStatus;

/// 状态对应的界面文案
fn status_label(status: ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::Active => "进行中",
        ScheduleStatus::Completed => "已完成",
        ScheduleStatus::Canceled => "已取消",
    }
}

#[component]
pub fn StatusBadge(status: ScheduleStatus) -> impl IntoView {
    let class = match status {
        ScheduleStatus::Active => "badge badge-success badge-outline",
        ScheduleStatus::Completed => "badge badge-info badge-outline",
        ScheduleStatus::Canceled => "badge badge-ghost",
    };

    view! { <span class=class>{status_label(status)}</span> }
}

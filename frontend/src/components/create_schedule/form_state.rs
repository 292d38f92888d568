//! 排程表单状态
//!
//! 字段信号 + 校验错误的集中管理。校验时机：首次提交前不显示
//! 错误，首次提交后任何字段变化都会触发重新校验（包括发货日期
//! 变化导致已选送达日期失效的情况）。

use leptos::prelude::*;
use remindly_shared::{CalendarDate, FormErrors, ScheduleDraft, validate_draft};

/// 提交状态机
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// 后端拒绝或传输失败，携带用户可见文案
    Failed(String),
}

/// 送达日期的动态下界：发货日期已选且可解析时取发货日期，否则取今天
pub fn delivery_lower_bound(dispatch: &str, today: CalendarDate) -> String {
    CalendarDate::parse(dispatch)
        .unwrap_or(today)
        .to_string()
}

/// 排程表单的响应式状态
///
/// `today` 在表单创建时取定一次，作为发货日期下界。
#[derive(Clone, Copy)]
pub struct ScheduleFormState {
    pub customer_name: RwSignal<String>,
    pub dispatch_date: RwSignal<String>,
    pub delivery_date: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub email: RwSignal<String>,
    pub notes: RwSignal<String>,
    /// 当前校验错误（首次提交前始终为空）
    pub errors: RwSignal<FormErrors>,
    /// 是否已尝试过提交
    pub attempted: RwSignal<bool>,
    pub submit: RwSignal<SubmitState>,
    today: CalendarDate,
}

impl ScheduleFormState {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            customer_name: RwSignal::new(String::new()),
            dispatch_date: RwSignal::new(String::new()),
            delivery_date: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            errors: RwSignal::new(FormErrors::default()),
            attempted: RwSignal::new(false),
            submit: RwSignal::new(SubmitState::Idle),
            today,
        }
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// 汇集当前输入（追踪依赖，供重新校验的 Effect 使用）
    pub fn draft(&self) -> ScheduleDraft {
        ScheduleDraft {
            customer_name: self.customer_name.get().trim().to_string(),
            dispatch_date: self.dispatch_date.get(),
            delivery_date: self.delivery_date.get(),
            phone: self.phone.get().trim().to_string(),
            email: self.email.get().trim().to_string(),
            notes: self.notes.get().trim().to_string(),
        }
    }

    pub fn draft_untracked(&self) -> ScheduleDraft {
        ScheduleDraft {
            customer_name: self.customer_name.get_untracked().trim().to_string(),
            dispatch_date: self.dispatch_date.get_untracked(),
            delivery_date: self.delivery_date.get_untracked(),
            phone: self.phone.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            notes: self.notes.get_untracked().trim().to_string(),
        }
    }

    /// 提交时的完整校验，返回是否全部通过
    pub fn validate(&self) -> bool {
        self.attempted.set(true);
        let errors = validate_draft(&self.draft_untracked(), self.today);
        let ok = errors.is_ok();
        self.errors.set(errors);
        ok
    }

    /// 送达日期控件的 `min` 属性
    pub fn delivery_min(&self) -> Signal<String> {
        let dispatch = self.dispatch_date;
        let today = self.today;
        Signal::derive(move || delivery_lower_bound(&dispatch.get(), today))
    }

    /// 发货日期控件的 `min` 属性（固定为今天）
    pub fn dispatch_min(&self) -> String {
        self.today.to_string()
    }

    /// 成功提交后清空全部输入
    pub fn reset(&self) {
        self.customer_name.set(String::new());
        self.dispatch_date.set(String::new());
        self.delivery_date.set(String::new());
        self.phone.set(String::new());
        self.email.set(String::new());
        self.notes.set(String::new());
        self.errors.set(FormErrors::default());
        self.attempted.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        CalendarDate::parse("2024-06-01").unwrap()
    }

    #[test]
    fn delivery_lower_bound_follows_dispatch() {
        assert_eq!(delivery_lower_bound("2024-06-10", today()), "2024-06-10");
    }

    #[test]
    fn delivery_lower_bound_falls_back_to_today() {
        assert_eq!(delivery_lower_bound("", today()), "2024-06-01");
        assert_eq!(delivery_lower_bound("not-a-date", today()), "2024-06-01");
    }
}

//! 排程表单校验
//!
//! 字段级约束逐项同步求值，外加一条派生的跨字段约束：
//! 送达日期不得早于发货日期。该下界随发货日期变化动态重算，
//! 已选中的更早送达日期会被重新校验并阻止提交（而不是静默放行）。

use crate::ScheduleDraft;
use crate::date::CalendarDate;

/// 手机号最少字符数（可选 `+` 前缀之后的部分）
const PHONE_MIN_LEN: usize = 10;

/// 各字段的校验错误，None 表示该字段通过
///
/// 备注字段无约束，因此没有对应的槽位。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub customer_name: Option<String>,
    pub dispatch_date: Option<String>,
    pub delivery_date: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl FormErrors {
    /// 所有字段均通过校验
    pub fn is_ok(&self) -> bool {
        self.customer_name.is_none()
            && self.dispatch_date.is_none()
            && self.delivery_date.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

/// 宽松的手机号格式：可选 `+` 前缀，之后仅允许数字/空格/连字符，
/// 且这部分至少 10 个字符
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    digits.chars().count() >= PHONE_MIN_LEN
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

/// 标准邮箱形态：单个 `@`，本地部分非空，域名含 `.` 且各段非空，无空白
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// 校验整份表单草稿
///
/// `today` 由调用方在表单打开时取定（之后不再实时更新），
/// 作为发货日期的下界；送达日期的下界取当前选中的发货日期，
/// 发货日期尚未选择或无法解析时退回到 `today`。
pub fn validate_draft(draft: &ScheduleDraft, today: CalendarDate) -> FormErrors {
    let mut errors = FormErrors::default();

    if draft.customer_name.is_empty() {
        errors.customer_name = Some("请输入客户姓名".to_string());
    }

    let dispatch = CalendarDate::parse(&draft.dispatch_date);
    if draft.dispatch_date.is_empty() {
        errors.dispatch_date = Some("请选择发货日期".to_string());
    } else {
        match dispatch {
            None => errors.dispatch_date = Some("发货日期格式无效".to_string()),
            Some(d) if d < today => {
                errors.dispatch_date = Some("发货日期不能早于今天".to_string());
            }
            Some(_) => {}
        }
    }

    // 送达日期的动态下界：发货日期优先，否则今天
    let delivery_min = dispatch.unwrap_or(today);
    if draft.delivery_date.is_empty() {
        errors.delivery_date = Some("请选择送达日期".to_string());
    } else {
        match CalendarDate::parse(&draft.delivery_date) {
            None => errors.delivery_date = Some("送达日期格式无效".to_string()),
            Some(d) if d < delivery_min => {
                errors.delivery_date = Some("送达日期不能早于发货日期".to_string());
            }
            Some(_) => {}
        }
    }

    if draft.phone.is_empty() {
        errors.phone = Some("请输入联系电话".to_string());
    } else if !is_valid_phone(&draft.phone) {
        errors.phone = Some("电话号码格式不正确".to_string());
    }

    if draft.email.is_empty() {
        errors.email = Some("请输入邮箱地址".to_string());
    } else if !is_valid_email(&draft.email) {
        errors.email = Some("邮箱格式不正确".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CalendarDate {
        CalendarDate::parse("2024-06-01").unwrap()
    }

    fn valid_draft() -> ScheduleDraft {
        ScheduleDraft {
            customer_name: "Ann".into(),
            dispatch_date: "2024-06-10".into(),
            delivery_date: "2024-06-12".into(),
            phone: "+1 555-000-0000".into(),
            email: "ann@example.com".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn accepts_fully_valid_draft() {
        assert!(validate_draft(&valid_draft(), today()).is_ok());
    }

    // 五个必填字段缺一不可
    #[test]
    fn rejects_any_missing_required_field() {
        for field in [
            "customer_name",
            "dispatch_date",
            "delivery_date",
            "phone",
            "email",
        ] {
            let mut draft = valid_draft();
            match field {
                "customer_name" => draft.customer_name.clear(),
                "dispatch_date" => draft.dispatch_date.clear(),
                "delivery_date" => draft.delivery_date.clear(),
                "phone" => draft.phone.clear(),
                _ => draft.email.clear(),
            }
            let errors = validate_draft(&draft, today());
            assert!(!errors.is_ok(), "字段 {field} 为空时应当被拒绝");
        }
    }

    #[test]
    fn delivery_before_dispatch_is_blocked() {
        let mut draft = valid_draft();
        draft.dispatch_date = "2024-06-10".into();
        draft.delivery_date = "2024-06-09".into();
        let errors = validate_draft(&draft, today());
        assert_eq!(
            errors.delivery_date.as_deref(),
            Some("送达日期不能早于发货日期")
        );
    }

    #[test]
    fn delivery_equal_to_dispatch_is_allowed() {
        let mut draft = valid_draft();
        draft.delivery_date = draft.dispatch_date.clone();
        assert!(validate_draft(&draft, today()).is_ok());
    }

    #[test]
    fn dispatch_before_today_is_blocked() {
        let mut draft = valid_draft();
        draft.dispatch_date = "2024-05-31".into();
        let errors = validate_draft(&draft, today());
        assert!(errors.dispatch_date.is_some());
    }

    // 发货日期未选时，送达日期的下界退回到今天
    #[test]
    fn delivery_min_falls_back_to_today_without_dispatch() {
        let mut draft = valid_draft();
        draft.dispatch_date.clear();
        draft.delivery_date = "2024-05-20".into();
        let errors = validate_draft(&draft, today());
        assert!(errors.delivery_date.is_some());
    }

    #[test]
    fn phone_pattern_matches_loose_format() {
        assert!(is_valid_phone("+1 555-000-0000"));
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("012 345 67 89"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+12345"));
        assert!(!is_valid_phone("01234abc89"));
        assert!(!is_valid_phone("(555) 000-0000"));
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a x@x.com"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a@x..com"));
        assert!(!is_valid_email("plainaddress"));
    }
}

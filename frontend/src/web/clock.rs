//! 本地日期获取
//!
//! 表单的“今天”以用户本地时区的日历日为准（通过 `js_sys::Date`），
//! 取定后只用作输入下界，不参与传输。

use js_sys::Date;
use remindly_shared::CalendarDate;

/// 用户本地时区的当前日历日
pub fn local_today() -> CalendarDate {
    let now = Date::new_0();
    // js 的月份从 0 开始
    CalendarDate::from_ymd(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

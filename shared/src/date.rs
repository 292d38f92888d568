//! 日历日期类型
//!
//! 排程只关心“哪一天”，不关心时刻与时区。传输边界上的表示固定为
//! ISO `YYYY-MM-DD` 字符串，序列化/反序列化均直接走该格式，
//! 因此不受客户端本地时区影响。

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// 传输边界的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 日粒度的日历日期
///
/// 按日历日排序比较，`delivery >= dispatch` 这类不变量直接用 `>=` 表达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// 从年月日构造，非法组合（如 2 月 30 日）返回 None
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// 解析 `YYYY-MM-DD` 字符串，格式不符返回 None
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok().map(Self)
    }

    #[inline]
    pub fn year(&self) -> i32 {
        chrono::Datelike::year(&self.0)
    }

    #[inline]
    pub fn month(&self) -> u32 {
        chrono::Datelike::month(&self.0)
    }

    #[inline]
    pub fn day(&self) -> u32 {
        chrono::Datelike::day(&self.0)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CalendarDate::parse(&s)
            .ok_or_else(|| de::Error::custom(format!("无效的日期格式: {s}")))
    }
}

//! 排程列表过滤
//!
//! 对已拉取的内存集合做纯函数过滤，不发起网络请求、不修改源集合，
//! 相同输入与过滤条件总是得到相同的输出（保持原有相对顺序）。

use crate::{Schedule, ScheduleStatus};

/// 状态过滤条件
///
/// `All` 对应界面上的 "all" 哨兵值；`Only` 按枚举值精确匹配（区分大小写）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ScheduleStatus),
}

impl StatusFilter {
    /// 从下拉框的选项值解析；未知值按 `All` 处理
    pub fn from_value(value: &str) -> Self {
        match ScheduleStatus::from_str(value) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }

    /// 下拉框选项值
    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: ScheduleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// 一条排程是否命中当前搜索词（姓名或邮箱的大小写不敏感子串匹配，
/// 空搜索词命中所有记录）
fn matches_search(schedule: &Schedule, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    schedule.customer_name.to_lowercase().contains(&needle)
        || schedule.email.to_lowercase().contains(&needle)
}

/// 过滤排程集合：搜索与状态两个谓词必须同时成立
pub fn filter_schedules(
    schedules: &[Schedule],
    search: &str,
    status: StatusFilter,
) -> Vec<Schedule> {
    schedules
        .iter()
        .filter(|s| matches_search(s, search) && status.matches(s.status))
        .cloned()
        .collect()
}

//! Remindly 共享领域层
//!
//! 前端与测试共用的纯业务模型，不依赖任何浏览器 API：
//! - `date`: 日历日期类型（传输格式 `YYYY-MM-DD`）
//! - `validate`: 排程表单的字段级与跨字段校验
//! - `filter`: 排程列表的内存过滤
//! - `notify`: 通知发送草稿（多选 + 消息 + 渠道）
//! - `protocol`: API 端点的请求/响应契约

use serde::{Deserialize, Serialize};

pub mod date;
pub mod filter;
pub mod notify;
pub mod protocol;
pub mod validate;

pub use date::CalendarDate;
pub use filter::{StatusFilter, filter_schedules};
pub use notify::{Channel, NotificationDraft};
pub use validate::{FormErrors, validate_draft};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中持久化 Bearer Token 的键名
pub const TOKEN_STORAGE_KEY: &str = "token";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 排程状态，后端为唯一权威来源，客户端从不自行计算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Active,
    Completed,
    Canceled,
}

impl ScheduleStatus {
    /// 线上契约中的字面值（区分大小写）
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Active => "Active",
            ScheduleStatus::Completed => "Completed",
            ScheduleStatus::Canceled => "Canceled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Active" => Some(ScheduleStatus::Active),
            "Completed" => Some(ScheduleStatus::Completed),
            "Canceled" => Some(ScheduleStatus::Canceled),
            _ => None,
        }
    }
}

/// 一条客户配送排程
///
/// 由后端创建并持有所有权，客户端只保存临时副本。
/// 不变量：`delivery_date >= dispatch_date`（仅在创建表单处校验）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(rename = "_id")]
    pub id: String,
    pub customer_name: String,
    pub dispatch_date: CalendarDate,
    pub delivery_date: CalendarDate,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub notes: String,
    pub status: ScheduleStatus,
}

/// 排程聚合统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total: u64,
    pub active: u64,
    pub completed: u64,
}

/// 排程创建/编辑表单的原始输入
///
/// 字段保持为字符串形态，校验通过后经 [`ScheduleDraft::normalized`]
/// 规整为标准 `YYYY-MM-DD` 再提交。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub customer_name: String,
    pub dispatch_date: String,
    pub delivery_date: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

impl ScheduleDraft {
    /// 将日期字段规整为标准 ISO 格式（丢弃时区与时刻，只保留日历日）
    ///
    /// 未能解析的字段原样保留，由校验层负责拦截。
    pub fn normalized(&self) -> ScheduleDraft {
        let canon = |s: &str| {
            CalendarDate::parse(s)
                .map(|d| d.to_string())
                .unwrap_or_else(|| s.to_string())
        };
        ScheduleDraft {
            customer_name: self.customer_name.clone(),
            dispatch_date: canon(&self.dispatch_date),
            delivery_date: canon(&self.delivery_date),
            phone: self.phone.clone(),
            email: self.email.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// 通知上下文中的客户条目（只读，来源于后端）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub last_delivery: String,
}

/// 通知发送结果状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Failed,
}

/// 通知历史条目（只读，客户端从不修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,
    pub customer_name: String,
    pub message: String,
    pub channel: Channel,
    pub sent_at: String,
    pub status: NotificationStatus,
}

/// 当前登录用户的内存会话
///
/// 仅存活于页面生命周期内；跨刷新的持久凭据只有 Bearer Token。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_roundtrips_wire_field_names() {
        let json = r#"{
            "_id": "s1",
            "customerName": "Ann",
            "dispatchDate": "2024-01-01",
            "deliveryDate": "2024-01-05",
            "phone": "+1 555 000 0000",
            "email": "a@x.com",
            "notes": "",
            "status": "Active"
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.id, "s1");
        assert_eq!(schedule.status, ScheduleStatus::Active);
        assert_eq!(schedule.dispatch_date.to_string(), "2024-01-01");

        let back = serde_json::to_value(&schedule).unwrap();
        assert_eq!(back["_id"], "s1");
        assert_eq!(back["customerName"], "Ann");
        assert_eq!(back["deliveryDate"], "2024-01-05");
    }

    #[test]
    fn schedule_notes_defaults_to_empty() {
        let json = r#"{
            "_id": "s2",
            "customerName": "Bo",
            "dispatchDate": "2024-02-01",
            "deliveryDate": "2024-02-02",
            "phone": "0123456789",
            "email": "b@x.com",
            "status": "Canceled"
        }"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert!(schedule.notes.is_empty());
    }

    #[test]
    fn draft_normalized_keeps_iso_dates_verbatim() {
        let draft = ScheduleDraft {
            customer_name: "Ann".into(),
            dispatch_date: "2024-01-01".into(),
            delivery_date: "2024-01-05".into(),
            phone: "0123456789".into(),
            email: "a@x.com".into(),
            notes: String::new(),
        };
        let normalized = draft.normalized();
        assert_eq!(normalized.dispatch_date, "2024-01-01");
        assert_eq!(normalized.delivery_date, "2024-01-05");
    }

    #[test]
    fn status_literal_values_are_case_sensitive() {
        assert_eq!(ScheduleStatus::from_str("Active"), Some(ScheduleStatus::Active));
        assert_eq!(ScheduleStatus::from_str("active"), None);
        assert_eq!(
            serde_json::to_string(&ScheduleStatus::Canceled).unwrap(),
            "\"Canceled\""
        );
    }
}

//! 通知发送草稿
//!
//! 收集一组客户标识（复选多选，天然去重、与顺序无关）、一条消息
//! 和一个渠道选择，作为单次批量请求提交。校验不通过时调用方不得
//! 发起任何网络请求。

use serde::{Deserialize, Serialize};

/// 通知渠道，三选一，默认邮件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Email,
    Sms,
    Whatsapp,
}

impl Channel {
    /// 界面展示名
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "邮件",
            Channel::Sms => "短信",
            Channel::Whatsapp => "WhatsApp",
        }
    }
}

/// 通知发送草稿，同时也是 `/notifications/send` 的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDraft {
    pub customer_ids: Vec<String>,
    pub message: String,
    pub channel: Channel,
}

impl NotificationDraft {
    /// 切换某个客户的选中状态（选中集合不含重复项）
    pub fn toggle(&mut self, customer_id: &str) {
        if let Some(pos) = self.customer_ids.iter().position(|id| id == customer_id) {
            self.customer_ids.remove(pos);
        } else {
            self.customer_ids.push(customer_id.to_string());
        }
    }

    pub fn is_selected(&self, customer_id: &str) -> bool {
        self.customer_ids.iter().any(|id| id == customer_id)
    }

    /// 提交前校验：至少选中一位客户，且消息去除首尾空白后非空
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_ids.is_empty() {
            return Err("请至少选择一位客户".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("请输入通知内容".to_string());
        }
        Ok(())
    }

    /// 发送成功后的复位：清空选中与消息，渠道选择保持不变
    pub fn clear_after_send(&mut self) {
        self.customer_ids.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_duplicate_free() {
        let mut draft = NotificationDraft::default();
        draft.toggle("c1");
        draft.toggle("c2");
        draft.toggle("c1");
        assert_eq!(draft.customer_ids, vec!["c2"]);
        draft.toggle("c1");
        assert_eq!(draft.customer_ids.len(), 2);
        assert!(draft.is_selected("c1"));
    }

    // 未选中任何客户时无论消息内容如何都必须拒绝
    #[test]
    fn empty_selection_is_rejected() {
        let draft = NotificationDraft {
            customer_ids: vec![],
            message: "送货提醒".to_string(),
            channel: Channel::Sms,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn whitespace_only_message_is_rejected() {
        let draft = NotificationDraft {
            customer_ids: vec!["c1".to_string()],
            message: "   \n ".to_string(),
            channel: Channel::Email,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn valid_draft_passes() {
        let draft = NotificationDraft {
            customer_ids: vec!["c1".to_string()],
            message: "您的包裹明天送达".to_string(),
            channel: Channel::Whatsapp,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn clear_after_send_keeps_channel() {
        let mut draft = NotificationDraft {
            customer_ids: vec!["c1".to_string()],
            message: "hi".to_string(),
            channel: Channel::Sms,
        };
        draft.clear_after_send();
        assert!(draft.customer_ids.is_empty());
        assert!(draft.message.is_empty());
        assert_eq!(draft.channel, Channel::Sms);
    }

    #[test]
    fn wire_payload_uses_camel_case_and_lowercase_channel() {
        let draft = NotificationDraft {
            customer_ids: vec!["c1".to_string(), "c2".to_string()],
            message: "hi".to_string(),
            channel: Channel::Whatsapp,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["customerIds"][1], "c2");
        assert_eq!(value["channel"], "whatsapp");
    }
}

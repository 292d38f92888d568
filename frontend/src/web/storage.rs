//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口，并在其上
//! 定义 Bearer Token 的存取抽象。Token 是客户端唯一的持久状态，
//! 每次出站请求前读取一次。

use remindly_shared::TOKEN_STORAGE_KEY;

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取键值，键不存在或发生错误时返回 None
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入键值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

// =========================================================
// Bearer Token 存取抽象
// =========================================================

/// Token 存取特性
///
/// 生产实现落在浏览器 LocalStorage 上；测试实现只在内存中存放。
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> bool;
    fn clear(&self) -> bool;
}

/// LocalStorage 支撑的 Token 存储（键名固定为 `token`）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get(TOKEN_STORAGE_KEY)
    }

    fn set(&self, token: &str) -> bool {
        LocalStorage::set(TOKEN_STORAGE_KEY, token)
    }

    fn clear(&self) -> bool {
        LocalStorage::delete(TOKEN_STORAGE_KEY)
    }
}

#[cfg(test)]
pub use memory::MemoryTokenStore;

//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
//! 以减小 WASM 二进制体积。其中 `http` 与 `storage` 的抽象
//! 提供了可在原生环境运行的测试替身。

pub mod clock;
pub mod http;
pub mod route;
pub mod router;
pub mod storage;

pub use storage::{BrowserTokenStore, TokenStore};

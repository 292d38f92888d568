//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。定义应用的所有路由、
//! 各自的路径映射以及守卫属性（是否需要认证）。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 注册页面
    Register,
    /// 找回密码页面
    ForgotPassword,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 新建排程 (需要认证)
    CreateSchedule,
    /// 排程管理 (需要认证)
    ManageSchedules,
    /// 编辑排程 (需要认证；编辑表单尚未实现，仅保留导航入口)
    EditSchedule(String),
    /// 通知中心 (需要认证)
    Notifications,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        if let Some(id) = path.strip_prefix("/edit-schedule/") {
            if !id.is_empty() {
                return Self::EditSchedule(id.to_string());
            }
        }
        match path {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/forgot-password" => Self::ForgotPassword,
            "/" | "/dashboard" => Self::Dashboard,
            "/create-schedule" => Self::CreateSchedule,
            "/manage-schedules" => Self::ManageSchedules,
            "/notifications" => Self::Notifications,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::CreateSchedule => "/create-schedule".to_string(),
            Self::ManageSchedules => "/manage-schedules".to_string(),
            Self::EditSchedule(id) => format!("/edit-schedule/{}", id),
            Self::Notifications => "/notifications".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::CreateSchedule
                | Self::ManageSchedules
                | Self::EditSchedule(_)
                | Self::Notifications
        )
    }

    /// 已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_maps_to_dashboard() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
    }

    #[test]
    fn edit_route_carries_the_schedule_id() {
        assert_eq!(
            AppRoute::from_path("/edit-schedule/abc"),
            AppRoute::EditSchedule("abc".to_string())
        );
        assert_eq!(
            AppRoute::EditSchedule("abc".to_string()).to_path(),
            "/edit-schedule/abc"
        );
        // id 缺失时不是合法的编辑路由
        assert_eq!(AppRoute::from_path("/edit-schedule/"), AppRoute::NotFound);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn guard_covers_exactly_the_protected_pages() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::CreateSchedule.requires_auth());
        assert!(AppRoute::ManageSchedules.requires_auth());
        assert!(AppRoute::Notifications.requires_auth());
        assert!(AppRoute::EditSchedule("x".to_string()).requires_auth());

        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
        assert!(!AppRoute::ForgotPassword.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn only_login_redirects_when_authenticated() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
    }

    #[test]
    fn parse_and_format_roundtrip() {
        for path in [
            "/login",
            "/register",
            "/forgot-password",
            "/dashboard",
            "/create-schedule",
            "/manage-schedules",
            "/notifications",
        ] {
            assert_eq!(AppRoute::from_path(path).to_path(), path);
        }
    }
}

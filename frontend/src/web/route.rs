//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页（唯一无需会话的页面）
    Login,
    /// 控制面板（默认路由）
    #[default]
    Dashboard,
    /// 分类管理
    Categories,
    /// 许可证管理
    Licenses,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Dashboard,
            "/login" => Self::Login,
            "/categories" => Self::Categories,
            "/licenses" => Self::Licenses,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Categories => "/categories",
            Self::Licenses => "/licenses",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：会话令牌的存在性决定可达性**
    ///
    /// 除登录页外的全部页面都需要认证，没有基于角色的细分。
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Categories | Self::Licenses)
    }

    /// 已认证用户是否应离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    ///
    /// 被拦截的原始目标直接丢弃，不保留 return-to。
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
mod tests;

//! LicenseSys 管理控制台前端
//!
//! Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与带认证守卫的路由服务
//! - `auth`: 会话状态管理（登录/注销/持久化）
//! - `api`: 后端 REST API 客户端
//! - `i18n`: 界面文案的多语言支持
//! - `toast`: 全局瞬态通知
//! - `components`: UI 组件层

mod api;
mod auth;
mod i18n;
mod toast;
mod components {
    pub mod categories;
    mod charts;
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod licenses;
    pub mod login;
}

use leptos::prelude::*;

// 浏览器原生 API 的轻量封装
// 此模块提供对 Storage/History/定时器等原生 API 的薄封装，
// 集中所有 web_sys 直接调用。
pub(crate) mod web {
    mod clipboard;
    mod confirm;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use clipboard::copy_text;
    pub use confirm::confirm;
    pub use storage::LocalStorage;
    pub use timer::Timeout;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::categories::CategoriesPage;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::Layout;
use crate::components::licenses::LicensesPage;
use crate::components::login::LoginPage;
use crate::i18n::LangContext;
use crate::toast::{ToastContext, ToastHost};
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <Layout>
                <DashboardPage />
            </Layout>
        }
        .into_any(),
        AppRoute::Categories => view! {
            <Layout>
                <CategoriesPage />
            </Layout>
        }
        .into_any(),
        AppRoute::Licenses => view! {
            <Layout>
                <LicensesPage />
            </Layout>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文并从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 语言与通知上下文
    provide_context(LangContext::new());
    provide_context(ToastContext::new());

    // 3. 认证信号注入路由服务实现守卫（解耦）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
            <ToastHost />
        </Router>
    }
}

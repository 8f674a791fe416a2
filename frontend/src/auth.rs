//! 认证模块
//!
//! 管理会话状态，与路由系统解耦：路由服务通过注入的
//! 认证信号执行守卫，本模块只负责会话的建立与销毁。

use crate::api::{self, ApiError, LicenseApi};
use crate::web::LocalStorage;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 会话令牌在 LocalStorage 中的固定键名，令牌跨页面刷新存活
const STORAGE_TOKEN_KEY: &str = "licensys_token";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// API 客户端实例（仅在持有会话时存在）
    pub api: Option<LicenseApi>,
    /// 是否已认证
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复上次的会话令牌；令牌存在即视为已认证，
/// 有效性交由后续请求的 401 应答裁定。
pub fn init_auth(ctx: &AuthContext) {
    if let Some(token) = LocalStorage::get(STORAGE_TOKEN_KEY) {
        ctx.set_state.update(|state| {
            state.api = Some(LicenseApi::new(token));
            state.is_authenticated = true;
        });
    }
}

/// 登录并持久化会话
///
/// 失败时不写入任何会话状态，错误原样上抛给登录页展示。
pub async fn login(ctx: &AuthContext, username: String, password: String) -> Result<(), ApiError> {
    let token = api::login(username, password).await?;

    LocalStorage::set(STORAGE_TOKEN_KEY, &token);
    ctx.set_state.update(|state| {
        state.api = Some(LicenseApi::new(token));
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注销并清除会话
///
/// 本地会话立即无条件清除，服务端通知尽力而为——无论应答如何，
/// 注销在用户视角都不会失败。重定向由路由服务对认证状态的监听完成。
pub fn logout(ctx: &AuthContext) {
    let api = ctx.state.get_untracked().api;

    LocalStorage::remove(STORAGE_TOKEN_KEY);
    ctx.set_state.update(|state| {
        state.api = None;
        state.is_authenticated = false;
    });

    if let Some(api) = api {
        spawn_local(async move {
            let _ = api.logout().await;
        });
    }
}

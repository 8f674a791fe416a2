//! 全局瞬态通知模块
//!
//! 单条消息信号 + 固定展示时长：任何页面的拉取失败、变更结果、
//! 校验失败都经由同一个 ToastHost 展示，几秒后自动消失。

use std::time::Duration;

use leptos::prelude::*;

/// 通知的展示时长
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 单条通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
}

/// 通知上下文
///
/// 同一时刻只保留最新一条，新通知直接覆盖旧通知。
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: ReadSignal<Option<Toast>>,
    set_current: WriteSignal<Option<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (current, set_current) = signal(Option::<Toast>::None);
        Self {
            current,
            set_current,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.set_current.set(Some(Toast {
            message: message.into(),
            is_error: false,
        }));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.set_current.set(Some(Toast {
            message: message.into(),
            is_error: true,
        }));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知渲染组件，挂在 App 根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();

    // 展示一段时间后自动清除
    Effect::new(move |_| {
        if ctx.current.get().is_some() {
            let set_current = ctx.set_current;
            set_timeout(move || set_current.set(None), TOAST_DURATION);
        }
    });

    view! {
        <Show when=move || ctx.current.get().is_some()>
            <div class="toast toast-bottom toast-end z-50">
                <div class=move || {
                    let is_error = ctx.current.get().map(|t| t.is_error).unwrap_or(false);
                    if is_error {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || ctx.current.get().map(|t| t.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

//! 原生确认对话框封装

/// 弹出阻塞式确认框
///
/// window 不可用或弹窗被平台拦截时视为用户取消。
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

//! 剪贴板封装模块

/// 将文本写入系统剪贴板
///
/// 写入在浏览器侧异步完成，调用方不等待结果。
pub fn copy_text(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

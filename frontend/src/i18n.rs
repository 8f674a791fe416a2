//! 多语言支持模块
//!
//! 界面文案提供英语与越南语两套静态表，当前语言持久化在
//! LocalStorage 中，通过 Context 信号在组件间共享。

use crate::web::LocalStorage;
use leptos::prelude::*;

const STORAGE_LANG_KEY: &str = "licensys_lang";

/// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Vi,
}

impl Lang {
    /// 持久化用的语言代码
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    /// 从语言代码解析，未知代码回落到英语
    pub fn from_code(code: &str) -> Self {
        match code {
            "vi" => Self::Vi,
            _ => Self::En,
        }
    }

    /// 语言切换菜单中展示的名称（使用语言自身的写法）
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Vi => "Tiếng Việt",
        }
    }

    /// 获取对应的文案表
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Vi => &VI,
        }
    }
}

/// 语言上下文
#[derive(Clone, Copy)]
pub struct LangContext {
    lang: ReadSignal<Lang>,
    set_lang: WriteSignal<Lang>,
}

impl LangContext {
    /// 创建上下文，初始语言从 LocalStorage 恢复
    pub fn new() -> Self {
        let initial = LocalStorage::get(STORAGE_LANG_KEY)
            .map(|code| Lang::from_code(&code))
            .unwrap_or_default();
        let (lang, set_lang) = signal(initial);
        Self { lang, set_lang }
    }

    /// 当前语言（响应式）
    pub fn get(&self) -> Lang {
        self.lang.get()
    }

    /// 切换语言并持久化
    pub fn switch(&self, lang: Lang) {
        LocalStorage::set(STORAGE_LANG_KEY, lang.code());
        self.set_lang.set(lang);
    }
}

impl Default for LangContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取语言上下文
pub fn use_lang() -> LangContext {
    use_context::<LangContext>().expect("LangContext should be provided")
}

/// 当前语言文案表的派生信号
pub fn use_strings() -> Signal<&'static Strings> {
    let ctx = use_lang();
    Signal::derive(move || ctx.lang.get().strings())
}

// =========================================================
// 文案表
// =========================================================

/// 全部界面文案
///
/// 字段按页面分组，命名前缀与组件对应。
pub struct Strings {
    pub app_title: &'static str,
    pub loading: &'static str,
    pub cancel: &'static str,

    pub nav_dashboard: &'static str,
    pub nav_categories: &'static str,
    pub nav_licenses: &'static str,
    pub logout: &'static str,

    pub login_title: &'static str,
    pub login_subtitle: &'static str,
    pub login_username: &'static str,
    pub login_password: &'static str,
    pub login_submit: &'static str,
    pub login_submitting: &'static str,
    pub login_error: &'static str,

    pub dash_title: &'static str,
    pub dash_total: &'static str,
    pub dash_active: &'static str,
    pub dash_used: &'static str,
    pub dash_avg_response: &'static str,
    pub dash_requests_chart: &'static str,
    pub dash_category_chart: &'static str,

    pub cat_title: &'static str,
    pub cat_add: &'static str,
    pub cat_name: &'static str,
    pub cat_description: &'static str,
    pub cat_actions: &'static str,
    pub cat_empty: &'static str,
    pub cat_new_title: &'static str,
    pub cat_edit_title: &'static str,
    pub cat_create: &'static str,
    pub cat_update: &'static str,
    pub cat_delete_confirm: &'static str,
    pub cat_created: &'static str,
    pub cat_updated: &'static str,
    pub cat_deleted: &'static str,
    pub cat_load_failed: &'static str,
    pub cat_save_failed: &'static str,
    pub cat_delete_failed: &'static str,

    pub lic_title: &'static str,
    pub lic_generate: &'static str,
    pub lic_search_placeholder: &'static str,
    pub lic_all_categories: &'static str,
    pub lic_all_status: &'static str,
    pub lic_status_active: &'static str,
    pub lic_status_used: &'static str,
    pub lic_status_inactive: &'static str,
    pub lic_key: &'static str,
    pub lic_category: &'static str,
    pub lic_status: &'static str,
    pub lic_device: &'static str,
    pub lic_actions: &'static str,
    pub lic_empty: &'static str,
    pub lic_page: &'static str,
    pub lic_items: &'static str,
    pub lic_prev: &'static str,
    pub lic_next: &'static str,
    pub lic_select_category: &'static str,
    pub lic_generated: &'static str,
    pub lic_deleted: &'static str,
    pub lic_delete_confirm: &'static str,
    pub lic_copied: &'static str,
    pub lic_load_failed: &'static str,
    pub lic_generate_failed: &'static str,
    pub lic_delete_failed: &'static str,
}

pub static EN: Strings = Strings {
    app_title: "LicenseSys",
    loading: "Loading...",
    cancel: "Cancel",

    nav_dashboard: "Dashboard",
    nav_categories: "Categories",
    nav_licenses: "Licenses",
    logout: "Log out",

    login_title: "Admin Login",
    login_subtitle: "Sign in to manage license keys",
    login_username: "Username",
    login_password: "Password",
    login_submit: "Sign in",
    login_submitting: "Signing in...",
    login_error: "Invalid username or password",

    dash_title: "Dashboard",
    dash_total: "Total licenses",
    dash_active: "Active licenses",
    dash_used: "Used licenses",
    dash_avg_response: "Avg response time",
    dash_requests_chart: "Requests per day",
    dash_category_chart: "Keys by category",

    cat_title: "Categories",
    cat_add: "Add category",
    cat_name: "Name",
    cat_description: "Description",
    cat_actions: "Actions",
    cat_empty: "No categories yet",
    cat_new_title: "New category",
    cat_edit_title: "Edit category",
    cat_create: "Create",
    cat_update: "Update",
    cat_delete_confirm: "Delete this category? Licenses under it will be removed as well.",
    cat_created: "Category created",
    cat_updated: "Category updated",
    cat_deleted: "Category deleted",
    cat_load_failed: "Failed to load categories",
    cat_save_failed: "Save failed",
    cat_delete_failed: "Delete failed",

    lic_title: "Licenses",
    lic_generate: "Generate key",
    lic_search_placeholder: "Search key or device...",
    lic_all_categories: "All categories",
    lic_all_status: "All status",
    lic_status_active: "Active",
    lic_status_used: "Used",
    lic_status_inactive: "Inactive",
    lic_key: "Key",
    lic_category: "Category",
    lic_status: "Status",
    lic_device: "Device",
    lic_actions: "Actions",
    lic_empty: "No licenses found",
    lic_page: "Page",
    lic_items: "items",
    lic_prev: "Previous",
    lic_next: "Next",
    lic_select_category: "Select a category",
    lic_generated: "License generated",
    lic_deleted: "License deleted",
    lic_delete_confirm: "Delete this license? This cannot be undone.",
    lic_copied: "Key copied to clipboard",
    lic_load_failed: "Failed to load licenses",
    lic_generate_failed: "Generation failed",
    lic_delete_failed: "Delete failed",
};

pub static VI: Strings = Strings {
    app_title: "LicenseSys",
    loading: "Đang tải...",
    cancel: "Hủy",

    nav_dashboard: "Bảng điều khiển",
    nav_categories: "Danh mục",
    nav_licenses: "Giấy phép",
    logout: "Đăng xuất",

    login_title: "Đăng nhập quản trị",
    login_subtitle: "Đăng nhập để quản lý khóa bản quyền",
    login_username: "Tên đăng nhập",
    login_password: "Mật khẩu",
    login_submit: "Đăng nhập",
    login_submitting: "Đang đăng nhập...",
    login_error: "Tên đăng nhập hoặc mật khẩu không đúng",

    dash_title: "Bảng điều khiển",
    dash_total: "Tổng số giấy phép",
    dash_active: "Giấy phép kích hoạt",
    dash_used: "Giấy phép đã dùng",
    dash_avg_response: "Thời gian phản hồi TB",
    dash_requests_chart: "Lượt yêu cầu mỗi ngày",
    dash_category_chart: "Khóa theo danh mục",

    cat_title: "Danh mục",
    cat_add: "Thêm danh mục",
    cat_name: "Tên",
    cat_description: "Mô tả",
    cat_actions: "Thao tác",
    cat_empty: "Chưa có danh mục",
    cat_new_title: "Danh mục mới",
    cat_edit_title: "Sửa danh mục",
    cat_create: "Tạo",
    cat_update: "Cập nhật",
    cat_delete_confirm: "Xóa danh mục này? Các giấy phép thuộc về nó cũng sẽ bị xóa.",
    cat_created: "Đã tạo danh mục",
    cat_updated: "Đã cập nhật danh mục",
    cat_deleted: "Đã xóa danh mục",
    cat_load_failed: "Không tải được danh mục",
    cat_save_failed: "Lưu thất bại",
    cat_delete_failed: "Xóa thất bại",

    lic_title: "Giấy phép",
    lic_generate: "Tạo khóa",
    lic_search_placeholder: "Tìm khóa hoặc thiết bị...",
    lic_all_categories: "Tất cả danh mục",
    lic_all_status: "Mọi trạng thái",
    lic_status_active: "Kích hoạt",
    lic_status_used: "Đã dùng",
    lic_status_inactive: "Chưa kích hoạt",
    lic_key: "Khóa",
    lic_category: "Danh mục",
    lic_status: "Trạng thái",
    lic_device: "Thiết bị",
    lic_actions: "Thao tác",
    lic_empty: "Không tìm thấy giấy phép",
    lic_page: "Trang",
    lic_items: "mục",
    lic_prev: "Trước",
    lic_next: "Sau",
    lic_select_category: "Chọn danh mục",
    lic_generated: "Đã tạo giấy phép",
    lic_deleted: "Đã xóa giấy phép",
    lic_delete_confirm: "Xóa giấy phép này? Không thể hoàn tác.",
    lic_copied: "Đã sao chép khóa",
    lic_load_failed: "Không tải được danh sách",
    lic_generate_failed: "Tạo khóa thất bại",
    lic_delete_failed: "Xóa thất bại",
};

#[cfg(test)]
mod tests;

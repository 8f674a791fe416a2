use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 认证头名称，所有受保护请求都携带 `Authorization: Token <session>`
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 后端分页大小。服务端未在响应中返回该值，
/// 客户端只能以常量推算总页数（仅用于展示）
pub const PAGE_SIZE: u64 = 10;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 许可证分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// 许可证密钥记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: i64,
    pub key: String,
    /// 所属分类 ID (外键)
    pub category: i64,
    #[serde(default)]
    pub category_name: String,
    pub is_active: bool,
    pub is_used: bool,
    #[serde(default)]
    pub device_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl License {
    /// 派生展示状态，见 [`LicenseStatus::derive`]
    pub fn status(&self) -> LicenseStatus {
        LicenseStatus::derive(self.is_used, self.is_active)
    }
}

/// 许可证的派生状态
///
/// 状态并非独立存储，由两个布尔字段按固定优先级计算得出。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseStatus {
    Used,
    Active,
    Inactive,
}

impl LicenseStatus {
    /// 优先级：`used > active > inactive`
    pub fn derive(is_used: bool, is_active: bool) -> Self {
        if is_used {
            Self::Used
        } else if is_active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

/// 标准偏移分页信封
///
/// `next` / `previous` 为服务端给出的翻页 URL，客户端仅以
/// 它们是否为 null 判断翻页按钮可用性，不做页数推算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// 以 [`PAGE_SIZE`] 推算的总页数，仅用于展示
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(PAGE_SIZE)
    }
}

// =========================================================
// 统计模型 (Dashboard Stats)
// =========================================================

/// 单日请求量统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRequest {
    pub date: String,
    pub count: u64,
    #[serde(default)]
    pub avg_time: f64,
}

/// 按分类聚合的密钥数量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// 服务端按 ORM 惯例返回 `category__name`
    #[serde(rename = "category__name")]
    pub category_name: String,
    pub count: u64,
}

/// 全局汇总指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_licenses: u64,
    pub active_licenses: u64,
    pub used_licenses: u64,
    #[serde(default)]
    pub avg_response_time: f64,
}

/// 控制面板聚合统计，只读视图，进入页面时拉取一次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub daily_requests: Vec<DailyRequest>,
    pub category_stats: Vec<CategoryStat>,
    pub overall: OverallStats,
}

// =========================================================
// 测试模块
// =========================================================

#[cfg(test)]
mod tests;

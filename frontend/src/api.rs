use std::fmt;

use gloo_net::http::Request;
use licensys_shared::protocol::{
    CategoryPayload, CreateLicenseRequest, LicenseQuery, LoginRequest, TokenResponse,
};
use licensys_shared::{Category, DashboardStats, HEADER_AUTHORIZATION, License, PaginatedResponse};

/// API 根路径，由同源部署或反向代理转发到后端
const API_BASE: &str = "/api";

// =========================================================
// 错误类型
// =========================================================

/// API 调用错误
///
/// 所有请求都不做重试，错误上抛一次后由触发方手动重试。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络层失败（连接中断、被浏览器拦截等）
    Network(String),
    /// 服务端返回非 2xx 状态码
    Status(u16),
    /// 响应体解析失败
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status(code) => write!(f, "server responded with status {code}"),
            ApiError::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

fn check_status(res: &gloo_net::http::Response) -> ApiResult<()> {
    if res.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(res.status()))
    }
}

// =========================================================
// 登录（唯一不携带会话令牌的调用）
// =========================================================

/// 提交凭据换取会话令牌
///
/// 成功时仅返回令牌，持久化与状态更新由 `auth` 模块完成；
/// 失败时不留下任何会话痕迹。
pub async fn login(username: String, password: String) -> ApiResult<String> {
    let body = LoginRequest { username, password };
    let res = Request::post(&format!("{API_BASE}/auth/login/"))
        .json(&body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    check_status(&res)?;

    let token: TokenResponse = res
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(token.token)
}

// =========================================================
// API 客户端
// =========================================================

/// 后端 REST API 客户端
///
/// 显式持有会话令牌，生命周期由认证上下文管理：
/// 登录时创建，注销时销毁，不存在全局可变的隐式会话。
#[derive(Clone, Debug, PartialEq)]
pub struct LicenseApi {
    token: String,
}

impl LicenseApi {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    fn url(path: &str) -> String {
        format!("{API_BASE}{path}")
    }

    // 认证头值：`Token <session>`
    fn auth_value(&self) -> String {
        format!("Token {}", self.token)
    }

    /// 通知服务端注销（尽力而为）
    ///
    /// 调用方不依赖其结果，本地会话的清除不等待也不关心应答。
    pub async fn logout(&self) -> ApiResult<()> {
        let res = Request::post(&Self::url("/auth/logout/"))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)
    }

    /// 获取全部分类（无分页）
    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let res = Request::get(&Self::url("/categories/"))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 新建分类
    pub async fn create_category(&self, payload: &CategoryPayload) -> ApiResult<Category> {
        let res = Request::post(&Self::url("/categories/"))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 更新分类（整体替换 name + description）
    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> ApiResult<Category> {
        let res = Request::put(&Self::url(&format!("/categories/{id}/")))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 删除分类（不可撤销）
    pub async fn delete_category(&self, id: i64) -> ApiResult<()> {
        let res = Request::delete(&Self::url(&format!("/categories/{id}/")))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)
    }

    /// 按组合查询获取许可证分页
    pub async fn list_licenses(
        &self,
        query: &LicenseQuery,
    ) -> ApiResult<PaginatedResponse<License>> {
        let res = Request::get(&Self::url(&format!("/items/{}", query.to_query_string())))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 在指定分类下生成新许可证，密钥由服务端生成
    pub async fn create_license(&self, category: i64) -> ApiResult<License> {
        let body = CreateLicenseRequest { category };
        let res = Request::post(&Self::url("/items/"))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 删除许可证（不可撤销）
    pub async fn delete_license(&self, id: i64) -> ApiResult<()> {
        let res = Request::delete(&Self::url(&format!("/items/{id}/")))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)
    }

    /// 获取控制面板聚合统计
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        let res = Request::get(&Self::url("/stats/"))
            .header(HEADER_AUTHORIZATION, &self.auth_value())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&res)?;
        res.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

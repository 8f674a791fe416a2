//! Request payloads and query construction for the admin REST API.

use serde::{Deserialize, Serialize};

/// Credentials posted to `POST /auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body for both category create (`POST`) and full-replace update (`PUT`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
}

/// Body for `POST /items/`. The server generates the key itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLicenseRequest {
    pub category: i64,
}

/// Status facet of the license list query.
///
/// `Active` and `Used` map to the boolean backend filters; `All` sends
/// neither parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Used,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Used => "used",
        }
    }

    /// Parse a `<select>` option value; anything unknown falls back to `All`.
    pub fn from_str(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "used" => Self::Used,
            _ => Self::All,
        }
    }
}

/// Combined query state of the license list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseQuery {
    pub search: String,
    pub category: Option<i64>,
    pub status: StatusFilter,
    pub page: u32,
}

impl Default for LicenseQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            status: StatusFilter::All,
            page: 1,
        }
    }
}

impl LicenseQuery {
    /// Render as a `GET /items/` query string.
    ///
    /// Only non-default facets are emitted; `page` is always present.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if !self.search.is_empty() {
            params.push(format!("search={}", encode_query_value(&self.search)));
        }
        if let Some(id) = self.category {
            params.push(format!("category={id}"));
        }
        match self.status {
            StatusFilter::Active => params.push("is_active=true".to_string()),
            StatusFilter::Used => params.push("is_used=true".to_string()),
            StatusFilter::All => {}
        }
        params.push(format!("page={}", self.page));
        format!("?{}", params.join("&"))
    }
}

/// Percent-encode a query value (RFC 3986 unreserved set kept verbatim).
fn encode_query_value(raw: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len());
    for &byte in raw.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests;

//! Cloudflare API 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};

/// Cloudflare API 通用响应 envelope
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareEnvelope<T> {
    pub success: bool,
    pub result: Option<T>,
    /// 保留原始 error 对象，消息提取规则见 `http.rs`
    pub errors: Option<Vec<Value>>,
}

/// Cloudflare Zone 结构（响应）
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareZone {
    pub id: String,
    pub name: String,
    pub status: String,
    pub paused: bool,
    #[serde(default)]
    pub name_servers: Vec<String>,
    pub plan: Option<CloudflarePlan>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CloudflarePlan {
    pub name: String,
}

/// Zone 摘要：list 操作只保留调用方需要的字段
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    /// Zone identifier.
    pub id: String,
    /// Domain name.
    pub name: String,
    /// Zone status (`"active"`, `"pending"`, ...).
    pub status: String,
    /// Whether the zone is paused.
    pub paused: bool,
    /// Assigned Cloudflare nameservers.
    pub name_servers: Vec<String>,
    /// Plan name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

/// Zone 详情：get 操作原样透传 API 返回
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDetail(pub Value);

/// Cloudflare DNS 记录类型
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CfRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Text record.
    Txt,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl CfRecordType {
    /// 将字符串转换为 `CfRecordType`
    pub fn parse(record_type: &str) -> Result<Self> {
        match record_type.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "TXT" => Ok(Self::Txt),
            "MX" => Ok(Self::Mx),
            "NS" => Ok(Self::Ns),
            "SRV" => Ok(Self::Srv),
            "CAA" => Ok(Self::Caa),
            _ => Err(ProviderError::MalformedInput {
                provider: "cloudflare".to_string(),
                param: "type".to_string(),
                detail: format!("不支持的记录类型: {record_type}"),
            }),
        }
    }

    /// 转换为大写字符串
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }

    /// 该类型是否可开启 Cloudflare CDN 代理
    #[must_use]
    pub fn proxyable(self) -> bool {
        matches!(self, Self::A | Self::Aaaa | Self::Cname)
    }

    /// 该类型是否携带 priority 字段
    #[must_use]
    pub fn has_priority(self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl std::fmt::Display for CfRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cloudflare DNS 记录（裁剪后的输出形态）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CfDnsRecord {
    /// Record identifier.
    pub id: String,
    /// Record type (`"A"`, `"CNAME"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name (fully qualified).
    pub name: String,
    /// Record content (IP, hostname, or text).
    pub content: String,
    /// TTL in seconds (1 = automatic).
    pub ttl: u32,
    /// Whether the CDN proxy is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Priority (MX/SRV only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// KV namespace（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvNamespace {
    /// Namespace identifier.
    pub id: String,
    /// Namespace title.
    pub title: String,
    /// Whether URL-encoding is supported for keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_url_encoding: Option<bool>,
}

/// KV key 列表项（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvKey {
    /// Key name.
    pub name: String,
    /// Unix timestamp at which the key expires, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
}

/// Worker script 元数据（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerScript {
    /// Script name.
    pub id: String,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Last modification timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
    /// Content hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

/// Worker route（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRoute {
    /// Route identifier.
    pub id: String,
    /// URL pattern (e.g. `"example.com/*"`).
    pub pattern: String,
    /// Bound script name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

/// R2 bucket（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct R2Bucket {
    /// Bucket name.
    pub name: String,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    /// Bucket location hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// D1 数据库（响应）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct D1Database {
    /// Database identifier.
    pub uuid: String,
    /// Database name.
    pub name: String,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Schema version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Number of tables, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_tables: Option<u32>,
}

/// D1 query 结果：原样透传 API 返回（rows/meta 结构依查询而变）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct D1QueryResult(pub Value);

/// Pages 项目结构（响应）
#[derive(Debug, Deserialize)]
pub(crate) struct PagesProject {
    pub name: String,
    pub subdomain: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    pub created_on: Option<String>,
    pub production_branch: Option<String>,
}

/// Pages 项目摘要：list 操作只保留调用方需要的字段
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesProjectSummary {
    /// Project name.
    pub name: String,
    /// Assigned `*.pages.dev` subdomain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    /// Custom domains attached to the project.
    pub domains: Vec<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Branch that deploys to production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_branch: Option<String>,
}

/// Pages 项目详情：get 操作原样透传 API 返回
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesProjectDetail(pub Value);

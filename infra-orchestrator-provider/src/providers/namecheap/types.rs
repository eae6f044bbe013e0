//! Namecheap API 类型定义

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// 调用方输入的 host 记录类型
///
/// 只约束写入端的输入；读回的记录集保留原始类型字符串（见 [`HostRecord`]），
/// 这样重建记录集时不会丢掉账号里本 enum 未覆盖的记录。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HostRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Unmasked URL redirect.
    Url,
    /// Permanent (301) URL redirect.
    Url301,
    /// Masked (frame) URL redirect.
    Frame,
}

impl HostRecordType {
    /// 将字符串转换为 `HostRecordType`
    pub fn parse(record_type: &str) -> Result<Self> {
        match record_type.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            "URL" => Ok(Self::Url),
            "URL301" => Ok(Self::Url301),
            "FRAME" => Ok(Self::Frame),
            _ => Err(ProviderError::MalformedInput {
                provider: "namecheap".to_string(),
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
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Url => "URL",
            Self::Url301 => "URL301",
            Self::Frame => "FRAME",
        }
    }
}

impl std::fmt::Display for HostRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一条 DNS host 记录
///
/// Record identity is the `(name, type)` pair; the backend's `HostId` is
/// informational only and is not sent back on writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRecord {
    /// Backend-assigned record identifier, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    /// Host name (`@` for the domain apex).
    pub name: String,
    /// Record type as the backend reported it (`"A"`, `"CNAME"`, `"URL301"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value (IP address, hostname, or text).
    pub address: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// MX priority; present only on MX records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_pref: Option<u32>,
}

impl HostRecord {
    /// 从 `<host .../>` 元素的属性映射构造记录。
    ///
    /// Name/Type/Address 缺失视为解码失败（缺字段的记录一旦进入
    /// read-modify-write 会破坏整组重写）。
    pub(crate) fn from_attributes(attrs: &HashMap<String, String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            attrs
                .get(key)
                .cloned()
                .ok_or_else(|| ProviderError::Parse {
                    provider: "namecheap".to_string(),
                    detail: format!("host 元素缺少 {key} 属性"),
                })
        };

        Ok(Self {
            host_id: attrs.get("HostId").cloned(),
            name: required("Name")?,
            record_type: required("Type")?,
            address: required("Address")?,
            ttl: attrs
                .get("TTL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(super::hosts::DEFAULT_TTL),
            mx_pref: attrs.get("MXPref").and_then(|v| v.parse().ok()),
        })
    }
}

/// 域名摘要（domains.getList）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    /// Domain name.
    pub name: String,
    /// Expiry date as reported by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    /// Whether the domain has expired.
    pub is_expired: bool,
    /// Whether the registrar lock is on.
    pub is_locked: bool,
    /// Whether auto-renew is enabled.
    pub auto_renew: bool,
    /// WhoisGuard status string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_guard: Option<String>,
}

/// 域名详情（domains.getInfo）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// Domain name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Domain status string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Expiry date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    /// Whether the registrar lock is on.
    pub is_locked: bool,
    /// Whether the domain has expired.
    pub is_expired: bool,
    /// Whether auto-renew is enabled.
    pub auto_renew: bool,
    /// Current nameservers.
    pub nameservers: Vec<String>,
    /// Whether the domain uses Namecheap's own DNS.
    pub using_namecheap_dns: bool,
}

/// Nameserver 列表（整组读取）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameserverInfo {
    /// Domain name as supplied by the caller.
    pub domain: String,
    /// Current nameservers.
    pub nameservers: Vec<String>,
    /// Whether the domain uses Namecheap's default DNS.
    pub using_namecheap_dns: bool,
}

/// 将域名拆成 SLD + TLD。
///
/// 多段 TLD（.co.uk 等）按「最后一段为 TLD」处理，与 API 的预期一致。
/// 不含点的字符串在发起任何网络调用前即被拒绝。
pub(crate) fn parse_domain(domain: &str) -> Result<(String, String)> {
    let normalized = domain.to_lowercase();
    let parts: Vec<&str> = normalized.split('.').collect();
    if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
        return Err(ProviderError::MalformedInput {
            provider: "namecheap".to_string(),
            param: "domain".to_string(),
            detail: format!("无效的域名格式: {domain}，预期形如 example.com"),
        });
    }

    let tld = (*parts.last().unwrap_or(&"")).to_string();
    let sld = parts[..parts.len() - 1].join(".");
    Ok((sld, tld))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_domain_simple() {
        let (sld, tld) = parse_domain("example.com").unwrap();
        assert_eq!(sld, "example");
        assert_eq!(tld, "com");
    }

    #[test]
    fn parse_domain_multi_part_tld() {
        let (sld, tld) = parse_domain("example.co.uk").unwrap();
        assert_eq!(sld, "example.co");
        assert_eq!(tld, "uk");
    }

    #[test]
    fn parse_domain_lowercases() {
        let (sld, tld) = parse_domain("Example.COM").unwrap();
        assert_eq!(sld, "example");
        assert_eq!(tld, "com");
    }

    #[test]
    fn parse_domain_rejects_no_dot() {
        let err = parse_domain("localhost").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MalformedInput { param, .. } if param == "domain"
        ));
    }

    #[test]
    fn parse_domain_rejects_empty_label() {
        assert!(parse_domain(".com").is_err());
        assert!(parse_domain("example.").is_err());
    }

    #[test]
    fn host_record_type_parse_and_display() {
        assert_eq!(HostRecordType::parse("url301").unwrap(), HostRecordType::Url301);
        assert_eq!(HostRecordType::Url301.to_string(), "URL301");
        assert_eq!(HostRecordType::Frame.as_str(), "FRAME");
        assert!(HostRecordType::parse("SRV").is_err());
    }

    #[test]
    fn host_record_type_serde_uppercase() {
        let json = serde_json::to_string(&HostRecordType::Url301).unwrap();
        assert_eq!(json, "\"URL301\"");
        let back: HostRecordType = serde_json::from_str("\"FRAME\"").unwrap();
        assert_eq!(back, HostRecordType::Frame);
    }

    #[test]
    fn host_record_from_attributes() {
        let attrs: HashMap<String, String> = [
            ("HostId", "12"),
            ("Name", "@"),
            ("Type", "A"),
            ("Address", "1.2.3.4"),
            ("TTL", "300"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let record = HostRecord::from_attributes(&attrs).unwrap();
        assert_eq!(record.host_id.as_deref(), Some("12"));
        assert_eq!(record.name, "@");
        assert_eq!(record.record_type, "A");
        assert_eq!(record.address, "1.2.3.4");
        assert_eq!(record.ttl, 300);
        assert!(record.mx_pref.is_none());
    }

    #[test]
    fn host_record_ttl_defaults_when_absent_or_bad() {
        let attrs: HashMap<String, String> = [
            ("Name", "mail"),
            ("Type", "MX"),
            ("Address", "mx1.example.com"),
            ("TTL", "not-a-number"),
            ("MXPref", "10"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let record = HostRecord::from_attributes(&attrs).unwrap();
        assert_eq!(record.ttl, super::super::hosts::DEFAULT_TTL);
        assert_eq!(record.mx_pref, Some(10));
    }

    #[test]
    fn host_record_missing_required_attr_is_parse_error() {
        let attrs: HashMap<String, String> =
            [("Name".to_string(), "@".to_string())].into_iter().collect();
        let err = HostRecord::from_attributes(&attrs).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }
}

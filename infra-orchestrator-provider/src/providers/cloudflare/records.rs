//! DNS Record 操作（per-record API）

use serde::Serialize;

use crate::error::Result;

use super::{CfDnsRecord, CfRecordType, CloudflareProvider, MAX_PAGE_SIZE_RECORDS};

/// Cloudflare DNS 记录 TTL 的 "automatic" 取值
pub(crate) const TTL_AUTO: u32 = 1;

/// 记录写入请求（create / update 共用）
#[derive(Debug, Clone)]
pub struct RecordSpec {
    /// Record type.
    pub record_type: CfRecordType,
    /// Record name (`@` for the zone apex).
    pub name: String,
    /// Record content (IP, hostname, or text).
    pub content: String,
    /// TTL in seconds; `None` means automatic.
    pub ttl: Option<u32>,
    /// Cloudflare CDN proxy flag; only honored for A/AAAA/CNAME.
    pub proxied: Option<bool>,
    /// Priority; only honored for MX/SRV.
    pub priority: Option<u16>,
}

/// 请求体：proxied / priority 按记录类型条件附加
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct RecordBody {
    #[serde(rename = "type")]
    record_type: String,
    name: String,
    content: String,
    ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<u16>,
}

/// 将 `RecordSpec` 序列化为请求体。
///
/// 条件字段规则：`proxied` 只在 A/AAAA/CNAME 上附加，`priority` 只在 MX/SRV
/// 上附加，其余类型即使调用方传了也会被丢弃。TTL 缺省为 automatic（1）。
pub(crate) fn build_record_body(spec: &RecordSpec) -> RecordBody {
    RecordBody {
        record_type: spec.record_type.as_str().to_string(),
        name: spec.name.clone(),
        content: spec.content.clone(),
        ttl: spec.ttl.unwrap_or(TTL_AUTO),
        proxied: if spec.record_type.proxyable() {
            spec.proxied
        } else {
            None
        },
        priority: if spec.record_type.has_priority() {
            spec.priority
        } else {
            None
        },
    }
}

impl CloudflareProvider {
    /// 获取 DNS 记录列表（分页 + 类型/名称过滤）
    pub async fn list_records(
        &self,
        zone_id: &str,
        record_type: Option<CfRecordType>,
        name: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CfDnsRecord>> {
        let mut path = format!(
            "/zones/{}/dns_records?page={}&per_page={}",
            zone_id,
            page.max(1),
            per_page.min(MAX_PAGE_SIZE_RECORDS)
        );
        if let Some(record_type) = record_type {
            path.push_str(&format!("&type={record_type}"));
        }
        if let Some(name) = name
            && !name.is_empty()
        {
            path.push_str(&format!("&name={}", urlencoding::encode(name)));
        }

        self.get(&path).await
    }

    /// 创建 DNS 记录
    pub async fn create_record(&self, zone_id: &str, spec: &RecordSpec) -> Result<CfDnsRecord> {
        let body = build_record_body(spec);
        self.post(&format!("/zones/{zone_id}/dns_records"), &body)
            .await
    }

    /// 更新 DNS 记录
    pub async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        spec: &RecordSpec,
    ) -> Result<CfDnsRecord> {
        let body = build_record_body(spec);
        self.patch(&format!("/zones/{zone_id}/dns_records/{record_id}"), &body)
            .await
    }

    /// 删除 DNS 记录
    pub async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        self.delete(&format!("/zones/{zone_id}/dns_records/{record_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(record_type: CfRecordType) -> RecordSpec {
        RecordSpec {
            record_type,
            name: "www".to_string(),
            content: "1.2.3.4".to_string(),
            ttl: None,
            proxied: None,
            priority: None,
        }
    }

    #[test]
    fn txt_never_gets_proxied_even_if_supplied() {
        let mut s = spec(CfRecordType::Txt);
        s.proxied = Some(true);
        let body = build_record_body(&s);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("proxied").is_none());
    }

    #[test]
    fn a_record_keeps_proxied() {
        let mut s = spec(CfRecordType::A);
        s.proxied = Some(true);
        let body = build_record_body(&s);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["proxied"], true);
    }

    #[test]
    fn mx_with_priority_attaches_it() {
        let mut s = spec(CfRecordType::Mx);
        s.content = "mail.example.com".to_string();
        s.priority = Some(10);
        let body = build_record_body(&s);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["priority"], 10);
    }

    #[test]
    fn a_with_priority_drops_it() {
        let mut s = spec(CfRecordType::A);
        s.priority = Some(10);
        let body = build_record_body(&s);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn ttl_defaults_to_automatic() {
        let body = build_record_body(&spec(CfRecordType::A));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["ttl"], TTL_AUTO);
    }

    #[test]
    fn explicit_ttl_is_preserved() {
        let mut s = spec(CfRecordType::Cname);
        s.ttl = Some(3600);
        let body = build_record_body(&s);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["ttl"], 3600);
    }

    #[test]
    fn body_uses_type_key() {
        let body = build_record_body(&spec(CfRecordType::Srv));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "SRV");
    }
}

//! DNS host 记录读写与整组重建
//!
//! 后端只提供「整组替换」的写入接口：set 直接写入调用方给出的完整
//! 集合，delete 要先读出全量记录、在内存中剔除目标、再把剩余集合
//! 写回。删除的改写逻辑抽成纯函数，便于单独验证不丢记录的约束。
//!
//! 删除的读与写是两次独立的远程调用，后端没有乐观并发控制；期间的
//! 外部修改会被整组写回覆盖（last-writer-wins）。

use serde::Serialize;

use super::types::{HostRecord, HostRecordType, parse_domain};
use super::{NamecheapProvider, xml};
use crate::error::{ProviderError, Result};

/// 未显式指定 TTL 时的默认值（秒）
pub(crate) const DEFAULT_TTL: u32 = 1800;

/// MX 记录未指定优先级时的默认值
const DEFAULT_MX_PREF: u32 = 10;

/// 整组写入的结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetHostsOutcome {
    /// Whether the backend confirmed the write.
    pub confirmed: bool,
    /// Number of records in the set after the write.
    pub record_count: usize,
}

/// 删除单条记录的结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteHostOutcome {
    /// Whether the backend confirmed the write.
    pub confirmed: bool,
    /// Number of records remaining after the delete.
    pub remaining_records: usize,
}

impl HostRecord {
    /// 构造一条待写入的记录，补齐 TTL 与 MXPref 默认值
    ///
    /// MXPref 只对 MX 记录有意义，其余类型即便传入也会被丢弃。
    #[must_use]
    pub fn new(
        name: &str,
        record_type: HostRecordType,
        address: &str,
        ttl: Option<u32>,
        mx_pref: Option<u32>,
    ) -> Self {
        Self {
            host_id: None,
            name: name.to_string(),
            record_type: record_type.as_str().to_string(),
            address: address.to_string(),
            ttl: ttl.unwrap_or(DEFAULT_TTL),
            mx_pref: if record_type == HostRecordType::Mx {
                Some(mx_pref.unwrap_or(DEFAULT_MX_PREF))
            } else {
                None
            },
        }
    }
}

/// 记录匹配：名字不区分大小写，类型精确相等
fn matches(record: &HostRecord, name: &str, record_type: &str) -> bool {
    record.name.eq_ignore_ascii_case(name) && record.record_type == record_type
}

/// 计算删除后的记录集
///
/// 无命中返回 `NotFound`；删空整组返回 `InvariantViolation`，因为写回空集
/// 会清掉域名全部解析。
pub(crate) fn plan_delete(
    hosts: &[HostRecord],
    name: &str,
    record_type: &str,
) -> Result<Vec<HostRecord>> {
    let remaining: Vec<HostRecord> = hosts
        .iter()
        .filter(|r| !matches(r, name, record_type))
        .cloned()
        .collect();

    if remaining.len() == hosts.len() {
        return Err(ProviderError::NotFound {
            provider: "namecheap".to_string(),
            target: format!("{record_type} 记录 {name}"),
        });
    }
    if remaining.is_empty() {
        return Err(ProviderError::InvariantViolation {
            provider: "namecheap".to_string(),
            detail: format!(
                "删除 {record_type} 记录 {name} 会清空整个记录集，已拒绝写回"
            ),
        });
    }
    Ok(remaining)
}

/// 将记录集展开为整组写入所需的 1 起始索引参数
pub(crate) fn host_set_params(records: &[HostRecord]) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(records.len() * 5);
    for (i, record) in records.iter().enumerate() {
        let n = i + 1;
        params.push((format!("HostName{n}"), record.name.clone()));
        params.push((format!("RecordType{n}"), record.record_type.clone()));
        params.push((format!("Address{n}"), record.address.clone()));
        params.push((format!("TTL{n}"), record.ttl.to_string()));
        if record.record_type == "MX" {
            params.push((
                format!("MXPref{n}"),
                record.mx_pref.unwrap_or(DEFAULT_MX_PREF).to_string(),
            ));
        }
    }
    params
}

impl NamecheapProvider {
    /// 读取域名的全部 host 记录
    pub async fn get_dns_hosts(&self, domain: &str) -> Result<Vec<HostRecord>> {
        let (sld, tld) = parse_domain(domain)?;
        let response = self
            .request(
                "namecheap.domains.dns.getHosts",
                &[("SLD".to_string(), sld), ("TLD".to_string(), tld)],
            )
            .await?;

        xml::all_tag_attributes(&response, "host")
            .iter()
            .map(HostRecord::from_attributes)
            .collect()
    }

    /// 删除一条 host 记录（整组读改写）
    pub async fn delete_dns_host(
        &self,
        domain: &str,
        name: &str,
        record_type: &str,
    ) -> Result<DeleteHostOutcome> {
        let record_type = HostRecordType::parse(record_type)?;
        let hosts = self.get_dns_hosts(domain).await?;
        let remaining = plan_delete(&hosts, name, record_type.as_str())?;
        let outcome = self.set_hosts(domain, &remaining).await?;
        Ok(DeleteHostOutcome {
            confirmed: outcome.confirmed,
            remaining_records: outcome.record_count,
        })
    }

    /// 整组替换全部 host 记录。
    ///
    /// `records` 是期望的完整集合：不在其中的现有记录会被移除，不做任何
    /// 合并。写回集合里的记录按出现顺序重新编号，TTL 与 MXPref 原样保留。
    /// 空集合会清掉域名全部解析，直接拒绝。
    pub async fn set_hosts(&self, domain: &str, records: &[HostRecord]) -> Result<SetHostsOutcome> {
        if records.is_empty() {
            return Err(ProviderError::InvariantViolation {
                provider: "namecheap".to_string(),
                detail: "写回空记录集会清空域名全部解析，已拒绝".to_string(),
            });
        }

        let (sld, tld) = parse_domain(domain)?;
        let mut params = vec![("SLD".to_string(), sld), ("TLD".to_string(), tld)];
        params.extend(host_set_params(records));

        let response = self
            .request("namecheap.domains.dns.setHosts", &params)
            .await?;
        Ok(SetHostsOutcome {
            confirmed: response.contains(r#"IsSuccess="true""#),
            record_count: records.len(),
        })
    }
}

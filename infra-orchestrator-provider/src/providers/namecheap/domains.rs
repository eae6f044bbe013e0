//! 域名与 nameserver 操作

use regex::Regex;

use super::types::{DomainInfo, DomainSummary, NameserverInfo, parse_domain};
use super::{MAX_PAGE_SIZE_DOMAINS, NamecheapProvider, xml};
use crate::error::Result;
use crate::traits::ErrorSource;

fn flag(value: Option<&String>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// 提取 `<Nameserver>` 元素文本列表
fn extract_nameservers(response: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"(?i)<Nameserver>([^<]+)</Nameserver>") else {
        return Vec::new();
    };
    re.captures_iter(response)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// 从 getInfo 响应组装域名详情
///
/// 创建/到期日期在不同账户下出现的位置不一致：优先取 `<DomainDetails>`
/// 的属性形态，缺席时退回同名元素文本。
fn parse_domain_info(response: &str) -> DomainInfo {
    let attr = |tag: &str, name: &str| xml::tag_attribute(response, tag, name);
    let truthy = |v: Option<String>| v.is_some_and(|v| v.eq_ignore_ascii_case("true"));

    DomainInfo {
        domain: attr("DomainGetInfoResult", "DomainName"),
        status: attr("DomainGetInfoResult", "Status"),
        created: attr("DomainDetails", "CreatedDate")
            .or_else(|| xml::tag_text(response, "CreatedDate")),
        expires: attr("DomainDetails", "ExpiredDate")
            .or_else(|| xml::tag_text(response, "ExpiredDate")),
        is_locked: truthy(attr("DomainGetInfoResult", "IsLocked")),
        is_expired: truthy(attr("DomainGetInfoResult", "IsExpired")),
        auto_renew: truthy(attr("DomainGetInfoResult", "AutoRenew")),
        nameservers: extract_nameservers(response),
        using_namecheap_dns: !response.contains(r#"ProviderType="CUSTOM""#),
    }
}

impl NamecheapProvider {
    /// 列出账号下的域名
    pub async fn list_domains(&self, page: u32, page_size: u32) -> Result<Vec<DomainSummary>> {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE_DOMAINS);
        let response = self
            .request(
                "namecheap.domains.getList",
                &[
                    ("Page".to_string(), page.to_string()),
                    ("PageSize".to_string(), page_size.to_string()),
                ],
            )
            .await?;

        Ok(xml::all_tag_attributes(&response, "Domain")
            .iter()
            .filter_map(|attrs| {
                Some(DomainSummary {
                    name: attrs.get("Name")?.clone(),
                    expires: attrs.get("Expires").cloned(),
                    is_expired: flag(attrs.get("IsExpired")),
                    is_locked: flag(attrs.get("IsLocked")),
                    auto_renew: flag(attrs.get("AutoRenew")),
                    whois_guard: attrs.get("WhoisGuard").cloned(),
                })
            })
            .collect())
    }

    /// 查询单个域名的详情
    pub async fn get_domain_info(&self, domain: &str) -> Result<DomainInfo> {
        parse_domain(domain)?;
        let response = self
            .request(
                "namecheap.domains.getInfo",
                &[("DomainName".to_string(), domain.to_string())],
            )
            .await?;

        Ok(parse_domain_info(&response))
    }

    /// 读取域名当前的 nameserver 列表
    pub async fn get_nameservers(&self, domain: &str) -> Result<NameserverInfo> {
        let (sld, tld) = parse_domain(domain)?;
        let response = self
            .request(
                "namecheap.domains.dns.getList",
                &[("SLD".to_string(), sld), ("TLD".to_string(), tld)],
            )
            .await?;

        Ok(NameserverInfo {
            domain: domain.to_string(),
            nameservers: extract_nameservers(&response),
            using_namecheap_dns: response.contains(r#"IsUsingOurDNS="true""#),
        })
    }

    /// 整组替换为自定义 nameserver（2 到 5 条）
    pub async fn set_nameservers(&self, domain: &str, nameservers: &[String]) -> Result<bool> {
        if nameservers.len() < 2 || nameservers.len() > 5 {
            return Err(self.input_error(
                "nameservers",
                format!("需要 2 到 5 条 nameserver，实际 {}", nameservers.len()),
            ));
        }

        let (sld, tld) = parse_domain(domain)?;
        let response = self
            .request(
                "namecheap.domains.dns.setCustom",
                &[
                    ("SLD".to_string(), sld),
                    ("TLD".to_string(), tld),
                    ("Nameservers".to_string(), nameservers.join(",")),
                ],
            )
            .await?;

        // 不同账户级别下成功标记字段不一致，两种都认可
        Ok(response.contains(r#"Update="true""#) || response.contains(r#"IsSuccess="true""#))
    }

    /// 切回 Namecheap 默认 DNS
    pub async fn set_default_nameservers(&self, domain: &str) -> Result<bool> {
        let (sld, tld) = parse_domain(domain)?;
        let response = self
            .request(
                "namecheap.domains.dns.setDefault",
                &[("SLD".to_string(), sld), ("TLD".to_string(), tld)],
            )
            .await?;

        Ok(response.contains(r#"Updated="true""#) || response.contains(r#"IsSuccess="true""#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_nameservers_collects_in_order() {
        let xml = r"
            <DomainDNSGetListResult Domain='example.com' IsUsingOurDNS='false'>
                <Nameserver>ns1.example.net</Nameserver>
                <Nameserver> ns2.example.net </Nameserver>
            </DomainDNSGetListResult>";
        assert_eq!(
            extract_nameservers(xml),
            vec!["ns1.example.net".to_string(), "ns2.example.net".to_string()]
        );
    }

    #[test]
    fn extract_nameservers_empty_when_absent() {
        assert!(extract_nameservers("<DomainDNSGetListResult/>").is_empty());
    }

    #[test]
    fn flag_requires_true_string() {
        assert!(flag(Some(&"true".to_string())));
        assert!(flag(Some(&"TRUE".to_string())));
        assert!(!flag(Some(&"false".to_string())));
        assert!(!flag(None));
    }

    #[test]
    fn domain_info_reads_dates_from_domain_details_attributes() {
        let xml = r#"
            <DomainGetInfoResult DomainName="example.com" Status="Ok"
                IsLocked="false" IsExpired="false" AutoRenew="true">
                <DomainDetails CreatedDate="01/15/2020" ExpiredDate="01/15/2027"/>
                <DnsDetails ProviderType="FREE">
                    <Nameserver>dns1.registrar-servers.com</Nameserver>
                    <Nameserver>dns2.registrar-servers.com</Nameserver>
                </DnsDetails>
            </DomainGetInfoResult>"#;

        let info = parse_domain_info(xml);
        assert_eq!(info.domain.as_deref(), Some("example.com"));
        assert_eq!(info.created.as_deref(), Some("01/15/2020"));
        assert_eq!(info.expires.as_deref(), Some("01/15/2027"));
        assert!(info.auto_renew);
        assert!(!info.is_locked);
        assert_eq!(info.nameservers.len(), 2);
        assert!(info.using_namecheap_dns);
    }

    #[test]
    fn domain_info_falls_back_to_date_elements() {
        let xml = r#"
            <DomainGetInfoResult DomainName="example.com" Status="Ok" AutoRenew="false">
                <DomainDetails>
                    <CreatedDate>01/15/2020</CreatedDate>
                    <ExpiredDate>01/15/2027</ExpiredDate>
                </DomainDetails>
                <DnsDetails ProviderType="CUSTOM">
                    <Nameserver>ns1.example.net</Nameserver>
                </DnsDetails>
            </DomainGetInfoResult>"#;

        let info = parse_domain_info(xml);
        assert_eq!(info.created.as_deref(), Some("01/15/2020"));
        assert_eq!(info.expires.as_deref(), Some("01/15/2027"));
        assert!(!info.auto_renew);
        assert!(!info.using_namecheap_dns);
    }

    #[test]
    fn domain_info_auto_renew_comes_from_get_info_result() {
        // AutoRenew 只认 DomainGetInfoResult 上的属性
        let xml = r#"
            <DomainGetInfoResult DomainName="example.com" AutoRenew="true">
                <DomainDetails AutoRenew="false" CreatedDate="01/15/2020"/>
            </DomainGetInfoResult>"#;
        assert!(parse_domain_info(xml).auto_renew);
    }

    #[tokio::test]
    async fn set_nameservers_rejects_wrong_count() {
        let provider = NamecheapProvider::new("user".to_string(), "key".to_string(), None);
        let one = vec!["ns1.example.net".to_string()];
        assert!(provider.set_nameservers("example.com", &one).await.is_err());

        let six: Vec<String> = (1..=6).map(|i| format!("ns{i}.example.net")).collect();
        assert!(provider.set_nameservers("example.com", &six).await.is_err());
    }
}

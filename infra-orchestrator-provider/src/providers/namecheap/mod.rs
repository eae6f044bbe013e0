//! Namecheap Backend
//!
//! XML 响应走模式匹配读取（见 `xml.rs`），不引入完整 XML 解析器；
//! DNS host 记录是"整组替换"语义，单条删除由 `hosts.rs` 的
//! read-modify-write 协调实现。

mod domains;
mod hosts;
mod http;
mod types;
mod xml;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::traits::ErrorSource;

pub use hosts::{DeleteHostOutcome, SetHostsOutcome};
pub use types::{DomainInfo, DomainSummary, HostRecord, HostRecordType, NameserverInfo};

pub(crate) const NC_API_BASE: &str = "https://api.namecheap.com/xml.response";
/// 第三方 IP 回显服务：Namecheap 鉴权要求调用方公网 IP
pub(crate) const IP_ECHO_URL: &str = "https://api.ipify.org?format=json";
/// Namecheap domains.getList 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_DOMAINS: u32 = 100;

/// Namecheap backend adapter.
///
/// All credential fields are passed in explicitly at construction. The
/// caller's public IP is a required auth input for every API call and is
/// fetched from an IP-echo service each time (see [`IP_ECHO_URL`]).
pub struct NamecheapProvider {
    pub(crate) client: Client,
    pub(crate) api_user: String,
    pub(crate) api_key: String,
    pub(crate) username: String,
}

impl NamecheapProvider {
    /// `username` defaults to `api_user` when the account has no separate
    /// username (the common case).
    #[must_use]
    pub fn new(api_user: String, api_key: String, username: Option<String>) -> Self {
        let username = username.unwrap_or_else(|| api_user.clone());
        Self {
            client: create_http_client(),
            api_user,
            api_key,
            username,
        }
    }
}

impl ErrorSource for NamecheapProvider {
    fn provider_name(&self) -> &'static str {
        "namecheap"
    }
}

//! Cloudflare Backend
//!
//! 覆盖 Zones / DNS Records / Workers / KV / R2 / D1 / Pages 的 typed
//! adapter，全部经由统一的 JSON envelope codec（见 `http.rs`）。

mod http;
mod pages;
mod records;
mod storage;
mod types;
mod workers;
mod zones;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::traits::ErrorSource;

pub use records::RecordSpec;
pub use types::{
    CfDnsRecord, CfRecordType, D1Database, D1QueryResult, KvKey, KvNamespace,
    PagesProjectDetail, PagesProjectSummary, R2Bucket, WorkerRoute, WorkerScript, ZoneDetail,
    ZoneSummary,
};

pub(crate) use types::CloudflareEnvelope;

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare backend adapter.
///
/// Credentials and the account scope are passed in explicitly at construction;
/// nothing is read from the environment here, so multiple instances with
/// different accounts can coexist in one process.
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) account_id: String,
}

impl CloudflareProvider {
    #[must_use]
    pub fn new(api_token: String, account_id: String) -> Self {
        Self {
            client: create_http_client(),
            api_token,
            account_id,
        }
    }
}

impl ErrorSource for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }
}

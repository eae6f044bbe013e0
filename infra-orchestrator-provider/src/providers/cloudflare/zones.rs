//! Zone 操作

use crate::error::Result;

use super::types::CloudflareZone;
use super::{CloudflareProvider, MAX_PAGE_SIZE_ZONES, ZoneDetail, ZoneSummary};

impl CloudflareProvider {
    /// 获取 zone 列表（分页 + 可选域名过滤）
    ///
    /// `per_page` 超过 API 上限（50）时收紧到上限。
    pub async fn list_zones(
        &self,
        name: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ZoneSummary>> {
        let mut path = format!(
            "/zones?page={}&per_page={}",
            page.max(1),
            per_page.min(MAX_PAGE_SIZE_ZONES)
        );
        if let Some(name) = name
            && !name.is_empty()
        {
            path.push_str(&format!("&name={}", urlencoding::encode(name)));
        }

        let zones: Vec<CloudflareZone> = self.get(&path).await?;
        Ok(zones.into_iter().map(Self::zone_to_summary).collect())
    }

    /// 获取 zone 详情（原样透传）
    pub async fn get_zone(&self, zone_id: &str) -> Result<ZoneDetail> {
        let zone: serde_json::Value = self.get(&format!("/zones/{zone_id}")).await?;
        Ok(ZoneDetail(zone))
    }

    /// 将 Cloudflare zone 裁剪为摘要输出
    fn zone_to_summary(zone: CloudflareZone) -> ZoneSummary {
        ZoneSummary {
            id: zone.id,
            name: zone.name,
            status: zone.status,
            paused: zone.paused,
            name_servers: zone.name_servers,
            plan: zone.plan.map(|p| p.name),
        }
    }
}

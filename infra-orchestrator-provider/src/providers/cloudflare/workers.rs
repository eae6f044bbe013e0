//! Workers 脚本与路由操作

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

use super::http::RawPayload;
use super::{CloudflareProvider, WorkerRoute, WorkerScript};

impl CloudflareProvider {
    /// 获取账户下全部 Worker 脚本
    pub async fn list_scripts(&self) -> Result<Vec<WorkerScript>> {
        self.get(&format!("/accounts/{}/workers/scripts", self.account_id))
            .await
    }

    /// 读取 Worker 脚本源码（原始 payload 调用）
    pub async fn get_script(&self, script_name: &str) -> Result<String> {
        let payload = self
            .get_raw(&format!(
                "/accounts/{}/workers/scripts/{}",
                self.account_id, script_name
            ))
            .await?;
        Ok(payload.into_text())
    }

    /// 部署（创建或更新）Worker 脚本
    pub async fn put_script(&self, script_name: &str, script: String) -> Result<Value> {
        self.put_raw(
            &format!(
                "/accounts/{}/workers/scripts/{}",
                self.account_id, script_name
            ),
            script,
            "application/javascript",
        )
        .await
    }

    /// 删除 Worker 脚本
    pub async fn delete_script(&self, script_name: &str) -> Result<()> {
        self.delete(&format!(
            "/accounts/{}/workers/scripts/{}",
            self.account_id, script_name
        ))
        .await
    }

    /// 获取 zone 下全部 Worker 路由
    pub async fn list_routes(&self, zone_id: &str) -> Result<Vec<WorkerRoute>> {
        self.get(&format!("/zones/{zone_id}/workers/routes")).await
    }

    /// 创建 Worker 路由
    pub async fn create_route(
        &self,
        zone_id: &str,
        pattern: &str,
        script_name: &str,
    ) -> Result<Value> {
        #[derive(Serialize)]
        struct CreateRouteBody<'a> {
            pattern: &'a str,
            script: &'a str,
        }

        self.post(
            &format!("/zones/{zone_id}/workers/routes"),
            &CreateRouteBody {
                pattern,
                script: script_name,
            },
        )
        .await
    }

    /// 删除 Worker 路由
    pub async fn delete_route(&self, zone_id: &str, route_id: &str) -> Result<()> {
        self.delete(&format!("/zones/{zone_id}/workers/routes/{route_id}"))
            .await
    }
}

impl RawPayload {
    /// 将原始 payload 折叠为文本：JSON 字符串取其内容，其他 JSON 值序列化输出
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Json(Value::String(s)) => s,
            Self::Json(value) => value.to_string(),
        }
    }
}

//! Namecheap HTTP 请求方法
//!
//! 所有命令走同一个 GET 端点，响应为 XML 文本。每次调用前先向公网回显服务
//! 查询出口 IP（API 要求 `ClientIp` 与白名单匹配）。

use log::{debug, error};
use serde::Deserialize;

use super::{IP_ECHO_URL, NC_API_BASE, NamecheapProvider};
use crate::error::Result;
use crate::providers::namecheap::xml;
use crate::traits::ErrorSource;

#[derive(Deserialize)]
struct IpEcho {
    ip: String,
}

impl NamecheapProvider {
    /// 查询当前出口公网 IP
    async fn client_ip(&self) -> Result<String> {
        let response = self
            .client
            .get(IP_ECHO_URL)
            .send()
            .await
            .map_err(|e| self.network_error(format!("获取公网 IP 失败: {e}")))?;

        let echo: IpEcho = response
            .json()
            .await
            .map_err(|e| self.parse_error(format!("公网 IP 响应解析失败: {e}")))?;

        Ok(echo.ip)
    }

    /// 执行一条 API 命令，返回已通过错误检查的 XML 响应体
    pub(crate) async fn request(
        &self,
        command: &str,
        params: &[(String, String)],
    ) -> Result<String> {
        let client_ip = self.client_ip().await?;
        debug!("Namecheap {command}");

        let response = self
            .client
            .get(NC_API_BASE)
            .query(&[
                ("ApiUser", self.api_user.as_str()),
                ("ApiKey", self.api_key.as_str()),
                ("UserName", self.username.as_str()),
                ("ClientIp", client_ip.as_str()),
                ("Command", command),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| self.network_error(e.to_string()))?;

        let xml = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("读取响应失败: {e}")))?;

        self.check_response(&xml)?;
        Ok(xml)
    }

    /// 检查响应状态，`Status="ERROR"` 时取首个 `<Error>` 文本
    fn check_response(&self, xml: &str) -> Result<()> {
        if xml.contains(r#"Status="ERROR""#) {
            let message = xml::tag_text(xml, "Error")
                .unwrap_or_else(|| "Unknown API error".to_string());
            error!("API 错误: {message}");
            return Err(self.remote_error(message));
        }
        Ok(())
    }
}

//! Cloudflare HTTP 请求方法（JSON envelope codec）

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::traits::ErrorSource;

use super::{CF_API_BASE, CloudflareEnvelope, CloudflareProvider};

/// 原始响应 payload：metadata 调用返回 JSON envelope，内容调用返回原始文本，
/// 二者共用同一套鉴权，按响应 Content-Type 区分。
#[derive(Debug, Clone)]
pub enum RawPayload {
    /// JSON envelope 中的 result 字段
    Json(Value),
    /// 非 JSON 的原始响应体（Worker 脚本源码、KV 值等）
    Text(String),
}

/// 从 envelope 的 errors 列表提取人类可读消息。
///
/// 规则：第一个 error 对象的 `message`；没有则整个列表序列化为字符串；
/// envelope 完全没有 errors 时为 `"Unknown error"`。
pub(crate) fn envelope_error_message(errors: Option<&Vec<Value>>) -> String {
    match errors {
        Some(list) => list
            .first()
            .and_then(|e| e.get("message").and_then(Value::as_str))
            .map_or_else(
                || serde_json::to_string(list).unwrap_or_else(|_| "Unknown error".to_string()),
                ToString::to_string,
            ),
        None => "Unknown error".to_string(),
    }
}

impl CloudflareProvider {
    /// 解码 JSON envelope：success 为 false 时转为 `RemoteApi` 错误。
    ///
    /// 返回 `Ok(None)` 表示调用成功但 envelope 无 result 字段（DELETE 等）。
    pub(crate) fn decode_envelope<T: for<'de> Deserialize<'de>>(
        &self,
        response_text: &str,
    ) -> Result<Option<T>> {
        let envelope: CloudflareEnvelope<T> =
            serde_json::from_str(response_text).map_err(|e| {
                log::error!("JSON 解析失败: {e}");
                log::error!("原始响应: {response_text}");
                self.parse_error(e)
            })?;

        if !envelope.success {
            let message = envelope_error_message(envelope.errors.as_ref());
            log::error!("API 错误: {message}");
            return Err(self.remote_error(message));
        }

        Ok(envelope.result)
    }

    /// 解码 envelope 并要求 result 字段存在
    pub(crate) fn require_result<T: for<'de> Deserialize<'de>>(
        &self,
        response_text: &str,
    ) -> Result<T> {
        self.decode_envelope(response_text)?
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("读取响应失败: {e}")))?;

        log::debug!("Response Body: {response_text}");
        Ok(response_text)
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let response_text = self.read_body(response).await?;
        self.require_result(&response_text)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let response_text = self.read_body(response).await?;
        self.require_result(&response_text)
    }

    /// 执行 PATCH 请求
    pub(crate) async fn patch<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("PATCH {url}");

        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let response_text = self.read_body(response).await?;
        self.require_result(&response_text)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let response_text = self.read_body(response).await?;
        self.decode_envelope::<Value>(&response_text)?;
        Ok(())
    }

    /// 执行 GET 请求（原始 payload 变体）
    ///
    /// JSON Content-Type 的响应按 envelope 检查 success；其他 Content-Type
    /// 的响应体整体视为成功 payload。
    pub(crate) async fn get_raw(&self, path: &str) -> Result<RawPayload> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("GET (raw) {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let response_text = self.read_body(response).await?;

        if content_type.contains("application/json") {
            let value: Value = serde_json::from_str(&response_text)
                .map_err(|e| self.parse_error(e))?;
            if value.get("success") == Some(&Value::Bool(false)) {
                let errors = value
                    .get("errors")
                    .and_then(Value::as_array)
                    .map(std::borrow::ToOwned::to_owned);
                return Err(self.remote_error(envelope_error_message(errors.as_ref())));
            }
            let result = value.get("result").cloned().unwrap_or(value);
            return Ok(RawPayload::Json(result));
        }

        Ok(RawPayload::Text(response_text))
    }

    /// 执行 PUT 请求（原始请求体，JSON envelope 响应）
    ///
    /// 用于 Worker 脚本部署与 KV 写入：请求体是任意文本，响应仍是 envelope。
    pub(crate) async fn put_raw(
        &self,
        path: &str,
        body: String,
        content_type: &str,
    ) -> Result<Value> {
        let url = format!("{CF_API_BASE}{path}");
        log::debug!("PUT (raw) {url}");

        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let response_text = self.read_body(response).await?;
        Ok(self
            .decode_envelope::<Value>(&response_text)?
            .unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    fn provider() -> CloudflareProvider {
        CloudflareProvider::new(String::new(), String::new())
    }

    #[test]
    fn decode_success_returns_result() {
        let p = provider();
        let body = r#"{"success":true,"result":{"id":"abc"},"errors":[]}"#;
        let result: Option<Value> = p.decode_envelope(body).unwrap();
        assert_eq!(result.unwrap()["id"], "abc");
    }

    #[test]
    fn decode_failure_extracts_first_error_message() {
        let p = provider();
        let body = r#"{"success":false,"result":null,"errors":[{"code":7003,"message":"X"}]}"#;
        let err = p.decode_envelope::<Value>(body).unwrap_err();
        assert!(
            matches!(&err, ProviderError::RemoteApi { message, .. } if message == "X"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn decode_failure_without_message_stringifies_list() {
        let p = provider();
        let body = r#"{"success":false,"result":null,"errors":[{"code":1004}]}"#;
        let err = p.decode_envelope::<Value>(body).unwrap_err();
        assert!(
            matches!(&err, ProviderError::RemoteApi { message, .. } if message.contains("1004")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn decode_failure_without_errors_is_unknown() {
        let p = provider();
        let body = r#"{"success":false,"result":null}"#;
        let err = p.decode_envelope::<Value>(body).unwrap_err();
        assert!(
            matches!(&err, ProviderError::RemoteApi { message, .. } if message == "Unknown error"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn decode_invalid_json_is_parse_error() {
        let p = provider();
        let err = p.decode_envelope::<Value>("<html>not json</html>").unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[test]
    fn require_result_rejects_missing_result() {
        let p = provider();
        let body = r#"{"success":true,"errors":[]}"#;
        let err = p.require_result::<Value>(body).unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
    }

    #[test]
    fn error_message_prefers_first_message() {
        let errors = vec![
            serde_json::json!({"code": 1, "message": "first"}),
            serde_json::json!({"code": 2, "message": "second"}),
        ];
        assert_eq!(envelope_error_message(Some(&errors)), "first");
    }

    #[test]
    fn error_message_none_is_unknown() {
        assert_eq!(envelope_error_message(None), "Unknown error");
    }
}

use crate::error::ProviderError;

/// Backend 错误构造 Trait（内部使用）
///
/// 各 backend 实现此 trait 以统一错误的 provider 标识与构造方式。
pub(crate) trait ErrorSource {
    /// 返回 backend 标识符
    fn provider_name(&self) -> &'static str;

    /// 快捷方法：backend 业务错误
    fn remote_error(&self, message: impl Into<String>) -> ProviderError {
        ProviderError::RemoteApi {
            provider: self.provider_name().to_string(),
            message: message.into(),
        }
    }

    /// 快捷方法：网络错误
    fn network_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::Network {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::Parse {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：输入校验错误
    fn input_error(&self, param: &str, detail: impl Into<String>) -> ProviderError {
        ProviderError::MalformedInput {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.into(),
        }
    }
}

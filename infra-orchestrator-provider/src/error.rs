use serde::{Deserialize, Serialize};

/// Unified error type for all backend operations.
///
/// Each variant includes a `provider` field identifying which backend produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Propagation
///
/// Nothing in this crate retries: transient network failures surface as
/// [`Network`](Self::Network) errors and the caller decides what to do with them.
/// At the tool boundary every variant is converted into a uniform
/// `{"error": message}` payload; no error escapes to crash the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The network exchange succeeded but the backend reported a failure.
    ///
    /// The message is extracted from the backend's own error structure:
    /// the first JSON error object's `message` for Cloudflare, the first
    /// `<Error>` element for Namecheap.
    RemoteApi {
        /// Backend that produced the error.
        provider: String,
        /// Human-readable error message from the backend.
        message: String,
    },

    /// The target of a reconciliation operation does not exist.
    ///
    /// Returned before any write is issued; the remote record set is untouched.
    NotFound {
        /// Backend that produced the error.
        provider: String,
        /// Description of the missing target (e.g. `"www (CNAME)"`).
        target: String,
    },

    /// The operation would violate a backend invariant.
    ///
    /// The canonical case is deleting the last DNS host record: the backend
    /// rejects (or leaves undefined) an empty record set, so the write is
    /// refused locally instead.
    InvariantViolation {
        /// Backend that produced the error.
        provider: String,
        /// What invariant would have been broken.
        detail: String,
    },

    /// A caller-supplied value was rejected before any network call.
    MalformedInput {
        /// Backend that produced the error.
        provider: String,
        /// Name of the offending parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused,
    /// timeout, etc.). Not retried; the caller decides.
    Network {
        /// Backend that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// Failed to decode the backend's response.
    Parse {
        /// Backend that produced the error.
        provider: String,
        /// Details about the decode failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::RemoteApi { .. }
                | Self::NotFound { .. }
                | Self::InvariantViolation { .. }
                | Self::MalformedInput { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoteApi { provider, message } => {
                write!(f, "[{provider}] API error: {message}")
            }
            Self::NotFound { provider, target } => {
                write!(f, "[{provider}] Record not found: {target}")
            }
            Self::InvariantViolation { provider, detail } => {
                write!(f, "[{provider}] {detail}")
            }
            Self::MalformedInput {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::Network { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Parse { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_remote_api() {
        let e = ProviderError::RemoteApi {
            provider: "cloudflare".to_string(),
            message: "Invalid zone identifier".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] API error: Invalid zone identifier"
        );
    }

    #[test]
    fn display_not_found() {
        let e = ProviderError::NotFound {
            provider: "namecheap".to_string(),
            target: "www (CNAME)".to_string(),
        };
        assert_eq!(e.to_string(), "[namecheap] Record not found: www (CNAME)");
    }

    #[test]
    fn display_invariant_violation() {
        let e = ProviderError::InvariantViolation {
            provider: "namecheap".to_string(),
            detail: "Cannot delete the last DNS record. At least one record must remain."
                .to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[namecheap] Cannot delete the last DNS record. At least one record must remain."
        );
    }

    #[test]
    fn display_malformed_input() {
        let e = ProviderError::MalformedInput {
            provider: "namecheap".to_string(),
            param: "domain".to_string(),
            detail: "expected format: example.com".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[namecheap] Invalid parameter 'domain': expected format: example.com"
        );
    }

    #[test]
    fn display_network() {
        let e = ProviderError::Network {
            provider: "cloudflare".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[cloudflare] Network error: connection refused");
    }

    #[test]
    fn display_parse() {
        let e = ProviderError::Parse {
            provider: "cloudflare".to_string(),
            detail: "missing result field".to_string(),
        };
        assert_eq!(e.to_string(), "[cloudflare] Parse error: missing result field");
    }

    #[test]
    fn expected_variants() {
        assert!(
            ProviderError::RemoteApi {
                provider: "t".into(),
                message: "x".into(),
            }
            .is_expected()
        );
        assert!(
            ProviderError::NotFound {
                provider: "t".into(),
                target: "x".into(),
            }
            .is_expected()
        );
        assert!(
            ProviderError::InvariantViolation {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            ProviderError::MalformedInput {
                provider: "t".into(),
                param: "p".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::Network {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::Parse {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_json_tagged() {
        let e = ProviderError::NotFound {
            provider: "namecheap".to_string(),
            target: "www (A)".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"NotFound\""));
        assert!(json.contains("\"target\":\"www (A)\""));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<ProviderError> = vec![
            ProviderError::RemoteApi {
                provider: "t".into(),
                message: "m".into(),
            },
            ProviderError::NotFound {
                provider: "t".into(),
                target: "x".into(),
            },
            ProviderError::InvariantViolation {
                provider: "t".into(),
                detail: "d".into(),
            },
            ProviderError::MalformedInput {
                provider: "t".into(),
                param: "p".into(),
                detail: "d".into(),
            },
            ProviderError::Network {
                provider: "t".into(),
                detail: "d".into(),
            },
            ProviderError::Parse {
                provider: "t".into(),
                detail: "d".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ProviderError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}

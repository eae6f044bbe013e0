//! # infra-orchestrator-provider
//!
//! Typed clients for cloud infrastructure backends, normalizing their
//! JSON and XML APIs into one error contract.
//!
//! ## Supported Backends
//!
//! | Backend | Feature Flag | Wire Format | Auth Method |
//! |---------|-------------|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | JSON envelope | Bearer Token |
//! | [Namecheap](https://www.namecheap.com/) | `namecheap` | XML | API key + client IP |
//!
//! ## Feature Flags
//!
//! ### Backend Selection
//!
//! - **`all-backends`** *(default)* — Enable both backends listed above.
//! - **`cloudflare`** — Enable only the Cloudflare backend.
//! - **`namecheap`** — Enable only the Namecheap backend.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! infra-orchestrator-provider = { version = "0.1", features = ["all-backends"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use infra_orchestrator_provider::CloudflareProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cloudflare = CloudflareProvider::new(
//!         "your-api-token".to_string(),
//!         "your-account-id".to_string(),
//!     );
//!
//!     let zones = cloudflare.list_zones(None, 1, 50).await?;
//!     for zone in &zones {
//!         println!("{} ({})", zone.name, zone.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Remote
//! API failures, missing records, and refused writes surface as structured
//! variants rather than raw response bodies:
//!
//! - [`ProviderError::RemoteApi`] — the backend reported an error
//! - [`ProviderError::NotFound`] — the targeted record does not exist
//! - [`ProviderError::InvariantViolation`] — a write was refused to protect data
//! - [`ProviderError::MalformedInput`] — caller input rejected before any call
//!
//! Use [`ProviderError::is_expected`] to pick a log level for a failure.

mod error;
mod providers;
mod traits;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export concrete backends (behind feature flags)
#[cfg(feature = "cloudflare")]
pub use providers::CloudflareProvider;
#[cfg(feature = "cloudflare")]
pub use providers::cloudflare::{
    CfDnsRecord, CfRecordType, D1Database, D1QueryResult, KvKey, KvNamespace,
    PagesProjectDetail, PagesProjectSummary, R2Bucket, RecordSpec, WorkerRoute, WorkerScript,
    ZoneDetail, ZoneSummary,
};

#[cfg(feature = "namecheap")]
pub use providers::NamecheapProvider;
#[cfg(feature = "namecheap")]
pub use providers::namecheap::{
    DeleteHostOutcome, DomainInfo, DomainSummary, HostRecord, HostRecordType, NameserverInfo,
    SetHostsOutcome,
};

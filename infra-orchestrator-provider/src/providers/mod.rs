//! Backend 实现模块

pub(crate) mod common;

#[cfg(feature = "cloudflare")]
pub mod cloudflare;

#[cfg(feature = "namecheap")]
pub mod namecheap;

#[cfg(feature = "cloudflare")]
pub use cloudflare::CloudflareProvider;

#[cfg(feature = "namecheap")]
pub use namecheap::NamecheapProvider;

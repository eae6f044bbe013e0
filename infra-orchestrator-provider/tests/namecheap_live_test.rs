//! Namecheap Backend 集成测试
//!
//! 运行方式:
//! ```bash
//! NAMECHEAP_API_USER=xxx NAMECHEAP_API_KEY=xxx TEST_DOMAIN=example.com \
//!     cargo test -p infra-orchestrator-provider --test namecheap_live_test -- --ignored --nocapture --test-threads=1
//! ```
//!
//! 注意: 调用方公网 IP 必须已加入 Namecheap API 白名单。

#![allow(clippy::unwrap_used)]

mod common;

use common::env_var;
use infra_orchestrator_provider::{HostRecord, HostRecordType, NamecheapProvider};

fn provider() -> NamecheapProvider {
    NamecheapProvider::new(env_var("NAMECHEAP_API_USER"), env_var("NAMECHEAP_API_KEY"), None)
}

#[tokio::test]
#[ignore]
async fn test_namecheap_list_domains() {
    skip_if_no_credentials!("NAMECHEAP_API_USER", "NAMECHEAP_API_KEY");

    let domains = require_ok!(provider().list_domains(1, 20).await, "list_domains 失败");
    assert!(!domains.is_empty(), "域名列表不应为空");
    println!("✓ list_domains 测试通过，共 {} 个域名", domains.len());
}

#[tokio::test]
#[ignore]
async fn test_namecheap_get_domain_info() {
    skip_if_no_credentials!("NAMECHEAP_API_USER", "NAMECHEAP_API_KEY", "TEST_DOMAIN");

    let info = require_ok!(
        provider().get_domain_info(&env_var("TEST_DOMAIN")).await,
        "get_domain_info 失败"
    );
    println!("✓ get_domain_info 测试通过: {:?}", info.domain);
}

#[tokio::test]
#[ignore]
async fn test_namecheap_get_dns_hosts() {
    skip_if_no_credentials!("NAMECHEAP_API_USER", "NAMECHEAP_API_KEY", "TEST_DOMAIN");

    let hosts = require_ok!(
        provider().get_dns_hosts(&env_var("TEST_DOMAIN")).await,
        "get_dns_hosts 失败"
    );
    println!("✓ get_dns_hosts 测试通过，共 {} 条记录", hosts.len());
}

/// 整组写入追加一条 TXT 测试记录再删除，验证现有记录不丢失。
#[tokio::test]
#[ignore]
async fn test_namecheap_set_then_delete_host() {
    skip_if_no_credentials!("NAMECHEAP_API_USER", "NAMECHEAP_API_KEY", "TEST_DOMAIN");

    let p = provider();
    let domain = env_var("TEST_DOMAIN");
    let before = require_ok!(p.get_dns_hosts(&domain).await, "get_dns_hosts 失败");

    // 1. 整组写入：现有集合加上一条测试记录
    let mut desired = before.clone();
    desired.push(HostRecord::new(
        "_test",
        HostRecordType::Txt,
        "integration-test",
        None,
        None,
    ));
    let outcome = require_ok!(p.set_hosts(&domain, &desired).await, "set_hosts 失败");
    assert_eq!(outcome.record_count, before.len() + 1);
    println!("  ✓ 写入成功，记录数 {}", outcome.record_count);

    // 2. 删除
    let outcome = require_ok!(
        p.delete_dns_host(&domain, "_test", "TXT").await,
        "delete_dns_host 失败"
    );
    assert_eq!(outcome.remaining_records, before.len());
    println!("✓ set/delete host 测试通过，剩余 {} 条记录", outcome.remaining_records);
}

#[tokio::test]
#[ignore]
async fn test_namecheap_get_nameservers() {
    skip_if_no_credentials!("NAMECHEAP_API_USER", "NAMECHEAP_API_KEY", "TEST_DOMAIN");

    let info = require_ok!(
        provider().get_nameservers(&env_var("TEST_DOMAIN")).await,
        "get_nameservers 失败"
    );
    println!(
        "✓ get_nameservers 测试通过: {} 条, 默认 DNS = {}",
        info.nameservers.len(),
        info.using_namecheap_dns
    );
}

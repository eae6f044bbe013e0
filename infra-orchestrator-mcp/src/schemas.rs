//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for all MCP tools.
//! All structs derive `Debug`, `Deserialize`, and `JsonSchema` as required by rmcp.

use schemars::JsonSchema;
use serde::Deserialize;

// ─── Cloudflare: zones ───

/// Parameters for `zones_list` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ZonesListParams {
    /// Filter zones by exact name.
    #[schemars(description = "Filter zones by exact name (e.g., example.com)")]
    pub name: Option<String>,

    /// Page number (1-indexed, default: 1).
    #[schemars(description = "Page number (1-indexed, default: 1)")]
    pub page: Option<u32>,

    /// Number of zones per page (default: 20, max: 50).
    #[schemars(description = "Number of zones per page (default: 20, max: 50)")]
    pub page_size: Option<u32>,
}

/// Parameters for `zones_get` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ZonesGetParams {
    /// The zone ID.
    #[schemars(description = "The zone ID")]
    pub zone_id: String,
}

// ─── Cloudflare: DNS records ───

/// Parameters for `dns_records_list` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DnsRecordsListParams {
    /// The zone ID to list records for.
    #[schemars(description = "The zone ID to list records for")]
    pub zone_id: String,

    /// Record type filter (A, AAAA, CNAME, TXT, MX, NS, SRV, CAA).
    #[schemars(description = "Record type filter (A, AAAA, CNAME, TXT, MX, NS, SRV, CAA)")]
    pub record_type: Option<String>,

    /// Filter records by exact name.
    #[schemars(description = "Filter records by exact name (e.g., www.example.com)")]
    pub name: Option<String>,

    /// Page number (1-indexed, default: 1).
    #[schemars(description = "Page number (1-indexed, default: 1)")]
    pub page: Option<u32>,

    /// Number of records per page (default: 100, max: 100).
    #[schemars(description = "Number of records per page (default: 100, max: 100)")]
    pub per_page: Option<u32>,
}

/// Parameters for `dns_records_create` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DnsRecordsCreateParams {
    /// The zone ID to create the record in.
    #[schemars(description = "The zone ID to create the record in")]
    pub zone_id: String,

    /// Record type (A, AAAA, CNAME, TXT, MX, NS, SRV, CAA).
    #[schemars(description = "Record type (A, AAAA, CNAME, TXT, MX, NS, SRV, CAA)")]
    pub record_type: String,

    /// Record name (e.g., www.example.com, or @ for the zone apex).
    #[schemars(description = "Record name (e.g., www.example.com, or @ for the zone apex)")]
    pub name: String,

    /// Record content (IP address, hostname, or text value).
    #[schemars(description = "Record content (IP address, hostname, or text value)")]
    pub content: String,

    /// Time to live in seconds (default: 1 = automatic).
    #[schemars(description = "Time to live in seconds (default: 1 = automatic)")]
    pub ttl: Option<u32>,

    /// Proxy through Cloudflare (A, AAAA, CNAME only).
    #[schemars(description = "Proxy through Cloudflare (A, AAAA, CNAME records only)")]
    pub proxied: Option<bool>,

    /// Record priority (MX, SRV only).
    #[schemars(description = "Record priority (MX and SRV records only)")]
    pub priority: Option<u16>,
}

/// Parameters for `dns_records_update` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DnsRecordsUpdateParams {
    /// The zone ID containing the record.
    #[schemars(description = "The zone ID containing the record")]
    pub zone_id: String,

    /// The record ID to update.
    #[schemars(description = "The record ID to update")]
    pub record_id: String,

    /// Record type (A, AAAA, CNAME, TXT, MX, NS, SRV, CAA).
    #[schemars(description = "Record type (A, AAAA, CNAME, TXT, MX, NS, SRV, CAA)")]
    pub record_type: String,

    /// Record name.
    #[schemars(description = "Record name (e.g., www.example.com)")]
    pub name: String,

    /// Record content.
    #[schemars(description = "Record content (IP address, hostname, or text value)")]
    pub content: String,

    /// Time to live in seconds (default: 1 = automatic).
    #[schemars(description = "Time to live in seconds (default: 1 = automatic)")]
    pub ttl: Option<u32>,

    /// Proxy through Cloudflare (A, AAAA, CNAME only).
    #[schemars(description = "Proxy through Cloudflare (A, AAAA, CNAME records only)")]
    pub proxied: Option<bool>,

    /// Record priority (MX, SRV only).
    #[schemars(description = "Record priority (MX and SRV records only)")]
    pub priority: Option<u16>,
}

/// Parameters for `dns_records_delete` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DnsRecordsDeleteParams {
    /// The zone ID containing the record.
    #[schemars(description = "The zone ID containing the record")]
    pub zone_id: String,

    /// The record ID to delete.
    #[schemars(description = "The record ID to delete")]
    pub record_id: String,
}

// ─── Cloudflare: Workers ───

/// Parameters for `workers_list` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkersListParams {}

/// Parameters for `workers_get` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkersGetParams {
    /// The Worker script name.
    #[schemars(description = "The Worker script name")]
    pub script_name: String,
}

/// Parameters for `workers_put` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkersPutParams {
    /// The Worker script name.
    #[schemars(description = "The Worker script name")]
    pub script_name: String,

    /// The JavaScript source of the Worker.
    #[schemars(description = "The JavaScript source of the Worker")]
    pub script: String,
}

/// Parameters for `workers_delete` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkersDeleteParams {
    /// The Worker script name to delete.
    #[schemars(description = "The Worker script name to delete")]
    pub script_name: String,
}

/// Parameters for `worker_routes_list` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkerRoutesListParams {
    /// The zone ID to list routes for.
    #[schemars(description = "The zone ID to list routes for")]
    pub zone_id: String,
}

/// Parameters for `worker_route_create` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkerRouteCreateParams {
    /// The zone ID to create the route in.
    #[schemars(description = "The zone ID to create the route in")]
    pub zone_id: String,

    /// Route pattern (e.g., example.com/api/*).
    #[schemars(description = "Route pattern (e.g., example.com/api/*)")]
    pub pattern: String,

    /// The Worker script to run on the route.
    #[schemars(description = "The Worker script to run on the route")]
    pub script_name: String,
}

/// Parameters for `worker_route_delete` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WorkerRouteDeleteParams {
    /// The zone ID containing the route.
    #[schemars(description = "The zone ID containing the route")]
    pub zone_id: String,

    /// The route ID to delete.
    #[schemars(description = "The route ID to delete")]
    pub route_id: String,
}

// ─── Cloudflare: KV / R2 / D1 ───

/// Parameters for `kv_namespaces_list` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct KvNamespacesListParams {
    /// Page number (1-indexed, default: 1).
    #[schemars(description = "Page number (1-indexed, default: 1)")]
    pub page: Option<u32>,

    /// Number of namespaces per page (default: 100).
    #[schemars(description = "Number of namespaces per page (default: 100)")]
    pub per_page: Option<u32>,
}

/// Parameters for `kv_namespace_create` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct KvNamespaceCreateParams {
    /// The namespace title.
    #[schemars(description = "The namespace title")]
    pub title: String,
}

/// Parameters for `kv_keys_list` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct KvKeysListParams {
    /// The KV namespace ID.
    #[schemars(description = "The KV namespace ID")]
    pub namespace_id: String,

    /// Only list keys starting with this prefix.
    #[schemars(description = "Only list keys starting with this prefix")]
    pub prefix: Option<String>,

    /// Maximum number of keys to return (default: 1000).
    #[schemars(description = "Maximum number of keys to return (default: 1000)")]
    pub limit: Option<u32>,
}

/// Parameters for `kv_get` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct KvGetParams {
    /// The KV namespace ID.
    #[schemars(description = "The KV namespace ID")]
    pub namespace_id: String,

    /// The key to read.
    #[schemars(description = "The key to read")]
    pub key: String,
}

/// Parameters for `kv_put` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct KvPutParams {
    /// The KV namespace ID.
    #[schemars(description = "The KV namespace ID")]
    pub namespace_id: String,

    /// The key to write.
    #[schemars(description = "The key to write")]
    pub key: String,

    /// The value to store.
    #[schemars(description = "The value to store")]
    pub value: String,

    /// Expire the key after this many seconds.
    #[schemars(description = "Expire the key after this many seconds")]
    pub expiration_ttl: Option<u64>,
}

/// Parameters for `kv_delete` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct KvDeleteParams {
    /// The KV namespace ID.
    #[schemars(description = "The KV namespace ID")]
    pub namespace_id: String,

    /// The key to delete.
    #[schemars(description = "The key to delete")]
    pub key: String,
}

/// Parameters for `r2_buckets_list` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct R2BucketsListParams {}

/// Parameters for `r2_bucket_create` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct R2BucketCreateParams {
    /// The bucket name.
    #[schemars(description = "The bucket name")]
    pub name: String,
}

/// Parameters for `r2_bucket_delete` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct R2BucketDeleteParams {
    /// The bucket name to delete. The bucket must be empty.
    #[schemars(description = "The bucket name to delete (the bucket must be empty)")]
    pub name: String,
}

/// Parameters for `d1_databases_list` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct D1DatabasesListParams {}

/// Parameters for `d1_database_create` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct D1DatabaseCreateParams {
    /// The database name.
    #[schemars(description = "The database name")]
    pub name: String,
}

/// Parameters for `d1_database_delete` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct D1DatabaseDeleteParams {
    /// The database ID to delete.
    #[schemars(description = "The database ID to delete")]
    pub database_id: String,
}

/// Parameters for `d1_query` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct D1QueryParams {
    /// The database ID to query.
    #[schemars(description = "The database ID to query")]
    pub database_id: String,

    /// SQL statement to execute.
    #[schemars(description = "SQL statement to execute (use ? placeholders for bound params)")]
    pub sql: String,

    /// Values bound to the SQL placeholders, in order.
    #[schemars(description = "Values bound to the SQL placeholders, in order")]
    pub params: Option<Vec<serde_json::Value>>,
}

// ─── Cloudflare: Pages ───

/// Parameters for `pages_projects_list` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PagesProjectsListParams {}

/// Parameters for `pages_project_get` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PagesProjectGetParams {
    /// The Pages project name.
    #[schemars(description = "The Pages project name")]
    pub project_name: String,
}

// ─── Namecheap ───

/// Parameters for `list_domains` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDomainsParams {
    /// Page number (1-indexed, default: 1).
    #[schemars(description = "Page number (1-indexed, default: 1)")]
    pub page: Option<u32>,

    /// Number of domains per page (default: 20, max: 100).
    #[schemars(description = "Number of domains per page (default: 20, max: 100)")]
    pub page_size: Option<u32>,
}

/// Parameters for `get_domain_info` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDomainInfoParams {
    /// The domain name (e.g., example.com).
    #[schemars(description = "The domain name (e.g., example.com)")]
    pub domain: String,
}

/// Parameters for `get_dns_hosts` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDnsHostsParams {
    /// The domain name to list host records for.
    #[schemars(description = "The domain name to list host records for")]
    pub domain: String,
}

/// One DNS host record in a `set_dns_host` record set.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DnsHostRecordParam {
    /// Host name (@ for the domain apex).
    #[schemars(description = "Host name (@ for the domain apex, www for a subdomain)")]
    pub name: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, URL, URL301, FRAME).
    #[schemars(description = "Record type (A, AAAA, CNAME, MX, TXT, URL, URL301, FRAME)")]
    pub record_type: String,

    /// Record value (IP address, hostname, or text).
    #[schemars(description = "Record value (IP address, hostname, or text)")]
    pub address: String,

    /// Time to live in seconds (default: 1800).
    #[schemars(description = "Time to live in seconds (default: 1800)")]
    pub ttl: Option<u32>,

    /// MX priority (MX records only, default: 10).
    #[schemars(description = "MX priority (MX records only, default: 10)")]
    pub mx_pref: Option<u32>,
}

/// Parameters for `set_dns_host` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetDnsHostParams {
    /// The domain name.
    #[schemars(description = "The domain name (e.g., example.com)")]
    pub domain: String,

    /// The complete desired record set. Replaces ALL existing records.
    #[schemars(
        description = "The complete desired record set. Replaces ALL existing records, so include existing records you want to keep."
    )]
    pub records: Vec<DnsHostRecordParam>,
}

/// Parameters for `delete_dns_host` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteDnsHostParams {
    /// The domain name.
    #[schemars(description = "The domain name (e.g., example.com)")]
    pub domain: String,

    /// Host name of the record to delete.
    #[schemars(description = "Host name of the record to delete (@ for the domain apex)")]
    pub name: String,

    /// Record type of the record to delete.
    #[schemars(description = "Record type of the record to delete (A, AAAA, CNAME, MX, TXT, URL, URL301, FRAME)")]
    pub record_type: String,
}

/// Parameters for `get_nameservers` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetNameserversParams {
    /// The domain name to read nameservers for.
    #[schemars(description = "The domain name to read nameservers for")]
    pub domain: String,
}

/// Parameters for `set_nameservers` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetNameserversParams {
    /// The domain name.
    #[schemars(description = "The domain name (e.g., example.com)")]
    pub domain: String,

    /// Custom nameservers to set (2 to 5 entries).
    #[schemars(description = "Custom nameservers to set (2 to 5 entries)")]
    pub nameservers: Vec<String>,
}

/// Parameters for `set_default_nameservers` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetDefaultNameserversParams {
    /// The domain name to switch back to Namecheap default DNS.
    #[schemars(description = "The domain name to switch back to Namecheap default DNS")]
    pub domain: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use schemars::schema_for;

    #[test]
    fn zones_list_all_fields_optional() {
        let params: ZonesListParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.name.is_none());
        assert!(params.page.is_none());
        assert!(params.page_size.is_none());
    }

    #[test]
    fn dns_records_create_requires_core_fields() {
        let json = serde_json::json!({
            "zone_id": "abc123",
            "record_type": "A",
            "name": "www.example.com"
        });
        let result: serde_json::Result<DnsRecordsCreateParams> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn dns_records_create_optional_fields_default_to_none() {
        let json = serde_json::json!({
            "zone_id": "abc123",
            "record_type": "A",
            "name": "www.example.com",
            "content": "1.2.3.4"
        });
        let params: DnsRecordsCreateParams = serde_json::from_value(json).unwrap();
        assert!(params.ttl.is_none());
        assert!(params.proxied.is_none());
        assert!(params.priority.is_none());
    }

    #[test]
    fn d1_query_params_accept_mixed_value_types() {
        let json = serde_json::json!({
            "database_id": "db-1",
            "sql": "SELECT * FROM users WHERE id = ? AND active = ?",
            "params": [42, true]
        });
        let params: D1QueryParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.params.unwrap().len(), 2);
    }

    #[test]
    fn set_dns_host_accepts_record_set() {
        let json = serde_json::json!({
            "domain": "example.com",
            "records": [
                { "name": "@", "record_type": "A", "address": "1.2.3.4" },
                { "name": "@", "record_type": "MX", "address": "mx1.example.com", "mx_pref": 10 }
            ]
        });
        let params: SetDnsHostParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.records.len(), 2);
        assert!(params.records[0].ttl.is_none());
        assert_eq!(params.records[1].mx_pref, Some(10));
    }

    #[test]
    fn set_dns_host_record_missing_address_fails() {
        let json = serde_json::json!({
            "domain": "example.com",
            "records": [{ "name": "@", "record_type": "A" }]
        });
        let result: serde_json::Result<SetDnsHostParams> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn set_nameservers_requires_list() {
        let json = serde_json::json!({ "domain": "example.com" });
        let result: serde_json::Result<SetNameserversParams> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn schema_marks_required_fields_for_host_records() {
        let schema = schema_for!(DnsHostRecordParam);
        let json = serde_json::to_value(&schema).unwrap();
        let required = json
            .get("required")
            .and_then(serde_json::Value::as_array)
            .unwrap();

        assert!(required.iter().any(|v| v == "name"));
        assert!(required.iter().any(|v| v == "record_type"));
        assert!(required.iter().any(|v| v == "address"));
        assert!(!required.iter().any(|v| v == "ttl"));
        assert!(!required.iter().any(|v| v == "mx_pref"));

        let schema = schema_for!(SetDnsHostParams);
        let json = serde_json::to_value(&schema).unwrap();
        let required = json
            .get("required")
            .and_then(serde_json::Value::as_array)
            .unwrap();
        assert!(required.iter().any(|v| v == "domain"));
        assert!(required.iter().any(|v| v == "records"));
    }

    #[test]
    fn kv_namespace_create_requires_title() {
        let result: serde_json::Result<KvNamespaceCreateParams> =
            serde_json::from_value(serde_json::json!({}));
        assert!(result.is_err());

        let params: KvNamespaceCreateParams =
            serde_json::from_value(serde_json::json!({ "title": "cache" })).unwrap();
        assert_eq!(params.title, "cache");
    }

    #[test]
    fn kv_list_pagination_fields_are_optional() {
        let params: KvNamespacesListParams =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.page.is_none());
        assert!(params.per_page.is_none());

        let params: KvKeysListParams =
            serde_json::from_value(serde_json::json!({ "namespace_id": "ns-1", "limit": 50 }))
                .unwrap();
        assert_eq!(params.limit, Some(50));
    }

    #[test]
    fn workers_list_accepts_empty_object() {
        let params: WorkersListParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let _ = params;
    }
}

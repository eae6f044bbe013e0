//! MCP Server implementation for Infra Orchestrator.
//!
//! Exposes Cloudflare (zones, DNS records, Workers, KV, R2, D1) and
//! Namecheap (domains, host records, nameservers) tools for AI agents.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};

use infra_orchestrator_provider::{
    CfRecordType, CloudflareProvider, HostRecord, HostRecordType, NamecheapProvider,
    ProviderError, RecordSpec,
};

use crate::schemas::{
    D1DatabaseCreateParams, D1DatabaseDeleteParams, D1DatabasesListParams, D1QueryParams,
    DeleteDnsHostParams, DnsHostRecordParam, DnsRecordsCreateParams, DnsRecordsDeleteParams,
    DnsRecordsListParams, DnsRecordsUpdateParams, GetDnsHostsParams, GetDomainInfoParams,
    GetNameserversParams, KvDeleteParams, KvGetParams, KvKeysListParams,
    KvNamespaceCreateParams, KvNamespacesListParams, KvPutParams, ListDomainsParams,
    PagesProjectGetParams, PagesProjectsListParams, R2BucketCreateParams, R2BucketDeleteParams,
    R2BucketsListParams, SetDefaultNameserversParams, SetDnsHostParams, SetNameserversParams,
    WorkerRouteCreateParams, WorkerRouteDeleteParams, WorkerRoutesListParams,
    WorkersDeleteParams, WorkersGetParams, WorkersListParams, WorkersPutParams, ZonesGetParams,
    ZonesListParams,
};

const DEFAULT_PAGE_SIZE: u32 = 20;
const KV_KEYS_LIMIT: u32 = 1000;

/// Uniform error payload. Backend failures are reported as tool output,
/// never as protocol-level errors.
fn error_body(error: &ProviderError) -> serde_json::Value {
    serde_json::json!({ "error": error.to_string() })
}

/// Confirmation payload for write operations whose backend reports an
/// explicit success marker.
fn confirmation(confirmed: bool, action: &str) -> serde_json::Value {
    let message = if confirmed {
        format!("{action} confirmed")
    } else {
        format!("{action} submitted, but the backend did not confirm it")
    };
    serde_json::json!({ "success": confirmed, "message": message })
}

fn json_content(value: &serde_json::Value) -> CallToolResult {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(json)])
}

fn error_payload(tool_name: &str, error: &ProviderError) -> CallToolResult {
    if error.is_expected() {
        tracing::warn!("{tool_name}: {error}");
    } else {
        tracing::error!("{tool_name}: {error}");
    }
    json_content(&error_body(error))
}

/// Serialize a successful result, or fold a backend failure into the
/// uniform error payload.
fn render<T: serde::Serialize>(
    tool_name: &str,
    result: Result<T, ProviderError>,
) -> CallToolResult {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(json) => CallToolResult::success(vec![Content::text(json)]),
            Err(e) => {
                tracing::error!("{tool_name}: failed to serialize result: {e}");
                json_content(&serde_json::json!({
                    "error": format!("Failed to serialize result: {e}")
                }))
            }
        },
        Err(e) => error_payload(tool_name, &e),
    }
}

/// Like [`render`] but for raw text payloads (Worker sources, KV values).
fn render_text(tool_name: &str, result: Result<String, ProviderError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_payload(tool_name, &e),
    }
}

/// Validate and convert caller-supplied host records, applying TTL and
/// MX preference defaults.
fn host_records_from_params(
    entries: &[DnsHostRecordParam],
) -> Result<Vec<HostRecord>, ProviderError> {
    entries
        .iter()
        .map(|entry| {
            let record_type = HostRecordType::parse(&entry.record_type)?;
            Ok(HostRecord::new(
                &entry.name,
                record_type,
                &entry.address,
                entry.ttl,
                entry.mx_pref,
            ))
        })
        .collect()
}

/// Acknowledge a write whose backend returns no payload on success.
fn render_ack(
    tool_name: &str,
    result: Result<(), ProviderError>,
    message: &str,
) -> CallToolResult {
    match result {
        Ok(()) => json_content(&serde_json::json!({ "success": true, "message": message })),
        Err(e) => error_payload(tool_name, &e),
    }
}

/// MCP Server for Infra Orchestrator.
///
/// Provides AI agents with access to Cloudflare and Namecheap management
/// through the Model Context Protocol.
#[derive(Clone)]
pub struct InfraOrchestratorMcp {
    /// Cloudflare backend client.
    cloudflare: Arc<CloudflareProvider>,
    /// Namecheap backend client.
    namecheap: Arc<NamecheapProvider>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl InfraOrchestratorMcp {
    /// Create a new MCP server instance.
    #[must_use]
    pub fn new(cloudflare: Arc<CloudflareProvider>, namecheap: Arc<NamecheapProvider>) -> Self {
        Self {
            cloudflare,
            namecheap,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl InfraOrchestratorMcp {
    // ─── Cloudflare: zones ───

    /// List Cloudflare zones.
    #[tool(description = "List Cloudflare zones, optionally filtered by exact name")]
    async fn zones_list(
        &self,
        Parameters(params): Parameters<ZonesListParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .list_zones(
                params.name.as_deref(),
                params.page.unwrap_or(1),
                params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            )
            .await;
        Ok(render("zones_list", result))
    }

    /// Get full details for one zone.
    #[tool(description = "Get full details for a Cloudflare zone by ID")]
    async fn zones_get(
        &self,
        Parameters(params): Parameters<ZonesGetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render("zones_get", self.cloudflare.get_zone(&params.zone_id).await))
    }

    // ─── Cloudflare: DNS records ───

    /// List DNS records in a zone.
    #[tool(description = "List DNS records in a Cloudflare zone with type and name filters")]
    async fn dns_records_list(
        &self,
        Parameters(params): Parameters<DnsRecordsListParams>,
    ) -> Result<CallToolResult, McpError> {
        // Unknown type filters are ignored rather than rejected
        let record_type = params
            .record_type
            .as_deref()
            .and_then(|t| CfRecordType::parse(t).ok());

        let result = self
            .cloudflare
            .list_records(
                &params.zone_id,
                record_type,
                params.name.as_deref(),
                params.page.unwrap_or(1),
                params.per_page.unwrap_or(100),
            )
            .await;
        Ok(render("dns_records_list", result))
    }

    /// Create a DNS record.
    #[tool(
        description = "Create a DNS record in a Cloudflare zone (proxied applies to A/AAAA/CNAME only, priority to MX/SRV only)"
    )]
    async fn dns_records_create(
        &self,
        Parameters(params): Parameters<DnsRecordsCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        let record_type = match CfRecordType::parse(&params.record_type) {
            Ok(t) => t,
            Err(e) => return Ok(error_payload("dns_records_create", &e)),
        };

        let spec = RecordSpec {
            record_type,
            name: params.name,
            content: params.content,
            ttl: params.ttl,
            proxied: params.proxied,
            priority: params.priority,
        };
        let result = self.cloudflare.create_record(&params.zone_id, &spec).await;
        Ok(render("dns_records_create", result))
    }

    /// Update an existing DNS record.
    #[tool(description = "Update an existing DNS record in a Cloudflare zone")]
    async fn dns_records_update(
        &self,
        Parameters(params): Parameters<DnsRecordsUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        let record_type = match CfRecordType::parse(&params.record_type) {
            Ok(t) => t,
            Err(e) => return Ok(error_payload("dns_records_update", &e)),
        };

        let spec = RecordSpec {
            record_type,
            name: params.name,
            content: params.content,
            ttl: params.ttl,
            proxied: params.proxied,
            priority: params.priority,
        };
        let result = self
            .cloudflare
            .update_record(&params.zone_id, &params.record_id, &spec)
            .await;
        Ok(render("dns_records_update", result))
    }

    /// Delete a DNS record.
    #[tool(description = "Delete a DNS record from a Cloudflare zone by record ID")]
    async fn dns_records_delete(
        &self,
        Parameters(params): Parameters<DnsRecordsDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .delete_record(&params.zone_id, &params.record_id)
            .await;
        Ok(render_ack("dns_records_delete", result, "DNS record deleted"))
    }

    // ─── Cloudflare: Workers ───

    /// List Worker scripts.
    #[tool(description = "List all Cloudflare Worker scripts in the account")]
    async fn workers_list(
        &self,
        _params: Parameters<WorkersListParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render("workers_list", self.cloudflare.list_scripts().await))
    }

    /// Get a Worker script's source.
    #[tool(description = "Get the JavaScript source of a Cloudflare Worker script")]
    async fn workers_get(
        &self,
        Parameters(params): Parameters<WorkersGetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render_text(
            "workers_get",
            self.cloudflare.get_script(&params.script_name).await,
        ))
    }

    /// Deploy a Worker script.
    #[tool(description = "Create or update a Cloudflare Worker script from JavaScript source")]
    async fn workers_put(
        &self,
        Parameters(params): Parameters<WorkersPutParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .put_script(&params.script_name, params.script)
            .await;
        Ok(render("workers_put", result))
    }

    /// Delete a Worker script.
    #[tool(description = "Delete a Cloudflare Worker script")]
    async fn workers_delete(
        &self,
        Parameters(params): Parameters<WorkersDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.cloudflare.delete_script(&params.script_name).await;
        Ok(render_ack("workers_delete", result, "Worker script deleted"))
    }

    /// List Worker routes in a zone.
    #[tool(description = "List Cloudflare Worker routes in a zone")]
    async fn worker_routes_list(
        &self,
        Parameters(params): Parameters<WorkerRoutesListParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "worker_routes_list",
            self.cloudflare.list_routes(&params.zone_id).await,
        ))
    }

    /// Create a Worker route.
    #[tool(description = "Create a Cloudflare Worker route binding a URL pattern to a script")]
    async fn worker_route_create(
        &self,
        Parameters(params): Parameters<WorkerRouteCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .create_route(&params.zone_id, &params.pattern, &params.script_name)
            .await;
        Ok(render("worker_route_create", result))
    }

    /// Delete a Worker route.
    #[tool(description = "Delete a Cloudflare Worker route by ID")]
    async fn worker_route_delete(
        &self,
        Parameters(params): Parameters<WorkerRouteDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .delete_route(&params.zone_id, &params.route_id)
            .await;
        Ok(render_ack("worker_route_delete", result, "Worker route deleted"))
    }

    // ─── Cloudflare: KV ───

    /// List KV namespaces.
    #[tool(description = "List Cloudflare Workers KV namespaces in the account")]
    async fn kv_namespaces_list(
        &self,
        Parameters(params): Parameters<KvNamespacesListParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .list_kv_namespaces(params.page.unwrap_or(1), params.per_page.unwrap_or(100))
            .await;
        Ok(render("kv_namespaces_list", result))
    }

    /// Create a KV namespace.
    #[tool(description = "Create a Cloudflare Workers KV namespace")]
    async fn kv_namespace_create(
        &self,
        Parameters(params): Parameters<KvNamespaceCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "kv_namespace_create",
            self.cloudflare.create_kv_namespace(&params.title).await,
        ))
    }

    /// List keys in a KV namespace.
    #[tool(description = "List keys in a Cloudflare KV namespace, optionally filtered by prefix")]
    async fn kv_keys_list(
        &self,
        Parameters(params): Parameters<KvKeysListParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .list_kv_keys(
                &params.namespace_id,
                params.prefix.as_deref(),
                params.limit.unwrap_or(KV_KEYS_LIMIT),
            )
            .await;
        Ok(render("kv_keys_list", result))
    }

    /// Read a KV value.
    #[tool(description = "Read the value stored under a key in a Cloudflare KV namespace")]
    async fn kv_get(
        &self,
        Parameters(params): Parameters<KvGetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render_text(
            "kv_get",
            self.cloudflare
                .get_kv_value(&params.namespace_id, &params.key)
                .await,
        ))
    }

    /// Write a KV value.
    #[tool(description = "Store a value under a key in a Cloudflare KV namespace, with optional expiration")]
    async fn kv_put(
        &self,
        Parameters(params): Parameters<KvPutParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .put_kv_value(
                &params.namespace_id,
                &params.key,
                params.value,
                params.expiration_ttl,
            )
            .await;
        Ok(render_ack("kv_put", result, "KV value stored"))
    }

    /// Delete a KV value.
    #[tool(description = "Delete a key from a Cloudflare KV namespace")]
    async fn kv_delete(
        &self,
        Parameters(params): Parameters<KvDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .cloudflare
            .delete_kv_value(&params.namespace_id, &params.key)
            .await;
        Ok(render_ack("kv_delete", result, "KV key deleted"))
    }

    // ─── Cloudflare: R2 ───

    /// List R2 buckets.
    #[tool(description = "List Cloudflare R2 buckets in the account")]
    async fn r2_buckets_list(
        &self,
        _params: Parameters<R2BucketsListParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render("r2_buckets_list", self.cloudflare.list_r2_buckets().await))
    }

    /// Create an R2 bucket.
    #[tool(description = "Create a Cloudflare R2 bucket")]
    async fn r2_bucket_create(
        &self,
        Parameters(params): Parameters<R2BucketCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "r2_bucket_create",
            self.cloudflare.create_r2_bucket(&params.name).await,
        ))
    }

    /// Delete an R2 bucket.
    #[tool(description = "Delete an empty Cloudflare R2 bucket")]
    async fn r2_bucket_delete(
        &self,
        Parameters(params): Parameters<R2BucketDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.cloudflare.delete_r2_bucket(&params.name).await;
        Ok(render_ack("r2_bucket_delete", result, "R2 bucket deleted"))
    }

    // ─── Cloudflare: D1 ───

    /// List D1 databases.
    #[tool(description = "List Cloudflare D1 databases in the account")]
    async fn d1_databases_list(
        &self,
        _params: Parameters<D1DatabasesListParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "d1_databases_list",
            self.cloudflare.list_d1_databases().await,
        ))
    }

    /// Create a D1 database.
    #[tool(description = "Create a Cloudflare D1 database")]
    async fn d1_database_create(
        &self,
        Parameters(params): Parameters<D1DatabaseCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "d1_database_create",
            self.cloudflare.create_d1_database(&params.name).await,
        ))
    }

    /// Delete a D1 database.
    #[tool(description = "Delete a Cloudflare D1 database by ID")]
    async fn d1_database_delete(
        &self,
        Parameters(params): Parameters<D1DatabaseDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.cloudflare.delete_d1_database(&params.database_id).await;
        Ok(render_ack("d1_database_delete", result, "D1 database deleted"))
    }

    /// Run SQL against a D1 database.
    #[tool(description = "Execute a SQL statement against a Cloudflare D1 database with optional bound params")]
    async fn d1_query(
        &self,
        Parameters(params): Parameters<D1QueryParams>,
    ) -> Result<CallToolResult, McpError> {
        let bound = params.params.unwrap_or_default();
        let result = self
            .cloudflare
            .d1_query(&params.database_id, &params.sql, &bound)
            .await;
        Ok(render("d1_query", result))
    }

    // ─── Cloudflare: Pages ───

    /// List Pages projects.
    #[tool(description = "List Cloudflare Pages projects in the account")]
    async fn pages_projects_list(
        &self,
        _params: Parameters<PagesProjectsListParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "pages_projects_list",
            self.cloudflare.list_pages_projects().await,
        ))
    }

    /// Get full details for one Pages project.
    #[tool(description = "Get full details for a Cloudflare Pages project by name")]
    async fn pages_project_get(
        &self,
        Parameters(params): Parameters<PagesProjectGetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "pages_project_get",
            self.cloudflare.get_pages_project(&params.project_name).await,
        ))
    }

    // ─── Namecheap: domains ───

    /// List domains in the Namecheap account.
    #[tool(description = "List domains in the Namecheap account with pagination")]
    async fn list_domains(
        &self,
        Parameters(params): Parameters<ListDomainsParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .namecheap
            .list_domains(
                params.page.unwrap_or(1),
                params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            )
            .await;
        Ok(render("list_domains", result))
    }

    /// Get details for one domain.
    #[tool(description = "Get registration details for a Namecheap domain (status, dates, nameservers)")]
    async fn get_domain_info(
        &self,
        Parameters(params): Parameters<GetDomainInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "get_domain_info",
            self.namecheap.get_domain_info(&params.domain).await,
        ))
    }

    // ─── Namecheap: DNS hosts ───

    /// List DNS host records for a domain.
    #[tool(description = "List all DNS host records for a Namecheap domain")]
    async fn get_dns_hosts(
        &self,
        Parameters(params): Parameters<GetDnsHostsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "get_dns_hosts",
            self.namecheap.get_dns_hosts(&params.domain).await,
        ))
    }

    /// Replace the full DNS host record set.
    #[tool(
        description = "Set the DNS host records for a Namecheap domain. Replaces ALL existing records with the supplied set, so include existing records you want to keep."
    )]
    async fn set_dns_host(
        &self,
        Parameters(params): Parameters<SetDnsHostParams>,
    ) -> Result<CallToolResult, McpError> {
        let records = match host_records_from_params(&params.records) {
            Ok(records) => records,
            Err(e) => return Ok(error_payload("set_dns_host", &e)),
        };

        let result = self.namecheap.set_hosts(&params.domain, &records).await;

        match result {
            Ok(outcome) => {
                let mut body = confirmation(outcome.confirmed, "Host record write");
                body["recordCount"] = outcome.record_count.into();
                Ok(json_content(&body))
            }
            Err(e) => Ok(error_payload("set_dns_host", &e)),
        }
    }

    /// Delete one DNS host record.
    #[tool(
        description = "Delete a DNS host record from a Namecheap domain by name and type. Refuses to delete the last remaining record."
    )]
    async fn delete_dns_host(
        &self,
        Parameters(params): Parameters<DeleteDnsHostParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .namecheap
            .delete_dns_host(&params.domain, &params.name, &params.record_type)
            .await;

        match result {
            Ok(outcome) => {
                let mut body = confirmation(outcome.confirmed, "Host record delete");
                body["remainingRecords"] = outcome.remaining_records.into();
                Ok(json_content(&body))
            }
            Err(e) => Ok(error_payload("delete_dns_host", &e)),
        }
    }

    // ─── Namecheap: nameservers ───

    /// Read the nameserver list for a domain.
    #[tool(description = "Get the nameservers for a Namecheap domain")]
    async fn get_nameservers(
        &self,
        Parameters(params): Parameters<GetNameserversParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(render(
            "get_nameservers",
            self.namecheap.get_nameservers(&params.domain).await,
        ))
    }

    /// Replace the nameserver list with custom entries.
    #[tool(description = "Set custom nameservers for a Namecheap domain (2 to 5 entries, replaces the whole list)")]
    async fn set_nameservers(
        &self,
        Parameters(params): Parameters<SetNameserversParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self
            .namecheap
            .set_nameservers(&params.domain, &params.nameservers)
            .await;
        match result {
            Ok(confirmed) => Ok(json_content(&confirmation(confirmed, "Nameserver update"))),
            Err(e) => Ok(error_payload("set_nameservers", &e)),
        }
    }

    /// Switch a domain back to Namecheap default DNS.
    #[tool(description = "Switch a Namecheap domain back to Namecheap default DNS")]
    async fn set_default_nameservers(
        &self,
        Parameters(params): Parameters<SetDefaultNameserversParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.namecheap.set_default_nameservers(&params.domain).await;
        match result {
            Ok(confirmed) => Ok(json_content(&confirmation(
                confirmed,
                "Switch to default DNS",
            ))),
            Err(e) => Ok(error_payload("set_default_nameservers", &e)),
        }
    }
}

#[tool_handler]
impl ServerHandler for InfraOrchestratorMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Infra Orchestrator MCP Server - Manage Cloudflare and Namecheap resources. \
                 Cloudflare tools cover zones (zones_list, zones_get), DNS records \
                 (dns_records_*), Worker scripts and routes (workers_*, worker_route*), \
                 KV storage (kv_*), R2 buckets (r2_*), D1 databases (d1_*), and \
                 Pages projects (pages_*). \
                 Namecheap tools cover account domains (list_domains, get_domain_info), \
                 DNS host records (get_dns_hosts, set_dns_host, delete_dns_host), and \
                 nameservers (get_nameservers, set_nameservers, set_default_nameservers). \
                 Backend failures are returned as an {\"error\": ...} JSON payload."
                    .into(),
            ),
        }
    }
}

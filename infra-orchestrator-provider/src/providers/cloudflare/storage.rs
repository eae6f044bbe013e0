//! KV / R2 / D1 存储操作

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{CloudflareProvider, D1Database, D1QueryResult, KvKey, KvNamespace, R2Bucket};

impl CloudflareProvider {
    // ============ KV ============

    /// 获取账户下全部 KV namespace（分页）
    pub async fn list_kv_namespaces(&self, page: u32, per_page: u32) -> Result<Vec<KvNamespace>> {
        self.get(&format!(
            "/accounts/{}/storage/kv/namespaces?page={}&per_page={}",
            self.account_id,
            page.max(1),
            per_page
        ))
        .await
    }

    /// 创建 KV namespace
    pub async fn create_kv_namespace(&self, title: &str) -> Result<KvNamespace> {
        #[derive(Serialize)]
        struct CreateNamespaceBody<'a> {
            title: &'a str,
        }

        self.post(
            &format!("/accounts/{}/storage/kv/namespaces", self.account_id),
            &CreateNamespaceBody { title },
        )
        .await
    }

    /// 获取 namespace 下的 key 列表（可选前缀过滤）
    pub async fn list_kv_keys(
        &self,
        namespace_id: &str,
        prefix: Option<&str>,
        limit: u32,
    ) -> Result<Vec<KvKey>> {
        let mut path = format!(
            "/accounts/{}/storage/kv/namespaces/{}/keys?limit={}",
            self.account_id, namespace_id, limit
        );
        if let Some(prefix) = prefix
            && !prefix.is_empty()
        {
            path.push_str(&format!("&prefix={}", urlencoding::encode(prefix)));
        }
        self.get(&path).await
    }

    /// 读取 KV 值（原始 payload 调用）
    pub async fn get_kv_value(&self, namespace_id: &str, key: &str) -> Result<String> {
        let payload = self
            .get_raw(&format!(
                "/accounts/{}/storage/kv/namespaces/{}/values/{}",
                self.account_id,
                namespace_id,
                urlencoding::encode(key)
            ))
            .await?;
        Ok(payload.into_text())
    }

    /// 写入 KV 值（原始请求体，可选过期 TTL）
    pub async fn put_kv_value(
        &self,
        namespace_id: &str,
        key: &str,
        value: String,
        expiration_ttl: Option<u64>,
    ) -> Result<()> {
        let mut path = format!(
            "/accounts/{}/storage/kv/namespaces/{}/values/{}",
            self.account_id,
            namespace_id,
            urlencoding::encode(key)
        );
        if let Some(ttl) = expiration_ttl {
            path.push_str(&format!("?expiration_ttl={ttl}"));
        }
        self.put_raw(&path, value, "text/plain").await?;
        Ok(())
    }

    /// 删除 KV 值
    pub async fn delete_kv_value(&self, namespace_id: &str, key: &str) -> Result<()> {
        self.delete(&format!(
            "/accounts/{}/storage/kv/namespaces/{}/values/{}",
            self.account_id,
            namespace_id,
            urlencoding::encode(key)
        ))
        .await
    }

    // ============ R2 ============

    /// 获取账户下全部 R2 bucket
    pub async fn list_r2_buckets(&self) -> Result<Vec<R2Bucket>> {
        // R2 list 接口把列表包在 result.buckets 里
        #[derive(Deserialize)]
        struct BucketList {
            #[serde(default)]
            buckets: Vec<R2Bucket>,
        }

        let list: BucketList = self
            .get(&format!("/accounts/{}/r2/buckets", self.account_id))
            .await?;
        Ok(list.buckets)
    }

    /// 创建 R2 bucket
    pub async fn create_r2_bucket(&self, name: &str) -> Result<R2Bucket> {
        #[derive(Serialize)]
        struct CreateBucketBody<'a> {
            name: &'a str,
        }

        self.post(
            &format!("/accounts/{}/r2/buckets", self.account_id),
            &CreateBucketBody { name },
        )
        .await
    }

    /// 删除 R2 bucket（必须为空）
    pub async fn delete_r2_bucket(&self, name: &str) -> Result<()> {
        self.delete(&format!("/accounts/{}/r2/buckets/{}", self.account_id, name))
            .await
    }

    // ============ D1 ============

    /// 获取账户下全部 D1 数据库
    pub async fn list_d1_databases(&self) -> Result<Vec<D1Database>> {
        self.get(&format!("/accounts/{}/d1/database", self.account_id))
            .await
    }

    /// 创建 D1 数据库
    pub async fn create_d1_database(&self, name: &str) -> Result<D1Database> {
        #[derive(Serialize)]
        struct CreateDatabaseBody<'a> {
            name: &'a str,
        }

        self.post(
            &format!("/accounts/{}/d1/database", self.account_id),
            &CreateDatabaseBody { name },
        )
        .await
    }

    /// 删除 D1 数据库
    pub async fn delete_d1_database(&self, database_id: &str) -> Result<()> {
        self.delete(&format!(
            "/accounts/{}/d1/database/{}",
            self.account_id, database_id
        ))
        .await
    }

    /// 对 D1 数据库执行 SQL 查询（prepared statement 参数可选）
    pub async fn d1_query(
        &self,
        database_id: &str,
        sql: &str,
        params: &[serde_json::Value],
    ) -> Result<D1QueryResult> {
        #[derive(Serialize)]
        struct QueryBody<'a> {
            sql: &'a str,
            params: &'a [serde_json::Value],
        }

        let result: serde_json::Value = self
            .post(
                &format!(
                    "/accounts/{}/d1/database/{}/query",
                    self.account_id, database_id
                ),
                &QueryBody { sql, params },
            )
            .await?;
        Ok(D1QueryResult(result))
    }
}

//! MX 记录操作
//!
//! listmxs / savemxs 属于 api.version=1 的函数；
//! savemxs 的结果在 metadata 块里报告，而不是 status 字段。

use serde_json::Value;

use crate::error::{Result, WhmError};
use crate::params::ApiParams;
use crate::types::{MxOptions, MxRecord, WhmResponse};

use super::WhmClient;

impl WhmClient {
    /// 列出域名的 MX 记录（`listmxs`）
    pub async fn list_zone_mx_records(&self, domain: &str) -> Result<Vec<MxRecord>> {
        let mut params = ApiParams::new();
        params.insert("api.version", 1);
        params.insert("domain", domain);

        let response: WhmResponse<Vec<MxRecord>> = self.invoke("listmxs", &params).await?;
        let entry = response.into_success()?;
        entry
            .record
            .ok_or_else(|| WhmError::unexpected("listmxs response missing record list"))
    }

    /// 新增 MX 记录（`savemxs`）
    pub async fn add_zone_mx_record(
        &self,
        domain: &str,
        name: &str,
        exchange: &str,
        preference: u16,
        options: &MxOptions,
    ) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("api.version", 1);
        params.insert("domain", domain);
        params.insert("name", name);
        params.insert("exchange", exchange);
        params.insert("preference", preference);
        options.apply_to(&mut params);

        let response: WhmResponse<Value> = self.invoke("savemxs", &params).await?;
        let entry = response.into_first()?;
        let metadata = entry
            .metadata
            .ok_or_else(|| WhmError::unexpected("savemxs response missing metadata"))?;

        if metadata.result != 1 {
            return Err(WhmError::Api {
                message: metadata
                    .reason
                    .unwrap_or_else(|| "remote reported failure without reason".to_string()),
            });
        }
        Ok(())
    }
}

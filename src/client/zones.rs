//! Zone 级操作

use serde_json::Value;

use crate::error::{Result, WhmError};
use crate::params::ApiParams;
use crate::types::{CpanelResponse, WhmResponse, ZoneEntry, ZoneRecord};

use super::WhmClient;

impl WhmClient {
    /// 创建 DNS zone（`adddns`）
    pub async fn add_zone(&self, domain: &str, ip: &str, trueowner: Option<&str>) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("domain", domain);
        params.insert("ip", ip);
        params.insert_opt("trueowner", trueowner);

        let response: WhmResponse<Value> = self.invoke("adddns", &params).await?;
        response.into_success().map(|_| ())
    }

    /// 删除 DNS zone（`killdns`）
    pub async fn delete_zone(&self, domain: &str) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("domain", domain);

        let response: WhmResponse<Value> = self.invoke("killdns", &params).await?;
        response.into_success().map(|_| ())
    }

    /// 列出服务器上的全部 zone（`listzones`）
    ///
    /// 传入 `cpanel_user` 时改走 cpanel 代理调用
    /// `DomainLookup::getbasedomains`，只能看到该账户名下的域名。
    pub async fn list_zones(&self, cpanel_user: Option<&str>) -> Result<Vec<ZoneEntry>> {
        let mut params = ApiParams::new();
        let function = if let Some(user) = cpanel_user {
            params.insert("cpanel_jsonapi_module", "DomainLookup");
            params.insert("cpanel_jsonapi_func", "getbasedomains");
            params.insert("cpanel_xmlapi_version", 2);
            params.insert("cpanel_jsonapi_user", user);
            "cpanel"
        } else {
            "listzones"
        };

        let response: CpanelResponse = self.invoke(function, &params).await?;
        response.into_data()
    }

    /// 读取整个 zone 的全部记录（`dumpzone`）
    pub async fn list_zone(&self, domain: &str) -> Result<Vec<ZoneRecord>> {
        let mut params = ApiParams::new();
        params.insert("domain", domain);

        let response: WhmResponse<Vec<ZoneRecord>> = self.invoke("dumpzone", &params).await?;
        let entry = response.into_success()?;
        entry
            .record
            .ok_or_else(|| WhmError::unexpected("dumpzone response missing record list"))
    }

    /// 把 zone 重置为默认记录（`resetzone`）
    ///
    /// `domain` 和 `zone` 至少提供一个，否则不发请求直接报错。
    pub async fn reset_zone(
        &self,
        domain: Option<&str>,
        zone: Option<&str>,
        user: Option<&str>,
    ) -> Result<()> {
        if domain.is_none() && zone.is_none() {
            return Err(WhmError::InvalidInput {
                detail: "resetzone requires either domain or zone".to_string(),
            });
        }

        let mut params = ApiParams::new();
        params.insert_opt("domain", domain);
        params.insert_opt("zone", zone);
        params.insert_opt("user", user);

        let response: WhmResponse<Value> = self.invoke("resetzone", &params).await?;
        response.into_success().map(|_| ())
    }

    /// 从根域名服务器查询注册 nameserver 的 IP（`lookupnsip`）
    pub async fn get_nameserver_ip(&self, nameserver: &str) -> Result<String> {
        let mut params = ApiParams::new();
        params.insert("nameserver", nameserver);

        let response: WhmResponse<Value> = self.invoke("lookupnsip", &params).await?;
        let entry = response.into_success()?;
        entry
            .ip
            .ok_or_else(|| WhmError::unexpected("lookupnsip response missing ip"))
    }
}

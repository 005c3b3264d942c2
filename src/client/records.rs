//! Zone 记录操作

use serde_json::Value;

use crate::error::{Result, WhmError};
use crate::params::ApiParams;
use crate::types::{NewZoneRecord, WhmResponse, ZoneRecord, ZoneRecordPatch};

use super::WhmClient;

impl WhmClient {
    /// 向 zone 添加一条记录（`addzonerecord`）
    ///
    /// 必填字段取决于记录类型，见 [`NewZoneRecord`]。
    pub async fn add_zone_record(&self, zone: &str, record: &NewZoneRecord) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("zone", zone);
        record.apply_to(&mut params);

        let response: WhmResponse<Value> = self.invoke("addzonerecord", &params).await?;
        response.into_success().map(|_| ())
    }

    /// 修改 zone 中指定行的记录（`editzonerecord`）
    ///
    /// 远端用大写的 `Line` 定位被编辑的行。
    pub async fn edit_zone_record(
        &self,
        zone: &str,
        line: u32,
        changes: &ZoneRecordPatch,
    ) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("zone", zone);
        params.insert("Line", line);
        changes.apply_to(&mut params);

        let response: WhmResponse<Value> = self.invoke("editzonerecord", &params).await?;
        response.into_success().map(|_| ())
    }

    /// 读取 zone 中指定行的记录（`getzonerecord`）
    pub async fn get_zone_record(&self, domain: &str, line: u32) -> Result<ZoneRecord> {
        let mut params = ApiParams::new();
        params.insert("domain", domain);
        params.insert("line", line);

        let response: WhmResponse<ZoneRecord> = self.invoke("getzonerecord", &params).await?;
        let entry = response.into_success()?;
        entry
            .record
            .ok_or_else(|| WhmError::unexpected("getzonerecord response missing record"))
    }

    /// 删除 zone 中指定行的记录（`removezonerecord`）
    pub async fn delete_zone_record(&self, zone: &str, line: u32) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("zone", zone);
        params.insert("line", line);

        let response: WhmResponse<Value> = self.invoke("removezonerecord", &params).await?;
        response.into_success().map(|_| ())
    }

    /// 添加反向解析 PTR 记录（`addzonerecord` + `type=PTR`）
    ///
    /// `name` 是 IP 地址的最后一个八位组（192.168.0.1 -> 1）。
    pub async fn add_reversed_zone_record(
        &self,
        zone: &str,
        name: u32,
        ptrdname: &str,
    ) -> Result<()> {
        let mut params = ApiParams::new();
        params.insert("zone", zone);
        params.insert("name", name);
        params.insert("ptrdname", ptrdname);
        params.insert("type", "PTR");

        let response: WhmResponse<Value> = self.invoke("addzonerecord", &params).await?;
        response.into_success().map(|_| ())
    }
}

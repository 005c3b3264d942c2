//! WHM API 类型定义
//!
//! 信封结构按远端文档原样复刻：大多数 DNS 函数返回
//! `{"result":[{status, statusmsg, ...}]}`，listzones 走
//! `{"cpanelresult":{...}}`，api.version=1 的 savemxs 在
//! `metadata` 块里报告结果。

use serde::Deserialize;

use crate::error::{Result, WhmError};
use crate::params::ApiParams;

/// `{"result":[...]}` 外层信封（绝大多数 DNS 函数）
#[derive(Debug, Deserialize)]
pub struct WhmResponse<T> {
    #[serde(default)]
    pub result: Vec<WhmResult<T>>,
}

/// result 数组中的单个条目
#[derive(Debug, Deserialize)]
pub struct WhmResult<T> {
    /// 成功约定为 1
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub statusmsg: Option<String>,
    /// 操作相关的负载（getzonerecord/dumpzone/listmxs）
    #[serde(default)]
    pub record: Option<T>,
    /// lookupnsip 返回的 IP
    #[serde(default)]
    pub ip: Option<String>,
    /// api.version=1 函数（savemxs）的结果块
    #[serde(default)]
    pub metadata: Option<WhmMetadata>,
}

/// api.version=1 的 metadata 块
#[derive(Debug, Deserialize)]
pub struct WhmMetadata {
    #[serde(default)]
    pub result: i64,
    #[serde(default)]
    pub reason: Option<String>,
}

impl<T> WhmResponse<T> {
    /// 取出第一个 result 条目，result 为空视为信封异常
    pub(crate) fn into_first(self) -> Result<WhmResult<T>> {
        self.result
            .into_iter()
            .next()
            .ok_or_else(|| WhmError::unexpected("response carried an empty result array"))
    }

    /// 取出第一个条目并检查 status == 1，失败时携带 statusmsg
    pub(crate) fn into_success(self) -> Result<WhmResult<T>> {
        let entry = self.into_first()?;
        if entry.status != 1 {
            return Err(WhmError::Api {
                message: entry
                    .statusmsg
                    .unwrap_or_else(|| "remote reported failure without statusmsg".to_string()),
            });
        }
        Ok(entry)
    }
}

/// `{"cpanelresult":{...}}` 信封（listzones 及 cpanel 代理调用）
#[derive(Debug, Deserialize)]
pub struct CpanelResponse {
    pub cpanelresult: CpanelResult,
}

#[derive(Debug, Deserialize)]
pub struct CpanelResult {
    #[serde(default)]
    pub event: CpanelEvent,
    #[serde(default)]
    pub data: Vec<ZoneEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CpanelEvent {
    #[serde(default)]
    pub result: i64,
}

impl CpanelResponse {
    /// event.result == 1 时返回 data，否则转换为 Api 错误
    pub(crate) fn into_data(self) -> Result<Vec<ZoneEntry>> {
        if self.cpanelresult.event.result != 1 {
            return Err(WhmError::Api {
                message: self
                    .cpanelresult
                    .error
                    .unwrap_or_else(|| "remote reported failure without error text".to_string()),
            });
        }
        Ok(self.cpanelresult.data)
    }
}

/// listzones 返回的单个 zone
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneEntry {
    pub domain: String,
    #[serde(default)]
    pub zonefile: Option<String>,
}

/// 单条 zone 记录（getzonerecord / dumpzone 返回）
///
/// 字段是否出现取决于记录类型；SOA 专有字段只出现在 SOA 行上。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneRecord {
    #[serde(rename = "Line", default)]
    pub line: Option<u32>,
    /// 跨多行的记录才有（行数大于 1 时）
    #[serde(rename = "Lines", default)]
    pub lines: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cname: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub preference: Option<u16>,
    #[serde(default)]
    pub nsdname: Option<String>,
    #[serde(default)]
    pub ptrdname: Option<String>,
    #[serde(default)]
    pub txtdata: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub mname: Option<String>,
    #[serde(default)]
    pub rname: Option<String>,
    #[serde(default)]
    pub serial: Option<u32>,
    #[serde(default)]
    pub refresh: Option<u32>,
    #[serde(default)]
    pub retry: Option<u32>,
    #[serde(default)]
    pub expire: Option<u32>,
    #[serde(default)]
    pub minimum: Option<u32>,
}

/// 单条 MX 记录（listmxs 返回）
#[derive(Debug, Clone, Deserialize)]
pub struct MxRecord {
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub preference: Option<u16>,
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub ttl: Option<u32>,
}

/// addzonerecord 的记录字段，按记录类型取舍
///
/// 缺省字段不会进入 query string。
#[derive(Debug, Clone, Default)]
pub struct NewZoneRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub class: Option<String>,
    pub cname: Option<String>,
    pub exchange: Option<String>,
    pub nsdname: Option<String>,
    pub ptrdname: Option<String>,
    pub priority: Option<u16>,
    pub record_type: Option<String>,
    pub ttl: Option<u32>,
    // SRV 专有
    pub weight: Option<u16>,
    pub port: Option<u16>,
    pub target: Option<String>,
}

impl NewZoneRecord {
    pub(crate) fn apply_to(&self, params: &mut ApiParams) {
        params.insert_opt("name", self.name.clone());
        params.insert_opt("address", self.address.clone());
        params.insert_opt("class", self.class.clone());
        params.insert_opt("cname", self.cname.clone());
        params.insert_opt("exchange", self.exchange.clone());
        params.insert_opt("nsdname", self.nsdname.clone());
        params.insert_opt("ptrdname", self.ptrdname.clone());
        params.insert_opt("priority", self.priority);
        params.insert_opt("type", self.record_type.clone());
        params.insert_opt("ttl", self.ttl);
        params.insert_opt("weight", self.weight);
        params.insert_opt("port", self.port);
        params.insert_opt("target", self.target.clone());
    }
}

/// editzonerecord 可修改的字段集
#[derive(Debug, Clone, Default)]
pub struct ZoneRecordPatch {
    pub address: Option<String>,
    pub class: Option<String>,
    pub cname: Option<String>,
    pub exchange: Option<String>,
    pub preference: Option<u16>,
    pub expire: Option<u32>,
    pub minimum: Option<u32>,
    pub mname: Option<String>,
    pub name: Option<String>,
    pub nsdname: Option<String>,
    pub raw: Option<String>,
    pub refresh: Option<u32>,
    pub retry: Option<u32>,
    pub rname: Option<String>,
    pub serial: Option<u32>,
    pub txtdata: Option<String>,
    pub record_type: Option<String>,
    pub ttl: Option<u32>,
}

impl ZoneRecordPatch {
    pub(crate) fn apply_to(&self, params: &mut ApiParams) {
        params.insert_opt("address", self.address.clone());
        params.insert_opt("class", self.class.clone());
        params.insert_opt("cname", self.cname.clone());
        params.insert_opt("exchange", self.exchange.clone());
        params.insert_opt("preference", self.preference);
        params.insert_opt("expire", self.expire);
        params.insert_opt("minimum", self.minimum);
        params.insert_opt("mname", self.mname.clone());
        params.insert_opt("name", self.name.clone());
        params.insert_opt("nsdname", self.nsdname.clone());
        params.insert_opt("raw", self.raw.clone());
        params.insert_opt("refresh", self.refresh);
        params.insert_opt("retry", self.retry);
        params.insert_opt("rname", self.rname.clone());
        params.insert_opt("serial", self.serial);
        params.insert_opt("txtdata", self.txtdata.clone());
        params.insert_opt("type", self.record_type.clone());
        params.insert_opt("ttl", self.ttl);
    }
}

/// savemxs 的可选字段
#[derive(Debug, Clone, Default)]
pub struct MxOptions {
    pub class: Option<String>,
    pub serialnum: Option<u32>,
    pub ttl: Option<u32>,
}

impl MxOptions {
    pub(crate) fn apply_to(&self, params: &mut ApiParams) {
        params.insert_opt("class", self.class.clone());
        params.insert_opt("serialnum", self.serialnum);
        params.insert_opt("ttl", self.ttl);
    }
}

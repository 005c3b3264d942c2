//! WHM JSON API 1 DNS 客户端库
//!
//! 封装 WHM (WebHost Manager) `json-api` 的 DNS 管理函数，包括：
//! - Zone 管理（adddns / killdns / listzones / dumpzone / resetzone）
//! - Zone 记录管理（addzonerecord / editzonerecord / getzonerecord / removezonerecord）
//! - MX 记录（listmxs / savemxs）与 nameserver IP 查询（lookupnsip）
//!
//! 所有请求走 HTTPS（固定端口 2087）+ HTTP Basic 认证，
//! 认证头在构造客户端时一次性算好并复用。
//!
//! # Example
//! ```rust,no_run
//! use whm_dns_client::WhmClient;
//!
//! # async fn demo() -> whm_dns_client::Result<()> {
//! let client = WhmClient::new("whm.example.com", "root", "secret")?;
//!
//! let zones = client.list_zones(None).await?;
//! for zone in zones {
//!     println!("{}", zone.domain);
//! }
//!
//! let record = client.get_zone_record("example.com", 12).await?;
//! println!("{:?}", record.address);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;
pub mod types;

pub use client::{WhmClient, WhmClientBuilder};
pub use error::{Result, WhmError};
pub use params::{ApiParams, ParamValue};
pub use types::{
    MxOptions, MxRecord, NewZoneRecord, WhmMetadata, WhmResponse, WhmResult, ZoneEntry, ZoneRecord,
    ZoneRecordPatch,
};

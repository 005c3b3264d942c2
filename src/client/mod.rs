//! WHM API 客户端
//!
//! 一个实例绑定一台 WHM 服务器：持有 API 基地址和构造时
//! 一次性算好的 Basic 认证头。内部的 `reqwest::Client`
//! 自带连接池，跨任务并发复用同一个实例是安全的。

mod http;
mod mx;
mod records;
mod zones;

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;

use crate::error::{Result, WhmError};

/// WHM json-api 固定端口
pub(crate) const WHM_PORT: u16 = 2087;
/// 默认请求超时
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// WHM DNS API 客户端
pub struct WhmClient {
    pub(crate) client: Client,
    pub(crate) api_base: String,
    pub(crate) auth_header: String,
}

impl WhmClient {
    /// 使用默认配置创建客户端（端口 2087，30 秒超时）
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(host, username, password).build()
    }

    /// 创建客户端构造器
    pub fn builder(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> WhmClientBuilder {
        WhmClientBuilder {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            api_base: None,
        }
    }
}

/// [`WhmClient`] 构造器
pub struct WhmClientBuilder {
    host: String,
    username: String,
    password: String,
    timeout: Duration,
    api_base: Option<String>,
}

impl WhmClientBuilder {
    /// 设置请求超时（默认 30 秒）
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 覆盖 API 基地址（含 scheme 与端口），用于测试或非标准部署
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// 构造 [`WhmClient`]
    pub fn build(self) -> Result<WhmClient> {
        let credentials = format!("{}:{}", self.username, self.password);
        let auth_header = format!("Basic {}", STANDARD.encode(credentials));

        let api_base = self
            .api_base
            .unwrap_or_else(|| format!("https://{}:{}", self.host, WHM_PORT));

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| WhmError::network(e))?;

        Ok(WhmClient {
            client,
            api_base,
            auth_header,
        })
    }
}

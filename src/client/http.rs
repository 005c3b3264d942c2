//! 通用请求执行
//!
//! 所有 DNS 函数共用同一条请求路径：编码 query string，
//! GET `/json-api/{function}`，读取响应文本并解析 JSON。
//! 传输失败与响应不可解码归为客户端错误，远端业务层的
//! 成败由各操作在自己的信封里检查。

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, WhmError};
use crate::params::ApiParams;

use super::WhmClient;

impl WhmClient {
    /// 调用 WHM json-api 函数并把响应解析为目标类型
    pub async fn invoke<T>(&self, function: &str, params: &ApiParams) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let query = params.encode();
        let url = if query.is_empty() {
            format!("{}/json-api/{function}", self.api_base)
        } else {
            format!("{}/json-api/{function}?{query}", self.api_base)
        };

        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.auth_header)
            .send()
            .await
            .map_err(|e| WhmError::network(e))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| WhmError::network(format!("读取响应失败: {e}")))?;

        log::debug!("Response Body: {response_text}");

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("JSON 解析失败: {e}");
            log::error!("原始响应: {response_text}");
            WhmError::parse(e)
        })
    }

    /// 调用 WHM json-api 函数并返回未经加工的 JSON
    ///
    /// 给需要检查包装方法未覆盖的响应字段的调用方使用。
    pub async fn invoke_raw(&self, function: &str, params: &ApiParams) -> Result<Value> {
        self.invoke(function, params).await
    }
}

//! 错误类型定义

use thiserror::Error;

/// 统一的 Result 别名
pub type Result<T> = std::result::Result<T, WhmError>;

/// WHM API 调用错误
///
/// 两条独立的失败轴：
/// - 传输层失败（`Network` / `Parse`）：请求没有完成，或响应无法解码
/// - 业务层失败（`Api`）：服务器返回了格式合法、但表示操作失败的响应
#[derive(Debug, Error)]
pub enum WhmError {
    /// 网络错误（连接失败、TLS 失败、超时、读取响应失败）
    #[error("network error: {detail}")]
    Network { detail: String },

    /// 响应体不是合法 JSON
    #[error("JSON parse error: {detail}")]
    Parse { detail: String },

    /// 远端返回失败状态，message 为 statusmsg/reason 诊断文本
    #[error("WHM API error: {message}")]
    Api { message: String },

    /// 响应是合法 JSON，但缺少该操作约定的信封字段
    #[error("unexpected response shape: {detail}")]
    UnexpectedResponse { detail: String },

    /// 调用方参数错误，未发起任何网络请求
    #[error("invalid input: {detail}")]
    InvalidInput { detail: String },
}

impl WhmError {
    pub(crate) fn network(detail: impl std::fmt::Display) -> Self {
        Self::Network {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn parse(detail: impl std::fmt::Display) -> Self {
        Self::Parse {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn unexpected(detail: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            detail: detail.into(),
        }
    }

    /// 是否为传输层失败（请求未完成或响应不可解码）
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Parse { .. })
    }
}

//! 查询参数构造
//!
//! WHM json-api 的所有参数都通过 query string 传递。
//! 值缺省或为空字符串的参数必须整体省略，
//! 不能序列化成 `key=` 发给远端。

use std::fmt;

/// 单个参数值（字符串或整数）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

/// 查询参数集合，保持插入顺序
#[derive(Debug, Default, Clone)]
pub struct ApiParams {
    pairs: Vec<(&'static str, ParamValue)>,
}

impl ApiParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数
    pub fn insert(&mut self, key: &'static str, value: impl Into<ParamValue>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// 追加一个可选参数，`None` 直接丢弃
    pub fn insert_opt(
        &mut self,
        key: &'static str,
        value: Option<impl Into<ParamValue>>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, value.into()));
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 编码为 query string，值为空字符串的参数整体省略
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            if matches!(value, ParamValue::Str(s) if s.is_empty()) {
                continue;
            }
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(key));
            out.push('=');
            out.push_str(&urlencoding::encode(&value.to_string()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_and_empty_values() {
        let mut params = ApiParams::new();
        params.insert("domain", "example.com");
        params.insert_opt("trueowner", None::<&str>);
        params.insert("ip", "");

        assert_eq!(params.encode(), "domain=example.com");
    }

    #[test]
    fn encodes_reserved_characters() {
        let mut params = ApiParams::new();
        params.insert("domain", "a&b.com");
        params.insert("txtdata", "v=spf1 a ~all");

        assert_eq!(
            params.encode(),
            "domain=a%26b.com&txtdata=v%3Dspf1%20a%20~all"
        );
    }

    #[test]
    fn renders_integer_values() {
        let mut params = ApiParams::new();
        params.insert("line", 27_u32);
        params.insert("preference", 10_u16);

        assert_eq!(params.encode(), "line=27&preference=10");
    }

    #[test]
    fn empty_set_encodes_to_nothing() {
        assert!(ApiParams::new().encode().is_empty());
    }
}

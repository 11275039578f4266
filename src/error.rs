use std::fmt;

use thiserror::Error;

/// 欺诈评分服务的端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// 交易评分 `/transaction`
    Transaction,
    /// 图片提取 `/extractPhoto`
    ExtractPhoto,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Transaction => write!(f, "transaction"),
            Endpoint::ExtractPhoto => write!(f, "extractPhoto"),
        }
    }
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 本地输入错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非 2xx 状态
    #[error("API返回错误状态 ({endpoint}): status={status}, body={body}")]
    BadStatus {
        endpoint: Endpoint,
        status: u16,
        body: String,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 本地输入错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 未选择图片
    #[error("未选择图片")]
    MissingPhoto,
    /// 未知的表单字段
    #[error("未知的表单字段: {name}")]
    UnknownField { name: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL 无法解析
    #[error("无效的URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    /// HTTP 客户端构建失败
    #[error("HTTP客户端构建失败: {0}")]
    HttpClient(#[source] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: Endpoint, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed { endpoint, source })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 失败是否发生在指定端点返回非 2xx 状态时
    pub fn is_bad_status_from(&self, endpoint: Endpoint) -> bool {
        matches!(
            self,
            AppError::Api(ApiError::BadStatus { endpoint: e, .. }) if *e == endpoint
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

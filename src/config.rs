/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 欺诈评分服务的根地址
    pub api_base_url: String,
    /// 交易评分端点路径
    pub transaction_path: String,
    /// 图片提取端点路径
    pub extract_photo_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            transaction_path: "/transaction".to_string(),
            extract_photo_path: "/extractPhoto".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("FRAUD_API_BASE_URL").unwrap_or(default.api_base_url),
            transaction_path: std::env::var("FRAUD_TRANSACTION_PATH").unwrap_or(default.transaction_path),
            extract_photo_path: std::env::var("FRAUD_EXTRACT_PHOTO_PATH").unwrap_or(default.extract_photo_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 指向给定根地址的配置，其余保持默认
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }
}

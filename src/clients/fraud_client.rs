/// 欺诈评分服务客户端
///
/// 封装与评分接口、图片提取接口的全部 HTTP 调用
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult, ConfigError, Endpoint};
use crate::models::UploadedPhoto;
use crate::utils::logging::truncate_text;

/// multipart 表单中图片字段的名称
pub const PHOTO_FIELD: &str = "photo";

/// 欺诈评分服务客户端
///
/// 两个端点共用同一个 `reqwest::Client`，不设置超时、不重试
#[derive(Clone)]
pub struct FraudApiClient {
    http: reqwest::Client,
    transaction_url: Url,
    extract_photo_url: Url,
}

impl FraudApiClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            transaction_url: endpoint_url(&config.api_base_url, &config.transaction_path)?,
            extract_photo_url: endpoint_url(&config.api_base_url, &config.extract_photo_path)?,
        })
    }

    pub fn transaction_url(&self) -> &Url {
        &self.transaction_url
    }

    pub fn extract_photo_url(&self) -> &Url {
        &self.extract_photo_url
    }

    /// 提交交易进行评分
    ///
    /// # 参数
    /// - `payload`: 任意可序列化为 JSON 的交易载荷
    ///
    /// # 返回
    /// 返回评分接口的 JSON 响应
    pub async fn score_transaction<T>(&self, payload: &T) -> AppResult<Value>
    where
        T: Serialize + ?Sized,
    {
        let endpoint = Endpoint::Transaction;

        let response = self
            .http
            .post(self.transaction_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        read_json(endpoint, response).await
    }

    /// 上传图片并提取交易字段
    ///
    /// 图片以 multipart 字段 `photo` 发送
    pub async fn extract_photo(&self, photo: &UploadedPhoto) -> AppResult<Value> {
        let endpoint = Endpoint::ExtractPhoto;
        let bytes = photo.read_bytes().await?;
        debug!("上传图片: {} ({} 字节, {})", photo.file_name, bytes.len(), photo.mime_type);

        let part = Part::bytes(bytes)
            .file_name(photo.file_name.clone())
            .mime_str(photo.mime_type)
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;
        let form = Form::new().part(PHOTO_FIELD, part);

        let response = self
            .http
            .post(self.extract_photo_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        read_json(endpoint, response).await
    }
}

/// 拼接端点地址
fn endpoint_url(base_url: &str, path: &str) -> AppResult<Url> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    Url::parse(&raw).map_err(|e| {
        AppError::Config(ConfigError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    })
}

/// 检查状态码并解析 JSON 响应体
async fn read_json(endpoint: Endpoint, response: Response) -> AppResult<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::api_request_failed(endpoint, e))?;

    debug!("{} 响应 {}: {}", endpoint, status, truncate_text(&body, 200));

    if !status.is_success() {
        return Err(ApiError::BadStatus {
            endpoint,
            status: status.as_u16(),
            body,
        }
        .into());
    }

    serde_json::from_str(&body)
        .map_err(|source| AppError::from(ApiError::JsonParseFailed { endpoint, source }))
}

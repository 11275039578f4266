use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{AppError, AppResult, FileError};

/// 用户选择的图片
///
/// 只保存文件引用，内容在构建上传请求时才读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
}

impl UploadedPhoto {
    /// 从本地路径选择图片，文件必须存在
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).await.map_err(|_| FileError::NotFound {
            path: path.display().to_string(),
        })?;
        if !metadata.is_file() {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        Ok(Self::new(path))
    }

    /// 不检查文件是否存在
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());
        let mime_type = guess_mime(&path);

        Self {
            path,
            file_name,
            mime_type,
        }
    }

    /// 读取图片内容
    pub async fn read_bytes(&self) -> AppResult<Vec<u8>> {
        fs::read(&self.path)
            .await
            .map_err(|e| AppError::file_read_failed(self.path.display().to_string(), e))
    }
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}

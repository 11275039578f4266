use crate::error::{AppError, AppResult, FileError};
use crate::models::transaction::TransactionForm;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载表单初始值
///
/// 键名与接口字段一致（`amount`、`customerAge`、`IP` 等），缺失的键保持为空。
pub async fn load_transaction_form(toml_file_path: &Path) -> AppResult<TransactionForm> {
    let path_display = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let form: TransactionForm =
        toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: path_display.clone(),
            source,
        })?;

    tracing::debug!(
        "已加载表单: {} (空字段 {} 个)",
        path_display,
        form.missing_required().len()
    );

    Ok(form)
}

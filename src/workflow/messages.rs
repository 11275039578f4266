//! 流程提示文案

/// 手动提交失败
pub const MANUAL_SUBMIT_FAILED: &str = "Failed to create transaction. Please try again.";

/// 未选择图片
pub const PHOTO_NOT_SELECTED: &str = "Please select a photo to upload.";

/// 图片提取接口返回失败状态
pub const EXTRACTION_FAILED: &str = "Failed to extract data from the photo. Please try again.";

/// 提取后评分接口返回失败状态
pub const SCORING_FAILED: &str = "Failed to process transaction.";

/// 图片流程中的网络或解析错误
pub const SUBMISSION_ERROR: &str =
    "An error occurred during the submission process. Please try again.";

/// 必填字段为空
pub const REQUIRED_FIELDS_MISSING: &str = "Please fill out this field:";

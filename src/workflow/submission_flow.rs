//! 提交流程 - 流程层
//!
//! 两条互斥的流程：
//! 1. 手动：表单 → 规范化载荷 → 评分
//! 2. 图片：图片 → 提取 → 原样转发 → 评分 → 清除图片

use tracing::{debug, error, info, warn};

use crate::clients::FraudApiClient;
use crate::error::{AppError, AppResult, Endpoint, InputError};
use crate::models::{TransactionForm, UploadedPhoto, Verdict};
use crate::services::{Notification, Notifier};
use crate::state::{reduce, FormAction, FormState};
use crate::utils::logging::truncate_text;
use crate::workflow::messages;

/// 提交流程编排
///
/// - 不持有页面状态，状态快照由调用方传入并返回
/// - 每个结果或失败都以一条通知结束
/// - 不重试，不去重，不可取消
pub struct SubmissionOrchestrator<N: Notifier> {
    client: FraudApiClient,
    notifier: N,
}

impl<N: Notifier> SubmissionOrchestrator<N> {
    pub fn new(client: FraudApiClient, notifier: N) -> Self {
        Self { client, notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// 手动流程：规范化表单并提交评分
    pub async fn submit_manual_transaction(&self, form: &TransactionForm) -> AppResult<Verdict> {
        let payload = form.normalize();
        info!("📤 正在提交交易...");
        debug!("交易载荷: {:?}", payload);

        match self.client.score_transaction(&payload).await {
            Ok(body) => {
                info!("✓ 交易处理完成: {}", truncate_text(&body.to_string(), 200));
                let verdict = Verdict::from_response(&body);
                self.notifier.notify(Notification::info(verdict.message()));
                Ok(verdict)
            }
            Err(e) => {
                error!("❌ 交易提交失败: {}", e);
                self.notifier
                    .notify(Notification::error(messages::MANUAL_SUBMIT_FAILED));
                Err(e)
            }
        }
    }

    /// 图片流程：提取后转发评分
    ///
    /// 返回清理后的状态快照：无论成败，已选图片都被清除
    pub async fn submit_photo_transaction(
        &self,
        state: FormState,
    ) -> (FormState, AppResult<Verdict>) {
        let Some(photo) = state.selected_photo.clone() else {
            warn!("⚠️ 未选择图片，跳过提交");
            self.notifier
                .notify(Notification::error(messages::PHOTO_NOT_SELECTED));
            return (state, Err(InputError::MissingPhoto.into()));
        };

        let (state, outcome) = self.run_photo_pipeline(state, &photo).await;

        let state = reduce(&state, FormAction::ClearPhoto);
        debug!("阶段 → {}", state.phase);

        match &outcome {
            Ok(verdict) => self.notifier.notify(Notification::info(verdict.message())),
            Err(e) => {
                error!("❌ 图片提交失败: {}", e);
                self.notifier
                    .notify(Notification::error(photo_failure_message(e)));
            }
        }

        (state, outcome)
    }

    /// 两段式管线：提取 → 评分
    ///
    /// 提取失败时不进入评分
    async fn run_photo_pipeline(
        &self,
        state: FormState,
        photo: &UploadedPhoto,
    ) -> (FormState, AppResult<Verdict>) {
        let state = reduce(&state, FormAction::BeginExtraction);
        info!("🔍 正在从图片提取交易: {}", photo.file_name);

        let extracted = match self.client.extract_photo(photo).await {
            Ok(extracted) => extracted,
            Err(e) => return (state, Err(e)),
        };
        debug!("提取结果: {}", truncate_text(&extracted.to_string(), 200));

        let state = reduce(&state, FormAction::BeginScoring);
        info!("📤 正在提交提取的交易...");

        let outcome = self
            .client
            .score_transaction(&extracted)
            .await
            .map(|body| {
                info!("✓ 交易处理完成: {}", truncate_text(&body.to_string(), 200));
                Verdict::from_response(&body)
            });

        (state, outcome)
    }
}

/// 图片流程失败时展示的文案
fn photo_failure_message(error: &AppError) -> &'static str {
    if error.is_bad_status_from(Endpoint::ExtractPhoto) {
        messages::EXTRACTION_FAILED
    } else if error.is_bad_status_from(Endpoint::Transaction) {
        messages::SCORING_FAILED
    } else {
        messages::SUBMISSION_ERROR
    }
}

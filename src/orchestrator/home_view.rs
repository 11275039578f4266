use std::path::Path;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::{TransactionField, TransactionForm, UploadedPhoto, Verdict};
use crate::services::{Notification, Notifier};
use crate::state::{reduce, FormAction, FormState};
use crate::workflow::{messages, SubmissionOrchestrator};

/// 交易表单视图
///
/// 唯一持有页面状态的地方；状态只通过 `dispatch` 替换
pub struct HomeView<N: Notifier> {
    state: FormState,
    orchestrator: SubmissionOrchestrator<N>,
}

impl<N: Notifier> HomeView<N> {
    /// 以空表单创建
    pub fn new(orchestrator: SubmissionOrchestrator<N>) -> Self {
        Self {
            state: FormState::new(),
            orchestrator,
        }
    }

    /// 以已有表单内容创建
    pub fn with_form(orchestrator: SubmissionOrchestrator<N>, form: TransactionForm) -> Self {
        Self {
            state: FormState::with_transaction(form),
            orchestrator,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn orchestrator(&self) -> &SubmissionOrchestrator<N> {
        &self.orchestrator
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.state = reduce(&self.state, action);
    }

    /// 按字段名修改表单
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> AppResult<()> {
        let field: TransactionField = name.parse()?;
        let value = value.into();
        debug!("字段 {} = {:?}", field, value);
        self.dispatch(FormAction::SetField { field, value });
        Ok(())
    }

    /// 选择本地图片
    pub async fn select_photo(&mut self, path: impl AsRef<Path>) -> AppResult<()> {
        let photo = UploadedPhoto::from_path(path).await?;
        self.dispatch(FormAction::SelectPhoto(photo));
        Ok(())
    }

    /// 提交表单
    ///
    /// 有空着的必填字段时只提示，不提交，返回 `None`。
    /// 提交后表单被丢弃。
    pub async fn submit_manual(&mut self) -> Option<AppResult<Verdict>> {
        let missing = self.state.transaction.missing_required();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            warn!("⚠️ 必填字段为空: {:?}", names);
            self.orchestrator.notifier().notify(Notification::error(format!(
                "{} {}",
                messages::REQUIRED_FIELDS_MISSING,
                names.join(", ")
            )));
            return None;
        }

        let outcome = self
            .orchestrator
            .submit_manual_transaction(&self.state.transaction)
            .await;
        self.dispatch(FormAction::Reset);
        Some(outcome)
    }

    /// 提交已选图片
    pub async fn submit_photo(&mut self) -> AppResult<Verdict> {
        let state = std::mem::take(&mut self.state);
        let (state, outcome) = self.orchestrator.submit_photo_transaction(state).await;
        self.state = state;
        outcome
    }
}

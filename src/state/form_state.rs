use std::fmt;

use crate::models::{TransactionField, TransactionForm, UploadedPhoto};

/// 图片提交流程所处阶段
///
/// `Idle → PhotoSelected → Extracting → Scoring → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoFlowPhase {
    #[default]
    Idle,
    PhotoSelected,
    Extracting,
    Scoring,
}

impl fmt::Display for PhotoFlowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhotoFlowPhase::Idle => "idle",
            PhotoFlowPhase::PhotoSelected => "photo-selected",
            PhotoFlowPhase::Extracting => "extracting",
            PhotoFlowPhase::Scoring => "scoring",
        };
        write!(f, "{}", name)
    }
}

/// 页面状态快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub transaction: TransactionForm,
    pub selected_photo: Option<UploadedPhoto>,
    pub phase: PhotoFlowPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有表单内容开始
    pub fn with_transaction(transaction: TransactionForm) -> Self {
        Self {
            transaction,
            ..Self::default()
        }
    }

    pub fn has_photo(&self) -> bool {
        self.selected_photo.is_some()
    }
}

/// 状态变更
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// 用户修改某个字段
    SetField {
        field: TransactionField,
        value: String,
    },
    /// 选择图片
    SelectPhoto(UploadedPhoto),
    /// 开始提取
    BeginExtraction,
    /// 开始评分
    BeginScoring,
    /// 清除已选图片，回到空闲
    ClearPhoto,
    /// 丢弃整个表单
    Reset,
}

/// 根据动作计算新状态，不修改旧状态
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SetField { field, value } => FormState {
            transaction: state.transaction.with_field(field, value),
            ..state.clone()
        },
        FormAction::SelectPhoto(photo) => FormState {
            selected_photo: Some(photo),
            phase: PhotoFlowPhase::PhotoSelected,
            ..state.clone()
        },
        FormAction::BeginExtraction => FormState {
            phase: PhotoFlowPhase::Extracting,
            ..state.clone()
        },
        FormAction::BeginScoring => FormState {
            phase: PhotoFlowPhase::Scoring,
            ..state.clone()
        },
        FormAction::ClearPhoto => FormState {
            selected_photo: None,
            phase: PhotoFlowPhase::Idle,
            ..state.clone()
        },
        FormAction::Reset => FormState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(field: TransactionField, value: &str) -> FormAction {
        FormAction::SetField {
            field,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_set_field_only_touches_that_field() {
        let state = FormState::new();
        let next = reduce(&state, set(TransactionField::Amount, "12"));
        let next = reduce(&next, set(TransactionField::Ip, "10.1.1.1"));

        assert_eq!(next.transaction.amount, "12");
        assert_eq!(next.transaction.ip, "10.1.1.1");
        assert_eq!(next.transaction.method, "");
        // 旧快照不变
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_photo_phase_sequence() {
        let state = reduce(
            &FormState::new(),
            FormAction::SelectPhoto(UploadedPhoto::new("a.png")),
        );
        assert_eq!(state.phase, PhotoFlowPhase::PhotoSelected);
        assert!(state.has_photo());

        let state = reduce(&state, FormAction::BeginExtraction);
        assert_eq!(state.phase, PhotoFlowPhase::Extracting);
        let state = reduce(&state, FormAction::BeginScoring);
        assert_eq!(state.phase, PhotoFlowPhase::Scoring);

        let state = reduce(&state, FormAction::ClearPhoto);
        assert_eq!(state.phase, PhotoFlowPhase::Idle);
        assert!(!state.has_photo());
    }

    #[test]
    fn test_clear_photo_keeps_form_fields() {
        let state = reduce(&FormState::new(), set(TransactionField::Device, "mobile"));
        let state = reduce(&state, FormAction::SelectPhoto(UploadedPhoto::new("b.jpg")));
        let state = reduce(&state, FormAction::BeginExtraction);
        let state = reduce(&state, FormAction::ClearPhoto);

        assert_eq!(state.transaction.device, "mobile");
        assert_eq!(state.selected_photo, None);
    }

    #[test]
    fn test_reset_discards_everything() {
        let state = reduce(&FormState::new(), set(TransactionField::Hour, "9"));
        let state = reduce(&state, FormAction::SelectPhoto(UploadedPhoto::new("c.png")));
        assert_eq!(reduce(&state, FormAction::Reset), FormState::default());
    }

    #[test]
    fn test_phase_display_names() {
        assert_eq!(PhotoFlowPhase::PhotoSelected.to_string(), "photo-selected");
        assert_eq!(PhotoFlowPhase::Idle.to_string(), "idle");
    }
}

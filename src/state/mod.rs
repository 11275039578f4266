//! 表单状态
//!
//! 页面状态是不可变快照，只能通过 `reduce` 产生新快照

pub mod form_state;

pub use form_state::{reduce, FormAction, FormState, PhotoFlowPhase};

//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! `HomeView` 独占页面状态（`FormState`），把用户输入转成 `FormAction`，
//! 并把提交交给 `workflow::SubmissionOrchestrator`。
//!
//! ## 层次关系
//!
//! ```text
//! HomeView (持有 FormState)
//!     ↓
//! workflow::SubmissionOrchestrator (手动 / 图片两条流程)
//!     ↓
//! clients::FraudApiClient (HTTP)
//! ```

pub mod home_view;

pub use home_view::HomeView;

//! # Fraud Check Submit
//!
//! 把交易提交到远程欺诈评分服务并展示结论的客户端
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 持有 HTTP 客户端，只暴露"评分"和"图片提取"两个能力
//!
//! ### ② 模型与状态（Models / State）
//! - `models/` - 表单原始输入、规范化载荷、宽松数值转换、图片引用、评分结论
//! - `state/` - 不可变的页面状态快照和纯函数 `reduce`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 手动提交和图片两段式提交
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - `HomeView` 持有状态并调度流程
//!
//! 通知（`services/notifier`）是界面边界：所有结果都以一条提示结束。

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod state;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::FraudApiClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{TransactionForm, TransactionInput, UploadedPhoto, Verdict};
pub use orchestrator::HomeView;
pub use state::{reduce, FormAction, FormState, PhotoFlowPhase};
pub use workflow::SubmissionOrchestrator;

pub mod messages;
pub mod submission_flow;

pub use submission_flow::SubmissionOrchestrator;

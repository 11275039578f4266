#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use fraud_check_submit::services::{Notification, Notifier};
use fraud_check_submit::{Config, FraudApiClient, SubmissionOrchestrator};

/// 记录所有通知，便于断言
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

/// 指向测试服务器的编排器，以及用于检查通知的句柄
pub fn orchestrator_for(base_url: &str) -> (SubmissionOrchestrator<RecordingNotifier>, RecordingNotifier) {
    let client = FraudApiClient::new(&Config::with_base_url(base_url)).unwrap();
    let notifier = RecordingNotifier::default();
    (SubmissionOrchestrator::new(client, notifier.clone()), notifier)
}

/// 写一个临时图片文件
pub fn temp_photo(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("receipt")
        .suffix(".png")
        .tempfile()
        .unwrap();
    file.write_all(contents).unwrap();
    file
}

//! 用户通知 - 界面边界
//!
//! 所有结果和失败最终都以一条阻塞式提示呈现给用户，不再向上传播

use std::fmt;
use tracing::debug;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// 一条用户可见的通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NotificationLevel::Info => write!(f, "{}", self.message),
            NotificationLevel::Error => write!(f, "✖ {}", self.message),
        }
    }
}

/// 通知展示能力
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 终端通知：信息写 stdout，错误写 stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info => {
                debug!("📢 {}", notification.message);
                println!("{}", notification);
            }
            NotificationLevel::Error => {
                debug!("📢 {}", notification.message);
                eprintln!("{}", notification);
            }
        }
    }
}

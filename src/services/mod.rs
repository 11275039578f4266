pub mod notifier;

pub use notifier::{ConsoleNotifier, Notification, NotificationLevel, Notifier};

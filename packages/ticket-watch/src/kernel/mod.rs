//! Kernel module - I/O infrastructure behind the checker.

pub mod http_fetcher;
pub mod ntfy_notifier;
pub mod scheduled_tasks;
pub mod test_dependencies;
pub mod traits;

pub use http_fetcher::HttpPageFetcher;
pub use ntfy_notifier::NtfyNotifier;
pub use scheduled_tasks::start_scheduler;
pub use test_dependencies::{MockNotifier, MockPageFetcher};
pub use traits::*;

use crate::modules::batch_import::application::ports::Notifier;
use crate::{log_error, log_info, log_warn};

/// Reference [`Notifier`] that routes notifications to the log facade.
/// Shells with a real toast surface provide their own implementation.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        log_info!("{}", message);
    }

    fn warning(&self, message: &str) {
        log_warn!("{}", message);
    }

    fn error(&self, message: &str) {
        log_error!("{}", message);
    }
}

/// Port (interface) for transient user notifications (toasts)
/// Delivery mechanics belong to the shell; the import core only decides
/// which level a message carries.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

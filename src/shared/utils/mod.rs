pub mod logger;
pub mod messages;

pub use logger::init_logger;
pub use messages::extract_error_message;

mod connection_info;
mod retry_settings;
mod secret;

pub use connection_info::{DatabaseName, Host, Password, User};
pub use retry_settings::RetrySettings;
pub use secret::Secret;

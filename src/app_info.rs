pub const APP_NAME: &str = "commitwatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

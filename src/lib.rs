pub mod app_info;
pub mod backends;
pub mod cmdargs;
pub mod config;
pub mod events;
pub mod git;
pub mod logging;
pub mod monitor;
pub mod output;
pub mod roster;

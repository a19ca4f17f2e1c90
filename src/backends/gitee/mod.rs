mod apiclient;
mod models;

#[cfg(test)]
mod tests;

pub use apiclient::*;
pub use models::*;

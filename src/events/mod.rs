mod model;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::model::*;

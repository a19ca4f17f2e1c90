mod error;
mod platform;
mod ref_type;
mod repository_path;
mod repository_url;

pub use self::error::GitError;
pub use self::platform::Platform;
pub use self::ref_type::RefType;
pub use self::repository_path::RepositoryPath;
pub use self::repository_url::RepositoryUrl;

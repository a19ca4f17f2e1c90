mod analyzer;
mod classifier;
mod deadline;
mod request;
mod result;
mod session;

pub use self::analyzer::{evaluate, Analyzer};
pub use self::classifier::{classify, is_code_submission, select_latest};
pub use self::deadline::{compare, format_duration, parse_deadline, DeadlineComparison, DeadlineError};
pub use self::request::{MonitorRequest, ValidationError};
pub use self::result::CodeEventResult;
pub use self::session::AnalysisSession;

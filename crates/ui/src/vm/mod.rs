mod catalog_vm;
mod question_vm;
mod report_vm;
mod stats_vm;
mod time_fmt;

pub use catalog_vm::{QuizListItemVm, map_quiz_list};
pub use question_vm::{OptionVm, QuestionVm};
pub use report_vm::{ReportVm, ReviewItemVm};
pub use stats_vm::{AttemptStatsVm, RecentAttemptVm, map_recent_attempts};
pub use time_fmt::{format_datetime, format_elapsed};

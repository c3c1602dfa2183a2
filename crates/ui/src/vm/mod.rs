mod markdown_vm;
mod score_vm;
mod time_fmt;
mod verdict_vm;

pub use markdown_vm::{PageLine, parse_page};
pub use score_vm::{ScoreBreakdownVm, ScoreRowVm, map_score_rows};
pub use time_fmt::format_datetime;
pub use verdict_vm::{GREETINGS, code_trainer_verdict, hardmode_reaction, quiz_verdict};

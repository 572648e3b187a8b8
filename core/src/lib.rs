pub mod config;
pub mod error;
pub mod expander;
pub mod lexicon;
pub mod model;
pub mod recognizer;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::VifError;
pub use expander::expand;
pub use lexicon::{GlyphRule, GlyphTable, WeekdayLexicon, WeekdayToken};
pub use model::action::{Action, ClearScope, DetermineActionResponse, MarkStatus, SortBy};
pub use model::batch::{BatchTask, BatchTaskResult};
pub use model::pattern::RecurrencePattern;
pub use model::todo::{DateRange, TodoItem};
pub use recognizer::{extract_task_text, recognize};
pub use service::batch_service::{process_batch_tasks, BatchTaskAssembler};
pub use service::todo_service::TodoList;
pub use time::{parse_timezone, today_in};
pub use usecase::determine_action::{ActionRequest, ClassifierContext, DetermineActionUseCase, IntentClassifier};

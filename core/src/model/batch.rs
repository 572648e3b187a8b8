use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::action::Action;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchTask {
    pub text: String,
    pub date: NaiveDate,
    #[serde(rename = "emoji")]
    pub glyph: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BatchTaskResult {
    pub tasks: Vec<BatchTask>,
}

impl BatchTaskResult {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// One `add` action per task, in expansion order.
    pub fn into_actions(self) -> Vec<Action> {
        self.tasks
            .into_iter()
            .map(|task| Action::Add {
                text: task.text,
                emoji: Some(task.glyph),
                target_date: Some(task.date),
                time: None,
            })
            .collect()
    }
}

use serde::{Deserialize, Serialize};

/// A recognized recurrence shape together with its residual task text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily { task: String },
    /// `days` holds distinct ordinals (0 = Monday) in discovery order.
    Weekly { task: String, days: Vec<u8> },
    Monthly { task: String },
}

impl RecurrencePattern {
    pub fn task_text(&self) -> &str {
        match self {
            RecurrencePattern::Daily { task }
            | RecurrencePattern::Weekly { task, .. }
            | RecurrencePattern::Monthly { task } => task,
        }
    }
}

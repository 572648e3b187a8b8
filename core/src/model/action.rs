use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Newest,
    Oldest,
    Alphabetical,
    Completed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkStatus {
    Complete,
    Incomplete,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClearScope {
    All,
    Completed,
    Incomplete,
}

/// A single change a todo list can apply.
///
/// Serialized as `{"action": "<kind>", ...}` with camelCase fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Action {
    Add {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emoji: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_date: Option<NaiveDate>,
        /// `HH:mm`, 24-hour.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },
    Delete {
        todo_id: String,
    },
    Mark {
        todo_id: String,
        status: MarkStatus,
    },
    Sort {
        sort_by: SortBy,
    },
    Edit {
        todo_id: String,
        text: String,
    },
    Clear {
        list_to_clear: ClearScope,
    },
    Filter {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DetermineActionResponse {
    pub actions: Vec<Action>,
}

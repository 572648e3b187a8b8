use chrono::{Duration, NaiveDate};

use crate::error::VifError;
use crate::model::action::{Action, ClearScope, MarkStatus, SortBy};
use crate::model::todo::{DateRange, TodoItem};

/// In-memory todo list that actions are applied to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    view: Option<DateRange>,
}

impl TodoList {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items, view: None }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn view(&self) -> Option<DateRange> {
        self.view
    }

    /// Items inside the active filter range, or all of them.
    pub fn visible(&self) -> Vec<&TodoItem> {
        match self.view {
            Some(range) => self.items.iter().filter(|t| range.contains(t.date)).collect(),
            None => self.items.iter().collect(),
        }
    }

    pub fn apply_all(&mut self, actions: &[Action], selected_date: NaiveDate) -> Result<(), VifError> {
        for action in actions {
            self.apply(action, selected_date)?;
        }
        Ok(())
    }

    /// Applies one action. Adds without a target date land on `selected_date`.
    pub fn apply(&mut self, action: &Action, selected_date: NaiveDate) -> Result<(), VifError> {
        match action {
            Action::Add { text, emoji, target_date, time } => {
                let mut item = TodoItem::new(text.clone(), target_date.unwrap_or(selected_date));
                item.emoji = emoji.clone();
                item.time = time.clone();
                self.items.push(item);
            }
            Action::Delete { todo_id } => {
                let before = self.items.len();
                self.items.retain(|t| &t.id != todo_id);
                if self.items.len() == before {
                    return Err(VifError::TodoNotFound(todo_id.clone()));
                }
            }
            Action::Mark { todo_id, status } => {
                self.find_mut(todo_id)?.completed = *status == MarkStatus::Complete;
            }
            Action::Edit { todo_id, text } => {
                self.find_mut(todo_id)?.text = text.clone();
            }
            Action::Sort { sort_by } => {
                self.items = sort_todos(&self.items, *sort_by);
            }
            Action::Clear { list_to_clear } => match list_to_clear {
                ClearScope::All => self.items.clear(),
                ClearScope::Completed => self.items.retain(|t| !t.completed),
                ClearScope::Incomplete => self.items.retain(|t| t.completed),
            },
            Action::Filter { start_date, end_date } => {
                self.view = Some(DateRange::new(*start_date, *end_date)?);
            }
        }
        Ok(())
    }

    pub fn clear_filter(&mut self) {
        self.view = None;
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut TodoItem, VifError> {
        self.items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| VifError::TodoNotFound(id.to_string()))
    }
}

pub fn filter_by_date(todos: &[TodoItem], date: NaiveDate) -> Vec<TodoItem> {
    todos.iter().filter(|t| t.date == date).cloned().collect()
}

pub fn filter_by_date_range(todos: &[TodoItem], range: DateRange) -> Vec<TodoItem> {
    todos.iter().filter(|t| range.contains(t.date)).cloned().collect()
}

// Stable sort: ties keep their current order.
pub fn sort_todos(todos: &[TodoItem], sort_by: SortBy) -> Vec<TodoItem> {
    let mut sorted = todos.to_vec();
    match sort_by {
        SortBy::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        SortBy::Oldest => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
        SortBy::Alphabetical => sorted.sort_by(|a, b| a.text.cmp(&b.text)),
        SortBy::Completed => sorted.sort_by(|a, b| b.completed.cmp(&a.completed)),
    }
    sorted
}

/// Completed share as a rounded percentage; 0 for an empty list.
pub fn calculate_progress(todos: &[TodoItem]) -> u8 {
    if todos.is_empty() {
        return 0;
    }
    let completed = todos.iter().filter(|t| t.completed).count();
    ((completed as f64 / todos.len() as f64) * 100.0).round() as u8
}

pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        format!("Tomorrow, {}", date.format("%a, %-d %b"))
    } else {
        date.format("%a, %-d %b").to_string()
    }
}

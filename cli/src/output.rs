use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use vif_core::service::todo_service::format_date;
use vif_core::BatchTaskResult;

#[derive(Tabled)]
struct BatchRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "")]
    emoji: String,
    #[tabled(rename = "Task")]
    text: String,
}

pub fn batch_table(result: &BatchTaskResult, today: NaiveDate) -> String {
    let rows: Vec<BatchRow> = result
        .tasks
        .iter()
        .map(|task| BatchRow {
            date: task.date.format("%Y-%m-%d").to_string(),
            day: format_date(task.date, today),
            emoji: task.glyph.clone(),
            text: if task.text.is_empty() { "-".to_string() } else { task.text.clone() },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

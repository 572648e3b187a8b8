use chrono::{DateTime, NaiveDate, TimeZone};
use log::debug;

use crate::expander::expand;
use crate::lexicon::{GlyphTable, WeekdayLexicon};
use crate::model::batch::{BatchTask, BatchTaskResult};
use crate::model::pattern::RecurrencePattern;
use crate::recognizer::recognize;
use crate::time::reference_date;

/// Turns recurring-task phrasing into dated tasks.
///
/// Holds its lexicon and glyph table by value so alternate tables can be
/// injected without touching process-wide state.
#[derive(Debug, Clone, Default)]
pub struct BatchTaskAssembler {
    lexicon: WeekdayLexicon,
    glyphs: GlyphTable,
}

impl BatchTaskAssembler {
    pub fn new(lexicon: WeekdayLexicon, glyphs: GlyphTable) -> Self {
        Self { lexicon, glyphs }
    }

    pub fn lexicon(&self) -> &WeekdayLexicon {
        &self.lexicon
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn recognize(&self, input: &str) -> Option<RecurrencePattern> {
        recognize(input, &self.lexicon)
    }

    /// `None` means no recurrence phrasing: hand the input to the intent
    /// classifier instead.
    pub fn assemble(&self, input: &str, explicit_glyph: Option<&str>, today: NaiveDate) -> Option<BatchTaskResult> {
        let pattern = self.recognize(input)?;
        let dates = expand(&pattern, today);

        let text = pattern.task_text();
        let glyph = explicit_glyph
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| self.glyphs.lookup(text));

        let tasks: Vec<BatchTask> = dates
            .into_iter()
            .map(|date| BatchTask {
                text: text.to_string(),
                date,
                glyph: glyph.to_string(),
            })
            .collect();

        debug!("Expanded {:?} into {} task(s)", pattern, tasks.len());
        Some(BatchTaskResult { tasks })
    }
}

/// Default-table entry point; `now` decides which week and month are current.
pub fn process_batch_tasks<Z: TimeZone>(input: &str, explicit_glyph: Option<&str>, now: &DateTime<Z>) -> Option<BatchTaskResult> {
    BatchTaskAssembler::default().assemble(input, explicit_glyph, reference_date(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::GlyphRule;
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(result: &BatchTaskResult) -> Vec<NaiveDate> {
        result.tasks.iter().map(|t| t.date).collect()
    }

    #[test]
    fn test_every_day_this_week() {
        let result = BatchTaskAssembler::default()
            .assemble("every day this week do exercise", None, date(2024, 6, 12))
            .unwrap();
        assert_eq!(result.len(), 7);
        assert_eq!(dates(&result), (10..=16).map(|d| date(2024, 6, d)).collect::<Vec<_>>());
        assert!(result.tasks.iter().all(|t| t.text == "exercise" && t.glyph == "💪"));
    }

    #[test]
    fn test_specific_weekdays() {
        let result = BatchTaskAssembler::default()
            .assemble("mon wed fri do yoga", None, date(2024, 6, 12))
            .unwrap();
        assert_eq!(dates(&result), vec![date(2024, 6, 10), date(2024, 6, 12), date(2024, 6, 14)]);
        assert!(result.tasks.iter().all(|t| t.text == "yoga" && t.glyph == "🧘"));
    }

    #[test]
    fn test_end_of_month() {
        let result = BatchTaskAssembler::default()
            .assemble("end of month do summary", None, date(2024, 4, 15))
            .unwrap();
        assert_eq!(
            result.tasks,
            vec![BatchTask { text: "summary".to_string(), date: date(2024, 4, 30), glyph: "📝".to_string() }]
        );
    }

    #[test]
    fn test_no_recurrence_is_none() {
        assert_eq!(BatchTaskAssembler::default().assemble("buy groceries today", None, date(2024, 6, 12)), None);
    }

    #[test]
    fn test_explicit_glyph_wins_unless_empty() {
        let assembler = BatchTaskAssembler::default();
        let result = assembler.assemble("tuesday thursday yoga", Some("🔥"), date(2024, 6, 12)).unwrap();
        assert!(result.tasks.iter().all(|t| t.glyph == "🔥"));

        let result = assembler.assemble("tuesday thursday yoga", Some(""), date(2024, 6, 12)).unwrap();
        assert!(result.tasks.iter().all(|t| t.glyph == "🧘"));

        let result = assembler.assemble("tuesday thursday yoga", Some(" "), date(2024, 6, 12)).unwrap();
        assert!(result.tasks.iter().all(|t| t.glyph == " "));
    }

    #[test]
    fn test_unknown_task_gets_fallback_glyph() {
        let result = BatchTaskAssembler::default()
            .assemble("daily water the plants", None, date(2024, 6, 12))
            .unwrap();
        assert_eq!(result.tasks[0].text, "water the plants");
        assert_eq!(result.tasks[0].glyph, "📋");
    }

    #[test]
    fn test_empty_task_text_still_expands() {
        let result = BatchTaskAssembler::default().assemble("every day", None, date(2024, 6, 12)).unwrap();
        assert_eq!(result.len(), 7);
        assert!(result.tasks.iter().all(|t| t.text.is_empty()));
    }

    #[test]
    fn test_injected_tables() {
        let lexicon = WeekdayLexicon::new([("lundi", 0)]).unwrap();
        let glyphs = GlyphTable::new(vec![GlyphRule { keyword: "piano".to_string(), glyph: "🎹".to_string() }], "?");
        let assembler = BatchTaskAssembler::new(lexicon, glyphs);

        let result = assembler.assemble("lundi do piano", None, date(2024, 6, 12)).unwrap();
        assert_eq!(
            result.tasks,
            vec![BatchTask { text: "piano".to_string(), date: date(2024, 6, 10), glyph: "🎹".to_string() }]
        );
        assert_eq!(assembler.assemble("monday do piano", None, date(2024, 6, 12)), None);
    }

    #[test]
    fn test_process_batch_tasks_uses_callers_local_date() {
        // Sunday 23:30 UTC is Monday 07:30 at +08:00, one week later.
        let utc = Utc.with_ymd_and_hms(2024, 6, 16, 23, 30, 0).unwrap();
        let shanghai = utc.with_timezone(&FixedOffset::east_opt(8 * 3600).unwrap());

        let in_utc = process_batch_tasks("monday do review", None, &utc).unwrap();
        let in_shanghai = process_batch_tasks("monday do review", None, &shanghai).unwrap();
        assert_eq!(dates(&in_utc), vec![date(2024, 6, 10)]);
        assert_eq!(dates(&in_shanghai), vec![date(2024, 6, 17)]);
    }

    #[test]
    fn test_dates_round_trip_through_json() {
        let result = BatchTaskAssembler::default()
            .assemble("daily reading", None, date(2024, 12, 31))
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""date":"2024-12-30""#));
        assert!(json.contains(r#""emoji":"📚""#));
        let back: BatchTaskResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

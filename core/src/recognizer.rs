use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::WeekdayLexicon;
use crate::model::pattern::RecurrencePattern;

const DAILY_CUES: &[&str] = &["every day", "daily"];
const MONTHLY_CUES: &[&str] = &["end of month"];
// Stripped alongside any cue.
const SCOPE_PHRASES: &[&str] = &["this week", "this month"];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LEADING_DO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^do\s+").unwrap());
static LEADING_TO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^to\s+").unwrap());
static LEADING_THE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^the\s+").unwrap());

/// Detects a recurrence phrase in `input`.
///
/// Cues are checked in a fixed order: daily, then end of month, then
/// weekday tokens. The first shape found wins even if later cues are
/// present too ("every day except monday" is daily).
pub fn recognize(input: &str, lexicon: &WeekdayLexicon) -> Option<RecurrencePattern> {
    let lower = input.to_lowercase();

    if DAILY_CUES.iter().any(|cue| lower.contains(cue)) {
        let task = extract_task_text(&lower, DAILY_CUES.iter().copied());
        debug!("Daily pattern in {:?}, task {:?}", input, task);
        return Some(RecurrencePattern::Daily { task });
    }

    if MONTHLY_CUES.iter().any(|cue| lower.contains(cue)) {
        let task = extract_task_text(&lower, MONTHLY_CUES.iter().copied());
        debug!("Monthly pattern in {:?}, task {:?}", input, task);
        return Some(RecurrencePattern::Monthly { task });
    }

    // Lexicon order, not input order. Aliases of one day collapse to one ordinal.
    let mut days: Vec<u8> = Vec::new();
    for entry in lexicon.tokens() {
        if lower.contains(entry.token.as_str()) && !days.contains(&entry.ordinal) {
            days.push(entry.ordinal);
        }
    }

    if days.is_empty() {
        debug!("No recurrence pattern in {:?}", input);
        return None;
    }

    let task = extract_task_text(&lower, lexicon.tokens().iter().map(|t| t.token.as_str()));
    debug!("Weekly pattern {:?} in {:?}, task {:?}", days, input, task);
    Some(RecurrencePattern::Weekly { task, days })
}

/// Removes every occurrence of `keywords` (and the scope phrases) from the
/// lowercased input, collapses whitespace and drops the leading fillers
/// "do", "to" and "the", each at most once and in that order.
pub fn extract_task_text<'a, I>(input: &str, keywords: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keywords: Vec<&str> = keywords
        .into_iter()
        .chain(SCOPE_PHRASES.iter().copied())
        .collect();
    // Longest first: removing "tue" before "tuesday" would leave "sday".
    keywords.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut task = input.to_lowercase();
    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        if !keyword.is_empty() {
            task = task.replace(keyword.as_str(), "");
        }
    }

    let collapsed = WHITESPACE.replace_all(&task, " ");
    let task = LEADING_DO.replace(collapsed.trim(), "");
    let task = LEADING_TO.replace(&task, "");
    LEADING_THE.replace(&task, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn weekly(task: &str, days: &[u8]) -> Option<RecurrencePattern> {
        Some(RecurrencePattern::Weekly { task: task.to_string(), days: days.to_vec() })
    }

    #[test_case("every day this week do exercise", "exercise")]
    #[test_case("Daily reading", "reading")]
    #[test_case("do EVERY DAY the stretching", "stretching")]
    #[test_case("every day do the dishes", "dishes")]
    #[test_case("every day except monday", "except monday")]
    #[test_case("daily", "")]
    fn test_daily(input: &str, task: &str) {
        assert_eq!(
            recognize(input, &WeekdayLexicon::default()),
            Some(RecurrencePattern::Daily { task: task.to_string() })
        );
    }

    #[test]
    fn test_monthly() {
        assert_eq!(
            recognize("End of Month do summary", &WeekdayLexicon::default()),
            Some(RecurrencePattern::Monthly { task: "summary".to_string() })
        );
    }

    #[test]
    fn test_daily_beats_monthly() {
        assert_eq!(
            recognize("daily until end of month: stretch", &WeekdayLexicon::default()),
            Some(RecurrencePattern::Daily { task: "until end of month: stretch".to_string() })
        );
    }

    #[test]
    fn test_weekly() {
        let lexicon = WeekdayLexicon::default();
        assert_eq!(recognize("mon wed fri do yoga", &lexicon), weekly("yoga", &[0, 2, 4]));
        assert_eq!(recognize("tuesday thursday yoga", &lexicon), weekly("yoga", &[1, 3]));
        assert_eq!(recognize("tue thu sat do workout", &lexicon), weekly("workout", &[1, 3, 5]));
    }

    #[test]
    fn test_weekly_order_follows_lexicon_not_input() {
        assert_eq!(
            recognize("friday and monday to call grandma", &WeekdayLexicon::default()),
            weekly("and to call grandma", &[0, 4])
        );
    }

    #[test]
    fn test_aliases_do_not_duplicate_ordinals() {
        assert_eq!(
            recognize("tues tuesday sunday sun do laundry", &WeekdayLexicon::default()),
            weekly("laundry", &[1, 6])
        );
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = WeekdayLexicon::new([("lundi", 0), ("jeudi", 3)]).unwrap();
        assert_eq!(recognize("lundi jeudi do piano", &lexicon), weekly("piano", &[0, 3]));
        assert_eq!(recognize("mon wed fri do yoga", &lexicon), None);
    }

    #[test_case("buy groceries today")]
    #[test_case("")]
    #[test_case("   ")]
    fn test_no_match(input: &str) {
        assert_eq!(recognize(input, &WeekdayLexicon::default()), None);
    }

    #[test]
    fn test_fillers_stripped_in_order() {
        assert_eq!(extract_task_text("do the dishes", ["daily"]), "dishes");
        assert_eq!(extract_task_text("to the gym", ["daily"]), "gym");
        assert_eq!(extract_task_text("do to the end", ["daily"]), "end");
        // "do" is only checked before "to", so a later "do" survives.
        assert_eq!(extract_task_text("to   do   it", ["daily"]), "do it");
        assert_eq!(extract_task_text("the the band", ["daily"]), "the band");
        assert_eq!(extract_task_text("donate blood", ["daily"]), "donate blood");
    }

    #[test]
    fn test_extraction_is_stable() {
        let lexicon = WeekdayLexicon::default();
        let tokens = || lexicon.tokens().iter().map(|t| t.token.as_str());
        let once = extract_task_text("Mon  Wed Fri   do Morning Yoga", tokens());
        assert_eq!(once, "morning yoga");
        assert_eq!(extract_task_text(&once, tokens()), once);

        let pattern = recognize("every day do the dishes", &lexicon).unwrap();
        assert_eq!(pattern.task_text(), "dishes");
        assert_eq!(extract_task_text(pattern.task_text(), ["every day", "daily"]), "dishes");
    }
}

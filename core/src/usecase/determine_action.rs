use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use log::info;

use crate::model::action::DetermineActionResponse;
use crate::model::todo::{DateRange, TodoItem};
use crate::service::batch_service::BatchTaskAssembler;
use crate::time::today_and_tomorrow;

/// Everything the caller knows when asking what to do with `text`.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    pub text: String,
    pub emoji: Option<String>,
    pub todos: Vec<TodoItem>,
    pub timezone: Tz,
    pub date_range: Option<DateRange>,
}

impl ActionRequest {
    pub fn new(text: impl Into<String>, timezone: Tz) -> Self {
        Self {
            text: text.into(),
            emoji: None,
            todos: Vec::new(),
            timezone,
            date_range: None,
        }
    }
}

/// Dates resolved in the request's timezone, handed to the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierContext {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    pub timezone: String,
}

/// External intent classifier for input the batch recognizer does not cover.
pub trait IntentClassifier {
    fn classify(&self, request: &ActionRequest, context: &ClassifierContext) -> Result<DetermineActionResponse>;
}

pub struct DetermineActionUseCase<'a, C: IntentClassifier> {
    assembler: &'a BatchTaskAssembler,
    classifier: &'a C,
}

impl<'a, C: IntentClassifier> DetermineActionUseCase<'a, C> {
    pub fn new(assembler: &'a BatchTaskAssembler, classifier: &'a C) -> Self {
        Self { assembler, classifier }
    }

    pub fn determine(&self, request: &ActionRequest, now: DateTime<Utc>) -> Result<DetermineActionResponse> {
        let (today, tomorrow) = today_and_tomorrow(request.timezone, now);
        info!("Determining action for {:?} (today {} in {})", request.text, today, request.timezone.name());

        if let Some(batch) = self.assembler.assemble(&request.text, request.emoji.as_deref(), today) {
            info!("Batch tasks detected: {} task(s)", batch.len());
            return Ok(DetermineActionResponse { actions: batch.into_actions() });
        }

        info!("No recurrence pattern, delegating to intent classifier");
        let context = ClassifierContext {
            today,
            tomorrow,
            timezone: request.timezone.name().to_string(),
        };
        self.classifier
            .classify(request, &context)
            .with_context(|| format!("Intent classification failed for {:?}", request.text))
    }
}

//! View state of the prediction form and the transitions driving it.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::api::format_prediction;
use crate::form::{FormField, PredictionForm};

/// Label of the empty first entry of the country selector.
pub const COUNTRY_PLACEHOLDER: &str = "Select a country";

/// Country names offered by the selector, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryList(Vec<String>);

/// One `<option>` of the country selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

impl CountryList {
    pub fn new(countries: Vec<String>) -> Self {
        Self(countries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Selector entries: the empty placeholder followed by every country.
    pub fn options(&self) -> Vec<CountryOption<'_>> {
        std::iter::once(CountryOption {
            value: "",
            label: COUNTRY_PLACEHOLDER,
        })
        .chain(self.iter().map(|country| CountryOption {
            value: country,
            label: country,
        }))
        .collect()
    }
}

/// Result of the most recent submission.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Pending,
    Succeeded(f64),
    Failed(String),
}

impl PredictionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<Result<f64, String>> for PredictionOutcome {
    fn from(result: Result<f64, String>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(message) => Self::Failed(message),
        }
    }
}

/// State transitions of the prediction view.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    CountriesLoaded(Vec<String>),
    UpdateField(FormField, String),
    SubmitStarted,
    /// Prediction value, or the message for the error panel
    SubmitFinished(Result<f64, String>),
}

/// Everything the prediction view renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionSession {
    form: PredictionForm,
    countries: CountryList,
    outcome: Option<PredictionOutcome>,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &PredictionForm {
        &self.form
    }

    pub fn countries(&self) -> &CountryList {
        &self.countries
    }

    /// `None` until the first submission starts.
    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.outcome
            .as_ref()
            .is_some_and(PredictionOutcome::is_pending)
    }

    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::CountriesLoaded(countries) => {
                tracing::debug!("Loaded {} countries", countries.len());
                self.countries = CountryList::new(countries);
            }
            SessionAction::UpdateField(field, value) => {
                if let Err(e) = self.form.set(field, value) {
                    tracing::warn!("Ignoring field update: {}", e);
                }
            }
            SessionAction::SubmitStarted => {
                self.outcome = Some(PredictionOutcome::Pending);
            }
            SessionAction::SubmitFinished(result) => {
                let outcome = PredictionOutcome::from(result);
                tracing::debug!("Prediction finished: {:?}", outcome);
                self.outcome = Some(outcome);
            }
        }
    }

    /// Text of the result panel, shown only after a successful prediction.
    pub fn result_panel(&self) -> Option<String> {
        match &self.outcome {
            Some(PredictionOutcome::Succeeded(value)) => Some(format_prediction(*value)),
            _ => None,
        }
    }

    /// Text of the error panel, shown only after a failed prediction.
    pub fn error_panel(&self) -> Option<&str> {
        match &self.outcome {
            Some(PredictionOutcome::Failed(message)) => Some(message),
            _ => None,
        }
    }
}

/// Single-flight gate for prediction requests of one view instance.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard(Rc<Cell<bool>>);

/// Held while a request is in flight; dropping it reopens the guard.
#[derive(Debug)]
pub struct SubmitTicket(Rc<Cell<bool>>);

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }

    pub fn try_acquire(&self) -> Option<SubmitTicket> {
        if self.0.replace(true) {
            return None;
        }
        Some(SubmitTicket(Rc::clone(&self.0)))
    }
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Runs one prediction round trip: Pending, then exactly one of Succeeded / Failed.
///
/// Returns `false` without calling `send` when another submission holds the guard.
pub async fn submit<D, S, Fut>(
    guard: &SubmitGuard,
    form: PredictionForm,
    dispatch: D,
    send: S,
) -> bool
where
    D: Fn(SessionAction),
    S: FnOnce(PredictionForm) -> Fut,
    Fut: Future<Output = Result<f64, String>>,
{
    let Some(_ticket) = guard.try_acquire() else {
        tracing::debug!("Prediction already in flight, ignoring submit");
        return false;
    };

    dispatch(SessionAction::SubmitStarted);
    let result = send(form).await;
    dispatch(SessionAction::SubmitFinished(result));
    true
}

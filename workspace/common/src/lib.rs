//! Common types shared between the development server and the frontend.
//! The transport structs mirror the prediction service payloads, and the
//! session module holds the target-independent state of the prediction form
//! so it can be tested without a browser.

mod api;
mod form;
mod session;

pub use api::{
    CountriesResponse, ErrorDetail, FALLBACK_ERROR_MESSAGE, PredictionResponse, detail_from_body,
    failure_message, format_prediction,
};
pub use form::{FormError, FormField, Gender, PredictionForm, PredictionModel};
pub use session::{
    COUNTRY_PLACEHOLDER, CountryList, CountryOption, PredictionOutcome, PredictionSession,
    SessionAction, SubmitGuard, SubmitTicket, submit,
};

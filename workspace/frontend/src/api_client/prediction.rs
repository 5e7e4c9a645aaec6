use common::{CountriesResponse, PredictionForm, PredictionResponse};
use crate::api_client::{self, ApiError};

/// Get the selectable country names
pub async fn get_countries() -> Result<Vec<String>, ApiError> {
    log::trace!("Fetching country list");
    let result = api_client::get::<CountriesResponse>("/api/countries").await;
    match &result {
        Ok(response) => log::info!("Fetched {} countries", response.countries.len()),
        Err(e) => log::error!("Failed to fetch countries: {}", e),
    }
    result.map(|response| response.countries)
}

/// Ask the remote service for a life expectancy prediction
pub async fn predict(form: &PredictionForm) -> Result<f64, ApiError> {
    log::debug!(
        "Requesting prediction: country={}, year={}, model={}",
        form.country,
        form.year,
        form.model
    );
    let result = api_client::post::<PredictionResponse, _>("/api/predict", form).await;
    match &result {
        Ok(response) => log::info!("Received prediction: {}", response.prediction),
        Err(e) => log::error!("Failed to get prediction: {}", e),
    }
    result.map(|response| response.prediction)
}

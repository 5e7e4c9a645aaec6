use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors raised when a form field receives a value it cannot hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The input `name` attribute does not match any form field
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Gender must be either "Male" or "Female"
    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    /// Model id is not one of the supported prediction models
    #[error("Invalid prediction model: {0}")]
    InvalidModel(String),
}

/// Gender selector value, sent as the capitalized word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(value: &str) -> Result<Self, FormError> {
        match value {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(FormError::InvalidGender(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regression model the remote service should use for the prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PredictionModel {
    Linear,
    Gradient,
    RandomForest,
    #[default]
    Ensemble,
}

impl PredictionModel {
    /// All models in the order they are offered to the user.
    pub const ALL: [PredictionModel; 4] = [
        PredictionModel::Linear,
        PredictionModel::Gradient,
        PredictionModel::RandomForest,
        PredictionModel::Ensemble,
    ];

    /// Wire identifier, also used as the radio input value.
    pub fn id(&self) -> &'static str {
        match self {
            PredictionModel::Linear => "linear",
            PredictionModel::Gradient => "gradient",
            PredictionModel::RandomForest => "random_forest",
            PredictionModel::Ensemble => "ensemble",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PredictionModel::Linear => "Linear Regression",
            PredictionModel::Gradient => "Gradient Boosting",
            PredictionModel::RandomForest => "Random Forest",
            PredictionModel::Ensemble => "Ensemble Model",
        }
    }

    pub fn parse(value: &str) -> Result<Self, FormError> {
        Self::ALL
            .into_iter()
            .find(|model| model.id() == value)
            .ok_or_else(|| FormError::InvalidModel(value.to_string()))
    }
}

impl fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Identifies one input of the prediction form by its `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Year,
    Country,
    Gender,
    TuberculosisTreatment,
    HospitalBeds,
    UrbanPopulation,
    RuralPopulation,
    Gdp,
    Model,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Year,
        FormField::Country,
        FormField::Gender,
        FormField::TuberculosisTreatment,
        FormField::HospitalBeds,
        FormField::UrbanPopulation,
        FormField::RuralPopulation,
        FormField::Gdp,
        FormField::Model,
    ];

    /// Input name, identical to the JSON key in the request body.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Year => "year",
            FormField::Country => "country",
            FormField::Gender => "gender",
            FormField::TuberculosisTreatment => "tuberculosisTreatment",
            FormField::HospitalBeds => "hospitalBeds",
            FormField::UrbanPopulation => "urbanPopulation",
            FormField::RuralPopulation => "ruralPopulation",
            FormField::Gdp => "gdp",
            FormField::Model => "model",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, FormError> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Human readable label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Year => "Year",
            FormField::Country => "Country",
            FormField::Gender => "Gender",
            FormField::TuberculosisTreatment => "Tuberculosis Treatment",
            FormField::HospitalBeds => "Hospital Beds",
            FormField::UrbanPopulation => "Urban Population",
            FormField::RuralPopulation => "Rural Population",
            FormField::Gdp => "GDP",
            FormField::Model => "Select Model",
        }
    }
}

/// Request body for `POST /api/predict`.
///
/// Numeric inputs are kept exactly as typed; the remote service does the parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictionForm {
    pub year: String,
    pub country: String,
    pub gender: Gender,
    pub tuberculosis_treatment: String,
    pub hospital_beds: String,
    pub urban_population: String,
    pub rural_population: String,
    pub gdp: String,
    pub model: PredictionModel,
}

impl PredictionForm {
    /// Current value of `field` as shown in its input.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Year => &self.year,
            FormField::Country => &self.country,
            FormField::Gender => self.gender.as_str(),
            FormField::TuberculosisTreatment => &self.tuberculosis_treatment,
            FormField::HospitalBeds => &self.hospital_beds,
            FormField::UrbanPopulation => &self.urban_population,
            FormField::RuralPopulation => &self.rural_population,
            FormField::Gdp => &self.gdp,
            FormField::Model => self.model.id(),
        }
    }

    /// Sets a single field. Enumerated fields reject unknown values and keep their old value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            FormField::Year => self.year = value,
            FormField::Country => self.country = value,
            FormField::Gender => self.gender = Gender::parse(&value)?,
            FormField::TuberculosisTreatment => self.tuberculosis_treatment = value,
            FormField::HospitalBeds => self.hospital_beds = value,
            FormField::UrbanPopulation => self.urban_population = value,
            FormField::RuralPopulation => self.rural_population = value,
            FormField::Gdp => self.gdp = value,
            FormField::Model => self.model = PredictionModel::parse(&value)?,
        }
        Ok(())
    }
}

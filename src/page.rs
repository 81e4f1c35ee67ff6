//! Page Parameters
//!
//! The menu page is addressed by a URL carrying `meal` and `loc` query parameters.

use reqwest::Url;
use thiserror::Error;

use crate::payload::MenuRequest;

/// Query parameter naming the meal.
pub const MEAL_PARAM: &str = "meal";

/// Query parameter naming the location.
pub const LOCATION_PARAM: &str = "loc";

/// Errors reading page parameters.
#[derive(Debug, Error)]
pub enum PageError {
    /// The page URL could not be parsed.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// A required query parameter is absent.
    #[error("Missing query parameter: {0}")]
    MissingParam(&'static str),
}

/// Meal and location selected for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    /// Meal name.
    pub meal: String,

    /// Location name, percent-decoded.
    pub location: String,
}

impl PageParams {
    /// Create parameters directly.
    pub fn new(meal: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            meal: meal.into(),
            location: location.into(),
        }
    }

    /// Read `meal` and `loc` from a page URL. The last occurrence of a parameter wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or either parameter is missing.
    pub fn from_url(url: &str) -> Result<Self, PageError> {
        let url = Url::parse(url).map_err(|err| PageError::InvalidUrl(err.to_string()))?;

        let mut meal = None;
        let mut location = None;

        for (key, value) in url.query_pairs() {
            match &*key {
                MEAL_PARAM => meal = Some(value.into_owned()),
                LOCATION_PARAM => location = Some(value.into_owned()),
                _ => {}
            }
        }

        Ok(Self {
            meal: meal.ok_or(PageError::MissingParam(MEAL_PARAM))?,
            location: location.ok_or(PageError::MissingParam(LOCATION_PARAM))?,
        })
    }

    /// Header line shown above the menu, e.g. `Dining Hall - Lunch`.
    pub fn header_text(&self) -> String {
        format!("{} - {}", self.location, self.meal)
    }

    /// Request body for the menu endpoint.
    pub fn menu_request(&self) -> MenuRequest {
        MenuRequest {
            meal: self.meal.clone(),
            location: self.location.clone(),
        }
    }
}

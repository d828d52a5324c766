use campground_list::CampgroundRow;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response structure for listing campgrounds
#[derive(Debug, Serialize)]
pub struct ListCampgroundsResponse {
    /// Display rows in list order
    pub campgrounds: Vec<CampgroundRow>,
    /// Total count of campgrounds
    pub total: usize,
    /// When the list was last refreshed from the API
    pub updated_at: Option<DateTime<Utc>>,
}

/// Custom error type for campground endpoints
#[derive(thiserror::Error, Debug)]
pub enum CampgroundError {
    /// No campground at the requested position
    #[error("Campground not found")]
    NotFound,
}

impl actix_web::ResponseError for CampgroundError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::HttpResponse;

        match self {
            CampgroundError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
                "error": "campground_not_found",
                "message": "Campground not found"
            })),
        }
    }
}

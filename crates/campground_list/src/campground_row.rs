use nps::Campground;
use serde::Serialize;

/// One displayed row of the campground list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampgroundRow {
    /// Campground name
    pub name: Option<String>,
    /// Campground description
    pub description: Option<String>,
    /// Coordinates formatted as `(lat, lng)`
    pub lat_long: String,
    /// Thumbnail URL
    pub image_url: Option<String>,
}

impl From<&Campground> for CampgroundRow {
    fn from(campground: &Campground) -> Self {
        Self {
            name: campground.name.clone(),
            description: campground.description.clone(),
            lat_long: campground.lat_long(),
            image_url: campground.image_url().map(str::to_string),
        }
    }
}

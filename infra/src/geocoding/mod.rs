//! Geocoding module - Google Places autocomplete and place details

pub mod google_places;

pub use google_places::GooglePlacesService;

#[cfg(test)]
mod tests;

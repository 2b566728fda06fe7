use serde::Deserialize;

/// Query string of `GET /api/autocomplete-address`
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub input: String,
}

/// Query string of `GET /api/place-details`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsQuery {
    #[serde(default)]
    pub place_id: String,
}

//! The fixed enumerated set of jurisdiction labels offered by the selector.

use axum::Json;

/// Country/region labels shown in the form selector. The empty default option
/// lives in the page itself, not here.
pub const JURISDICTIONS: &[&str] = &[
    "Africa",
    "Brazil",
    "Bangladesh",
    "China",
    "Democratic Republic of the Congo",
    "Europe",
    "France",
    "Germany",
    "India",
    "Japan",
    "Korea, North",
    "Liberia",
    "Mexico",
    "Nigeria",
    "Oman",
    "Pakistan",
    "Qatar",
    "Russia",
    "Saudi Arabia",
    "Turkey",
    "United Kingdom",
    "United States of America",
    "Vietnam",
    "Yemen",
    "Zambia",
];

/// GET /api/v1/jurisdictions
///
/// Returns the fixed list of country labels for the form selector.
pub async fn handle_list_jurisdictions() -> Json<&'static [&'static str]> {
    Json(JURISDICTIONS)
}

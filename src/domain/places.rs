//! Places - Default item list for the ListGroup

use gpui::SharedString;

/// Places shown when the config does not override them
pub fn default_places() -> Vec<SharedString> {
    ["New York", "San Francisco", "Tokyo", "London", "Paris"]
        .into_iter()
        .map(SharedString::from)
        .collect()
}

/// Turn configured strings into display items
pub fn places_from(names: &[String]) -> Vec<SharedString> {
    names.iter().map(|n| SharedString::from(n.clone())).collect()
}

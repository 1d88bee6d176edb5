//! Shared test helpers for template engine tests

use crate::template::value::{FieldValue, ValueMap};

/// Build a value map from `(key, text)` pairs
pub(super) fn text_values(pairs: &[(&str, &str)]) -> ValueMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
        .collect()
}

/// A small invitation card used across rendering tests
pub(super) fn invitation_html() -> &'static str {
    "<h1>{{couple_names}}</h1>\n\
     <p>Join us on {{event_date}} at {{venue_address}}.</p>\n\
     <p>Dear {{guest_name}}, please RSVP to {{rsvp_email}}.</p>\n\
     <footer>{{couple_names}}</footer>"
}

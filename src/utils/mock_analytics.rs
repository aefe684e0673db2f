//! Mock traffic attribution for simulated clicks.

use rand::seq::IndexedRandom;

/// Traffic sources a simulated click can be attributed to.
pub const SOURCES: &[&str] = &[
    "Direct",
    "Google Search",
    "Facebook",
    "Twitter",
    "LinkedIn",
    "WhatsApp",
    "Email",
];

/// Visitor locations a simulated click can be attributed to.
pub const LOCATIONS: &[&str] = &[
    "New York, USA",
    "London, UK",
    "Tokyo, Japan",
    "Sydney, Australia",
    "Mumbai, India",
    "Berlin, Germany",
    "São Paulo, Brazil",
    "Toronto, Canada",
];

pub fn random_source() -> &'static str {
    pick(SOURCES)
}

pub fn random_location() -> &'static str {
    pick(LOCATIONS)
}

fn pick(values: &'static [&'static str]) -> &'static str {
    values.choose(&mut rand::rng()).copied().unwrap_or("Unknown")
}

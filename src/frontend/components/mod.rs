//! Leptos components for the homepage features section

mod feature;
mod homepage_features;

pub use feature::Feature;
pub use homepage_features::HomepageFeatures;

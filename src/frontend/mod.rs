//! Leptos rendering of the features section, for hosts that build their
//! pages with Leptos SSR.

pub mod components;

mod errors;
pub mod html;
pub mod logging;
mod macros;

pub use errors::SiteError;

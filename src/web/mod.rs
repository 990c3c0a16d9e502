pub mod handlers;
pub mod helpers;
pub mod routes;
pub mod state;

pub use state::AppState;

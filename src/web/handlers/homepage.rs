use actix_web::{get, web, Responder};

use homepage_features::render::{render_page, render_section};

use crate::web::helpers::html_response;
use crate::web::state::AppState;

#[get("/")]
pub async fn homepage(state: web::Data<AppState>) -> impl Responder {
    html_response(render_page(&state.features, &state.styles, &state.page))
}

/// The bare section, for embedding into another page.
#[get("/features")]
pub async fn features_fragment(state: web::Data<AppState>) -> impl Responder {
    html_response(render_section(&state.features, &state.styles))
}

use actix_web::web;

use crate::web::handlers::{features_fragment, homepage};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(homepage).service(features_fragment);
}

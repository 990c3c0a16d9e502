use actix_web::HttpResponse;

use homepage_features::common::SiteError;

pub fn html_response(rendered: Result<String, SiteError>) -> HttpResponse {
    match rendered {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            homepage_features::log_err!(e, "rendering features");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

mod web;

use std::fs;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use homepage_features::common::{logging, SiteError};
use homepage_features::config::{Mode, SiteConfig};
use homepage_features::render::{render_page, PageMeta};

#[actix_web::main]
async fn main() -> Result<(), SiteError> {
    logging::init();

    if let Err(e) = run(std::env::args().nth(1)).await {
        homepage_features::log_err!(e, "homepage-features");
        return Err(e);
    }

    Ok(())
}

async fn run(arg: Option<String>) -> Result<(), SiteError> {
    let config = SiteConfig::from_env()?;
    let (mode, state) = startup(&config, arg)?;

    match mode {
        Mode::Render => render(&config, &state),
        Mode::Serve => serve(config, state).await,
    }
}

/// Resolves the command and loads the feature list.
fn startup(config: &SiteConfig, arg: Option<String>) -> Result<(Mode, web::AppState), SiteError> {
    let mode = match arg {
        Some(arg) => arg.parse::<Mode>()?,
        None => Mode::default(),
    };

    let state = web::AppState {
        features: config.feature_list()?,
        styles: config.styles.clone(),
        page: PageMeta::default(),
    };

    Ok((mode, state))
}

fn render(config: &SiteConfig, state: &web::AppState) -> Result<(), SiteError> {
    let html = render_page(&state.features, &state.styles, &state.page)?;

    match &config.output_path {
        Some(path) => {
            fs::write(path, html)?;
            log::info!("Wrote homepage to {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}

async fn serve(config: SiteConfig, state: web::AppState) -> Result<(), SiteError> {
    let state = Data::new(state);
    let static_dir = config.static_dir.clone();

    log::info!("Serving homepage preview at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(web::routes::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}

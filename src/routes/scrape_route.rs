use actix_web::{post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use url::Url;

use crate::{
    routes::default_route::{Banner, IndexTemplate},
    services::{scrape_website, Droid},
};

const CLEAN_TEXT_DISPLAY_LIMIT: usize = 5000;
const RAW_HTML_DISPLAY_LIMIT: usize = 3000;

#[derive(Deserialize)]
pub struct ScrapeFormBody {
    url: String,
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    url: String,
    title: String,
    clean_text_display: String,
    raw_html_display: String,
    clean_text_chars: usize,
    raw_html_chars: usize,
}

#[post("/scrape")]
async fn scrape(droid: web::Data<Droid>, body: web::Form<ScrapeFormBody>) -> HttpResponse {
    let submitted_url = body.url.trim();

    if Url::parse(submitted_url).is_err() {
        return render_form_with(Banner::warning("Please enter a valid URL."));
    }

    let driver = match droid.handle().await {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Failed to initialize chrome session: {:?}", e);
            return render_form_with(Banner::error(&format!(
                "Failed to initialize web driver: {}",
                e
            )));
        }
    };

    let result = scrape_website(submitted_url, driver, droid.settle_wait()).await;

    if !result.is_success() {
        return render_form_with(Banner::error(&format!("Scraping failed: {}", result.status)));
    }

    let template = ResultTemplate {
        url: submitted_url.to_string(),
        title: result.title,
        clean_text_chars: result.clean_text.chars().count(),
        raw_html_chars: result.raw_html.chars().count(),
        clean_text_display: truncate_for_display(&result.clean_text, CLEAN_TEXT_DISPLAY_LIMIT),
        raw_html_display: truncate_for_display(&result.raw_html, RAW_HTML_DISPLAY_LIMIT),
    };

    HttpResponse::Ok().body(template.render().unwrap())
}

fn render_form_with(banner: Banner) -> HttpResponse {
    let page = IndexTemplate {
        banner: Some(banner),
    };

    HttpResponse::Ok().body(page.render().unwrap())
}

fn truncate_for_display(content: &str, limit: usize) -> String {
    match content.chars().count() > limit {
        true => {
            let truncated: String = content.chars().take(limit).collect();
            format!("{}...", truncated)
        }
        false => content.to_string(),
    }
}

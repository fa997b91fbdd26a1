use std::time::Duration;

use scraper::Html;
use thirtyfour::{error::WebDriverError, WebDriver};

use crate::domain::{extract_clean_text, extract_title, ScrapeResult};

/// Loads `url` in the shared browser session and extracts its title, clean
/// text, and raw source. Failures come back inside the result's status
/// field; this never returns an error to the caller.
pub async fn scrape_website(url: &str, driver: &WebDriver, settle_wait: Duration) -> ScrapeResult {
    log::info!("Loading {}", url);

    match load_page(url, driver, settle_wait).await {
        Ok(page_source) => build_result(page_source),
        Err(e) => {
            log::error!("Failed to scrape {}: {}", url, e);
            ScrapeResult::error(&e.to_string())
        }
    }
}

async fn load_page(
    url: &str,
    driver: &WebDriver,
    settle_wait: Duration,
) -> Result<String, WebDriverError> {
    driver.goto(url).await?;

    // Blind wait for client-side rendering to settle, not a readiness check.
    tokio::time::sleep(settle_wait).await;

    driver.source().await
}

fn build_result(page_source: String) -> ScrapeResult {
    let document = Html::parse_document(&page_source);

    let title = extract_title(&document);
    let clean_text = extract_clean_text(&document);

    ScrapeResult::success(title, page_source, clean_text)
}

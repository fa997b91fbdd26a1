use std::time::Duration;

use anyhow::Context;
use thirtyfour::{ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tokio::sync::OnceCell;

use crate::configuration::WebdriverSettings;

// Flags matching what a containerized chrome needs to start at all: no GPU,
// no sandbox, no /dev/shm, no extensions, and cross-origin fetches allowed.
const CHROME_ARGS: [&str; 6] = [
    "--headless",
    "--disable-gpu",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-extensions",
    "--disable-web-security",
];

pub struct Droid {
    settings: WebdriverSettings,
    session: OnceCell<WebDriver>,
}

impl Droid {
    pub fn new(settings: WebdriverSettings) -> Self {
        Droid {
            settings,
            session: OnceCell::new(),
        }
    }

    /// Returns the shared browser session, connecting on first use.
    ///
    /// A failed connect leaves the cell empty, so only the current request
    /// fails and the next one retries initialization.
    pub async fn handle(&self) -> anyhow::Result<&WebDriver> {
        self.session.get_or_try_init(|| self.connect()).await
    }

    pub fn settle_wait(&self) -> Duration {
        Duration::from_secs(self.settings.page_load_wait_secs)
    }

    async fn connect(&self) -> anyhow::Result<WebDriver> {
        let caps = build_capabilities()?;

        let driver = WebDriver::new(&self.settings.server_url, caps)
            .await
            .with_context(|| {
                format!(
                    "Failed to start a chrome session at {}",
                    self.settings.server_url
                )
            })?;
        log::info!("Started headless chrome session");

        Ok(driver)
    }
}

fn build_capabilities() -> anyhow::Result<ChromeCapabilities> {
    let mut caps = DesiredCapabilities::chrome();
    for arg in CHROME_ARGS {
        caps.add_arg(arg)?;
    }

    Ok(caps)
}

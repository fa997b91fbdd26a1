pub mod droid;
pub mod page_scraper;

pub use droid::*;
pub use page_scraper::*;

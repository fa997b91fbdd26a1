pub mod page_content;
pub mod scrape_result;

pub use page_content::*;
pub use scrape_result::*;

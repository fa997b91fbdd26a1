pub struct ScrapeResult {
    pub title: String,
    pub raw_html: String,
    pub clean_text: String,
    pub status: String,
}

impl ScrapeResult {
    pub fn success(title: String, raw_html: String, clean_text: String) -> Self {
        ScrapeResult {
            title,
            raw_html,
            clean_text,
            status: "success".to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        ScrapeResult {
            title: String::new(),
            raw_html: String::new(),
            clean_text: String::new(),
            status: format!("error: {}", message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::ScrapeResult;

    #[test]
    fn error_result_empties_content_fields() {
        let result = ScrapeResult::error("connection refused");

        assert!(result.status.starts_with("error: "));
        assert_eq!(result.status, "error: connection refused");
        assert!(result.title.is_empty());
        assert!(result.raw_html.is_empty());
        assert!(result.clean_text.is_empty());
        assert!(!result.is_success());
    }

    #[test]
    fn success_result_reports_success() {
        let result = ScrapeResult::success(
            "Demo".to_string(),
            "<html></html>".to_string(),
            "Demo".to_string(),
        );

        assert_eq!(result.status, "success");
        assert!(result.is_success());
    }
}

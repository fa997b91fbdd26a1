use scraper::{Html, Selector};

const NO_TITLE_FALLBACK: &str = "No title found";

/// Trimmed text of the first `<title>` element anywhere in the document.
pub fn extract_title(document: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();

    document
        .select(&title_selector)
        .next()
        .map(|tag| tag.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_TITLE_FALLBACK.to_string())
}

/// Flattens the document's visible text into one fragment per line: lines
/// are split on runs of two spaces, fragments trimmed, empty ones dropped.
pub fn extract_clean_text(document: &Html) -> String {
    let text = visible_text(document);

    let fragments = text
        .lines()
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty());

    fragments.collect::<Vec<&str>>().join("\n")
}

// Text nodes under script/style tags carry code, not page content.
fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        if let Some(fragment) = node.value().as_text() {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| matches!(element.name(), "script" | "style"))
            });
            if !hidden {
                text.push_str(fragment);
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{extract_clean_text, extract_title};

    #[test]
    fn extract_title_trims_first_title_tag() {
        let document = Html::parse_document(
            "<html><head><title> Demo </title></head><body><p>hi</p></body></html>",
        );

        assert_eq!(extract_title(&document), "Demo");
    }

    #[test]
    fn extract_title_falls_back_when_missing() {
        let document = Html::parse_document("<html><body><p>plain page</p></body></html>");

        assert_eq!(extract_title(&document), "No title found");
    }

    #[test]
    fn clean_text_skips_script_and_style_content() {
        let document = Html::parse_document(
            "<html><body>\
             <style>p { color: red; }</style>\
             <script>var secret = 42;</script>\
             <p>Visible paragraph</p>\
             </body></html>",
        );
        let clean_text = extract_clean_text(&document);

        assert!(clean_text.contains("Visible paragraph"));
        assert!(!clean_text.contains("secret"));
        assert!(!clean_text.contains("color"));
    }

    #[test]
    fn clean_text_splits_double_spaced_fragments_onto_lines() {
        let document =
            Html::parse_document("<html><body><p>Hello  World</p></body></html>");

        assert_eq!(extract_clean_text(&document), "Hello\nWorld");
    }

    #[test]
    fn clean_text_has_no_blank_lines() {
        let document = Html::parse_document(
            "<html><body><div>   </div>\n<p>one</p>\n\n<p>two</p>\n<span></span></body></html>",
        );
        let clean_text = extract_clean_text(&document);

        assert!(!clean_text.is_empty());
        assert!(clean_text.lines().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn clean_text_trims_fragments_inside_lines() {
        let document = Html::parse_document(
            "<html><body><p>  spaced out  </p><p>a   b</p></body></html>",
        );
        let clean_text = extract_clean_text(&document);

        assert_eq!(clean_text, "spaced out\na\nb");
    }
}

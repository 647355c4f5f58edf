//! Marker-phrase classification of event pages.

use scraper::{Html, Selector};

use crate::error::{CheckError, CheckResult};
use crate::status::Status;

/// Shown while the event page has not opened sales yet.
pub const SALE_STARTS_SOON_MARKER: &str = "Ticket sales start soon!";

/// Shown once tickets can be bought.
pub const BUY_TICKETS_MARKER: &str = "Buy Tickets here";

/// Classify page text by the two marker phrases.
///
/// The markers are mutually exclusive on a well-formed page, so both present
/// or both absent is reported as `Unclear`.
pub fn classify(page_text: &str) -> Status {
    let sale_starts_soon = page_text.contains(SALE_STARTS_SOON_MARKER);
    let can_buy_tickets = page_text.contains(BUY_TICKETS_MARKER);

    match (sale_starts_soon, can_buy_tickets) {
        (true, false) => Status::NotAvailable,
        (false, true) => Status::Available,
        (false, false) | (true, true) => Status::Unclear,
    }
}

/// Parse fetched markup and classify the text of its `<body>`.
pub fn classify_page(url: &str, html: &str) -> CheckResult<Status> {
    let document = Html::parse_document(html);
    let body_selector =
        Selector::parse("body").map_err(|e| CheckError::parse(url, e.to_string()))?;

    let body = document
        .select(&body_selector)
        .next()
        .ok_or_else(|| CheckError::parse(url, "page has no <body>"))?;

    // Text nodes joined so a marker never spans two unrelated elements
    let text = body.text().collect::<Vec<_>>().join("\n");

    Ok(classify(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://hyrox.com/event/hyrox-anaheim/";

    #[test]
    fn test_neither_marker_is_unclear() {
        assert_eq!(classify(""), Status::Unclear);
        assert_eq!(classify("Event details coming soon"), Status::Unclear);
    }

    #[test]
    fn test_both_markers_is_unclear() {
        let text = "Ticket sales start soon! ... Buy Tickets here";
        assert_eq!(classify(text), Status::Unclear);
    }

    #[test]
    fn test_sale_starts_soon_only_is_not_available() {
        assert_eq!(
            classify("HYROX Anaheim\nTicket sales start soon!\nStay tuned"),
            Status::NotAvailable
        );
    }

    #[test]
    fn test_buy_tickets_only_is_available() {
        assert_eq!(classify("HYROX Anaheim\nBuy Tickets here"), Status::Available);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(classify("buy tickets here"), Status::Unclear);
        assert_eq!(classify("TICKET SALES START SOON!"), Status::Unclear);
    }

    #[test]
    fn test_classify_page_nested_marker() {
        let html = r#"<html><body><div class="cta"><a href="/tickets"><span>Buy Tickets here</span></a></div></body></html>"#;
        assert_eq!(classify_page(URL, html).unwrap(), Status::Available);
    }

    #[test]
    fn test_classify_page_sale_starts_soon() {
        let html = r#"<html><body><section><h2>Ticket sales start soon!</h2></section></body></html>"#;
        assert_eq!(classify_page(URL, html).unwrap(), Status::NotAvailable);
    }

    #[test]
    fn test_classify_page_ignores_head() {
        let html = r#"<html><head><title>Buy Tickets here</title></head><body><p>Welcome</p></body></html>"#;
        assert_eq!(classify_page(URL, html).unwrap(), Status::Unclear);
    }

    #[test]
    fn test_classify_page_markers_in_separate_elements_do_not_merge() {
        let html = r#"<html><body><p>Buy Tickets</p><p>here</p></body></html>"#;
        assert_eq!(classify_page(URL, html).unwrap(), Status::Unclear);
    }

    #[test]
    fn test_classify_page_tolerates_malformed_markup() {
        let html = "<div><p>Ticket sales start soon!<p><span>";
        assert_eq!(classify_page(URL, html).unwrap(), Status::NotAvailable);
    }
}

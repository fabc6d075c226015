use scraper::{Html, Selector};

use crate::{FetchError, FetchFailure};

/// Collects the text content of the first node matching `selector`.
///
/// Text nodes are concatenated in document order, the way a browser's
/// `element.text` reads, then trimmed of surrounding whitespace.
pub fn select_text(html: &str, selector: &str) -> Result<String, FetchError> {
    let selector = Selector::parse(selector).map_err(|err| {
        FetchError::new(FetchFailure::InvalidSelector, err.to_string())
    })?;

    let doc = Html::parse_document(html);
    let node = doc.select(&selector).next().ok_or_else(|| {
        FetchError::new(
            FetchFailure::SelectorNotMatched,
            "selector matched no element in the fetched document",
        )
    })?;

    Ok(node.text().collect::<String>().trim().to_string())
}

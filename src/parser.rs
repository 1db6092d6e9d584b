use scraper::{ElementRef, Html, Selector};

use crate::models::Review;

pub const SCRAPED_DATE: &str = "2023-01-01";
pub const SCRAPED_SOURCE: &str = "G2";
const MAX_BLOCKS: usize = 3;

/// Pull reviews out of a G2 review page.
///
/// Only the first three `div.paper` blocks are looked at; a block without
/// both an `h3` and a `p` is dropped, so fewer than three may come back.
pub fn parse_reviews(html: &str) -> Vec<Review> {
    let doc = Html::parse_document(html);
    let block_selector = Selector::parse("div.paper").expect("valid selector");
    let title_selector = Selector::parse("h3").expect("valid selector");
    let body_selector = Selector::parse("p").expect("valid selector");

    doc.select(&block_selector)
        .take(MAX_BLOCKS)
        .enumerate()
        .filter_map(|(index, block)| {
            let title = first_text(block, &title_selector);
            let body = first_text(block, &body_selector);
            match (title, body) {
                (Some(title), Some(review)) => Some(Review {
                    title,
                    review,
                    date: SCRAPED_DATE.to_string(),
                    source: SCRAPED_SOURCE.to_string(),
                }),
                _ => {
                    tracing::debug!(block = index, "Skipping block without heading and paragraph");
                    None
                }
            }
        })
        .collect()
}

fn first_text(block: ElementRef, selector: &Selector) -> Option<String> {
    block
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
}

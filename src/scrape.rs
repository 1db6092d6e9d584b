use crate::fetcher;
use crate::models::Review;
use crate::parser;

const BASE_URL: &str = "https://www.g2.com/products";

pub fn review_url(base_url: &str, company: &str) -> String {
    format!("{base_url}/{company}/reviews")
}

/// Best-effort scrape of G2. Every failure collapses into an empty list.
pub fn scrape_g2(company: &str) -> Vec<Review> {
    println!("🔍 Trying to scrape real reviews from G2...");
    scrape_from(BASE_URL, company)
}

fn scrape_from(base_url: &str, company: &str) -> Vec<Review> {
    let url = review_url(base_url, company);

    match fetcher::fetch_html(&url) {
        Ok(html) => {
            tracing::debug!(bytes = html.len(), "Received HTML");
            let reviews = parser::parse_reviews(&html);
            tracing::info!(url = %url, reviews = reviews.len(), "Parsed G2 page");
            reviews
        }
        Err(e) => {
            tracing::debug!(url = %url, error = %format!("{e:#}"), "Scrape failed, treating as no data");
            Vec::new()
        }
    }
}

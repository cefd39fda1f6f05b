pub mod extract_title;
pub mod scrape_title;
pub mod title_outcome;

pub mod decode_body;
pub mod fetch_page;

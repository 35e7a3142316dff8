//! University website Q&A bot: curated intents plus TF-IDF retrieval over
//! scraped pages, with a fixed fallback when neither layer is confident.

pub mod bot;
pub mod config;
pub mod intents;
pub mod rank;
pub mod scrape;
pub mod server;

pub mod config;
pub mod extract;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod storage;
pub mod utils;

pub mod core;
pub mod fetcher;

pub mod factory;
pub mod finnhub;
pub mod normalize;
pub mod session;
pub mod traits;
pub mod yahoo_chart;
pub mod yahoo_quote;
pub mod yahoo_scrape;

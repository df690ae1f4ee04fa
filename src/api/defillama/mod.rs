pub mod client;
pub mod models;

pub use client::YieldsClient;
pub use models::find_by_symbol;

pub mod table;
pub mod errors;
pub mod format;
pub mod capital;

pub use table::Table;
pub use errors::AppError;
pub use format::{format_currency, format_percent};
pub use capital::parse_capital;

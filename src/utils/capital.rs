use crate::utils::errors::AppError;

/// Characters treated as thousands separators in capital input
const SEPARATORS: [char; 2] = ['.', ','];

/// Parse a free-form capital amount such as `10.000.000`
///
/// Every `.` and `,` is removed before parsing, so a decimal part is folded
/// into the integer: `10.000.000,50` becomes `1000000050`. Surrounding
/// whitespace is ignored.
pub fn parse_capital(input: &str) -> Result<i64, AppError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();

    cleaned
        .parse::<i64>()
        .map_err(|_| AppError::InputFormat(input.trim().to_string()))
}

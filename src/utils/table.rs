/// Plain-text table for terminal output
///
/// Columns are left-aligned and sized to their widest cell. Cell widths are
/// measured in chars so labels with non-ASCII text still line up.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            col_widths: headers.iter().map(|h| h.chars().count()).collect(),
        }
    }

    /// Add a row; cells beyond the header count are dropped
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let cells: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (i, cell) in cells.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(cell.chars().count());
        }

        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .col_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();

        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(&["Token", "Platform", "APR"]);
        table.add_row(&["LGNS", "Origin DeFi", "100.00%"]);
        table.add_row(&["stETH", "Lido Finance", "3.60%"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Token | Platform     | APR");
        assert_eq!(lines[1], "------+--------------+--------");
        assert_eq!(lines[2], "LGNS  | Origin DeFi  | 100.00%");
        assert_eq!(lines[3], "stETH | Lido Finance | 3.60%");
    }

    #[test]
    fn test_short_rows_are_padded_and_long_rows_truncated() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(&["only"]);
        table.add_row(&["x", "y", "ignored"]);

        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 4);
        assert!(!rendered.contains("ignored"));
        assert!(rendered.contains("only |"));
    }
}

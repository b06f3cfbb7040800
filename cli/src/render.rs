#![deny(missing_docs)]

//! # Console Rendering
//!
//! Banner and grid helpers shared by the reporting commands.

use tabled::builder::Builder;
use tabled::settings::Style;

const BANNER_WIDTH: usize = 80;

/// Prints an `=`-framed section banner.
pub fn banner(title: &str) {
    println!("{}", "=".repeat(BANNER_WIDTH));
    println!("{}", title);
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// Renders rows (the first row being the header) as a rounded grid.
pub fn grid<R>(rows: Vec<R>) -> String
where
    R: IntoIterator,
    R::Item: Into<String>,
{
    Builder::from_iter(rows)
        .build()
        .with(Style::rounded())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_contains_cells() {
        let rows = vec![
            ["Name".to_string(), "Count".to_string()],
            ["People".to_string(), "3".to_string()],
        ];
        let rendered = grid(rows);
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("People"));
        assert!(rendered.contains('3'));
    }
}

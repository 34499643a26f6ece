//! Output formatting for CLI

use crate::game::{BOARD_SIZE, Board, Position};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a count with its share of `total` as a percentage
pub fn format_count(count: usize, total: usize) -> String {
    if total == 0 {
        return count.to_string();
    }
    format!("{count} ({:.1}%)", count as f64 * 100.0 / total as f64)
}

/// Board with row and column labels, drawn with the diagonal spokes
///
/// ```text
///     0   1   2
/// 0   A - A - A
///     | \ | / |
/// 1   . - . - .
///     | / | \ |
/// 2   B - B - B
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| board.cells[row * BOARD_SIZE + col].to_char().to_string())
            .collect();
        out.push_str(&format!("{row}   {}\n", cells.join(" - ")));
        match row {
            0 => out.push_str("    | \\ | / |\n"),
            1 => out.push_str("    | / | \\ |\n"),
            _ => {}
        }
    }
    out
}

/// Comma-separated list of positions
pub fn format_positions(positions: &[Position]) -> String {
    positions
        .iter()
        .map(|p| format!("({p})"))
        .collect::<Vec<_>>()
        .join(", ")
}

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

use crate::types::histogram::RankedList;

pub const DEFAULT_BAR_WIDTH: usize = 50;
pub const MAX_BAR_WIDTH: usize = 500;

const TITLE: &str = "Word Frequency Histogram";
const BAR: char = '█';
const EMPTY_LABEL: &str = "(empty)";

fn label(token: &str) -> &str {
    if token.is_empty() {
        EMPTY_LABEL
    } else {
        token
    }
}

/// Cells for `count`, scaled so `max` fills `width`. Non-zero counts get at least one cell.
fn bar_cells(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let width = width.min(MAX_BAR_WIDTH);
    // u128 holds count * width for any usize count once width is capped
    let cells = (count as u128 * width as u128 + max as u128 / 2) / max as u128;
    cells.clamp(1, width as u128) as usize
}

/// Horizontal bar chart of the ranked entries, one row per token.
pub fn render_bar_chart(list: &RankedList, max_bar_width: usize) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');

    if list.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_width = list
        .iter()
        .map(|e| UnicodeWidthStr::width(label(&e.token)))
        .max()
        .unwrap_or(0);
    let max = list.max_count();

    for entry in list {
        let name = label(&entry.token);
        // `{:<N}` pads by char count, not display width
        let padding = label_width - UnicodeWidthStr::width(name);
        let bar: String = std::iter::repeat(BAR)
            .take(bar_cells(entry.count, max, max_bar_width))
            .collect();

        let _ = writeln!(
            out,
            "{}{} | {} {}",
            name,
            " ".repeat(padding),
            bar,
            entry.count
        );
    }

    out
}

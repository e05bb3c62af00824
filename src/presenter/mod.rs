pub mod chart;

pub use chart::{render_bar_chart, DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH};

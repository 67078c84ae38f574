//! Contracts for the rendering collaborators. The visual side (cloud
//! drawing, chart layout) lives outside this crate; the session only hands
//! over prepared data, and only when there is data to hand over.

/// Draws a word cloud from the flat, duplicate-preserving word list.
pub trait WordCloudRenderer {
    fn render(&mut self, words: &[String]);
}

/// Draws an ordered bar chart: label on one axis, value on the other.
/// The hover tooltip for each bar is the same (label, value) pair.
pub trait BarChartRenderer {
    fn render(&mut self, rows: &[(String, u32)]);
}

//! Fixed-measure line wrapping for the PDF export.
//!
//! The wrap is reversible: joining the wrapped lines of a paragraph with
//! single spaces recovers that paragraph (with runs of whitespace collapsed).
//! Blank lines are preserved as paragraph separators.

/// The fixed horizontal measure, in characters, that exported lines are
/// wrapped to fit.
pub const EXPORT_MEASURE_CHARS: usize = 90;

/// Greedily wraps `text` so no line exceeds `measure` characters, except for
/// a single word longer than the measure, which is kept intact rather than
/// hyphenated.
pub fn wrap_to_measure(text: &str, measure: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= measure {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

// Output rendering.
// Implements: markdown-to-HTML for the response panel, fixed-measure line
// wrapping, and PDF serialization for the export control.

pub mod handlers;
pub mod markdown;
pub mod pdf;
pub mod wrap;

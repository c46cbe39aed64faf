//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Render an optional loop position, `none` for an open-ended sequence
pub fn describe_loop_to(loop_to: Option<usize>) -> String {
    loop_to.map_or_else(|| "none".to_string(), |position| position.to_string())
}

//! Human-readable list formatting for prompts.

use std::fmt::Display;

/// Joins items with `", "` and an `"or"` before the last item.
///
/// Used to offer the open squares at the prompt, e.g. `"1, 2, or 5"`.
pub fn join_or<T: Display>(items: &[T]) -> String {
    join_or_with(items, ", ", "or")
}

/// [`join_or`] with a custom delimiter and join word.
///
/// An empty slice yields an empty string; a single item its plain string
/// form; a pair skips the delimiter entirely (`"1 or 2"`).
pub fn join_or_with<T: Display>(items: &[T], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {word} {second}"),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(delimiter);
            format!("{head}{delimiter}{word} {last}")
        }
    }
}

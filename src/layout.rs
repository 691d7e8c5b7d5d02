//! Greedy word wrapping

use crate::font::Face;

/// Break `text` into lines no wider than `max_width` when drawn with `face`
pub fn wrap_text(text: &str, face: &Face<'_>, max_width: f32) -> Vec<String> {
    wrap(text, max_width, |line| face.measure(line))
}

/// Fill each line with as many whitespace-separated words as fit. A word
/// that is wider than `max_width` on its own still gets a line to itself.
pub fn wrap<M>(text: &str, max_width: f32, measure: M) -> Vec<String>
where
    M: Fn(&str) -> f32,
{
    let mut lines = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = match current.is_empty() {
            true => word.to_owned(),
            false => format!("{current} {word}"),
        };

        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

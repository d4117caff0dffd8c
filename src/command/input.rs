//! One line of user input, kept in both raw and normalized form

use crate::task::{Result, TaskError};

pub const BY_MARKER: &str = "/BY";
pub const FROM_MARKER: &str = "/FROM";
pub const TO_MARKER: &str = "/TO";

/// A trimmed input line plus its uppercased twin.
///
/// Uppercasing is ASCII-only, so a byte offset found in `normalized` is
/// always a valid offset into `raw` and points at the same character.
/// Keywords and markers are located in `normalized`; user-visible text is
/// sliced out of `raw` so it keeps the casing the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input<'a> {
    raw: &'a str,
    normalized: String,
}

impl<'a> Input<'a> {
    pub fn new(line: &'a str) -> Self {
        let raw = line.trim();
        Self {
            raw,
            normalized: raw.to_ascii_uppercase(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The first space-separated word of the normalized line
    pub fn first_word(&self) -> &str {
        match self.normalized.find(' ') {
            Some(space) => &self.normalized[..space],
            None => &self.normalized,
        }
    }

    /// Byte offset of `marker` in the normalized line, searching from `start`
    pub fn find_marker(&self, marker: &str, start: usize) -> Option<usize> {
        self.normalized
            .get(start..)?
            .find(marker)
            .map(|offset| start + offset)
    }

    /// Slice of the raw line between two offsets, trimmed.
    ///
    /// Offsets must come from this same input; `None` if they are out of
    /// order or out of range.
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        self.raw.get(start..end).map(str::trim)
    }

    /// Trimmed raw text from `start` to the end of the line
    pub fn tail(&self, start: usize) -> Option<&'a str> {
        self.slice(start, self.raw.len())
    }

    /// Parse the text after the command word as a 1-based task number.
    pub fn task_number(&self) -> Result<usize> {
        let keyword_len = self.first_word().len();
        let argument = self.normalized[keyword_len..].trim();
        match argument.parse::<usize>() {
            Ok(number) => Ok(number),
            Err(_) => Err(TaskError::InvalidIndex(argument.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_and_trims() {
        let input = Input::new("   todo Buy Milk  ");
        assert_eq!(input.raw(), "todo Buy Milk");
        assert_eq!(input.normalized(), "TODO BUY MILK");
        assert_eq!(input.first_word(), "TODO");
    }

    #[test]
    fn test_single_word_input() {
        assert_eq!(Input::new("list").first_word(), "LIST");
        assert_eq!(Input::new("").first_word(), "");
    }

    #[test]
    fn test_offsets_line_up_with_raw() {
        let input = Input::new("deadline Café run /by Straße");
        let by = input.find_marker(BY_MARKER, 0).unwrap();
        assert_eq!(input.slice("DEADLINE".len(), by), Some("Café run"));
        assert_eq!(input.tail(by + BY_MARKER.len()), Some("Straße"));
    }

    #[test]
    fn test_find_marker_respects_start() {
        let input = Input::new("event a /to b /from c /to d");
        let from = input.find_marker(FROM_MARKER, 0).unwrap();
        let to = input.find_marker(TO_MARKER, from).unwrap();
        assert!(to > from);
        assert_eq!(input.tail(to + TO_MARKER.len()), Some("d"));
        assert_eq!(input.find_marker(TO_MARKER, 1000), None);
    }

    #[test]
    fn test_slice_rejects_reversed_offsets() {
        let input = Input::new("event x");
        assert_eq!(input.slice(5, 2), None);
    }

    #[test]
    fn test_task_number() {
        assert_eq!(Input::new("mark 3").task_number(), Ok(3));
        assert_eq!(Input::new("UNMARK   12 ").task_number(), Ok(12));
        assert_eq!(
            Input::new("delete two").task_number(),
            Err(TaskError::InvalidIndex("TWO".to_string()))
        );
        assert_eq!(
            Input::new("mark").task_number(),
            Err(TaskError::InvalidIndex(String::new()))
        );
        assert!(Input::new("mark -1").task_number().is_err());
    }
}

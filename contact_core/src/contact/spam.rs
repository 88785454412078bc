//! Heuristic spam screening for contact messages

use crate::config::ContactConfig;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_MARKER_REGEX: Regex = Regex::new(r"https?://").unwrap();
}

/// Pattern-based spam screen compiled once from the intake policy. Four
/// independent predicates combined with logical OR; no learned model.
#[derive(Debug, Clone)]
pub struct SpamFilter {
    keyword_pattern: Option<Regex>,
    phrase_pattern: Option<Regex>,
    url_flood_threshold: usize,
    repeat_run_length: usize,
}

impl SpamFilter {
    pub fn from_config(config: &ContactConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            keyword_pattern: word_list_pattern(&config.spam_keywords)?,
            phrase_pattern: word_list_pattern(&config.spam_phrases)?,
            url_flood_threshold: config.url_flood_threshold,
            repeat_run_length: config.repeat_run_length,
        })
    }

    pub fn is_spam(&self, message: &str) -> bool {
        self.contains_keyword(message)
            || self.contains_phrase(message)
            || self.has_url_flood(message)
            || self.has_repeated_run(message)
    }

    /// Case-insensitive whole-word match against the configured keyword list.
    pub fn contains_keyword(&self, message: &str) -> bool {
        self.keyword_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(message))
    }

    /// Case-insensitive whole-phrase match against the configured phrase list.
    pub fn contains_phrase(&self, message: &str) -> bool {
        self.phrase_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(message))
    }

    /// Flags messages carrying at least `url_flood_threshold` URL markers.
    /// Scheme matching is case-sensitive.
    pub fn has_url_flood(&self, message: &str) -> bool {
        URL_MARKER_REGEX.find_iter(message).count() >= self.url_flood_threshold
    }

    /// Flags any single character repeated `repeat_run_length` or more times
    /// consecutively. Runs are counted over Unicode scalars.
    pub fn has_repeated_run(&self, message: &str) -> bool {
        longest_char_run(message) >= self.repeat_run_length
    }
}

// An empty list yields no pattern, which disables the predicate.
fn word_list_pattern(entries: &[String]) -> Result<Option<Regex>, regex::Error> {
    if entries.is_empty() {
        return Ok(None);
    }

    let alternatives: Vec<String> = entries.iter().map(|entry| regex::escape(entry)).collect();
    let pattern = format!(r"(?i)\b({})\b", alternatives.join("|"));

    Regex::new(&pattern).map(Some)
}

fn longest_char_run(message: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;

    for ch in message.chars() {
        if previous == Some(ch) {
            current += 1;
        } else {
            previous = Some(ch);
            current = 1;
        }
        longest = longest.max(current);
    }

    longest
}

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::constants::{CHAT_DENYLIST, CHAT_MASK, MAX_CHAT_MESSAGE_CHARS};
use crate::error::{require_text, ValidationError};

static DEFAULT_FILTER: Lazy<ContentFilter> = Lazy::new(|| {
    ContentFilter::new(CHAT_DENYLIST).expect("built-in chat denylist compiles")
});

// Whole-word deny-list filter for chat content.
// Matching is case-insensitive and bounded by \b so "hateful" or
// "stupidity" are left alone.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    pattern: Option<Regex>,
    max_chars: usize,
}

impl ContentFilter {
    pub fn new(words: &[&str]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = words
            .iter()
            .filter(|w| !w.trim().is_empty())
            .map(|w| regex::escape(w.trim()))
            .collect();

        let pattern = if alternatives.is_empty() {
            None
        } else {
            let source = format!(r"\b(?:{})\b", alternatives.join("|"));
            Some(RegexBuilder::new(&source).case_insensitive(true).build()?)
        };

        Ok(Self {
            pattern,
            max_chars: MAX_CHAT_MESSAGE_CHARS,
        })
    }

    /// The filter built from the application denylist.
    pub fn shared() -> &'static ContentFilter {
        &DEFAULT_FILTER
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Replace every denylisted word with the fixed mask.
    pub fn sanitize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(re) => re.replace_all(text, NoExpand(CHAT_MASK)),
            None => Cow::Borrowed(text),
        }
    }

    /// Sanitize and then validate a chat message, returning the text to store.
    pub fn check_message(&self, content: &str) -> Result<String, ValidationError> {
        require_text("content", content)?;

        let sanitized = self.sanitize(content);
        let len = sanitized.chars().count();
        if len > self.max_chars {
            return Err(ValidationError::ContentTooLong {
                len,
                max: self.max_chars,
            });
        }

        Ok(sanitized.into_owned())
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

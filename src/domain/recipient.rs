use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A destination address in gateway-ready form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Recipient(String);

impl Recipient {
    /// Normalizes one raw candidate: trims whitespace and applies the dialing
    /// prefix unless the value already carries an international prefix.
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn normalize(raw: &str, prefix: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('+') {
            Some(Self(trimmed.to_string()))
        } else {
            Some(Self(format!("{prefix}{trimmed}")))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered list of unique, normalized recipients.
///
/// Both input paths converge here: the comma-separated free-text field and
/// the spreadsheet extractor. Built fresh for every dispatch attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecipientList(Vec<Recipient>);

impl RecipientList {
    /// Builds a normalized list from raw candidates: trims, drops empties,
    /// applies the dialing prefix, and deduplicates keeping the first
    /// occurrence. Input order is otherwise preserved.
    pub fn normalized<I, S>(raw: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut recipients = Vec::new();
        for candidate in raw {
            if let Some(recipient) = Recipient::normalize(candidate.as_ref(), prefix)
                && seen.insert(recipient.clone())
            {
                recipients.push(recipient);
            }
        }
        Self(recipients)
    }

    /// Parses a comma-separated free-text recipient field.
    #[must_use]
    pub fn from_comma_separated(input: &str, prefix: &str) -> Self {
        Self::normalized(input.split(','), prefix)
    }

    /// Serializes the list back into the free-text field form. Splitting the
    /// result on commas and re-normalizing reproduces an equal list.
    #[must_use]
    pub fn to_comma_separated(&self) -> String {
        self.0.iter().map(Recipient::as_str).collect::<Vec<_>>().join(", ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipient> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RecipientList {
    type Item = &'a Recipient;
    type IntoIter = std::slice::Iter<'a, Recipient>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

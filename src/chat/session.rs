//! The core models for keeping a chat transcript for one session.
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Speaker {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// A single line of the transcript. Entries have no identity of their
/// own; insertion order is the only structural property.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatEntry {
    pub fn new(speaker: Speaker, text: &str) -> Self {
        Self {
            speaker,
            text: text.to_string(),
        }
    }
}

/// Append-only log of one session's exchange. Lives in memory only and
/// is dropped with the session; nothing is ever mutated, removed, or
/// reordered once appended.
#[derive(Default, Clone)]
pub struct ChatSession(Vec<ChatEntry>);

impl ChatSession {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn append(&mut self, speaker: Speaker, text: &str) {
        self.0.push(ChatEntry::new(speaker, text))
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut session = ChatSession::new();
        session.append(Speaker::User, "Hi");
        session.append(Speaker::Assistant, "Hello!");

        assert_eq!(
            session.entries(),
            &[
                ChatEntry::new(Speaker::User, "Hi"),
                ChatEntry::new(Speaker::Assistant, "Hello!"),
            ]
        );
    }

    #[test]
    fn test_append_only_never_mutates_prior_entries() {
        let mut session = ChatSession::new();
        let lines = ["one", "two", "three", "four", "five"];
        for (i, line) in lines.iter().enumerate() {
            let speaker = if i % 2 == 0 {
                Speaker::User
            } else {
                Speaker::Assistant
            };
            session.append(speaker, line);

            // Every prior entry is still present, in order, unchanged
            assert_eq!(session.len(), i + 1);
            for (j, prior) in lines.iter().take(i + 1).enumerate() {
                assert_eq!(session.entries()[j].text, *prior);
            }
        }
    }

    #[test]
    fn test_entry_serialization() {
        let entry = ChatEntry::new(Speaker::User, "Hi");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"speaker":"user","text":"Hi"}"#
        );

        let entry = ChatEntry::new(Speaker::Assistant, "Hello!");
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"speaker":"assistant","text":"Hello!"}"#
        );
    }
}

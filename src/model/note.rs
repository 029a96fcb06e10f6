use serde::{Deserialize, Serialize};

/// Label given to a freshly created note
pub const JUST_NOW: &str = "Just now";

/// Presentation style derived from a note's subject tag.
///
/// Subjects are an open set: anything other than the known tags renders
/// with the `Other` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectStyle {
    Math,
    Science,
    Other,
}

impl SubjectStyle {
    pub fn for_subject(subject: &str) -> SubjectStyle {
        match subject {
            "math" => SubjectStyle::Math,
            "science" => SubjectStyle::Science,
            _ => SubjectStyle::Other,
        }
    }
}

/// A study note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Free-form subject tag (`math`, `science`, ...)
    pub subject: String,
    pub content: String,
    /// Human-relative label, not a timestamp
    pub last_updated: String,
}

impl Note {
    /// Create a note stamped with the "just now" label
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Note {
            id: id.into(),
            title: title.into(),
            subject: subject.into(),
            content: content.into(),
            last_updated: JUST_NOW.to_string(),
        }
    }

    pub fn style(&self) -> SubjectStyle {
        SubjectStyle::for_subject(&self.subject)
    }

    /// Subject with its first letter uppercased ("math" -> "Math")
    pub fn subject_label(&self) -> String {
        let mut chars = self.subject.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_is_just_now() {
        let note = Note::new("note-1", "T", "math", "c");
        assert_eq!(note.last_updated, "Just now");
    }

    #[test]
    fn unknown_subject_falls_back() {
        assert_eq!(SubjectStyle::for_subject("math"), SubjectStyle::Math);
        assert_eq!(SubjectStyle::for_subject("science"), SubjectStyle::Science);
        assert_eq!(SubjectStyle::for_subject("history"), SubjectStyle::Other);
        assert_eq!(SubjectStyle::for_subject(""), SubjectStyle::Other);
    }

    #[test]
    fn subject_label_capitalizes() {
        assert_eq!(Note::new("n", "t", "science", "").subject_label(), "Science");
        assert_eq!(Note::new("n", "t", "", "").subject_label(), "");
        assert_eq!(Note::new("n", "t", "éte", "").subject_label(), "Éte");
    }
}

use chrono::NaiveDate;

use crate::model::{Note, Priority, Task};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Error type for form submission
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("title is required")]
    EmptyTitle,
    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("form does not describe a {0}")]
    WrongKind(&'static str),
}

/// Which record a form creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Task,
    Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// `YYYY-MM-DD` or empty
    Date,
    /// Cycles through priorities instead of accepting text
    Priority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Byte offset of the text cursor
    pub cursor: usize,
    pub kind: FieldKind,
}

impl FormField {
    fn text(label: &'static str) -> Self {
        FormField {
            label,
            value: String::new(),
            cursor: 0,
            kind: FieldKind::Text,
        }
    }

    fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }
}

/// The create/edit form for a task or a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focus: usize,
    /// Id of the item being updated in place; `None` creates a new item
    pub editing: Option<String>,
}

const TASK_TITLE: usize = 0;
const TASK_DUE: usize = 1;
const TASK_PRIORITY: usize = 2;
const TASK_DESCRIPTION: usize = 3;

const NOTE_TITLE: usize = 0;
const NOTE_SUBJECT: usize = 1;
const NOTE_CONTENT: usize = 2;

/// Subject given to notes when the field is left blank
pub const DEFAULT_SUBJECT: &str = "other";

impl FormState {
    pub fn new_task() -> Self {
        let mut priority = FormField::text("Priority");
        priority.kind = FieldKind::Priority;
        priority.set(Priority::default().as_str());
        let mut due = FormField::text("Due");
        due.kind = FieldKind::Date;
        FormState {
            kind: FormKind::Task,
            fields: vec![
                FormField::text("Title"),
                due,
                priority,
                FormField::text("Description"),
            ],
            focus: 0,
            editing: None,
        }
    }

    pub fn new_note() -> Self {
        FormState {
            kind: FormKind::Note,
            fields: vec![
                FormField::text("Title"),
                FormField::text("Subject"),
                FormField::text("Content"),
            ],
            focus: 0,
            editing: None,
        }
    }

    pub fn for_kind(kind: FormKind) -> Self {
        match kind {
            FormKind::Task => FormState::new_task(),
            FormKind::Note => FormState::new_note(),
        }
    }

    /// Form pre-filled with a task's fields
    pub fn from_task(task: &Task) -> Self {
        let mut form = FormState::new_task();
        form.fields[TASK_TITLE].set(&task.title);
        let due = task.due.map(|d| d.format("%Y-%m-%d").to_string());
        form.fields[TASK_DUE].set(due.as_deref().unwrap_or(""));
        form.fields[TASK_PRIORITY].set(task.priority.as_str());
        form.fields[TASK_DESCRIPTION].set(task.description.as_deref().unwrap_or(""));
        form
    }

    /// Form pre-filled with a note's fields
    pub fn from_note(note: &Note) -> Self {
        let mut form = FormState::new_note();
        form.fields[NOTE_TITLE].set(&note.title);
        form.fields[NOTE_SUBJECT].set(&note.subject);
        form.fields[NOTE_CONTENT].set(&note.content);
        form
    }

    pub fn title(&self) -> &'static str {
        match (self.kind, self.editing.is_some()) {
            (FormKind::Task, false) => "New task",
            (FormKind::Task, true) => "Edit task",
            (FormKind::Note, false) => "New note",
            (FormKind::Note, true) => "Edit note",
        }
    }

    pub fn focused(&self) -> &FormField {
        &self.fields[self.focus]
    }

    fn focused_mut(&mut self) -> &mut FormField {
        &mut self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused_mut();
        if field.kind == FieldKind::Priority {
            return;
        }
        field.value.insert(field.cursor, c);
        field.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let field = self.focused_mut();
        if field.kind == FieldKind::Priority {
            return;
        }
        if let Some(prev) = prev_grapheme_boundary(&field.value, field.cursor) {
            field.value.replace_range(prev..field.cursor, "");
            field.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        let field = self.focused_mut();
        if field.kind == FieldKind::Priority {
            return;
        }
        if let Some(next) = next_grapheme_boundary(&field.value, field.cursor) {
            field.value.replace_range(field.cursor..next, "");
        }
    }

    /// Left arrow: move the cursor, or cycle a choice field backwards
    pub fn left(&mut self) {
        let field = self.focused_mut();
        if field.kind == FieldKind::Priority {
            let p = parse_priority(&field.value).prev();
            field.set(p.as_str());
        } else if let Some(prev) = prev_grapheme_boundary(&field.value, field.cursor) {
            field.cursor = prev;
        }
    }

    /// Right arrow: move the cursor, or cycle a choice field forwards
    pub fn right(&mut self) {
        let field = self.focused_mut();
        if field.kind == FieldKind::Priority {
            let p = parse_priority(&field.value).next();
            field.set(p.as_str());
        } else if let Some(next) = next_grapheme_boundary(&field.value, field.cursor) {
            field.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.focused_mut().cursor = 0;
    }

    pub fn end(&mut self) {
        let field = self.focused_mut();
        field.cursor = field.value.len();
    }

    /// Build a task with the given id from the current field values
    pub fn build_task(&self, id: String) -> Result<Task, FormError> {
        if self.kind != FormKind::Task {
            return Err(FormError::WrongKind("task"));
        }
        let title = self.fields[TASK_TITLE].value.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let due_text = self.fields[TASK_DUE].value.trim();
        let due = if due_text.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(due_text, "%Y-%m-%d")
                    .map_err(|_| FormError::InvalidDate(due_text.to_string()))?,
            )
        };
        let description = self.fields[TASK_DESCRIPTION].value.trim();
        Ok(Task {
            id,
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            due,
            priority: parse_priority(&self.fields[TASK_PRIORITY].value),
        })
    }

    /// Build a note with the given id, stamped "Just now"
    pub fn build_note(&self, id: String) -> Result<Note, FormError> {
        if self.kind != FormKind::Note {
            return Err(FormError::WrongKind("note"));
        }
        let title = self.fields[NOTE_TITLE].value.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let subject = self.fields[NOTE_SUBJECT].value.trim().to_lowercase();
        let subject = if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject
        };
        Ok(Note::new(
            id,
            title,
            subject,
            self.fields[NOTE_CONTENT].value.as_str(),
        ))
    }
}

fn parse_priority(value: &str) -> Priority {
    value.parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::{sample_notes, sample_tasks};
    use pretty_assertions::assert_eq;

    fn type_str(form: &mut FormState, s: &str) {
        for c in s.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn builds_task_from_typed_fields() {
        let mut form = FormState::new_task();
        type_str(&mut form, "Essay");
        form.focus_next();
        type_str(&mut form, "2025-08-01");
        form.focus_next();
        form.right(); // medium -> high
        form.focus_next();
        type_str(&mut form, "  outline first ");

        let task = form.build_task("task-9".into()).unwrap();
        assert_eq!(task.title, "Essay");
        assert_eq!(task.due, NaiveDate::from_ymd_opt(2025, 8, 1));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description.as_deref(), Some("outline first"));
    }

    #[test]
    fn empty_title_rejected() {
        let mut form = FormState::new_task();
        type_str(&mut form, "   ");
        assert_eq!(form.build_task("t".into()), Err(FormError::EmptyTitle));
    }

    #[test]
    fn bad_date_rejected() {
        let mut form = FormState::new_task();
        type_str(&mut form, "X");
        form.focus_next();
        type_str(&mut form, "tomorrow");
        assert_eq!(
            form.build_task("t".into()),
            Err(FormError::InvalidDate("tomorrow".into()))
        );
    }

    #[test]
    fn blank_optional_fields_allowed() {
        let mut form = FormState::new_task();
        type_str(&mut form, "X");
        let task = form.build_task("t".into()).unwrap();
        assert!(task.due.is_none());
        assert!(task.description.is_none());
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn priority_field_ignores_typing() {
        let mut form = FormState::new_task();
        form.focus = 2;
        form.insert_char('z');
        form.backspace();
        assert_eq!(form.focused().value, "medium");
        form.left();
        assert_eq!(form.focused().value, "low");
    }

    #[test]
    fn editing_moves_by_grapheme() {
        let mut form = FormState::new_note();
        type_str(&mut form, "cafe\u{0301}s");
        form.left();
        form.backspace();
        assert_eq!(form.focused().value, "cafs");
        form.home();
        form.delete();
        assert_eq!(form.focused().value, "afs");
        form.end();
        form.insert_char('!');
        assert_eq!(form.focused().value, "afs!");
    }

    #[test]
    fn note_subject_defaults_and_lowercases() {
        let mut form = FormState::new_note();
        type_str(&mut form, "Vocab");
        let note = form.build_note("n".into()).unwrap();
        assert_eq!(note.subject, "other");
        assert_eq!(note.last_updated, "Just now");

        form.focus_next();
        type_str(&mut form, "Science");
        assert_eq!(form.build_note("n".into()).unwrap().subject, "science");
    }

    #[test]
    fn prefill_round_trips_fields() {
        let task = &sample_tasks()[0];
        let form = FormState::from_task(task);
        assert_eq!(form.fields[1].value, "2025-07-26");
        let rebuilt = form.build_task(task.id.clone()).unwrap();
        assert_eq!(&rebuilt, task);

        let note = &sample_notes()[1];
        let form = FormState::from_note(note);
        let rebuilt = form.build_note(note.id.clone()).unwrap();
        assert_eq!(rebuilt.title, note.title);
        assert_eq!(rebuilt.subject, note.subject);
        assert_eq!(rebuilt.content, note.content);
    }

    #[test]
    fn wrong_kind_rejected() {
        let form = FormState::new_note();
        assert_eq!(form.build_task("t".into()), Err(FormError::WrongKind("task")));
    }

    #[test]
    fn focus_wraps() {
        let mut form = FormState::new_note();
        form.focus_prev();
        assert_eq!(form.focus, 2);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }
}

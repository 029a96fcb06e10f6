use chrono::NaiveDate;

use super::{Note, Priority, Task};

/// Tasks the dashboard starts with when sample data is enabled
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task-1".into(),
            title: "Complete Math Assignment".into(),
            description: Some("Finish calculus problems 1-10".into()),
            due: NaiveDate::from_ymd_opt(2025, 7, 26),
            priority: Priority::Medium,
        },
        Task {
            id: "task-2".into(),
            title: "Read Chapter 4".into(),
            description: Some("Biology textbook - Ecology section".into()),
            due: NaiveDate::from_ymd_opt(2025, 7, 27),
            priority: Priority::Low,
        },
    ]
}

/// Notes the dashboard starts with when sample data is enabled
pub fn sample_notes() -> Vec<Note> {
    vec![
        Note {
            id: "note-1".into(),
            title: "Calculus Formulas".into(),
            subject: "math".into(),
            content: "Derivatives of trigonometric functions, chain rule applications, \
                      and integration techniques..."
                .into(),
            last_updated: "2 days ago".into(),
        },
        Note {
            id: "note-2".into(),
            title: "Biology Key Terms".into(),
            subject: "science".into(),
            content: "Cell structure, photosynthesis steps, DNA replication phases, \
                      and genetic inheritance patterns..."
                .into(),
            last_updated: "1 week ago".into(),
        },
    ]
}

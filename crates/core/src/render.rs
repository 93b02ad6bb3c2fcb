//! Markdown rendering of a changelog entry.
//!
//! Two dialects are produced from the same data: a heading-based document for
//! files and a bold-labelled variant for pasting into a code review tool.
//! Rendering is pure, so the same entry always renders to the same text.

use std::fmt::Write;

use crate::changelog::{Entry, SelectedTypes};
use crate::config::{CHANGE_TYPES, CHECKLIST_ITEMS, OTHER_CHANGE_TYPE};

const CHECKED_ICON: &str = "✅";
const UNCHECKED_ICON: &str = "❌";

fn checkbox_value(checked: bool) -> &'static str {
    if checked {
        "x"
    } else {
        " "
    }
}

fn check_icon(checked: bool) -> &'static str {
    if checked {
        CHECKED_ICON
    } else {
        UNCHECKED_ICON
    }
}

/// Display text of a selected change type, or `None` when not selected.
fn selected_type_label(change_type: &str, selected_types: &SelectedTypes) -> Option<String> {
    let value = selected_types.get(change_type)?;
    if value.is_empty() {
        return None;
    }

    if change_type == OTHER_CHANGE_TYPE && value != change_type {
        Some(format!("{change_type}: {value}"))
    } else {
        Some(change_type.to_string())
    }
}

/// Writes free text with a Markdown hard break after every line.
fn write_hard_broken(out: &mut String, text: &str) {
    for line in text.split('\n') {
        let _ = writeln!(out, "{line}  ");
    }
}

fn write_commit_list(out: &mut String, entry: &Entry) {
    let metadata = &entry.metadata;

    if metadata.target_branch.is_empty() {
        let _ = writeln!(out, "Commits from branch '{}':", metadata.branch);
    } else {
        let _ = writeln!(
            out,
            "Commits from '{}' to '{}':",
            metadata.target_branch, metadata.branch
        );
    }

    for commit in &metadata.commits {
        let _ = writeln!(
            out,
            "- [{}]({}) {}",
            commit.short_hash(),
            commit.url,
            commit.message
        );
    }
}

/// Renders the file variant: `##` headings and `- [x]` checkboxes.
///
/// Title, Type of change and Checklist are always present; every other
/// section is omitted, heading included, when its data is empty.
pub fn generate_markdown(entry: &Entry, selected_types: &SelectedTypes) -> String {
    let mut md = String::new();

    md.push_str("## Title\n\n");
    let _ = writeln!(md, "{}\n", entry.title);

    if !entry.motivation.is_empty() {
        md.push_str("## Motivation\n\n");
        write_hard_broken(&mut md, &entry.motivation);
        md.push('\n');
    }

    if !entry.description.is_empty() {
        md.push_str("## Description\n\n");
        write_hard_broken(&mut md, &entry.description);
        md.push('\n');
    }

    md.push_str("## Type of change\n\n");
    for change_type in CHANGE_TYPES {
        match selected_type_label(change_type, selected_types) {
            Some(label) => {
                let _ = writeln!(md, "- [x] {label}");
            }
            None => {
                let _ = writeln!(md, "- [ ] {change_type}");
            }
        }
    }
    md.push('\n');

    if !entry.todos.is_empty() {
        md.push_str("## To-do before merge\n\n");
        for todo in &entry.todos {
            let _ = writeln!(md, "- [ ] {todo}");
        }
        md.push('\n');
    }

    if !entry.model_changes.is_empty() {
        md.push_str("## Changes to existing models:\n\n");
        for change in &entry.model_changes {
            let _ = writeln!(md, "- {change}");
        }
        md.push('\n');
    }

    if !entry.testing.is_empty() {
        md.push_str("## Testing Instructions\n\n");
        for (i, step) in entry.testing.iter().enumerate() {
            let _ = writeln!(md, "{}. {step}", i + 1);
        }
        md.push('\n');
    }

    md.push_str("## Checklist\n\n");
    for (item, checked) in CHECKLIST_ITEMS.iter().zip(entry.checklist.values()) {
        let _ = writeln!(md, "- [{}] {item}", checkbox_value(checked));
    }
    md.push('\n');

    if !entry.metadata.commits.is_empty() {
        md.push_str("## Commit List\n\n");
        write_commit_list(&mut md, entry);
        md.push('\n');
    }

    md
}

/// Renders the code review variant: bold labels, ✅/❌ icons, and only the
/// selected change types.
pub fn generate_review_markdown(entry: &Entry, selected_types: &SelectedTypes) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "**Title:** {}\n", entry.title);

    if !entry.motivation.is_empty() {
        md.push_str("**Motivation:**\n");
        write_hard_broken(&mut md, &entry.motivation);
        md.push('\n');
    }

    if !entry.description.is_empty() {
        md.push_str("**Description:**\n");
        write_hard_broken(&mut md, &entry.description);
        md.push('\n');
    }

    let selected_labels: Vec<String> = CHANGE_TYPES
        .iter()
        .filter_map(|change_type| selected_type_label(change_type, selected_types))
        .collect();
    if !selected_labels.is_empty() {
        md.push_str("**Type of change:**\n");
        for label in selected_labels {
            let _ = writeln!(md, "{CHECKED_ICON} {label}  ");
        }
        md.push('\n');
    }

    if !entry.todos.is_empty() {
        md.push_str("**To-do before merge:**\n");
        for todo in &entry.todos {
            let _ = writeln!(md, "- {todo}");
        }
        md.push('\n');
    }

    if !entry.model_changes.is_empty() {
        md.push_str("**Changes to existing models:**\n");
        for change in &entry.model_changes {
            let _ = writeln!(md, "- {change}");
        }
        md.push('\n');
    }

    if !entry.testing.is_empty() {
        md.push_str("**Testing Instructions:**\n");
        for (i, step) in entry.testing.iter().enumerate() {
            let _ = writeln!(md, "{}. {step}", i + 1);
        }
        md.push('\n');
    }

    md.push_str("**Checklist:**\n");
    for (item, checked) in CHECKLIST_ITEMS.iter().zip(entry.checklist.values()) {
        let _ = writeln!(md, "{} {item}  ", check_icon(checked));
    }
    md.push('\n');

    if !entry.metadata.commits.is_empty() {
        md.push_str("**Commit List:**\n");
        write_commit_list(&mut md, entry);
        md.push('\n');
    }

    md
}

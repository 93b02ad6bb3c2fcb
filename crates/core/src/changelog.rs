//! The changelog entry filled in by the interview.
//!
//! An entry is created with its repository metadata resolved, filled in
//! field by field, rendered once and then discarded.

use chrono::Utc;
use indexmap::IndexMap;
use log::warn;

use crate::execution::Runner;
use crate::vcs::Vcs;

/// Change type label mapped to its value: the label itself (or a custom
/// description for "Other") when selected, empty when not.
pub type SelectedTypes = IndexMap<String, String>;

/// Length of the abbreviated hash used as link text.
const SHORT_HASH_LENGTH: usize = 7;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub url: String,
}

impl Commit {
    /// First seven characters of the hash, or all of it if shorter.
    pub fn short_hash(&self) -> &str {
        self.hash.get(..SHORT_HASH_LENGTH).unwrap_or(&self.hash)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Metadata {
    pub branch: String,
    pub target_branch: String,
    pub username: String,
    pub commit_url: String,
    pub commits: Vec<Commit>,
}

impl Metadata {
    /// Name of the changelog file for the current time.
    pub fn generate_filename(&self) -> String {
        self.filename_at(Utc::now().timestamp())
    }

    /// `<timestamp>_<username>_<branch>.md`, with spaces in the username
    /// replaced by `_` and slashes in the branch by `-`.
    pub fn filename_at(&self, timestamp: i64) -> String {
        let safe_branch = self.branch.replace('/', "-");
        let safe_username = self.username.replace(' ', "_");

        format!("{timestamp}_{safe_username}_{safe_branch}.md")
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Checklist {
    pub self_review: bool,
    pub includes_testing: bool,
    pub documentation: bool,
    pub engineer_reachout: bool,
    pub readme_updated: bool,
}

impl Checklist {
    /// Values in the order of `config::CHECKLIST_ITEMS`.
    pub fn values(&self) -> [bool; 5] {
        [
            self.self_review,
            self.includes_testing,
            self.documentation,
            self.engineer_reachout,
            self.readme_updated,
        ]
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Entry {
    pub title: String,
    pub motivation: String,
    pub description: String,
    pub todos: Vec<String>,
    pub model_changes: Vec<String>,
    pub testing: Vec<String>,
    pub filename: String,
    pub checklist: Checklist,
    pub metadata: Metadata,
}

impl Entry {
    /// Creates an empty entry with branch, username, commit URL prefix and
    /// filename resolved from the repository.
    pub fn new<R: Runner>(vcs: &Vcs<R>) -> Self {
        let mut entry = Self::default();
        entry.populate_metadata(vcs);
        entry
    }

    /// Resolves repository metadata. Each query is a soft failure that
    /// leaves its field empty.
    pub fn populate_metadata<R: Runner>(&mut self, vcs: &Vcs<R>) {
        let branch = vcs.current_branch().unwrap_or_else(|e| {
            warn!("Could not determine current branch: {e}");
            String::new()
        });
        let username = vcs.username().unwrap_or_else(|e| {
            warn!("Could not determine username: {e}");
            String::new()
        });
        let commit_url = vcs.commit_url_prefix().unwrap_or_else(|e| {
            warn!("Could not determine commit url prefix: {e}");
            String::new()
        });

        self.metadata = Metadata {
            branch,
            username,
            commit_url,
            ..Metadata::default()
        };
        self.filename = self.metadata.generate_filename();
    }

    /// Loads the commits between `target_branch` and the entry's branch, or
    /// of the entry's branch alone when `target_branch` is empty. A failed
    /// query leaves the commit list empty.
    pub fn populate_commit_history<R: Runner>(&mut self, vcs: &Vcs<R>, target_branch: &str) {
        self.metadata.target_branch = target_branch.to_string();

        self.metadata.commits = vcs
            .commits_between(
                target_branch,
                &self.metadata.branch,
                &self.metadata.commit_url,
            )
            .unwrap_or_else(|e| {
                warn!("Could not read commit history: {e}");
                Vec::new()
            });
    }
}

//! The changelog interview.
//!
//! Questions are asked in a fixed order and every answer is optional in the
//! sense that a failed prompt or repository query is logged and replaced by
//! an empty value. Only a Ctrl+C in a selector stops the interview.

use std::path::PathBuf;

use changelog_core::changelog::{Entry, SelectedTypes};
use changelog_core::config::{CHANGE_TYPES, CHECKLIST_ITEMS, OUTPUT_FORMATS};
use changelog_core::error::{Error, Result};
use changelog_core::execution::Runner;
use changelog_core::vcs::Vcs;
use itertools::Itertools;
use log::{debug, info, warn};

use crate::input::{Notice, Prompter};
use crate::output::{deliver, Clipboard, OutputFormat};

/// Settings taken from the command line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Options {
    pub output_dir: PathBuf,
    /// Skips the output format question when set
    pub format: Option<OutputFormat>,
    /// Fetch from the remote before reading the commit log
    pub fetch: bool,
}

/// Unwraps `result`, or logs the failure and falls back to the default.
///
/// Cancellation is passed through so the caller can stop.
fn recover<T: Default>(result: Result<T>, what: &str) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(Error::UserCancelled) => Err(Error::UserCancelled),
        Err(e) => {
            warn!("Could not read {what}: {e}");
            Ok(T::default())
        }
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Runs the whole interview and delivers the changelog.
///
/// # Errors
///
/// Returns [`Error::UserCancelled`] when a selector is cancelled, the file
/// error when the changelog cannot be saved, and any error writing to the
/// terminal.
pub fn run<P, R, C>(prompter: &mut P, vcs: &Vcs<R>, clipboard: &C, options: &Options) -> Result<()>
where
    P: Prompter,
    R: Runner,
    C: Clipboard,
{
    let mut entry = Entry::new(vcs);
    debug!("Writing changelog for branch `{}`", entry.metadata.branch);

    print_header(prompter)?;
    let selected_types = prompt_change_types(prompter)?;
    prompt_basic_info(&mut entry, prompter)?;
    prompt_optional_sections(&mut entry, prompter)?;
    prompt_checklist(&mut entry, prompter)?;

    prompter.notify(Notice::Progress, "Collecting git commit information...")?;
    if options.fetch {
        if let Err(e) = vcs.fetch() {
            warn!("Fetch failed, using local branches: {e}");
        }
    }
    let target_branch = prompt_target_branch(prompter, vcs)?;
    entry.populate_commit_history(vcs, &target_branch);
    info!(
        "Collected {} commits for `{}`",
        entry.metadata.commits.len(),
        entry.metadata.branch
    );

    let format = match options.format {
        Some(format) => format,
        None => prompt_output_format(prompter)?,
    };

    deliver(
        prompter,
        clipboard,
        format,
        &entry,
        &selected_types,
        &options.output_dir,
    )
}

fn print_header<P: Prompter>(prompter: &mut P) -> Result<()> {
    prompter.notify(Notice::Header, "--- Interactive Changelog Generator ---")?;
    prompter.notify(
        Notice::Info,
        "Please answer the following questions to generate the changelog.\n",
    )
}

/// # Errors
///
/// Returns [`Error::UserCancelled`] if the selector is cancelled.
pub fn prompt_change_types<P: Prompter>(prompter: &mut P) -> Result<SelectedTypes> {
    recover(
        prompter.multi_select("Select the type of changes", &labels(&CHANGE_TYPES)),
        "change types",
    )
}

/// # Errors
///
/// Returns [`Error::UserCancelled`] if a selector is cancelled.
pub fn prompt_basic_info<P: Prompter>(entry: &mut Entry, prompter: &mut P) -> Result<()> {
    entry.title = recover(prompter.single_line("Changelog title"), "title")?;
    Ok(())
}

/// Motivation, description, instructions, model changes and testing steps.
///
/// # Errors
///
/// Returns [`Error::UserCancelled`] if a selector is cancelled.
pub fn prompt_optional_sections<P: Prompter>(entry: &mut Entry, prompter: &mut P) -> Result<()> {
    if ask(prompter, "Do you want to include motivation?", false)? {
        entry.motivation = recover(
            prompter.multi_line("Why are you making this change?"),
            "motivation",
        )?;
    }

    entry.description = recover(prompter.multi_line("Describe your change"), "description")?;

    if ask(prompter, "Do you want to add any instructions before merge?", false)? {
        entry.todos = recover(
            prompter.multi_instruction("What are the instructions?"),
            "instructions",
        )?;
    }

    if ask(prompter, "Did you make any changes to existing models?", false)? {
        entry.model_changes = recover(
            prompter.multi_instruction("What are the changes?"),
            "model changes",
        )?;
    }

    if ask(prompter, "Did your change need testing?", false)? {
        entry.testing = recover(
            prompter.multi_instruction("What are the steps for testing?"),
            "testing steps",
        )?;
    }

    Ok(())
}

fn ask<P: Prompter>(prompter: &mut P, question: &str, default: bool) -> Result<bool> {
    recover(prompter.boolean(question, default), question)
}

/// # Errors
///
/// Returns [`Error::UserCancelled`] if a selector is cancelled.
pub fn prompt_checklist<P: Prompter>(entry: &mut Entry, prompter: &mut P) -> Result<()> {
    prompter.notify(Notice::Header, "? Please complete the final checklist:")?;

    let [self_review, includes_testing, documentation, engineer_reachout, readme_updated] =
        CHECKLIST_ITEMS;
    let checklist = &mut entry.checklist;

    checklist.self_review = ask(prompter, self_review, true)?;
    checklist.includes_testing = ask(prompter, includes_testing, false)?;
    checklist.documentation = ask(prompter, documentation, false)?;
    checklist.engineer_reachout = ask(prompter, engineer_reachout, false)?;
    checklist.readme_updated = ask(prompter, readme_updated, false)?;

    Ok(())
}

/// Asks for the branch the changes will be merged into, out of the local
/// branches other than the current one.
///
/// Returns an empty name when there is nothing to choose from or the
/// selection fails, which makes the commit list cover the current branch
/// alone.
///
/// # Errors
///
/// Returns [`Error::UserCancelled`] if the selector is cancelled.
pub fn prompt_target_branch<P: Prompter, R: Runner>(prompter: &mut P, vcs: &Vcs<R>) -> Result<String> {
    let branches = vcs.branches().unwrap_or_else(|e| {
        warn!("Could not list branches: {e}");
        Vec::new()
    });
    let current_branch = vcs.current_branch().unwrap_or_default();

    let candidates = branches
        .into_iter()
        .filter(|branch| *branch != current_branch)
        .collect_vec();

    if candidates.is_empty() {
        prompter.notify(
            Notice::Warning,
            "Could not fetch branches, skipping target branch selection",
        )?;
        return Ok(String::new());
    }

    match prompter.single_select("Select target source branch", &candidates) {
        Ok(branch) => Ok(branch),
        Err(Error::UserCancelled) => Err(Error::UserCancelled),
        Err(e) => {
            warn!("Target branch selection failed: {e}");
            prompter.notify(Notice::Warning, &format!("Error selecting target branch: {e}"))?;
            Ok(String::new())
        }
    }
}

/// Asks how to deliver the changelog, falling back to a file.
///
/// # Errors
///
/// Returns [`Error::UserCancelled`] if the selector is cancelled.
pub fn prompt_output_format<P: Prompter>(prompter: &mut P) -> Result<OutputFormat> {
    let selected = match prompter.single_select("Select output format", &labels(&OUTPUT_FORMATS)) {
        Ok(label) => OutputFormat::from_label(&label),
        Err(Error::UserCancelled) => return Err(Error::UserCancelled),
        Err(e) => {
            warn!("Output format selection failed: {e}");
            prompter.notify(Notice::Warning, &format!("Error selecting output format: {e}"))?;
            None
        }
    };

    Ok(selected.unwrap_or(OutputFormat::File))
}

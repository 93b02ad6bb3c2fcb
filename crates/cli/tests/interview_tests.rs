//! Integration tests for the changelog interview
//!
//! The interview runs against a scripted prompter and a fake repository, so
//! the full question flow, its fallbacks and every output format can be
//! checked without a terminal or git.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io::Cursor;

use changelog_cli::input::{Notice, Prompter, TerminalPrompter, SPECIFY_OTHER};
use changelog_cli::interview::{self, prompt_output_format, prompt_target_branch, Options};
use changelog_cli::output::{Clipboard, OutputFormat};
use changelog_cli::selection::{ByteKeys, RawTerminal};
use changelog_core::changelog::SelectedTypes;
use changelog_core::config::CHANGE_TYPES;
use changelog_core::error::{Error, Result};
use changelog_core::execution::{CommandKind, Runner};
use changelog_core::vcs::Vcs;
use tempfile::TempDir;

/// Answers each command by its joined arguments; unknown commands fail.
struct FakeRepository {
    answers: HashMap<String, String>,
}

impl FakeRepository {
    fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(args, output)| ((*args).to_string(), (*output).to_string()))
                .collect(),
        }
    }
}

impl Runner for FakeRepository {
    fn run(&self, _kind: CommandKind, args: &[&str]) -> Result<String> {
        let key = args.join(" ");
        self.answers
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::command_failed("git", &format!("unexpected command: {key}")))
    }
}

fn repository() -> FakeRepository {
    FakeRepository::new(&[
        ("rev-parse --abbrev-ref HEAD", "feature/login"),
        ("config --local user.email", "dev@example.com"),
        ("config --get remote.origin.url", "https://github.com/acme/webapp.git"),
        ("branch --format=%(refname:short)", "develop\nfeature/login\nmain"),
        (
            "log main..feature/login --oneline --no-merges",
            "abc123def456 Add login form",
        ),
        (
            "log feature/login --oneline --no-merges",
            "abc123def456 Add login form\n999888777666 Start branch",
        ),
    ])
}

/// Pops scripted answers per operation; a missing answer is a read failure.
#[derive(Default)]
struct ScriptedPrompter {
    lines: VecDeque<Result<String>>,
    texts: VecDeque<Result<String>>,
    lists: VecDeque<Result<Vec<String>>>,
    booleans: VecDeque<Result<bool>>,
    selections: VecDeque<Result<SelectedTypes>>,
    choices: VecDeque<Result<String>>,
    questions: Vec<String>,
    offered: Vec<Vec<String>>,
    notices: Vec<(Notice, String)>,
}

fn next<T>(queue: &mut VecDeque<Result<T>>) -> Result<T> {
    queue.pop_front().unwrap_or(Err(Error::InputReadFailed))
}

impl ScriptedPrompter {
    fn has_notice(&self, notice: Notice, text: &str) -> bool {
        self.notices
            .iter()
            .any(|(kind, message)| *kind == notice && message.contains(text))
    }
}

impl Prompter for ScriptedPrompter {
    fn single_line(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        next(&mut self.lines)
    }

    fn multi_line(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        next(&mut self.texts)
    }

    fn multi_instruction(&mut self, question: &str) -> Result<Vec<String>> {
        self.questions.push(question.to_string());
        next(&mut self.lists)
    }

    fn boolean(&mut self, question: &str, _default: bool) -> Result<bool> {
        self.questions.push(question.to_string());
        next(&mut self.booleans)
    }

    fn multi_select(&mut self, question: &str, options: &[String]) -> Result<SelectedTypes> {
        self.questions.push(question.to_string());
        self.offered.push(options.to_vec());
        next(&mut self.selections)
    }

    fn single_select(&mut self, question: &str, options: &[String]) -> Result<String> {
        self.questions.push(question.to_string());
        self.offered.push(options.to_vec());
        next(&mut self.choices)
    }

    fn notify(&mut self, notice: Notice, message: &str) -> Result<()> {
        self.notices.push((notice, message.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingClipboard {
    copied: RefCell<Vec<String>>,
    broken: bool,
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.broken {
            return Err(Error::command_failed("xclip", "Can't open display"));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn selected(labels: &[&str]) -> SelectedTypes {
    CHANGE_TYPES
        .iter()
        .map(|change_type| {
            let value = if labels.contains(change_type) {
                (*change_type).to_string()
            } else {
                String::new()
            };
            ((*change_type).to_string(), value)
        })
        .collect()
}

fn options(output_dir: &TempDir, format: Option<OutputFormat>) -> Options {
    Options {
        output_dir: output_dir.path().join("changes"),
        format,
        fetch: false,
    }
}

/// Test the complete interview ending in a generated file
#[test]
fn test_interview_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter {
        selections: VecDeque::from([Ok(selected(&["Bug fix", "New feature"]))]),
        lines: VecDeque::from([Ok("Add login".to_string())]),
        // motivation, instructions, model changes, testing, then the checklist
        booleans: VecDeque::from([true, false, false, true, true, true, false, false, true].map(Ok)),
        texts: VecDeque::from([
            Ok("Users asked for it".to_string()),
            Ok("Adds a login form".to_string()),
        ]),
        lists: VecDeque::from([Ok(vec!["Run the app".to_string(), "Log in".to_string()])]),
        choices: VecDeque::from([Ok("main".to_string()), Ok("Generate file".to_string())]),
        ..ScriptedPrompter::default()
    };

    interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &RecordingClipboard::default(),
        &options(&temp_dir, None),
    )
    .unwrap();

    let written: Vec<_> = fs::read_dir(temp_dir.path().join("changes"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0]
        .to_string_lossy()
        .ends_with("_dev_feature-login.md"));

    let content = fs::read_to_string(&written[0]).unwrap();
    for expected in [
        "## Title\n\nAdd login\n",
        "## Motivation\n\nUsers asked for it  \n",
        "## Description\n\nAdds a login form  \n",
        "- [x] Bug fix\n",
        "- [x] New feature\n",
        "- [ ] Other\n",
        "## Testing Instructions\n\n1. Run the app\n2. Log in\n",
        "- [x] I have performed a self-review of my code\n",
        "- [x] I have added tests that prove my fix is effective or my feature works\n",
        "- [ ] I have added necessary documentation (if appropriate)\n",
        "- [x] I have updated the README file (if appropriate)\n",
        "Commits from 'main' to 'feature/login':\n",
        "- [abc123d](https://github.com/acme/webapp/commit/abc123def456) Add login form\n",
    ] {
        assert!(content.contains(expected), "missing {expected:?} in:\n{content}");
    }
    assert!(!content.contains("## To-do before merge"));

    assert_eq!(prompter.offered[1], vec!["develop", "main"]);
    assert!(prompter.has_notice(Notice::Success, "Changelog generated at"));
}

/// Test the question order of a full interview
#[test]
fn test_interview_question_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter {
        booleans: VecDeque::from([true, true, true, true].map(Ok)),
        ..ScriptedPrompter::default()
    };

    interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &RecordingClipboard::default(),
        &options(&temp_dir, Some(OutputFormat::Show)),
    )
    .unwrap();

    assert_eq!(
        &prompter.questions[..11],
        [
            "Select the type of changes",
            "Changelog title",
            "Do you want to include motivation?",
            "Why are you making this change?",
            "Describe your change",
            "Do you want to add any instructions before merge?",
            "What are the instructions?",
            "Did you make any changes to existing models?",
            "What are the changes?",
            "Did your change need testing?",
            "What are the steps for testing?",
        ]
    );
    assert_eq!(
        prompter.questions[11],
        "I have performed a self-review of my code"
    );
    assert_eq!(prompter.questions.last().unwrap(), "Select target source branch");
}

/// Test that failed prompts fall back to empty answers and the interview finishes
#[test]
fn test_interview_survives_every_prompt_failing() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::default();

    interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &RecordingClipboard::default(),
        &options(&temp_dir, None),
    )
    .unwrap();

    // Target branch failed, so the log covers the current branch alone; the
    // output format failed, so a file was written.
    let path = fs::read_dir(temp_dir.path().join("changes"))
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let content = fs::read_to_string(path).unwrap();

    assert!(content.starts_with("## Title\n\n\n"));
    assert!(content.contains("Commits from branch 'feature/login':\n"));
    assert!(content.contains("Start branch"));
    assert!(prompter.has_notice(Notice::Warning, "Error selecting target branch"));
    assert!(prompter.has_notice(Notice::Warning, "Error selecting output format"));
}

/// Test that Ctrl+C in a selector stops the interview
#[test]
fn test_interview_stops_when_cancelled() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter {
        selections: VecDeque::from([Err(Error::UserCancelled)]),
        ..ScriptedPrompter::default()
    };

    let result = interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &RecordingClipboard::default(),
        &options(&temp_dir, Some(OutputFormat::File)),
    );

    assert!(matches!(result, Err(Error::UserCancelled)));
    assert_eq!(prompter.questions, vec!["Select the type of changes"]);
    assert!(!temp_dir.path().join("changes").exists());
}

/// Test the copy output and its fallback to showing the text
#[test]
fn test_copy_output_and_fallback() {
    let temp_dir = TempDir::new().unwrap();

    let clipboard = RecordingClipboard::default();
    let mut prompter = ScriptedPrompter {
        lines: VecDeque::from([Ok("Copy me".to_string())]),
        ..ScriptedPrompter::default()
    };
    interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &clipboard,
        &options(&temp_dir, Some(OutputFormat::Copy)),
    )
    .unwrap();

    let copied = clipboard.copied.borrow();
    assert_eq!(copied.len(), 1);
    assert!(copied[0].starts_with("**Title:** Copy me\n"));
    assert!(prompter.has_notice(Notice::Success, "copied to clipboard"));

    let broken = RecordingClipboard {
        broken: true,
        ..RecordingClipboard::default()
    };
    let mut prompter = ScriptedPrompter {
        lines: VecDeque::from([Ok("Copy me".to_string())]),
        ..ScriptedPrompter::default()
    };
    interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &broken,
        &options(&temp_dir, Some(OutputFormat::Copy)),
    )
    .unwrap();

    assert!(prompter.has_notice(Notice::Error, "Error copying to clipboard"));
    assert!(prompter.has_notice(Notice::Plain, "**Title:** Copy me"));
    assert!(!temp_dir.path().join("changes").exists());
}

/// Test that a file that cannot be written fails the interview
#[test]
fn test_file_output_failure_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocked = temp_dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();

    let mut prompter = ScriptedPrompter::default();
    let result = interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &RecordingClipboard::default(),
        &Options {
            output_dir: blocked,
            format: Some(OutputFormat::File),
            fetch: false,
        },
    );

    assert!(matches!(result, Err(Error::Io { .. })));
}

/// Test that a failed fetch is ignored
#[test]
fn test_failed_fetch_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter {
        choices: VecDeque::from([Ok("main".to_string())]),
        ..ScriptedPrompter::default()
    };

    interview::run(
        &mut prompter,
        &Vcs::new(repository()),
        &RecordingClipboard::default(),
        &Options {
            output_dir: temp_dir.path().to_path_buf(),
            format: Some(OutputFormat::Show),
            fetch: true,
        },
    )
    .unwrap();

    assert!(prompter.has_notice(Notice::Plain, "Commits from 'main' to 'feature/login':"));
}

/// Test that the target branch question is skipped without other branches
#[test]
fn test_target_branch_skipped_without_candidates() {
    let vcs = Vcs::new(FakeRepository::new(&[
        ("rev-parse --abbrev-ref HEAD", "main"),
        ("branch --format=%(refname:short)", "main"),
    ]));
    let mut prompter = ScriptedPrompter::default();

    assert_eq!(prompt_target_branch(&mut prompter, &vcs).unwrap(), "");
    assert!(prompter.questions.is_empty());
    assert!(prompter.has_notice(Notice::Warning, "skipping target branch selection"));

    let vcs = Vcs::new(FakeRepository::new(&[]));
    assert_eq!(prompt_target_branch(&mut prompter, &vcs).unwrap(), "");
    assert!(prompter.questions.is_empty());
}

/// Test the output format question
#[test]
fn test_output_format_selection() {
    let mut prompter = ScriptedPrompter {
        choices: VecDeque::from([
            Ok("Copy Bitbucket PR text".to_string()),
            Ok("Show Bitbucket PR text".to_string()),
            Err(Error::NoOptions),
        ]),
        ..ScriptedPrompter::default()
    };

    assert_eq!(prompt_output_format(&mut prompter).unwrap(), OutputFormat::Copy);
    assert_eq!(prompt_output_format(&mut prompter).unwrap(), OutputFormat::Show);
    assert_eq!(prompt_output_format(&mut prompter).unwrap(), OutputFormat::File);
    assert_eq!(
        prompter.offered[0],
        vec![
            "Copy Bitbucket PR text",
            "Show Bitbucket PR text",
            "Generate file"
        ]
    );
}

struct NoTerminal;

impl RawTerminal for NoTerminal {
    fn enter_raw(&self) -> Result<()> {
        Ok(())
    }

    fn restore(&self) -> Result<()> {
        Ok(())
    }
}

/// Test the terminal prompter's line input and the "Other" description
#[test]
fn test_terminal_prompter_line_input() {
    let keys = ByteKeys::new(&b"jj \r"[..]);
    let input = Cursor::new("\n   \nMy title\nfirst\nsecond\nEOF\nstep one\nEOF\nSomething else\n");
    let mut prompter = TerminalPrompter::new(NoTerminal, keys, input, Vec::new());

    assert_eq!(prompter.single_line("Changelog title").unwrap(), "My title");
    assert_eq!(
        prompter.multi_line("Describe your change").unwrap(),
        "first\nsecond"
    );
    assert_eq!(
        prompter.multi_instruction("What are the steps?").unwrap(),
        vec!["step one"]
    );

    let labels: Vec<String> = ["Bug fix", "New feature", "Other"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let types = prompter.multi_select("Select the type of changes", &labels).unwrap();
    assert_eq!(types["Other"], "Something else");
    assert_eq!(types["Bug fix"], "");

    let printed = String::from_utf8(prompter.into_output()).unwrap();
    assert_eq!(printed.matches("Input cannot be empty").count(), 2);
    assert!(printed.contains("(Enter \"EOF\" on a new line or Ctrl+D to finish input)"));
    assert!(printed.contains(SPECIFY_OTHER));
}

/// Test that a required line fails at end of input instead of looping
#[test]
fn test_terminal_prompter_single_line_end_of_input() {
    let keys = ByteKeys::new(&b""[..]);
    let mut prompter = TerminalPrompter::new(NoTerminal, keys, Cursor::new("\n"), Vec::new());

    assert!(matches!(
        prompter.single_line("Changelog title"),
        Err(Error::InputReadFailed)
    ));
}

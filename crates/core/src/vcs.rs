//! Read-only repository queries built on a [`Runner`].
//!
//! Each query reproduces a fixed fallback policy: the username comes from the
//! repository email before the OS identity, the current branch from
//! `rev-parse` before `branch --show-current`.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::changelog::Commit;
use crate::error::{Error, Result};
use crate::execution::{CommandKind, Runner};

/// `user@host:org/repo(.git)?`
static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s/]+@([^:\s/]+):([^/\s]+)/(.+?)(\.git)?$").expect("SSH remote pattern is valid")
});

/// Repository metadata queries.
pub struct Vcs<R: Runner> {
    runner: R,
}

impl<R: Runner> Vcs<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        self.runner.run(CommandKind::Vcs, args)
    }

    fn git_username(&self) -> Result<String> {
        let email = self.git(&["config", "--local", "user.email"])?;
        Ok(email.split('@').next().unwrap_or_default().to_string())
    }

    fn local_username(&self) -> Result<String> {
        self.runner.run(CommandKind::Os, &["whoami"])
    }

    /// Username for the changelog: the local part of the repository email,
    /// otherwise the OS identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoUsernameFound`] when both sources fail or are empty.
    pub fn username(&self) -> Result<String> {
        match self.git_username() {
            Ok(username) if !username.is_empty() => return Ok(username),
            Ok(_) => debug!("Repository email is empty"),
            Err(e) => debug!("Could not read repository email: {e}"),
        }

        match self.local_username() {
            Ok(username) if !username.is_empty() => Ok(username),
            Ok(_) => Err(Error::NoUsernameFound),
            Err(e) => {
                debug!("Could not read OS identity: {e}");
                Err(Error::NoUsernameFound)
            }
        }
    }

    /// Name of the checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns the error of the fallback query if it fails, or
    /// [`Error::NoBranchFound`] if both queries come back empty.
    pub fn current_branch(&self) -> Result<String> {
        // The first query's error only matters through its empty output
        let branch = self
            .git(&["rev-parse", "--abbrev-ref", "HEAD"])
            .unwrap_or_default();
        if !branch.is_empty() {
            return Ok(branch);
        }

        let branch = self.git(&["branch", "--show-current"])?;
        if branch.is_empty() {
            return Err(Error::NoBranchFound);
        }

        Ok(branch)
    }

    /// Web URL prefix that a commit hash can be appended to.
    ///
    /// # Errors
    ///
    /// Propagates a failed remote query; returns [`Error::NoCommitUrlPrefix`]
    /// for remotes that are neither SSH-style nor http(s).
    pub fn commit_url_prefix(&self) -> Result<String> {
        let url = self.git(&["config", "--get", "remote.origin.url"])?;
        commit_url_prefix_from_remote(&url)
    }

    /// Local branch names.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch listing fails.
    pub fn branches(&self) -> Result<Vec<String>> {
        let output = self.git(&["branch", "--format=%(refname:short)"])?;

        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    /// Updates remote references; used before reading the commit log.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub fn fetch(&self) -> Result<()> {
        self.git(&["fetch", "origin"]).map(|_| ())
    }

    /// Non-merge commits on `branch` that are not on `target`, or every
    /// non-merge commit of `branch` when `target` is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the log query fails.
    pub fn commits_between(
        &self,
        target: &str,
        branch: &str,
        url_prefix: &str,
    ) -> Result<Vec<Commit>> {
        let range = if target.is_empty() {
            branch.to_string()
        } else {
            format!("{target}..{branch}")
        };

        let log = self.git(&["log", &range, "--oneline", "--no-merges"])?;
        Ok(parse_commit_log(&log, url_prefix))
    }
}

/// Translates a remote URL into a commit URL prefix.
///
/// # Errors
///
/// Returns [`Error::NoCommitUrlPrefix`] when the remote is neither an
/// SSH-style `user@host:org/repo` nor an http(s) URL.
///
/// # Examples
///
/// ```
/// use changelog_core::vcs::commit_url_prefix_from_remote;
///
/// let prefix = commit_url_prefix_from_remote("git@github.com:user/repo.git")?;
/// assert_eq!(prefix, "https://github.com/user/repo/commit/");
/// # Ok::<(), changelog_core::error::Error>(())
/// ```
pub fn commit_url_prefix_from_remote(url: &str) -> Result<String> {
    if url.starts_with("http") {
        let url = url.strip_suffix(".git").unwrap_or(url);
        return Ok(format!("{url}/commit/"));
    }

    if let Some(captures) = SSH_REMOTE.captures(url) {
        let host = &captures[1];
        let org = &captures[2];
        let repo = &captures[3];
        return Ok(format!("https://{host}/{org}/{repo}/commit/"));
    }

    Err(Error::NoCommitUrlPrefix)
}

/// Parses `git log --oneline` output into commits.
///
/// Lines without a `hash message` separator are skipped.
pub fn parse_commit_log(log: &str, url_prefix: &str) -> Vec<Commit> {
    log.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(' '))
        .map(|(hash, message)| Commit {
            hash: hash.to_string(),
            message: message.to_string(),
            url: format!("{url_prefix}{hash}"),
        })
        .collect()
}

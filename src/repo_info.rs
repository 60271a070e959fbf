//! # Repository Metadata Lookup
//!
//! Read-only capability that seeds default prompt answers from the local
//! git checkout and its GitHub remote: the remote URL, a display title
//! derived from the repository slug, the repository description, and the
//! local committer identity.
//!
//! The mutation engine never consumes this data; it only flows into prompt
//! defaults. It is therefore modeled as a trait so the engine and the
//! prompt pipeline can be tested without spawning `git` or `gh`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::naming::title_case_slug;

/// Local committer identity from git configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitUser {
    pub name: String,
    pub email: String,
}

/// The four metadata lookups used to seed prompt defaults.
pub trait RepoInfo {
    /// Remote origin URL, normalized to https form.
    fn remote_url(&self) -> Result<String>;
    /// Repository display title, derived from its slug in title case.
    fn title(&self) -> Result<String>;
    /// Repository description from the hosting service.
    fn description(&self) -> Result<String>;
    /// Local committer name and email.
    fn user(&self) -> Result<GitUser>;
}

/// Production implementation backed by the `git` and `gh` CLIs.
///
/// Using the system binaries means credentials, SSH keys, and `gh auth`
/// state are all handled by the user's existing configuration.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let rendered = format!("{} {}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|err| Error::RemoteLookup {
                command: rendered.clone(),
                message: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::RemoteLookup {
                command: rendered,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn repo_slug(&self) -> Result<String> {
        let remote = self.remote_url()?;
        let slug = remote
            .rsplit('/')
            .next()
            .unwrap_or(&remote)
            .trim_end_matches(".git")
            .to_string();
        Ok(slug)
    }
}

/// Rewrite an SSH GitHub remote to its https form; other remotes pass
/// through unchanged.
pub fn https_remote(remote: &str) -> String {
    match remote.strip_prefix("git@github.com:") {
        Some(rest) => format!("https://github.com/{}", rest.trim()),
        None => remote.trim().to_string(),
    }
}

impl RepoInfo for GitCli {
    fn remote_url(&self) -> Result<String> {
        let remote = self.run("git", &["config", "--get", "remote.origin.url"])?;
        Ok(https_remote(&remote))
    }

    fn title(&self) -> Result<String> {
        Ok(title_case_slug(&self.repo_slug()?))
    }

    fn description(&self) -> Result<String> {
        self.run(
            "gh",
            &["repo", "view", "--json", "description", "--jq", ".description"],
        )
    }

    fn user(&self) -> Result<GitUser> {
        Ok(GitUser {
            name: self.run("git", &["config", "--get", "user.name"])?,
            email: self.run("git", &["config", "--get", "user.email"])?,
        })
    }
}

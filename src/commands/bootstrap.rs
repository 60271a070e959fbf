//! # Bootstrap Command Implementation
//!
//! Collects a package descriptor answer set and applies the
//! `bootstrap-package-json` action, optionally registering the workspace in
//! `pnpm-workspace.yaml` and VS Code's eslint settings in the same run.
//!
//! ## Functionality
//!
//! - **Interactive mode** (default): a prompt wizard with defaults seeded
//!   from the local git checkout and its GitHub remote (repository title,
//!   description, remote URL, committer identity).
//! - **Scripted mode** (`--no-input`): every answer comes from flags;
//!   nothing prompts.
//! - **Init mode** (`--init`): the monorepo root package.json is rewritten
//!   as well, against its own update derived from the repository metadata.
//!
//! A failed operation is reported and counted but does not halt the
//! remaining operations, and nothing rolls back earlier writes.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use semver::Version;
use url::Url;

use workspace_gen::actions::{self, workspace, ActionConfig, BootstrapAnswers, Context};
use workspace_gen::descriptor::{AuthorUpdate, DescriptorUpdate};
use workspace_gen::naming::{slugify, validate_package_name};
use workspace_gen::repo_info::{GitCli, RepoInfo};

/// Rewrite package.json descriptors for a new or existing workspace
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Workspace package directory (e.g. pkg/widgets)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<String>,

    /// Also rewrite the monorepo root package.json
    #[arg(long)]
    pub init: bool,

    /// Template package.json used to seed the child package
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Also register the workspace in pnpm-workspace.yaml and VS Code settings
    #[arg(long)]
    pub register: bool,

    /// Take every answer from flags; never prompt
    #[arg(long)]
    pub no_input: bool,

    /// Package name (npm)
    #[arg(long)]
    pub name: Option<String>,

    /// Package version (semver)
    #[arg(long)]
    pub version: Option<String>,

    /// Package description
    #[arg(long)]
    pub description: Option<String>,

    /// URL of the package's README
    #[arg(long, value_name = "URL")]
    pub homepage: Option<String>,

    /// Author full name
    #[arg(long, value_name = "NAME")]
    pub author_name: Option<String>,

    /// Author email
    #[arg(long, value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// Author website
    #[arg(long, value_name = "URL")]
    pub author_url: Option<String>,

    /// URL of the parent git repository
    #[arg(long, value_name = "URL")]
    pub repository: Option<String>,

    /// Root package name (init mode)
    #[arg(long)]
    pub root_name: Option<String>,

    /// Root package description (init mode)
    #[arg(long)]
    pub root_description: Option<String>,
}

/// Execute the `bootstrap` command.
pub fn execute(ctx: &Context, args: BootstrapArgs) -> Result<()> {
    let template = args.template.clone();
    let register = args.register;
    let answers = if args.no_input {
        answers_from_flags(args)?
    } else {
        prompt_for_answers(ctx, args)?
    };
    let workspace_dir = answers.workspace.clone();

    let mut outcomes = vec![actions::run(
        actions::BOOTSTRAP_PACKAGE_JSON,
        ctx,
        &ActionConfig {
            workspace: None,
            template_file: template,
        },
        Some(&answers),
    )];

    if register && !workspace_dir.is_empty() {
        let config = ActionConfig {
            workspace: Some(workspace_dir),
            template_file: None,
        };
        outcomes.push(actions::run(actions::ADD_PNPM_WORKSPACE, ctx, &config, None));
        outcomes.push(actions::run(
            actions::ADD_ESLINT_WORKING_DIRECTORY,
            ctx,
            &config,
            None,
        ));
    }

    // A failure is reported but does not halt the remaining operations.
    let mut failures = 0usize;
    for outcome in &outcomes {
        if outcome.success {
            println!("{} {}", style("✓").green(), outcome.message);
        } else {
            println!("{} {}", style("✗").red(), outcome.message);
            failures += 1;
        }
    }
    if failures > 0 {
        anyhow::bail!("{} of {} operations failed", failures, outcomes.len());
    }
    Ok(())
}

/// Build the answer set from flags alone.
fn answers_from_flags(args: BootstrapArgs) -> Result<BootstrapAnswers> {
    let name = args
        .name
        .ok_or_else(|| anyhow::anyhow!("--name is required with --no-input"))?;
    validate_package_name(&name).map_err(|reason| anyhow::anyhow!(reason))?;

    let author = AuthorUpdate {
        name: args.author_name,
        email: args.author_email,
        url: args.author_url,
    };
    let child = DescriptorUpdate {
        name,
        version: args.version.unwrap_or_else(|| "0.0.0".to_string()),
        description: args.description,
        homepage: args.homepage,
        author: author.clone(),
        repository_url: args.repository.clone(),
    };
    let root = DescriptorUpdate {
        name: args.root_name.unwrap_or_else(|| child.name.clone()),
        version: "0.0.0".to_string(),
        description: args.root_description,
        homepage: args
            .repository
            .as_deref()
            .map(|remote| readme_homepage(remote, "")),
        author,
        repository_url: args.repository,
    };

    Ok(BootstrapAnswers {
        init: args.init,
        workspace: args.workspace.unwrap_or_else(|| "pkg".to_string()),
        root,
        child,
    })
}

/// Run the prompt wizard, seeding defaults from repository metadata. Flags
/// that were passed become the prompt defaults.
fn prompt_for_answers(ctx: &Context, args: BootstrapArgs) -> Result<BootstrapAnswers> {
    let theme = ColorfulTheme::default();
    let repo = GitCli::new(&ctx.root);
    // Metadata lookups only seed defaults; a missing git/gh setup leaves
    // the defaults empty instead of failing the command.
    let remote = repo.remote_url().ok();
    let repo_title = repo.title().ok();
    let repo_description = repo.description().ok();
    let user = repo.user().ok();

    let init = if args.init {
        true
    } else {
        // A monorepo with no registered workspaces has likely never been
        // bootstrapped; offer to rewrite the root as well.
        let fresh = workspace::registered(ctx)
            .map(|registered| registered.is_empty())
            .unwrap_or(true);
        fresh
            && Confirm::with_theme(&theme)
                .with_prompt("No workspaces registered yet. Rewrite the root package.json too?")
                .default(true)
                .interact()?
    };

    let workspace_dir: String = Input::with_theme(&theme)
        .with_prompt("Workspace package directory?")
        .default(args.workspace.unwrap_or_else(|| "pkg".to_string()))
        .interact_text()?;

    let title: String = Input::with_theme(&theme)
        .with_prompt("Package title (human readable)?")
        .default(repo_title.clone().unwrap_or_default())
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("You must add a package title".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let name: String = Input::with_theme(&theme)
        .with_prompt("Package name (npm)?")
        .default(args.name.unwrap_or_else(|| slugify(&title)))
        .validate_with(|input: &String| validate_package_name(input))
        .interact_text()?;

    let version: String = Input::with_theme(&theme)
        .with_prompt("Package version (semver)?")
        .default(args.version.unwrap_or_else(|| "0.0.0".to_string()))
        .validate_with(|input: &String| {
            Version::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Package description?")
        .default(
            args.description
                .or_else(|| repo_description.clone())
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;

    let repository: String = Input::with_theme(&theme)
        .with_prompt("The URL of your package's parent git repo?")
        .default(args.repository.or_else(|| remote.clone()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(validate_optional_url)
        .interact_text()?;

    let homepage_default = args.homepage.unwrap_or_else(|| {
        if repository.is_empty() {
            String::new()
        } else {
            readme_homepage(&repository, &workspace_dir)
        }
    });
    let homepage: String = Input::with_theme(&theme)
        .with_prompt("The URL of your package's README.md?")
        .default(homepage_default)
        .allow_empty(true)
        .validate_with(validate_optional_url)
        .interact_text()?;

    let author_name: String = Input::with_theme(&theme)
        .with_prompt("Author name? (your full name)")
        .default(
            args.author_name
                .or_else(|| user.as_ref().map(|u| u.name.clone()))
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;

    let author_email: String = Input::with_theme(&theme)
        .with_prompt("Author email? (will be public if your package is public)")
        .default(
            args.author_email
                .or_else(|| user.as_ref().map(|u| u.email.clone()))
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;

    let author_url: String = Input::with_theme(&theme)
        .with_prompt("Author URL? (optional link to your website)")
        .default(args.author_url.unwrap_or_default())
        .allow_empty(true)
        .validate_with(validate_optional_url)
        .interact_text()?;

    let author = AuthorUpdate {
        name: opt(author_name),
        email: opt(author_email),
        url: opt(author_url),
    };
    let child = DescriptorUpdate {
        name,
        version,
        description: opt(description),
        homepage: opt(homepage),
        author: author.clone(),
        repository_url: opt(repository.clone()),
    };

    // The root descriptor is derived from repository metadata rather than a
    // second round of prompts; it is reconciled against its own update.
    let root_title = repo_title.unwrap_or_else(|| title.clone());
    let root = DescriptorUpdate {
        name: args.root_name.unwrap_or_else(|| slugify(&root_title)),
        version: "0.0.0".to_string(),
        description: args.root_description.or(repo_description),
        homepage: opt(repository.clone()).map(|remote| readme_homepage(&remote, "")),
        author,
        repository_url: opt(repository),
    };

    Ok(BootstrapAnswers {
        init,
        workspace: workspace_dir,
        root,
        child,
    })
}

/// Derive a README homepage URL from a git remote and a workspace path.
fn readme_homepage(remote: &str, workspace: &str) -> String {
    let base = remote.trim_end_matches(".git");
    if workspace.is_empty() {
        format!("{}#readme", base)
    } else {
        format!("{}/{}#readme", base, workspace)
    }
}

fn validate_optional_url(input: &String) -> std::result::Result<(), String> {
    if input.is_empty() {
        Ok(())
    } else {
        Url::parse(input).map(|_| ()).map_err(|e| e.to_string())
    }
}

fn opt(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

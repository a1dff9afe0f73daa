use crate::{banner::print_banner, dates, git, plan, prompt};

use console::style;
use std::{env, path::Path};

/// Branch that receives the fabricated history.
const TARGET_BRANCH: &str = "main";

/// Remote the branch is force-pushed to.
const REMOTE_NAME: &str = "origin";

/// The three values collected interactively before a run.
struct RunInputs {
    repo_path: String,
    remote_url: String,
    primary_file: String,
}

/// Verifies git is available on `PATH`.
fn verify_environment() -> Result<(), ()> {
    match which::which("git") {
        Ok(_) => Ok(()),
        Err(_) => {
            eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
            Err(())
        }
    }
}

/// Prompts for the repository path, remote URL, and primary file, returning trimmed values.
fn gather_inputs() -> Result<RunInputs, ()> {
    let mut string_prompter = prompt::DialoguerStringPrompter;

    let repo_path = match prompt::ask(
        &mut string_prompter,
        "Path to the Git repository",
        "./my-project",
    ) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
            return Err(());
        }
    };

    let remote_url = match prompt::ask(
        &mut string_prompter,
        "Git remote URL",
        "https://github.com/user/my-project.git",
    ) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
            return Err(());
        }
    };

    let primary_file = match prompt::ask(&mut string_prompter, "Main file to commit first", "index.js")
    {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
            return Err(());
        }
    };

    Ok(RunInputs {
        repo_path: repo_path.trim().to_string(),
        remote_url: remote_url.trim().to_string(),
        primary_file: primary_file.trim().to_string(),
    })
}

/// Reports a failed git step without aborting the run.
fn report_step_failure(what: &str, err: &str) {
    eprintln!(
        "{}",
        style(format!("{} failed: {}", what, err)).red().bold()
    );
}

/// Determines whether the currently checked-out branch already is the target.
///
/// Both names are compared after trimming leading and trailing whitespace.
///
/// # Parameters
///
/// * `current` – The branch name reported by git.
/// * `target` – The branch the run wants to be on.
///
/// # Returns
///
/// * `true` if the names match after trimming.
/// * `false` otherwise.
pub(crate) fn branch_matches(current: &str, target: &str) -> bool {
    current.trim() == target.trim()
}

/// Ensures the current directory is a repository on the target branch.
///
/// Initializes the repository, attaches the remote, and creates the branch
/// when no `.git` directory exists yet. Afterwards the checked-out branch
/// is aligned with the target. Every git failure here is reported and the
/// run continues; a repository stuck on another branch still gets its
/// commits, just not where expected.
fn ensure_repository(remote_url: &str) {
    if !git::is_repository(Path::new(".")) {
        match git::init() {
            Ok(_) => {}
            Err(e) => report_step_failure("`git init`", &e),
        }
        match git::remote_add(REMOTE_NAME, remote_url) {
            Ok(_) => {}
            Err(e) => report_step_failure("`git remote add`", &e),
        }
        match git::switch_new_branch(TARGET_BRANCH) {
            Ok(_) => {}
            Err(e) => report_step_failure("`git checkout -b`", &e),
        }
    }

    let on_target = match git::current_branch() {
        Ok(branch) => branch_matches(&branch, TARGET_BRANCH),
        Err(_) => false,
    };

    if !on_target {
        match git::switch_new_branch(TARGET_BRANCH) {
            Ok(_) => {}
            Err(e) => report_step_failure("`git checkout -b`", &e),
        }
    }
}

/// Creates the bootstrap commit when the repository has no history yet.
///
/// Stages and commits `.gitignore` if one exists; otherwise records an
/// empty commit so the backdated commits have a parent.
fn bootstrap_history() {
    if git::has_commits() {
        return;
    }

    println!("Creating initial commit...");
    if Path::new(".gitignore").exists() {
        match git::add(".gitignore") {
            Ok(_) => {}
            Err(e) => report_step_failure("`git add .gitignore`", &e),
        }
        match git::commit("Initial commit") {
            Ok(_) => {}
            Err(e) => report_step_failure("`git commit`", &e),
        }
    } else {
        println!("No .gitignore found, creating empty initial commit...");
        match git::commit_empty("Initial commit") {
            Ok(_) => {}
            Err(e) => report_step_failure("`git commit --allow-empty`", &e),
        }
    }
}

/// Stages one planned file and commits it with its fabricated date.
fn commit_step(step: &plan::CommitStep) {
    match git::add(&step.path) {
        Ok(_) => {}
        Err(e) => report_step_failure(&format!("`git add {}`", step.path), &e),
    }

    let status = match git::status_porcelain() {
        Ok(s) => s,
        Err(e) => {
            report_step_failure("`git status --porcelain`", &e);
            return;
        }
    };

    if git::staged_changes_present(&status) {
        let timestamp = dates::format_timestamp(step.date);
        match git::commit_dated(&step.message, &timestamp) {
            Ok(_) => {
                println!(
                    "{}",
                    style(format!("Committed {} with date {}", step.path, step.date)).green()
                );
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    style(format!("❌ Failed to commit {}: {}", step.path, e))
                        .red()
                        .bold()
                );
            }
        }
    } else {
        println!("No changes to commit for {}, skipping.", step.path);
    }
}

/// Runs the commit loop, consuming the plan one step at a time.
fn run_commit_loop(steps: &[plan::CommitStep]) {
    for step in steps {
        if !Path::new(&step.path).exists() {
            println!(
                "{}",
                style(format!("File {} does not exist, skipping.", step.path)).yellow()
            );
            continue;
        }

        commit_step(step);
    }
}

/// Force-pushes the target branch and prints remediation hints on failure.
fn publish() {
    println!("Pushing to remote repository...");
    match git::push_force(REMOTE_NAME, TARGET_BRANCH) {
        Ok(_) => {
            println!(
                "{}",
                style("✅ Successfully pushed to GitHub!").green().bold()
            );
        }
        Err(e) => {
            eprintln!("{}", style(format!("❌ Push failed: {}", e)).red().bold());
            println!(
                "{}",
                style("Failed to push to GitHub. Try the following:")
                    .yellow()
                    .bold()
            );
            println!("  - Ensure you have a valid personal access token (PAT) for HTTPS authentication.");
            println!(
                "  - Run `git push -f {} {}` manually to see detailed errors.",
                REMOTE_NAME, TARGET_BRANCH
            );
            println!("  - Verify the main file and other sensitive files for secrets.");
        }
    }
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
git-backdate {}

Fabricate a backdated commit history and force-push it.

USAGE:
    git-backdate [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

DESCRIPTION:
    This tool prompts for a repository path, a remote URL, and the file to
    commit first, then commits every file in the repository one at a time
    with author and committer dates drawn at random from a fixed historical
    window, and finally force-pushes the `main` branch to `origin`.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `git-backdate`.
///
/// This function:
/// 1. Parses CLI flags (`--help`, `--version`).
/// 2. Verifies that `git` is installed.
/// 3. Prompts for the repository path, remote URL, and primary file.
/// 4. Aborts cleanly if the repository path does not exist.
/// 5. Initializes the repository, remote, and branch as needed.
/// 6. Enumerates the files and moves the primary file to the front.
/// 7. Creates a bootstrap commit for repositories without history.
/// 8. Commits each file with a fabricated date from the fixed window.
/// 9. Force-pushes the branch, printing remediation hints on failure.
///
/// Returns `Ok(exit_code)` on completion, or `Err(())` on error.
///
/// # Errors
///
/// Returns `Err(())` only when the surrounding environment is unusable:
/// - `git` is not found in `PATH`.
/// - Prompts fail.
///
/// Everything the run itself can get wrong — a missing repository path, a
/// missing primary file, individual git failures, a rejected push — is
/// reported as text and still ends in a clean exit.
///
/// # Exit Codes
///
/// * `0` – The run completed (including runs that only printed diagnostics).
/// * Non-zero – `git` missing or prompt input unavailable.
pub fn entry() -> Result<i32, ()> {
    // Parse command-line arguments.
    let args: Vec<String> = env::args().collect();

    // Handle --help flag.
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(0);
    }

    // Handle --version flag.
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("git-backdate {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    // Verify environment.
    verify_environment()?;

    // Prompt for the run inputs.
    let inputs = gather_inputs()?;

    // The repository path is the one fatal precondition: nothing on disk
    // has been touched yet, so a missing directory ends the run here.
    let repo_root = Path::new(&inputs.repo_path);
    if !repo_root.exists() {
        eprintln!(
            "{}",
            style(format!("Directory {} does not exist.", inputs.repo_path))
                .red()
                .bold()
        );
        return Ok(0);
    }

    match env::set_current_dir(repo_root) {
        Ok(_) => {}
        Err(e) => {
            eprintln!(
                "{}",
                style(format!(
                    "Cannot enter directory {}: {}",
                    inputs.repo_path, e
                ))
                .red()
                .bold()
            );
            return Ok(0);
        }
    }

    // Initialize repository, remote, and branch as needed.
    ensure_repository(&inputs.remote_url);

    // Enumerate files and move the primary file to the front.
    let mut files = plan::enumerate_files(Path::new("."));
    match plan::promote_primary(&mut files, &inputs.primary_file, Path::new(".")) {
        plan::PrimaryPlacement::Reordered | plan::PrimaryPlacement::Prepended => {}
        plan::PrimaryPlacement::Missing => {
            println!(
                "{}",
                style(format!(
                    "Main file {} not found, proceeding with other files.",
                    inputs.primary_file
                ))
                .yellow()
            );
        }
    }

    let total = files.len();
    println!("Total number of files to commit: {}", total);
    println!("Files: {}", files.join(", "));

    if total == 0 {
        println!("No files found to commit.");
        return Ok(0);
    }

    let window = match dates::history_window() {
        Ok(w) => w,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Invalid date window: {}", e)).red().bold()
            );
            return Err(());
        }
    };

    // Show banner with the run summary.
    print_banner(TARGET_BRANCH, REMOTE_NAME, &window, total);

    // Make sure the backdated commits will have a parent.
    bootstrap_history();

    // Build the plan once, then consume it.
    let steps = plan::build_plan(files, &window);
    run_commit_loop(&steps);

    // Publish the fabricated history.
    publish();

    Ok(0)
}

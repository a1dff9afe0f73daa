use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable that overrides the author date of a commit.
///
/// Accepts ISO 8601 timestamps such as `2025-03-14T00:00:00`.
pub const GIT_AUTHOR_DATE: &str = "GIT_AUTHOR_DATE";

/// Environment variable that overrides the committer date of a commit.
///
/// Accepts the same formats as [`GIT_AUTHOR_DATE`].
pub const GIT_COMMITTER_DATE: &str = "GIT_COMMITTER_DATE";

/// Runs a Git (or other) command and returns only its exit status.
///
/// This function executes the provided [`std::process::Command`] and:
/// - Returns `Ok(())` if the command exits successfully (status code `0`).
/// - Returns `Err("non-zero exit")` if the command exits with a non-zero status.
/// - Returns `Err` containing the I/O error message if the process fails to start.
///
/// # Parameters
///
/// * `cmd` — A fully configured [`std::process::Command`] to run.
///
/// # Returns
///
/// * `Ok(())` if the command succeeded.
/// * `Err(String)` with either `"non-zero exit"` or an error message if it failed.
///
/// # Examples
///
/// ```ignore
/// use std::process::Command;
///
/// let cmd = Command::new("git").arg("status");
/// match run_status(cmd) {
///     Ok(()) => println!("Git command succeeded"),
///     Err(e) => eprintln!("Git command failed: {}", e),
/// }
/// ```
fn run_status(mut cmd: Command) -> Result<(), String> {
    let status_res = cmd.status();

    match status_res {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(String::from("non-zero exit"))
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Runs a command and returns its trimmed standard output on success,
/// or its standard error as an `Err` on failure.
///
/// This function executes the provided [`std::process::Command`] and:
/// - If the command exits with a zero status, its `stdout` is captured,
///   converted to UTF-8 (lossy), trimmed, and returned as `Ok(String)`.
/// - If the command exits non-zero, its `stderr` is captured,
///   converted to UTF-8 (lossy), trimmed, and returned as `Err(String)`.
/// - If the process fails to spawn, the I/O error message is returned as `Err(String)`.
///
/// # Parameters
///
/// * `cmd` — A fully configured [`std::process::Command`] ready to execute.
///
/// # Returns
///
/// * `Ok(String)` containing trimmed `stdout` if the command succeeded.
/// * `Err(String)` containing trimmed `stderr` or I/O error message otherwise.
///
/// # Examples
///
/// ```ignore
/// // This example is illustrative only; it won't run in doctests because
/// // this function is crate-private and may depend on environment state.
/// use std::process::Command;
/// let cmd = Command::new("git").arg("rev-parse").arg("--abbrev-ref").arg("HEAD");
/// match run_output(cmd) {
///     Ok(branch) => println!("Current branch: {}", branch),
///     Err(err) => eprintln!("Git error: {}", err),
/// }
/// ```
fn run_output(mut cmd: Command) -> Result<String, String> {
    let out_res = cmd.output();
    match out_res {
        Ok(out) => {
            if out.status.success() {
                Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                Err(String::from_utf8_lossy(&out.stderr).trim().to_string())
            }
        }
        Err(e) => Err(format!("{}", e)),
    }
}

/// Detects whether a directory is already a Git repository.
///
/// This checks for the presence of the `.git` metadata directory directly,
/// without invoking Git.
///
/// # Parameters
///
/// * `path` – Path to the candidate repository root.
///
/// # Returns
///
/// * `true` if `<path>/.git` exists.
/// * `false` otherwise.
///
/// # Examples
///
/// ```ignore
/// use std::path::Path;
/// use git_backdate::git::is_repository;
///
/// if is_repository(Path::new(".")) {
///     println!("Already initialized.");
/// }
/// ```
pub fn is_repository(path: &Path) -> bool {
    let meta = PathBuf::from(path).join(".git");

    if meta.exists() { true } else { false }
}

/// Initializes a new Git repository in the current working directory.
///
/// Runs `git init`. Output is suppressed; only the exit status is checked.
///
/// # Returns
///
/// * `Ok(())` if the repository was initialized.
/// * `Err(String)` if the command failed.
pub fn init() -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("init");
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::piped());
    run_status(cmd)
}

/// Adds a remote to the repository in the current working directory.
///
/// Runs `git remote add <name> <url>`.
///
/// # Parameters
///
/// * `name` – The remote name, e.g. `"origin"`.
/// * `url` – The remote URL.
///
/// # Returns
///
/// * `Ok(())` if the remote was added.
/// * `Err(String)` if the command failed (e.g. the remote already exists).
pub fn remote_add(name: &str, url: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("remote").arg("add").arg(name).arg(url);
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::piped());
    run_status(cmd)
}

/// Creates a branch and switches to it.
///
/// Runs `git checkout -b <branch>`. Git refuses to re-create an existing
/// branch, in which case this returns an error and the repository stays on
/// its current branch.
///
/// # Parameters
///
/// * `branch` – Name of the branch to create.
///
/// # Returns
///
/// * `Ok(())` if the branch was created and checked out.
/// * `Err(String)` if the command failed.
pub fn switch_new_branch(branch: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("checkout").arg("-b").arg(branch);
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::piped());
    run_status(cmd)
}

/// Returns the name of the branch currently checked out.
///
/// Runs `git rev-parse --abbrev-ref HEAD` and captures its output.
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed branch name.
/// * `Err(String)` containing the trimmed standard error if the query
///   failed, which includes repositories without any commit.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it depends on being inside a Git repository.
/// use git_backdate::git::current_branch;
///
/// match current_branch() {
///     Ok(branch) => println!("On branch: {}", branch),
///     Err(err) => eprintln!("Git error: {}", err),
/// }
/// ```
pub fn current_branch() -> Result<String, String> {
    let mut cmd = Command::new("git");
    cmd.arg("rev-parse").arg("--abbrev-ref").arg("HEAD");
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    run_output(cmd)
}

/// Reports whether the repository has at least one commit.
///
/// Runs `git log --oneline` and treats both a failing query (no HEAD yet)
/// and empty output as "no history".
///
/// # Returns
///
/// * `true` if the log printed at least one line.
/// * `false` otherwise.
pub fn has_commits() -> bool {
    let mut cmd = Command::new("git");
    cmd.arg("log").arg("--oneline");
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    match run_output(cmd) {
        Ok(log) => !log.is_empty(),
        Err(_) => false,
    }
}

/// Stages a single file.
///
/// Runs `git add <path>`. The path is passed as a plain argument, never
/// through a shell, so names containing spaces or metacharacters are safe.
///
/// # Parameters
///
/// * `path` – Path of the file to stage, relative to the repository root.
///
/// # Returns
///
/// * `Ok(())` if the file was staged.
/// * `Err(String)` if the command failed.
pub fn add(path: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("add").arg(path);
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::piped());
    run_status(cmd)
}

/// Returns the porcelain status of the working tree.
///
/// Runs `git status --porcelain` and captures its output. An empty string
/// means the working tree and index are clean.
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed status listing.
/// * `Err(String)` if the query failed.
pub fn status_porcelain() -> Result<String, String> {
    let mut cmd = Command::new("git");
    cmd.arg("status").arg("--porcelain");
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    run_output(cmd)
}

/// Interprets porcelain status output as a commit-or-skip decision.
///
/// Any non-blank output counts as "there is something to commit". This is
/// deliberately coarse: unrelated untracked files also make the status
/// non-empty and will ride along with the staged file.
///
/// # Parameters
///
/// * `status` – Output of `git status --porcelain`.
///
/// # Returns
///
/// * `true` if the status output contains anything after trimming.
/// * `false` if the working tree is clean.
pub fn staged_changes_present(status: &str) -> bool {
    !status.trim().is_empty()
}

/// Creates a commit from whatever is currently staged.
///
/// This runs:
///
/// ```text
/// git commit -m "<message>"
/// ```
///
/// Standard input, output, and error are inherited so Git's own summary
/// line is shown to the user.
///
/// # Parameters
///
/// * `message` – The commit message.
///
/// # Returns
///
/// * `Ok(())` if the commit was created.
/// * `Err(String)` if the command failed or exited with a non-zero status.
pub fn commit(message: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("commit").arg("-m").arg(message);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd).map_err(|_| String::from("`git commit` returned non-zero"))
}

/// Creates an empty commit with the given message.
///
/// This runs:
///
/// ```text
/// git commit --allow-empty -m "<message>"
/// ```
///
/// Used to bootstrap a repository that has no history yet so later commits
/// have a parent.
///
/// # Parameters
///
/// * `message` – The commit message.
///
/// # Returns
///
/// * `Ok(())` if the commit was created.
/// * `Err(String)` if the command failed or exited with a non-zero status.
pub fn commit_empty(message: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("commit").arg("--allow-empty").arg("-m").arg(message);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd).map_err(|_| String::from("`git commit --allow-empty` returned non-zero"))
}

/// Creates a commit with forged author and committer dates.
///
/// This runs:
///
/// ```text
/// git commit -m "<message>"
/// ```
///
/// with [`GIT_AUTHOR_DATE`] and [`GIT_COMMITTER_DATE`] both set to
/// `timestamp` in the child process environment. The overlay is built
/// fresh on the [`Command`] for every call; the parent environment is
/// never mutated.
///
/// # Parameters
///
/// * `message` – The commit message.
/// * `timestamp` – ISO 8601 timestamp, e.g. `2025-03-14T00:00:00`.
///
/// # Returns
///
/// * `Ok(())` if the commit was created.
/// * `Err(String)` if the command failed or exited with a non-zero status.
///
/// # Notes
///
/// * Must be run inside a Git repository with staged changes.
/// * The commit date shown by `git log` will be the forged timestamp,
///   not the wall-clock time of execution.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a Git repository with staged changes.
/// use git_backdate::git::commit_dated;
///
/// if let Err(err) = commit_dated("Add src/main.rs", "2025-03-14T00:00:00") {
///     eprintln!("Failed to commit: {}", err);
/// }
/// ```
pub fn commit_dated(message: &str, timestamp: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("commit").arg("-m").arg(message);
    cmd.env(GIT_AUTHOR_DATE, timestamp);
    cmd.env(GIT_COMMITTER_DATE, timestamp);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd).map_err(|_| String::from("`git commit` returned non-zero"))
}

/// Force-pushes a branch to a remote.
///
/// This runs:
///
/// ```text
/// git push -f <remote> <branch>
/// ```
///
/// Standard input, output, and error are inherited so authentication
/// prompts and transfer progress reach the user directly.
///
/// # Parameters
///
/// * `remote` – The remote name, e.g. `"origin"`.
/// * `branch` – The branch to push.
///
/// # Returns
///
/// * `Ok(())` if the push succeeded.
/// * `Err(String)` if the command failed or exited with a non-zero status.
///
/// # Notes
///
/// * This overwrites the remote branch unconditionally; any history on
///   the remote that is not in the local branch is lost.
pub fn push_force(remote: &str, branch: &str) -> Result<(), String> {
    let mut cmd = Command::new("git");
    cmd.arg("push").arg("-f").arg(remote).arg(branch);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());
    run_status(cmd).map_err(|_| String::from("`git push -f` exited with non-zero status"))
}

#[cfg(test)]
mod tests {
    use super::is_repository;
    use super::staged_changes_present;
    use std::fs;
    use std::path::Path;

    #[test]
    fn repository_detection_smoke() {
        let tmp = tempfile::tempdir();
        match tmp {
            Ok(dir) => {
                assert_eq!(is_repository(dir.path()), false);
                let mk = fs::create_dir_all(dir.path().join(".git"));
                match mk {
                    Ok(_) => {}
                    Err(_) => {
                        assert!(false);
                    }
                }
                assert_eq!(is_repository(Path::new(dir.path())), true);
            }
            Err(_) => assert!(false),
        }
    }

    #[test]
    fn empty_status_means_nothing_staged() {
        assert_eq!(staged_changes_present(""), false);
        assert_eq!(staged_changes_present("   \n  "), false);
    }

    #[test]
    fn porcelain_lines_mean_changes() {
        assert_eq!(staged_changes_present("A  src/main.rs"), true);
        assert_eq!(staged_changes_present("?? notes.txt\n"), true);
    }
}

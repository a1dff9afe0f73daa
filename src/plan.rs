use std::path::Path;

use chrono::NaiveDate;
use walkdir::WalkDir;

use crate::dates::DateRange;

/// File names that are never committed.
pub const SKIP_FILES: &[&str] = &["package.json1"];

/// One entry of the commit plan: a file, its fabricated date, and the
/// message that will carry both into the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitStep {
    /// Path relative to the repository root.
    pub path: String,
    /// The fabricated commit date.
    pub date: NaiveDate,
    /// Full commit message, embedding path, date, and position.
    pub message: String,
}

/// Where the primary file ended up relative to the enumerated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryPlacement {
    /// Found in the listing and moved to the front.
    Reordered,
    /// Absent from the listing but present on disk; prepended.
    Prepended,
    /// Not found anywhere; the listing is unchanged.
    Missing,
}

/// Recursively lists every file under `root` as repository-relative paths.
///
/// The `.git` metadata directory is pruned entirely, and file names listed
/// in [`SKIP_FILES`] are dropped. Entries are visited in file-name order
/// so the listing is stable across runs.
///
/// # Parameters
///
/// * `root` – The repository root to walk.
///
/// # Returns
///
/// * Relative path strings for every regular file found. Unreadable
///   entries are silently skipped.
pub fn enumerate_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name().to_string_lossy() == ".git"));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if SKIP_FILES.contains(&name.as_ref()) {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(p) => p,
            Err(_) => entry.path(),
        };
        files.push(rel.to_string_lossy().into_owned());
    }

    files
}

/// Moves the primary file to the front of the listing.
///
/// Three outcomes, in order of preference:
/// 1. The primary file is already in the listing: it is moved to index 0.
/// 2. It is not in the listing but exists under `root`: it is prepended.
/// 3. It cannot be found at all: the listing is left untouched.
///
/// # Parameters
///
/// * `files` – The enumerated listing, mutated in place.
/// * `primary` – Relative path of the file that must be committed first.
/// * `root` – The repository root, used for the on-disk fallback check.
///
/// # Returns
///
/// * A [`PrimaryPlacement`] describing which outcome applied.
pub fn promote_primary(files: &mut Vec<String>, primary: &str, root: &Path) -> PrimaryPlacement {
    if let Some(pos) = files.iter().position(|f| f == primary) {
        let entry = files.remove(pos);
        files.insert(0, entry);
        return PrimaryPlacement::Reordered;
    }

    if root.join(primary).exists() {
        files.insert(0, primary.to_string());
        return PrimaryPlacement::Prepended;
    }

    PrimaryPlacement::Missing
}

/// Formats the message for one fabricated commit.
///
/// The message embeds the file path, the fabricated date, and the 1-based
/// position out of the total file count, e.g.
/// `Add src/main.rs on 2025-03-14 (1/12)`.
pub fn commit_message(path: &str, date: NaiveDate, index: usize, total: usize) -> String {
    format!(
        "Add {} on {} ({}/{})",
        path,
        date.format("%Y-%m-%d"),
        index,
        total
    )
}

/// Builds the full commit plan from an ordered file listing.
///
/// One date is sampled from `window` per file, in listing order, and the
/// commit message is rendered immediately. The plan is built once and
/// consumed once; dates are neither sorted nor deduplicated, so two files
/// may share a date or appear out of calendar order.
///
/// # Parameters
///
/// * `files` – The ordered listing, primary file first.
/// * `window` – The window fabricated dates are drawn from.
///
/// # Returns
///
/// * One [`CommitStep`] per input file, in the same order.
pub fn build_plan(files: Vec<String>, window: &DateRange) -> Vec<CommitStep> {
    let total = files.len();

    files
        .into_iter()
        .enumerate()
        .map(|(i, path)| {
            let date = window.sample();
            let message = commit_message(&path, date, i + 1, total);
            CommitStep {
                path,
                date,
                message,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        CommitStep, PrimaryPlacement, build_plan, commit_message, enumerate_files, promote_primary,
    };
    use crate::dates::DateRange;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(y, m, d) {
            Some(v) => v,
            None => panic!("bad test date"),
        }
    }

    fn touch(path: &Path) {
        match fs::write(path, b"x") {
            Ok(_) => {}
            Err(_) => assert!(false),
        }
    }

    #[test]
    fn enumeration_skips_metadata_and_excluded_names() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let root = tmp.path();

        touch(&root.join("a.txt"));
        touch(&root.join("package.json1"));
        fs::create_dir_all(root.join(".git")).expect("failed to create .git");
        touch(&root.join(".git").join("config"));
        fs::create_dir_all(root.join("src")).expect("failed to create src");
        touch(&root.join("src").join("main.rs"));

        let files = enumerate_files(root);

        assert_eq!(files, vec!["a.txt".to_string(), "src/main.rs".to_string()]);
    }

    #[test]
    fn enumeration_of_empty_directory_is_empty() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let files = enumerate_files(tmp.path());
        assert_eq!(files.len(), 0);
    }

    #[test]
    fn primary_in_listing_is_moved_to_front() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let mut files = vec![
            "a.txt".to_string(),
            "index.js".to_string(),
            "z.txt".to_string(),
        ];

        let placement = promote_primary(&mut files, "index.js", tmp.path());

        assert_eq!(placement, PrimaryPlacement::Reordered);
        assert_eq!(files[0], "index.js");
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn primary_on_disk_only_is_prepended() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        touch(&tmp.path().join("index.js"));
        let mut files = vec!["a.txt".to_string()];

        let placement = promote_primary(&mut files, "index.js", tmp.path());

        assert_eq!(placement, PrimaryPlacement::Prepended);
        assert_eq!(files, vec!["index.js".to_string(), "a.txt".to_string()]);
    }

    #[test]
    fn missing_primary_leaves_listing_unchanged() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let mut files = vec!["a.txt".to_string(), "b.txt".to_string()];

        let placement = promote_primary(&mut files, "index.js", tmp.path());

        assert_eq!(placement, PrimaryPlacement::Missing);
        assert_eq!(files, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn message_embeds_path_date_and_position() {
        let msg = commit_message("src/main.rs", date(2025, 3, 14), 1, 12);
        assert_eq!(msg, "Add src/main.rs on 2025-03-14 (1/12)");
    }

    #[test]
    fn plan_keeps_order_and_samples_inside_window() {
        let window = DateRange::new(date(2025, 2, 16), date(2025, 9, 28))
            .expect("failed to build window");
        let files = vec!["a.txt".to_string(), "b.txt".to_string()];

        let plan = build_plan(files, &window);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].path, "a.txt");
        assert_eq!(plan[1].path, "b.txt");
        for step in &plan {
            assert!(step.date >= date(2025, 2, 16));
            assert!(step.date < date(2025, 9, 28));
        }
        assert_eq!(plan[0].message, commit_message("a.txt", plan[0].date, 1, 2));
        assert_eq!(plan[1].message, commit_message("b.txt", plan[1].date, 2, 2));
    }

    #[test]
    fn promoted_primary_lands_at_plan_index_zero() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let root = tmp.path();
        touch(&root.join("a.txt"));
        touch(&root.join("b.txt"));

        let mut files = enumerate_files(root);
        promote_primary(&mut files, "a.txt", root);

        let window = DateRange::new(date(2025, 2, 16), date(2025, 9, 28))
            .expect("failed to build window");
        let plan: Vec<CommitStep> = build_plan(files, &window);

        assert_eq!(plan[0].path, "a.txt");
        assert_eq!(plan[1].path, "b.txt");
    }
}

use console::{measure_text_width, style};
use std::iter;

use crate::dates::DateRange;

/// Prints a decorative, colorized banner describing the backdating run.
///
/// The banner is dynamically sized to fit the widest **visible** line of text,
/// using [`console::measure_text_width`] to ignore ANSI color codes when
/// calculating padding. It is framed with Unicode box-drawing characters
/// (`╔═╗`, `║ ║`, `╚═╝`) and uses [`console::style`] for coloring and bolding.
///
/// Borders are styled independently from the inner text so that embedded color
/// codes inside the content (e.g. the yellow force-push warning) do not
/// affect the color of the box edges.
///
/// # Parameters
///
/// * `branch` – The branch that will receive the fabricated commits.
/// * `remote` – The remote the branch will be force-pushed to.
/// * `window` – The date window commit timestamps are drawn from.
/// * `total` – Number of files queued for individual commits.
///
/// # Output
///
/// This function prints directly to standard output. It does not return any value.
///
/// # Examples
///
/// ```no_run
/// use git_backdate::banner::print_banner;
/// use git_backdate::dates::history_window;
///
/// fn main() {
///     let window = history_window().unwrap();
///     print_banner("main", "origin", &window, 12);
/// }
/// ```
pub fn print_banner(branch: &str, remote: &str, window: &DateRange, total: usize) {
    let lines = banner_lines(branch, remote, window, total);

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l)) // ignore ANSI in content
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible; // includes the one space after left border
        // build row: [blue left] + [colored line] + [padding spaces] + [blue right]
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Constructs the lines of text for the backdating banner.
///
/// Returns each banner line as a `String`, in the order they should be
/// displayed: 1) title, 2) date-window summary, 3) force-push warning,
/// 4) file count.
///
/// **Note:** This function **may include ANSI styling** in some lines:
/// the date window is cyan and the force-push warning is yellow + bold.
/// Consumers that need accurate width calculations should measure **visible**
/// width (e.g., with `console::measure_text_width`) rather than `str::len()`.
///
/// # Parameters
///
/// * `branch` – The branch that will receive the fabricated commits.
/// * `remote` – The remote the branch will be force-pushed to.
/// * `window` – The date window commit timestamps are drawn from.
/// * `total` – Number of files queued for individual commits.
///
/// # Returns
///
/// A vector of `String` values (some may contain ANSI escape codes for color).
fn banner_lines(branch: &str, remote: &str, window: &DateRange, total: usize) -> Vec<String> {
    let top = ["Fabricate a backdated commit history", ""]
        .into_iter()
        .map(|s| s.to_string());

    let dates = vec![
        style("Commit dates are drawn at random from:")
            .cyan()
            .bold()
            .to_string(),
        style(format!(
            "  {} up to (not including) {}",
            window.start(),
            window.end()
        ))
        .cyan()
        .to_string(),
    ]
    .into_iter();

    let bottom = iter::once(String::new())
        .chain(iter::once(
            style(format!(
                "Branch `{}` will be force-pushed to `{}`.",
                branch, remote
            ))
            .yellow()
            .bold()
            .to_string(),
        ))
        .chain(iter::once(format!(
            "Files queued for individual commits: {}",
            total
        )));

    top.chain(dates).chain(bottom).collect()
}

#[cfg(test)]
mod tests {
    use super::banner_lines;
    use crate::dates::history_window;

    #[test]
    fn banner_lines_and_width_are_correct() {
        let window = history_window().expect("failed to build window");
        let lines = banner_lines("main", "origin", &window, 12);
        let s = lines.join("\n");

        assert!(s.contains("Fabricate a backdated commit history"));
        assert!(s.contains("2025-02-16 up to (not including) 2025-09-28"));
        assert!(s.contains("Branch `main` will be force-pushed to `origin`."));
        assert!(s.contains("Files queued for individual commits: 12"));

        // Width logic: ensure max width is computed correctly for these lines
        let max_line = lines.iter().map(|l| l.len()).max().unwrap_or(0);

        // Sanity check: header should be the max or near-max
        assert!(max_line >= "Fabricate a backdated commit history".len());
    }

    #[test]
    fn banner_counts_reflect_the_listing() {
        let window = history_window().expect("failed to build window");
        let lines = banner_lines("main", "origin", &window, 0);
        let s = lines.join("\n");

        assert!(s.contains("Files queued for individual commits: 0"));
    }
}

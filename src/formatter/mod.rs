//! Output rendering for shell commands.
//!
//! Commands return plain text; this module turns the content tables into
//! aligned, terminal-friendly blocks:
//! - name/description grid for `help`
//! - name/URL grid for `links`
//! - column-major title listing for `movies`
//! - bordered table for `projects` (see [`table`])
//!
//! No ANSI styling happens here. Colors belong to the prompt, highlighter
//! and hint layers, so rendered output stays grep- and pipe-friendly.

pub mod table;

pub use table::projects_table;

use crate::content::{Movie, SocialLink};

/// Render two left-aligned columns, padding the first to its widest entry.
fn two_columns(rows: &[(&str, &str)]) -> String {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(left, right)| format!("{left:<width$}  {right}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the `help` grid: command names with their descriptions,
/// in the order given (the registry iterates alphabetically).
pub fn help_grid(entries: &[(&str, &str)]) -> String {
    two_columns(entries)
}

/// Render the `links` grid: profile names with their URLs.
pub fn links_grid(links: &[SocialLink]) -> String {
    let rows: Vec<(&str, &str)> = links.iter().map(|l| (l.name, l.url)).collect();
    two_columns(&rows)
}

/// Render the `movies` output: a summary line followed by the titles in
/// two column-major columns (reading order runs down the left column
/// first, like the source listing).
pub fn movies_overview(movies: &[Movie], profile_url: &str) -> String {
    let mut out = format!("Movies watched: {} | {}\n", movies.len(), profile_url);

    let rows = movies.len().div_ceil(2);
    let (left, right) = movies.split_at(rows.min(movies.len()));
    let width = left.iter().map(|m| m.title.len()).max().unwrap_or(0);

    for i in 0..rows {
        let left_title = &left[i].title;
        match right.get(i) {
            Some(movie) => {
                out.push_str(&format!("{left_title:<width$}  {}\n", movie.title));
            }
            None => {
                out.push_str(left_title);
                out.push('\n');
            }
        }
    }

    out.trim_end().to_string()
}

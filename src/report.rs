//! Human-readable summaries of a build's unmatched citations

use crate::graph::UnmatchedTitles;

/// How many of the most frequent unmatched titles to show
const TOP_EXAMPLES: usize = 10;

/// Longest title fragment shown before truncating with an ellipsis
const TITLE_TRUNCATE: usize = 50;

/// Total number of unmatched citation instances across all keys
pub fn unmatched_total(unmatched: &UnmatchedTitles) -> u64 {
    unmatched.values().sum()
}

/// One-paragraph summary of the unmatched tally, or `None` when every
/// citation matched.
///
/// Lists the top unmatched titles by frequency (ties broken alphabetically
/// so the summary is deterministic), each truncated to a readable length.
pub fn unmatched_summary(unmatched: &UnmatchedTitles) -> Option<String> {
    let total = unmatched_total(unmatched);
    if total == 0 {
        return None;
    }

    let mut ranked: Vec<(&str, u64)> = unmatched
        .iter()
        .map(|(title, &count)| (title.as_str(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let examples: Vec<String> = ranked
        .iter()
        .take(TOP_EXAMPLES)
        .map(|&(title, count)| format!("{} ({})", truncate(title), count))
        .collect();

    Some(format!(
        "Unmatched citation titles remain: {} citations not in dataset. Top examples: {}",
        total,
        examples.join(", ")
    ))
}

fn truncate(title: &str) -> String {
    // Normalized keys are ASCII by construction, but count chars anyway.
    if title.chars().count() > TITLE_TRUNCATE {
        let head: String = title.chars().take(TITLE_TRUNCATE).collect();
        format!("{head}…")
    } else {
        title.to_string()
    }
}

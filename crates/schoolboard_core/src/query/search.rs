//! Case-insensitive text search over announcements and substitutions.
//!
//! # Matching
//! - Announcements: `title`, `message`, `author`.
//! - Substitutions: `message`, `period`, `teacher`, `room`.
//!
//! # Ranking
//! Title matches sort before matches on secondary fields; within one rank the
//! newest item comes first. Substitution entries have no title, so they always
//! rank as secondary matches.

use super::{merged_feed, newest_first, FeedItem};
use crate::model::{Announcement, SubstitutionEntry};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Which field group produced the match. Orders best-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    Title,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub item: FeedItem<'a>,
    pub rank: MatchRank,
}

/// Searches both collections for `query`.
///
/// Returns an empty list for blank queries.
pub fn search<'a>(
    announcements: &'a [Announcement],
    substitutions: &'a [SubstitutionEntry],
    query: &str,
) -> Vec<SearchHit<'a>> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };

    let mut hits = merged_feed(announcements, substitutions)
        .filter_map(|item| {
            match_rank(&item, &needle).map(|rank| SearchHit { item, rank })
        })
        .collect::<Vec<_>>();

    hits.sort_by(|left, right| {
        left.rank
            .cmp(&right.rank)
            .then_with(|| newest_first(&left.item, &right.item))
    });
    hits
}

fn match_rank(item: &FeedItem<'_>, needle: &str) -> Option<MatchRank> {
    let contains = |field: &str| fold_whitespace(field).contains(needle);

    match item {
        FeedItem::Announcement(announcement) => {
            if contains(&announcement.title) {
                Some(MatchRank::Title)
            } else if contains(&announcement.message) || contains(&announcement.author) {
                Some(MatchRank::Secondary)
            } else {
                None
            }
        }
        FeedItem::Substitution(entry) => {
            let matched = contains(&entry.message)
                || contains(entry.period.as_str())
                || entry.teacher().is_some_and(contains)
                || entry.room().is_some_and(contains);
            matched.then_some(MatchRank::Secondary)
        }
    }
}

fn normalize_query(query: &str) -> Option<String> {
    let needle = fold_whitespace(query.trim());
    (!needle.is_empty()).then_some(needle)
}

/// Lowercases and collapses whitespace runs. Queries and fields are folded
/// alike.
fn fold_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{fold_whitespace, normalize_query};

    #[test]
    fn normalize_query_collapses_whitespace_and_lowercases() {
        assert_eq!(
            normalize_query("  Mirko \t  KLENNER ").as_deref(),
            Some("mirko klenner")
        );
    }

    #[test]
    fn fields_fold_like_queries() {
        assert_eq!(fold_whitespace("Treffpunkt Aula\n19  Uhr"), "treffpunkt aula 19 uhr");
    }

    #[test]
    fn normalize_query_rejects_blank_input() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \n\t "), None);
    }
}

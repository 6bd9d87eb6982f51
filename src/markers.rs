// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Marker region scanning and replacement inside README documents.
//!
//! A region for key `K` is the span strictly between the sentinels
//! `<!-- PROJECTS:K:START -->` and `<!-- PROJECTS:K:END -->`. Everything
//! outside the pair is preserved verbatim and replacement never introduces
//! line breaks, so a region renders inline (for example inside a table
//! cell). Keys are case-sensitive and drawn from `[A-Za-z0-9+-]`.
//!
//! When the same key delimits several pairs in one document only the first
//! pair is rewritten. This single-occurrence-per-key behavior is a known
//! limitation, kept for compatibility with the documents already in use.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

/// Matches any start sentinel and captures its marker key.
static START_SENTINEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*PROJECTS:([A-Za-z0-9+-]+):START\s*-->").expect("valid sentinel pattern")
});

/// Collects every marker key that appears in a paired start/end sentinel.
///
/// A key counts only when an end sentinel with the same key occurs after
/// its start sentinel. The result is ordered so downstream iteration is
/// deterministic.
///
/// # Example
///
/// ```
/// use gh_readme_updater::scan_marker_keys;
///
/// let document = "<!-- PROJECTS:python:START --><!-- PROJECTS:python:END -->";
/// let keys = scan_marker_keys(document);
/// assert!(keys.contains("python"));
/// ```
pub fn scan_marker_keys(document: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    for captures in START_SENTINEL.captures_iter(document) {
        let key = &captures[1];
        if keys.contains(key) {
            continue;
        }

        let start_match = captures.get(0).map_or(0, |m| m.end());
        if end_sentinel(key).is_match(&document[start_match..]) {
            keys.insert(key.to_owned());
        }
    }

    keys
}

/// Replaces the content strictly between the first sentinel pair for `key`.
///
/// The matched sentinel text is reproduced byte-for-byte and `content` is
/// inserted as-is, without added line breaks. When the document contains no
/// pair for `key` it is returned unchanged; this is not an error. Repeated
/// application with the same content is idempotent.
///
/// # Example
///
/// ```
/// use gh_readme_updater::replace_marker_region;
///
/// let document = "| <!-- PROJECTS:cpp:START -->OLD<!-- PROJECTS:cpp:END --> |";
/// let updated = replace_marker_region(document, "cpp", "NEW");
/// assert_eq!(
///     updated,
///     "| <!-- PROJECTS:cpp:START -->NEW<!-- PROJECTS:cpp:END --> |"
/// );
/// ```
pub fn replace_marker_region(document: &str, key: &str, content: &str) -> String {
    let pattern = marker_pair(key);

    let Some(captures) = pattern.captures(document) else {
        return document.to_owned();
    };

    let inner_start = captures
        .get(1)
        .map_or(0, |start_sentinel| start_sentinel.end());
    let inner_end = captures.get(3).map_or(document.len(), |end_sentinel| {
        end_sentinel.start()
    });

    let mut result = String::with_capacity(document.len() + content.len());
    result.push_str(&document[..inner_start]);
    result.push_str(content);
    result.push_str(&document[inner_end..]);
    result
}

fn end_sentinel(key: &str) -> Regex {
    let escaped = regex::escape(key);
    Regex::new(&format!(r"<!--\s*PROJECTS:{escaped}:END\s*-->")).expect("valid sentinel pattern")
}

fn marker_pair(key: &str) -> Regex {
    let escaped = regex::escape(key);
    Regex::new(&format!(
        r"(?s)(<!--\s*PROJECTS:{escaped}:START\s*-->)(.*?)(<!--\s*PROJECTS:{escaped}:END\s*-->)"
    ))
    .expect("valid marker pattern")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{replace_marker_region, scan_marker_keys};

    #[test]
    fn scan_finds_keys_in_paired_sentinels() {
        let document = "intro <!-- PROJECTS:python:START -->x<!-- PROJECTS:python:END --> \
                        <!-- PROJECTS:cpp:START --><!-- PROJECTS:cpp:END --> outro";
        let keys = scan_marker_keys(document);
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("python"));
        assert!(keys.contains("cpp"));
    }

    #[test]
    fn scan_ignores_unpaired_start_sentinels() {
        let document = "<!-- PROJECTS:python:START --> no end here";
        assert!(scan_marker_keys(document).is_empty());
    }

    #[test]
    fn scan_ignores_end_before_start() {
        let document = "<!-- PROJECTS:python:END --> text <!-- PROJECTS:python:START -->";
        assert!(scan_marker_keys(document).is_empty());
    }

    #[test]
    fn scan_is_case_sensitive() {
        let document = "<!-- PROJECTS:C:START --><!-- PROJECTS:C:END -->";
        let keys = scan_marker_keys(document);
        assert!(keys.contains("C"));
        assert!(!keys.contains("c"));
    }

    #[test]
    fn scan_accepts_plus_and_hyphen_in_keys() {
        let document = "<!-- PROJECTS:c+-1:START --><!-- PROJECTS:c+-1:END -->";
        assert!(scan_marker_keys(document).contains("c+-1"));
    }

    #[test]
    fn scan_tolerates_flexible_comment_whitespace() {
        let document = "<!--PROJECTS:git:START--><!--  PROJECTS:git:END  -->";
        assert!(scan_marker_keys(document).contains("git"));
    }

    #[test]
    fn replace_rewrites_only_the_region_interior() {
        let document = "before <!-- PROJECTS:cpp:START -->OLD<!-- PROJECTS:cpp:END --> after";
        let updated = replace_marker_region(document, "cpp", "NEW");
        assert_eq!(
            updated,
            "before <!-- PROJECTS:cpp:START -->NEW<!-- PROJECTS:cpp:END --> after"
        );
    }

    #[test]
    fn replace_preserves_original_sentinel_spelling() {
        let document = "<!--PROJECTS:git:START-->OLD<!--  PROJECTS:git:END  -->";
        let updated = replace_marker_region(document, "git", "NEW");
        assert_eq!(updated, "<!--PROJECTS:git:START-->NEW<!--  PROJECTS:git:END  -->");
    }

    #[test]
    fn replace_clears_region_with_empty_content() {
        let document = "<!-- PROJECTS:cpp:START -->OLD<!-- PROJECTS:cpp:END -->";
        let updated = replace_marker_region(document, "cpp", "");
        assert_eq!(updated, "<!-- PROJECTS:cpp:START --><!-- PROJECTS:cpp:END -->");
    }

    #[test]
    fn replace_spans_newlines_inside_the_region() {
        let document = "<!-- PROJECTS:cpp:START -->old\nmultiline\nvalue<!-- PROJECTS:cpp:END -->";
        let updated = replace_marker_region(document, "cpp", "inline");
        assert_eq!(updated, "<!-- PROJECTS:cpp:START -->inline<!-- PROJECTS:cpp:END -->");
    }

    #[test]
    fn replace_without_matching_pair_returns_document_unchanged() {
        let document = "no markers here";
        assert_eq!(replace_marker_region(document, "cpp", "NEW"), document);
    }

    #[test]
    fn replace_touches_only_the_first_pair_for_a_key() {
        let document = "<!-- PROJECTS:cpp:START -->one<!-- PROJECTS:cpp:END --> \
                        <!-- PROJECTS:cpp:START -->two<!-- PROJECTS:cpp:END -->";
        let updated = replace_marker_region(document, "cpp", "X");
        assert_eq!(
            updated,
            "<!-- PROJECTS:cpp:START -->X<!-- PROJECTS:cpp:END --> \
             <!-- PROJECTS:cpp:START -->two<!-- PROJECTS:cpp:END -->"
        );
    }

    #[test]
    fn replace_does_not_cross_keys() {
        let document = "<!-- PROJECTS:cpp:START -->a<!-- PROJECTS:cpp:END -->\
                        <!-- PROJECTS:git:START -->b<!-- PROJECTS:git:END -->";
        let updated = replace_marker_region(document, "git", "B");
        assert!(updated.contains("<!-- PROJECTS:cpp:START -->a<!-- PROJECTS:cpp:END -->"));
        assert!(updated.contains("<!-- PROJECTS:git:START -->B<!-- PROJECTS:git:END -->"));
    }

    #[test]
    fn replace_treats_regex_metacharacters_in_keys_literally() {
        let document = "<!-- PROJECTS:c+-x:START -->OLD<!-- PROJECTS:c+-x:END -->";
        let updated = replace_marker_region(document, "c+-x", "NEW");
        assert_eq!(updated, "<!-- PROJECTS:c+-x:START -->NEW<!-- PROJECTS:c+-x:END -->");
    }

    proptest! {
        #[test]
        fn replace_is_idempotent(
            key in "[A-Za-z0-9+-]{1,8}",
            content in "[A-Za-z0-9 _.-]{0,32}",
            prefix in "[A-Za-z0-9 \n]{0,32}",
            suffix in "[A-Za-z0-9 \n]{0,32}"
        ) {
            let document = format!(
                "{prefix}<!-- PROJECTS:{key}:START -->seed<!-- PROJECTS:{key}:END -->{suffix}"
            );
            let once = replace_marker_region(&document, &key, &content);
            let twice = replace_marker_region(&once, &key, &content);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn replace_preserves_total_line_count(
            key in "[A-Za-z0-9+-]{1,8}",
            content in "[A-Za-z0-9 _.-]{0,32}",
            prefix in "[A-Za-z0-9 \n]{0,32}",
            suffix in "[A-Za-z0-9 \n]{0,32}"
        ) {
            let document = format!(
                "{prefix}<!-- PROJECTS:{key}:START -->seed<!-- PROJECTS:{key}:END -->{suffix}"
            );
            let updated = replace_marker_region(&document, &key, &content);
            prop_assert_eq!(document.lines().count(), updated.lines().count());
        }

        #[test]
        fn replace_leaves_documents_without_the_pair_untouched(
            key in "[A-Za-z0-9+-]{1,8}",
            document in "[A-Za-z0-9 \n_.-]{0,64}",
            content in "[A-Za-z0-9 ]{0,16}"
        ) {
            let updated = replace_marker_region(&document, &key, &content);
            prop_assert_eq!(updated, document);
        }
    }
}

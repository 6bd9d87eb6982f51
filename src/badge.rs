// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge markup generation for project entries.
//!
//! Badges are pure, deterministic strings: a shields.io static image whose
//! message is the percent-encoded project name, wrapped in a link to the
//! repository. No network call is performed and nothing is cached.

use std::borrow::Cow;

/// Static styling parameters appended to every badge image URL.
const BADGE_STYLE_QUERY: &str = "&color=000605&logo=github&logoColor=FFFFFF&labelColor=000605";
/// Host serving the repositories that badges link to.
const REPOSITORY_HOST: &str = "https://github.com";

/// Builds the Markdown badge for one project entry.
///
/// The project name is percent-encoded for the image URL query value;
/// reserved characters, including `/`, are escaped. The name is inserted
/// verbatim in the outer Markdown alt text, so names containing `]` or `)`
/// produce broken markup. This mirrors the historical behavior and is a
/// known limitation rather than an accident.
///
/// # Example
///
/// ```
/// use gh_readme_updater::badge_markdown;
///
/// let badge = badge_markdown("Foo", "octocat", "foo-repo");
/// assert_eq!(
///     badge,
///     "[![Foo](https://img.shields.io/static/v1?label=&message=Foo&color=000605&logo=github&logoColor=FFFFFF&labelColor=000605)](https://github.com/octocat/foo-repo)"
/// );
/// ```
pub fn badge_markdown(name: &str, owner: &str, repo: &str) -> String {
    let encoded = percent_encode(name);
    let image =
        format!("https://img.shields.io/static/v1?label=&message={encoded}{BADGE_STYLE_QUERY}");
    let href = format!("{REPOSITORY_HOST}/{owner}/{repo}");

    format!("[![{name}]({image})]({href})")
}

/// Percent-encodes a string for use as a URL query value.
///
/// Unreserved characters (`A-Z a-z 0-9 _ . - ~`) pass through; every other
/// byte of the UTF-8 encoding becomes an uppercase `%XX` escape. `/` is not
/// treated as safe.
fn percent_encode(value: &str) -> Cow<'_, str> {
    fn is_unreserved(byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'-' | b'~')
    }

    if value.bytes().all(is_unreserved) {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() * 3);
    for byte in value.bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push_str(&format!("{byte:02X}"));
        }
    }

    Cow::Owned(encoded)
}

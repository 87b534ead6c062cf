//! URL registry and line-oriented loader.
//!
//! One URL or bare hostname per line. Lines are trimmed, blanks skipped,
//! `http://` is prepended when no scheme is present, and every candidate must
//! parse as an absolute URL with a host. Bad lines are logged and skipped;
//! only an unreadable source fails the load.

use std::fs;
use std::path::Path;

use url::Url;

use crate::error::{Result, SitewatchError};

const DEFAULT_SCHEME: &str = "http://";

/// Immutable, ordered, de-duplicated list of normalized target URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRegistry {
    urls: Vec<String>,
}

impl UrlRegistry {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| {
            SitewatchError::Load(format!("read url list {} failed: {e}", path.display()))
        })?;
        Ok(Self::from_lines(&s))
    }

    pub fn from_lines(s: &str) -> Self {
        let mut urls: Vec<String> = Vec::new();
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match normalize(line) {
                Ok(url) if urls.contains(&url) => {
                    tracing::debug!(%url, "duplicate url skipped");
                }
                Ok(url) => {
                    tracing::info!(%url, "loaded website");
                    urls.push(url);
                }
                Err(e) => {
                    tracing::warn!(line = %line, error = %e, "invalid url skipped");
                }
            }
        }
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<String> for UrlRegistry {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut urls: Vec<String> = Vec::new();
        for url in iter {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        Self { urls }
    }
}

/// Normalize one trimmed line into a canonical target URL.
///
/// The returned string is the scheme-prefixed input itself; parsing only
/// validates it, so `example.com` stays `http://example.com` (no trailing
/// slash added).
pub fn normalize(line: &str) -> Result<String> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SitewatchError::BadRequest("empty line".into()));
    }

    let candidate = match scheme_of(line) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") => {
            line.to_string()
        }
        Some(scheme) => {
            return Err(SitewatchError::BadRequest(format!(
                "unsupported scheme {scheme}: {line}"
            )));
        }
        None => format!("{DEFAULT_SCHEME}{line}"),
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| SitewatchError::BadRequest(format!("invalid url {candidate}: {e}")))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(SitewatchError::BadRequest(format!(
            "url has no host: {candidate}"
        )));
    }

    Ok(candidate)
}

/// Scheme token before the first `://`, if the line starts with one.
///
/// A `://` that appears after a `/`, `?` or `#` (a URL inside a path or query)
/// does not count.
fn scheme_of(line: &str) -> Option<&str> {
    let (head, _) = line.split_once("://")?;
    let mut chars = head.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(head)
}

//! Keyword allow-list applied to request paths.

/// Substring-based keyword filter deciding whether a request path is
/// eligible for redirection and counting.
///
/// An empty keyword list allows every path. Matching is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    keywords: Vec<String>,
}

impl PathFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Parses a comma-separated keyword list, keeping at most `cap` entries
    /// when `cap` is non-zero.
    pub fn parse(raw: &str, cap: usize) -> Self {
        if raw.is_empty() {
            return Self::default();
        }

        let mut keywords: Vec<String> = raw.split(',').map(str::to_string).collect();
        if cap > 0 && keywords.len() > cap {
            keywords.truncate(cap);
        }

        Self { keywords }
    }

    /// Returns `true` when the path contains at least one keyword, or when
    /// no keywords are configured.
    pub fn allows(&self, path: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|keyword| path.contains(keyword))
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

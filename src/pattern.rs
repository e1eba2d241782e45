/// A path template that decides which request paths a rule governs.
///
/// Patterns support two metacharacters: `*` matches any sequence of
/// characters (including none), and a trailing `$` anchors the pattern to
/// the end of the path. Everything else is literal text; there is no
/// escaping and no other special character. A pattern without
/// metacharacters matches any path it is a byte-wise prefix of.
///
/// The pattern is compiled once at construction into literal fragments,
/// so matching never re-scans the template.
///
/// # Example
///
/// ```
/// use crawlcap::PathPattern;
///
/// let p = PathPattern::new("/private/*.pdf$");
/// assert!(p.matches("/private/report.pdf"));
/// assert!(!p.matches("/private/report.pdf.bak"));
/// assert!(!p.matches("/public/report.pdf"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    fragments: Vec<String>,
    anchored: bool,
}

impl PathPattern {
    /// Compiles a pattern.
    ///
    /// Non-empty patterns that begin with neither `/` nor `*` are
    /// normalized by prepending `/`, matching what lenient real-world
    /// parsers do with values like `admin/`. The empty pattern is kept
    /// as-is; it matches nothing (an empty `Disallow:` means "disallow
    /// nothing").
    pub fn new(pattern: impl Into<String>) -> Self {
        let mut raw: String = pattern.into();
        if !raw.is_empty() && !raw.starts_with('/') && !raw.starts_with('*') {
            raw.insert(0, '/');
        }
        let (body, anchored) = match raw.strip_suffix('$') {
            Some(body) => (body, true),
            None => (raw.as_str(), false),
        };
        let fragments: Vec<String> = body.split('*').map(str::to_string).collect();
        Self {
            fragments,
            anchored,
            raw,
        }
    }

    /// Returns the pattern text, after normalization.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true for the empty pattern, which never matches.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The length used for longest-match precedence.
    ///
    /// `*` and `$` count as ordinary characters, so `/a*$` is more
    /// specific than `/ab`.
    pub fn specificity(&self) -> usize {
        self.raw.len()
    }

    /// Tests whether this pattern matches `path`.
    ///
    /// The first fragment is anchored at the start of the path, the
    /// remaining fragments must occur afterwards in order without
    /// overlapping, and with a trailing `$` the last fragment must align
    /// with the end of the path exactly.
    pub fn matches(&self, path: &str) -> bool {
        if self.raw.is_empty() {
            return false;
        }
        let first = &self.fragments[0];
        if !path.starts_with(first.as_str()) {
            return false;
        }
        let mut pos = first.len();

        if self.fragments.len() == 1 {
            return !self.anchored || path.len() == pos;
        }

        let (middle, last) = self.fragments[1..].split_at(self.fragments.len() - 2);
        for fragment in middle {
            match path[pos..].find(fragment.as_str()) {
                Some(i) => pos += i + fragment.len(),
                None => return false,
            }
        }

        let last = &last[0];
        if self.anchored {
            path.len() >= pos + last.len() && path.ends_with(last.as_str())
        } else {
            path[pos..].contains(last.as_str())
        }
    }
}

/// The recognized robots.txt directive fields.
///
/// Field names are compared ASCII-case-insensitively, so `USER-AGENT`,
/// `User-Agent`, and `user-agent` all map to [`DirectiveKind::UserAgent`].
/// Anything unrecognized becomes [`DirectiveKind::Unknown`] and is ignored
/// by the grouping automaton and the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectiveKind {
    /// `User-agent:` — opens or extends a rule group.
    UserAgent,
    /// `Allow:` — permits matching paths.
    Allow,
    /// `Disallow:` — forbids matching paths.
    Disallow,
    /// `Sitemap:` — a global sitemap URL, not scoped to any group.
    Sitemap,
    /// `Crawl-delay:` — surfaced verbatim, never interpreted.
    CrawlDelay,
    /// Any field this engine does not recognize.
    Unknown,
}

impl DirectiveKind {
    /// Maps a field name to its directive kind, case-insensitively.
    pub fn from_field(field: &str) -> Self {
        if field.eq_ignore_ascii_case("user-agent") {
            DirectiveKind::UserAgent
        } else if field.eq_ignore_ascii_case("allow") {
            DirectiveKind::Allow
        } else if field.eq_ignore_ascii_case("disallow") {
            DirectiveKind::Disallow
        } else if field.eq_ignore_ascii_case("sitemap") {
            DirectiveKind::Sitemap
        } else if field.eq_ignore_ascii_case("crawl-delay") {
            DirectiveKind::CrawlDelay
        } else {
            DirectiveKind::Unknown
        }
    }
}

/// One typed `field: value` line from a robots.txt file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    kind: DirectiveKind,
    value: String,
}

impl Directive {
    /// Parses a single line into a directive.
    ///
    /// A trailing `#` comment is stripped before anything else. Returns
    /// `None` for lines that are empty after comment stripping or that
    /// contain no `:` separator. The value is trimmed at both ends;
    /// interior whitespace is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use crawlcap::{Directive, DirectiveKind};
    ///
    /// let d = Directive::parse("Disallow: /foo  # block foo").unwrap();
    /// assert_eq!(d.kind(), DirectiveKind::Disallow);
    /// assert_eq!(d.value(), "/foo");
    ///
    /// assert!(Directive::parse("# just a comment").is_none());
    /// assert!(Directive::parse("not a directive").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Directive> {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (field, value) = line.split_once(':')?;
        Some(Directive {
            kind: DirectiveKind::from_field(field.trim()),
            value: value.trim().to_string(),
        })
    }

    /// Returns the directive kind.
    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// Returns the directive value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the directive and returns its value.
    pub fn into_value(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_directives() {
        let d = Directive::parse("User-agent: googlebot").unwrap();
        assert_eq!(d.kind(), DirectiveKind::UserAgent);
        assert_eq!(d.value(), "googlebot");

        let d = Directive::parse("Allow: /public").unwrap();
        assert_eq!(d.kind(), DirectiveKind::Allow);

        let d = Directive::parse("Crawl-delay: 10").unwrap();
        assert_eq!(d.kind(), DirectiveKind::CrawlDelay);
        assert_eq!(d.value(), "10");
    }

    #[test]
    fn test_field_case_insensitive() {
        assert_eq!(
            Directive::parse("DISALLOW: /x").unwrap().kind(),
            DirectiveKind::Disallow
        );
        assert_eq!(
            Directive::parse("user-AGENT: bot").unwrap().kind(),
            DirectiveKind::UserAgent
        );
    }

    #[test]
    fn test_comment_stripped_before_value() {
        let d = Directive::parse("Disallow: /foo  # block foo").unwrap();
        assert_eq!(d.value(), "/foo");
    }

    #[test]
    fn test_comment_only_line_discarded() {
        assert!(Directive::parse("# nothing here").is_none());
        assert!(Directive::parse("   #indented comment").is_none());
    }

    #[test]
    fn test_no_colon_discarded() {
        assert!(Directive::parse("this is not a directive").is_none());
        assert!(Directive::parse("").is_none());
        assert!(Directive::parse("   ").is_none());
    }

    #[test]
    fn test_unknown_field() {
        let d = Directive::parse("Request-rate: 1/5").unwrap();
        assert_eq!(d.kind(), DirectiveKind::Unknown);
        assert_eq!(d.value(), "1/5");
    }

    #[test]
    fn test_value_splits_on_first_colon() {
        // Sitemap URLs contain colons of their own.
        let d = Directive::parse("Sitemap: https://example.com/sitemap.xml").unwrap();
        assert_eq!(d.kind(), DirectiveKind::Sitemap);
        assert_eq!(d.value(), "https://example.com/sitemap.xml");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let d = Directive::parse("Disallow:  /a path/with spaces  ").unwrap();
        assert_eq!(d.value(), "/a path/with spaces");
    }

    #[test]
    fn test_empty_value() {
        let d = Directive::parse("Disallow:").unwrap();
        assert_eq!(d.kind(), DirectiveKind::Disallow);
        assert_eq!(d.value(), "");
    }
}

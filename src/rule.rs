use crate::pattern::PathPattern;
use crate::verdict::Verdict;

/// A rule pairs a path pattern with a verdict (allow or disallow).
///
/// When a rule's pattern matches a path, the rule's verdict is a candidate
/// decision; precedence between matching rules is resolved by the policy
/// evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    verdict: Verdict,
    pattern: PathPattern,
}

impl Rule {
    /// Creates a new rule with the given verdict and pattern.
    pub fn new(verdict: Verdict, pattern: PathPattern) -> Self {
        Self { verdict, pattern }
    }

    /// Creates an allow rule from a pattern string.
    ///
    /// # Example
    ///
    /// ```
    /// use crawlcap::Rule;
    ///
    /// let rule = Rule::allow("/public/*");
    /// assert!(rule.matches("/public/index.html"));
    /// ```
    pub fn allow(pattern: impl Into<String>) -> Self {
        Self::new(Verdict::Allow, PathPattern::new(pattern))
    }

    /// Creates a disallow rule from a pattern string.
    pub fn disallow(pattern: impl Into<String>) -> Self {
        Self::new(Verdict::Disallow, PathPattern::new(pattern))
    }

    /// Returns the verdict for this rule.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the pattern for this rule.
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The pattern length used for longest-match precedence.
    pub fn specificity(&self) -> usize {
        self.pattern.specificity()
    }

    /// Tests whether this rule governs `path`.
    ///
    /// Empty patterns never match ("disallow nothing").
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }

    /// Evaluates this rule against a path.
    ///
    /// Returns `Some(verdict)` if the rule matches, `None` otherwise.
    pub fn evaluate(&self, path: &str) -> Option<Verdict> {
        if self.matches(path) {
            Some(self.verdict)
        } else {
            None
        }
    }
}

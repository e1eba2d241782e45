use crate::explain::{Explanation, GroupMatch, MatchedRule};
use crate::group::RuleGroup;
use crate::parser;
use crate::rule::Rule;

/// Which verdict wins when two matching rules have patterns of equal
/// maximal length.
///
/// Major crawlers conventionally break the tie in favor of allowing, but
/// the convention is not standardized, so it is configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Allow wins at equal pattern length (the common crawler convention,
    /// and the default).
    #[default]
    PreferAllow,
    /// Disallow wins at equal pattern length.
    PreferDisallow,
}

/// Options governing how queries are evaluated.
///
/// The default configuration matches the behavior of major real-world
/// crawlers: longest pattern wins, allow wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationConfig {
    /// The tie-break applied between matching rules of equal length.
    pub tie_break: TieBreak,
}

/// A parsed robots.txt policy: an ordered list of rule groups plus the
/// sitemap URLs discovered in the file.
///
/// A policy is constructed once by a single parse pass, is immutable
/// thereafter, and can be shared freely across concurrent queries.
///
/// # Example
///
/// ```
/// use crawlcap::Policy;
///
/// let policy = Policy::parse(
///     "User-agent: *\n\
///      Disallow: /private/\n\
///      Allow: /private/shared/\n",
/// );
///
/// assert!(policy.is_allowed("examplebot", "/blog/post"));
/// assert!(!policy.is_allowed("examplebot", "/private/data"));
/// assert!(policy.is_allowed("examplebot", "/private/shared/index.html"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Policy {
    groups: Vec<RuleGroup>,
    sitemaps: Vec<String>,
}

impl Policy {
    /// Parses robots.txt text into a policy.
    ///
    /// Parsing is total: it never fails, no matter how malformed the
    /// input. Unrecognized directives are ignored, rules outside any
    /// `User-agent:` group are dropped, and empty input yields an empty
    /// policy that allows everything.
    pub fn parse(text: &str) -> Self {
        parser::parse_policy(text)
    }

    /// Parses raw bytes into a policy.
    ///
    /// Input is treated as UTF-8; invalid sequences are replaced rather
    /// than rejected, so this, too, never fails.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Creates a policy from rule groups built programmatically.
    ///
    /// # Example
    ///
    /// ```
    /// use crawlcap::{Policy, Rule, RuleGroup};
    ///
    /// let policy = Policy::new(vec![
    ///     RuleGroup::for_agent("*").with_rule(Rule::disallow("/admin/")),
    /// ]);
    /// assert!(!policy.is_allowed("anybot", "/admin/login"));
    /// ```
    pub fn new(groups: Vec<RuleGroup>) -> Self {
        Self {
            groups,
            sitemaps: Vec::new(),
        }
    }

    /// Creates an empty policy, which allows everything.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(groups: Vec<RuleGroup>, sitemaps: Vec<String>) -> Self {
        Self { groups, sitemaps }
    }

    /// Returns the rule groups, in file order.
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    /// Returns the sitemap URLs, in file order, duplicates included.
    ///
    /// The URLs are opaque to this engine; retrieval and parsing of
    /// sitemaps belong to the caller.
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Answers whether `agent` may fetch `path`, using the default
    /// evaluation configuration.
    pub fn is_allowed(&self, agent: &str, path: &str) -> bool {
        self.is_allowed_with(agent, path, &EvaluationConfig::default())
    }

    /// Answers whether `agent` may fetch `path` under `config`.
    ///
    /// Group selection: the first group naming `agent` literally
    /// (case-insensitive) wins; failing that, the first wildcard (`*`)
    /// group; failing that, the default is allow. Within the selected
    /// group, the matching rule with the longest pattern wins, with ties
    /// broken by `config.tie_break`. If no rule matches, the default is
    /// allow.
    pub fn is_allowed_with(&self, agent: &str, path: &str, config: &EvaluationConfig) -> bool {
        match self.select_group(agent) {
            Some((group, _)) => match winning_rule(group, path, config) {
                Some(rule) => rule.verdict().is_allow(),
                None => true,
            },
            None => true,
        }
    }

    /// Like [`is_allowed`](Policy::is_allowed), but returns a diagnostic
    /// record of the winning rule and the group selection.
    ///
    /// # Example
    ///
    /// ```
    /// use crawlcap::{GroupMatch, Policy, Verdict};
    ///
    /// let policy = Policy::parse("User-agent: *\nDisallow: /private/\n");
    /// let explanation = policy.explain("examplebot", "/private/data");
    ///
    /// assert!(!explanation.allowed);
    /// assert_eq!(explanation.group, Some(GroupMatch::Wildcard));
    /// let matched = explanation.matched.unwrap();
    /// assert_eq!(matched.verdict, Verdict::Disallow);
    /// assert_eq!(matched.pattern, "/private/");
    /// ```
    pub fn explain(&self, agent: &str, path: &str) -> Explanation {
        self.explain_with(agent, path, &EvaluationConfig::default())
    }

    /// Like [`is_allowed_with`](Policy::is_allowed_with), but returns a
    /// diagnostic record.
    pub fn explain_with(&self, agent: &str, path: &str, config: &EvaluationConfig) -> Explanation {
        let Some((group, selection)) = self.select_group(agent) else {
            return Explanation {
                allowed: true,
                matched: None,
                group: None,
            };
        };
        match winning_rule(group, path, config) {
            Some(rule) => Explanation {
                allowed: rule.verdict().is_allow(),
                matched: Some(MatchedRule {
                    verdict: rule.verdict(),
                    pattern: rule.pattern().as_str().to_string(),
                }),
                group: Some(selection),
            },
            None => Explanation {
                allowed: true,
                matched: None,
                group: Some(selection),
            },
        }
    }

    /// Selects the applicable group for an agent.
    ///
    /// Literal matches always beat the wildcard, and within each bucket
    /// the first group in file order wins, so duplicate groups for the
    /// same literal agent after the first are ignored.
    fn select_group(&self, agent: &str) -> Option<(&RuleGroup, GroupMatch)> {
        for group in &self.groups {
            if let Some(name) = group.literal_match(agent) {
                return Some((group, GroupMatch::Literal(name.to_string())));
            }
        }
        self.groups
            .iter()
            .find(|group| group.is_wildcard())
            .map(|group| (group, GroupMatch::Wildcard))
    }
}

/// Picks the matching rule with the longest pattern; at equal length the
/// configured tie-break verdict wins. Empty patterns never match.
fn winning_rule<'a>(group: &'a RuleGroup, path: &str, config: &EvaluationConfig) -> Option<&'a Rule> {
    let preferred = match config.tie_break {
        TieBreak::PreferAllow => crate::Verdict::Allow,
        TieBreak::PreferDisallow => crate::Verdict::Disallow,
    };
    let mut best: Option<&Rule> = None;
    for rule in group.rules() {
        if !rule.matches(path) {
            continue;
        }
        best = match best {
            None => Some(rule),
            Some(current) => {
                let supersedes = rule.specificity() > current.specificity()
                    || (rule.specificity() == current.specificity()
                        && rule.verdict() == preferred
                        && current.verdict() != preferred);
                if supersedes { Some(rule) } else { Some(current) }
            }
        };
    }
    best
}

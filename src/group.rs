use crate::rule::Rule;

/// A set of user-agent names sharing one block of rules.
///
/// A group is opened by one or more consecutive `User-agent:` lines and
/// holds every `Allow:`/`Disallow:`/`Crawl-delay:` directive that follows
/// until the next `User-agent:` block. The agent list is never empty.
///
/// Agent names are compared ASCII-case-insensitively; the name `*` is the
/// wildcard that applies to any crawler not matched by a literal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    agents: Vec<String>,
    rules: Vec<Rule>,
    crawl_delay: Option<String>,
}

impl RuleGroup {
    /// Creates a group for a single agent name.
    ///
    /// # Example
    ///
    /// ```
    /// use crawlcap::{Rule, RuleGroup};
    ///
    /// let group = RuleGroup::for_agent("googlebot")
    ///     .with_rule(Rule::disallow("/private/"));
    /// assert!(group.names_agent("GoogleBot"));
    /// ```
    pub fn for_agent(name: impl Into<String>) -> Self {
        Self {
            agents: vec![name.into()],
            rules: Vec::new(),
            crawl_delay: None,
        }
    }

    /// Adds another agent name sharing this group's rules.
    pub fn with_agent(mut self, name: impl Into<String>) -> Self {
        self.push_agent(name.into());
        self
    }

    /// Adds a rule to this group.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.push_rule(rule);
        self
    }

    /// Returns the agent names this group applies to.
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Returns the rules in this group, in file order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the raw `Crawl-delay:` value, if the group carried one.
    ///
    /// The value is surfaced verbatim and never interpreted by this engine.
    pub fn crawl_delay(&self) -> Option<&str> {
        self.crawl_delay.as_deref()
    }

    /// Tests whether this group names `agent` literally (case-insensitive).
    ///
    /// The wildcard name `*` is not a literal match; see [`is_wildcard`].
    ///
    /// [`is_wildcard`]: RuleGroup::is_wildcard
    pub fn names_agent(&self, agent: &str) -> bool {
        self.literal_match(agent).is_some()
    }

    /// Tests whether this group contains the wildcard agent `*`.
    pub fn is_wildcard(&self) -> bool {
        self.agents.iter().any(|name| name == "*")
    }

    /// Returns the literal agent name matching `agent`, as written in the
    /// source, if any.
    pub(crate) fn literal_match(&self, agent: &str) -> Option<&str> {
        self.agents
            .iter()
            .find(|name| name.as_str() != "*" && name.eq_ignore_ascii_case(agent))
            .map(String::as_str)
    }

    pub(crate) fn push_agent(&mut self, name: String) {
        self.agents.push(name);
    }

    pub(crate) fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Records a crawl-delay value. The first one in a group wins.
    pub(crate) fn set_crawl_delay(&mut self, value: String) {
        if self.crawl_delay.is_some() {
            tracing::debug!(%value, "duplicate crawl-delay ignored");
            return;
        }
        self.crawl_delay = Some(value);
    }
}

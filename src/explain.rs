use crate::verdict::Verdict;

/// How the evaluator selected a rule group for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupMatch {
    /// A group naming the queried agent literally; carries the name as
    /// written in the source.
    Literal(String),
    /// The wildcard (`*`) group.
    Wildcard,
}

/// The rule that decided a query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedRule {
    /// The winning rule's verdict.
    pub verdict: Verdict,
    /// The winning rule's pattern, after normalization.
    pub pattern: String,
}

/// A diagnostic record of how a query was decided.
///
/// Produced by [`Policy::explain`](crate::Policy::explain). `matched` and
/// `group` are `None` when the decision fell through to the default:
/// no applicable group, or no rule in the selected group matched the path
/// (both default to allow).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explanation {
    /// The final decision.
    pub allowed: bool,
    /// The winning rule, if any rule matched.
    pub matched: Option<MatchedRule>,
    /// How the group was selected, if any group applied.
    pub group: Option<GroupMatch>,
}

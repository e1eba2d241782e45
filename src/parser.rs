//! The grouping pass: ordered directives in, a [`Policy`] out.
//!
//! Parsing is total. Malformed lines degrade to nothing rather than
//! erroring: rules outside any `User-agent:` group are dropped, unknown
//! directives are skipped, and an empty or garbage input yields an empty
//! policy that allows everything.

use crate::directive::{Directive, DirectiveKind};
use crate::group::RuleGroup;
use crate::pattern::PathPattern;
use crate::policy::Policy;
use crate::rule::Rule;
use crate::verdict::Verdict;

/// Parses robots.txt text into a policy in a single pass.
///
/// Consecutive `User-agent:` lines accumulate into one group sharing a rule
/// set; a `User-agent:` line after any other recognized directive closes
/// the pending group and opens a new one. `Sitemap:` lines are global and
/// are collected in file order regardless of grouping. Unknown directives
/// and lines without a `:` separator are transparent: they neither attach
/// to a group nor break a run of `User-agent:` lines.
pub(crate) fn parse_policy(text: &str) -> Policy {
    let mut groups: Vec<RuleGroup> = Vec::new();
    let mut sitemaps: Vec<String> = Vec::new();
    let mut pending: Option<RuleGroup> = None;
    let mut last_was_agent = false;

    for line in text.lines() {
        let Some(directive) = Directive::parse(line) else {
            continue;
        };
        match directive.kind() {
            DirectiveKind::UserAgent => {
                match pending.take() {
                    Some(mut group) if last_was_agent => {
                        group.push_agent(directive.into_value());
                        pending = Some(group);
                    }
                    Some(group) => {
                        groups.push(group);
                        pending = Some(RuleGroup::for_agent(directive.into_value()));
                    }
                    None => {
                        pending = Some(RuleGroup::for_agent(directive.into_value()));
                    }
                }
                last_was_agent = true;
            }
            DirectiveKind::Allow | DirectiveKind::Disallow => {
                let verdict = if directive.kind() == DirectiveKind::Allow {
                    Verdict::Allow
                } else {
                    Verdict::Disallow
                };
                match pending.as_mut() {
                    Some(group) => {
                        group.push_rule(Rule::new(
                            verdict,
                            PathPattern::new(directive.into_value()),
                        ));
                    }
                    None => tracing::debug!(%line, "rule outside any user-agent group dropped"),
                }
                last_was_agent = false;
            }
            DirectiveKind::CrawlDelay => {
                match pending.as_mut() {
                    Some(group) => group.set_crawl_delay(directive.into_value()),
                    None => {
                        tracing::debug!(%line, "crawl-delay outside any user-agent group dropped")
                    }
                }
                last_was_agent = false;
            }
            DirectiveKind::Sitemap => {
                sitemaps.push(directive.into_value());
                last_was_agent = false;
            }
            DirectiveKind::Unknown => {
                tracing::debug!(%line, "unknown directive ignored");
            }
        }
    }

    if let Some(group) = pending {
        groups.push(group);
    }

    Policy::from_parts(groups, sitemaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let policy = parse_policy("");
        assert!(policy.groups().is_empty());
        assert!(policy.sitemaps().is_empty());
    }

    #[test]
    fn test_single_group() {
        let policy = parse_policy("User-agent: bot\nDisallow: /a\nAllow: /a/b\n");
        assert_eq!(policy.groups().len(), 1);
        let group = &policy.groups()[0];
        assert_eq!(group.agents(), ["bot"]);
        assert_eq!(group.rules().len(), 2);
        assert_eq!(group.rules()[0].verdict(), Verdict::Disallow);
        assert_eq!(group.rules()[1].verdict(), Verdict::Allow);
    }

    #[test]
    fn test_consecutive_agents_share_rules() {
        let policy = parse_policy("User-agent: a\nUser-agent: b\nDisallow: /x\n");
        assert_eq!(policy.groups().len(), 1);
        assert_eq!(policy.groups()[0].agents(), ["a", "b"]);
    }

    #[test]
    fn test_agent_after_rule_opens_new_group() {
        let policy = parse_policy(
            "User-agent: a\nDisallow: /x\nUser-agent: b\nDisallow: /y\n",
        );
        assert_eq!(policy.groups().len(), 2);
        assert_eq!(policy.groups()[0].agents(), ["a"]);
        assert_eq!(policy.groups()[1].agents(), ["b"]);
    }

    #[test]
    fn test_pending_group_closed_at_eof() {
        let policy = parse_policy("User-agent: tail");
        assert_eq!(policy.groups().len(), 1);
        assert!(policy.groups()[0].rules().is_empty());
    }

    #[test]
    fn test_orphan_rules_dropped() {
        let policy = parse_policy("Disallow: /x\nCrawl-delay: 3\nUser-agent: a\nDisallow: /y\n");
        assert_eq!(policy.groups().len(), 1);
        assert_eq!(policy.groups()[0].rules().len(), 1);
        assert_eq!(policy.groups()[0].crawl_delay(), None);
    }

    #[test]
    fn test_sitemaps_are_global() {
        let policy = parse_policy(
            "Sitemap: https://a.example/s1.xml\n\
             User-agent: bot\n\
             Sitemap: https://a.example/s2.xml\n\
             Disallow: /x\n\
             Sitemap: https://a.example/s1.xml\n",
        );
        // File order, duplicates preserved, grouping unaffected.
        assert_eq!(
            policy.sitemaps(),
            [
                "https://a.example/s1.xml",
                "https://a.example/s2.xml",
                "https://a.example/s1.xml"
            ]
        );
        assert_eq!(policy.groups().len(), 1);
        assert_eq!(policy.groups()[0].rules().len(), 1);
    }

    #[test]
    fn test_sitemap_breaks_agent_run() {
        // The sitemap is a recognized directive between the two agent
        // lines, so the second one opens a fresh group.
        let policy = parse_policy(
            "User-agent: a\nSitemap: https://a.example/s.xml\nUser-agent: b\nDisallow: /x\n",
        );
        assert_eq!(policy.groups().len(), 2);
        assert!(policy.groups()[0].rules().is_empty());
        assert_eq!(policy.groups()[1].agents(), ["b"]);
    }

    #[test]
    fn test_unknown_directive_is_transparent() {
        let policy = parse_policy(
            "User-agent: a\nRequest-rate: 1/5\nUser-agent: b\nDisallow: /x\n",
        );
        assert_eq!(policy.groups().len(), 1);
        assert_eq!(policy.groups()[0].agents(), ["a", "b"]);
    }

    #[test]
    fn test_crawl_delay_attaches_to_group() {
        let policy = parse_policy("User-agent: bot\nCrawl-delay: 2.5\nDisallow: /x\n");
        assert_eq!(policy.groups()[0].crawl_delay(), Some("2.5"));
    }

    #[test]
    fn test_crlf_input() {
        let policy = parse_policy("User-agent: bot\r\nDisallow: /x\r\n");
        assert_eq!(policy.groups().len(), 1);
        assert_eq!(policy.groups()[0].rules()[0].pattern().as_str(), "/x");
    }

    #[test]
    fn test_blank_lines_do_not_split_groups() {
        let policy = parse_policy("User-agent: a\n\nUser-agent: b\n\nDisallow: /x\n");
        assert_eq!(policy.groups().len(), 1);
        assert_eq!(policy.groups()[0].agents(), ["a", "b"]);
    }
}

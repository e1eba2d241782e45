//! Crawlcap: a library for parsing and evaluating robots.txt crawler
//! access policies.
//!
//! Crawlcap turns raw robots.txt text into an immutable [`Policy`] and
//! answers, for a given crawling agent and target path, whether the fetch
//! is allowed. Parsing is maximally permissive and never fails: malformed
//! lines degrade to nothing, and missing policy means everything is
//! allowed.
//!
//! # Example
//!
//! ```
//! use crawlcap::Policy;
//!
//! let policy = Policy::parse(
//!     "User-agent: *\n\
//!      Disallow: /private/\n\
//!      Allow: /private/shared/\n\
//!      Sitemap: https://example.com/sitemap.xml\n",
//! );
//!
//! assert!(policy.is_allowed("examplebot", "/blog/post"));
//! assert!(!policy.is_allowed("examplebot", "/private/data"));
//! // Longest matching pattern wins.
//! assert!(policy.is_allowed("examplebot", "/private/shared/index.html"));
//!
//! assert_eq!(policy.sitemaps(), ["https://example.com/sitemap.xml"]);
//! ```
//!
//! Fetching robots.txt over HTTP, caching it, and scheduling refreshes are
//! the caller's concern; [`PolicyStore`] covers the one piece of that
//! lifecycle with concurrency implications, letting a refreshed policy be
//! swapped in atomically under live queries.

mod directive;
mod explain;
mod group;
mod parser;
mod pattern;
mod policy;
mod rule;
mod store;
mod verdict;

pub use directive::{Directive, DirectiveKind};
pub use explain::{Explanation, GroupMatch, MatchedRule};
pub use group::RuleGroup;
pub use pattern::PathPattern;
pub use policy::{EvaluationConfig, Policy, TieBreak};
pub use rule::Rule;
pub use store::PolicyStore;
pub use verdict::Verdict;

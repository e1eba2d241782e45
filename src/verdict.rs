/// The decision a matching rule assigns to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The path may be fetched.
    Allow,
    /// The path must not be fetched.
    Disallow,
}

impl Verdict {
    /// Returns true for [`Verdict::Allow`].
    pub fn is_allow(self) -> bool {
        self == Verdict::Allow
    }
}

/// Registration settings for a [`Router`](crate::Router).
///
/// The default configuration accepts every pattern and lets later
/// registrations silently replace earlier ones.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct Config {
    /// What happens when a registration lands on a position that is already
    /// taken, either by a value or by a parameter child.
    pub overwrite: OverwritePolicy,

    /// If disabled, patterns containing a bare `#` segment are rejected with
    /// [`InsertError::UnnamedParam`](crate::InsertError::UnnamedParam).
    pub allow_unnamed_params: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overwrite: OverwritePolicy::Replace,
            allow_unnamed_params: true,
        }
    }
}

/// How to treat a registration that collides with an earlier one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OverwritePolicy {
    /// Last registration wins.
    ///
    /// A parameter segment always creates a fresh parameter child, dropping
    /// whatever subtree was reachable through the previous one, even when the
    /// names are equal. A value registered twice for the same route is
    /// replaced.
    #[default]
    Replace,
    /// Collisions are reported as errors.
    ///
    /// A parameter segment with the same name as the existing parameter child
    /// shares it, a different name fails with
    /// [`InsertError::ParamConflict`](crate::InsertError::ParamConflict), and
    /// a duplicate route fails with
    /// [`InsertError::Conflict`](crate::InsertError::Conflict).
    Reject,
}

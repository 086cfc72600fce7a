use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
///
/// With the default [`Config`](crate::Config) registration never fails;
/// these errors are only produced by the stricter settings.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// A value is already registered for this exact route.
    #[error("insertion failed due to conflict with previously registered route: {route}")]
    Conflict {
        /// The route that was registered twice.
        route: String,
    },
    /// A parameter with a different name already occupies this position.
    #[error("parameter `#{new}` conflicts with previously registered parameter `#{existing}`")]
    ParamConflict {
        /// The name of the parameter already in the tree.
        existing: String,
        /// The name of the parameter being inserted.
        new: String,
    },
    /// Parameters must be registered with a name.
    #[error("parameters must be registered with a name")]
    UnnamedParam,
}

/// A failed match attempt.
///
/// ```
/// use segrouter::{MatchError, Method, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
/// let table = router.freeze();
///
/// // no routes match
/// if let Err(err) = table.at(Method::Get, "/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum MatchError {
    /// No matching route was found.
    #[error("matching route not found")]
    NotFound,
    /// The request method has no routing tree.
    #[error("request method is not supported")]
    MethodNotSupported,
}

use crate::service::RouterService;
use crate::tree::{Match, Node};
use crate::{Config, Handler, InsertError, MatchError, Method, PathParams};

use http::{Request, Response, StatusCode};

/// A router under construction.
///
/// Routes are registered on a `Router` and then frozen into a [`RouteTable`],
/// which is the only type that can match or dispatch requests. Once frozen,
/// the tree never changes again.
///
/// ```rust
/// use segrouter::{Method, Router};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
/// router.get("/users/#id", "A User")?;
///
/// let table = router.freeze();
/// let matched = table.at(Method::Get, "/users/978")?;
/// assert_eq!(matched.params.get("id"), Some("978"));
/// assert_eq!(*matched.value, "A User");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Router<T> {
    roots: [Node<T>; 2],
    not_found: Option<T>,
    config: Config,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T> Router<T> {
    /// Construct a new router with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new router with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            roots: [Node::new(), Node::new()],
            not_found: None,
            config,
        }
    }

    /// Returns the configuration the router was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Insert a route for the given method.
    ///
    /// Segments are separated by `/`, empty segments are ignored, and a
    /// segment starting with `#` is a named parameter:
    ///
    /// ```rust
    /// # use segrouter::{Method, Router};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert(Method::Get, "/home", "Welcome!")?;
    /// router.insert(Method::Post, "/users/#id", "A User")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, method: Method, route: &str, value: T) -> Result<(), InsertError> {
        self.roots[method.index()].insert_with(route, value, &self.config)?;
        tracing::debug!(%method, route, "registered route");
        Ok(())
    }

    /// Register a handler for GET requests.
    pub fn get(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert(Method::Get, route, value)
    }

    /// Register a handler for POST requests.
    pub fn post(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert(Method::Post, route, value)
    }

    /// Register a fallback that [`RouteTable::dispatch`] calls when no route
    /// matches, instead of answering with an empty `404 Not Found`.
    pub fn not_found(&mut self, value: T) {
        self.not_found = Some(value);
    }

    /// Finish registration, returning the read-only route table.
    pub fn freeze(self) -> RouteTable<T> {
        tracing::debug!(
            get = self.roots[Method::Get.index()].len(),
            post = self.roots[Method::Post.index()].len(),
            "route table frozen"
        );

        RouteTable {
            roots: self.roots,
            not_found: self.not_found,
        }
    }
}

/// The frozen set of routes produced by [`Router::freeze`].
///
/// A `RouteTable` is immutable, so it can be shared across threads (for
/// example behind an `Arc`) and dispatched from concurrently without locking.
#[derive(Clone, Debug)]
pub struct RouteTable<T> {
    roots: [Node<T>; 2],
    not_found: Option<T>,
}

impl<T> RouteTable<T> {
    /// Tries to find a value for the given method and path.
    ///
    /// ```rust
    /// use segrouter::{Method, Router};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.get("/home", "Welcome!")?;
    /// let table = router.freeze();
    ///
    /// let matched = table.at(Method::Get, "/home")?;
    /// assert_eq!(*matched.value, "Welcome!");
    /// assert!(matched.params.is_empty());
    /// assert!(table.at(Method::Post, "/home").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn at<'n, 'p>(
        &'n self,
        method: Method,
        path: &'p str,
    ) -> Result<Match<'n, 'p, &'n T>, MatchError> {
        self.roots[method.index()].at(path)
    }

    /// Like [`at`](Self::at), for an HTTP method token.
    ///
    /// Fails with [`MatchError::MethodNotSupported`] for any method other than
    /// `GET` or `POST`.
    pub fn resolve<'n, 'p>(
        &'n self,
        method: &http::Method,
        path: &'p str,
    ) -> Result<Match<'n, 'p, &'n T>, MatchError> {
        self.at(Method::try_from(method)?, path)
    }

    /// Converts the table into a `tower::Service`.
    pub fn into_service(self) -> RouterService<T> {
        RouterService::new(self)
    }

    /// Routes a request to its handler and returns the handler's response.
    ///
    /// If the route has parameters, they are attached to the request as
    /// [`PathParams`] before the handler runs. A request that matches no route
    /// goes to the [`not_found`](Router::not_found) fallback, or is answered
    /// with an empty `404 Not Found`.
    pub fn dispatch<B>(&self, mut req: Request<B>) -> Response<T::Body>
    where
        T: Handler<B>,
        T::Body: Default,
    {
        let resolved = self
            .resolve(req.method(), req.uri().path())
            .map(|matched| (matched.value, PathParams::from(matched.params)));

        match resolved {
            Ok((handler, params)) => {
                tracing::trace!(
                    method = %req.method(),
                    path = req.uri().path(),
                    params = params.len(),
                    "dispatching request"
                );

                if !params.is_empty() {
                    req.extensions_mut().insert(params);
                }

                handler.call(req)
            }
            Err(err) => {
                tracing::debug!(
                    method = %req.method(),
                    path = req.uri().path(),
                    %err,
                    "no route matched"
                );

                match &self.not_found {
                    Some(handler) => handler.call(req),
                    None => not_found(),
                }
            }
        }
    }
}

fn not_found<R: Default>() -> Response<R> {
    let mut res = Response::new(R::default());
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InsertError, OverwritePolicy};

    #[test]
    fn method_slots_are_isolated() {
        let mut router = Router::new();
        router.get("/only-get", 1).unwrap();
        router.post("/only-post", 2).unwrap();
        let table = router.freeze();

        assert_eq!(*table.at(Method::Get, "/only-get").unwrap().value, 1);
        assert_eq!(*table.at(Method::Post, "/only-post").unwrap().value, 2);
        assert_eq!(table.at(Method::Post, "/only-get").unwrap_err(), MatchError::NotFound);
        assert_eq!(table.at(Method::Get, "/only-post").unwrap_err(), MatchError::NotFound);
    }

    #[test]
    fn unsupported_method() {
        let mut router = Router::new();
        router.get("/", ()).unwrap();
        let table = router.freeze();

        assert_eq!(
            table.resolve(&http::Method::DELETE, "/").unwrap_err(),
            MatchError::MethodNotSupported
        );
        assert!(table.resolve(&http::Method::GET, "/").is_ok());
    }

    #[test]
    fn config_applies_to_every_method() {
        let mut router = Router::with_config(Config {
            overwrite: OverwritePolicy::Reject,
            allow_unnamed_params: false,
        });

        assert!(!router.config().allow_unnamed_params);
        assert_eq!(router.post("/#", ()), Err(InsertError::UnnamedParam));
        router.get("/x", ()).unwrap();
        assert_eq!(
            router.get("/x", ()),
            Err(InsertError::Conflict { route: "/x".into() })
        );
        // the same route under another method is a different tree
        router.post("/x", ()).unwrap();
    }
}

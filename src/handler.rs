use crate::PathParams;

use http::{Request, Response};
use std::fmt;

/// Request handling logic that a route resolves to.
///
/// Implemented for every `Fn(Request<B>) -> Response<R>`, so plain functions
/// and closures can be registered directly. Use [`BoxHandler`] to store
/// handlers of different types in one router.
pub trait Handler<B> {
    /// The response body type.
    type Body;

    /// Handles the request.
    fn call(&self, req: Request<B>) -> Response<Self::Body>;
}

impl<F, B, R> Handler<B> for F
where
    F: Fn(Request<B>) -> Response<R>,
{
    type Body = R;

    fn call(&self, req: Request<B>) -> Response<R> {
        (self)(req)
    }
}

/// A type-erased, thread-safe [`Handler`].
///
/// ```rust
/// use http::{Request, Response};
/// use segrouter::{BoxHandler, Router};
///
/// let mut router: Router<BoxHandler<(), String>> = Router::new();
/// let greeting = String::from("hello");
///
/// router
///     .get("/", BoxHandler::new(|_: Request<()>| Response::new(String::from("index"))))
///     .unwrap();
/// router
///     .get("/greet", BoxHandler::new(move |_: Request<()>| Response::new(greeting.clone())))
///     .unwrap();
/// ```
pub struct BoxHandler<B, R> {
    inner: Box<dyn Handler<B, Body = R> + Send + Sync>,
}

impl<B, R> BoxHandler<B, R> {
    /// Box a handler, erasing its concrete type.
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler<B, Body = R> + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(handler),
        }
    }
}

impl<B, R> Handler<B> for BoxHandler<B, R> {
    type Body = R;

    fn call(&self, req: Request<B>) -> Response<R> {
        self.inner.call(req)
    }
}

impl<B, R> fmt::Debug for BoxHandler<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxHandler").finish_non_exhaustive()
    }
}

/// Access to the path parameters bound by the router.
///
/// ```rust
/// use http::{Request, Response};
/// use segrouter::RequestExt;
///
/// fn show_item(req: Request<()>) -> Response<String> {
///     match req.path_param("id") {
///         Some(id) => Response::new(format!("item {id}")),
///         None => Response::new(String::from("no item")),
///     }
/// }
/// ```
pub trait RequestExt {
    /// All bindings for the matched route, or `None` if the route has no
    /// parameters.
    fn path_params(&self) -> Option<&PathParams>;

    /// The value bound to `name`, or `None` if the route has no such
    /// parameter.
    fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params().and_then(|params| params.get(name))
    }
}

impl<B> RequestExt for Request<B> {
    fn path_params(&self) -> Option<&PathParams> {
        self.extensions().get::<PathParams>()
    }
}

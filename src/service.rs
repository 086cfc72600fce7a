//! A `tower::Service` over a frozen [`RouteTable`].
//!
//! Routing is synchronous and never fails, so the service is always ready
//! and its future resolves immediately. This makes a route table usable
//! anywhere a `tower` or `hyper` service is expected:
//!
//! ```rust,no_run
//! use http::{Request, Response};
//! use segrouter::Router;
//! use tower::Service;
//!
//! fn index(_: Request<()>) -> Response<String> {
//!     Response::new(String::from("Hello, world!"))
//! }
//!
//! # async fn run() {
//! let mut router = Router::new();
//! router.get("/", index).unwrap();
//!
//! let mut service = router.freeze().into_service();
//! let res = service.call(Request::get("/").body(()).unwrap()).await.unwrap();
//! assert_eq!(res.body(), "Hello, world!");
//! # }
//! ```

use crate::{Handler, RouteTable};

use http::{Request, Response};
use std::convert::Infallible;
use std::fmt;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

/// A cloneable service that dispatches requests through a shared
/// [`RouteTable`]. Created by [`RouteTable::into_service`].
pub struct RouterService<H> {
    table: Arc<RouteTable<H>>,
}

impl<H> RouterService<H> {
    pub(crate) fn new(table: RouteTable<H>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns the underlying route table.
    pub fn table(&self) -> &RouteTable<H> {
        &self.table
    }
}

// Manual impls, `H` itself need not be `Clone` or `Debug`.
impl<H> Clone for RouterService<H> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<H> fmt::Debug for RouterService<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterService").finish_non_exhaustive()
    }
}

impl<H, B> Service<Request<B>> for RouterService<H>
where
    H: Handler<B>,
    H::Body: Default,
{
    type Response = Response<H::Body>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        ready(Ok(self.table.dispatch(req)))
    }
}

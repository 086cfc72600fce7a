//! A segment-trie HTTP request router.
//!
//! Routes are registered per method (`GET` or `POST`) on a [`Router`], which is
//! then frozen into an immutable [`RouteTable`]. The table resolves a request
//! path to the registered value in time proportional to the number of path
//! segments, collecting named parameters on the way.
//!
//! ```rust
//! use segrouter::{Method, Router};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/home", "Welcome!")?;
//! router.get("/users/#id", "A User")?;
//!
//! let table = router.freeze();
//! let matched = table.at(Method::Get, "/users/978")?;
//! assert_eq!(matched.params.get("id"), Some("978"));
//! assert_eq!(*matched.value, "A User");
//! # Ok(())
//! # }
//! ```
//!
//! # Parameters
//!
//! A route is a list of `/`-separated segments. Empty segments are ignored,
//! so `/a/b`, `a/b/` and `/a//b` are the same route. A segment starting with
//! `#` is a named parameter that matches any single segment:
//!
//! ```text
//! Pattern: /users/#id/posts/#post
//!
//! /users/1/posts/2            match: id="1", post="2"
//! /users/1/posts              no match
//! /users/1/posts/2/comments   no match
//! ```
//!
//! At every level a literal segment takes precedence over a parameter:
//!
//! ```text
//! Patterns: /users/#id
//!           /users/me
//!
//! /users/me                   match: /users/me
//! /users/you                  match: /users/#id, id="you"
//! ```
//!
//! The router does not backtrack. After a literal segment has matched, the
//! parameter alternative at that level is not revisited, even if the literal
//! branch fails further down.
//!
//! Each position holds at most one parameter. By default a new parameter
//! segment replaces the parameter subtree registered before it at the same
//! position; see [`OverwritePolicy`] for the stricter alternative.
//!
//! # Dispatching
//!
//! A [`RouteTable`] of [`Handler`]s dispatches `http` requests directly.
//! Path parameters are attached to the request and read back with
//! [`RequestExt`]:
//!
//! ```rust
//! use http::{Request, Response, StatusCode};
//! use segrouter::{RequestExt, Router};
//!
//! fn item(req: Request<()>) -> Response<String> {
//!     Response::new(format!("item {}", req.path_param("id").unwrap_or_default()))
//! }
//!
//! let mut router = Router::new();
//! router.get("/items/#id", item).unwrap();
//! let table = router.freeze();
//!
//! let res = table.dispatch(Request::get("/items/42").body(()).unwrap());
//! assert_eq!(res.body(), "item 42");
//!
//! let res = table.dispatch(Request::get("/nothing/here").body(()).unwrap());
//! assert_eq!(res.status(), StatusCode::NOT_FOUND);
//! ```
#![deny(rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod handler;
mod method;
mod params;
mod router;
mod service;
mod tree;

pub use config::{Config, OverwritePolicy};
pub use error::{InsertError, MatchError};
pub use handler::{BoxHandler, Handler, RequestExt};
pub use method::Method;
pub use params::{Params, ParamsIter, PathParams};
pub use router::{RouteTable, Router};
pub use service::RouterService;
pub use tree::{Match, Node};

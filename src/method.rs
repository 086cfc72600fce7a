use crate::MatchError;

use std::fmt;
use std::str::FromStr;

/// The HTTP methods a router keeps a tree for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Every supported method, in slot order.
    pub const ALL: [Method; 2] = [Method::Get, Method::Post];

    // The fixed slot of this method's tree.
    pub(crate) fn index(self) -> usize {
        match self {
            Method::Get => 0,
            Method::Post => 1,
        }
    }

    /// Returns the method token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = MatchError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        if *method == http::Method::GET {
            Ok(Method::Get)
        } else if *method == http::Method::POST {
            Ok(Method::Post)
        } else {
            Err(MatchError::MethodNotSupported)
        }
    }
}

impl FromStr for Method {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(MatchError::MethodNotSupported),
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
        }
    }
}

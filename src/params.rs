use std::{fmt, slice};

/// A single URL parameter, consisting of a key and a value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone)]
struct Param<'k, 'v> {
    key: &'k str,
    value: &'v str,
}

/// A list of parameters returned by a route match.
///
/// Keys borrow from the route table and values from the matched path, so
/// producing a `Params` copies no strings.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = segrouter::Router::new();
/// # router.get("/users/#id", true)?;
/// # let table = router.freeze();
/// let matched = table.at(segrouter::Method::Get, "/users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.params.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone, Default)]
pub struct Params<'k, 'v> {
    // Vec::new does not allocate, so routes without parameters stay free.
    list: Vec<Param<'k, 'v>>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the value bound to the given key.
    ///
    /// If a route binds the same name more than once, the deepest segment
    /// wins.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.list
            .iter()
            .rev()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Returns an iterator over the parameters in path order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            inner: self.list.iter(),
        }
    }

    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        self.list.push(Param { key, value });
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, Param<'k, 'v>>,
}

impl<'ps, 'k, 'v> Iterator for ParamsIter<'ps, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (p.key, p.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {}

/// Owned path parameters, attached to a request by
/// [`RouteTable::dispatch`](crate::RouteTable::dispatch).
///
/// Handlers read them through [`RequestExt`](crate::RequestExt). A request
/// for a route without parameters carries no `PathParams` at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathParams {
    list: Vec<(String, String)>,
}

impl PathParams {
    /// Returns the value bound to `name`, or `None` if the route has no such
    /// parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.list
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over the bindings in path order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.list.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the route had no parameters.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl From<Params<'_, '_>> for PathParams {
    fn from(params: Params<'_, '_>) -> Self {
        Self {
            list: params
                .iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }
}

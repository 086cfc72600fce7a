use crate::{Config, InsertError, MatchError, OverwritePolicy, Params};

use std::collections::HashMap;

// Marks a parameter segment in a route, e.g. `#id`.
pub(crate) const PARAM_MARKER: char = '#';

// Splits a route or path into its non-empty segments, so `/a/b`, `a/b/`
// and `/a//b` are all the same two segments.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// A node in the segment trie.
///
/// Each edge is one path segment. A node owns its literal children, at most
/// one parameter child, and the value of the route ending here, if any.
#[derive(Clone, Debug)]
pub struct Node<T> {
    static_children: HashMap<String, Node<T>>,
    param_child: Option<Box<Node<T>>>,
    // Set on parameter children only.
    param_name: String,
    value: Option<T>,
}

/// A successful match consisting of the registered value
/// and the URL parameters, returned by [`RouteTable::at`](crate::RouteTable::at).
#[derive(Debug)]
pub struct Match<'k, 'v, V> {
    /// The value stored under the matched node.
    pub value: V,

    /// The route parameters. See [parameters](crate::Params) for more details.
    pub params: Params<'k, 'v>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            static_children: HashMap::new(),
            param_child: None,
            param_name: String::new(),
            value: None,
        }
    }
}

impl<T> Node<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    fn param(name: &str) -> Self {
        Self {
            param_name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Insert a route with the default [`Config`].
    pub fn insert(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert_with(route, value, &Config::default())
    }

    /// Insert a route, extending the tree one node per new segment.
    ///
    /// A route that fails validation leaves the tree untouched.
    pub fn insert_with(
        &mut self,
        route: &str,
        value: T,
        config: &Config,
    ) -> Result<(), InsertError> {
        if !config.allow_unnamed_params
            && segments(route).any(|segment| segment.strip_prefix(PARAM_MARKER) == Some(""))
        {
            return Err(InsertError::UnnamedParam);
        }

        let mut node = self;

        for segment in segments(route) {
            node = match segment.strip_prefix(PARAM_MARKER) {
                Some(name) => node.param_child_mut(name, config)?,
                None => node
                    .static_children
                    .entry(segment.to_owned())
                    .or_insert_with(Node::new),
            };
        }

        if node.value.is_some() {
            if config.overwrite == OverwritePolicy::Reject {
                return Err(InsertError::Conflict {
                    route: route.to_owned(),
                });
            }

            tracing::debug!(route, "overwriting previously registered value");
        }

        node.value = Some(value);
        Ok(())
    }

    // Returns the parameter child to descend into for `#name`, creating or
    // replacing it as the overwrite policy dictates.
    fn param_child_mut(
        &mut self,
        name: &str,
        config: &Config,
    ) -> Result<&mut Node<T>, InsertError> {
        if let Some(existing) = &self.param_child {
            match config.overwrite {
                OverwritePolicy::Reject if existing.param_name == name => {}
                OverwritePolicy::Reject => {
                    return Err(InsertError::ParamConflict {
                        existing: existing.param_name.clone(),
                        new: name.to_owned(),
                    });
                }
                OverwritePolicy::Replace => {
                    tracing::warn!(
                        existing = %existing.param_name,
                        new = name,
                        "replacing parameter subtree"
                    );
                    self.param_child = None;
                }
            }
        }

        let child = self.param_child.get_or_insert_with(|| Box::new(Node::param(name)));
        Ok(&mut **child)
    }

    /// Tries to find a value in the tree matching the given path.
    ///
    /// At every level a literal child is preferred over the parameter child.
    /// Once a literal child is taken, the parameter branch at that level is
    /// not revisited.
    pub fn at<'n, 'p>(&'n self, path: &'p str) -> Result<Match<'n, 'p, &'n T>, MatchError> {
        let mut node = self;
        let mut params = Params::new();

        for segment in segments(path) {
            if let Some(child) = node.static_children.get(segment) {
                node = child;
                continue;
            }

            match node.param_child.as_deref() {
                Some(child) => {
                    params.push(&child.param_name, segment);
                    node = child;
                }
                None => return Err(MatchError::NotFound),
            }
        }

        match &node.value {
            Some(value) => Ok(Match { value, params }),
            None => Err(MatchError::NotFound),
        }
    }

    // Number of values stored in this subtree.
    pub(crate) fn len(&self) -> usize {
        let own = usize::from(self.value.is_some());
        let statics: usize = self.static_children.values().map(Node::len).sum();
        let param = self.param_child.as_deref().map_or(0, Node::len);
        own + statics + param
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_binds_root() {
        let mut tree = Node::new();
        tree.insert("", "root").unwrap();

        assert_eq!(*tree.at("/").unwrap().value, "root");
        assert_eq!(*tree.at("").unwrap().value, "root");
        assert_eq!(*tree.at("//").unwrap().value, "root");
    }

    #[test]
    fn structure_without_value() {
        let mut tree = Node::new();
        tree.insert("/a/b/c", ()).unwrap();

        assert_eq!(tree.at("/a/b").unwrap_err(), MatchError::NotFound);
        assert!(tree.at("/a/b/c").is_ok());
    }

    #[test]
    fn len_counts_values() {
        let mut tree = Node::new();
        tree.insert("/", 0).unwrap();
        tree.insert("/a", 1).unwrap();
        tree.insert("/a/#id", 2).unwrap();
        // each parameter registration drops the previous parameter subtree
        tree.insert("/a/#id/b", 3).unwrap();
        tree.insert("/a/#other", 4).unwrap();

        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn reject_shares_same_name() {
        let config = Config {
            overwrite: OverwritePolicy::Reject,
            ..Config::default()
        };

        let mut tree = Node::new();
        tree.insert_with("/#id", 1, &config).unwrap();
        tree.insert_with("/#id/val", 2, &config).unwrap();

        assert_eq!(*tree.at("/7").unwrap().value, 1);
        assert_eq!(*tree.at("/7/val").unwrap().value, 2);
    }
}

#![no_main]
use libfuzzer_sys::fuzz_target;
use segrouter::{Config, Node, OverwritePolicy};

fuzz_target!(|data: (bool, Vec<(String, i32)>, String)| {
    let (reject, routes, path) = data;
    let config = Config {
        overwrite: if reject {
            OverwritePolicy::Reject
        } else {
            OverwritePolicy::Replace
        },
        ..Config::default()
    };

    let mut tree = Node::new();
    for (route, item) in routes {
        if tree.insert_with(&route, item, &config).is_err() {
            return;
        }
    }

    if let Ok(matched) = tree.at(&path) {
        for (_, value) in matched.params.iter() {
            assert!(!value.is_empty() && !value.contains('/'));
        }
    }
});

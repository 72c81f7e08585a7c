//! Shared fixtures for the integration tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `files` (path relative to the returned root, source) into a fresh directory
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, source) in files {
        write(dir.path(), path, source);
    }
    dir
}

pub fn write(root: &Path, path: &str, source: &str) {
    let path = root.join(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, source).unwrap();
}

/// A small library: an entry file, two classes it requires and an unresolved module
pub fn library() -> TempDir {
    project(&[
        (
            "index.js",
            r#"'use strict';
/**
 * Library entry point
 */
const Store = require('./lib/store');
const Cache = require("./lib/cache.js");
const missing = require('./lib/missing');
const fs = require('fs');

module.exports = { Store, Cache };
"#,
        ),
        (
            "lib/store.js",
            r#"const Cache = require('./cache');

/**
 * Persistent key value store.
 */
class Store {
    /**
     * Create a store.
     * @param {Object} options - store options
     * @param {string} options.path - file the store is kept in
     * @param {number} [options.limit=100] - maximum number of entries
     */
    constructor({ path, limit = 100 } = {}) {
        this.cache = new Cache();
    }

    /**
     * Read a value.
     * @param {string} key - the key to look up
     * @returns {*} the stored value
     */
    get(key) {}

    /** Remove every entry. */
    static async clear() {}
}

module.exports = Store;
"#,
        ),
        (
            "lib/cache.js",
            r#"const Store = require('./store');

/** In-memory cache */
module.exports = class Cache {
    /**
     * @param {string} key - cache key
     * @param {...*} values - values to keep
     */
    put(key, ...values) {}
};
"#,
        ),
    ])
}

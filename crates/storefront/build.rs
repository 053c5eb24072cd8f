//! Build script for storefront crate.
//!
//! Generates content-based hashes for static assets so templates can
//! cache-bust them with `?v=<hash>`.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_asset("static/css/main.css", "CSS_HASH");
    hash_asset("static/js/app.js", "JS_HASH");
}

/// Hash a static file and expose the first 8 hex chars as `env_var`.
fn hash_asset(relative_path: &str, env_var: &str) {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:rustc-env={env_var}=");
        return;
    };
    let path = Path::new(&manifest_dir).join(relative_path);

    // Tell Cargo to rerun if the asset changes
    println!("cargo:rerun-if-changed={}", path.display());

    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {relative_path}: {e}");
            println!("cargo:rustc-env={env_var}=");
            return;
        }
    };

    // Compute hash (first 8 chars of SHA256)
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());

    println!("cargo:rustc-env={env_var}={}", &hash[..8]);
}

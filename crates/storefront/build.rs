//! Build script for the storefront crate.
//!
//! Hashes the static assets so templates can reference them with a
//! cache-busting query string.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Assets whose combined content makes up the hash.
const HASHED_ASSETS: [&str; 2] = ["static/css/main.css", "static/js/app.js"];

fn main() {
    hash_assets();
}

/// Hash the static assets.
///
/// Sets `ASSET_HASH` for `env!("ASSET_HASH")` in the filters module.
fn hash_assets() {
    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:warning=CARGO_MANIFEST_DIR not set, asset hash disabled");
        println!("cargo:rustc-env=ASSET_HASH=dev");
        return;
    };

    let mut hasher = Sha256::new();
    for asset in HASHED_ASSETS {
        let path = Path::new(&manifest_dir).join(asset);

        // Tell Cargo to rerun if the asset changes
        println!("cargo:rerun-if-changed={}", path.display());

        match fs::read(&path) {
            Ok(content) => hasher.update(&content),
            Err(e) => println!("cargo:warning=Could not read {asset}: {e}"),
        }
    }

    // First 8 chars of SHA256
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = hash.get(..8).unwrap_or("dev");

    println!("cargo:rustc-env=ASSET_HASH={short_hash}");
}

//! Build script for the storefront.
//!
//! The page links its one stylesheet by content hash, so browsers can cache
//! it forever and still pick up a changed file on the next deploy.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hex characters of the digest kept in the file name.
const HASH_LEN: usize = 8;

fn main() {
    let hash = env::var("CARGO_MANIFEST_DIR")
        .map_err(|e| e.to_string())
        .and_then(|dir| publish_stylesheet(&PathBuf::from(dir)));

    // An empty hash makes the page link the unhashed main.css.
    match hash {
        Ok(hash) => println!("cargo:rustc-env=CSS_HASH={hash}"),
        Err(e) => {
            println!("cargo:warning=stylesheet not hashed: {e}");
            println!("cargo:rustc-env=CSS_HASH=");
        }
    }
}

/// Copy `static/css/main.css` to `static/css/derived/main.{hash}.css` and
/// return the hash.
fn publish_stylesheet(manifest_dir: &Path) -> Result<String, String> {
    let source = manifest_dir.join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", source.display());

    let css = fs::read(&source).map_err(|e| format!("read {}: {e}", source.display()))?;
    let digest = format!("{:x}", Sha256::digest(&css));
    let hash = digest.get(..HASH_LEN).unwrap_or(&digest).to_string();

    let derived = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived)
        .and_then(|()| fs::copy(&source, derived.join(format!("main.{hash}.css"))))
        .map_err(|e| format!("write derived stylesheet: {e}"))?;

    Ok(hash)
}

//! Fingerprints the storefront stylesheet.
//!
//! `static/css/main.css` is copied to `static/css/derived/main.<hash>.css`
//! and the hash is exported as `CSS_HASH`, so the base layout can link a
//! file whose name changes whenever its content does.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

const STYLESHEET: &str = "static/css/main.css";
const DERIVED_DIR: &str = "static/css/derived";
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        std::env::var("CARGO_MANIFEST_DIR").expect("Cargo sets CARGO_MANIFEST_DIR"),
    );
    let source = manifest_dir.join(STYLESHEET);
    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(css) = fs::read(&source) else {
        // Templates still render; the stylesheet link simply 404s.
        println!("cargo:warning=stylesheet {} not found", source.display());
        println!("cargo:rustc-env=CSS_HASH=missing");
        return;
    };

    let fingerprint = fingerprint(&css);
    println!("cargo:rustc-env=CSS_HASH={fingerprint}");
    write_derived(&manifest_dir.join(DERIVED_DIR), &fingerprint, &css);
}

/// First `HASH_LEN` hex digits of the SHA-256 of `content`.
fn fingerprint(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    digest
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>()
        .chars()
        .take(HASH_LEN)
        .collect()
}

fn write_derived(dir: &Path, fingerprint: &str, css: &[u8]) {
    fs::create_dir_all(dir).expect("create static/css/derived");
    let target = dir.join(format!("main.{fingerprint}.css"));
    fs::write(&target, css).expect("write fingerprinted stylesheet");
}

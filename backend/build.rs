use std::env;
use std::fs;
use std::path::PathBuf;

use fs_extra::dir::{copy, CopyOptions};

/// Where `trunk build` leaves the UI, unless `SEMELAND_FRONTEND_DIST` says
/// otherwise.
const DEFAULT_DIST: &str = "../frontend/dist";

/// Directory `assets.static_dir` points at by default.
const STATIC_DIR: &str = "static";

fn main() {
    println!("cargo:rerun-if-env-changed=SEMELAND_FRONTEND_DIST");

    let dist = env::var_os("SEMELAND_FRONTEND_DIST")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST));
    println!("cargo:rerun-if-changed={}", dist.display());

    if !dist.join("index.html").is_file() {
        println!(
            "cargo:warning=no built UI at {}; production mode will have nothing to serve",
            dist.display()
        );
        return;
    }

    let _ = fs::remove_dir_all(STATIC_DIR);
    fs::create_dir_all(STATIC_DIR).expect("create backend/static");
    let options = CopyOptions::new().overwrite(true).content_only(true);
    copy(&dist, STATIC_DIR, &options).expect("copy built UI into backend/static");
}

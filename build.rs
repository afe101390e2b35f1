// Stamps BUILD_VERSION from the package version. Deploy pipelines can replace
// the patch segment with a build number via VERSION_LAMBDA_PATCH_VERSION.

use std::env;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let stamped = env::var("VERSION_LAMBDA_PATCH_VERSION")
        .ok()
        .and_then(|patch| {
            version
                .rsplit_once('.')
                .map(|(major_minor, _)| format!("{}.{}", major_minor, patch))
        })
        .unwrap_or(version);

    println!("cargo:rustc-env=BUILD_VERSION={}", stamped);
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=VERSION_LAMBDA_PATCH_VERSION");
}

//! Version string shown in the main menu footer.

const SHORT_HASH_LEN: usize = 7;

/// Returns `v{pkg_version} ({short_hash})`, with a `-dirty` suffix on the
/// hash when the working tree had local changes at build time.
///
/// If git metadata is unavailable, the hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let hash = option_env!("VERGEN_GIT_SHA").map_or("unknown", short_hash);
    let dirty = match option_env!("VERGEN_GIT_DIRTY") {
        Some("true") => "-dirty",
        _ => "",
    };

    format!("v{pkg_version} ({hash}{dirty})")
}

fn short_hash(sha: &str) -> &str {
    sha.get(..SHORT_HASH_LEN).unwrap_or(sha)
}

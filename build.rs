//! Build script for blocklog - embeds git commit hash for dev builds
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//!
//! When the `release` feature IS set (CI/official builds):
//! - Does not emit git info (clean version string)

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let emitted = GitclBuilder::default()
            .sha(true)
            .build()
            .map_err(|e| e.to_string())
            .and_then(|git| {
                Emitter::default()
                    .add_instructions(&git)
                    .map_err(|e| e.to_string())?
                    .emit()
                    .map_err(|e| e.to_string())
            });

        // Outside a git checkout the SHA is unknown, but the variable must exist
        if let Err(e) = emitted {
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}

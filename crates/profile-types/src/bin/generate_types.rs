use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use profile_types::export;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const OUT_DIR_VAR: &str = "PROFILE_TYPES_OUT_DIR";
const REGENERATE_HINT: &str = "run `cargo run --bin generate-types` to regenerate";

/// Output directory for the bindings.
///
/// Without `PROFILE_TYPES_OUT_DIR` this is `shared/` in the source checkout the
/// binary was built from, fixed at compile time; an installed binary needs the
/// variable set.
fn out_dir(override_dir: Option<OsString>) -> PathBuf {
    override_dir.map(PathBuf::from).unwrap_or_else(|| {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("shared")
    })
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .init();

    let check_mode = env::args().any(|arg| arg == "--check");
    let dir = out_dir(env::var_os(OUT_DIR_VAR));

    if check_mode {
        let stale = export::check_bindings(&dir)
            .with_context(|| format!("failed to check bindings in {}", dir.display()))?;
        if stale.is_empty() {
            tracing::info!(dir = %dir.display(), "bindings are up to date");
            return Ok(());
        }
        for path in &stale {
            tracing::error!(path = %path.display(), "bindings are out of date");
        }
        tracing::error!(hint = REGENERATE_HINT, stale = stale.len(), "bindings check failed");
        process::exit(1);
    }

    export::write_bindings(&dir)
        .with_context(|| format!("failed to write bindings to {}", dir.display()))?;
    Ok(())
}

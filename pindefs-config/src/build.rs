//! Helpers for consumer build scripts
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     pindefs_config::build::generate_to_out_dir("pins.toml", "pins.rs");
//! }
//!
//! // src/main.rs
//! mod pins {
//!     include!(concat!(env!("OUT_DIR"), "/pins.rs"));
//! }
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::generate_module;
use crate::declarations::PinDeclarations;
use crate::error::ConfigError;

const BOX_WIDTH: usize = 64;

/// Validate a declaration file, panicking with a readable diagnostic
///
/// Registers the file with `cargo:rerun-if-changed` first so a fix is
/// picked up on the next build.
pub fn validate_file(path: impl AsRef<Path>) -> PinDeclarations {
    let path = path.as_ref();
    println!("cargo:rerun-if-changed={}", path.display());

    match PinDeclarations::from_path(path) {
        Ok(pins) => {
            println!(
                "cargo:warning={} validated successfully ({} pins)",
                path.display(),
                pins.len()
            );
            pins
        }
        Err(err) => panic!("{}", render_error(path, &err)),
    }
}

/// Validate `path` and write the generated module to `$OUT_DIR/<file_name>`
pub fn generate_to_out_dir(path: impl AsRef<Path>, file_name: &str) -> PathBuf {
    let path = path.as_ref();
    let pins = validate_file(path);

    let code = match generate_module(&pins) {
        Ok(code) => code,
        Err(err) => panic!("{}", render_error(path, &err)),
    };

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => panic!("OUT_DIR is not set; call this from a build script"),
    };
    let out = out_dir.join(file_name);
    if let Err(e) = fs::write(&out, code) {
        panic!("failed to write {}: {}", out.display(), e);
    }
    out
}

/// Box-drawn diagnostic listing every problem in `err`
pub fn render_error(path: &Path, err: &ConfigError) -> String {
    let title = match err {
        ConfigError::Io { .. } => format!("ERROR: Failed to read {}", path.display()),
        ConfigError::Toml(_) => format!("ERROR: Invalid TOML syntax in {}", path.display()),
        ConfigError::Invalid(_) => {
            format!("ERROR: Invalid pin declarations in {}", path.display())
        }
        ConfigError::Codegen(_) => format!("ERROR: Code generation failed for {}", path.display()),
    };

    let lines: Vec<String> = match err {
        ConfigError::Invalid(issues) => issues.0.iter().map(|i| format!("• {}", i)).collect(),
        ConfigError::Io { source, .. } => vec![source.to_string()],
        ConfigError::Codegen(e) => vec![e.to_string()],
        ConfigError::Toml(e) => e.to_string().lines().map(str::to_string).collect(),
    };

    let rule = "═".repeat(BOX_WIDTH + 4);
    let mut out = String::from("\n");
    out.push_str(&format!("╔{}╗\n", rule));
    out.push_str(&format!("║  {} ║\n", fit(&title)));
    out.push_str(&format!("╠{}╣\n", rule));
    for line in &lines {
        out.push_str(&format!("║  {} ║\n", fit(line)));
    }
    out.push_str(&format!("╚{}╝\n", rule));
    out
}

/// Pad or truncate to the box width, counting characters rather than bytes
fn fit(line: &str) -> String {
    let count = line.chars().count();
    if count > BOX_WIDTH {
        let head: String = line.chars().take(BOX_WIDTH - 3).collect();
        format!("{}... ", head)
    } else {
        format!("{}{} ", line, " ".repeat(BOX_WIDTH - count))
    }
}

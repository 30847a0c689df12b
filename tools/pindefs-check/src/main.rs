use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pindefs_config::{generate_module, ConfigError, PinDeclarations, PinIssue};

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate a pin declaration file")]
struct Opts {
    /// Pin declaration file (TOML)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the generated Rust module after validation
    #[arg(long)]
    emit: bool,
}

fn run(opts: &Opts) -> Result<()> {
    let pins = PinDeclarations::from_path(&opts.file)
        .with_context(|| format!("checking {}", opts.file.display()))?;

    for pin in pins.iter() {
        println!(
            "{:<24} {:<6} {:<18} {}",
            pin.label,
            pin.pin.to_string(),
            pin.config.mode(),
            pin.config.active_level()
        );
    }

    if opts.emit {
        let code = generate_module(&pins).context("generating pin module")?;
        println!();
        print!("{}", code);
    }

    Ok(())
}

/// Per-pin issues behind a failed run, if any
fn issues(err: &anyhow::Error) -> &[PinIssue] {
    err.downcast_ref::<ConfigError>()
        .map(ConfigError::issues)
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let issues = issues(&err);
            if issues.is_empty() {
                eprintln!("error: {:#}", err);
            } else {
                eprintln!("error: {}", err);
                for issue in issues {
                    eprintln!("  - {}", issue);
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let opts = Opts::parse_from(["pindefs-check", "pins.toml", "--emit"]);
        assert_eq!(opts.file, PathBuf::from("pins.toml"));
        assert!(opts.emit);
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pindefs-check-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_emit_valid_file() {
        let file = write_temp("valid", "[pins.status_led]\npin = \"!PA5\"\nmode = \"output\"\n");
        let result = run(&Opts { file: file.clone(), emit: true });
        std::fs::remove_file(&file).unwrap();
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_invalid_file_lists_issues() {
        let file = write_temp(
            "invalid",
            "[pins.a]\npin = \"PZ0\"\n[pins.b]\npin = \"PA0\"\nmode = \"sideways\"\n",
        );
        let err = run(&Opts { file: file.clone(), emit: false }).unwrap_err();
        std::fs::remove_file(&file).unwrap();

        let labels: Vec<&str> = issues(&err).iter().map(PinIssue::label).collect();
        assert_eq!(labels, ["a", "b"]);
        assert!(format!("{:#}", err).contains("checking"));
    }

    #[test]
    fn test_emit_rejects_reserved_label() {
        let file = write_temp("reserved", "[pins.input]\npin = \"PA0\"\nmode = \"input\"\n");
        let checked = run(&Opts { file: file.clone(), emit: false });
        let emitted = run(&Opts { file: file.clone(), emit: true });
        std::fs::remove_file(&file).unwrap();

        assert!(checked.is_ok());
        let err = emitted.unwrap_err();
        assert!(matches!(issues(&err), [PinIssue::ReservedLabel { reserved: "Input", .. }]));
        assert!(format!("{:#}", err).contains("generating pin module"));
    }

    #[test]
    fn test_missing_file_has_no_issues() {
        let err = run(&Opts {
            file: PathBuf::from("/nonexistent/pins.toml"),
            emit: false,
        })
        .unwrap_err();
        assert!(issues(&err).is_empty());
    }

    #[test]
    fn test_missing_file_reports_context() {
        let opts = Opts {
            file: PathBuf::from("/nonexistent/pins.toml"),
            emit: false,
        };
        let err = run(&opts).unwrap_err();
        assert!(format!("{:#}", err).contains("checking /nonexistent/pins.toml"));
    }
}

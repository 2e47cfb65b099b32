//! # RC Section Checker CLI
//!
//! Terminal interface for the Eurocode 2 bending check. Without options it
//! asks for each field (Enter accepts the default), runs the check once and
//! prints the report. `--input` reads the section from a JSON file instead.

mod args;
mod logging;
mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use rc_core::report::{render, render_error, to_plain_text};
use rc_core::{
    calculate_with_settings, load_json, CalcError, CalcResult, DesignSettings, SectionInput,
};

fn main() -> ExitCode {
    logging::init();

    let cli = match args::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!();
            eprintln!("{}", args::USAGE);
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        println!("{}", args::USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(code = e.error_code(), "calculation failed");
            eprintln!("{}", to_plain_text(&render_error(&e)));
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &args::CliArgs) -> CalcResult<()> {
    let settings = match &cli.settings {
        Some(path) => DesignSettings::load(path)?,
        None => DesignSettings::default(),
    };

    let input: SectionInput = match &cli.input {
        Some(path) => load_json(path)?,
        None => {
            println!("Reinforced Concrete Design (Eurocode 2)");
            println!("=======================================");
            println!();
            let mut stdout = io::stdout();
            prompt::collect_input(&mut io::stdin().lock(), &mut stdout)
                .and_then(|input| stdout.flush().map(|()| input))
                .map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?
        }
    };

    input.validate()?;
    let result = calculate_with_settings(&input, &settings)?;

    println!("{}", to_plain_text(&render(&result)));

    if cli.json {
        println!();
        println!("JSON Output (for LLM/API use):");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::RebarLayer;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_json(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn input_file(dir: &TempDir, input: &SectionInput) -> PathBuf {
        write_json(dir, "section.json", &serde_json::to_string(input).unwrap())
    }

    #[test]
    fn test_run_reference_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = args::CliArgs {
            input: Some(input_file(&dir, &SectionInput::default())),
            json: true,
            ..Default::default()
        };
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_run_not_ok_is_still_success() {
        let dir = tempfile::tempdir().unwrap();
        let input = SectionInput {
            moment_knm: 2000.0,
            ..SectionInput::default()
        };
        let cli = args::CliArgs {
            input: Some(input_file(&dir, &input)),
            ..Default::default()
        };
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn test_run_without_rebar_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = SectionInput {
            layer1: RebarLayer::new(0, 20.0),
            layer2: RebarLayer::new(0, 20.0),
            ..SectionInput::default()
        };
        let cli = args::CliArgs {
            input: Some(input_file(&dir, &input)),
            ..Default::default()
        };
        assert_eq!(run(&cli).unwrap_err().error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_run_rejects_negative_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = SectionInput {
            cover_mm: -65.0,
            ..SectionInput::default()
        };
        let cli = args::CliArgs {
            input: Some(input_file(&dir, &input)),
            ..Default::default()
        };
        assert_eq!(run(&cli).unwrap_err().error_code(), "INPUT_OUT_OF_RANGE");
    }

    #[test]
    fn test_run_bad_settings_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = args::CliArgs {
            input: Some(input_file(&dir, &SectionInput::default())),
            settings: Some(write_json(&dir, "ec2.json", r#"{ "gamma_c": 0.0 }"#)),
            ..Default::default()
        };
        assert_eq!(run(&cli).unwrap_err().error_code(), "INVALID_SETTINGS");

        let cli = args::CliArgs {
            input: Some(dir.path().join("missing.json")),
            ..Default::default()
        };
        assert_eq!(run(&cli).unwrap_err().error_code(), "FILE_ERROR");
    }
}

//! Command-line option parsing.
//!
//! Usage:
//!   rc_cli [--input <file.json>] [--settings <file.json>] [--json]
//!
//! Options:
//!   --input <file>     Read the section from a JSON file instead of prompting
//!   --settings <file>  Override partial factors from a JSON file
//!   --json             Also print the result as JSON
//!   --help, -h         Show this message

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: rc_cli [--input <file.json>] [--settings <file.json>] [--json]

Options:
  --input <file>     Read the section from a JSON file instead of prompting
  --settings <file>  Override partial factors from a JSON file
  --json             Also print the result as JSON
  --help, -h         Show this message";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub input: Option<PathBuf>,
    pub settings: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
}

/// Parse options, excluding the program name.
pub fn parse<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let path = args.next().ok_or("--input requires a file path")?;
                parsed.input = Some(PathBuf::from(path));
            }
            "--settings" | "-s" => {
                let path = args.next().ok_or("--settings requires a file path")?;
                parsed.settings = Some(PathBuf::from(path));
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => parsed.help = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(parsed)
}

//! Reusable CLI runner shared by the `prophash` binary.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::constants::extract::{DEFAULT_INPUT_FILENAME, DEFAULT_OUTPUT_FILENAME};
use crate::pipeline::extract_properties;
use crate::writer::write_property_table;

#[derive(Debug, Parser)]
#[command(
    name = "prophash",
    disable_help_subcommand = true,
    about = "Extract unique property names and hashes into CSV",
    long_about = "Extract unique property names and hashes from a property dump into a sorted CSV table. Lines that do not match the record grammar are skipped silently."
)]
struct ExtractCli {
    #[arg(
        value_name = "INPUT",
        default_value = DEFAULT_INPUT_FILENAME,
        help = "Input property dump path"
    )]
    input: PathBuf,
    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILENAME,
        help = "Output CSV path"
    )]
    output: PathBuf,
}

/// Run the full extraction pipeline from CLI arguments.
///
/// `args_iter` carries the arguments after the program name, as from
/// `std::env::args().skip(1)`. Prints the one-line summary on success;
/// unreadable input or an unwritable output path surfaces as `Err` and a
/// non-zero process exit.
pub fn run_extract<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) =
        parse_cli::<ExtractCli, _>(std::iter::once("prophash".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let records = extract_properties(&cli.input)?;
    let written = write_property_table(&cli.output, &records)?;
    println!(
        "Extracted {} unique properties to: {}",
        written,
        cli.output.display()
    );
    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(parts: &[&str]) -> impl Iterator<Item = String> + use<> {
        parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn runs_pipeline_end_to_end() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("property.txt");
        let output = temp.path().join("out.csv");
        fs::write(&input, "  0: Other(00000001) FF\n").unwrap();

        run_extract(args(&[
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]))
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "property_hash,property_name\n0x00000001,Other\n"
        );
    }

    #[test]
    fn missing_input_path_fails() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("absent.txt");
        let output = temp.path().join("out.csv");

        let result = run_extract(args(&[
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]));
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn help_flag_exits_cleanly() {
        assert!(run_extract(args(&["--help"])).is_ok());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(run_extract(args(&["--bogus"])).is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Command-line arguments.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
geo_lens - extract GPS coordinates from image metadata

USAGE:
  geo_lens [OPTIONS] <FILE>...

OPTIONS:
  --lang <LOCALE>      UI language (e.g. en-US, fr)
  --jobs <N>           maximum number of files processed at once
  --sequential         process one file at a time
  --export <PATH>      write the text export (a directory gets a generated name)
  --save               write the text export to the configured export directory
  --json               print results and map view as JSON
  --links              print only the Google Maps links of located files
  --config <PATH>      use an alternate settings file
  -h, --help           print this help

Set RUST_LOG (e.g. RUST_LOG=geo_lens=debug) for diagnostics on stderr.
";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub help: bool,
    pub lang: Option<String>,
    pub jobs: Option<usize>,
    pub sequential: bool,
    pub export: Option<PathBuf>,
    pub save: bool,
    pub json: bool,
    pub links: bool,
    pub config: Option<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let parsed = Self {
            help: args.contains(["-h", "--help"]),
            lang: args.opt_value_from_str("--lang")?,
            jobs: args.opt_value_from_str("--jobs")?,
            sequential: args.contains("--sequential"),
            export: args.opt_value_from_os_str("--export", to_path)?,
            save: args.contains("--save"),
            json: args.contains("--json"),
            links: args.contains("--links"),
            config: args.opt_value_from_os_str("--config", to_path)?,
            files: Vec::new(),
        };

        let mut files = Vec::new();
        for arg in args.finish() {
            if arg.to_string_lossy().starts_with("--") {
                return Err(Error::Cli(format!(
                    "unknown option '{}'",
                    arg.to_string_lossy()
                )));
            }
            files.push(PathBuf::from(arg));
        }

        if parsed.json && parsed.links {
            return Err(Error::Cli(
                "--json and --links cannot be combined".to_string(),
            ));
        }

        Ok(Self { files, ..parsed })
    }
}

fn to_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, &'static str> {
    if value.is_empty() {
        Err("empty path")
    } else {
        Ok(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::from_vec(args.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_files_in_order() {
        let args = parse(&["b.jpg", "a.jpg", "c.png"]).expect("valid args");
        assert_eq!(
            args.files,
            vec![
                PathBuf::from("b.jpg"),
                PathBuf::from("a.jpg"),
                PathBuf::from("c.png")
            ]
        );
        assert!(!args.sequential);
        assert!(args.export.is_none());
    }

    #[test]
    fn parses_all_options() {
        let args = parse(&[
            "--lang",
            "fr",
            "--jobs",
            "3",
            "--sequential",
            "--export",
            "out.txt",
            "--config",
            "settings.toml",
            "--links",
            "photo.jpg",
        ])
        .expect("valid args");

        assert_eq!(args.lang.as_deref(), Some("fr"));
        assert_eq!(args.jobs, Some(3));
        assert!(args.sequential);
        assert!(args.links);
        assert_eq!(args.export, Some(PathBuf::from("out.txt")));
        assert_eq!(args.config, Some(PathBuf::from("settings.toml")));
        assert_eq!(args.files, vec![PathBuf::from("photo.jpg")]);
    }

    #[test]
    fn help_without_files() {
        let args = parse(&["--help"]).expect("valid args");
        assert!(args.help);
        assert!(args.files.is_empty());
    }

    #[test]
    fn invalid_jobs_is_cli_error() {
        let err = parse(&["--jobs", "many", "a.jpg"]).expect_err("invalid jobs");
        assert!(matches!(err, Error::Cli(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = parse(&["--frobnicate", "a.jpg"]).expect_err("unknown option");
        assert!(err.to_string().contains("--frobnicate"));
    }

    #[test]
    fn json_and_links_conflict() {
        assert!(parse(&["--json", "--links", "a.jpg"]).is_err());
    }

    #[test]
    fn missing_option_value_is_error() {
        assert!(parse(&["--export"]).is_err());
    }
}

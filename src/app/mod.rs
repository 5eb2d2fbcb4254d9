// SPDX-License-Identifier: MPL-2.0
//! Command-line application shell.
//!
//! `run` wires the layers together: it loads preferences, resolves the UI
//! language, runs the batch through the EXIF reader, prints the localized
//! report (or JSON, or bare links) and writes the text export on request.
//! Per-file failures are part of the report; only shell problems such as an
//! unwritable export path surface as [`Error`](crate::error::Error).

pub mod args;
pub mod view;

pub use args::Args;

use crate::application::batch::BatchProcessor;
use crate::application::export::{render_json, write_text_export};
use crate::config::defaults::{MAX_JOBS, MIN_JOBS};
use crate::config::{self, Config};
use crate::domain::extraction::ResultSet;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ExifLocationReader, FileSource};
use std::io::Write;
use std::path::PathBuf;

/// Runs the CLI, writing user-facing output to `out`.
pub async fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    if args.help {
        out.write_all(args::HELP.as_bytes())?;
        return Ok(());
    }

    let config = load_config(&args)?;
    let i18n = I18n::new(args.lang.as_deref(), &config);
    tracing::debug!(locale = %i18n.current_locale(), "locale resolved");

    if args.files.is_empty() {
        writeln!(out, "{}", i18n.tr("no-files"))?;
        writeln!(out)?;
        out.write_all(args::HELP.as_bytes())?;
        return Ok(());
    }

    let results = process(&args, &config).await;

    if args.json {
        writeln!(out, "{}", render_json(&results)?)?;
    } else if args.links {
        out.write_all(view::links(&results).as_bytes())?;
    } else {
        writeln!(
            out,
            "{}",
            i18n.tr_with_args("processing", &[("count", &args.files.len().to_string())])
        )?;
        writeln!(out)?;
        out.write_all(view::report(&results, &i18n).as_bytes())?;
    }

    if let Some(target) = export_target(&args, &config) {
        let path = write_text_export(&results, &target)?;
        let message = i18n.tr_with_args("export-written", &[("path", &path.display().to_string())]);
        if args.json || args.links {
            // Keep machine-readable stdout clean.
            eprintln!("{message}");
        } else {
            writeln!(out)?;
            writeln!(out, "{message}")?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Localizes a shell error in the language `run` resolves for `args`.
///
/// The settings file is read again; if it cannot be read, the CLI language
/// or the system locale applies.
pub fn error_message(err: &Error, args: &Args) -> String {
    let config = load_config(args).unwrap_or_default();
    let i18n = I18n::new(args.lang.as_deref(), &config);
    i18n.tr_with_args(err.i18n_key(), &[("detail", err.detail())])
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) if path.exists() => config::load_from_path(path),
        Some(path) => {
            tracing::warn!(path = %path.display(), "settings file not found, using defaults");
            Ok(Config::default())
        }
        None => config::load(),
    }
}

/// `--jobs` wins over the settings file; both are clamped.
fn effective_jobs(args: &Args, config: &Config) -> usize {
    args.jobs
        .map_or_else(|| config.effective_jobs(), |jobs| jobs.clamp(MIN_JOBS, MAX_JOBS))
}

async fn process(args: &Args, config: &Config) -> ResultSet {
    let jobs = effective_jobs(args, config);
    let processor = BatchProcessor::new(ExifLocationReader::new()).with_jobs(jobs);
    let sources: Vec<FileSource> = args.files.iter().map(FileSource::new).collect();

    if args.sequential || !config.is_concurrent() {
        tracing::info!(files = sources.len(), "processing sequentially");
        processor.process(&sources)
    } else {
        tracing::info!(files = sources.len(), jobs, "processing concurrently");
        processor.process_concurrent(sources).await
    }
}

fn export_target(args: &Args, config: &Config) -> Option<PathBuf> {
    args.export
        .clone()
        .or_else(|| args.save.then(|| config.effective_export_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metadata::GpsCoordinates;
    use crate::test_utils::{gps_fields, jpeg_with_fields, plain_jpeg};
    use std::fs;
    use tempfile::tempdir;

    fn args_for(files: Vec<PathBuf>) -> Args {
        Args {
            lang: Some("en-US".to_string()),
            config: Some(PathBuf::from("/nonexistent/geo_lens/settings.toml")),
            files,
            ..Args::default()
        }
    }

    fn write_fixtures(dir: &std::path::Path) -> Vec<PathBuf> {
        let located = dir.join("pittsburgh.jpg");
        fs::write(
            &located,
            jpeg_with_fields(&gps_fields(
                [(40, 1), (26, 1), (46, 1)],
                "N",
                [(79, 1), (56, 1), (55, 1)],
                "W",
            )),
        )
        .expect("write fixture");
        let plain = dir.join("plain.jpg");
        fs::write(&plain, plain_jpeg()).expect("write fixture");
        vec![located, plain]
    }

    #[tokio::test]
    async fn help_prints_usage() {
        let mut out = Vec::new();
        let args = Args {
            help: true,
            ..Args::default()
        };
        run(args, &mut out).await.expect("help succeeds");
        assert!(String::from_utf8_lossy(&out).contains("USAGE"));
    }

    #[tokio::test]
    async fn no_files_is_a_no_op() {
        let mut out = Vec::new();
        run(args_for(Vec::new()), &mut out).await.expect("no-op succeeds");
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("No image files given"));
        assert!(text.contains("USAGE"));
    }

    #[tokio::test]
    async fn report_lists_every_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let files = write_fixtures(dir.path());
        let mut out = Vec::new();

        run(args_for(files), &mut out).await.expect("run succeeds");

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Image 1: pittsburgh.jpg"));
        assert!(text.contains("Image 2: plain.jpg"));
        assert!(text.contains("Found GPS data in 1 of 2 images"));
        assert!(text.contains("https://www.google.com/maps?q=40.446111,-79.948611"));
    }

    #[tokio::test]
    async fn links_mode_prints_only_urls() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut args = args_for(write_fixtures(dir.path()));
        args.links = true;
        args.sequential = true;
        let mut out = Vec::new();

        run(args, &mut out).await.expect("run succeeds");

        let expected = GpsCoordinates::rounded(40.446111, -79.948611)
            .expect("finite")
            .map_url();
        assert_eq!(String::from_utf8_lossy(&out), format!("{expected}\n"));
    }

    #[tokio::test]
    async fn json_mode_prints_parseable_report() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut args = args_for(write_fixtures(dir.path()));
        args.json = true;
        let mut out = Vec::new();

        run(args, &mut out).await.expect("run succeeds");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["results"][1]["failure"]["category"], "no_location_metadata");
    }

    #[tokio::test]
    async fn export_writes_into_directory() {
        let dir = tempdir().expect("failed to create temp dir");
        let export_dir = dir.path().join("exports");
        fs::create_dir_all(&export_dir).expect("create export dir");
        let mut args = args_for(write_fixtures(dir.path()));
        args.export = Some(export_dir.clone());
        let mut out = Vec::new();

        run(args, &mut out).await.expect("run succeeds");

        let written: Vec<_> = fs::read_dir(&export_dir)
            .expect("read export dir")
            .filter_map(|entry| entry.ok())
            .collect();
        assert_eq!(written.len(), 1);
        let name = written[0].file_name().to_string_lossy().into_owned();
        assert!(name.starts_with("gps_coordinates_") && name.ends_with(".txt"));
        assert!(String::from_utf8_lossy(&out).contains("Results exported to"));
    }

    #[tokio::test]
    async fn save_uses_configured_export_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        let export_dir = dir.path().join("saved");
        fs::create_dir_all(&export_dir).expect("create export dir");
        let settings = dir.path().join("settings.toml");
        config::save_to_path(
            &Config {
                export_dir: Some(export_dir.clone()),
                ..Config::default()
            },
            &settings,
        )
        .expect("save settings");

        let mut args = args_for(write_fixtures(dir.path()));
        args.config = Some(settings);
        args.save = true;
        let mut out = Vec::new();

        run(args, &mut out).await.expect("run succeeds");

        assert_eq!(fs::read_dir(&export_dir).expect("read export dir").count(), 1);
    }

    #[test]
    fn error_message_uses_configured_language() {
        let dir = tempdir().expect("failed to create temp dir");
        let settings = dir.path().join("settings.toml");
        config::save_to_path(
            &Config {
                language: Some("fr".to_string()),
                ..Config::default()
            },
            &settings,
        )
        .expect("save settings");
        let err = Error::Export("disk full".into());

        let args = Args {
            config: Some(settings),
            ..Args::default()
        };
        assert_eq!(error_message(&err, &args), "Erreur d'export : disk full");

        let args = Args {
            lang: Some("en-US".to_string()),
            ..args
        };
        assert_eq!(error_message(&err, &args), "Export error: disk full");
    }

    #[test]
    fn cli_jobs_override_config() {
        let args = Args {
            jobs: Some(0),
            ..Args::default()
        };
        let config = Config {
            jobs: Some(12),
            ..Config::default()
        };
        assert_eq!(effective_jobs(&args, &config), MIN_JOBS);
        assert_eq!(effective_jobs(&Args::default(), &config), 12);
        assert!(export_target(&args, &config).is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Console rendering of a batch.
//!
//! Everything here is localized through [`I18n`]; the text export in
//! `application::export` is the stable, English-only format.

use crate::application::query::MapView;
use crate::domain::extraction::{ExtractionOutcome, FailureReason, ResultSet};
use crate::i18n::fluent::I18n;
use std::fmt::Write as _;

/// Localized failure message.
pub fn failure_message(reason: &FailureReason, i18n: &I18n) -> String {
    i18n.tr_with_args(reason.i18n_key(), &[("detail", reason.detail().unwrap_or(""))])
}

/// Result list: one block per file, in input order.
pub fn result_list(results: &ResultSet, i18n: &I18n) -> String {
    let mut out = String::new();
    let latitude = i18n.tr("label-latitude");
    let longitude = i18n.tr("label-longitude");
    let map_link = i18n.tr("label-map-link");
    let status = i18n.tr("label-status");

    for (index, result) in results.iter().enumerate() {
        let number = (index + 1).to_string();
        out.push_str(&i18n.tr_with_args(
            "label-image",
            &[("number", &number), ("name", result.name())],
        ));
        out.push('\n');
        match result.outcome() {
            ExtractionOutcome::Located(coordinates) => {
                let _ = writeln!(out, "  {latitude}: {}", coordinates.latitude());
                let _ = writeln!(out, "  {longitude}: {}", coordinates.longitude());
                let _ = writeln!(out, "  {map_link}: {}", coordinates.map_url());
            }
            ExtractionOutcome::Failed(reason) => {
                let _ = writeln!(out, "  {status}: {}", failure_message(reason, i18n));
            }
        }
    }
    out
}

/// "Found GPS data in X of Y images".
pub fn summary_line(results: &ResultSet, i18n: &I18n) -> String {
    let summary = results.summary();
    i18n.tr_with_args(
        "summary",
        &[
            ("located", &summary.located.to_string()),
            ("total", &summary.total.to_string()),
        ],
    )
}

/// Map section: viewport and one line per marker.
pub fn map_section(view: Option<&MapView>, i18n: &I18n) -> String {
    let Some(view) = view else {
        return i18n.tr("map-none") + "\n";
    };

    let mut out = i18n.tr("map-heading");
    out.push('\n');
    out.push_str("  ");
    out.push_str(&i18n.tr_with_args(
        "map-center",
        &[
            ("latitude", &view.center.latitude().to_string()),
            ("longitude", &view.center.longitude().to_string()),
            ("zoom", &view.zoom.to_string()),
        ],
    ));
    out.push('\n');

    for marker in &view.markers {
        let number = (marker.index + 1).to_string();
        out.push_str("  ");
        out.push_str(&i18n.tr_with_args(
            "map-marker",
            &[
                ("number", &number),
                ("name", &marker.name),
                ("coordinates", &marker.coordinates.format()),
            ],
        ));
        out.push('\n');
    }
    out
}

/// Google Maps links of located files, one per line.
pub fn links(results: &ResultSet) -> String {
    results
        .located()
        .map(|(_, _, coordinates)| coordinates.map_url() + "\n")
        .collect()
}

/// Full console report: list, summary, then map section.
pub fn report(results: &ResultSet, i18n: &I18n) -> String {
    let mut out = result_list(results, i18n);
    out.push('\n');
    out.push_str(&summary_line(results, i18n));
    out.push_str("\n\n");
    out.push_str(&map_section(MapView::from_results(results).as_ref(), i18n));
    out
}

// crates/cli/src/print.rs
use ndb_compat::{OutputFormat, PeerReport};
use ndb_version::{Feature, VersionNumber};
use serde::Serialize;
use std::io::{self, Write};

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

pub fn print_reports<W: Write>(
    out: &mut W,
    reports: &[PeerReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, reports),
        OutputFormat::Text => {
            for r in reports {
                writeln!(out, "{}\t{:#08x}\ttier {}", r.peer, r.peer, r.tier)?;
            }
            Ok(())
        }
    }
}

pub fn print_versions<W: Write>(
    out: &mut W,
    versions: &[VersionNumber],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, versions),
        OutputFormat::Text => {
            for v in versions {
                writeln!(
                    out,
                    "{v}\tmajor={} minor={} build={}\traw={:#08x} ({})",
                    v.major(),
                    v.minor(),
                    v.build(),
                    v,
                    v.raw()
                )?;
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct FeatureRow {
    feature: Feature,
    supported: bool,
    since: Vec<String>,
}

pub fn print_features<W: Write>(
    out: &mut W,
    version: VersionNumber,
    format: OutputFormat,
) -> io::Result<()> {
    let rows: Vec<FeatureRow> = Feature::ALL
        .into_iter()
        .map(|f| FeatureRow {
            feature: f,
            supported: f.is_supported_by(version),
            since: f.thresholds().iter().map(ToString::to_string).collect(),
        })
        .collect();
    match format {
        OutputFormat::Json => write_json(out, &rows),
        OutputFormat::Text => {
            for row in &rows {
                writeln!(
                    out,
                    "{:<22}{:<5}since {}",
                    row.feature.name(),
                    if row.supported { "yes" } else { "no" },
                    row.since.join(", ")
                )?;
            }
            Ok(())
        }
    }
}

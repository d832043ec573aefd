//! Text report of release download counts.

use chrono::{DateTime, Utc};
use std::io::{self, Write};

use crate::provider::Release;

const SEPARATOR: &str = "---------";
const COLUMNS: &str = "PUBLISH DATE | RELEASE TAG | FILE NAME | DOWNLOAD COUNT";
const DATE_FORMAT: &str = "%m-%d-%Y";

fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Writes the report for `releases` and returns the total download count.
///
/// Each release gets a header block and one row per asset. The trailing
/// `TOTAL DOWNLOAD COUNT` line is always written, even for an empty list.
pub fn write_report<W: Write>(releases: &[Release], out: &mut W) -> io::Result<u64> {
    let mut total: u64 = 0;

    for release in releases {
        let name = release.name.as_deref().unwrap_or_default();
        let prerelease = if release.prerelease { " [PRERELEASE]" } else { "" };
        let published = release
            .published_at
            .as_ref()
            .map(format_date)
            .unwrap_or_default();

        writeln!(out)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "{}{} [{}]", name, prerelease, published)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;
        writeln!(out, "{}", COLUMNS)?;
        writeln!(out)?;

        for asset in &release.assets {
            writeln!(
                out,
                "{} | {} | {} | {}",
                format_date(&asset.updated_at),
                release.tag,
                asset.name,
                asset.download_count
            )?;
            total += asset.download_count;
        }
    }

    writeln!(out)?;
    writeln!(out, "TOTAL DOWNLOAD COUNT: {}", total)?;

    Ok(total)
}

/// Renders the report into a string.
pub fn render(releases: &[Release]) -> String {
    let mut buf = Vec::new();
    write_report(releases, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

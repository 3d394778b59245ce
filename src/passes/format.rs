use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local, TimeZone};

use crate::passes::types::{Pass, VisualPassReport};

/// RFC 822 layout, e.g. `02 Jan 06 15:04 UTC`
const RFC822: &str = "%d %b %y %H:%M %Z";

pub fn seconds_to_duration(total_seconds: i64) -> String {
    format!("{}m {:2}s", total_seconds / 60, total_seconds % 60)
}

pub fn format_magnitude(pass: &Pass) -> String {
    if pass.has_magnitude() {
        format!("{:.2}", pass.mag)
    } else {
        "-".to_string()
    }
}

pub fn format_angle(degrees: f64) -> String {
    format!("{:.2}°", degrees)
}

/// Format epoch seconds in the server's local time zone.
pub fn format_timestamp(epoch_seconds: i64) -> String {
    format_timestamp_in(epoch_seconds, &Local)
}

pub fn format_timestamp_in<Tz>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(utc) => utc.with_timezone(tz).format(RFC822).to_string(),
        None => epoch_seconds.to_string(),
    }
}

/// Display-ready cells of one pass table row
#[derive(Debug, Clone, PartialEq)]
pub struct PassRow {
    pub magnitude: String,
    pub duration: String,
    pub start_visibility: String,
    pub start: String,
    pub start_azimuth: String,
    pub start_elevation: String,
    pub max: String,
    pub max_azimuth: String,
    pub max_elevation: String,
    pub end: String,
    pub end_azimuth: String,
    pub end_elevation: String,
}

impl PassRow {
    pub fn new(pass: &Pass) -> Self {
        Self::with_clock(pass, format_timestamp)
    }

    pub fn with_clock(pass: &Pass, clock: impl Fn(i64) -> String) -> Self {
        let azimuth = |az: f64, compass: &str| format!("{} ({})", format_angle(az), compass);

        PassRow {
            magnitude: format_magnitude(pass),
            duration: seconds_to_duration(pass.duration),
            start_visibility: clock(pass.start_visibility),
            start: clock(pass.start_utc),
            start_azimuth: azimuth(pass.start_az, &pass.start_az_compass),
            start_elevation: format_angle(pass.start_el),
            max: clock(pass.max_utc),
            max_azimuth: azimuth(pass.max_az, &pass.max_az_compass),
            max_elevation: format_angle(pass.max_el),
            end: clock(pass.end_utc),
            end_azimuth: azimuth(pass.end_az, &pass.end_az_compass),
            end_elevation: format_angle(pass.end_el),
        }
    }
}

/// Plain-text dump of a report, one block per pass.
pub fn write_report<W: Write>(out: &mut W, report: &VisualPassReport) -> io::Result<()> {
    writeln!(out, "Satellite name     : {}", report.info.name)?;
    writeln!(out, "Satellite ID       : {}", report.info.id)?;
    writeln!(out, "Transactions Count : {}", report.info.transactions_count)?;
    writeln!(out, "Passes Count       : {}", report.info.passes_count)?;

    for (i, pass) in report.passes.iter().enumerate() {
        let row = PassRow::new(pass);
        writeln!(out, "Pass {:2}:", i)?;
        writeln!(out, "  Magnitude         : {}", row.magnitude)?;
        writeln!(out, "  Duration          : {}s ({})", pass.duration, row.duration)?;
        writeln!(out, "  Start Visibility  : {}", row.start_visibility)?;
        writeln!(out)?;
        writeln!(out, "  Start             : {}", row.start)?;
        writeln!(out, "  Start Azimuth     : {}", row.start_azimuth)?;
        writeln!(out, "  Start Elevation   : {}", row.start_elevation)?;
        writeln!(out)?;
        writeln!(out, "  Max               : {}", row.max)?;
        writeln!(out, "  Max Azimuth       : {}", row.max_azimuth)?;
        writeln!(out, "  Max Elevation     : {}", row.max_elevation)?;
        writeln!(out)?;
        writeln!(out, "  End               : {}", row.end)?;
        writeln!(out, "  End Azimuth       : {}", row.end_azimuth)?;
        writeln!(out, "  End Elevation     : {}", row.end_elevation)?;
        writeln!(out)?;
    }

    Ok(())
}

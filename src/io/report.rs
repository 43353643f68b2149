//! Scanner report text parsing.
//!
//! Reports are blocks separated by blank lines. Each block opens with a
//! `--- scanner N ---` header followed by one `x,y,z` integer triple per
//! line:
//!
//! ```text
//! --- scanner 0 ---
//! 404,-588,-901
//! 528,-643,409
//!
//! --- scanner 1 ---
//! 686,422,578
//! ```

use crate::core::types::{BeaconCloud, Point3, ScannerReport};
use crate::error::{Result, TaraError};

/// Parse a full scanner report into per-scanner beacon clouds, preserving
/// input order of scanners and of beacons within each scanner.
pub fn parse_report(input: &str) -> Result<Vec<ScannerReport>> {
    let mut reports: Vec<ScannerReport> = Vec::new();
    let mut current: Option<(usize, ScannerReport)> = None;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("---") {
            let id = parse_header(line).ok_or_else(|| TaraError::Parse {
                line: line_no,
                message: format!("malformed scanner header: {:?}", line),
            })?;
            if let Some((header_line, report)) = current.take() {
                finish_block(header_line, report, &mut reports)?;
            }
            current = Some((line_no, ScannerReport::new(id, BeaconCloud::new())));
        } else {
            let point = parse_beacon(line).ok_or_else(|| TaraError::Parse {
                line: line_no,
                message: format!("expected x,y,z integer triple: {:?}", line),
            })?;
            match current.as_mut() {
                Some((_, report)) => report.beacons.push(point),
                None => {
                    return Err(TaraError::Parse {
                        line: line_no,
                        message: "beacon line before any scanner header".to_string(),
                    });
                }
            }
        }
    }

    if let Some((header_line, report)) = current.take() {
        finish_block(header_line, report, &mut reports)?;
    }

    Ok(reports)
}

fn finish_block(
    header_line: usize,
    report: ScannerReport,
    reports: &mut Vec<ScannerReport>,
) -> Result<()> {
    if report.beacons.is_empty() {
        return Err(TaraError::Parse {
            line: header_line,
            message: format!("scanner {} has no beacons", report.id),
        });
    }
    reports.push(report);
    Ok(())
}

fn parse_header(line: &str) -> Option<usize> {
    line.strip_prefix("--- scanner ")?
        .strip_suffix(" ---")?
        .parse()
        .ok()
}

fn parse_beacon(line: &str) -> Option<Point3> {
    let mut fields = line.split(',');
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;
    let z = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point3::new(x, y, z))
}

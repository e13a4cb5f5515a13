//! Report line parsing for end-to-end assertions.

/// Fields of a `<board>, <processor>, <speed>, <version>, average <name>, <mean>` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReportLine {
    pub board: String,
    pub processor: String,
    pub speed: String,
    pub version: String,
    pub workload: String,
    pub mean_us: f64,
}

/// Parses a report line. Returns `None` for malformed lines and the
/// no-match sentinel.
pub fn parse_report_line(line: &str) -> Option<ParsedReportLine> {
    let fields: Vec<&str> = line.split(", ").collect();
    if fields.len() != 6 {
        return None;
    }
    let workload = fields[4].strip_prefix("average ")?;
    let mean_us = fields[5].trim().parse().ok()?;
    Some(ParsedReportLine {
        board: fields[0].to_string(),
        processor: fields[1].to_string(),
        speed: fields[2].to_string(),
        version: fields[3].to_string(),
        workload: workload.to_string(),
        mean_us,
    })
}

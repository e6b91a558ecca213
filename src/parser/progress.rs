// file: src/parser/progress.rs
// description: HandBrakeCLI progress line matching and ETA conversion
// reference: https://docs.rs/regex

use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Encoding: task 1 of 1, 45.20 % (61.23 fps, avg 58.10 fps, ETA 00h05m10s)"
    pub static ref PROGRESS_LINE: Regex = Regex::new(
        r"(\d+\.\d+)\s%\s.*ETA\s(\d{2}h\d{2}m\d{2}s)"
    ).expect("PROGRESS_LINE regex is valid");

    pub static ref ETA: Regex = Regex::new(
        r"^(\d{2})h(\d{2})m(\d{2})s"
    ).expect("ETA regex is valid");
}

const SECONDS_PER_DAY: u64 = 86_400;

/// One progress report emitted by the transcoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Percentage as printed, 0.0 to 100.0.
    pub percent: f64,
    /// ETA token as printed, `HHhMMmSSs`.
    pub eta: String,
}

impl ProgressUpdate {
    pub fn fraction(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }

    pub fn eta_seconds(&self) -> u64 {
        parse_eta(&self.eta)
    }
}

pub fn parse_progress_line(line: &str) -> Option<ProgressUpdate> {
    let caps = PROGRESS_LINE.captures(line.trim())?;
    let percent = caps[1].parse::<f64>().ok()?;

    Some(ProgressUpdate {
        percent,
        eta: caps[2].to_string(),
    })
}

/// Converts `HHhMMmSSs` to seconds. Anything else counts as zero.
pub fn parse_eta(eta: &str) -> u64 {
    let Some(caps) = ETA.captures(eta) else {
        return 0;
    };

    let field = |i: usize| caps[i].parse::<u64>().unwrap_or(0);
    field(1) * 3600 + field(2) * 60 + field(3)
}

/// Wall-clock style `HH:MM:SS`, wrapping at 24 hours.
pub fn format_hhmmss(seconds: u64) -> String {
    let within_day = (seconds % SECONDS_PER_DAY) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(within_day, 0)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "00:00:00".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eta() {
        assert_eq!(parse_eta("02h15m30s"), 8130);
        assert_eq!(parse_eta("00h00m09s"), 9);
        assert_eq!(parse_eta("garbage"), 0);
        assert_eq!(parse_eta(""), 0);
    }

    #[test]
    fn test_progress_line_match() {
        let update = parse_progress_line("45.2 % done, ETA 00h05m10s").unwrap();
        assert_eq!(update.percent, 45.2);
        assert_eq!(update.eta, "00h05m10s");
        assert_eq!(update.eta_seconds(), 310);
    }

    #[test]
    fn test_handbrake_status_line() {
        let line = "Encoding: task 1 of 1, 12.34 % (48.77 fps, avg 51.02 fps, ETA 01h02m03s)";
        let update = parse_progress_line(line).unwrap();
        assert_eq!(update.percent, 12.34);
        assert_eq!(update.eta, "01h02m03s");
    }

    #[test]
    fn test_non_progress_lines_do_not_match() {
        assert!(parse_progress_line("Encoding: task 1 of 1, 0.00 %").is_none());
        assert!(parse_progress_line("ETA 00h01m00s").is_none());
        assert!(parse_progress_line("[12:00:01] starting job").is_none());
        assert!(parse_progress_line("").is_none());
    }

    #[test]
    fn test_fraction_is_clamped() {
        let update = ProgressUpdate {
            percent: 100.0,
            eta: "00h00m00s".to_string(),
        };
        assert_eq!(update.fraction(), 1.0);
    }

    #[test]
    fn test_format_hhmmss() {
        assert_eq!(format_hhmmss(0), "00:00:00");
        assert_eq!(format_hhmmss(8130), "02:15:30");
        assert_eq!(format_hhmmss(SECONDS_PER_DAY + 61), "00:01:01");
    }
}

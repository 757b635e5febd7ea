use mt_core::chrono::DateTime;

/// The form the archive's date headers come in,
/// e.g. `Thu, 06 Apr 2000 09:52:53 -0300`.
const ARCHIVE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";
/// The localized display form written into the converted documents.
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Reformat a raw date header for display.
///
/// Anything that doesn't parse strictly is returned unchanged, so a
/// garbled header still shows up in the output instead of vanishing.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_str(raw, ARCHIVE_FORMAT) {
        Ok(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_archive_dates() {
        assert_eq!(
            format_date("Thu, 06 Apr 2000 09:52:53 -0300"),
            "06/04/2000 09:52"
        );
    }

    #[test]
    fn pads_day_month_and_time() {
        assert_eq!(
            format_date("Sat, 01 Jan 2005 08:05:00 +0000"),
            "01/01/2005 08:05"
        );
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_date("garbage-date"), "garbage-date");
        assert_eq!(format_date(""), "");
        // Right fields, wrong layout
        assert_eq!(format_date("06 Apr 2000 09:52:53"), "06 Apr 2000 09:52:53");
    }
}

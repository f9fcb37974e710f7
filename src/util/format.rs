// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a duration in seconds as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// Used for play lengths in the library table and the playlist runtime.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Joins credited names for a table cell, or a placeholder when the column
/// does not apply to the record.
pub(crate) fn format_names(names: Option<&[String]>) -> String {
    match names {
        Some(names) => names.join(","),
        None => NOT_APPLICABLE.to_string(),
    }
}

pub(crate) const NOT_APPLICABLE: &str = "---";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_hours() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(355), "05:55");
        assert_eq!(format_time(8880), "2:28:00");
    }

    #[test]
    fn formats_names_or_placeholder() {
        let names = vec!["Leo".to_string(), "Tom".to_string()];
        assert_eq!(format_names(Some(names.as_slice())), "Leo,Tom");
        assert_eq!(format_names(Some(&names[..0])), "");
        assert_eq!(format_names(None), "---");
    }
}

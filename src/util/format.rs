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

//! Formatting of media fields for display.

/// Joins a list of names with commas, or returns `None` if it is empty.
pub(crate) fn join_names(names: &[String]) -> Option<String> {
    let names: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();

    (!names.is_empty()).then(|| names.join(", "))
}

/// The year part of a date-like string such as `1965-08-01`.
pub(crate) fn format_year(release_date: Option<&str>) -> Option<String> {
    let year: String = release_date?.trim().chars().take(4).collect();
    (!year.is_empty()).then_some(year)
}

/// Formats a runtime given in minutes (`155` or `155 min`) as `2h 35m`; any
/// other text is shown unchanged.
///
/// ```ignore
/// assert_eq!(format_runtime("155"), "2h 35m");
/// assert_eq!(format_runtime("45"), "45m");
/// assert_eq!(format_runtime("3 seasons"), "3 seasons");
/// ```
pub(crate) fn format_runtime(runtime: &str) -> String {
    let runtime = runtime.trim();
    let minutes = runtime.strip_suffix("min").unwrap_or(runtime).trim();
    match minutes.parse::<u32>() {
        Ok(minutes) if minutes >= 60 => format!("{}h {:02}m", minutes / 60, minutes % 60),
        Ok(minutes) => format!("{}m", minutes),
        Err(_) => runtime.to_string(),
    }
}

/// Formats a rating out of ten with one decimal place.
pub(crate) fn format_rating(rating: f32) -> String {
    format!("{:.1}/10", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_runtime_in_hours_and_minutes() {
        assert_eq!(format_runtime("155"), "2h 35m");
        assert_eq!(format_runtime("60"), "1h 00m");
        assert_eq!(format_runtime("45"), "45m");
        assert_eq!(format_runtime("125 min"), "2h 05m");
        assert_eq!(format_runtime(" 3 seasons "), "3 seasons");
    }

    #[test]
    fn year_is_the_leading_four_characters() {
        assert_eq!(format_year(Some("1965-08-01")), Some("1965".to_string()));
        assert_eq!(format_year(Some("")), None);
        assert_eq!(format_year(None), None);
    }

    #[test]
    fn joins_non_blank_names() {
        let names = vec!["Frank Herbert".to_string(), " ".to_string(), "Brian".to_string()];
        assert_eq!(join_names(&names), Some("Frank Herbert, Brian".to_string()));
        assert_eq!(join_names(&[]), None);
        assert_eq!(format_rating(8.5), "8.5/10");
    }
}

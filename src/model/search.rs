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

//! Media search suggestions.
//!
//! This module projects raw search responses into [`SearchResult`]s and
//! filters a local suggestion dataset. Both keep the order of their source.

use serde_json::Value;

/// Maximum number of suggestions surfaced for a query.
pub(crate) const MAX_SUGGESTIONS: usize = 5;

/// A single search suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub(crate) id: String,
    pub(crate) title: String,
    /// Four character release year, empty when unknown.
    pub(crate) year: String,
    /// Lower-cased media type tag, empty when unknown.
    pub(crate) category: String,
}

impl SearchResult {
    pub(crate) fn new(id: &str, title: &str, year: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            category: category.to_string(),
        }
    }
}

/// Extracts suggestions from a search response body.
///
/// The body is either a bare array of media summaries or a page envelope
/// holding them under `content`. Anything else yields no suggestions. At
/// most [`MAX_SUGGESTIONS`] are kept, whatever the server returned.
pub(crate) fn parse_suggestions(body: &Value) -> Vec<SearchResult> {
    let summaries = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("content")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    };

    summaries
        .iter()
        .filter_map(project_summary)
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn project_summary(summary: &Value) -> Option<SearchResult> {
    let fields = summary.as_object()?;

    let id = ["id", "mediaId"]
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(scalar_to_string)
        .unwrap_or_default();

    let title = fields
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let year = fields
        .get("releaseDate")
        .and_then(scalar_to_string)
        .map(|date| date.chars().take(4).collect())
        .unwrap_or_default();

    Some(SearchResult {
        id,
        title,
        year,
        category: category_of(fields.get("type")),
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn category_of(type_tag: Option<&Value>) -> String {
    type_tag
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Case-insensitive substring match of `query` against item titles.
///
/// At most [`MAX_SUGGESTIONS`] matches are returned, in dataset order.
pub(crate) fn filter_local(items: &[SearchResult], query: &str) -> Vec<SearchResult> {
    let needle = query.to_lowercase();

    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn local_filter_is_case_insensitive_and_keeps_order() {
        let items = vec![
            SearchResult::new("1", "Dune", "1965", "books"),
            SearchResult::new("2", "Dune Messiah", "1969", "books"),
            SearchResult::new("3", "Foo", "", ""),
        ];

        let results = filter_local(&items, "dune");
        assert_eq!(titles(&results), vec!["Dune", "Dune Messiah"]);

        let results = filter_local(&items, "MESSIAH");
        assert_eq!(titles(&results), vec!["Dune Messiah"]);
    }

    #[test]
    fn local_filter_caps_at_five() {
        let items: Vec<SearchResult> = (0..8)
            .map(|i| SearchResult::new(&i.to_string(), &format!("Star Trek {i}"), "", "tv"))
            .collect();

        let results = filter_local(&items, "star");
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0].id, "0");
        assert_eq!(results[4].id, "4");
    }

    #[test]
    fn parses_bare_array() {
        let body = json!([
            {"id": "a1", "title": "Spirited Away", "releaseDate": "2001-07-20", "type": "MOVIE"},
            {"id": 7, "title": "The Hobbit", "releaseDate": 1937, "type": "BOOKS"},
        ]);

        let results = parse_suggestions(&body);
        assert_eq!(
            results,
            vec![
                SearchResult::new("a1", "Spirited Away", "2001", "movie"),
                SearchResult::new("7", "The Hobbit", "1937", "books"),
            ]
        );
    }

    #[test]
    fn parses_page_envelope() {
        let body = json!({
            "content": [{"mediaId": "m-9", "title": "Abbey Road", "type": "MUSIC"}],
            "totalElements": 1,
        });

        let results = parse_suggestions(&body);
        assert_eq!(results, vec![SearchResult::new("m-9", "Abbey Road", "", "music")]);
    }

    #[test]
    fn oversized_responses_are_capped() {
        let items: Vec<Value> = (0..12)
            .map(|i| json!({"id": i, "title": format!("Dune {i}"), "type": "BOOKS"}))
            .collect();

        let results = parse_suggestions(&json!({"content": items}));
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0].id, "0");
        assert_eq!(results[4].id, "4");
    }

    #[test]
    fn unexpected_shapes_are_empty() {
        assert!(parse_suggestions(&json!({"items": []})).is_empty());
        assert!(parse_suggestions(&json!("nope")).is_empty());
        assert!(parse_suggestions(&json!({"content": "nope"})).is_empty());
        assert!(parse_suggestions(&Value::Null).is_empty());
    }

    #[test]
    fn missing_or_odd_fields_project_to_empty_strings() {
        let body = json!([{"id": null, "mediaId": "x", "title": "Untyped", "type": 3}, 17]);

        let results = parse_suggestions(&body);
        assert_eq!(results, vec![SearchResult::new("x", "Untyped", "", "")]);
    }
}

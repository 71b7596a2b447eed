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

//! Built-in catalog used when running offline.

use anyhow::Result;
use rusqlite::{Connection, params};
use serde_json::{Value, json};

fn catalog() -> Vec<Value> {
    vec![
        json!({
            "mediaId": "placeholder-id",
            "type": "MOVIE",
            "title": "Spirited Away",
            "director": "Hayao Miyazaki",
            "releaseDate": "2001",
            "runtime": "125 min",
            "studio": "Studio Ghibli",
            "genres": ["Animation", "Family"],
            "description": "A young girl, Chihiro, becomes trapped in a magical world of spirits and must find a way to free herself and her parents.",
            "posterUrl": "/poster.JPG",
            "backdropUrl": "/backdrop.JPG",
            "cast": ["Rumi Hiiragi (Sen)", "Miyu Irino", "Mari Natsuki (Yubaba)", "Takashi Naito (Akio)"],
        }),
        json!({
            "mediaId": "book-placeholder-id",
            "type": "BOOKS",
            "title": "The Hobbit",
            "authors": ["J. R. R. Tolkien"],
            "releaseDate": "1937",
            "publisher": "George Allen & Unwin",
            "pageCount": 310,
            "isbn": "978-0547928227",
            "genres": ["Fantasy", "Adventure"],
            "description": "Bilbo Baggins, a comfort-loving hobbit, is swept into an epic quest to reclaim a lost dwarf kingdom.",
            "posterUrl": "/book-cover.jpg",
            "backdropUrl": "/book-backdrop.jpg",
            "rating": 4.8,
        }),
        json!({
            "mediaId": "book-dune",
            "type": "BOOKS",
            "title": "Dune",
            "authors": ["Frank Herbert"],
            "releaseDate": "1965-08-01",
            "publisher": "Chilton Books",
            "genres": ["Science Fiction"],
            "description": "Paul Atreides is thrust into the politics of the desert planet Arrakis.",
        }),
        json!({
            "mediaId": "book-dune-messiah",
            "type": "BOOKS",
            "title": "Dune Messiah",
            "authors": ["Frank Herbert"],
            "releaseDate": "1969",
            "genres": ["Science Fiction"],
        }),
        json!({
            "mediaId": "music-abbey-road",
            "type": "MUSIC",
            "title": "Abbey Road",
            "artists": ["The Beatles"],
            "releaseDate": "1969-09-26",
            "genres": ["Rock"],
        }),
        json!({
            "mediaId": "tv-twin-peaks",
            "type": "TV",
            "title": "Twin Peaks",
            "director": "David Lynch",
            "releaseDate": "1990-04-08",
            "genres": ["Mystery", "Drama"],
            "description": "An FBI agent investigates the murder of a homecoming queen in a small Washington town.",
        }),
    ]
}

/// Inserts the built-in catalog if the `media` table is empty.
pub(super) fn seed_catalog(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM media", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let mut stmt = conn.prepare(
        "INSERT INTO media (id, type, title, release_date, detail) VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    for record in catalog() {
        let field = |name: &str| record.get(name).and_then(Value::as_str).map(str::to_string);
        stmt.execute(params![
            field("mediaId"),
            field("type"),
            field("title"),
            field("releaseDate"),
            record.to_string(),
        ])?;
    }

    tracing::info!("seeded offline catalog");

    Ok(())
}

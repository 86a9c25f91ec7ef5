use tabled::Table;

use crate::{
    error,
    types::{TimeRange, TopArtistTableRow, TopItemType, TopTrackTableRow},
    utils, warning,
};

use super::{open_session, spinner};

pub fn top(item_type: TopItemType, term: TimeRange, limit: Option<u32>) {
    let session = open_session();
    let pb = spinner("Fetching top items...");

    let table = match item_type {
        TopItemType::Artists => {
            let result = session.get_top_artists(term, limit);
            pb.finish_and_clear();
            let page = match result {
                Ok(page) => page,
                Err(e) => error!("{}", e),
            };

            let rows: Vec<TopArtistTableRow> = page
                .items
                .into_iter()
                .enumerate()
                .map(|(i, a)| TopArtistTableRow {
                    rank: i + 1,
                    name: a.name,
                    genres: utils::short_genres(&a.genres, 3),
                })
                .collect();
            (!rows.is_empty()).then(|| Table::new(rows))
        }
        TopItemType::Tracks => {
            let result = session.get_top_songs(term, limit);
            pb.finish_and_clear();
            let page = match result {
                Ok(page) => page,
                Err(e) => error!("{}", e),
            };

            let rows: Vec<TopTrackTableRow> = page
                .items
                .into_iter()
                .enumerate()
                .map(|(i, t)| TopTrackTableRow {
                    rank: i + 1,
                    name: t.name,
                    artists: t
                        .artists
                        .iter()
                        .map(|a| a.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
                .collect();
            (!rows.is_empty()).then(|| Table::new(rows))
        }
    };

    match table {
        Some(table) => println!("{}", table),
        None => warning!("No top {} for {} yet", item_type, term),
    }
}

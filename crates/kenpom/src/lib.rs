// ABOUTME: Library entry point for KenPom page normalization.
// ABOUTME: Re-exports the public API: Scraper, ScraperBuilder, Options, Endpoint, records and parsers.

//! Hoops KenPom - typed records from KenPom statistics pages.
//!
//! Pages are read with ordinal column schemas chosen by season, and compound
//! cells (seeded team names, arena capacities, FanMatch game strings and
//! predictions) are split into separate fields. Fetching pages is left to the
//! caller; everything here works on HTML text.
//!
//! # Example
//!
//! ```
//! use hoops_kenpom::{Endpoint, Records, Scraper};
//!
//! let html = r#"<table id="ratings-table">
//!     <thead><tr><th>Rk</th><th>Team</th><th>Conf</th></tr></thead>
//!     <tbody><tr><td>1</td><td>Houston 1</td><td>B12</td></tr></tbody>
//! </table>"#;
//!
//! let scraper = Scraper::builder().season(2024).build();
//! let Records::Teams(teams) = scraper.parse(&Endpoint::Ratings, html).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(teams[0].team, "Houston");
//! assert_eq!(teams[0].seed, "1");
//! ```

pub mod client;
pub mod endpoint;
pub mod fields;
pub mod game;
pub mod normalize;
pub mod options;
pub mod prediction;
pub mod records;
pub mod schema;

pub use crate::client::Scraper;
pub use crate::endpoint::{season_for_date, Endpoint, GameMetric};
pub use crate::fields::{extract_seed, split_capacity, split_seed, strip_seed};
pub use crate::game::{parse_game, parse_game_result, GameResult, ParsedGame};
pub use crate::options::{Options, ScraperBuilder, DEFAULT_BASE_URL};
pub use crate::prediction::{parse_prediction, Prediction};
pub use crate::records::{
    Arena, FanMatchGame, FanMatchSummary, GameAttribute, PlayerStat, Records, Referee,
    ScheduleGame, ScoutingReport, ScoutingStat, TeamStats,
};
pub use crate::schema::{schema, Era};
pub use hoops_tables::{ErrorCode, Row, TableError, TableSpec};

/// Result type of every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, TableError>;

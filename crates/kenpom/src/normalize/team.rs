// ABOUTME: Team page normalizers: the game-by-game schedule table and the scouting report.
// ABOUTME: The scouting report is read from the inline script that fills the page's stat cells.

//! Team page (`team.php`).
//!
//! The schedule is an ordinary table whose postseason games sit under
//! single-cell label rows ("NCAA Tournament"). The scouting report has no
//! table data at all: the page ships empty cells and fills them from script,
//! one `$("td#ID").html("...")` call per stat, in a `tableStart` function for
//! all games and `tableConfOnly` for conference games.

use hoops_tables::{Html, TableSpec};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Node, Selector};

use crate::endpoint::Endpoint;
use crate::normalize::{data_rows, schema_rows, take};
use crate::records::{ScheduleGame, ScoutingReport, ScoutingStat};
use crate::Result;

static RESULT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([WL]),\s*(\d+-\d+)").unwrap());
static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"function\s+(\w+)\s*\(").unwrap());
static STAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\$\(\s*"td#(\w+)"\s*\)\.html\(\s*"((?:[^"\\]|\\.)*)"\s*\)"#).unwrap()
});
static SCRIPT: Lazy<Selector> = Lazy::new(|| Selector::parse("script").unwrap());

const ALL_GAMES: &str = "tableStart";
const CONFERENCE_GAMES: &str = "tableConfOnly";

/// A team's games in page order. Spacer columns are dropped and each
/// postseason game carries the label of the section it is listed under.
pub fn schedule(doc: &Html, table: &TableSpec, season: Option<u16>) -> Result<Vec<ScheduleGame>> {
    let rows = data_rows(schema_rows(doc, table, &Endpoint::Schedule, season)?, "Date");

    let mut games = Vec::with_capacity(rows.len());
    let mut postseason: Option<String> = None;

    for mut row in rows {
        // A lone cell spanning the row is a section label.
        if row.len() == 1 {
            postseason = row.remove("Date");
            continue;
        }

        let result = take(&mut row, "Result");
        let (outcome, score) = match RESULT_RE.captures(&result) {
            Some(caps) => (Some(caps[1].to_string()), Some(caps[2].to_string())),
            None => (None, None),
        };

        games.push(ScheduleGame {
            date: take(&mut row, "Date"),
            team_rank: row.remove("Team Rank"),
            opponent_rank: take(&mut row, "Opponent Rank"),
            opponent_name: take(&mut row, "Opponent Name"),
            result,
            outcome,
            score,
            possessions: take(&mut row, "Possession Number"),
            location: take(&mut row, "Location"),
            record: take(&mut row, "Record"),
            conference: take(&mut row, "Conference"),
            postseason: postseason.clone(),
        });
    }

    tracing::debug!(games = games.len(), "normalized schedule");
    Ok(games)
}

/// Numeric scouting report values with national ranks.
///
/// `conference_only` reads the conference-games block. A page without the
/// script gives an empty report rather than an error.
pub fn scouting_report(doc: &Html, conference_only: bool) -> ScoutingReport {
    let wanted = if conference_only {
        CONFERENCE_GAMES
    } else {
        ALL_GAMES
    };

    let mut report = ScoutingReport::default();
    for script in doc.select(&SCRIPT) {
        let source: String = script.text().collect();
        if let Some(body) = function_body(&source, wanted) {
            report.stats.extend(STAT_RE.captures_iter(body).filter_map(|caps| {
                let markup = caps[2].replace("\\\"", "\"").replace("\\/", "/");
                parse_stat(&caps[1], &markup)
            }));
        }
    }

    tracing::debug!(block = wanted, stats = report.len(), "read scouting report");
    report
}

/// Text from the `function name(` declaration to the next function or the
/// end of the script.
fn function_body<'a>(source: &'a str, name: &str) -> Option<&'a str> {
    let mut starts = FUNCTION_RE.captures_iter(source).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some((caps[1].to_string(), whole.start(), whole.end()))
    });

    let (_, _, body_start) = starts.find(|(found, _, _)| found == name)?;
    let body_end = starts.next().map_or(source.len(), |(_, start, _)| start);
    Some(&source[body_start..body_end])
}

/// Reads `"112.5 <span class="seed">12</span>"` style markup. The value is
/// the text outside the seed span; non-numeric values are skipped.
fn parse_stat(name: &str, markup: &str) -> Option<ScoutingStat> {
    let fragment = Html::parse_fragment(markup);
    let mut value = String::new();
    let mut rank = String::new();

    for node in fragment.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let in_seed = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|el| el.name() == "span" && el.classes().any(|c| c == "seed"))
        });
        if in_seed {
            rank.push_str(text);
        } else {
            value.push_str(text);
        }
    }

    let value = match value.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            tracing::trace!(name, markup, "non-numeric scouting value");
            return None;
        }
    };
    Some(ScoutingStat {
        name: name.to_string(),
        value,
        rank: rank.trim().parse().ok(),
    })
}

// ABOUTME: Game-string disambiguator turning a FanMatch game cell into a structured GameResult.
// ABOUTME: Dispatches over an ordered list of delimiter formats: completed, away, neutral site.

//! Game-string parsing.
//!
//! A game cell holds one of three shapes, told apart only by the delimiter
//! between the two teams:
//!
//! | shape      | example                         | delimiter |
//! |------------|---------------------------------|-----------|
//! | completed  | `233 Rice 77, 273 FIU 70`       | `", "`    |
//! | away       | `10 Duke at 15 UNC`             | `" at "`  |
//! | neutral    | `10 Duke vs. 15 UNC`            | `" vs. "` |
//!
//! Formats are tried in that order and the first that splits the text into
//! exactly two well-formed sides wins. Anything else yields an all-null
//! [`GameResult`]; parsing never fails.
//!
//! Team names are recovered by slicing tokens: everything between the leading
//! rank and the trailing score (completed) or after the rank (scheduled). A
//! name with a standalone numeric token at its edge would be mis-sliced.
//!
//! FanMatch cells add decorations that may appear zero or more times in any
//! order after the teams: an overtime marker `(OT)`/`(2OT)`, a possession
//! count `[68]`, a conference tournament tag such as `ACC-T`, and a trailing
//! `MVP: <name>`. [`parse_game`] strips those before dispatching.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static OT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\((\d*OT)\)$").unwrap());
static POSSESSIONS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\[(\d+)\]$").unwrap());
static TOURNAMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+(\S+-T)$").unwrap());
static MVP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*MVP:\s*(.*)$").unwrap());

/// Structured form of one game string. Every field is optional; an
/// unrecognized string gives the default (all-null) value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameResult {
    #[serde(rename = "Winner")]
    pub winner: Option<String>,
    #[serde(rename = "WinnerRank")]
    pub winner_rank: Option<String>,
    #[serde(rename = "WinnerScore")]
    pub winner_score: Option<String>,
    #[serde(rename = "Loser")]
    pub loser: Option<String>,
    #[serde(rename = "LoserRank")]
    pub loser_rank: Option<String>,
    #[serde(rename = "LoserScore")]
    pub loser_score: Option<String>,
    #[serde(rename = "OT")]
    pub ot: Option<String>,
    #[serde(rename = "ActualMOV")]
    pub actual_mov: Option<i32>,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
    #[serde(rename = "isNeutral")]
    pub is_neutral: bool,
    #[serde(rename = "isAway")]
    pub is_away: bool,
}

impl GameResult {
    /// True when no format matched.
    pub fn is_unparsed(&self) -> bool {
        *self == GameResult::default()
    }
}

/// A game string with its FanMatch decorations separated out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGame {
    pub result: GameResult,
    pub tournament: Option<String>,
    pub possessions: Option<u32>,
    pub mvp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameFormat {
    Completed,
    Away,
    Neutral,
}

/// Delimiter formats in priority order. New shapes are appended here.
const FORMATS: &[(&str, GameFormat)] = &[
    (", ", GameFormat::Completed),
    (" at ", GameFormat::Away),
    (" vs. ", GameFormat::Neutral),
];

impl GameFormat {
    fn parse(self, first: &str, second: &str) -> Option<GameResult> {
        match self {
            GameFormat::Completed => parse_completed(first, second),
            GameFormat::Away => parse_scheduled(first, second).map(|mut r| {
                r.is_away = true;
                r
            }),
            GameFormat::Neutral => parse_scheduled(first, second).map(|mut r| {
                r.is_neutral = true;
                r
            }),
        }
    }
}

struct Side {
    rank: String,
    name: String,
    score: Option<String>,
}

/// `[rank, name.., score]`, at least three tokens.
fn completed_side(text: &str) -> Option<Side> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }
    let last = tokens.len() - 1;
    Some(Side {
        rank: tokens[0].to_string(),
        name: tokens[1..last].join(" "),
        score: Some(tokens[last].to_string()),
    })
}

/// `[rank, name..]`, at least two tokens.
fn scheduled_side(text: &str) -> Option<Side> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    Some(Side {
        rank: tokens[0].to_string(),
        name: tokens[1..].join(" "),
        score: None,
    })
}

fn parse_completed(first: &str, second: &str) -> Option<GameResult> {
    let winner = completed_side(first)?;
    let loser = completed_side(second)?;
    let actual_mov = margin(winner.score.as_deref(), loser.score.as_deref());
    Some(GameResult {
        actual_mov,
        is_completed: true,
        ..from_sides(winner, loser)
    })
}

fn parse_scheduled(first: &str, second: &str) -> Option<GameResult> {
    let first = scheduled_side(first)?;
    let second = scheduled_side(second)?;
    Some(from_sides(first, second))
}

fn from_sides(winner: Side, loser: Side) -> GameResult {
    GameResult {
        winner: Some(winner.name),
        winner_rank: Some(winner.rank),
        winner_score: winner.score,
        loser: Some(loser.name),
        loser_rank: Some(loser.rank),
        loser_score: loser.score,
        ..Default::default()
    }
}

fn margin(winner: Option<&str>, loser: Option<&str>) -> Option<i32> {
    let w: i32 = winner?.parse().ok()?;
    let l: i32 = loser?.parse().ok()?;
    w.checked_sub(l)
}

/// Removes a trailing overtime marker, returning the remaining text and the
/// marker (`"OT"`, `"2OT"`, ...).
fn strip_overtime(text: &str) -> (&str, Option<String>) {
    match OT_RE.captures(text) {
        Some(caps) => {
            let start = caps.get(0).map_or(text.len(), |m| m.start());
            (&text[..start], Some(caps[1].to_string()))
        }
        None => (text, None),
    }
}

fn dispatch(body: &str, ot: Option<String>) -> GameResult {
    for (delimiter, format) in FORMATS {
        let parts: Vec<&str> = body.split(delimiter).collect();
        if parts.len() != 2 {
            continue;
        }
        if let Some(result) = format.parse(parts[0], parts[1]) {
            return GameResult { ot, ..result };
        }
    }
    tracing::trace!(body, "unrecognized game string");
    GameResult::default()
}

/// Parses a bare game string (no FanMatch decorations other than overtime).
///
/// `None` and empty input give the all-null result.
pub fn parse_game_result(text: Option<&str>) -> GameResult {
    let text = text.map(str::trim).unwrap_or("");
    if text.is_empty() {
        return GameResult::default();
    }
    let (body, ot) = strip_overtime(text);
    dispatch(body.trim_end(), ot)
}

/// Parses a FanMatch game cell, separating MVP, tournament tag, possession
/// count and overtime marker from the teams.
pub fn parse_game(text: Option<&str>) -> ParsedGame {
    let mut body = text.map(str::trim).unwrap_or("").to_string();
    let mut parsed = ParsedGame::default();
    if body.is_empty() {
        return parsed;
    }

    if let Some(m) = MVP_RE.captures(&body) {
        let name = m[1].trim().to_string();
        let start = m.get(0).map_or(body.len(), |g| g.start());
        if !name.is_empty() {
            parsed.mvp = Some(name);
        }
        body.truncate(start);
    }

    let mut ot = None;
    loop {
        if let Some((rest, value)) = take_suffix(&OT_RE, &body) {
            ot = Some(value);
            body = rest;
        } else if let Some((rest, value)) = take_suffix(&POSSESSIONS_RE, &body) {
            parsed.possessions = value.parse().ok();
            body = rest;
        } else if let Some((rest, value)) = take_suffix(&TOURNAMENT_RE, &body) {
            parsed.tournament = Some(value);
            body = rest;
        } else {
            break;
        }
    }

    parsed.result = dispatch(body.trim_end(), ot);
    parsed
}

fn take_suffix(re: &Regex, text: &str) -> Option<(String, String)> {
    let caps = re.captures(text)?;
    let start = caps.get(0)?.start();
    Some((text[..start].to_string(), caps[1].to_string()))
}

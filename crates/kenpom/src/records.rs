// ABOUTME: Normalized record types returned by the endpoint normalizers.
// ABOUTME: Field names serialize exactly as the source tables label them.

use hoops_tables::Row;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::game::GameResult;
use crate::prediction::Prediction;

/// One team row of a wide statistics table (ratings, efficiency, four
/// factors, ...). Identity fields are split out; the remaining columns stay
/// in schema order in `stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamStats {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Seed")]
    pub seed: String,
    #[serde(rename = "Conference", skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(flatten)]
    pub stats: Row,
}

impl TeamStats {
    /// Looks up a stat column by its schema name.
    pub fn stat(&self, column: &str) -> Option<&str> {
        self.stats.get(column)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arena {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Conference")]
    pub conference: String,
    #[serde(rename = "Arena")]
    pub arena: String,
    #[serde(rename = "Arena.Capacity")]
    pub arena_capacity: String,
    #[serde(rename = "Alternate")]
    pub alternate: String,
    #[serde(rename = "Alternate.Capacity")]
    pub alternate_capacity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Referee {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Ref")]
    pub name: String,
    #[serde(rename = "Ref Rating")]
    pub rating: String,
    #[serde(rename = "Gms")]
    pub games: String,
    #[serde(rename = "Last Game")]
    pub last_game: String,
    #[serde(rename = "Game Score")]
    pub game_score: String,
}

/// One row of the game attributes page, with its game string parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameAttribute {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Game")]
    pub game: String,
    #[serde(flatten)]
    pub result: GameResult,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Conference")]
    pub conference: String,
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// One player row; columns other than rank, name and team stay keyed by
/// their header text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStat {
    #[serde(rename = "Rk")]
    pub rank: String,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(flatten)]
    pub stats: Row,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleGame {
    #[serde(rename = "Date")]
    pub date: String,
    /// Absent before 2010.
    #[serde(rename = "Team Rank")]
    pub team_rank: Option<String>,
    #[serde(rename = "Opponent Rank")]
    pub opponent_rank: String,
    #[serde(rename = "Opponent Name")]
    pub opponent_name: String,
    #[serde(rename = "Result")]
    pub result: String,
    /// `"W"` or `"L"` when the result cell reads like `"W, 77-70"`.
    #[serde(rename = "Outcome")]
    pub outcome: Option<String>,
    #[serde(rename = "Score")]
    pub score: Option<String>,
    #[serde(rename = "Possession Number")]
    pub possessions: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Record")]
    pub record: String,
    #[serde(rename = "Conference")]
    pub conference: String,
    /// Label of the postseason section the game is listed under.
    #[serde(rename = "Postseason")]
    pub postseason: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoutingStat {
    pub name: String,
    pub value: f64,
    pub rank: Option<u32>,
}

/// Numeric values of a team's scouting report, in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoutingReport {
    pub stats: Vec<ScoutingStat>,
}

impl ScoutingReport {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.find(name).map(|s| s.value)
    }

    pub fn rank(&self, name: &str) -> Option<u32> {
        self.find(name).and_then(|s| s.rank)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    fn find(&self, name: &str) -> Option<&ScoutingStat> {
        self.stats.iter().find(|s| s.name == name)
    }
}

/// Serializes as `{"OE": 112.3, "OE.Rank": 12, ...}`.
impl Serialize for ScoutingReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for stat in &self.stats {
            map.serialize_entry(&stat.name, &stat.value)?;
            if let Some(rank) = stat.rank {
                map.serialize_entry(&format!("{}.Rank", stat.name), &rank)?;
            }
        }
        map.end()
    }
}

/// One FanMatch game: the parsed game string, the parsed prediction and the
/// copied metadata columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FanMatchGame {
    #[serde(rename = "Game")]
    pub game: String,
    #[serde(flatten)]
    pub result: GameResult,
    #[serde(flatten)]
    pub prediction: Prediction,
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "MVP")]
    pub mvp: Option<String>,
    #[serde(rename = "Tournament")]
    pub tournament: Option<String>,
    /// Actual possessions, or the predicted count when the game has none.
    #[serde(rename = "Possessions")]
    pub possessions: Option<u32>,
    #[serde(rename = "ThrillScore")]
    pub thrill_score: Option<String>,
    #[serde(rename = "Comeback")]
    pub comeback: Option<String>,
    #[serde(rename = "Excitement")]
    pub excitement: Option<String>,
}

/// Aggregate view of a FanMatch day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FanMatchSummary {
    pub games: usize,
    pub completed: usize,
    pub favorite_wins: usize,
    pub favorite_losses: usize,
    /// Mean absolute difference between predicted and actual margin, over
    /// completed games with a prediction.
    pub mean_abs_mov_error: Option<f64>,
}

impl FanMatchSummary {
    pub fn from_games(games: &[FanMatchGame]) -> Self {
        let mut summary = FanMatchSummary {
            games: games.len(),
            ..Default::default()
        };
        let mut errors = Vec::new();

        for game in games {
            let result = &game.result;
            if !result.is_completed {
                continue;
            }
            summary.completed += 1;

            let (Some(favorite), Some(winner)) = (
                game.prediction.predicted_winner.as_deref(),
                result.winner.as_deref(),
            ) else {
                continue;
            };
            let favorite_won = favorite == winner;
            if favorite_won {
                summary.favorite_wins += 1;
            } else {
                summary.favorite_losses += 1;
            }

            if let (Some(actual), Some(predicted)) = (result.actual_mov, game.prediction.predicted_mov)
            {
                // Both margins from the winner's side.
                let predicted = f64::from(predicted);
                let predicted = if favorite_won { predicted } else { -predicted };
                errors.push((f64::from(actual) - predicted).abs());
            }
        }

        if !errors.is_empty() {
            summary.mean_abs_mov_error = Some(errors.iter().sum::<f64>() / errors.len() as f64);
        }
        summary
    }
}

/// The output of any endpoint, as returned by [`Scraper::parse`](crate::Scraper::parse).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    Teams(Vec<TeamStats>),
    Arenas(Vec<Arena>),
    Referees(Vec<Referee>),
    GameAttributes(Vec<GameAttribute>),
    Rows(Vec<Row>),
    Players(Vec<PlayerStat>),
    Schedule(Vec<ScheduleGame>),
    ScoutingReport(ScoutingReport),
    FanMatch(Vec<FanMatchGame>),
}

impl Records {
    /// Number of records; the number of stats for a scouting report.
    pub fn len(&self) -> usize {
        match self {
            Records::Teams(v) => v.len(),
            Records::Arenas(v) => v.len(),
            Records::Referees(v) => v.len(),
            Records::GameAttributes(v) => v.len(),
            Records::Rows(v) => v.len(),
            Records::Players(v) => v.len(),
            Records::Schedule(v) => v.len(),
            Records::ScoutingReport(r) => r.len(),
            Records::FanMatch(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

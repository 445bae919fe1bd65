// ABOUTME: Endpoint definitions: one variant per KenPom statistics page with its flags.
// ABOUTME: Provides page paths, URL building, default table locators and first published seasons.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use hoops_tables::TableSpec;
use url::Url;

/// Sort metric of the game attributes page. The metric also names the
/// table's trailing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMetric {
    #[default]
    Excitement,
    Tension,
    Dominance,
    ComeBack,
    FanMatch,
    Upsets,
    Busts,
}

impl GameMetric {
    pub const ALL: [GameMetric; 7] = [
        GameMetric::Excitement,
        GameMetric::Tension,
        GameMetric::Dominance,
        GameMetric::ComeBack,
        GameMetric::FanMatch,
        GameMetric::Upsets,
        GameMetric::Busts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMetric::Excitement => "Excitement",
            GameMetric::Tension => "Tension",
            GameMetric::Dominance => "Dominance",
            GameMetric::ComeBack => "ComeBack",
            GameMetric::FanMatch => "FanMatch",
            GameMetric::Upsets => "Upsets",
            GameMetric::Busts => "Busts",
        }
    }
}

impl fmt::Display for GameMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMetric::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown game metric: {}", s))
    }
}

/// One logical statistics category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ratings,
    Efficiency,
    FourFactors,
    TeamStats { defense: bool },
    PointDistribution,
    Height,
    HomeCourt,
    ProgramRatings,
    Arenas,
    Referees,
    GameAttributes { metric: GameMetric },
    Trends,
    PlayerStats,
    Schedule,
    ScoutingReport { conference_only: bool },
    FanMatch,
}

impl Endpoint {
    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Ratings => "ratings",
            Endpoint::Efficiency => "efficiency",
            Endpoint::FourFactors => "four-factors",
            Endpoint::TeamStats { .. } => "team-stats",
            Endpoint::PointDistribution => "point-distribution",
            Endpoint::Height => "height",
            Endpoint::HomeCourt => "home-court",
            Endpoint::ProgramRatings => "program-ratings",
            Endpoint::Arenas => "arenas",
            Endpoint::Referees => "referees",
            Endpoint::GameAttributes { .. } => "game-attributes",
            Endpoint::Trends => "trends",
            Endpoint::PlayerStats => "player-stats",
            Endpoint::Schedule => "schedule",
            Endpoint::ScoutingReport { .. } => "scouting-report",
            Endpoint::FanMatch => "fanmatch",
        }
    }

    /// Page path relative to the site root, including fixed query flags.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Ratings => "index.php".to_string(),
            Endpoint::Efficiency => "summary.php".to_string(),
            Endpoint::FourFactors => "stats.php".to_string(),
            Endpoint::TeamStats { defense: false } => "teamstats.php".to_string(),
            Endpoint::TeamStats { defense: true } => "teamstats.php?od=d".to_string(),
            Endpoint::PointDistribution => "pointdist.php".to_string(),
            Endpoint::Height => "height.php".to_string(),
            Endpoint::HomeCourt => "hca.php".to_string(),
            Endpoint::ProgramRatings => "programs.php".to_string(),
            Endpoint::Arenas => "arenas.php".to_string(),
            Endpoint::Referees => "officials.php".to_string(),
            Endpoint::GameAttributes { metric } => format!("game_attrs.php?s={}", metric),
            Endpoint::Trends => "trends.php".to_string(),
            Endpoint::PlayerStats => "playerstats.php".to_string(),
            Endpoint::Schedule | Endpoint::ScoutingReport { .. } => "team.php".to_string(),
            Endpoint::FanMatch => "fanmatch.html".to_string(),
        }
    }

    /// Builds the page URL under `base`, adding the season as `y` when given.
    pub fn url(&self, base: &Url, season: Option<u16>) -> Result<Url, url::ParseError> {
        let mut url = base.join(&self.path())?;
        if let Some(year) = season {
            url.query_pairs_mut().append_pair("y", &year.to_string());
        }
        Ok(url)
    }

    /// Builds a team page URL (schedule and scouting report).
    pub fn team_url(
        &self,
        base: &Url,
        team: &str,
        season: Option<u16>,
    ) -> Result<Url, url::ParseError> {
        let mut url = base.join(&self.path())?;
        url.query_pairs_mut().append_pair("team", team);
        if let Some(year) = season {
            url.query_pairs_mut().append_pair("y", &year.to_string());
        }
        Ok(url)
    }

    /// Default locator for the endpoint's data table.
    pub fn table_spec(&self) -> TableSpec {
        match self {
            Endpoint::Ratings => TableSpec::new("#ratings-table"),
            Endpoint::Schedule => TableSpec::new("#schedule-table"),
            Endpoint::FanMatch => TableSpec::new("#fanmatch-table"),
            _ => TableSpec::default(),
        }
    }

    /// True when column names come from the table's header row instead of a
    /// fixed schema.
    pub fn is_header_derived(&self) -> bool {
        matches!(self, Endpoint::Trends | Endpoint::PlayerStats)
    }

    /// First season the page exists for. `None` for all-time pages.
    ///
    /// The schema selector never validates seasons; callers gate on this.
    pub fn first_season(&self) -> Option<u16> {
        match self {
            Endpoint::Ratings
            | Endpoint::Efficiency
            | Endpoint::FourFactors
            | Endpoint::TeamStats { .. }
            | Endpoint::PointDistribution
            | Endpoint::Schedule
            | Endpoint::ScoutingReport { .. } => Some(2002),
            Endpoint::PlayerStats => Some(2004),
            Endpoint::Height => Some(2007),
            Endpoint::HomeCourt | Endpoint::Arenas | Endpoint::GameAttributes { .. } => {
                Some(2010)
            }
            Endpoint::FanMatch => Some(2014),
            Endpoint::Referees => Some(2016),
            Endpoint::ProgramRatings | Endpoint::Trends => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Season label for a calendar date. Seasons are named by the year they end
/// in and tip off in November.
///
/// Years outside `0..=65535` saturate at the nearer bound.
pub fn season_for_date(date: NaiveDate) -> u16 {
    let year = match u16::try_from(date.year()) {
        Ok(year) => year,
        Err(_) if date.year() < 0 => 0,
        Err(_) => u16::MAX,
    };
    if date.month() >= 11 {
        year.saturating_add(1)
    } else {
        year
    }
}

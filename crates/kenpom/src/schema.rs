// ABOUTME: Schema selector returning the ordinal column names of an endpoint for a season.
// ABOUTME: Every era boundary is one entry of a static table; unknown seasons get the latest era.

//! Ordinal column schemas.
//!
//! KenPom headers carry no stable identifiers and several pages gained columns
//! over the years, so column meaning is encoded as data: each endpoint owns an
//! ascending list of [`Era`]s and a season reads with the last era that began
//! on or before it.
//!
//! Key behaviors:
//! - `None` season selects the most recent era.
//! - A season older than the first era selects the first era.
//! - Eras only ever add columns, so schema length never shrinks as seasons
//!   increase.

use crate::endpoint::Endpoint;

/// A season range sharing one column layout, starting at `since`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Era {
    pub since: u16,
    pub columns: &'static [&'static str],
}

const RATINGS: &[Era] = &[Era {
    since: 2002,
    columns: &[
        "Rk", "Team", "Conf", "W-L", "AdjEM", "AdjO", "AdjO.Rank", "AdjD", "AdjD.Rank", "AdjT",
        "AdjT.Rank", "Luck", "Luck.Rank", "SOS-AdjEM", "SOS-AdjEM.Rank", "SOS-OppO",
        "SOS-OppO.Rank", "SOS-OppD", "SOS-OppD.Rank", "NCSOS-AdjEM", "NCSOS-AdjEM.Rank",
    ],
}];

const EFFICIENCY: &[Era] = &[
    Era {
        since: 2002,
        columns: &[
            "Team", "Conference", "Tempo-Adj", "Tempo-Adj.Rank", "Tempo-Raw", "Tempo-Raw.Rank",
            "Off. Efficiency-Adj", "Off. Efficiency-Adj.Rank", "Off. Efficiency-Raw",
            "Off. Efficiency-Raw.Rank", "Def. Efficiency-Adj", "Def. Efficiency-Adj.Rank",
            "Def. Efficiency-Raw", "Def. Efficiency-Raw.Rank",
        ],
    },
    Era {
        since: 2010,
        columns: &[
            "Team", "Conference", "Tempo-Adj", "Tempo-Adj.Rank", "Tempo-Raw", "Tempo-Raw.Rank",
            "Avg. Poss Length-Offense", "Avg. Poss Length-Offense.Rank",
            "Avg. Poss Length-Defense", "Avg. Poss Length-Defense.Rank", "Off. Efficiency-Adj",
            "Off. Efficiency-Adj.Rank", "Off. Efficiency-Raw", "Off. Efficiency-Raw.Rank",
            "Def. Efficiency-Adj", "Def. Efficiency-Adj.Rank", "Def. Efficiency-Raw",
            "Def. Efficiency-Raw.Rank",
        ],
    },
];

const FOUR_FACTORS: &[Era] = &[Era {
    since: 2002,
    columns: &[
        "Team", "Conference", "AdjTempo", "AdjTempo.Rank", "AdjOE", "AdjOE.Rank", "Off-eFG%",
        "Off-eFG%.Rank", "Off-TO%", "Off-TO%.Rank", "Off-OR%", "Off-OR%.Rank", "Off-FTRate",
        "Off-FTRate.Rank", "AdjDE", "AdjDE.Rank", "Def-eFG%", "Def-eFG%.Rank", "Def-TO%",
        "Def-TO%.Rank", "Def-OR%", "Def-OR%.Rank", "Def-FTRate", "Def-FTRate.Rank",
    ],
}];

const TEAM_STATS_OFFENSE: &[Era] = &[Era {
    since: 2002,
    columns: &[
        "Team", "Conference", "3P%", "3P%.Rank", "2P%", "2P%.Rank", "FT%", "FT%.Rank", "Blk%",
        "Blk%.Rank", "Stl%", "Stl%.Rank", "NST%", "NST%.Rank", "A%", "A%.Rank", "3PA%",
        "3PA%.Rank", "AdjOE", "AdjOE.Rank",
    ],
}];

const TEAM_STATS_DEFENSE: &[Era] = &[Era {
    since: 2002,
    columns: &[
        "Team", "Conference", "3P%", "3P%.Rank", "2P%", "2P%.Rank", "FT%", "FT%.Rank", "Blk%",
        "Blk%.Rank", "Stl%", "Stl%.Rank", "NST%", "NST%.Rank", "A%", "A%.Rank", "3PA%",
        "3PA%.Rank", "AdjDE", "AdjDE.Rank",
    ],
}];

const POINT_DISTRIBUTION: &[Era] = &[Era {
    since: 2002,
    columns: &[
        "Team", "Conference", "Off-FT", "Off-FT.Rank", "Off-2P", "Off-2P.Rank", "Off-3P",
        "Off-3P.Rank", "Def-FT", "Def-FT.Rank", "Def-2P", "Def-2P.Rank", "Def-3P", "Def-3P.Rank",
    ],
}];

const HEIGHT: &[Era] = &[
    Era {
        since: 2007,
        columns: &[
            "Team", "Conference", "AvgHgt", "AvgHgt.Rank", "EffHgt", "EffHgt.Rank", "C-Hgt",
            "C-Hgt.Rank", "PF-Hgt", "PF-Hgt.Rank", "SF-Hgt", "SF-Hgt.Rank", "SG-Hgt",
            "SG-Hgt.Rank", "PG-Hgt", "PG-Hgt.Rank", "Experience", "Experience.Rank", "Bench",
            "Bench.Rank",
        ],
    },
    Era {
        since: 2008,
        columns: &[
            "Team", "Conference", "AvgHgt", "AvgHgt.Rank", "EffHgt", "EffHgt.Rank", "C-Hgt",
            "C-Hgt.Rank", "PF-Hgt", "PF-Hgt.Rank", "SF-Hgt", "SF-Hgt.Rank", "SG-Hgt",
            "SG-Hgt.Rank", "PG-Hgt", "PG-Hgt.Rank", "Experience", "Experience.Rank", "Bench",
            "Bench.Rank", "Continuity", "Continuity.Rank",
        ],
    },
];

const HOME_COURT: &[Era] = &[Era {
    since: 2010,
    columns: &[
        "Team", "Conference", "HCA", "HCA.Rank", "PF", "PF.Rank", "Pts", "Pts.Rank", "NST",
        "NST.Rank", "Blk", "Blk.Rank", "Elev", "Elev.Rank",
    ],
}];

const PROGRAM_RATINGS: &[Era] = &[Era {
    since: 2002,
    columns: &[
        "Rank", "Team", "Rating", "kenpom.Best.Rank", "kenpom.Best.Season", "kenpom.Worst.Rank",
        "kenpom.Worst.Season", "kenpom.Median.Rank", "kenpom.Top10.Finishes",
        "kenpom.Top25.Finishes", "kenpom.Top50.Finishes", "NCAA.Champs", "NCAA.F4", "NCAA.S16",
        "NCAA.R1", "Change",
    ],
}];

const ARENAS: &[Era] = &[Era {
    since: 2010,
    columns: &["Rank", "Team", "Conference", "Arena", "Alternate"],
}];

const REFEREES: &[Era] = &[Era {
    since: 2016,
    columns: &["Rank", "Ref", "Ref Rating", "Gms", "Last Game", "Game Score", "Box"],
}];

/// Game attribute tables end with a column named after the metric.
const GAME_ATTRIBUTES: &[Era] = &[Era {
    since: 2010,
    columns: &["Rank", "Date", "Game", "Box", "Location", "Conference"],
}];

const SCHEDULE: &[Era] = &[
    Era {
        since: 2002,
        columns: &[
            "Date", "Opponent Rank", "Opponent Name", "Result", "Possession Number", "A",
            "Location", "Record", "Conference", "B",
        ],
    },
    Era {
        since: 2010,
        columns: &[
            "Date", "Team Rank", "Opponent Rank", "Opponent Name", "Result", "Possession Number",
            "A", "Location", "Record", "Conference", "B",
        ],
    },
];

const FANMATCH: &[Era] = &[Era {
    since: 2014,
    columns: &[
        "Game", "Prediction", "Time", "Location", "ThrillScore", "Comeback", "Excitement",
    ],
}];

/// The era table of an endpoint. Header-derived endpoints and the scouting
/// report (read from inline script) have none.
pub fn eras(endpoint: &Endpoint) -> &'static [Era] {
    match endpoint {
        Endpoint::Ratings => RATINGS,
        Endpoint::Efficiency => EFFICIENCY,
        Endpoint::FourFactors => FOUR_FACTORS,
        Endpoint::TeamStats { defense: false } => TEAM_STATS_OFFENSE,
        Endpoint::TeamStats { defense: true } => TEAM_STATS_DEFENSE,
        Endpoint::PointDistribution => POINT_DISTRIBUTION,
        Endpoint::Height => HEIGHT,
        Endpoint::HomeCourt => HOME_COURT,
        Endpoint::ProgramRatings => PROGRAM_RATINGS,
        Endpoint::Arenas => ARENAS,
        Endpoint::Referees => REFEREES,
        Endpoint::GameAttributes { .. } => GAME_ATTRIBUTES,
        Endpoint::Schedule => SCHEDULE,
        Endpoint::FanMatch => FANMATCH,
        Endpoint::Trends | Endpoint::PlayerStats | Endpoint::ScoutingReport { .. } => &[],
    }
}

/// Picks the era for `season` from an ascending era list.
pub fn select_era(eras: &'static [Era], season: Option<u16>) -> Option<&'static Era> {
    match season {
        None => eras.last(),
        Some(year) => eras
            .iter()
            .rev()
            .find(|era| era.since <= year)
            .or_else(|| eras.first()),
    }
}

/// Returns the ordinal column names for `endpoint` in `season`.
///
/// Empty for endpoints without a fixed schema.
pub fn schema(endpoint: &Endpoint, season: Option<u16>) -> Vec<&'static str> {
    if endpoint.is_header_derived() {
        tracing::debug!(%endpoint, "columns come from the header row");
        return vec![];
    }
    let Some(era) = select_era(eras(endpoint), season) else {
        return vec![];
    };
    tracing::debug!(%endpoint, ?season, era = era.since, "selected schema");

    let mut columns = era.columns.to_vec();
    if let Endpoint::GameAttributes { metric } = endpoint {
        columns.push(metric.as_str());
    }
    columns
}

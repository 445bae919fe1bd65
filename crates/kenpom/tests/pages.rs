// ABOUTME: Integration tests normalizing whole KenPom-shaped pages through the Scraper API.
// ABOUTME: Covers repeated header rows, arena capacities, schedule eras and FanMatch end to end.

use hoops_kenpom::{
    parse_game_result, parse_prediction, Endpoint, FanMatchSummary, GameMetric, Records, Scraper,
};
use pretty_assertions::assert_eq;

const EFFICIENCY_2019: &str = r#"
<html><body>
<table>
    <thead>
        <tr><th></th><th></th><th colspan="4">Tempo</th><th colspan="4">Avg. Poss Length</th></tr>
        <tr><th>Team</th><th>Conf</th><th>Adj</th><th></th><th>Raw</th><th></th><th>Off</th><th></th><th>Def</th><th></th></tr>
    </thead>
    <tbody>
        <tr>
            <td>Virginia 1</td><td>ACC</td><td>59.4</td><td>353</td><td>60.0</td><td>353</td>
            <td>19.8</td><td>351</td><td>18.9</td><td>340</td>
            <td>123.4</td><td>2</td><td>119.0</td><td>5</td><td>89.2</td><td>5</td><td>91.0</td><td>4</td>
        </tr>
        <tr><td>Team</td><td>Conf</td><td>Adj</td><td></td><td>Raw</td><td></td><td>Off</td><td></td><td>Def</td><td></td></tr>
        <tr>
            <td>Duke 1</td><td>ACC</td><td>73.0</td><td>21</td><td>74.1</td><td>20</td>
            <td>15.9</td><td>18</td><td>17.0</td><td>150</td>
            <td>118.6</td><td>7</td><td>115.8</td><td>12</td><td>89.9</td><td>6</td><td>92.7</td><td>9</td>
        </tr>
    </tbody>
</table>
</body></html>
"#;

#[test]
fn repeated_header_row_is_excluded() {
    let scraper = Scraper::builder().season(2019).build();
    let teams = scraper.efficiency(EFFICIENCY_2019).unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team, "Virginia");
    assert_eq!(teams[1].team, "Duke");
    assert!(teams.iter().all(|t| t.seed == "1"));
    assert_eq!(teams[0].stat("Avg. Poss Length-Offense"), Some("19.8"));
    assert_eq!(teams[1].stat("Def. Efficiency-Raw.Rank"), Some("9"));
}

#[test]
fn pre_2010_efficiency_uses_short_schema() {
    let html = r#"<table>
        <thead><tr><th>Team</th></tr></thead>
        <tbody><tr>
            <td>Kansas 1</td><td>B12</td><td>68.1</td><td>100</td><td>69.0</td><td>90</td>
            <td>121.3</td><td>2</td><td>118.0</td><td>4</td><td>85.1</td><td>1</td><td>88.2</td><td>2</td>
        </tr></tbody>
    </table>"#;
    let teams = Scraper::builder().season(2008).build().efficiency(html).unwrap();
    assert_eq!(teams[0].stat("Off. Efficiency-Adj"), Some("121.3"));
    assert_eq!(teams[0].stat("Avg. Poss Length-Offense"), None);
    // Team and conference are lifted out; the 12 remaining columns stay.
    assert_eq!(teams[0].stats.len(), 12);
}

#[test]
fn arena_page() {
    let html = r#"<table>
        <thead><tr><th>Rank</th><th>Team</th><th>Conf</th><th>Arena</th><th>Alternate</th></tr></thead>
        <tbody>
            <tr><td>1</td><td>Duke</td><td>ACC</td><td>Cameron Indoor Stadium (9314)</td><td></td></tr>
            <tr><td>Rank</td><td>Team</td><td>Conf</td><td>Arena</td><td>Alternate</td></tr>
        </tbody>
    </table>"#;
    let arenas = Scraper::default().arenas(html).unwrap();
    assert_eq!(arenas.len(), 1);

    let json = serde_json::to_value(&arenas[0]).unwrap();
    assert_eq!(json["Arena"], "Cameron Indoor Stadium");
    assert_eq!(json["Arena.Capacity"], "9314");
    assert_eq!(json["Alternate"], "");
    assert_eq!(json["Alternate.Capacity"], "");
}

#[test]
fn game_string_scenarios() {
    let r = parse_game_result(Some("233 Rice 77, 273 FIU 70"));
    assert_eq!(r.winner.as_deref(), Some("Rice"));
    assert_eq!(r.winner_rank.as_deref(), Some("233"));
    assert_eq!(r.winner_score.as_deref(), Some("77"));
    assert_eq!(r.loser.as_deref(), Some("FIU"));
    assert_eq!(r.loser_rank.as_deref(), Some("273"));
    assert_eq!(r.loser_score.as_deref(), Some("70"));
    assert_eq!(r.actual_mov, Some(7));
    assert!(r.is_completed && !r.is_away && !r.is_neutral);

    let r = parse_game_result(Some("1 Duke 80, 5 UNC 78 (OT)"));
    assert_eq!(r.ot.as_deref(), Some("OT"));
    assert_eq!(r.actual_mov, Some(2));

    let r = parse_game_result(Some("10 Duke at 15 UNC"));
    assert!(r.is_away);
    assert_eq!(r.winner_score, None);
    assert_eq!(r.loser_score, None);
}

#[test]
fn prediction_scenario() {
    let p = parse_prediction(Some("Duke 82-75 (75%) [68]"));
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["PredictedWinner"], "Duke");
    assert_eq!(json["PredictedScore"], "82-75");
    assert_eq!(json["WinProbability"], "75%");
    assert_eq!(json["PredictedPossessions"], 68);
    assert_eq!(json["PredictedMOV"], 7);
}

const FANMATCH: &str = r#"
<html><body>
<table id="fanmatch-table">
    <thead><tr><th>Game</th><th>Prediction</th><th>Time (ET)</th><th>Location</th><th>ThrillScore</th><th>Comeback</th><th>Excitement</th></tr></thead>
    <tbody>
        <tr><td>1 Duke 80, 5 North Carolina 78 (OT) [70]</td><td>Duke 76-74 (58%) [69]</td><td>final</td><td>Chapel Hill, NC</td><td>88.1</td><td>5</td><td>8.2</td></tr>
        <tr><td>40 Miami FL 70, 12 Virginia 65</td><td>Virginia 64-60 (66%) [61]</td><td>final</td><td>Coral Gables, FL</td><td>60.0</td><td>2</td><td>4.4</td></tr>
        <tr><td>8 Kentucky at 30 Florida</td><td>Kentucky 81-79 (57%) [72]</td><td>8:00 pm</td><td>Gainesville, FL</td><td>75.3</td><td></td><td></td></tr>
        <tr><td>Postponed</td><td>TBD</td><td></td><td></td><td></td><td></td><td></td></tr>
    </tbody>
</table>
</body></html>
"#;

#[test]
fn fanmatch_day() {
    let records = Scraper::default()
        .parse(&Endpoint::FanMatch, FANMATCH)
        .unwrap();
    let Records::FanMatch(games) = records else {
        panic!("expected fanmatch records");
    };
    assert_eq!(games.len(), 4);

    let first = &games[0];
    assert_eq!(first.result.loser.as_deref(), Some("North Carolina"));
    assert_eq!(first.result.ot.as_deref(), Some("OT"));
    assert_eq!(first.possessions, Some(70));

    let away = &games[2];
    assert!(away.result.is_away);
    assert_eq!(away.possessions, Some(72));

    let unknown = &games[3];
    assert!(unknown.result.is_unparsed());
    assert_eq!(unknown.prediction.predicted_winner, None);
    assert_eq!(unknown.possessions, None);

    let summary = FanMatchSummary::from_games(&games);
    assert_eq!(summary.games, 4);
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.favorite_wins, 1);
    assert_eq!(summary.favorite_losses, 1);
    // |2 - 2| and |5 - (-4)| averaged.
    assert_eq!(summary.mean_abs_mov_error, Some(4.5));
}

#[test]
fn fanmatch_json_field_names() {
    let games = Scraper::default().fanmatch(FANMATCH).unwrap();
    let json = serde_json::to_value(&games[0]).unwrap();
    for key in [
        "Game",
        "Winner",
        "WinnerRank",
        "WinnerScore",
        "Loser",
        "LoserRank",
        "LoserScore",
        "OT",
        "ActualMOV",
        "isCompleted",
        "isNeutral",
        "isAway",
        "PredictedWinner",
        "PredictedScore",
        "WinProbability",
        "PredictedPossessions",
        "PredictedMOV",
        "MVP",
        "Tournament",
        "Possessions",
        "ThrillScore",
        "Comeback",
        "Excitement",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["isCompleted"], true);
    assert_eq!(json["ActualMOV"], 2);
}

#[test]
fn game_attributes_through_scraper() {
    let html = r#"<table>
        <thead><tr><th>Rank</th></tr></thead>
        <tbody><tr><td>1</td><td>Sat Jan 6</td><td>2 Purdue 79, 14 Illinois 77</td><td>box</td><td>West Lafayette, IN</td><td>B10</td><td>9.9</td></tr></tbody>
    </table>"#;
    let records = Scraper::default()
        .parse(
            &Endpoint::GameAttributes {
                metric: GameMetric::Excitement,
            },
            html,
        )
        .unwrap();
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["Winner"], "Purdue");
    assert_eq!(json[0]["Metric"], "Excitement");
    assert_eq!(json[0]["Value"], "9.9");
}

#[test]
fn wrong_table_index_reports_count() {
    let scraper = Scraper::builder()
        .table(hoops_kenpom::TableSpec::new("table").index(3))
        .build();
    let err = scraper.ratings(EFFICIENCY_2019).unwrap_err();
    assert!(err.is_index_out_of_range());
    assert_eq!(err.found, 1);
}

// ABOUTME: Parser for FanMatch prediction cells like "Duke 82-75 (75%) [68]".
// ABOUTME: Tries the full pattern, then the pattern without possessions, else returns all nulls.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static FULL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<team>.+?)\s+(?P<score>(?P<a>\d+)-(?P<b>\d+))\s+\((?P<prob>\d+%)\)\s+\[(?P<poss>\d+)\]$")
        .unwrap()
});
static REDUCED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<team>.+?)\s+(?P<score>(?P<a>\d+)-(?P<b>\d+))\s+\((?P<prob>\d+%)\)$").unwrap()
});

/// The predicted outcome of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Prediction {
    #[serde(rename = "PredictedWinner")]
    pub predicted_winner: Option<String>,
    #[serde(rename = "PredictedScore")]
    pub predicted_score: Option<String>,
    #[serde(rename = "WinProbability")]
    pub win_probability: Option<String>,
    #[serde(rename = "PredictedPossessions")]
    pub predicted_possessions: Option<u32>,
    #[serde(rename = "PredictedMOV")]
    pub predicted_mov: Option<i32>,
}

/// Parses a prediction cell. Unrecognized text (e.g. `"TBD"`) gives all
/// `None`. The margin is always recomputed from the predicted score.
pub fn parse_prediction(text: Option<&str>) -> Prediction {
    let text = text.map(str::trim).unwrap_or("");

    let caps = match FULL_RE.captures(text).or_else(|| REDUCED_RE.captures(text)) {
        Some(caps) => caps,
        None => {
            if !text.is_empty() {
                tracing::trace!(text, "unrecognized prediction");
            }
            return Prediction::default();
        }
    };

    let a: Option<i32> = caps["a"].parse().ok();
    let b: Option<i32> = caps["b"].parse().ok();

    Prediction {
        predicted_winner: Some(caps["team"].to_string()),
        predicted_score: Some(caps["score"].to_string()),
        win_probability: Some(caps["prob"].to_string()),
        predicted_possessions: caps.name("poss").and_then(|m| m.as_str().parse().ok()),
        predicted_mov: a.zip(b).and_then(|(a, b)| a.checked_sub(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_pattern() {
        let p = parse_prediction(Some("Duke 82-75 (75%) [68]"));
        assert_eq!(
            p,
            Prediction {
                predicted_winner: Some("Duke".into()),
                predicted_score: Some("82-75".into()),
                win_probability: Some("75%".into()),
                predicted_possessions: Some(68),
                predicted_mov: Some(7),
            }
        );
    }

    #[test]
    fn reduced_pattern_without_possessions() {
        let p = parse_prediction(Some("Duke 80-75 (65%)"));
        assert_eq!(p.predicted_winner.as_deref(), Some("Duke"));
        assert_eq!(p.predicted_possessions, None);
        assert_eq!(p.predicted_mov, Some(5));
    }

    #[test]
    fn multi_word_team() {
        let p = parse_prediction(Some("Saint Mary's 71-64 (80%) [63]"));
        assert_eq!(p.predicted_winner.as_deref(), Some("Saint Mary's"));
        assert_eq!(p.predicted_possessions, Some(63));
    }

    #[test]
    fn unrecognized_is_all_null() {
        assert_eq!(parse_prediction(Some("TBD")), Prediction::default());
        assert_eq!(parse_prediction(Some("")), Prediction::default());
        assert_eq!(parse_prediction(None), Prediction::default());
        assert_eq!(parse_prediction(Some("Duke 82-75")), Prediction::default());
    }
}

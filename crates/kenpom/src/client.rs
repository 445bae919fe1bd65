// ABOUTME: Scraper entry point applying configured options to the endpoint normalizers.
// ABOUTME: Parses raw HTML once per call and dispatches by Endpoint to the matching normalizer.

use hoops_tables::{Html, Row, TableSpec};
use url::Url;

use crate::endpoint::{Endpoint, GameMetric};
use crate::normalize;
use crate::options::{Options, ScraperBuilder};
use crate::records::{
    Arena, FanMatchGame, GameAttribute, PlayerStat, Records, Referee, ScheduleGame,
    ScoutingReport, TeamStats,
};
use crate::Result;

/// Normalizes KenPom pages that were fetched elsewhere.
///
/// A `Scraper` holds only configuration; every call parses its input from
/// scratch, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    opts: Options,
}

impl Scraper {
    /// Create a new ScraperBuilder for configuring the scraper.
    pub fn builder() -> ScraperBuilder {
        ScraperBuilder::new()
    }

    /// Create a new Scraper with the given options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn season(&self) -> Option<u16> {
        self.opts.season
    }

    /// The table override, or the endpoint's default locator.
    pub fn table_spec(&self, endpoint: &Endpoint) -> TableSpec {
        self.opts
            .table
            .clone()
            .unwrap_or_else(|| endpoint.table_spec())
    }

    /// URL of an endpoint page for the configured season.
    pub fn url(&self, endpoint: &Endpoint) -> std::result::Result<Url, url::ParseError> {
        endpoint.url(&self.opts.base_url, self.opts.season)
    }

    /// URL of a team page for the configured season.
    pub fn team_url(&self, team: &str) -> std::result::Result<Url, url::ParseError> {
        Endpoint::Schedule.team_url(&self.opts.base_url, team, self.opts.season)
    }

    /// Normalizes `html` as a page of `endpoint`.
    pub fn parse(&self, endpoint: &Endpoint, html: &str) -> Result<Records> {
        tracing::debug!(%endpoint, season = ?self.opts.season, bytes = html.len(), "parsing page");
        let records = match *endpoint {
            Endpoint::Ratings
            | Endpoint::Efficiency
            | Endpoint::FourFactors
            | Endpoint::TeamStats { .. }
            | Endpoint::PointDistribution
            | Endpoint::Height
            | Endpoint::HomeCourt
            | Endpoint::ProgramRatings => Records::Teams(self.team_table(endpoint, html)?),
            Endpoint::Arenas => Records::Arenas(self.arenas(html)?),
            Endpoint::Referees => Records::Referees(self.referees(html)?),
            Endpoint::GameAttributes { metric } => {
                Records::GameAttributes(self.game_attributes(html, metric)?)
            }
            Endpoint::Trends => Records::Rows(self.trends(html)?),
            Endpoint::PlayerStats => Records::Players(self.player_stats(html)?),
            Endpoint::Schedule => Records::Schedule(self.schedule(html)?),
            Endpoint::ScoutingReport { conference_only } => {
                Records::ScoutingReport(self.scouting_report(html, conference_only))
            }
            Endpoint::FanMatch => Records::FanMatch(self.fanmatch(html)?),
        };
        Ok(records)
    }

    fn team_table(&self, endpoint: &Endpoint, html: &str) -> Result<Vec<TeamStats>> {
        let doc = Html::parse_document(html);
        let table = self.table_spec(endpoint);
        let season = self.opts.season;
        match *endpoint {
            Endpoint::Ratings => normalize::ratings(&doc, &table, season),
            Endpoint::Efficiency => normalize::efficiency(&doc, &table, season),
            Endpoint::FourFactors => normalize::four_factors(&doc, &table, season),
            Endpoint::TeamStats { defense } => normalize::team_stats(&doc, &table, season, defense),
            Endpoint::PointDistribution => normalize::point_distribution(&doc, &table, season),
            Endpoint::Height => normalize::height(&doc, &table, season),
            Endpoint::HomeCourt => normalize::home_court(&doc, &table, season),
            _ => normalize::program_ratings(&doc, &table),
        }
    }

    pub fn ratings(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::Ratings, html)
    }

    /// Team names from the ratings page.
    pub fn teams(&self, html: &str) -> Result<Vec<String>> {
        let doc = Html::parse_document(html);
        normalize::teams(&doc, &self.table_spec(&Endpoint::Ratings), self.opts.season)
    }

    pub fn efficiency(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::Efficiency, html)
    }

    pub fn four_factors(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::FourFactors, html)
    }

    pub fn team_stats(&self, html: &str, defense: bool) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::TeamStats { defense }, html)
    }

    pub fn point_distribution(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::PointDistribution, html)
    }

    pub fn height(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::Height, html)
    }

    pub fn home_court(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::HomeCourt, html)
    }

    pub fn program_ratings(&self, html: &str) -> Result<Vec<TeamStats>> {
        self.team_table(&Endpoint::ProgramRatings, html)
    }

    pub fn arenas(&self, html: &str) -> Result<Vec<Arena>> {
        let doc = Html::parse_document(html);
        normalize::arenas(&doc, &self.table_spec(&Endpoint::Arenas), self.opts.season)
    }

    pub fn referees(&self, html: &str) -> Result<Vec<Referee>> {
        let doc = Html::parse_document(html);
        normalize::referees(&doc, &self.table_spec(&Endpoint::Referees), self.opts.season)
    }

    pub fn game_attributes(&self, html: &str, metric: GameMetric) -> Result<Vec<GameAttribute>> {
        let doc = Html::parse_document(html);
        let endpoint = Endpoint::GameAttributes { metric };
        normalize::game_attributes(&doc, &self.table_spec(&endpoint), self.opts.season, metric)
    }

    pub fn trends(&self, html: &str) -> Result<Vec<Row>> {
        let doc = Html::parse_document(html);
        normalize::trends(&doc, &self.table_spec(&Endpoint::Trends))
    }

    pub fn player_stats(&self, html: &str) -> Result<Vec<PlayerStat>> {
        let doc = Html::parse_document(html);
        normalize::player_stats(&doc, &self.table_spec(&Endpoint::PlayerStats))
    }

    pub fn schedule(&self, html: &str) -> Result<Vec<ScheduleGame>> {
        let doc = Html::parse_document(html);
        normalize::schedule(&doc, &self.table_spec(&Endpoint::Schedule), self.opts.season)
    }

    pub fn scouting_report(&self, html: &str, conference_only: bool) -> ScoutingReport {
        let doc = Html::parse_document(html);
        normalize::scouting_report(&doc, conference_only)
    }

    pub fn fanmatch(&self, html: &str) -> Result<Vec<FanMatchGame>> {
        let doc = Html::parse_document(html);
        normalize::fanmatch(&doc, &self.table_spec(&Endpoint::FanMatch))
    }
}

// ABOUTME: Configuration for the scraper: target season, table override and site base URL.
// ABOUTME: ScraperBuilder provides a fluent API for constructing Scraper instances.

use chrono::NaiveDate;
use hoops_tables::TableSpec;
use url::Url;

use crate::client::Scraper;
use crate::endpoint::season_for_date;

pub const DEFAULT_BASE_URL: &str = "https://kenpom.com/";

/// Configuration options for a [`Scraper`].
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Season label (the year the season ends). `None` reads with the most
    /// recent schemas.
    pub season: Option<u16>,
    /// Overrides the endpoint's default table locator.
    pub table: Option<TableSpec>,
    /// Site root used when building page URLs.
    pub base_url: Url,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            season: None,
            table: None,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

/// Builder for constructing Scraper instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct ScraperBuilder {
    opts: Options,
}

impl ScraperBuilder {
    /// Create a new ScraperBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the season label.
    pub fn season(mut self, season: u16) -> Self {
        self.opts.season = Some(season);
        self
    }

    /// Set the season containing `date`.
    pub fn season_of(mut self, date: NaiveDate) -> Self {
        self.opts.season = Some(season_for_date(date));
        self
    }

    /// Read a different table than the endpoint's default.
    pub fn table(mut self, table: TableSpec) -> Self {
        self.opts.table = Some(table);
        self
    }

    /// Set the site root used for page URLs.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.opts.base_url = base_url;
        self
    }

    /// Build the Scraper with the configured options.
    pub fn build(self) -> Scraper {
        Scraper::new(self.opts)
    }
}

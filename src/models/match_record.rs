use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asian handicap triple: home price, handicap line, away price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AhOdds {
    pub home_odds: Option<String>,
    pub line: Option<String>,
    pub away_odds: Option<String>,
}

/// Over/under triple: over price, total-goals line, under price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OuOdds {
    pub over_odds: Option<String>,
    pub total_line: Option<String>,
    pub under_odds: Option<String>,
}

/// Both market groups are always present on a record; any leaf may be null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsBlock {
    pub ah: AhOdds,
    pub ou: OuOdds,
}

impl OddsBlock {
    /// Fresh all-null block for rows without an odds cell. Each call returns
    /// a new value so records never alias a shared template.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One normalized match row from the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub competition: String,
    pub time_or_status: String,
    pub home_team: String,
    pub score: String,
    pub away_team: String,
    pub odds: OddsBlock,
    pub row_id: String,
    pub data_league: Option<String>,
    pub data_index: Option<String>,
}

/// One scrape pass over the listing page, stamped once at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeBatch {
    /// Human-readable label in US Central time, e.g. "CST Thu 14:07".
    pub scraped_at_cst: String,
    /// UTC instant for sorting stored batches.
    pub scraped_at_utc: DateTime<Utc>,
    pub data: Vec<MatchRecord>,
}

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub check_interval_seconds: u64,
    pub user_agent: String,
    pub database_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub url: String,
    pub name: String,
    pub base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Single listing site for now, hardcoded like the rest of the setup
        Ok(Config {
            site: SiteConfig {
                url: "https://bongdanet.co/".to_string(),
                name: "Bongdanet".to_string(),
                base_url: "https://bongdanet.co".to_string(),
            },
            check_interval_seconds: 60,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0 Safari/537.36"
                .to_string(),
            database_path: "match_monitor.db".to_string(),
        })
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::SessionError;
use crate::page::PageId;

/// Endpoints and identity for one dashboard account.
///
/// Passed explicitly into session construction; nothing here is resolved
/// from ambient process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Identifier stamped on every record of the account.
    pub customer_id: String,
    /// Landing page the browser must reach after a successful login.
    pub facility_url: String,
    pub system_info_url: String,
    pub boiler_info_url: String,
    pub heating_info_url: String,
    pub tank_info_url: String,
    pub feed_info_url: String,
    /// Where login-timeout diagnostics are written. Defaults to the working
    /// directory.
    #[serde(default = "default_diagnostics_dir")]
    pub diagnostics_dir: PathBuf,
}

fn default_diagnostics_dir() -> PathBuf {
    PathBuf::from(".")
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|e| SessionError::InvalidConfig(e.to_string()))
    }

    /// The configured URL of one information page.
    pub fn info_url(&self, page: PageId) -> &str {
        match page {
            PageId::System => &self.system_info_url,
            PageId::Boiler => &self.boiler_info_url,
            PageId::Heating => &self.heating_info_url,
            PageId::Tank => &self.tank_info_url,
            PageId::Feed => &self.feed_info_url,
        }
    }
}

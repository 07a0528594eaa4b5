//! Prospect (潜客): a potential customer surfaced for outreach. Read and
//! delete only.

use serde::{Deserialize, Serialize};

use super::common::{text, wildcard, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: i64,
    pub site_name: String,
    pub user_account: String,
    /// Whether the user holds a phone on another carrier's network.
    pub is_phone: String,
    /// The other-network phone number.
    pub phone_no: String,
    /// Marketing portrait.
    pub portrait: String,
    pub strategy: String,
    /// Whether the line has poor service quality.
    pub is_quality: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectQuery {
    pub site_name: Option<String>,
    pub grid_name: Option<String>,
    pub user_account: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectListBody {
    pub site_name: String,
    pub grid_name: String,
    pub user_account: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl ProspectQuery {
    pub fn normalize(&self) -> ProspectListBody {
        ProspectListBody {
            site_name: wildcard(&self.site_name),
            grid_name: wildcard(&self.grid_name),
            user_account: text(&self.user_account),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

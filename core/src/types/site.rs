//! Site (局点): the top-level administrative unit.

use serde::{Deserialize, Serialize};

use super::common::{wildcard, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub site_des: String,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

/// Site list filters. `carrier` and `site_name` accept the `"all"` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteQuery {
    pub carrier: Option<String>,
    pub site_name: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

/// Normalized body of `POST /api/site/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListBody {
    pub carrier: String,
    pub site_name: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl SiteQuery {
    pub fn normalize(&self) -> SiteListBody {
        SiteListBody {
            carrier: wildcard(&self.carrier),
            site_name: wildcard(&self.site_name),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCreate {
    pub carrier: String,
    pub site_name: String,
    pub site_des: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteUpdate {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub site_des: String,
}

//! Community (小区): a subdivision of one grid within one site.

use serde::{Deserialize, Serialize};

use super::common::{text, wildcard, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    pub community_name: String,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityQuery {
    pub carrier: Option<String>,
    pub site_name: Option<String>,
    pub grid_name: Option<String>,
    pub community_name: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityListBody {
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    pub community_name: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl CommunityQuery {
    pub fn normalize(&self) -> CommunityListBody {
        CommunityListBody {
            carrier: wildcard(&self.carrier),
            site_name: wildcard(&self.site_name),
            grid_name: wildcard(&self.grid_name),
            community_name: text(&self.community_name),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityCreate {
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    pub community_name: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityUpdate {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    pub community_name: String,
}

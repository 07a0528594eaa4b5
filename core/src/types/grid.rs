//! Grid (网格): a subdivision of exactly one site.

use serde::{Deserialize, Serialize};

use super::common::{wildcard, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridQuery {
    pub carrier: Option<String>,
    pub site_name: Option<String>,
    pub grid_name: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridListBody {
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl GridQuery {
    pub fn normalize(&self) -> GridListBody {
        GridListBody {
            carrier: wildcard(&self.carrier),
            site_name: wildcard(&self.site_name),
            grid_name: wildcard(&self.grid_name),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCreate {
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridUpdate {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub grid_name: String,
}

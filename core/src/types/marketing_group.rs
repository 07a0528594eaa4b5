//! Marketing group: a named group of accounts bound to one site.

use serde::{Deserialize, Serialize};

use super::common::{text, wildcard, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingGroup {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub marketing_group_name: String,
    pub marketing_group_des: String,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingGroupQuery {
    pub carrier: Option<String>,
    pub site_name: Option<String>,
    pub marketing_group_name: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingGroupListBody {
    pub carrier: String,
    pub site_name: String,
    pub marketing_group_name: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl MarketingGroupQuery {
    pub fn normalize(&self) -> MarketingGroupListBody {
        MarketingGroupListBody {
            carrier: wildcard(&self.carrier),
            site_name: wildcard(&self.site_name),
            marketing_group_name: text(&self.marketing_group_name),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingGroupCreate {
    pub carrier: String,
    pub site_name: String,
    pub marketing_group_name: String,
    pub marketing_group_des: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingGroupUpdate {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub marketing_group_name: String,
    pub marketing_group_des: String,
}

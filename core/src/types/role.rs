//! Role: a named permission bundle, independent of sites.

use serde::{Deserialize, Serialize};

use super::common::{text, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    pub role_des: String,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleQuery {
    pub role_name: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleListBody {
    pub role_name: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl RoleQuery {
    pub fn normalize(&self) -> RoleListBody {
        RoleListBody {
            role_name: text(&self.role_name),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCreate {
    pub role_name: String,
    pub role_des: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub id: i64,
    pub role_name: String,
    pub role_des: String,
}

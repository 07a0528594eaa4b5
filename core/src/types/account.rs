//! Account: an operator login bound to one role and any number of marketing
//! groups. Both relations are by name, not by id.

use serde::{Deserialize, Serialize};

use super::common::{text, wildcard, NameSet, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub user_account: String,
    pub user_name: String,
    pub role_name: String,
    pub marketing_group: NameSet,
    pub is_enabled: bool,
    pub valid_until: String,
    /// Derived by the server from `valid_until`.
    pub is_expired: bool,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountQuery {
    pub carrier: Option<String>,
    pub site_name: Option<String>,
    pub user_account: Option<String>,
    pub user_name: Option<String>,
    pub role_name: Option<String>,
    /// Matches accounts belonging to this marketing group.
    pub marketing_group: Option<String>,
    pub is_enabled: Option<bool>,
    pub is_expired: Option<bool>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

/// Normalized body of `POST /api/account/list`. Unset status filters are
/// left out rather than sent as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListBody {
    pub carrier: String,
    pub site_name: String,
    pub user_account: String,
    pub user_name: String,
    pub role_name: String,
    pub marketing_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,
    #[serde(flatten)]
    pub page: PageParams,
}

impl AccountQuery {
    pub fn normalize(&self) -> AccountListBody {
        AccountListBody {
            carrier: wildcard(&self.carrier),
            site_name: wildcard(&self.site_name),
            user_account: text(&self.user_account),
            user_name: text(&self.user_name),
            role_name: text(&self.role_name),
            marketing_group: text(&self.marketing_group),
            is_enabled: self.is_enabled,
            is_expired: self.is_expired,
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreate {
    pub carrier: String,
    pub site_name: String,
    pub user_account: String,
    pub user_name: String,
    pub role_name: String,
    pub marketing_group: NameSet,
    pub is_enabled: bool,
    pub valid_until: String,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub id: i64,
    pub carrier: String,
    pub site_name: String,
    pub user_account: String,
    pub user_name: String,
    pub role_name: String,
    pub marketing_group: NameSet,
    pub is_enabled: bool,
    pub valid_until: String,
}

/// Body of `PUT /api/account/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub id: i64,
    pub enabled: bool,
}

/// Body of `PUT /api/account/role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRole {
    pub id: i64,
    pub role_name: String,
}

/// Body of `PUT /api/account/marketing-group`. Replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMarketingGroups {
    pub id: i64,
    pub marketing_groups: NameSet,
}

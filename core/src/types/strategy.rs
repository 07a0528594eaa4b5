//! Strategy: a recommended product and sales script, attachable to several
//! sites.

use serde::{Deserialize, Serialize};

use super::common::{text, wildcard, NameSet, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: i64,
    pub strategy_name: String,
    pub carrier: String,
    /// Recommended product.
    pub product: String,
    /// Sales script (话术).
    pub technique: String,
    pub strategy_type: String,
    pub sites: NameSet,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyQuery {
    pub strategy_name: Option<String>,
    pub carrier: Option<String>,
    pub strategy_type: Option<String>,
    pub site: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyListBody {
    pub strategy_name: String,
    pub carrier: String,
    pub strategy_type: String,
    pub site: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl StrategyQuery {
    pub fn normalize(&self) -> StrategyListBody {
        StrategyListBody {
            strategy_name: text(&self.strategy_name),
            carrier: wildcard(&self.carrier),
            strategy_type: text(&self.strategy_type),
            site: wildcard(&self.site),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyCreate {
    pub strategy_name: String,
    pub carrier: String,
    pub product: String,
    pub technique: String,
    pub strategy_type: String,
    pub sites: NameSet,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyUpdate {
    pub id: i64,
    pub strategy_name: String,
    pub carrier: String,
    pub product: String,
    pub technique: String,
    pub strategy_type: String,
    pub sites: NameSet,
}

/// Site association of a strategy, sent to `PUT /api/strategy/modify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySiteConfig {
    pub id: i64,
    pub sites: NameSet,
}

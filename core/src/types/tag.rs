//! Tag: a label attachable to several sites.

use serde::{Deserialize, Serialize};

use super::common::{text, wildcard, NameSet, PageParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub tag_name: String,
    pub tag_type: String,
    pub sites: NameSet,
    pub creator: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagQuery {
    pub tag_name: Option<String>,
    pub tag_type: Option<String>,
    /// Matches tags configured for this site.
    pub site: Option<String>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagListBody {
    pub tag_name: String,
    pub tag_type: String,
    pub site: String,
    #[serde(flatten)]
    pub page: PageParams,
}

impl TagQuery {
    pub fn normalize(&self) -> TagListBody {
        TagListBody {
            tag_name: text(&self.tag_name),
            tag_type: text(&self.tag_type),
            site: wildcard(&self.site),
            page: PageParams::resolve(self.page_num, self.page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCreate {
    pub tag_name: String,
    pub tag_type: String,
    pub sites: NameSet,
    pub creator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagUpdate {
    pub id: i64,
    pub tag_name: String,
    pub tag_type: String,
    pub sites: NameSet,
}

/// Site association of a tag, sent to `PUT /api/tag/modify`. Replaces the
/// whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSiteConfig {
    pub id: i64,
    pub sites: NameSet,
}

//! Entity schemas for the marketing admin API.
//!
//! # Design
//! Every resource follows the same four shapes: the full entity, an optional
//! query (normalized into a `*ListBody` before it goes on the wire), a create
//! payload without server-assigned fields and an update payload keyed by `id`.
//! Wire names are camelCase. Comma-joined relations are held as `NameSet`.

pub mod account;
pub mod auth;
pub mod common;
pub mod community;
pub mod grid;
pub mod marketing_group;
pub mod prospect;
pub mod role;
pub mod site;
pub mod strategy;
pub mod tag;

pub use account::{
    Account, AccountCreate, AccountListBody, AccountMarketingGroups, AccountQuery, AccountRole,
    AccountStatus, AccountUpdate,
};
pub use auth::{LoginData, LoginRequest, UserInfo};
pub use common::{Empty, Envelope, NameSet, Page, PageParams, ALL};
pub use community::{Community, CommunityCreate, CommunityListBody, CommunityQuery, CommunityUpdate};
pub use grid::{Grid, GridCreate, GridListBody, GridQuery, GridUpdate};
pub use marketing_group::{
    MarketingGroup, MarketingGroupCreate, MarketingGroupListBody, MarketingGroupQuery,
    MarketingGroupUpdate,
};
pub use prospect::{Prospect, ProspectListBody, ProspectQuery};
pub use role::{Role, RoleCreate, RoleListBody, RoleQuery, RoleUpdate};
pub use site::{Site, SiteCreate, SiteListBody, SiteQuery, SiteUpdate};
pub use strategy::{
    Strategy, StrategyCreate, StrategyListBody, StrategyQuery, StrategySiteConfig, StrategyUpdate,
};
pub use tag::{Tag, TagCreate, TagListBody, TagQuery, TagSiteConfig, TagUpdate};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde::Serialize;
    use serde_json::{json, Value};

    use super::*;

    fn keys<T: Serialize>(value: &T) -> BTreeSet<String> {
        match serde_json::to_value(value).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other}"),
        }
    }

    fn without(mut all: BTreeSet<String>, drop: &[&str]) -> BTreeSet<String> {
        for key in drop {
            all.remove(*key);
        }
        all
    }

    fn sample_site() -> Site {
        Site {
            id: 1,
            carrier: "CMCC".into(),
            site_name: "Hangzhou".into(),
            site_des: "HQ".into(),
            creator: "admin".into(),
            create_time: "2024-01-01 00:00:00".into(),
            update_time: "2024-01-01 00:00:00".into(),
        }
    }

    fn sample_account() -> Account {
        Account {
            id: 9,
            carrier: "CMCC".into(),
            site_name: "Hangzhou".into(),
            user_account: "zhang.san".into(),
            user_name: "Zhang San".into(),
            role_name: "operator".into(),
            marketing_group: NameSet::parse("g1,g2"),
            is_enabled: true,
            valid_until: "2030-12-31".into(),
            is_expired: false,
            creator: "admin".into(),
            create_time: "2024-01-01 00:00:00".into(),
            update_time: "2024-01-02 00:00:00".into(),
        }
    }

    #[test]
    fn site_shapes_follow_entity_fields() {
        let entity = keys(&sample_site());
        let create = keys(&SiteCreate {
            carrier: "CMCC".into(),
            site_name: "Hangzhou".into(),
            site_des: "HQ".into(),
            creator: "admin".into(),
        });
        let update = keys(&SiteUpdate {
            id: 1,
            carrier: "CMCC".into(),
            site_name: "Hangzhou".into(),
            site_des: "HQ".into(),
        });

        assert_eq!(create, without(entity.clone(), &["id", "createTime", "updateTime"]));
        assert_eq!(update, without(entity, &["creator", "createTime", "updateTime"]));
    }

    #[test]
    fn account_shapes_follow_entity_fields() {
        let entity = keys(&sample_account());
        let create = keys(&AccountCreate {
            carrier: "CMCC".into(),
            site_name: "Hangzhou".into(),
            user_account: "zhang.san".into(),
            user_name: "Zhang San".into(),
            role_name: "operator".into(),
            marketing_group: NameSet::new(),
            is_enabled: true,
            valid_until: "2030-12-31".into(),
            creator: "admin".into(),
        });
        assert_eq!(
            create,
            without(entity, &["id", "isExpired", "createTime", "updateTime"])
        );
    }

    #[test]
    fn account_serializes_marketing_groups_as_comma_string() {
        let value = serde_json::to_value(sample_account()).unwrap();
        assert_eq!(value["marketingGroup"], "g1,g2");
        assert_eq!(value["isEnabled"], true);
        assert_eq!(value["validUntil"], "2030-12-31");
    }

    #[test]
    fn query_shapes_never_carry_id() {
        assert!(!keys(&SiteQuery::default()).contains("id"));
        assert!(!keys(&AccountQuery::default()).contains("id"));
        assert!(!keys(&ProspectQuery::default()).contains("id"));
        assert!(!keys(&SiteQuery::default().normalize()).contains("id"));
    }

    #[test]
    fn list_body_flattens_pagination() {
        let body = serde_json::to_value(GridQuery::default().normalize()).unwrap();
        assert_eq!(
            body,
            json!({"carrier": "", "siteName": "", "gridName": "", "pageNum": 1, "pageSize": 10})
        );
    }

    #[test]
    fn account_list_omits_unset_status_filters() {
        let body = serde_json::to_value(AccountQuery::default().normalize()).unwrap();
        assert!(body.get("isEnabled").is_none());
        assert!(body.get("isExpired").is_none());

        let body = serde_json::to_value(
            AccountQuery {
                is_enabled: Some(false),
                ..Default::default()
            }
            .normalize(),
        )
        .unwrap();
        assert_eq!(body["isEnabled"], false);
    }

    #[test]
    fn strategy_tolerates_missing_audit_fields() {
        let raw = json!({
            "id": 3,
            "strategyName": "broadband upsell",
            "carrier": "CMCC",
            "product": "1000M fibre",
            "technique": "offer a free month",
            "strategyType": "retention",
            "sites": "Hangzhou,Ningbo"
        });
        let strategy: Strategy = serde_json::from_value(raw).unwrap();
        assert!(strategy.creator.is_none());
        assert!(strategy.sites.contains("Ningbo"));
    }

    #[test]
    fn login_request_debug_hides_password() {
        let req = LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
        };
        let printed = format!("{req:?}");
        assert!(printed.contains("admin"));
        assert!(!printed.contains("secret"));
    }

    #[test]
    fn login_data_reads_user_info() {
        let data: LoginData = serde_json::from_value(json!({
            "token": "t-1",
            "permissions": ["site:view", "site:edit"],
            "userInfo": {"username": "admin", "avatar": "", "role": "admin"}
        }))
        .unwrap();
        assert_eq!(data.permissions, vec!["site:view", "site:edit"]);
        assert_eq!(data.user_info.role, "admin");
    }
}

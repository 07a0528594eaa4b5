//! Stateless HTTP request builder and envelope parser for the marketing API.
//!
//! # Design
//! `MarketingClient` holds only the base URL and an optional bearer token.
//! Each operation has a `build_*` method that normalizes its input and
//! produces an `HttpRequest`; `parse` turns any `HttpResponse` into a typed
//! `Envelope`. Executing the request is left to the caller (see `Gateway`).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    AccountCreate, AccountMarketingGroups, AccountQuery, AccountRole, AccountStatus, AccountUpdate,
    CommunityCreate, CommunityQuery, CommunityUpdate, Envelope, GridCreate, GridQuery, GridUpdate,
    LoginRequest, MarketingGroupCreate, MarketingGroupQuery, MarketingGroupUpdate, NameSet,
    ProspectQuery, RoleCreate, RoleQuery, RoleUpdate, SiteCreate, SiteQuery, SiteUpdate,
    StrategyCreate, StrategyQuery, StrategySiteConfig, StrategyUpdate, TagCreate, TagQuery,
    TagSiteConfig, TagUpdate,
};

/// Synchronous, stateless request builder for the marketing admin API.
#[derive(Debug, Clone)]
pub struct MarketingClient {
    base_url: String,
    token: Option<String>,
}

impl MarketingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let client = Self::new(&config.base_url);
        match &config.token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        }
    }

    /// Attach the session token returned by `/api/login`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    pub fn build_login(&self, input: &LoginRequest) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/login", input)
    }

    // -----------------------------------------------------------------------
    // Site
    // -----------------------------------------------------------------------

    pub fn build_list_sites(&self, query: &SiteQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/site/list", &query.normalize())
    }

    pub fn build_add_site(&self, input: &SiteCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/site/add", input)
    }

    pub fn build_update_site(&self, input: &SiteUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/site/modify", input)
    }

    pub fn build_delete_site(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/site/delete", id)
    }

    // -----------------------------------------------------------------------
    // Grid
    // -----------------------------------------------------------------------

    pub fn build_list_grids(&self, query: &GridQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/grid/list", &query.normalize())
    }

    pub fn build_add_grid(&self, input: &GridCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/grid/add", input)
    }

    pub fn build_update_grid(&self, input: &GridUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/grid/modify", input)
    }

    pub fn build_delete_grid(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/grid/delete", id)
    }

    // -----------------------------------------------------------------------
    // Community
    // -----------------------------------------------------------------------

    pub fn build_list_communities(&self, query: &CommunityQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/community/list", &query.normalize())
    }

    pub fn build_add_community(&self, input: &CommunityCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/community/add", input)
    }

    pub fn build_update_community(&self, input: &CommunityUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/community/modify", input)
    }

    pub fn build_delete_community(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/community/delete", id)
    }

    // -----------------------------------------------------------------------
    // Marketing group
    // -----------------------------------------------------------------------

    pub fn build_list_marketing_groups(
        &self,
        query: &MarketingGroupQuery,
    ) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/marketing-group/list", &query.normalize())
    }

    pub fn build_add_marketing_group(
        &self,
        input: &MarketingGroupCreate,
    ) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/marketing-group/add", input)
    }

    pub fn build_update_marketing_group(
        &self,
        input: &MarketingGroupUpdate,
    ) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/marketing-group/modify", input)
    }

    pub fn build_delete_marketing_group(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/marketing-group/delete", id)
    }

    // -----------------------------------------------------------------------
    // Role
    // -----------------------------------------------------------------------

    pub fn build_list_roles(&self, query: &RoleQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/role/list", &query.normalize())
    }

    pub fn build_add_role(&self, input: &RoleCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/role/add", input)
    }

    pub fn build_update_role(&self, input: &RoleUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/role/modify", input)
    }

    pub fn build_delete_role(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/role/delete", id)
    }

    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    pub fn build_list_accounts(&self, query: &AccountQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/account/list", &query.normalize())
    }

    pub fn build_add_account(&self, input: &AccountCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/account/add", input)
    }

    pub fn build_update_account(&self, input: &AccountUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/account/update", input)
    }

    /// Accounts are deleted by path, without a body.
    pub fn build_delete_account(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Delete, &format!("/api/account/delete/{id}"))
    }

    pub fn build_account_detail(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Get, &format!("/api/account/detail/{id}"))
    }

    pub fn build_update_account_status(
        &self,
        id: i64,
        enabled: bool,
    ) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/account/status", &AccountStatus { id, enabled })
    }

    pub fn build_update_account_role(
        &self,
        id: i64,
        role_name: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = AccountRole {
            id,
            role_name: role_name.to_string(),
        };
        self.with_body(HttpMethod::Put, "/api/account/role", &body)
    }

    pub fn build_update_account_marketing_groups(
        &self,
        id: i64,
        marketing_groups: &NameSet,
    ) -> Result<HttpRequest, ApiError> {
        let body = AccountMarketingGroups {
            id,
            marketing_groups: marketing_groups.clone(),
        };
        self.with_body(HttpMethod::Put, "/api/account/marketing-group", &body)
    }

    // -----------------------------------------------------------------------
    // Tag
    // -----------------------------------------------------------------------

    pub fn build_list_tags(&self, query: &TagQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/tag/list", &query.normalize())
    }

    pub fn build_add_tag(&self, input: &TagCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/tag/add", input)
    }

    pub fn build_update_tag(&self, input: &TagUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/tag/modify", input)
    }

    pub fn build_delete_tag(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/tag/delete", id)
    }

    pub fn build_tag_detail(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Get, &format!("/api/tag/detail/{id}"))
    }

    /// Site configuration shares the modify endpoint with `build_update_tag`.
    pub fn build_update_tag_sites(&self, input: &TagSiteConfig) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/tag/modify", input)
    }

    // -----------------------------------------------------------------------
    // Strategy
    // -----------------------------------------------------------------------

    pub fn build_list_strategies(&self, query: &StrategyQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/strategy/list", &query.normalize())
    }

    pub fn build_add_strategy(&self, input: &StrategyCreate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/strategy/add", input)
    }

    pub fn build_update_strategy(&self, input: &StrategyUpdate) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/strategy/modify", input)
    }

    pub fn build_delete_strategy(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/strategy/delete", id)
    }

    pub fn build_strategy_detail(&self, id: i64) -> HttpRequest {
        self.without_body(HttpMethod::Get, &format!("/api/strategy/detail/{id}"))
    }

    pub fn build_update_strategy_sites(
        &self,
        input: &StrategySiteConfig,
    ) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Put, "/api/strategy/modify", input)
    }

    // -----------------------------------------------------------------------
    // Prospect
    // -----------------------------------------------------------------------

    pub fn build_list_prospects(&self, query: &ProspectQuery) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Post, "/api/prospect/list", &query.normalize())
    }

    pub fn build_delete_prospect(&self, id: i64) -> Result<HttpRequest, ApiError> {
        self.delete_by_body("/api/prospect/delete", id)
    }

    // -----------------------------------------------------------------------
    // Parsing
    // -----------------------------------------------------------------------

    /// Decode a response into its envelope. Non-2xx statuses are returned
    /// as `HttpError` untouched; envelope codes are not interpreted.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Envelope<T>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    // -----------------------------------------------------------------------
    // Request assembly
    // -----------------------------------------------------------------------

    fn with_body<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(self.auth_header());
        Ok(HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body: Some(body),
        })
    }

    fn without_body(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: self.auth_header().into_iter().collect(),
            body: None,
        }
    }

    fn delete_by_body(&self, path: &str, id: i64) -> Result<HttpRequest, ApiError> {
        self.with_body(HttpMethod::Delete, path, &json!({ "id": id }))
    }

    fn auth_header(&self) -> Option<(String, String)> {
        self.token
            .as_ref()
            .map(|token| ("authorization".to_string(), format!("Bearer {token}")))
    }
}

/// Map non-2xx status codes to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

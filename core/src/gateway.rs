//! One-call-per-operation facade over `MarketingClient` and an injected
//! transport.
//!
//! # Design
//! `Gateway` owns a `MarketingClient` and a `Transport`, both handed in by
//! the caller. Every method builds exactly one request, executes it once and
//! parses the envelope. Transport errors surface as `ApiError::Transport`
//! with the original error as source.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::MarketingClient;
use crate::error::{ApiError, BoxError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{
    Account, AccountCreate, AccountQuery, AccountUpdate, Community, CommunityCreate,
    CommunityQuery, CommunityUpdate, Empty, Envelope, Grid, GridCreate, GridQuery, GridUpdate,
    LoginData, LoginRequest, MarketingGroup, MarketingGroupCreate, MarketingGroupQuery,
    MarketingGroupUpdate, NameSet, Page, Prospect, ProspectQuery, Role, RoleCreate, RoleQuery,
    RoleUpdate, Site, SiteCreate, SiteQuery, SiteUpdate, Strategy, StrategyCreate, StrategyQuery,
    StrategySiteConfig, StrategyUpdate, Tag, TagCreate, TagQuery, TagSiteConfig, TagUpdate,
};

/// Executes one `HttpRequest` and returns the raw response.
///
/// Implementations must hand back non-2xx responses as data, not errors.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, BoxError>,
{
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self(request)
    }
}

pub type ApiResult<T> = Result<Envelope<T>, ApiError>;

#[derive(Debug, Clone)]
pub struct Gateway<T> {
    client: MarketingClient,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    pub fn new(client: MarketingClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &MarketingClient {
        &self.client
    }

    /// Swap in a new client, e.g. one carrying the token from `login`.
    pub fn set_client(&mut self, client: MarketingClient) {
        self.client = client;
    }

    fn dispatch<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        debug!(method = %request.method, path = %request.path, "dispatching request");
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        if !response.is_success() {
            debug!(status = response.status, "request failed");
        }
        self.client.parse(response)
    }

    pub fn login(&self, input: &LoginRequest) -> ApiResult<LoginData> {
        self.dispatch(self.client.build_login(input)?)
    }

    // -----------------------------------------------------------------------
    // Site
    // -----------------------------------------------------------------------

    pub fn list_sites(&self, query: &SiteQuery) -> ApiResult<Page<Site>> {
        self.dispatch(self.client.build_list_sites(query)?)
    }

    pub fn add_site(&self, input: &SiteCreate) -> ApiResult<Site> {
        self.dispatch(self.client.build_add_site(input)?)
    }

    pub fn update_site(&self, input: &SiteUpdate) -> ApiResult<Site> {
        self.dispatch(self.client.build_update_site(input)?)
    }

    pub fn delete_site(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_site(id)?)
    }

    // -----------------------------------------------------------------------
    // Grid
    // -----------------------------------------------------------------------

    pub fn list_grids(&self, query: &GridQuery) -> ApiResult<Page<Grid>> {
        self.dispatch(self.client.build_list_grids(query)?)
    }

    pub fn add_grid(&self, input: &GridCreate) -> ApiResult<Grid> {
        self.dispatch(self.client.build_add_grid(input)?)
    }

    pub fn update_grid(&self, input: &GridUpdate) -> ApiResult<Grid> {
        self.dispatch(self.client.build_update_grid(input)?)
    }

    pub fn delete_grid(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_grid(id)?)
    }

    // -----------------------------------------------------------------------
    // Community
    // -----------------------------------------------------------------------

    pub fn list_communities(&self, query: &CommunityQuery) -> ApiResult<Page<Community>> {
        self.dispatch(self.client.build_list_communities(query)?)
    }

    pub fn add_community(&self, input: &CommunityCreate) -> ApiResult<Community> {
        self.dispatch(self.client.build_add_community(input)?)
    }

    pub fn update_community(&self, input: &CommunityUpdate) -> ApiResult<Community> {
        self.dispatch(self.client.build_update_community(input)?)
    }

    pub fn delete_community(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_community(id)?)
    }

    // -----------------------------------------------------------------------
    // Marketing group
    // -----------------------------------------------------------------------

    pub fn list_marketing_groups(&self, query: &MarketingGroupQuery) -> ApiResult<Page<MarketingGroup>> {
        self.dispatch(self.client.build_list_marketing_groups(query)?)
    }

    pub fn add_marketing_group(&self, input: &MarketingGroupCreate) -> ApiResult<MarketingGroup> {
        self.dispatch(self.client.build_add_marketing_group(input)?)
    }

    pub fn update_marketing_group(&self, input: &MarketingGroupUpdate) -> ApiResult<MarketingGroup> {
        self.dispatch(self.client.build_update_marketing_group(input)?)
    }

    pub fn delete_marketing_group(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_marketing_group(id)?)
    }

    // -----------------------------------------------------------------------
    // Role
    // -----------------------------------------------------------------------

    pub fn list_roles(&self, query: &RoleQuery) -> ApiResult<Page<Role>> {
        self.dispatch(self.client.build_list_roles(query)?)
    }

    pub fn add_role(&self, input: &RoleCreate) -> ApiResult<Role> {
        self.dispatch(self.client.build_add_role(input)?)
    }

    pub fn update_role(&self, input: &RoleUpdate) -> ApiResult<Role> {
        self.dispatch(self.client.build_update_role(input)?)
    }

    pub fn delete_role(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_role(id)?)
    }

    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    pub fn list_accounts(&self, query: &AccountQuery) -> ApiResult<Page<Account>> {
        self.dispatch(self.client.build_list_accounts(query)?)
    }

    pub fn add_account(&self, input: &AccountCreate) -> ApiResult<Account> {
        self.dispatch(self.client.build_add_account(input)?)
    }

    pub fn update_account(&self, input: &AccountUpdate) -> ApiResult<Account> {
        self.dispatch(self.client.build_update_account(input)?)
    }

    pub fn delete_account(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_account(id))
    }

    pub fn account_detail(&self, id: i64) -> ApiResult<Account> {
        self.dispatch(self.client.build_account_detail(id))
    }

    pub fn update_account_status(&self, id: i64, enabled: bool) -> ApiResult<Empty> {
        self.dispatch(self.client.build_update_account_status(id, enabled)?)
    }

    pub fn update_account_role(&self, id: i64, role_name: &str) -> ApiResult<Empty> {
        self.dispatch(self.client.build_update_account_role(id, role_name)?)
    }

    pub fn update_account_marketing_groups(&self, id: i64, groups: &NameSet) -> ApiResult<Empty> {
        self.dispatch(self.client.build_update_account_marketing_groups(id, groups)?)
    }

    // -----------------------------------------------------------------------
    // Tag
    // -----------------------------------------------------------------------

    pub fn list_tags(&self, query: &TagQuery) -> ApiResult<Page<Tag>> {
        self.dispatch(self.client.build_list_tags(query)?)
    }

    pub fn add_tag(&self, input: &TagCreate) -> ApiResult<Tag> {
        self.dispatch(self.client.build_add_tag(input)?)
    }

    pub fn update_tag(&self, input: &TagUpdate) -> ApiResult<Tag> {
        self.dispatch(self.client.build_update_tag(input)?)
    }

    pub fn delete_tag(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_tag(id)?)
    }

    pub fn tag_detail(&self, id: i64) -> ApiResult<Tag> {
        self.dispatch(self.client.build_tag_detail(id))
    }

    pub fn update_tag_sites(&self, input: &TagSiteConfig) -> ApiResult<Empty> {
        self.dispatch(self.client.build_update_tag_sites(input)?)
    }

    // -----------------------------------------------------------------------
    // Strategy
    // -----------------------------------------------------------------------

    pub fn list_strategies(&self, query: &StrategyQuery) -> ApiResult<Page<Strategy>> {
        self.dispatch(self.client.build_list_strategies(query)?)
    }

    pub fn add_strategy(&self, input: &StrategyCreate) -> ApiResult<Strategy> {
        self.dispatch(self.client.build_add_strategy(input)?)
    }

    pub fn update_strategy(&self, input: &StrategyUpdate) -> ApiResult<Strategy> {
        self.dispatch(self.client.build_update_strategy(input)?)
    }

    pub fn delete_strategy(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_strategy(id)?)
    }

    pub fn strategy_detail(&self, id: i64) -> ApiResult<Strategy> {
        self.dispatch(self.client.build_strategy_detail(id))
    }

    pub fn update_strategy_sites(&self, input: &StrategySiteConfig) -> ApiResult<Empty> {
        self.dispatch(self.client.build_update_strategy_sites(input)?)
    }

    // -----------------------------------------------------------------------
    // Prospect
    // -----------------------------------------------------------------------

    pub fn list_prospects(&self, query: &ProspectQuery) -> ApiResult<Page<Prospect>> {
        self.dispatch(self.client.build_list_prospects(query)?)
    }

    pub fn delete_prospect(&self, id: i64) -> ApiResult<Empty> {
        self.dispatch(self.client.build_delete_prospect(id)?)
    }
}

//! In-memory stand-in for the marketing admin backend.
//!
//! Serves the same routes as the real backend and wraps every answer in the
//! `{code, msg, data}` envelope. Records are kept as loose JSON objects, one
//! table per resource, so the server has no compile-time coupling to the
//! client's schemas.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing_subscriber::{fmt, EnvFilter};

pub const RESOURCES: &[&str] = &[
    "site",
    "grid",
    "community",
    "marketing-group",
    "role",
    "account",
    "tag",
    "strategy",
    "prospect",
];

pub const CODE_OK: i64 = 200;
pub const CODE_BAD_REQUEST: i64 = 400;
pub const CODE_UNAUTHORIZED: i64 = 401;
pub const CODE_NOT_FOUND: i64 = 404;

pub const MOCK_USER: &str = "admin";
pub const MOCK_PASSWORD: &str = "admin123";
pub const MOCK_TOKEN: &str = "mock-token-admin";

/// Filters compared by equality. `site` and `marketingGroup` test set
/// membership; every other text filter is a substring match.
const EXACT_FILTERS: &[&str] = &["carrier", "siteName", "gridName", "tagType", "strategyType"];

type Record = Map<String, Value>;

#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Record>,
}

#[derive(Debug)]
pub struct Store {
    tables: HashMap<&'static str, Table>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            tables: RESOURCES.iter().map(|name| (*name, Table::default())).collect(),
        }
    }

    /// Insert a record as `add` would, returning it with its assigned id.
    /// Returns `None` for unknown resources or non-object records.
    pub fn insert(&mut self, resource: &str, record: Value) -> Option<Value> {
        let Value::Object(mut record) = record else {
            return None;
        };
        let table = self.tables.get_mut(resource)?;
        table.next_id += 1;
        let id = table.next_id;

        let now = now();
        record.insert("id".into(), json!(id));
        record.insert("createTime".into(), json!(now));
        record.insert("updateTime".into(), json!(now));
        if resource == "account" {
            refresh_expiry(&mut record);
        }
        table.rows.insert(id, record.clone());
        Some(Value::Object(record))
    }

    pub fn len(&self, resource: &str) -> usize {
        self.tables.get(resource).map_or(0, |t| t.rows.len())
    }

    pub fn is_empty(&self, resource: &str) -> bool {
        self.len(resource) == 0
    }

    fn table(&self, resource: &str) -> Result<&Table, StatusCode> {
        self.tables.get(resource).ok_or(StatusCode::NOT_FOUND)
    }

    fn table_mut(&mut self, resource: &str) -> Result<&mut Table, StatusCode> {
        self.tables.get_mut(resource).ok_or(StatusCode::NOT_FOUND)
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    pub msg: String,
    pub data: Value,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct IdBody {
    pub id: i64,
}

#[derive(Deserialize)]
pub struct StatusBody {
    pub id: i64,
    pub enabled: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBody {
    pub id: i64,
    pub role_name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingGroupsBody {
    pub id: i64,
    pub marketing_groups: String,
}

pub fn app() -> Router {
    app_with(Db::default())
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/account/list", post(list_accounts))
        .route("/api/account/add", post(add_account))
        .route("/api/account/update", put(update_account))
        .route("/api/account/detail/{id}", get(account_detail))
        .route("/api/account/delete/{id}", delete(delete_account))
        .route("/api/account/status", put(account_status))
        .route("/api/account/role", put(account_role))
        .route("/api/account/marketing-group", put(account_marketing_group))
        .route("/api/{resource}/list", post(list))
        .route("/api/{resource}/add", post(add))
        .route("/api/{resource}/modify", put(modify))
        .route("/api/{resource}/delete", delete(delete_by_body))
        .route("/api/{resource}/detail/{id}", get(detail))
        .with_state(db)
}

/// Install the global `fmt` subscriber, filtered by `RUST_LOG` (default
/// `info`). Panics if a subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Db::default()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(db)).await
}

fn ok(data: Value) -> Json<Envelope> {
    Json(Envelope {
        code: CODE_OK,
        msg: "success".into(),
        data,
    })
}

fn fail(code: i64, msg: &str) -> Json<Envelope> {
    Json(Envelope {
        code,
        msg: msg.into(),
        data: Value::Null,
    })
}

fn now() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `isExpired` is derived from the date prefix of `validUntil`.
fn refresh_expiry(record: &mut Record) {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let expired = record
        .get("validUntil")
        .and_then(Value::as_str)
        .filter(|until| !until.is_empty())
        .map(|until| until.get(..10).unwrap_or(until) < today.as_str())
        .unwrap_or(false);
    record.insert("isExpired".into(), json!(expired));
}

fn contains_name(joined: &str, name: &str) -> bool {
    joined.split(',').map(str::trim).any(|n| n == name)
}

fn matches(record: &Record, key: &str, wanted: &Value) -> bool {
    match wanted {
        Value::Null => true,
        Value::String(s) if s.is_empty() => true,
        Value::String(s) => {
            let field = if key == "site" { "sites" } else { key };
            let Some(actual) = record.get(field).and_then(Value::as_str) else {
                return false;
            };
            if key == "site" || key == "marketingGroup" {
                contains_name(actual, s)
            } else if EXACT_FILTERS.contains(&key) {
                actual == s
            } else {
                actual.contains(s.as_str())
            }
        }
        other => record.get(key) == Some(other),
    }
}

fn page_value(body: &Record, key: &str, default: u64) -> u64 {
    body.get(key)
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

async fn login(Json(input): Json<LoginBody>) -> Json<Envelope> {
    if input.username != MOCK_USER || input.password != MOCK_PASSWORD {
        return fail(CODE_UNAUTHORIZED, "invalid username or password");
    }
    ok(json!({
        "token": MOCK_TOKEN,
        "permissions": ["*:*:*"],
        "userInfo": {"username": input.username, "avatar": "", "role": "admin"}
    }))
}

async fn list(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Json(body): Json<Record>,
) -> Result<Json<Envelope>, StatusCode> {
    select_page(&db, &resource, body).await
}

async fn list_accounts(
    State(db): State<Db>,
    Json(body): Json<Record>,
) -> Result<Json<Envelope>, StatusCode> {
    select_page(&db, "account", body).await
}

async fn select_page(db: &Db, resource: &str, body: Record) -> Result<Json<Envelope>, StatusCode> {
    let store = db.read().await;
    let table = store.table(resource)?;

    let page_num = page_value(&body, "pageNum", 1);
    let page_size = page_value(&body, "pageSize", 10);
    let filters: Vec<(&String, &Value)> = body
        .iter()
        .filter(|(key, _)| key.as_str() != "pageNum" && key.as_str() != "pageSize")
        .collect();

    let hits: Vec<&Record> = table
        .rows
        .values()
        .filter(|row| filters.iter().all(|(key, wanted)| matches(row, key, wanted)))
        .collect();
    let total = hits.len();
    let skip = usize::try_from((page_num - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);
    let list: Vec<Value> = hits
        .into_iter()
        .skip(skip)
        .take(take)
        .map(|row| Value::Object(row.clone()))
        .collect();

    Ok(ok(json!({ "list": list, "total": total })))
}

async fn add(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Json(body): Json<Record>,
) -> Result<Json<Envelope>, StatusCode> {
    create(&db, &resource, body).await
}

async fn add_account(
    State(db): State<Db>,
    Json(body): Json<Record>,
) -> Result<Json<Envelope>, StatusCode> {
    create(&db, "account", body).await
}

/// Server-assigned fields in the body are ignored.
async fn create(db: &Db, resource: &str, mut body: Record) -> Result<Json<Envelope>, StatusCode> {
    for key in ["id", "createTime", "updateTime", "isExpired"] {
        body.remove(key);
    }
    let mut store = db.write().await;
    let record = store
        .insert(resource, Value::Object(body))
        .ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(resource, "record added");
    Ok(ok(record))
}

async fn modify(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Json(body): Json<Record>,
) -> Result<Json<Envelope>, StatusCode> {
    apply_modify(&db, &resource, body).await
}

async fn update_account(
    State(db): State<Db>,
    Json(body): Json<Record>,
) -> Result<Json<Envelope>, StatusCode> {
    apply_modify(&db, "account", body).await
}

/// Overwrite the fields present in `body`; absent fields keep their value.
async fn apply_modify(db: &Db, resource: &str, body: Record) -> Result<Json<Envelope>, StatusCode> {
    let Some(id) = body.get("id").and_then(Value::as_i64) else {
        return Ok(fail(CODE_BAD_REQUEST, "id is required"));
    };
    let mut store = db.write().await;
    let table = store.table_mut(resource)?;
    let Some(row) = table.rows.get_mut(&id) else {
        return Ok(fail(CODE_NOT_FOUND, "record not found"));
    };
    for (key, value) in body {
        if matches!(key.as_str(), "id" | "creator" | "createTime" | "updateTime" | "isExpired") {
            continue;
        }
        row.insert(key, value);
    }
    row.insert("updateTime".into(), json!(now()));
    if resource == "account" {
        refresh_expiry(row);
    }
    Ok(ok(Value::Object(row.clone())))
}

async fn remove(db: &Db, resource: &str, id: i64) -> Result<Json<Envelope>, StatusCode> {
    let mut store = db.write().await;
    let table = store.table_mut(resource)?;
    match table.rows.remove(&id) {
        Some(_) => Ok(ok(Value::Null)),
        None => Ok(fail(CODE_NOT_FOUND, "record not found")),
    }
}

async fn delete_by_body(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Json(body): Json<IdBody>,
) -> Result<Json<Envelope>, StatusCode> {
    remove(&db, &resource, body.id).await
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope>, StatusCode> {
    remove(&db, "account", id).await
}

async fn detail(
    State(db): State<Db>,
    Path((resource, id)): Path<(String, i64)>,
) -> Result<Json<Envelope>, StatusCode> {
    fetch(&db, &resource, id).await
}

async fn account_detail(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Envelope>, StatusCode> {
    fetch(&db, "account", id).await
}

async fn fetch(db: &Db, resource: &str, id: i64) -> Result<Json<Envelope>, StatusCode> {
    let store = db.read().await;
    let table = store.table(resource)?;
    match table.rows.get(&id) {
        Some(row) => Ok(ok(Value::Object(row.clone()))),
        None => Ok(fail(CODE_NOT_FOUND, "record not found")),
    }
}

async fn patch_account(db: &Db, id: i64, key: &str, value: Value) -> Json<Envelope> {
    let mut store = db.write().await;
    let Some(row) = store
        .tables
        .get_mut("account")
        .and_then(|table| table.rows.get_mut(&id))
    else {
        return fail(CODE_NOT_FOUND, "record not found");
    };
    row.insert(key.into(), value);
    row.insert("updateTime".into(), json!(now()));
    ok(Value::Null)
}

async fn account_status(State(db): State<Db>, Json(body): Json<StatusBody>) -> Json<Envelope> {
    patch_account(&db, body.id, "isEnabled", json!(body.enabled)).await
}

async fn account_role(State(db): State<Db>, Json(body): Json<RoleBody>) -> Json<Envelope> {
    patch_account(&db, body.id, "roleName", json!(body.role_name)).await
}

async fn account_marketing_group(
    State(db): State<Db>,
    Json(body): Json<MarketingGroupsBody>,
) -> Json<Envelope> {
    patch_account(&db, body.id, "marketingGroup", json!(body.marketing_groups)).await
}

use axum::{
    http::{self, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Db, Envelope, Store, CODE_NOT_FOUND, CODE_OK, CODE_UNAUTHORIZED};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Send one request through a clone of `app` and decode the envelope.
async fn call(app: &Router, request: Request<String>) -> Envelope {
    let resp = app.clone().oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

fn list_body() -> Value {
    json!({"pageNum": 1, "pageSize": 10})
}

// --- login ---

#[tokio::test]
async fn login_accepts_mock_credentials() {
    let env = call(
        &app(),
        json_request("POST", "/api/login", json!({"username": "admin", "password": "admin123"})),
    )
    .await;
    assert_eq!(env.code, CODE_OK);
    assert_eq!(env.data["token"], "mock-token-admin");
    assert_eq!(env.data["userInfo"]["role"], "admin");
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let env = call(
        &app(),
        json_request("POST", "/api/login", json!({"username": "admin", "password": "nope"})),
    )
    .await;
    assert_eq!(env.code, CODE_UNAUTHORIZED);
    assert!(env.data.is_null());
}

// --- list ---

#[tokio::test]
async fn list_sites_empty() {
    let env = call(&app(), json_request("POST", "/api/site/list", list_body())).await;
    assert_eq!(env.code, CODE_OK);
    assert_eq!(env.data, json!({"list": [], "total": 0}));
}

#[tokio::test]
async fn unknown_resource_returns_404() {
    let resp = app()
        .oneshot(json_request("POST", "/api/invoice/list", list_body()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_filters_and_paginates() {
    let mut store = Store::new();
    for (carrier, site) in [("CMCC", "Hangzhou"), ("CMCC", "Ningbo"), ("CUCC", "Hangzhou")] {
        store.insert("grid", json!({"carrier": carrier, "siteName": site, "gridName": "G"}));
    }
    let app = app_with(Db::new(store.into()));

    let env = call(
        &app,
        json_request(
            "POST",
            "/api/grid/list",
            json!({"carrier": "CMCC", "siteName": "", "gridName": "", "pageNum": 1, "pageSize": 10}),
        ),
    )
    .await;
    assert_eq!(env.data["total"], 2);

    let env = call(
        &app,
        json_request(
            "POST",
            "/api/grid/list",
            json!({"carrier": "", "siteName": "", "gridName": "", "pageNum": 2, "pageSize": 2}),
        ),
    )
    .await;
    assert_eq!(env.data["total"], 3);
    let list = env.data["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], 3);
}

#[tokio::test]
async fn tag_site_filter_matches_membership() {
    let mut store = Store::new();
    store.insert("tag", json!({"tagName": "vip", "tagType": "value", "sites": "Hangzhou,Ningbo"}));
    store.insert("tag", json!({"tagName": "churn", "tagType": "risk", "sites": "Wenzhou"}));
    let app = app_with(Db::new(store.into()));

    let env = call(
        &app,
        json_request(
            "POST",
            "/api/tag/list",
            json!({"tagName": "", "tagType": "", "site": "Ningbo", "pageNum": 1, "pageSize": 10}),
        ),
    )
    .await;
    assert_eq!(env.data["total"], 1);
    assert_eq!(env.data["list"][0]["tagName"], "vip");
}

#[tokio::test]
async fn list_and_detail_share_the_store_with_readers() {
    let mut store = Store::new();
    store.insert("strategy", json!({"strategyName": "fiber upsell", "sites": "Wenzhou"}));
    let db = Db::new(store.into());
    let app = app_with(db.clone());

    // Both handlers only read, so an outstanding reader must not block them.
    let _reader = db.read().await;

    let env = call(&app, json_request("POST", "/api/strategy/list", list_body())).await;
    assert_eq!(env.data["total"], 1);
    let env = call(&app, empty_request("GET", "/api/strategy/detail/1")).await;
    assert_eq!(env.code, CODE_OK);
    assert_eq!(env.data["strategyName"], "fiber upsell");
}

// --- add / modify / delete ---

#[tokio::test]
async fn add_ignores_client_supplied_id() {
    let env = call(
        &app(),
        json_request(
            "POST",
            "/api/role/add",
            json!({"id": 99, "roleName": "auditor", "roleDes": "read only", "creator": "admin"}),
        ),
    )
    .await;
    assert_eq!(env.code, CODE_OK);
    assert_eq!(env.data["id"], 1);
    assert_eq!(env.data["creator"], "admin");
    assert!(env.data["createTime"].is_string());
}

#[tokio::test]
async fn modify_unknown_id_reports_not_found() {
    let env = call(
        &app(),
        json_request("PUT", "/api/site/modify", json!({"id": 5, "siteName": "X"})),
    )
    .await;
    assert_eq!(env.code, CODE_NOT_FOUND);
}

#[tokio::test]
async fn delete_with_body_removes_record() {
    let app = app();
    call(
        &app,
        json_request(
            "POST",
            "/api/site/add",
            json!({"carrier": "CMCC", "siteName": "Hangzhou", "siteDes": "", "creator": "admin"}),
        ),
    )
    .await;

    let env = call(&app, json_request("DELETE", "/api/site/delete", json!({"id": 1}))).await;
    assert_eq!(env.code, CODE_OK);

    let env = call(&app, json_request("DELETE", "/api/site/delete", json!({"id": 1}))).await;
    assert_eq!(env.code, CODE_NOT_FOUND);
}

// --- account lifecycle ---

#[tokio::test]
async fn account_lifecycle() {
    let app = app();

    // add
    let env = call(
        &app,
        json_request(
            "POST",
            "/api/account/add",
            json!({
                "carrier": "CMCC",
                "siteName": "Hangzhou",
                "userAccount": "zhang.san",
                "userName": "Zhang San",
                "roleName": "operator",
                "marketingGroup": "g1",
                "isEnabled": true,
                "validUntil": "2999-01-01",
                "creator": "admin"
            }),
        ),
    )
    .await;
    assert_eq!(env.data["isExpired"], false);
    let id = env.data["id"].as_i64().unwrap();

    // status, role and groups
    call(&app, json_request("PUT", "/api/account/status", json!({"id": id, "enabled": false}))).await;
    call(&app, json_request("PUT", "/api/account/role", json!({"id": id, "roleName": "admin"}))).await;
    call(
        &app,
        json_request("PUT", "/api/account/marketing-group", json!({"id": id, "marketingGroups": "g2,g3"})),
    )
    .await;

    // detail reflects every sub-resource update
    let env = call(&app, empty_request("GET", &format!("/api/account/detail/{id}"))).await;
    assert_eq!(env.data["isEnabled"], false);
    assert_eq!(env.data["roleName"], "admin");
    assert_eq!(env.data["marketingGroup"], "g2,g3");

    // update keeps creator
    let env = call(
        &app,
        json_request(
            "PUT",
            "/api/account/update",
            json!({"id": id, "userName": "Zhang San (HZ)", "validUntil": "2001-01-01", "creator": "intruder"}),
        ),
    )
    .await;
    assert_eq!(env.data["userName"], "Zhang San (HZ)");
    assert_eq!(env.data["creator"], "admin");
    assert_eq!(env.data["isExpired"], true);

    // list by enabled flag
    let env = call(
        &app,
        json_request("POST", "/api/account/list", json!({"isEnabled": false, "pageNum": 1, "pageSize": 10})),
    )
    .await;
    assert_eq!(env.data["total"], 1);

    // delete by path
    let env = call(&app, empty_request("DELETE", &format!("/api/account/delete/{id}"))).await;
    assert_eq!(env.code, CODE_OK);
    let env = call(&app, empty_request("GET", &format!("/api/account/detail/{id}"))).await;
    assert_eq!(env.code, CODE_NOT_FOUND);
}

#[tokio::test]
async fn account_sub_resource_on_missing_account() {
    let env = call(
        &app(),
        json_request("PUT", "/api/account/role", json!({"id": 404, "roleName": "admin"})),
    )
    .await;
    assert_eq!(env.code, CODE_NOT_FOUND);
}

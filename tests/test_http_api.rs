//! End-to-end test: start the router on an ephemeral port and walk the full
//! restaurant → cuisine → dish lifecycle over real HTTP.

use restaurant_menu_api::transport;
use restaurant_menu_api::{MemoryRestaurantStore, MenuService};
use serde_json::json;
use std::sync::Arc;

async fn spawn_api() -> String {
    let app_state = transport::http::AppState {
        service: MenuService::new(Arc::new(MemoryRestaurantStore::new())),
    };
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port to avoid conflicts if an API server is already running.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_full_menu_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await;
    let client = reqwest::Client::new();

    // --- CREATE restaurant ---
    let resp = client
        .post(format!("{}/restaurants", base_url))
        .json(&json!({
            "name": "A",
            "address": "X",
            "availableFood": "veg",
            "description": "d",
            "phone": 1234567890i64
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let restaurant = resp.json::<serde_json::Value>().await?;
    let rid = restaurant["id"].as_str().expect("assigned id").to_string();
    assert!(!rid.is_empty());
    assert_eq!(restaurant["name"], "A");
    assert_eq!(restaurant["availableFood"], "veg");
    assert_eq!(restaurant["cuisines"], json!([]));

    // --- ADD cuisine: the response echoes the submitted fields ---
    let resp = client
        .post(format!("{}/restaurants/{}/cuisines", base_url, rid))
        .json(&json!({ "name": "Italian" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<serde_json::Value>().await?, json!({ "name": "Italian" }));

    // The assigned cuisine id shows up on the next read of the aggregate.
    let aggregate = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let cuisines = aggregate["cuisines"].as_array().unwrap();
    assert_eq!(cuisines.len(), 1);
    assert_eq!(cuisines[0]["name"], "Italian");
    let cid = cuisines[0]["id"].as_str().unwrap().to_string();
    assert!(!cid.is_empty());

    // --- ADD dish ---
    let resp = client
        .post(format!("{}/restaurants/{}/cuisines/{}/dishes", base_url, rid, cid))
        .json(&json!({
            "names": "Pizza",
            "description": "d",
            "price": 10,
            "category": "veg",
            "ingredients": "cheese"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);

    let aggregate = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let dishes = aggregate["cuisines"][0]["dishes"].as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["names"], "Pizza");
    let did = dishes[0]["id"].as_str().unwrap().to_string();

    // --- UPDATE dish: only price supplied, names untouched ---
    let resp = client
        .put(format!(
            "{}/restaurants/{}/cuisines/{}/dishes/{}",
            base_url, rid, cid, did
        ))
        .json(&json!({ "price": 12 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let dish = resp.json::<serde_json::Value>().await?;
    assert_eq!(dish["price"], 12.0);
    assert_eq!(dish["names"], "Pizza");

    // --- DELETE cuisine ---
    let resp = client
        .delete(format!("{}/restaurants/{}/cuisines/{}", base_url, rid, cid))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "message": "Cuisine deleted successfully." })
    );

    let aggregate = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(aggregate["cuisines"], json!([]));

    // --- DELETE restaurant ---
    let resp = client
        .delete(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "message": "Restaurant deleted successfully." })
    );

    let resp = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_not_found_statuses_per_level() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await;
    let client = reqwest::Client::new();

    // Missing restaurant: the outer lookup fails first, whatever the inner ids are.
    let resp = client
        .post(format!("{}/restaurants/missing/cuisines", base_url))
        .json(&json!({ "name": "Italian" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "error": "Restaurant not found." })
    );

    let resp = client
        .put(format!(
            "{}/restaurants/missing/cuisines/also-missing/dishes/nope",
            base_url
        ))
        .json(&json!({ "price": 1 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "error": "Restaurant not found." })
    );

    // Existing restaurant, missing cuisine / dish.
    let rid = client
        .post(format!("{}/restaurants", base_url))
        .json(&json!({
            "name": "A",
            "address": "X",
            "availableFood": "veg",
            "description": "d",
            "phone": 1234567890i64
        }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?["id"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = client
        .post(format!(
            "{}/restaurants/{}/cuisines/missing/dishes",
            base_url, rid
        ))
        .json(&json!({
            "names": "Pizza",
            "description": "d",
            "price": 10,
            "category": "veg",
            "ingredients": "cheese"
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "error": "Cuisine not found." })
    );

    let resp = client
        .post(format!("{}/restaurants/{}/cuisines", base_url, rid))
        .json(&json!({ "name": "Italian" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let cid = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?["cuisines"][0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = client
        .delete(format!(
            "{}/restaurants/{}/cuisines/{}/dishes/missing",
            base_url, rid, cid
        ))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "error": "Dish not found." })
    );

    let resp = client
        .delete(format!("{}/restaurants/missing", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_validation_failures_return_500_with_messages() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/restaurants", base_url))
        .json(&json!({ "name": "A" }))
        .send()
        .await?;
    assert_eq!(resp.status(), 500);
    let body = resp.json::<serde_json::Value>().await?;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Please enter restaurant address"));
    assert!(error.contains("Please enter restaurant phone"));

    // An empty required string fails the same presence check.
    let resp = client
        .post(format!("{}/restaurants", base_url))
        .json(&json!({
            "name": "",
            "address": "X",
            "availableFood": "veg",
            "description": "d",
            "phone": 1234567890i64
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), 500);
    let body = resp.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Please enter restaurant name");

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_falsy_update_fields_are_skipped_over_http() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await;
    let client = reqwest::Client::new();

    let rid = client
        .post(format!("{}/restaurants", base_url))
        .json(&json!({
            "name": "A",
            "address": "X",
            "availableFood": "veg",
            "description": "d",
            "phone": 1234567890i64
        }))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?["id"]
        .as_str()
        .unwrap()
        .to_string();

    client
        .post(format!("{}/restaurants/{}/cuisines", base_url, rid))
        .json(&json!({ "name": "Italian" }))
        .send()
        .await?;
    let aggregate = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let cid = aggregate["cuisines"][0]["id"].as_str().unwrap().to_string();

    client
        .post(format!("{}/restaurants/{}/cuisines/{}/dishes", base_url, rid, cid))
        .json(&json!({
            "names": "Pizza",
            "description": "d",
            "price": 10,
            "category": "veg",
            "ingredients": "cheese"
        }))
        .send()
        .await?;
    let aggregate = client
        .get(format!("{}/restaurants/{}", base_url, rid))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let did = aggregate["cuisines"][0]["dishes"][0]["id"].as_str().unwrap().to_string();

    // Empty string and zero count as "not supplied" and change nothing.
    let resp = client
        .put(format!(
            "{}/restaurants/{}/cuisines/{}/dishes/{}",
            base_url, rid, cid, did
        ))
        .json(&json!({ "names": "", "price": 0 }))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);
    let dish = resp.json::<serde_json::Value>().await?;
    assert_eq!(dish["names"], "Pizza");
    assert_eq!(dish["price"], 10.0);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.json::<serde_json::Value>().await?,
        json!({ "status": "ok" })
    );
    Ok(())
}

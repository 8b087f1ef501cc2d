
use reqwest::StatusCode;
use serde_json::{Value, json};
use test_utils::*;

#[actix_rt::test]
async fn get_projects_starts_empty() {
    let app = TestApp::spawn().await;

    let body = app.get_projects().await;
    assert_eq!(body["projects"], json!([]));
}

#[actix_rt::test]
async fn create_returns_collection_with_fresh_unique_ids() {
    let app = TestApp::spawn().await;

    let first = app.create_project("One", "May 2023").await;
    let second = app.create_project("Two", "June 2023").await;

    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();
    assert!(!first_id.is_empty());
    assert_ne!(first_id, second_id);

    let body = app.get_projects().await;
    assert_eq!(body["projects"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn create_rejects_missing_required_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .mutate_projects(&json!({
            "action": "create",
            "project": {"title": "Only a title"}
        }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.get_projects().await["projects"], json!([]));
}

#[actix_rt::test]
async fn missing_action_is_a_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .mutate_projects(&json!({"project": {"title": "No action"}}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.mutate_projects(&json!({"action": "create"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn update_merges_fields_and_keeps_the_id() {
    let app = TestApp::spawn().await;
    let created = app.create_project("One", "May 2023").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .mutate_projects(&json!({
            "action": "update",
            "project": {"id": id, "title": "Renamed"}
        }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Project updated");
    let project = &body["projects"][0];
    assert_eq!(project["id"], id);
    assert_eq!(project["title"], "Renamed");
    assert_eq!(project["description"], "One description");
    assert_eq!(project["date"], "May 2023");
}

#[actix_rt::test]
async fn update_sets_and_clears_the_media_pair() {
    let app = TestApp::spawn().await;
    let created = app.create_project("One", "May 2023").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .mutate_projects(&json!({
            "action": "update",
            "project": {
                "id": id,
                "mediaUrl": "/uploads/demo.png",
                "mediaType": "image"
            }
        }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["projects"][0]["mediaType"], "image");

    let response = app
        .mutate_projects(&json!({
            "action": "update",
            "project": {"id": id, "mediaUrl": null, "mediaType": null}
        }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["projects"][0]["mediaUrl"], Value::Null);
    assert_eq!(body["projects"][0]["mediaType"], Value::Null);
}

#[actix_rt::test]
async fn media_url_without_type_is_rejected() {
    let app = TestApp::spawn().await;
    let created = app.create_project("One", "May 2023").await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .mutate_projects(&json!({
            "action": "update",
            "project": {"id": id, "mediaUrl": "/uploads/demo.png"}
        }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn update_unknown_id_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .mutate_projects(&json!({
            "action": "update",
            "project": {"id": "1747516212117", "title": "Ghost"}
        }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn update_twice_with_same_payload_is_idempotent() {
    let app = TestApp::spawn().await;
    let created = app.create_project("One", "May 2023").await;
    let id = created["id"].as_str().unwrap();

    let payload = json!({
        "action": "update",
        "project": {
            "id": id,
            "title": "Renamed",
            "technologies": ["AI", " ", "AI", "Rust"]
        }
    });

    let once: Value = app.mutate_projects(&payload).await.json().await.unwrap();
    let twice: Value = app.mutate_projects(&payload).await.json().await.unwrap();

    assert_eq!(once["projects"], twice["projects"]);
    assert_eq!(twice["projects"][0]["technologies"], json!(["AI", "Rust"]));
}

#[actix_rt::test]
async fn delete_takes_only_an_id_and_removes_the_record() {
    let app = TestApp::spawn().await;
    let keep = app.create_project("Keep", "May 2023").await;
    let doomed = app.create_project("Drop", "June 2023").await;

    let response = app
        .mutate_projects(&json!({
            "action": "delete",
            "project": {"id": doomed["id"]}
        }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Project deleted");
    let remaining = body["projects"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], keep["id"]);
}

#[actix_rt::test]
async fn delete_unknown_id_is_not_found_and_changes_nothing() {
    let app = TestApp::spawn().await;
    app.create_project("Keep", "May 2023").await;

    let response = app
        .mutate_projects(&json!({
            "action": "delete",
            "project": {"id": "does-not-exist"}
        }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get_projects().await["projects"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn storage_order_is_insertion_order_but_display_is_date_descending() {
    let app = TestApp::spawn().await;
    app.create_project("Oldest", "January 2023").await;
    app.create_project("Newest", "March 2024").await;
    app.create_project("Middle", "June 2023").await;

    let stored = app.get_projects().await;
    let stored_titles: Vec<&str> = stored["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(stored_titles, vec!["Oldest", "Newest", "Middle"]);

    let display: Value = app
        .client
        .get(format!("{}/projects/display", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let display_dates: Vec<&str> = display["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["date"].as_str().unwrap())
        .collect();
    assert_eq!(display_dates, vec!["March 2024", "June 2023", "January 2023"]);
}

#[actix_rt::test]
async fn display_projection_linkifies_description_urls() {
    let app = TestApp::spawn().await;
    let created = app.create_project("Linked", "May 2023").await;
    let id = created["id"].as_str().unwrap();

    app.mutate_projects(&json!({
        "action": "update",
        "project": {"id": id, "description": "demo at https://example.com today"}
    }))
    .await;

    let display: Value = app
        .client
        .get(format!("{}/projects/display", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let segments = display["projects"][0]["descriptionSegments"]
        .as_array()
        .unwrap();
    assert_eq!(segments[0], json!({"kind": "text", "value": "demo at "}));
    assert_eq!(
        segments[1],
        json!({"kind": "link", "value": "https://example.com"})
    );
}

#[actix_rt::test]
async fn concurrent_updates_to_different_ids_are_both_reflected() {
    let app = TestApp::spawn().await;
    let first = app.create_project("One", "May 2023").await;
    let second = app.create_project("Two", "June 2023").await;

    let first_body = json!({
        "action": "update",
        "project": {"id": first["id"], "title": "One updated"}
    });
    let second_body = json!({
        "action": "update",
        "project": {"id": second["id"], "title": "Two updated"}
    });
    let update_first = app.mutate_projects(&first_body);
    let update_second = app.mutate_projects(&second_body);
    let (a, b) = tokio::join!(update_first, update_second);
    assert_eq!(a.status(), StatusCode::OK);
    assert_eq!(b.status(), StatusCode::OK);

    let titles: Vec<String> = app.get_projects().await["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert!(titles.contains(&"One updated".to_string()));
    assert!(titles.contains(&"Two updated".to_string()));
}

//! Integration tests for the `/api/notes` endpoints.

mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn note_crud_round_trip() {
    let app = TestApp::spawn().await.unwrap();
    let notebook = app.seed_notebook().await;

    let response = app
        .client
        .post(format!("{}/api/notes", app.address))
        .json(&json!({
            "title": "Observation",
            "content": "Swifts returned early this year.",
            "note_type": "human",
            "notebook_id": notebook.id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["note_type"], "human");

    // Partial update: content untouched.
    let response = app
        .client
        .put(format!("{}/api/notes/{id}", app.address))
        .json(&json!({"title": "Observation (revised)"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let detail: Value = app
        .client
        .get(format!("{}/api/notes/{id}", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(detail["title"], "Observation (revised)");
    assert_eq!(detail["content"], "Swifts returned early this year.");

    let response = app
        .client
        .delete(format!("{}/api/notes/{id}", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Note deleted successfully");

    let response = app
        .client
        .get(format!("{}/api/notes/{id}", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn note_creation_checks_the_notebook() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .client
        .post(format!("{}/api/notes", app.address))
        .json(&json!({"title": "orphan", "notebook_id": "missing"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "notebook not found");
}

#[tokio::test]
async fn notes_list_filters_by_notebook() {
    let app = TestApp::spawn().await.unwrap();
    let notebook = app.seed_notebook().await;

    for (title, attach) in [("inside", true), ("outside", false)] {
        let mut payload = json!({"title": title, "note_type": "ai"});
        if attach {
            payload["notebook_id"] = json!(notebook.id);
        }
        let response = app
            .client
            .post(format!("{}/api/notes", app.address))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    let all: Value = app
        .client
        .get(format!("{}/api/notes", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 2);

    let filtered: Value = app
        .client
        .get(format!(
            "{}/api/notes?notebook_id={}",
            app.address, notebook.id
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["title"], "inside");

    let response = app
        .client
        .get(format!("{}/api/notes?notebook_id=unknown", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn updating_an_unknown_note_is_404() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .client
        .put(format!("{}/api/notes/missing", app.address))
        .json(&json!({"title": "whatever"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

//! Tests for the ingestion request validator: error ordering, per-origin
//! required fields, and transformation resolution.

use lorebook::{
    validate_ingest, ContentState, DomainError, DomainStore, MemoryStore, Notebook,
    SourceIngestInput, Transformation,
};

async fn store_with_notebook() -> (MemoryStore, Notebook) {
    let store = MemoryStore::new();
    let notebook = store
        .save_notebook(&Notebook::new("Research", "validator tests"))
        .await
        .unwrap();
    (store, notebook)
}

fn text_input(notebook_id: &str, content: &str) -> SourceIngestInput {
    SourceIngestInput {
        notebook_id: notebook_id.to_string(),
        kind: "text".to_string(),
        content: Some(content.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn missing_notebook_is_reported_before_origin_problems() {
    let store = MemoryStore::new();
    // Both the notebook and the origin are invalid; the notebook wins.
    let input = SourceIngestInput {
        notebook_id: "does-not-exist".to_string(),
        kind: "satellite".to_string(),
        ..Default::default()
    };

    let err = validate_ingest(&store, &input).await.unwrap_err();
    match err {
        DomainError::NotFound(what) => assert_eq!(what, "notebook"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unsupported_origin_kind_is_invalid_input() {
    let (store, notebook) = store_with_notebook().await;
    let input = SourceIngestInput {
        notebook_id: notebook.id.clone(),
        kind: "carrier-pigeon".to_string(),
        ..Default::default()
    };

    let err = validate_ingest(&store, &input).await.unwrap_err();
    match err {
        DomainError::InvalidInput(msg) => assert_eq!(msg, "unsupported origin kind"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn each_origin_kind_requires_its_field() {
    let (store, notebook) = store_with_notebook().await;

    for (kind, expected) in [
        ("link", "url required"),
        ("upload", "file_path required"),
        ("text", "content required"),
    ] {
        let input = SourceIngestInput {
            notebook_id: notebook.id.clone(),
            kind: kind.to_string(),
            ..Default::default()
        };
        let err = validate_ingest(&store, &input).await.unwrap_err();
        match err {
            DomainError::InvalidInput(msg) => assert_eq!(msg, expected),
            other => panic!("expected InvalidInput for {kind}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn empty_string_counts_as_absent() {
    let (store, notebook) = store_with_notebook().await;
    let input = SourceIngestInput {
        notebook_id: notebook.id.clone(),
        kind: "link".to_string(),
        url: Some("   ".to_string()),
        ..Default::default()
    };

    let err = validate_ingest(&store, &input).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(msg) if msg == "url required"));
}

#[tokio::test]
async fn first_unresolved_transformation_is_named() {
    let (store, notebook) = store_with_notebook().await;
    let summarize = store
        .save_transformation(&Transformation::new("summarize", "Summary", "Summarize this."))
        .await
        .unwrap();

    let mut input = text_input(&notebook.id, "hello");
    input.transformations = vec![summarize.id.clone(), "missing-id".to_string()];

    let err = validate_ingest(&store, &input).await.unwrap_err();
    match err {
        DomainError::NotFound(what) => assert_eq!(what, "transformation missing-id"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn valid_request_is_normalized() {
    let (store, notebook) = store_with_notebook().await;
    let summarize = store
        .save_transformation(&Transformation::new("summarize", "Summary", "Summarize this."))
        .await
        .unwrap();
    let insights = store
        .save_transformation(&Transformation::new(
            "key-insights",
            "Key Insights",
            "List the key insights.",
        ))
        .await
        .unwrap();

    let mut input = text_input(&notebook.id, "hello world");
    input.title = Some("Greetings".to_string());
    input.transformations = vec![insights.id.clone(), summarize.id.clone()];
    input.embed = true;

    let job = validate_ingest(&store, &input).await.unwrap();
    assert_eq!(
        job.content_state,
        ContentState::Text {
            content: "hello world".to_string()
        }
    );
    assert_eq!(job.notebook.id, notebook.id);
    assert_eq!(job.title.as_deref(), Some("Greetings"));
    assert!(job.embed);
    // Resolution order follows the caller-supplied sequence.
    let names: Vec<&str> = job
        .transformations
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["key-insights", "summarize"]);
}

#[tokio::test]
async fn upload_origin_carries_delete_flag() {
    let (store, notebook) = store_with_notebook().await;
    let input = SourceIngestInput {
        notebook_id: notebook.id.clone(),
        kind: "upload".to_string(),
        file_path: Some("/tmp/notes.txt".to_string()),
        delete_source: true,
        ..Default::default()
    };

    let job = validate_ingest(&store, &input).await.unwrap();
    assert_eq!(
        job.content_state,
        ContentState::Upload {
            file_path: "/tmp/notes.txt".to_string(),
            delete_source: true,
        }
    );
}

//! JSON store integration tests: files on disk, reopen semantics

use hooomz_domain::{ActivityKind, ActivityEvent, Contact, Loop, Project, Task};
use hooomz_store::{collections, JsonStore, OpsStore};

#[tokio::test]
async fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let project = Project::new("Miller Kitchen", "12 Oak St");
    let project_id = project.id;
    let lp = Loop::new(project_id, "Finish work");
    let loop_id = lp.id;
    let task = Task::new(loop_id, "Install Floor Tile");
    let task_id = task.id;

    {
        let store = JsonStore::open(dir.path()).await.unwrap();
        store.insert_project(project).await.unwrap();
        store.insert_loop(lp).await.unwrap();
        store.insert_task(task).await.unwrap();
        store
            .insert_contact(Contact::new("Dana Miller").with_email("dana@example.com"))
            .await
            .unwrap();
    }

    let reopened = JsonStore::open(dir.path()).await.unwrap();
    assert_eq!(reopened.get_project(project_id).await.unwrap().name, "Miller Kitchen");
    assert_eq!(reopened.tasks_by_loop(loop_id).await.unwrap().len(), 1);
    assert_eq!(reopened.get_task(task_id).await.unwrap().name, "Install Floor Tile");
    assert_eq!(reopened.list_contacts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn collection_files_are_json_arrays() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();

    let project = Project::new("Shed", "Backyard");
    let project_id = project.id;
    store.insert_project(project).await.unwrap();
    store
        .append_event(ActivityEvent::new(
            project_id,
            ActivityKind::ProjectUpdated,
            "created",
        ))
        .await
        .unwrap();

    for key in [collections::PROJECTS, collections::ACTIVITY] {
        let path = dir.path().join(format!("{key}.json"));
        let bytes = std::fs::read(&path).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value.is_array(), "{key} should be a JSON array");
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn named_collection_roundtrip_and_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let saved = serde_json::json!([
        {"label": "stud", "length_in": 92.625},
        {"label": "header", "length_in": 39.0},
    ]);

    {
        let store = JsonStore::open(dir.path()).await.unwrap();
        store
            .write_collection(collections::FRAMING_CUT_LIST, saved.clone())
            .await
            .unwrap();
        // Served from cache.
        assert_eq!(
            store.read_collection(collections::FRAMING_CUT_LIST).await.unwrap(),
            saved
        );
    }

    // Served from the file after reopen.
    let reopened = JsonStore::open(dir.path()).await.unwrap();
    assert_eq!(
        reopened.read_collection(collections::FRAMING_CUT_LIST).await.unwrap(),
        saved
    );
}

#[tokio::test]
async fn missing_named_collection_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let value = store.read_collection("hooomz-nonexistent").await.unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[tokio::test]
async fn failed_file_write_undoes_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    let subdir = dir.path().join("data");
    let store = JsonStore::open(&subdir).await.unwrap();

    let mut project = Project::new("Deck", "44 Pine Rd");
    let id = project.id;
    store.insert_project(project.clone()).await.unwrap();

    // Pull the directory out from under the store so the next rewrite fails.
    std::fs::remove_dir_all(&subdir).unwrap();

    project.name = "Deck & Pergola".to_string();
    store.update_project(project).await.unwrap_err();
    assert_eq!(store.get_project(id).await.unwrap().name, "Deck");

    store
        .insert_project(Project::new("Shed", "Backyard"))
        .await
        .unwrap_err();
    assert_eq!(store.list_projects().await.unwrap().len(), 1);

    store.delete_project(id).await.unwrap_err();
    assert!(store.get_project(id).await.is_ok());
}

#[tokio::test]
async fn update_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();

    let mut project = Project::new("Deck", "44 Pine Rd");
    let id = project.id;
    store.insert_project(project.clone()).await.unwrap();

    project.name = "Deck & Pergola".to_string();
    store.update_project(project).await.unwrap();

    let reopened = JsonStore::open(dir.path()).await.unwrap();
    assert_eq!(reopened.get_project(id).await.unwrap().name, "Deck & Pergola");
}

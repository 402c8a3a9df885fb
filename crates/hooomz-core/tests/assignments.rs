//! Service operations against a pre-seeded store

use hooomz_core::{OpsConfig, OpsError, OpsService};
use hooomz_domain::ActivityKind;
use hooomz_test_utils::{crew_member, project_manager, sample_date, seeded_store};

#[tokio::test]
async fn assign_seeded_task_to_customer_contact() {
    let (store, project, _lp, task) = seeded_store().await;
    let service = OpsService::new(store).unwrap();
    let pm = project_manager();

    let contact_id = project.contact_ids[0];
    let task = service.assign_task(&pm, task.id, contact_id).await.unwrap();
    assert_eq!(task.assignee, Some(contact_id));

    let feed = service.activity_feed(&pm, project.id).await.unwrap();
    assert_eq!(feed[0].kind, ActivityKind::TaskUpdated);
    assert!(feed[0].detail.contains("Dana Miller"));
}

#[tokio::test]
async fn crew_can_clock_and_log_but_not_assign() {
    let (store, project, _lp, task) = seeded_store().await;
    let service = OpsService::new(store).unwrap();
    let crew = crew_member();

    service.clock_in(&crew, project.id).await.unwrap();
    service.clock_out(&crew).await.unwrap();
    service
        .log_day(&crew, project.id, sample_date(), "tile prep", 425)
        .await
        .unwrap();

    let err = service
        .assign_task(&crew, task.id, project.contact_ids[0])
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Auth(_)));
}

#[tokio::test]
async fn feed_respects_configured_page_size() {
    let (store, project, _lp, _task) = seeded_store().await;
    let config = OpsConfig {
        feed_limit: 3,
        ..OpsConfig::default()
    };
    let service = OpsService::with_config(store, &config).unwrap();
    let pm = project_manager();

    for day in 1..=6 {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
        service
            .log_day(&pm, project.id, date, "site work", 800)
            .await
            .unwrap();
    }

    let feed = service.activity_feed(&pm, project.id).await.unwrap();
    assert_eq!(feed.len(), 3);
    // Newest first: the last logged day leads.
    assert!(feed[0].detail.contains("2026-03-06"));
}

#[tokio::test]
async fn crew_cannot_log_expenses() {
    let (store, project, _lp, _task) = seeded_store().await;
    let service = OpsService::new(store).unwrap();
    let crew = crew_member();

    let err = service
        .add_expense(&crew, project.id, sample_date(), "Supply House", 5_000, None)
        .await
        .unwrap_err();
    assert!(matches!(err, OpsError::Auth(_)));
}

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use timegrid_api::{ApiState, generation::GenerationTracker, handlers::generate::GENERATION_BUSY};
use timegrid_client::{MockTimetableSource, TimetableSource};
use timegrid_core::TimetableError;

use crate::test_utils::{GatedSource, SlowSource, server_for};

#[tokio::test]
async fn test_successful_generation_is_remembered() {
    let mut source = MockTimetableSource::new();
    source
        .expect_generate()
        .times(1)
        .returning(|| Ok("Timetable generated successfully".to_string()));
    let tracker = GenerationTracker::new();

    assert!(tracker.last().await.is_none());
    let status = tracker
        .run(Arc::new(source))
        .await
        .expect("generation should succeed");

    assert_eq!(status.message, "Timetable generated successfully");
    assert_eq!(tracker.last().await, Some(status));
    assert!(!tracker.is_running());
}

#[test_log::test(tokio::test)]
async fn test_failed_generation_keeps_previous_status() {
    let mut source = MockTimetableSource::new();
    let mut calls = 0;
    source.expect_generate().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Ok("first run".to_string())
        } else {
            Err(TimetableError::Upstream {
                status: 500,
                message: "solver crashed".to_string(),
            })
        }
    });
    let source: Arc<dyn TimetableSource> = Arc::new(source);
    let tracker = GenerationTracker::new();

    let first = tracker
        .run(source.clone())
        .await
        .expect("first run should succeed");
    let second = tracker.run(source).await;

    assert!(matches!(second, Err(TimetableError::Upstream { .. })));
    assert_eq!(tracker.last().await, Some(first));
}

#[tokio::test]
async fn test_concurrent_generation_is_rejected() {
    let tracker = Arc::new(GenerationTracker::new());
    let source = Arc::new(GatedSource::default());

    let first = {
        let tracker = tracker.clone();
        let source = source.clone();
        tokio::spawn(async move { tracker.run(source).await })
    };

    source.started.notified().await;
    assert!(tracker.is_running());

    let second = tracker.run(source.clone()).await;
    assert!(matches!(second, Err(TimetableError::InProgress)));

    source.release.notify_one();
    let status = first
        .await
        .expect("generation task panicked")
        .expect("first generation should succeed");

    assert_eq!(status.message, "Timetable generated successfully");
    assert!(!tracker.is_running());
}

#[tokio::test]
async fn test_dropped_request_keeps_generation_in_flight() {
    let tracker = Arc::new(GenerationTracker::new());
    let source = Arc::new(GatedSource::default());

    let request = {
        let tracker = tracker.clone();
        let source = source.clone();
        tokio::spawn(async move { tracker.run(source).await })
    };
    source.started.notified().await;

    // The caller goes away while the backend is still working
    request.abort();
    assert!(request.await.expect_err("request should be cancelled").is_cancelled());

    assert!(tracker.is_running());
    let second = tracker.run(source.clone()).await;
    assert!(matches!(second, Err(TimetableError::InProgress)));

    source.release.notify_one();
    tokio::time::timeout(Duration::from_secs(5), async {
        while tracker.is_running() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("generation should finish once the backend answers");

    let last = tracker.last().await.expect("completed generation is recorded");
    assert_eq!(last.message, "Timetable generated successfully");
}

#[tokio::test]
async fn test_generation_is_not_bound_by_lookup_timeout() {
    let source = Arc::new(SlowSource::new(Duration::from_millis(300)));
    let state = Arc::new(ApiState::new(source.clone()));
    let (server, state) = server_for(state, Some(Duration::from_millis(50)));

    let response = server.post("/generate").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Timetable generated successfully"));
    assert!(!html.contains(GENERATION_BUSY));

    let response = server.post("/api/generate").await;
    response.assert_status_ok();

    assert_eq!(source.calls(), 2);
    assert!(state.generation.last().await.is_some());

    // Lookups stay bounded
    let response = server.get("/student?student_id=S001").await;
    response.assert_status(StatusCode::REQUEST_TIMEOUT);
}

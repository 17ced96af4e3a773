use axum::http::StatusCode;
use timegrid_api::handlers::{
    generate::{GENERATION_BUSY, GENERATION_FAILED},
    master::MASTER_FAILED,
    student::STUDENT_FAILED,
};
use timegrid_api::views::{
    grid::EMPTY_CELL,
    panels::{NO_MASTER_CLASSES, NO_STUDENT_CLASSES},
};
use timegrid_core::{TimetableError, Weekday};

use crate::test_utils::{TestContext, lesson};

#[tokio::test]
async fn test_shell_starts_in_generate_stage() {
    let (server, _) = TestContext::new().server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Generate timetable"));
    assert!(html.contains("Generate a timetable to browse"));
    assert!(!html.contains(r#"href="/master""#));
}

#[tokio::test]
async fn test_generate_success_unlocks_tabs() {
    let mut ctx = TestContext::new();
    ctx.source
        .expect_generate()
        .times(1)
        .returning(|| Ok("Timetable generated successfully".to_string()));
    let (server, state) = ctx.server();

    let response = server.post("/generate").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Timetable generated successfully"));
    assert!(html.contains(r#"href="/student""#));
    assert!(html.contains(r#"href="/master""#));
    assert!(state.generation.last().await.is_some());

    // The shell keeps the tabs on later visits
    let html = server.get("/").await.text();
    assert!(html.contains(r#"href="/master""#));
    assert!(!html.contains("Timetable generated successfully"));
}

#[tokio::test]
async fn test_generate_failure_shows_static_message() {
    let mut ctx = TestContext::new();
    ctx.source.expect_generate().times(1).returning(|| {
        Err(TimetableError::Upstream {
            status: 500,
            message: "solver exploded".to_string(),
        })
    });
    let (server, state) = ctx.server();

    let response = server.post("/generate").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(GENERATION_FAILED));
    assert!(!html.contains("solver exploded"));
    assert!(state.generation.last().await.is_none());
    assert!(!html.contains(GENERATION_BUSY));
}

#[tokio::test]
async fn test_student_page_without_id_shows_only_the_form() {
    let mut ctx = TestContext::new();
    ctx.source.expect_student_timetable().times(0);
    let (server, _) = ctx.server();

    let response = server.get("/student?student_id=%20%20").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"name="student_id""#));
    assert!(!html.contains("<table"));
    assert!(!html.contains(STUDENT_FAILED));
}

#[tokio::test]
async fn test_student_page_renders_grid() {
    let mut ctx = TestContext::new();
    ctx.source
        .expect_student_timetable()
        .withf(|student_id: &str| student_id == "S001")
        .times(1)
        .returning(|_| {
            Ok(vec![
                lesson(Weekday::Monday, "Monday_10:00-11:00", "CS101", "CSE-A"),
                lesson(Weekday::Wednesday, "09:00-10:00", "MA201", "CSE-A"),
            ])
        });
    let (server, _) = ctx.server();

    let response = server.get("/student?student_id=%20S001%20").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Timetable for S001"));
    assert!(html.contains("CS101"));
    assert!(html.contains("MA201"));
    assert!(html.contains("09:00-10:00"));
    assert!(!html.contains("Monday_10:00-11:00"));
    for day in Weekday::ALL {
        assert!(html.contains(day.as_str()), "missing row for {}", day);
    }
    let nine = html.find("09:00-10:00").unwrap();
    let ten = html.find("10:00-11:00").unwrap();
    assert!(nine < ten, "slots should be ordered by start time");
}

#[tokio::test]
async fn test_student_page_with_no_classes() {
    let mut ctx = TestContext::new();
    ctx.source
        .expect_student_timetable()
        .returning(|_| Ok(Vec::new()));
    let (server, _) = ctx.server();

    let html = server.get("/student?student_id=S404").await.text();

    assert!(html.contains(NO_STUDENT_CLASSES));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn test_student_page_failure_is_inline() {
    let mut ctx = TestContext::new();
    ctx.source.expect_student_timetable().returning(|_| {
        Err(TimetableError::Upstream {
            status: 200,
            message: "Student S999 not found in any batch or elective group.".to_string(),
        })
    });
    let (server, _) = ctx.server();

    let response = server.get("/student?student_id=S999").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains(STUDENT_FAILED));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn test_student_cells_show_lesson_details_and_placeholders() {
    let mut ctx = TestContext::new();
    ctx.source
        .expect_student_timetable()
        .times(1)
        .returning(|_| Ok(vec![lesson(Weekday::Wednesday, "Wednesday_09:00-10:00", "MA201", "CSE-A")]));
    let (server, _) = ctx.server();

    let html = server.get("/student?student_id=S001").await.text();

    assert!(html.contains(
        r#"<td class="lesson"><div class="course">MA201</div><div class="faculty">F1</div><div class="room">R101</div></td>"#
    ));
    // One slot across seven days leaves six empty cells
    let vacant = format!(r#"<td class="vacant">{}</td>"#, EMPTY_CELL);
    assert_eq!(html.matches(&vacant).count(), 6);
}

#[tokio::test]
async fn test_student_page_shows_collisions() {
    let mut ctx = TestContext::new();
    ctx.source.expect_student_timetable().returning(|_| {
        Ok(vec![
            lesson(Weekday::Friday, "14:00-15:00", "PH110", "CSE-A"),
            lesson(Weekday::Friday, "Friday_14:00-15:00", "EE150", "EL-1"),
        ])
    });
    let (server, _) = ctx.server();

    let html = server.get("/student?student_id=S001").await.text();

    assert!(html.contains("1 overlapping lesson is hidden"));
    assert!(html.contains("PH110 on Friday 14:00-15:00"));
    assert!(html.contains("(shown: EE150)"));
}

#[tokio::test]
async fn test_master_page_renders_one_grid_per_group() {
    let mut ctx = TestContext::new();
    ctx.source.expect_master_timetable().times(1).returning(|| {
        Ok(vec![
            lesson(Weekday::Monday, "Monday_10:00-11:00", "CS101", "CSE-B"),
            lesson(Weekday::Monday, "Monday_10:00-11:00", "ME101", "ME-A"),
            lesson(Weekday::Tuesday, "Tuesday_11:00-12:00", "CS102", "CSE-B"),
            lesson(Weekday::Friday, "Friday_13:00-14:00", "EE101", "EE-A"),
        ])
    });
    let (server, _) = ctx.server();

    let response = server.get("/master").await;

    response.assert_status_ok();
    let html = response.text();
    assert_eq!(html.matches("<table").count(), 3);
    let cse = html.find("Group CSE-B").unwrap();
    let me = html.find("Group ME-A").unwrap();
    let ee = html.find("Group EE-A").unwrap();
    assert!(cse < me && me < ee, "groups should keep discovery order");
    assert!(!html.contains("overlapping"));
}

#[tokio::test]
async fn test_master_page_empty_and_failed() {
    let mut ctx = TestContext::new();
    let mut calls = 0;
    ctx.source.expect_master_timetable().times(2).returning(move || {
        calls += 1;
        if calls == 1 {
            Ok(Vec::new())
        } else {
            Err(TimetableError::Network("connection refused".to_string()))
        }
    });
    let (server, _) = ctx.server();

    let empty = server.get("/master").await.text();
    assert!(empty.contains(NO_MASTER_CLASSES));

    let failed = server.get("/master").await.text();
    assert!(failed.contains(MASTER_FAILED));
    assert!(!failed.contains("<table"));
}

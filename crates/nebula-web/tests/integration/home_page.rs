//! `GET /` behaviour.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use nebula_content::ContentStore;

use crate::common::TestHarness;

#[tokio::test]
async fn test_home_renders_all_fixed_content() {
    let harness = TestHarness::new();
    let (status, html) = harness.get_home().await;

    assert_eq!(status, StatusCode::OK);
    let content = ContentStore::default();
    for project in &content.projects {
        assert!(html.contains(&project.name), "missing {}", project.name);
    }
    for testimonial in &content.testimonials {
        assert!(html.contains(&testimonial.author));
    }
    assert!(html.contains("AI Solutions"));
    assert!(html.contains("Security Engineering"));
}

#[tokio::test]
async fn test_fixed_content_survives_submissions() {
    let harness = TestHarness::new();
    for i in 1..=7 {
        harness
            .submit("Ana", "a@x.com", "Acme", &format!("Note {i}"))
            .await;
    }
    assert_eq!(harness.log_len().await, 7);

    let (status, html) = harness.get_home().await;
    assert_eq!(status, StatusCode::OK);
    let content = ContentStore::default();
    for service in &content.services {
        assert!(html.contains(&service.title.replace('&', "&#38;")));
    }
    for project in &content.projects {
        assert!(html.contains(&project.name), "missing {}", project.name);
    }
    for testimonial in &content.testimonials {
        assert!(html.contains(&testimonial.author));
    }
    assert!(html.contains("Recent inquiries"));
}

#[tokio::test]
async fn test_home_is_html() {
    let harness = TestHarness::new();
    let resp = harness
        .send(Request::get("/").body(Body::empty()).unwrap())
        .await;

    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_empty_log_hides_inquiries() {
    let harness = TestHarness::new();
    let (_, html) = harness.get_home().await;
    assert!(!html.contains("Recent inquiries"));
}

#[tokio::test]
async fn test_custom_content_is_rendered() {
    let content = ContentStore::from_toml_str(
        r#"
[company]
name = "Acme Rockets"
tagline = "Up and away"
pillars = ["Thrust"]

[[services]]
icon = "🚀"
title = "Launch Services"
description = "We launch things."
"#,
    )
    .unwrap();
    let harness = TestHarness::with_content(content);
    let (_, html) = harness.get_home().await;

    assert!(html.contains("<title>Acme Rockets · Up and away</title>"));
    assert!(html.contains("Launch Services"));
    assert!(!html.contains("NebulaStack"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let harness = TestHarness::new();
    let resp = harness
        .send(Request::get("/admin").body(Body::empty()).unwrap())
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_contact_not_allowed() {
    let harness = TestHarness::new();
    let resp = harness
        .send(Request::get("/contact").body(Body::empty()).unwrap())
        .await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

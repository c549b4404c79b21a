//! `POST /contact` behaviour and its effect on the page.

use nebula_inquiry::{Inquiry, InquiryStore};

use crate::common::{TestHarness, assert_contact_redirect, body_text};

#[tokio::test]
async fn test_valid_submission_is_recorded() {
    let harness = TestHarness::new();
    let resp = harness.submit("Ana", "a@x.com", "", "Hi").await;

    assert_contact_redirect(&resp);
    assert_eq!(harness.log_len().await, 1);
    assert_eq!(
        harness.store.recent(1).await.unwrap(),
        vec![Inquiry {
            name: "Ana".into(),
            email: "a@x.com".into(),
            company: String::new(),
            message: "Hi".into(),
        }]
    );
}

#[tokio::test]
async fn test_missing_name_is_discarded() {
    let harness = TestHarness::new();
    let resp = harness.post_contact("name=&email=a%40x.com&message=Hi").await;

    assert_contact_redirect(&resp);
    assert_eq!(harness.log_len().await, 0);
}

#[tokio::test]
async fn test_whitespace_only_fields_are_discarded() {
    let harness = TestHarness::new();
    for (name, email, message) in [
        ("   ", "a@x.com", "Hi"),
        ("Ana", "\t", "Hi"),
        ("Ana", "a@x.com", "  \n "),
    ] {
        let resp = harness.submit(name, email, "Acme", message).await;
        assert_contact_redirect(&resp);
    }
    assert_eq!(harness.log_len().await, 0);
}

#[tokio::test]
async fn test_absent_fields_are_discarded() {
    let harness = TestHarness::new();
    let resp = harness.post_contact("email=a%40x.com").await;

    assert_contact_redirect(&resp);
    assert_eq!(harness.log_len().await, 0);
}

#[tokio::test]
async fn test_company_field_is_optional() {
    let harness = TestHarness::new();
    let resp = harness
        .post_contact("name=Ana&email=a%40x.com&message=Hi")
        .await;

    assert_contact_redirect(&resp);
    let recorded = harness.store.recent(1).await.unwrap();
    assert_eq!(recorded[0].company, "");
}

#[tokio::test]
async fn test_fields_are_trimmed() {
    let harness = TestHarness::new();
    harness
        .submit("  Ana  ", " a@x.com ", "  Acme ", "  Hi there  ")
        .await;

    let recorded = harness.store.recent(1).await.unwrap();
    assert_eq!(recorded[0].name, "Ana");
    assert_eq!(recorded[0].email, "a@x.com");
    assert_eq!(recorded[0].company, "Acme");
    assert_eq!(recorded[0].message, "Hi there");
}

#[tokio::test]
async fn test_undecodable_body_is_discarded() {
    let harness = TestHarness::new();
    let req = axum::http::Request::post("/contact")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(r#"{"name":"Ana"}"#))
        .unwrap();
    let resp = harness.send(req).await;

    assert_contact_redirect(&resp);
    assert_eq!(harness.log_len().await, 0);
}

#[tokio::test]
async fn test_success_and_failure_look_the_same() {
    let harness = TestHarness::new();
    let ok = harness.submit("Ana", "a@x.com", "", "Hi").await;
    let rejected = harness.submit("", "a@x.com", "", "Hi").await;

    assert_eq!(ok.status(), rejected.status());
    assert_eq!(ok.headers().get("location"), rejected.headers().get("location"));
    assert_eq!(body_text(ok).await, body_text(rejected).await);
}

#[tokio::test]
async fn test_duplicates_are_recorded() {
    let harness = TestHarness::new();
    harness.submit("Ana", "a@x.com", "", "Hi").await;
    harness.submit("Ana", "a@x.com", "", "Hi").await;
    assert_eq!(harness.log_len().await, 2);
}

#[tokio::test]
async fn test_page_shows_five_newest_first() {
    let harness = TestHarness::new();
    for i in 1..=6 {
        harness
            .submit(&format!("Sender{i}"), "s@x.com", "", &format!("Note number {i}"))
            .await;
    }
    assert_eq!(harness.log_len().await, 6);

    let (_, html) = harness.get_home().await;
    assert!(!html.contains("Note number 1<"));

    let positions: Vec<usize> = (2..=6)
        .rev()
        .map(|i| html.find(&format!("Note number {i}<")).expect("inquiry rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert_eq!(html.matches("<li class=\"inquiry").count(), 5);
}

#[tokio::test]
async fn test_recent_limit_is_configurable() {
    let mut harness = TestHarness::new();
    harness.state = harness.state.clone().with_recent_limit(2);
    for i in 1..=3 {
        harness
            .submit("Ana", "a@x.com", "", &format!("Note number {i}"))
            .await;
    }

    let (_, html) = harness.get_home().await;
    assert_eq!(html.matches("<li class=\"inquiry").count(), 2);
    assert!(html.contains("Note number 3<"));
    assert!(html.contains("Note number 2<"));
    assert!(!html.contains("Note number 1<"));
}

#[tokio::test]
async fn test_submitted_markup_is_escaped_on_page() {
    let harness = TestHarness::new();
    harness
        .submit("<b>Mallory</b>", "m@x.com", "", "<script>alert('x')</script>")
        .await;

    let (_, html) = harness.get_home().await;
    assert!(html.contains("&#60;b&#62;Mallory&#60;/b&#62;"));
    assert!(!html.contains("<script>alert("));
}

#[tokio::test]
async fn test_repeated_field_keeps_first_value() {
    let harness = TestHarness::new();
    let resp = harness
        .post_contact("name=Ana&name=Bob&email=a%40x.com&message=Hi")
        .await;

    assert_contact_redirect(&resp);
    assert_eq!(harness.log_len().await, 1);
    let recorded = harness.store.recent(1).await.unwrap();
    assert_eq!(recorded[0].name, "Ana");
    assert_eq!(recorded[0].email, "a@x.com");
}

use crate::db::leads::list_leads;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, post_form, post_htmx, post_json, test_state, RecordingRelay,
    RecordingTracker,
};

const LEAD: &str = "name=Pat+Lee&email=Pat%40Example.com&phone=555-0100&reason=pricing&message=Help&source=rent-estimate";

#[test]
fn contact_page_preselects_reason() {
    let state = test_state();
    let body = body_string(handle(get("/contact?reason=turnover"), &state).unwrap());
    assert!(body.contains(r#"value="turnover" selected"#));
    assert!(body.contains(r#"name="source" value="contact-page""#));
}

#[test]
fn relayed_lead_is_stored_and_confirmed() {
    let relay = RecordingRelay::default();
    let state = test_state().with_relay(relay.clone());

    let resp = handle(post_htmx("/contact", LEAD), &state).expect("contact failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Thanks!"));
    assert!(!body.contains("<!DOCTYPE html>"));

    let sent = relay.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "pat@example.com");
    assert_eq!(sent[0].source, "rent-estimate");

    let leads = state.db.with_conn(|conn| list_leads(conn, None)).unwrap();
    assert_eq!(leads.len(), 1);
    assert!(leads[0].relayed);
    assert_eq!(leads[0].phone.as_deref(), Some("555-0100"));
}

#[test]
fn relay_failure_shows_retry_message() {
    let relay = RecordingRelay {
        fail: true,
        ..Default::default()
    };
    let state = test_state().with_relay(relay);

    let resp = handle(post_htmx("/contact", LEAD), &state).expect("contact failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp)
        .contains("Something went wrong sending your message. Please try again."));

    let leads = state.db.with_conn(|conn| list_leads(conn, None)).unwrap();
    assert_eq!(leads.len(), 1);
    assert!(!leads[0].relayed);
}

#[test]
fn unconfigured_relay_is_a_failure() {
    let state = test_state();
    let body = body_string(handle(post_form("/contact", LEAD), &state).unwrap());
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Please try again."));
}

#[test]
fn invalid_lead_is_rejected() {
    let relay = RecordingRelay::default();
    let state = test_state().with_relay(relay.clone());

    let resp = handle(post_htmx("/contact", "name=&email=nope"), &state).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Please check the form"));

    let resp = handle(post_htmx("/contact", "name=Pat&email=not-an-email"), &state).unwrap();
    assert_eq!(resp.status(), 400);

    assert!(relay.sent.lock().unwrap().is_empty());
    let leads = state.db.with_conn(|conn| list_leads(conn, None)).unwrap();
    assert!(leads.is_empty());
}

#[test]
fn track_endpoint_always_answers_204() {
    let tracker = RecordingTracker::default();
    let state = test_state().with_tracker(tracker.clone());

    let ok = post_json(
        "/api/track",
        r#"{"tool":"cap-rate","inputs":{"monthlyRent":1000},"results":{"capRate":6.1},"email":"x@y.io"}"#,
    );
    assert_eq!(handle(ok, &state).unwrap().status(), 204);

    let garbage = post_json("/api/track", "{{{");
    assert_eq!(handle(garbage, &state).unwrap().status(), 204);

    let blank_tool = post_json("/api/track", r#"{"tool":"   "}"#);
    assert_eq!(handle(blank_tool, &state).unwrap().status(), 204);

    let events = tracker.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].tool, "cap-rate");
    assert_eq!(events[0].email.as_deref(), Some("x@y.io"));
}

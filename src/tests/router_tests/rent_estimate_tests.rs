use crate::db::usage::list_usage;
use crate::errors::ServerError;
use crate::pricing::CompsResult;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, post_form, post_htmx, post_json, test_state, DownComps, FixedComps,
    RecordingTracker,
};
use serde_json::Value;

const HOUSE: &str =
    "property_type=house&beds=3&baths=2&sqft=1450&condition=3&parking=on&current_rent=2150";

fn twelve_comps() -> FixedComps {
    FixedComps(CompsResult {
        comps_count: 12,
        median_rent: 0.0,
        median_rent_per_sqft: 2.2,
        point_estimate: None,
    })
}

#[test]
fn home_and_form_render() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("home failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("/tools/rent-estimate"));

    let resp = handle(get("/tools/rent-estimate?beds=4"), &state).expect("form failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Rent Estimate"));
    assert!(body.contains(r#"value="4""#));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn htmx_post_returns_result_partial() {
    let state = test_state();

    let resp = handle(post_htmx("/tools/rent-estimate", HOUSE), &state).expect("estimate failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("$3,004"));
    assert!(body.contains("$2,883"));
    assert!(body.contains("$3,124"));
    assert!(body.contains("Below market"));
    assert!(body.contains("-$854"));
}

#[test]
fn plain_post_returns_full_page() {
    let state = test_state();

    let resp = handle(post_form("/tools/rent-estimate", HOUSE), &state).expect("estimate failed");
    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("$3,004"));
}

#[test]
fn estimate_is_recorded_in_usage_events() {
    let state = test_state();

    let body = format!("{HOUSE}&email=Owner@Example.com");
    handle(post_htmx("/tools/rent-estimate", &body), &state).expect("estimate failed");

    let rows = state
        .db
        .with_conn(|conn| list_usage(conn, None))
        .expect("list usage failed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tool, "rent-estimate");
    assert_eq!(rows[0].email.as_deref(), Some("owner@example.com"));
    assert!(rows[0].results_json.contains("\"suggested\":3004"));
}

#[test]
fn json_api_runs_the_pipeline() {
    let state = test_state();

    let req = post_json(
        "/api/rent-estimate",
        r#"{"beds":3,"baths":2,"sqft":1450,"propertyType":"house","condition":3,"parking":true,"currentRent":2150}"#,
    );
    let resp = handle(req, &state).expect("api failed");
    assert_eq!(resp.status(), 200);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["suggested"], 3004.0);
    assert_eq!(json["lower"], 2883.0);
    assert_eq!(json["upper"], 3124.0);
    assert_eq!(json["status"], "under");
    assert_eq!(json["delta"], -854.0);
    assert_eq!(json["hasVerdict"], true);
    assert_eq!(json["compsUnavailable"], false);
}

#[test]
fn json_api_rejects_garbage() {
    let state = test_state();

    let resp = handle(post_json("/api/rent-estimate", "not json"), &state).expect("api failed");
    assert_eq!(resp.status(), 400);

    let resp = handle(post_json("/api/rent-estimate", "[1,2]"), &state).expect("api failed");
    assert_eq!(resp.status(), 400);
}

#[test]
fn live_comps_blend_with_high_confidence() {
    let state = test_state().with_comps(twelve_comps());

    let req = post_json(
        "/api/rent-estimate",
        r#"{"beds":3,"baths":2,"sqft":1450,"propertyType":"house","condition":3,"parking":true,"liveComps":true}"#,
    );
    let json: Value = serde_json::from_str(&body_string(handle(req, &state).unwrap())).unwrap();

    assert_eq!(json["suggested"], 2884.0);
    assert_eq!(json["lower"], 2769.0);
    assert_eq!(json["upper"], 2999.0);
    assert_eq!(json["compsCount"], 12);
    assert_eq!(json["hasVerdict"], false);
}

#[test]
fn comps_are_only_fetched_when_asked() {
    let state = test_state().with_comps(twelve_comps());

    let resp = handle(post_htmx("/tools/rent-estimate", HOUSE), &state).unwrap();
    assert!(body_string(resp).contains("$3,004"));
}

#[test]
fn comps_failure_falls_back_with_notice() {
    let tracker = RecordingTracker::default();
    let state = test_state()
        .with_comps(DownComps)
        .with_tracker(tracker.clone());

    let body = format!("{HOUSE}&live_comps=1");
    let resp = handle(post_htmx("/tools/rent-estimate", &body), &state).expect("estimate failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Live comps are unavailable right now; showing the heuristic estimate."));
    assert!(body.contains("$3,004"));
    assert_eq!(tracker.events().len(), 1);
}

#[test]
fn missing_provider_counts_as_unavailable() {
    let state = test_state();

    let req = post_json("/api/rent-estimate", r#"{"beds":2,"liveComps":true}"#);
    let json: Value = serde_json::from_str(&body_string(handle(req, &state).unwrap())).unwrap();
    assert_eq!(json["compsUnavailable"], true);
    assert_eq!(json["source"], "heuristic");
}

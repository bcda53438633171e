use crate::router::handle;
use crate::tests::utils::{
    body_string, get, post_form, post_htmx, test_state, BrokenTracker, RecordingTracker,
};

#[test]
fn calculator_pages_render() {
    let state = test_state();
    for path in [
        "/tools/cap-rate",
        "/tools/vacancy-cost",
        "/tools/renovation-roi",
        "/tools/readiness",
    ] {
        let resp = handle(get(path), &state).unwrap_or_else(|e| panic!("{path} failed: {e}"));
        assert_eq!(resp.status(), 200, "{path}");
        assert!(body_string(resp).contains(&format!(r#"hx-post="{path}""#)));
    }
}

#[test]
fn cap_rate_partial_and_tracking() {
    let tracker = RecordingTracker::default();
    let state = test_state().with_tracker(tracker.clone());

    let req = post_htmx(
        "/tools/cap-rate",
        "property_value=300000&monthly_rent=2500&vacancy_rate=5&annual_expenses=9000&email=a@b.co",
    );
    let body = body_string(handle(req, &state).expect("cap rate failed"));
    assert!(body.contains("6.5%"));
    assert!(body.contains("typical"));
    assert!(body.contains("$19,500"));

    let events = tracker.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].tool, "cap-rate");
    assert_eq!(events[0].email.as_deref(), Some("a@b.co"));
    assert_eq!(events[0].results["noi"], 19_500.0);
}

#[test]
fn cap_rate_without_value_asks_for_one() {
    let state = test_state();
    let body = body_string(handle(post_htmx("/tools/cap-rate", "monthly_rent=1000"), &state).unwrap());
    assert!(body.contains("Enter a property value"));
}

#[test]
fn vacancy_cost_breakdown() {
    let state = test_state();

    let req = post_htmx(
        "/tools/vacancy-cost",
        "monthly_rent=1800&days_vacant=30&hours_spent=10&hourly_value=50&cash_costs=400&concessions=100",
    );
    let body = body_string(handle(req, &state).unwrap());
    // 1800 + 500 + 400 + 100
    assert!(body.contains("$2,800"));
    assert!(body.contains("$60"));
}

#[test]
fn renovation_payback() {
    let state = test_state();

    let req = post_htmx("/tools/renovation-roi", "cost=3000&monthly_rent_increase=150");
    let body = body_string(handle(req, &state).unwrap());
    assert!(body.contains("20.0 months"));
    assert!(body.contains("Marginal"));
    assert!(body.contains("60.0%"));

    let req = post_htmx("/tools/renovation-roi", "cost=3000&monthly_rent_increase=0");
    let body = body_string(handle(req, &state).unwrap());
    assert!(body.contains("Never"));
}

#[test]
fn readiness_full_page_keeps_checkboxes() {
    let state = test_state();

    let req = post_form("/tools/readiness", "deep_clean=on&carpets=on&bogus=on");
    let body = body_string(handle(req, &state).unwrap());
    assert!(body.starts_with("<!DOCTYPE html>"));
    // 2 of 20 done, 18 left at 0.75h each
    assert!(body.contains("10%"));
    assert!(body.contains("13.5 hours"));
    assert!(body.contains(r#"name="deep_clean" checked"#));
}

#[test]
fn tracking_failure_does_not_break_the_tool() {
    let state = test_state().with_tracker(BrokenTracker);

    let resp = handle(post_htmx("/tools/renovation-roi", "cost=1000&monthly_rent_increase=100"), &state)
        .expect("tool should still answer");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("10.0 months"));
}

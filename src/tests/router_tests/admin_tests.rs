use crate::db::leads::insert_lead;
use crate::domain::LeadMessage;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_bytes, body_string, get, get_with_cookie, post_form, post_htmx, test_state};

const TOKEN: &str = "s3cret";

fn session_cookie(state: &crate::state::AppState) -> String {
    let issued = state.admin.session_cookie().unwrap();
    issued.split(';').next().unwrap().to_string()
}

#[test]
fn admin_is_hidden_without_token() {
    let state = test_state();
    assert!(matches!(handle(get("/admin"), &state), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/admin/login"), &state), Err(ServerError::NotFound)));
}

#[test]
fn dashboard_redirects_to_login() {
    let state = test_state().with_admin_token(TOKEN);

    let resp = handle(get("/admin"), &state).expect("admin failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/admin/login");

    let resp = handle(get_with_cookie("/admin", "admin_token=wrong"), &state).unwrap();
    assert_eq!(resp.status(), 303);
}

#[test]
fn login_sets_cookie() {
    let state = test_state().with_admin_token(TOKEN);

    let resp = handle(post_form("/admin/login", "token=s3cret"), &state).expect("login failed");
    assert_eq!(resp.status(), 303);
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("admin_token="));
    assert!(!cookie.contains(TOKEN));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));

    // The issued cookie opens the dashboard.
    let pair = cookie.split(';').next().unwrap().to_string();
    let resp = handle(get_with_cookie("/admin", &pair), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = handle(post_form("/admin/login", "token=guess"), &state).unwrap();
    assert_eq!(resp.status(), 401);
}

#[test]
fn dashboard_shows_usage_and_leads() {
    let state = test_state().with_admin_token(TOKEN);

    handle(
        post_htmx("/tools/renovation-roi", "cost=1000&monthly_rent_increase=100&email=o@x.com"),
        &state,
    )
    .unwrap();
    state
        .db
        .with_conn(|conn| {
            insert_lead(
                conn,
                &LeadMessage {
                    name: "Sam".into(),
                    email: "sam@example.com".into(),
                    phone: None,
                    reason: "general".into(),
                    message: String::new(),
                    source: "contact-page".into(),
                },
                false,
                1_773_576_000,
            )
        })
        .unwrap();

    let resp = handle(
        get_with_cookie("/admin", &session_cookie(&state)),
        &state,
    )
    .expect("dashboard failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("renovation-roi"));
    assert!(body.contains("o@x.com"));
    assert!(body.contains("sam@example.com"));
    assert!(body.contains("contact-page"));
}

#[test]
fn export_requires_admin_and_returns_xlsx() {
    let state = test_state().with_admin_token(TOKEN);

    let err = handle(get("/admin/export.xlsx"), &state).unwrap_err();
    assert!(matches!(err, ServerError::Unauthorized(_)));

    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri("/admin/export.xlsx")
        .header("Authorization", "Bearer s3cret")
        .body(astra::Body::empty())
        .unwrap();
    let resp = handle(req, &state).expect("export failed");
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("spreadsheetml"));
    assert_eq!(&body_bytes(resp)[..2], b"PK");
}

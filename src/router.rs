use crate::analytics::load_dashboard;
use crate::calculators::{cap_rate, readiness, renovation, vacancy};
use crate::clock::now_unix;
use crate::db::leads::{insert_lead, list_leads};
use crate::db::usage::list_usage;
use crate::domain::lead::{optional_email, LeadMessage};
use crate::domain::usage::{
    TOOL_CAP_RATE, TOOL_READINESS, TOOL_RENOVATION_ROI, TOOL_RENT_ESTIMATE, TOOL_VACANCY_COST,
};
use crate::domain::{PropertyInputs, UsageEvent};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::integrations::{lookup_comps, relay_lead, track, CompsLookup};
use crate::pricing::{estimate_rent, EstimateResult};
use crate::responses::{
    html_response, html_response_with_status, json_response, no_content, redirect,
    redirect_with_cookie, xlsx_response, ResultResp,
};
use crate::spreadsheets::build_analytics_workbook;
use crate::state::AppState;
use crate::templates::components::{lead_invalid, lead_result};
use crate::templates::pages;
use astra::Request;
use http::HeaderMap;
use maud::Markup;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Read;

const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    log::debug!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),

        // Rent estimate
        ("GET", "/tools/rent-estimate") => {
            let form = FormData::from_query(req.uri().query());
            html_response(pages::rent_estimate_page(&form, None))
        }
        ("POST", "/tools/rent-estimate") => rent_estimate(req, state),
        ("POST", "/api/rent-estimate") => rent_estimate_api(req, state),

        // Calculators
        ("GET", "/tools/cap-rate") => {
            let form = FormData::from_query(req.uri().query());
            html_response(pages::cap_rate_page(&form, None))
        }
        ("POST", "/tools/cap-rate") => run_calculator(
            req,
            state,
            Calculator {
                tool: TOOL_CAP_RATE,
                parse: cap_rate::CapRateInputs::from_form,
                calculate: cap_rate::calculate,
                page: pages::cap_rate_page,
                partial: pages::calculators::cap_rate_result,
            },
        ),
        ("GET", "/tools/vacancy-cost") => {
            let form = FormData::from_query(req.uri().query());
            html_response(pages::vacancy_cost_page(&form, None))
        }
        ("POST", "/tools/vacancy-cost") => run_calculator(
            req,
            state,
            Calculator {
                tool: TOOL_VACANCY_COST,
                parse: vacancy::VacancyInputs::from_form,
                calculate: vacancy::calculate,
                page: pages::vacancy_cost_page,
                partial: pages::calculators::vacancy_cost_result,
            },
        ),
        ("GET", "/tools/renovation-roi") => {
            let form = FormData::from_query(req.uri().query());
            html_response(pages::renovation_page(&form, None))
        }
        ("POST", "/tools/renovation-roi") => run_calculator(
            req,
            state,
            Calculator {
                tool: TOOL_RENOVATION_ROI,
                parse: renovation::RenovationInputs::from_form,
                calculate: renovation::calculate,
                page: pages::renovation_page,
                partial: pages::calculators::renovation_result,
            },
        ),
        ("GET", "/tools/readiness") => {
            let form = FormData::from_query(req.uri().query());
            html_response(pages::readiness_page(&form, None))
        }
        ("POST", "/tools/readiness") => run_calculator(
            req,
            state,
            Calculator {
                tool: TOOL_READINESS,
                parse: readiness::checked_ids,
                calculate: |ids: &Vec<&'static str>| readiness::score(ids),
                page: pages::readiness_page,
                partial: pages::calculators::readiness_result,
            },
        ),

        // Leads
        ("GET", "/contact") => {
            let form = FormData::from_query(req.uri().query());
            html_response(pages::contact_page(form.get("reason")))
        }
        ("POST", "/contact") => contact(req, state),

        ("POST", "/api/track") => track_event(req, state),

        // Admin
        ("GET", "/admin/login") => {
            require_admin_enabled(state)?;
            html_response(pages::admin_login_page(None))
        }
        ("POST", "/admin/login") => admin_login(req, state),
        ("GET", "/admin") => {
            if !admin_access(req.headers(), state)? {
                return redirect("/admin/login");
            }
            let stats = load_dashboard(&state.db, now_unix())?;
            html_response(pages::admin_page(&stats))
        }
        ("GET", "/admin/export.xlsx") => {
            if !admin_access(req.headers(), state)? {
                return Err(ServerError::Unauthorized("admin token required".into()));
            }
            let (usage, leads) = state
                .db
                .with_conn(|conn| Ok((list_usage(conn, None)?, list_leads(conn, None)?)))?;
            let buffer = build_analytics_workbook(&usage, &leads)?;
            xlsx_response(buffer, "rent-tools-analytics.xlsx")
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// htmx sends `HX-Request: true`; those get the fragment, everyone else the page.
fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn read_body(req: Request) -> Result<String, ServerError> {
    let mut body = req.into_body();
    let mut text = String::new();
    body.reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut text)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;
    Ok(text)
}

fn read_form(req: Request) -> Result<FormData, ServerError> {
    read_body(req).map(|body| FormData::parse(&body))
}

fn read_json(req: Request) -> Result<Value, ServerError> {
    let body = read_body(req)?;
    serde_json::from_str(&body).map_err(|e| ServerError::BadRequest(format!("invalid JSON: {e}")))
}

// ---------------------------------------------------------------------------
// Rent estimate
// ---------------------------------------------------------------------------

fn run_estimate(form: &FormData, state: &AppState) -> (PropertyInputs, EstimateResult, CompsLookup) {
    let inputs = PropertyInputs::from_form(form);
    let requested = crate::domain::normalize::flag(form.get("live_comps"));
    let lookup = lookup_comps(state.comps(), &inputs, requested);
    let result = estimate_rent(&inputs, lookup.result());

    track(
        &*state.tracker,
        UsageEvent::new(TOOL_RENT_ESTIMATE, &inputs, &result.to_json())
            .with_email(optional_email(form.get("email"))),
    );

    (inputs, result, lookup)
}

fn rent_estimate(req: Request, state: &AppState) -> ResultResp {
    let partial = is_htmx(req.headers());
    let form = read_form(req)?;
    let (inputs, result, lookup) = run_estimate(&form, state);

    let vm = pages::EstimateVm {
        inputs: &inputs,
        result: &result,
        comps_unavailable: lookup.is_unavailable(),
    };

    if partial {
        html_response(pages::estimate_result(&vm))
    } else {
        html_response(pages::rent_estimate_page(&form, Some(&vm)))
    }
}

/// JSON in, JSON out. Accepts the same fields as the form, camelCase or snake_case.
fn rent_estimate_api(req: Request, state: &AppState) -> ResultResp {
    let payload = match read_json(req) {
        Ok(v) if v.is_object() => v,
        Ok(_) => return json_response(400, &json!({ "error": "expected a JSON object" })),
        Err(e) => return json_response(400, &json!({ "error": e.to_string() })),
    };

    let form = FormData::from_json(&payload);
    let (_, result, lookup) = run_estimate(&form, state);

    let mut body = result.to_json();
    body["compsUnavailable"] = Value::Bool(lookup.is_unavailable());
    json_response(200, &body)
}

// ---------------------------------------------------------------------------
// Calculators
// ---------------------------------------------------------------------------

struct Calculator<I, R> {
    tool: &'static str,
    parse: fn(&FormData) -> I,
    calculate: fn(&I) -> R,
    page: fn(&FormData, Option<&R>) -> Markup,
    partial: fn(&R) -> Markup,
}

fn run_calculator<I: Serialize, R: Serialize>(
    req: Request,
    state: &AppState,
    calc: Calculator<I, R>,
) -> ResultResp {
    let partial = is_htmx(req.headers());
    let form = read_form(req)?;

    let inputs = (calc.parse)(&form);
    let result = (calc.calculate)(&inputs);

    track(
        &*state.tracker,
        UsageEvent::new(calc.tool, &inputs, &result).with_email(optional_email(form.get("email"))),
    );

    if partial {
        html_response((calc.partial)(&result))
    } else {
        html_response((calc.page)(&form, Some(&result)))
    }
}

// ---------------------------------------------------------------------------
// Leads and tracking
// ---------------------------------------------------------------------------

fn contact(req: Request, state: &AppState) -> ResultResp {
    let partial = is_htmx(req.headers());
    let form = read_form(req)?;

    let wrap = |markup: Markup| {
        if partial {
            markup
        } else {
            pages::contact_result_page(markup)
        }
    };

    let lead = match LeadMessage::from_form(&form) {
        Ok(lead) => lead,
        Err(ServerError::BadRequest(msg)) => {
            return html_response_with_status(400, wrap(lead_invalid(&msg)));
        }
        Err(e) => return Err(e),
    };

    let relayed = relay_lead(state.relay(), &lead).is_ok();

    // The copy in SQLite is a backup; the visitor's answer depends on the relay only.
    if let Err(e) = state
        .db
        .with_conn(|conn| insert_lead(conn, &lead, relayed, now_unix()))
    {
        log::error!("failed to store lead from {}: {e}", lead.source);
    }

    html_response(wrap(lead_result(relayed)))
}

/// Client-side usage events. Always 204, whatever happens.
fn track_event(req: Request, state: &AppState) -> ResultResp {
    match read_json(req).and_then(|v| {
        serde_json::from_value::<UsageEvent>(v)
            .map_err(|e| ServerError::BadRequest(format!("invalid usage event: {e}")))
    }) {
        Ok(event) => track(&*state.tracker, event),
        Err(e) => log::debug!("ignoring usage event: {e}"),
    }
    no_content()
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// Without a configured token the admin pages don't exist.
fn require_admin_enabled(state: &AppState) -> Result<(), ServerError> {
    if state.admin.is_enabled() {
        Ok(())
    } else {
        Err(ServerError::NotFound)
    }
}

fn admin_access(headers: &HeaderMap, state: &AppState) -> Result<bool, ServerError> {
    require_admin_enabled(state)?;
    Ok(state.admin.is_authorized(headers))
}

fn admin_login(req: Request, state: &AppState) -> ResultResp {
    require_admin_enabled(state)?;
    let form = read_form(req)?;
    let token = form.text("token").unwrap_or_default();

    if !state.admin.verify(&token) {
        log::warn!("rejected admin login attempt");
        return html_response_with_status(
            401,
            pages::admin_login_page(Some("That token didn't match.")),
        );
    }

    let cookie = state
        .admin
        .session_cookie()
        .ok_or(ServerError::InternalError)?;
    redirect_with_cookie("/admin", &cookie)
}

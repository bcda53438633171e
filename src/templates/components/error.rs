use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup, DOCTYPE};

pub fn status_for(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Unauthorized(_) => 401,
        ServerError::Upstream(_) => 502,
        ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
    }
}

/// What the visitor sees. Internal details stay in the log.
pub fn public_message(err: &ServerError) -> String {
    match err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::Upstream(_) => "A service we depend on is unavailable. Please try again.".into(),
        ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
            "Internal Server Error".to_string()
        }
    }
}

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = status_for(&err);
    if status >= 500 {
        log::error!("request failed: {err}");
    } else {
        log::debug!("request rejected: {err}");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(render_error(status, &public_message(&err)).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn render_error(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="container narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    }
}

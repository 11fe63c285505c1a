//! HTTP handlers for the form route.
//!
//! GET renders the empty form. POST decodes the body, validates it when the
//! `save` marker is present, and renders the form again with the outcome.

use crate::domain::FormPost;
use crate::metrics::{Metrics, RequestTimer};
use crate::render::{render_form, render_status_page, FormView};
use crate::services::FormValidator;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Path the form is served on.
pub const FORM_PATH: &str = "/";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// State shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: FormValidator,
    pub metrics: Metrics,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(validator: FormValidator, metrics: Metrics, max_body_bytes: usize) -> Self {
        Self {
            validator,
            metrics,
            max_body_bytes,
        }
    }
}

/// Serve one request, recording metrics and logging the outcome.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let timer = RequestTimer::new(state.metrics.clone());
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = route(req, &state).await;

    let status = response.status();
    tracing::info!(
        %method,
        %path,
        status = status.as_u16(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Request served"
    );
    if status.is_success() {
        timer.complete();
    } else {
        timer.complete_with_error();
    }

    Ok(response)
}

async fn route<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    if req.uri().path() != FORM_PATH {
        return status_page(StatusCode::NOT_FOUND, "No such page.");
    }

    match *req.method() {
        Method::GET | Method::HEAD => show_form(),
        Method::POST => submit_form(req, state).await,
        _ => {
            let mut response =
                status_page(StatusCode::METHOD_NOT_ALLOWED, "Only GET and POST are supported.");
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET, POST"));
            response
        }
    }
}

fn show_form() -> Response<Full<Bytes>> {
    html_response(StatusCode::OK, render_form(&FormView::empty()))
}

async fn submit_form<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let body = match Limited::new(req.into_body(), state.max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => {
            tracing::warn!(limit = state.max_body_bytes, "Form body too large");
            return status_page(StatusCode::PAYLOAD_TOO_LARGE, "The submitted form is too large.");
        }
        Err(e) => {
            tracing::debug!("Failed to read form body: {}", e);
            return status_page(StatusCode::BAD_REQUEST, "The submitted form could not be read.");
        }
    };

    let post = FormPost::parse(&body);
    let view = if post.save {
        let result = state.validator.validate(&post.submission);
        let rejected = result.invalid_fields();
        state.metrics.record_submission(rejected.len());
        tracing::debug!(?rejected, "Form validated");
        FormView::validated(post.submission, result)
    } else {
        FormView::echoed(post.submission)
    };

    html_response(StatusCode::OK, render_form(&view))
}

fn status_page(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let title = status.canonical_reason().unwrap_or("Error");
    html_response(status, render_status_page(title, message))
}

fn html_response(status: StatusCode, html: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(html)));
    *response.status_mut() = status;
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

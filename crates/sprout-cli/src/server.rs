//! HTTP API server
//!
//! Exposes the planner as a JSON API:
//!
//! | Method | Path                               | Success            |
//! |--------|------------------------------------|--------------------|
//! | GET    | `/`                                | service banner     |
//! | POST   | `/api/plans`                       | generated plan     |
//! | GET    | `/api/plans/{id}`                  | stored plan        |
//! | POST   | `/api/plans/{id}/observations`     | observation result |
//!
//! Errors are `{"detail": "..."}` bodies: 422 for validation and malformed
//! JSON, 404 for unknown plans on read. An observation against an unknown
//! plan is not an error; it answers 200 with `ok: false`.

use std::{convert::Infallible, net::SocketAddr};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use serde_json::json;
use sprout_core::{
    params::{AddObservation, CreatePlan, Id, Observation},
    Planner, PlannerError,
};
use tokio::signal::unix::{signal, SignalKind};
use warp::{
    http::{
        header::{
            HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_MAX_AGE,
        },
        StatusCode,
    },
    hyper::body::Bytes,
    reply::{self, Reply, Response},
    Filter, Rejection,
};

/// Maximum accepted request body size.
pub const BODY_LIMIT: u64 = 64 * 1024;

pub const ROOT_MESSAGE: &str = "sprout crop schedule API";

/// Methods advertised to a preflight that does not name one.
const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// Seconds a browser may cache a preflight answer.
const PREFLIGHT_MAX_AGE: &str = "600";

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

fn error_reply(status: StatusCode, detail: impl Into<String>) -> Response {
    let body = ErrorBody {
        detail: detail.into(),
    };
    reply::with_status(reply::json(&body), status).into_response()
}

fn planner_error_reply(err: &PlannerError) -> Response {
    let status = match err {
        PlannerError::PlanNotFound { .. } => StatusCode::NOT_FOUND,
        PlannerError::InvalidInput { .. } | PlannerError::Serialization { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    error_reply(status, err.to_string())
}

fn with_planner(planner: Planner) -> impl Filter<Extract = (Planner,), Error = Infallible> + Clone {
    warp::any().map(move || planner.clone())
}

fn json_body() -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::body::content_length_limit(BODY_LIMIT).and(warp::body::bytes())
}

/// Answers a CORS preflight for any origin, echoing the requested method
/// and headers back as allowed.
fn preflight_reply(method: Option<String>, headers: Option<String>) -> Response {
    let echo = |value: Option<String>, fallback: &'static str| {
        value
            .and_then(|v| HeaderValue::from_str(&v).ok())
            .unwrap_or_else(|| HeaderValue::from_static(fallback))
    };

    let mut response = warp::reply().into_response();
    let allow = response.headers_mut();
    allow.insert(ACCESS_CONTROL_ALLOW_METHODS, echo(method, ALLOWED_METHODS));
    allow.insert(ACCESS_CONTROL_ALLOW_HEADERS, echo(headers, "*"));
    allow.insert(
        ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
    response
}

/// Builds the complete route tree, including CORS and request logging.
pub fn routes(planner: Planner) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    // Non-OPTIONS requests must not surface as 405 from this branch.
    let preflight = warp::options()
        .or_else(|_| async { Err::<(), Rejection>(warp::reject::not_found()) })
        .and(warp::header::optional::<String>("access-control-request-method"))
        .and(warp::header::optional::<String>("access-control-request-headers"))
        .map(preflight_reply);

    let root = warp::path::end()
        .and(warp::get())
        .map(|| reply::json(&json!({ "ok": true, "msg": ROOT_MESSAGE })).into_response());

    let create = warp::path!("api" / "plans")
        .and(warp::post())
        .and(json_body())
        .and(with_planner(planner.clone()))
        .then(create_plan);

    // There is no plan listing; without an ID the collection has nothing to
    // return.
    let missing_id = warp::path!("api" / "plans")
        .and(warp::get())
        .map(|| error_reply(StatusCode::NOT_FOUND, "Plan ID required"));

    let show = warp::path!("api" / "plans" / String)
        .and(warp::get())
        .and(with_planner(planner.clone()))
        .then(show_plan);

    let observe = warp::path!("api" / "plans" / String / "observations")
        .and(warp::post())
        .and(json_body())
        .and(with_planner(planner))
        .then(add_observation);

    preflight
        .or(root)
        .unify()
        .or(create)
        .unify()
        .or(missing_id)
        .unify()
        .or(show)
        .unify()
        .or(observe)
        .unify()
        .recover(handle_rejection)
        .unify()
        .with(warp::reply::with::header("access-control-allow-origin", "*"))
        .with(warp::log("sprout::http"))
}

async fn create_plan(body: Bytes, planner: Planner) -> Response {
    let params = match serde_json::from_slice::<CreatePlan>(&body) {
        Ok(params) => params,
        Err(e) => return planner_error_reply(&PlannerError::from(e)),
    };

    match planner.create_plan(&params).await {
        Ok(plan) => reply::json(&*plan).into_response(),
        Err(e) => planner_error_reply(&e),
    }
}

async fn show_plan(id: String, planner: Planner) -> Response {
    match planner.show_plan(&Id::new(id)).await {
        Ok(plan) => reply::json(&*plan).into_response(),
        Err(e) => planner_error_reply(&e),
    }
}

async fn add_observation(plan_id: String, body: Bytes, planner: Planner) -> Response {
    let observation = match serde_json::from_slice::<Observation>(&body) {
        Ok(observation) => observation,
        Err(e) => return planner_error_reply(&PlannerError::from(e)),
    };
    let params = AddObservation {
        plan_id,
        observation,
    };

    match planner.add_observation(&params).await {
        Ok(result) => reply::json(&result).into_response(),
        Err(e) => planner_error_reply(&e),
    }
}

async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    debug!("request rejected: {err:?}");

    let response = if err.is_not_found() {
        error_reply(StatusCode::NOT_FOUND, "Not Found")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        error_reply(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body exceeds {BODY_LIMIT} bytes"),
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        error_reply(StatusCode::LENGTH_REQUIRED, "Content-Length required")
    } else if err.find::<warp::reject::InvalidHeader>().is_some() {
        error_reply(StatusCode::BAD_REQUEST, "Invalid header")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };
    Ok(response)
}

/// Serve the API on `addr` until SIGINT or SIGTERM.
pub async fn run_http_server(planner: Planner, addr: SocketAddr) -> Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let shutdown = async move {
        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    };

    let (bound, server) = warp::serve(routes(planner))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .with_context(|| format!("Failed to bind HTTP server to {addr}"))?;

    info!("Sprout HTTP server listening on http://{bound}");
    server.await;
    info!("HTTP server shutdown complete");
    Ok(())
}

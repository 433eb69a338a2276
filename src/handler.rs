//! Per-request dispatch.
//!
//! One invocation handles one HTTP request against the `/student` route: the
//! HTTP method selects the operation, the operation runs a single store call,
//! and the outcome becomes the HTTP response. No state survives the request.

use crate::{error, store, student};

use lambda_http::http::{StatusCode, header};
use lambda_http::{Body, Request, RequestExt, Response};

/// Handle one incoming request.
///
/// Dispatches on the HTTP method: `POST` creates (or fully replaces) a
/// record, `GET` reads one by the `id` query parameter, `DELETE` removes one
/// by the `id` query parameter. Every [`error::Error`] raised by an operation
/// is answered with its mapped status and its message as the plain-text body.
pub async fn function_handler<S: store::StudentStore>(
    store: &S,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    let outcome = match event.method().as_str() {
        "DELETE" => delete_student(store, &event).await,
        "GET" => read_student(store, &event).await,
        "POST" => create_student(store, &event).await,
        _ => Err(error::Error::MethodNotAllowed),
    };
    let response = outcome.unwrap_or_else(|err| {
        tracing::error!(error = %err, "request failed");
        text_response(err.status_code(), err.to_string())
    });
    Ok(response)
}

async fn create_student<S: store::StudentStore>(
    store: &S,
    event: &Request,
) -> error::Result<Response<Body>> {
    let student: student::Student = serde_json::from_slice(event.body().as_ref())?;
    store.save(&student).await?;
    json_response(StatusCode::CREATED, &student)
}

async fn read_student<S: store::StudentStore>(
    store: &S,
    event: &Request,
) -> error::Result<Response<Body>> {
    let id = student_id(event)?;
    let student = store.fetch(&id).await?;
    json_response(StatusCode::OK, &student)
}

async fn delete_student<S: store::StudentStore>(
    store: &S,
    event: &Request,
) -> error::Result<Response<Body>> {
    let id = student_id(event)?;
    store.remove(&id).await?;
    Ok(text_response(StatusCode::NO_CONTENT, "Student deleted"))
}

/// The `id` query parameter, rejected before any store access when absent or
/// empty.
fn student_id(event: &Request) -> error::Result<String> {
    let parameters = event.query_string_parameters();
    match parameters.first("id") {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(error::Error::IdNotProvided),
    }
}

fn json_response<T: serde::Serialize>(
    status: StatusCode,
    value: &T,
) -> error::Result<Response<Body>> {
    let payload = serde_json::to_string(value)?;
    let mut response = Response::new(Body::Text(payload));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    Ok(response)
}

fn text_response(status: StatusCode, body: impl Into<String>) -> Response<Body> {
    let mut response = Response::new(Body::Text(body.into()));
    *response.status_mut() = status;
    response
}

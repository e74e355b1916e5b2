//! Constructors for the responses a Lambda handler returns to API Gateway.
//!
//! The error and warning variants write exactly one record to the supplied
//! [`LogSink`] before building the envelope. The fixed field (`error` or `what`)
//! always comes first, followed by the caller's fields in the order given.
//! None of these functions can fail: a handler always gets an envelope back.

use crate::envelope::ResponseEnvelope;
use crate::log_sink::{LogFields, LogSink};
use lambda_http::http::StatusCode;
use std::fmt::Display;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const ACCESS_DENIED: &str = "Access Denied";

/// An envelope with every container initialised and nothing else set.
pub fn new_envelope() -> ResponseEnvelope {
    ResponseEnvelope::new()
}

pub fn respond(
    body: impl Into<String>,
    content_type: impl Into<String>,
    status: StatusCode,
) -> ResponseEnvelope {
    let mut response = new_envelope().with_header("Content-Type", content_type);
    response.status_code = status.as_u16();
    response.body = body.into();
    response
}

pub fn respond_json(body: impl Into<String>, status: StatusCode) -> ResponseEnvelope {
    respond(body, JSON_CONTENT_TYPE, status)
}

/// Logs `message` at error level and returns a response with the given status.
///
/// `body` is used as-is when non-empty, otherwise the error's `Display` text becomes the body.
/// Passing an empty `body` together with an error that renders to nothing is a misuse
/// and panics in debug builds.
pub fn respond_error(
    message: &str,
    body: &str,
    err: impl Display,
    status: StatusCode,
    sink: &dyn LogSink,
    fields: LogFields,
) -> ResponseEnvelope {
    let description = err.to_string();
    let fields = fields.prefixed_by("error", description.as_str());
    sink.error(message, &fields);

    let body = if body.is_empty() {
        description
    } else {
        body.to_string()
    };
    debug_assert!(
        !body.is_empty(),
        "error response for {:?} has neither a body nor an error description",
        message
    );

    let mut response = new_envelope();
    response.status_code = status.as_u16();
    response.body = body;
    response
}

pub fn respond_internal_error(
    message: &str,
    err: impl Display,
    sink: &dyn LogSink,
    fields: LogFields,
) -> ResponseEnvelope {
    respond_error(
        message,
        "",
        err,
        StatusCode::INTERNAL_SERVER_ERROR,
        sink,
        fields,
    )
}

pub fn respond_not_found(
    message: &str,
    what: &str,
    sink: &dyn LogSink,
    fields: LogFields,
) -> ResponseEnvelope {
    warning_response(
        message,
        what,
        StatusCode::NOT_FOUND,
        format!("{} not found", what),
        sink,
        fields,
    )
}

/// `what` only goes to the log; the client always sees the same body.
pub fn respond_forbidden(
    message: &str,
    what: &str,
    sink: &dyn LogSink,
    fields: LogFields,
) -> ResponseEnvelope {
    warning_response(
        message,
        what,
        StatusCode::FORBIDDEN,
        ACCESS_DENIED.to_string(),
        sink,
        fields,
    )
}

pub fn respond_conflict(
    message: &str,
    what: &str,
    sink: &dyn LogSink,
    fields: LogFields,
) -> ResponseEnvelope {
    warning_response(
        message,
        what,
        StatusCode::CONFLICT,
        format!("{} already exists", what),
        sink,
        fields,
    )
}

fn warning_response(
    message: &str,
    what: &str,
    status: StatusCode,
    body: String,
    sink: &dyn LogSink,
    fields: LogFields,
) -> ResponseEnvelope {
    let fields = fields.prefixed_by("what", what);
    sink.warn(message, &fields);

    let mut response = new_envelope();
    response.status_code = status.as_u16();
    response.body = body;
    response
}

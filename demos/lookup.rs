use gateway_responses::configuration::Configuration;
use gateway_responses::observability::init_logging;
use gateway_responses::{
    respond_forbidden, respond_internal_error, respond_json, respond_not_found, LogFields,
    TracingLogSink,
};
use lambda_http::http::StatusCode;
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

// Looks up a widget by the `widgetId` path parameter. `locked` and `broken` stand in
// for an access check and a failing data store.
async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let sink = TracingLogSink;
    let widget_id = event
        .path_parameters_ref()
        .and_then(|params| params.first("widgetId"))
        .unwrap_or("");

    let response = match widget_id {
        "" => respond_not_found("No widget id in path", "widget", &sink, LogFields::new()),
        "locked" => respond_forbidden(
            "Widget access refused",
            widget_id,
            &sink,
            LogFields::new().with("path", event.raw_http_path()),
        ),
        "broken" => respond_internal_error(
            "Failed to read widget",
            "store unavailable",
            &sink,
            LogFields::new().with("widget_id", widget_id),
        ),
        id => respond_json(
            serde_json::json!({ "widget_id": id }).to_string(),
            StatusCode::OK,
        ),
    };

    response.into_http_response()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::load()?;
    init_logging(&config)?;

    run(service_fn(function_handler)).await
}

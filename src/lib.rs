pub mod configuration;
pub mod envelope;
pub mod log_sink;
pub mod observability;
pub mod responses;

pub use envelope::ResponseEnvelope;
pub use log_sink::{LogFields, LogSink, TracingLogSink};
pub use responses::{
    new_envelope, respond, respond_conflict, respond_error, respond_forbidden,
    respond_internal_error, respond_json, respond_not_found,
};

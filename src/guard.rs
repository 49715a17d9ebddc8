use serde_json::Value;
use tracing::debug;

use crate::sanitizer::sanitize_value;

/// Applies the sanitizer to the two request-parameter carriers exactly once
/// per incoming request, before any handler reads them.
///
/// Construct one guard per request from the raw query-string and form-body
/// parameters, call [`sanitize`](Self::sanitize), then hand the guard to the
/// handler. A repeated `sanitize` call on the same guard is a no-op, so
/// middleware stacking cannot double-escape.
pub struct RequestGuard {
    query_params: Value,
    form_params: Value,
    sanitized: bool,
}

impl RequestGuard {
    pub fn new(query_params: Value, form_params: Value) -> Self {
        Self {
            query_params,
            form_params,
            sanitized: false,
        }
    }

    /// Rewrite both carriers with their sanitized form.
    pub fn sanitize(&mut self) {
        if self.sanitized {
            debug!("request parameters already sanitized, skipping");
            return;
        }
        self.query_params = sanitize_value(std::mem::take(&mut self.query_params));
        self.form_params = sanitize_value(std::mem::take(&mut self.form_params));
        self.sanitized = true;
    }

    /// The query-string parameters.
    pub fn query_params(&self) -> &Value {
        &self.query_params
    }

    /// The form-body parameters.
    pub fn form_params(&self) -> &Value {
        &self.form_params
    }

    pub fn is_sanitized(&self) -> bool {
        self.sanitized
    }

    /// Consume the guard, yielding `(query_params, form_params)`.
    pub fn into_parts(self) -> (Value, Value) {
        (self.query_params, self.form_params)
    }
}

pub(crate) mod substitution;

use serde_json::{Map, Value};

/// JSON object type used for template defaults, overrides and builder context.
pub type JsonMap = Map<String, Value>;

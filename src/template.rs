//! # Template
//!
//! A [Template] is a string with named placeholders written as `{name}`,
//! plus an optional mapping of default values fixed at construction.
//!
//! Placeholder names are taken verbatim from the span between a literal `{`
//! and the next literal `}`. There is no escaping and no nesting; a body that
//! needs a literal brace pair simply cannot contain a non-empty one.
//!
//! At render time, [Template::format] overlays per-call overrides onto the
//! defaults (override wins on collision) and substitutes every placeholder
//! with the stringified effective value. Substitution is all-or-nothing: a
//! placeholder covered by neither an override nor a default fails with
//! [errors::MissingVariable] before any string is returned.
//! [Template::validate] is the non-erroring way to probe coverage first.

use std::fmt;
use std::fmt::Formatter;

use log::warn;

use crate::template::errors::MissingVariable;
use crate::utils::substitution::{scan_variables, substitute};
use crate::utils::JsonMap;

/// A reusable prompt template with named placeholders and default values.
#[derive(Debug, Clone)]
#[readonly::make]
pub struct Template {
    /// The raw template body, readonly
    #[readonly]
    pub body: String,

    /// Default values for placeholders, fixed at construction, readonly
    #[readonly]
    pub defaults: JsonMap,

    /// Placeholder names in order of first appearance, scanned once
    variables: Vec<String>,
}

impl Template {
    /// Create a template with no default values.
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_defaults(body, JsonMap::new())
    }

    /// Create a template with default values. Warns if the body does not have
    /// any placeholder.
    pub fn with_defaults(body: impl Into<String>, defaults: JsonMap) -> Self {
        let body = body.into();
        let variables = scan_variables(&body);
        if variables.is_empty() {
            warn!(
                "Your template does not have a placeholder. If this is intended, ignore this \
                message. Otherwise, check whether you have written placeholders correctly.\n\
                Got template:\n{}",
                body
            );
        }
        Self {
            body,
            defaults,
            variables,
        }
    }

    /// Get the raw template body as a string.
    #[inline]
    pub fn str(&self) -> &str {
        &self.body
    }

    /// Placeholder names found in the body, in order of first appearance,
    /// deduplicated.
    pub fn get_variables(&self) -> &[String] {
        &self.variables
    }

    /// Substitute every placeholder with its effective value and return the
    /// completed string.
    ///
    /// The effective mapping starts from the defaults and applies `overrides`
    /// on top; override keys absent from the body are silently unused. The
    /// defaults themselves are never modified. Fails with
    /// [errors::MissingVariable] when a placeholder is covered by neither.
    pub fn format(&self, overrides: &JsonMap) -> Result<String, MissingVariable> {
        let mut effective = self.defaults.clone();
        effective.extend(
            overrides
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        substitute(&self.body, &effective)
    }

    /// True iff every placeholder in the body is covered by the defaults plus
    /// `overrides`. Never errors and performs no substitution.
    pub fn validate(&self, overrides: &JsonMap) -> bool {
        self.variables
            .iter()
            .all(|name| overrides.contains_key(name) || self.defaults.contains_key(name))
    }
}

impl fmt::Display for Template {
    /// Displays the raw, unsubstituted template body.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

pub mod errors {
    use std::error::Error;
    use std::fmt;
    use std::fmt::Formatter;

    /// Error when formatting a template whose placeholder has neither an
    /// override nor a default value.
    #[derive(Debug, Clone)]
    pub struct MissingVariable {
        pub variable: String,
        pub template_variables: Vec<String>,
    }

    impl MissingVariable {
        pub(crate) fn new(variable: impl Into<String>, template_variables: Vec<String>) -> Self {
            MissingVariable {
                variable: variable.into(),
                template_variables,
            }
        }
    }

    impl fmt::Display for MissingVariable {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "Missing required template variable: {}, template requires {:?}",
                self.variable, self.template_variables
            )
        }
    }

    impl Error for MissingVariable {}
}

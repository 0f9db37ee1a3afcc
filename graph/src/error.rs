use crate::qualifier::Qualifier;
use crate::resolver::GraphState;
use thiserror::Error;

/// The main error type for the `fibre_graph` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("No value registered for qualifier {qualifier} of type {type_name}")]
  UnknownQualifier {
    qualifier: Qualifier,
    type_name: &'static str,
  },

  #[error("Binding '{binding}' of {capability} could not be resolved")]
  UnresolvedDependency {
    binding: String,
    capability: &'static str,
    #[source]
    source: Box<Error>,
  },

  #[error("Object graph is {state} and cannot be built again")]
  InvalidState { state: GraphState },

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),
}

impl Error {
  /// The message of this error followed by each of its causes, joined by `": "`.
  pub fn diagnostic(&self) -> String {
    let mut out = self.to_string();
    let mut cause = std::error::Error::source(self);
    while let Some(err) = cause {
      out.push_str(": ");
      out.push_str(&err.to_string());
      cause = err.source();
    }
    out
  }
}

/// A specialized `Result` type for `fibre_graph` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

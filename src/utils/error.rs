use std::fmt;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  MissingHost(String),
  ObserverError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::MissingHost(msg) => write!(f, "Host unavailable: {}", msg),
      AppError::ObserverError(msg) => write!(f, "Intersection observer error: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::AppError;

  #[test]
  fn display_names_the_failing_layer() {
    let err = AppError::MissingHost("no document".into());
    assert_eq!(err.to_string(), "Host unavailable: no document");
    let err = AppError::ObserverError("ctor threw".into());
    assert_eq!(err.to_string(), "Intersection observer error: ctor threw");
  }
}

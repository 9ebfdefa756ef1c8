use reqwest::StatusCode;
use thiserror::Error;

/// Root causes produced by the providers.
///
/// Providers wrap these with `anyhow::Context` as they bubble up, so callers
/// holding an `anyhow::Error` should use [`WeatherError::find_in`] to get at
/// the typed cause.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider answered with a non-success status.
    #[error("{provider} responded with non-success status {status}: {}", truncate_body(.body))]
    Provider {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The response body did not have the expected JSON shape.
    #[error("unable to decode {operation} response")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// No geocoding candidate carried a US country code.
    #[error("could not find US coordinates for '{city}'")]
    NotFound { city: String },

    /// The forecast feed contained no periods.
    #[error("forecast feed contained no periods")]
    NoData,

    /// Connecting, sending, timing out or reading the body failed.
    #[error("request to {provider} failed")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl WeatherError {
    /// Walk an error chain and return the first typed provider error in it.
    pub fn find_in(err: &anyhow::Error) -> Option<&WeatherError> {
        err.chain().find_map(|cause| cause.downcast_ref::<WeatherError>())
    }

    /// Status code of a `Provider` error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WeatherError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn short_body_is_kept() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_body_is_truncated_on_char_boundary() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
    }

    #[test]
    fn find_in_sees_through_context_layers() {
        let err = anyhow::Error::new(WeatherError::Provider {
            provider: "api.weather.gov",
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "down".into(),
        })
        .context("unable to get point from api")
        .context("unable to get forecast information");

        let root = WeatherError::find_in(&err).expect("typed root must be found");
        assert_eq!(root.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(format!("{err:#}").contains("non-success status 503"));
    }

    #[test]
    fn find_in_returns_none_for_foreign_errors() {
        let err: anyhow::Result<()> = Err(std::io::Error::other("disk")).context("reading");
        assert!(WeatherError::find_in(&err.unwrap_err()).is_none());
    }
}

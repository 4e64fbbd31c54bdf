// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status code interpretation
//!
//! Pure classification of (status, body, command) into an [`Outcome`].
//! The `command` discriminator is free text; unrecognized values fall
//! through to the silent or generic branches.

use super::ApiError;
use serde_json::Value;

/// What a completed API call means to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Parsed response data, ready for rendering.
    Data(Value),
    /// A fixed status message with a presentation severity.
    Message(StatusMessage),
    /// Success with nothing to report.
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Presentation tag attached to a message; rendering lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Notice,
    Error,
}

/// Classify one response. Only the 200 path touches the body.
pub fn interpret(status: u16, body: &str, command: Option<&str>) -> Result<Outcome, ApiError> {
    let outcome = match status {
        200 => Outcome::Data(serde_json::from_str(body)?),
        201 => match command {
            Some("stashes") | Some("silence") => info("The stash has been created."),
            _ => Outcome::Silent,
        },
        202 => info("The item was submitted for processing."),
        204 => match command {
            Some("health") => info("Sensu is healthy"),
            Some("aggregates") | Some("stashes") => info("The item was successfully deleted."),
            _ => Outcome::Silent,
        },
        400 => error("The payload is malformed."),
        401 => error("The request requires user authentication."),
        404 => notice("The item does not exist."),
        code => {
            if command == Some("health") {
                error("Sensu is not healthy.")
            } else {
                error(format!(
                    "There was an error while trying to complete your request. Response code: {code}"
                ))
            }
        }
    };

    Ok(outcome)
}

fn message(text: impl Into<String>, severity: Severity) -> Outcome {
    Outcome::Message(StatusMessage {
        text: text.into(),
        severity,
    })
}

fn info(text: impl Into<String>) -> Outcome {
    message(text, Severity::Info)
}

fn notice(text: impl Into<String>) -> Outcome {
    message(text, Severity::Notice)
}

fn error(text: impl Into<String>) -> Outcome {
    message(text, Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text_of(outcome: &Outcome) -> &str {
        match outcome {
            Outcome::Message(m) => &m.text,
            other => panic!("expected a message, got {other:?}"),
        }
    }

    fn severity_of(outcome: &Outcome) -> Severity {
        match outcome {
            Outcome::Message(m) => m.severity,
            other => panic!("expected a message, got {other:?}"),
        }
    }

    #[test]
    fn ok_parses_body_as_json() {
        let outcome = interpret(200, r#"{"a":1}"#, Some("clients")).unwrap();
        assert_eq!(outcome, Outcome::Data(json!({"a": 1})));
    }

    #[test]
    fn ok_with_unparseable_body_is_malformed() {
        let err = interpret(200, "not-json", Some("clients")).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponseBody(_)));
    }

    #[test]
    fn created_reports_stash_for_stashes_and_silence() {
        for command in ["stashes", "silence"] {
            let outcome = interpret(201, "", Some(command)).unwrap();
            assert_eq!(text_of(&outcome), "The stash has been created.");
            assert_eq!(severity_of(&outcome), Severity::Info);
        }
    }

    #[test]
    fn created_is_silent_for_other_commands() {
        assert_eq!(interpret(201, "", Some("resolve")).unwrap(), Outcome::Silent);
        assert_eq!(interpret(201, "", None).unwrap(), Outcome::Silent);
    }

    #[test]
    fn accepted_reports_processing() {
        let outcome = interpret(202, "", Some("resolve")).unwrap();
        assert_eq!(text_of(&outcome), "The item was submitted for processing.");
    }

    #[test]
    fn no_content_reports_health() {
        let outcome = interpret(204, "", Some("health")).unwrap();
        assert_eq!(text_of(&outcome), "Sensu is healthy");
        assert_eq!(severity_of(&outcome), Severity::Info);
    }

    #[test]
    fn no_content_reports_deletion_for_aggregates_and_stashes() {
        for command in ["aggregates", "stashes"] {
            let outcome = interpret(204, "", Some(command)).unwrap();
            assert_eq!(text_of(&outcome), "The item was successfully deleted.");
        }
    }

    #[test]
    fn no_content_is_silent_for_other_commands() {
        assert_eq!(interpret(204, "", Some("clients")).unwrap(), Outcome::Silent);
        assert_eq!(interpret(204, "", None).unwrap(), Outcome::Silent);
    }

    #[test]
    fn bad_request_is_an_error_message() {
        let outcome = interpret(400, "", Some("stashes")).unwrap();
        assert_eq!(text_of(&outcome), "The payload is malformed.");
        assert_eq!(severity_of(&outcome), Severity::Error);
    }

    #[test]
    fn unauthorized_is_an_error_message() {
        let outcome = interpret(401, "", None).unwrap();
        assert_eq!(text_of(&outcome), "The request requires user authentication.");
        assert_eq!(severity_of(&outcome), Severity::Error);
    }

    #[test]
    fn not_found_is_highlighted_regardless_of_command() {
        for command in [Some("clients"), Some("health"), None] {
            let outcome = interpret(404, "", command).unwrap();
            assert_eq!(text_of(&outcome), "The item does not exist.");
            assert_eq!(severity_of(&outcome), Severity::Notice);
        }
    }

    #[test]
    fn unknown_status_reports_unhealthy_for_health() {
        let outcome = interpret(500, "", Some("health")).unwrap();
        assert_eq!(text_of(&outcome), "Sensu is not healthy.");
        assert_eq!(severity_of(&outcome), Severity::Error);
    }

    #[test]
    fn unknown_status_reports_generic_error_with_code() {
        let outcome = interpret(500, "", Some("clients")).unwrap();
        assert!(text_of(&outcome).contains("Response code: 500"));
        assert_eq!(severity_of(&outcome), Severity::Error);

        let outcome = interpret(503, "", None).unwrap();
        assert!(text_of(&outcome).contains("Response code: 503"));
    }
}

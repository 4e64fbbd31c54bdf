// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outcome rendering

use crate::api::{Outcome, Severity, StatusMessage};
use colored::Colorize;

/// Render an outcome to stdout. Silent outcomes print nothing.
pub fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Data(value) => {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            println!("{pretty}");
        }
        Outcome::Message(message) => println!("{}", styled(message)),
        Outcome::Silent => {}
    }
}

fn styled(message: &StatusMessage) -> String {
    match message.severity {
        Severity::Info => message.text.clone(),
        Severity::Notice => message.text.cyan().to_string(),
        Severity::Error => message.text.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_text_survives_without_color() {
        colored::control::set_override(false);

        let message = StatusMessage {
            text: "The item does not exist.".to_string(),
            severity: Severity::Notice,
        };
        assert_eq!(styled(&message), "The item does not exist.");

        colored::control::unset_override();
    }
}

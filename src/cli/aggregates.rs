// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manage aggregates

use super::AggregateAction;
use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;

pub async fn execute(config: &Config, verbose: bool, action: AggregateAction) -> Result<()> {
    let spec = match action {
        AggregateAction::List { check } => match check {
            Some(check) => RequestSpec::get(format!("/aggregates/{check}")),
            None => RequestSpec::get("/aggregates"),
        },
        AggregateAction::Delete { check } => RequestSpec::delete(format!("/aggregates/{check}")),
    };

    super::dispatch(config, verbose, "aggregates", spec).await
}

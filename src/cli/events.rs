// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! List current events

use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;

pub async fn execute(
    config: &Config,
    verbose: bool,
    client: Option<String>,
    check: Option<String>,
) -> Result<()> {
    let path = match (client, check) {
        (Some(client), Some(check)) => format!("/events/{client}/{check}"),
        (Some(client), None) => format!("/events/{client}"),
        _ => "/events".to_string(),
    };

    super::dispatch(config, verbose, "events", RequestSpec::get(path)).await
}

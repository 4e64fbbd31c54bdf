// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolve an event

use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;
use serde_json::json;

pub async fn execute(config: &Config, verbose: bool, client: String, check: String) -> Result<()> {
    let payload = json!({ "client": client, "check": check });

    super::dispatch(config, verbose, "resolve", RequestSpec::post("/resolve", payload)).await
}

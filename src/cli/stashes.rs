// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manage stashes

use super::StashAction;
use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;
use serde_json::json;

pub async fn execute(config: &Config, verbose: bool, action: StashAction) -> Result<()> {
    let spec = match action {
        StashAction::List => RequestSpec::get("/stashes"),
        StashAction::Create { path, expire } => {
            let mut payload = json!({
                "path": path,
                "content": { "timestamp": chrono::Utc::now().timestamp() },
            });
            if let Some(expire) = expire {
                payload["expire"] = json!(expire);
            }
            RequestSpec::post("/stashes", payload)
        }
        StashAction::Delete { path } => RequestSpec::delete(format!("/stashes/{path}")),
    };

    super::dispatch(config, verbose, "stashes", spec).await
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Silence a client or check via a silence stash

use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;
use serde_json::json;

pub async fn execute(
    config: &Config,
    verbose: bool,
    client: String,
    check: Option<String>,
    reason: Option<String>,
    expire: Option<u64>,
) -> Result<()> {
    let path = match check {
        Some(check) => format!("silence/{client}/{check}"),
        None => format!("silence/{client}"),
    };

    let mut content = json!({ "timestamp": chrono::Utc::now().timestamp() });
    if let Some(reason) = reason {
        content["reason"] = json!(reason);
    }

    let mut payload = json!({ "path": path, "content": content });
    if let Some(expire) = expire {
        payload["expire"] = json!(expire);
    }

    super::dispatch(config, verbose, "silence", RequestSpec::post("/stashes", payload)).await
}

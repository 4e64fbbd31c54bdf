// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! List or show clients

use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;

pub async fn execute(config: &Config, verbose: bool, name: Option<String>) -> Result<()> {
    let path = match name {
        Some(name) => format!("/clients/{name}"),
        None => "/clients".to_string(),
    };

    super::dispatch(config, verbose, "clients", RequestSpec::get(path)).await
}

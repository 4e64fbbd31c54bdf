// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Show Sensu version and transport information

use crate::api::RequestSpec;
use crate::config::Config;
use anyhow::Result;

pub async fn execute(config: &Config, verbose: bool) -> Result<()> {
    super::dispatch(config, verbose, "info", RequestSpec::get("/info")).await
}

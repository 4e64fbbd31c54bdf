// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Print the loaded configuration

use crate::config::Config;
use anyhow::Result;

pub fn execute(config: &Config) -> Result<()> {
    let mut shown = config.clone();
    if shown.api.password.is_some() {
        shown.api.password = Some("********".to_string());
    }

    print!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

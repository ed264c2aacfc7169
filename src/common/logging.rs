// Copyright (c) 2026 Grim Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Logger setup shared by all subcommands.
use anyhow::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Level used when RUST_LOG is not set.
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Start logging to stderr; stdout is reserved for tool output. Must be
/// called once at startup and the handle kept alive until exit.
pub fn init_logging(debug: bool) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_level(debug))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}

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

use anyhow::Result;
use std::env;

use grim_devtools::cli::Cli;
use grim_devtools::common::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::try_parse_args(env::args_os()).unwrap_or_else(|e| e.exit());
    let _logger = init_logging(cli.debug)?;
    cli.run()
}

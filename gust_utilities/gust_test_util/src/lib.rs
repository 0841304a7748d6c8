// Copyright 2015-2023 Swim Inc.
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

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a subscriber that prints the trace messages of the given targets. Only the first call
/// has any effect so tests may call this freely.
///
/// # Arguments
///
/// * `directives` - Filter directives such as `"gust_sync=trace"`. Directives that cannot be
///   parsed are ignored.
pub fn init_trace<'a, I>(directives: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let directives = directives.into_iter().collect::<Vec<_>>();
    INIT.call_once(move || {
        let filter = directives
            .into_iter()
            .filter_map(|directive| directive.parse::<Directive>().ok())
            .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);

        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

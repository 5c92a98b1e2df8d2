// SPDX-FileCopyrightText: 2023 Marshall Wace <opensource@mwam.com>
// SPDX-License-Identifier: Apache-2.0
// SPDX-FileContributor: Tim Kendrick <t.kendrick@mwam.com> https://github.com/timkendrickmw
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    /// Maximum number of call frames retained on an error value
    pub call_trace_limit: Option<usize>,
    /// Enter a tracing span for every function application
    pub debug_applications: bool,
}
impl EvaluationOptions {
    const DEFAULT: Self = Self {
        call_trace_limit: None,
        debug_applications: false,
    };
    pub fn debug() -> Self {
        Self {
            debug_applications: true,
            ..Default::default()
        }
    }
    pub fn from_json(input: &str) -> Result<Self, String> {
        serde_json::from_str(input).map_err(|err| format!("Invalid evaluation options: {}", err))
    }
}
impl Default for EvaluationOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static OPTIONS: OnceLock<EvaluationOptions> = OnceLock::new();
static DEFAULT_OPTIONS: EvaluationOptions = EvaluationOptions::DEFAULT;

/// Installs process-wide evaluation options. Options can only be configured once; subsequent
/// attempts return the rejected options.
pub fn configure(options: EvaluationOptions) -> Result<(), EvaluationOptions> {
    OPTIONS.set(options)?;
    debug!(
        call_trace_limit = ?options.call_trace_limit,
        debug_applications = options.debug_applications,
        "Configured evaluation options"
    );
    Ok(())
}

pub fn options() -> &'static EvaluationOptions {
    OPTIONS.get().unwrap_or(&DEFAULT_OPTIONS)
}

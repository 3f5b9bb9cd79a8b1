// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Draw result rendering.

use drawlot::DrawResult;
use drawlot_domain::Group;
use serde::Serialize;

/// Width of the rule above the summary and the results.
const MAJOR_RULE: usize = 100;

/// Width of the rule between sections and groups.
const MINOR_RULE: usize = 50;

/// The shape of the JSON report.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    /// The total number of entries drawn.
    total_entries: usize,
    /// The fixed group size.
    group_size: usize,
    /// The number of groups.
    total_groups: usize,
    /// The filled groups, in creation order.
    groups: &'a [Group],
}

/// Renders the draw summary and every group, one member per line.
#[must_use]
pub fn render_text(result: &DrawResult) -> String {
    let major: String = "*".repeat(MAJOR_RULE);
    let minor: String = "*".repeat(MINOR_RULE);

    let mut lines: Vec<String> = vec![
        major.clone(),
        String::from("Total Entry Count:"),
        result.plan.total_entries().to_string(),
        minor.clone(),
        String::from("Group Size:"),
        result.plan.group_size().to_string(),
        minor.clone(),
        String::from("Number Of Groups:"),
        result.plan.total_groups().to_string(),
        major,
        String::from("Draw Results:"),
    ];

    for group in &result.groups {
        lines.push(minor.clone());
        lines.push(group.to_string());
    }

    let mut rendered: String = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// Renders the draw result as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns a serialization error if the result cannot be encoded, which
/// cannot happen for values produced by the engine.
pub fn render_json(result: &DrawResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        total_entries: result.plan.total_entries(),
        group_size: result.plan.group_size(),
        total_groups: result.plan.total_groups(),
        groups: &result.groups,
    })
}

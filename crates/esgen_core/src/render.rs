use crate::consts::{GO_LITERAL_PREFIX, GO_LITERAL_SUFFIX};
use crate::enum_set::EnumSet;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `values :=map[uint64]bool{ ... }` source text.
    #[default]
    Go,
    /// Pretty-printed serde form of [`EnumSet`].
    Json,
}

/// Renders every key of `0..max` in ascending order, one `"{i} : {flag},"` line each.
/// Keys without an explicit entry render as `false`.
pub fn go_literal(es: &EnumSet) -> String {
    let cap = GO_LITERAL_PREFIX.len()
        + GO_LITERAL_SUFFIX.len()
        + (es.max().min(1 << 16) as usize) * 12;
    let mut out = String::with_capacity(cap);
    out.push_str(GO_LITERAL_PREFIX);
    for i in 0..es.max() {
        // writing into a String cannot fail
        let _ = writeln!(out, "{i} : {},", es.contains(i));
    }
    out.push_str(GO_LITERAL_SUFFIX);
    out
}

pub fn render(es: &EnumSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Go => Ok(go_literal(es)),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(es)?;
            s.push('\n');
            Ok(s)
        }
    }
}

use serde::Serialize;

use crate::error::Result;

pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;

pub const DOCUMENT_START: &str = "---\n";

/// True for a block scalar header such as `|`, `|-`, `>+` or `|2-`
fn is_block_scalar_header(token: &str) -> bool {
    let mut chars = token.chars();
    if !matches!(chars.next(), Some('|' | '>')) {
        return false;
    }
    let rest = chars.as_str();
    rest.len() <= 2
        && rest
            .chars()
            .all(|c| c == '-' || c == '+' || c.is_ascii_digit())
}

/// Indent block sequences that sit directly under a mapping key, so that
///
/// ```text
/// interfaces:
/// - name: X
/// ```
///
/// becomes `interfaces:` followed by `  - name: X`. Nested levels shift
/// cumulatively; everything else is left untouched. The body of a block
/// scalar (`key: |-`) moves with its key and is never read as structure.
pub fn indent_sequences(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len() + yaml.len() / 4);
    // Key column of every open indentless sequence
    let mut open: Vec<usize> = Vec::new();
    let mut pending_key: Option<usize> = None;
    // Column of the node owning an open block scalar
    let mut block_owner: Option<usize> = None;

    for line in yaml.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let body = &line[indent..];

        if let Some(owner) = block_owner {
            if body.is_empty() {
                out.push('\n');
                continue;
            }
            if indent > owner {
                for _ in 0..open.len() * 2 {
                    out.push(' ');
                }
                out.push_str(line);
                out.push('\n');
                continue;
            }
            block_owner = None;
        }

        let is_item = body == "-" || body.starts_with("- ");

        while let Some(&key_col) = open.last() {
            if indent > key_col || (indent == key_col && is_item) {
                break;
            }
            open.pop();
        }
        if let Some(key_col) = pending_key.take() {
            if indent == key_col && is_item {
                open.push(key_col);
            }
        }

        for _ in 0..open.len() * 2 {
            out.push(' ');
        }
        out.push_str(line);
        out.push('\n');

        let mut node_col = indent;
        let mut rest = body;
        while let Some(stripped) = rest.strip_prefix("- ") {
            node_col += 2;
            rest = stripped;
        }
        if is_block_scalar_header(rest) {
            // `- |-`: the item's dash owns the scalar
            block_owner = Some(if node_col > indent { node_col - 2 } else { node_col });
        } else if rest
            .split_once(": ")
            .is_some_and(|(_, value)| is_block_scalar_header(value))
        {
            block_owner = Some(node_col);
        } else if rest.ends_with(':') {
            pending_key = Some(node_col);
        }
    }

    out
}

/// Serialize with insertion-order keys, a leading `---` and indented sequences
pub fn to_yaml_document<T: Serialize>(value: &T) -> Result<String> {
    let body = serde_yaml::to_string(value)?;
    let mut doc = String::from(DOCUMENT_START);
    doc.push_str(&indent_sequences(&body));
    Ok(doc)
}

/// Write `value` to `<dir>/<stem>.<extension>` and return the path written
pub fn write_yaml_document<T: Serialize>(
    value: &T,
    dir: &Path,
    stem: &str,
    extension: &str,
) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", stem, extension));
    let doc = to_yaml_document(value)?;
    fs::write(&path, &doc)?;
    debug!("write_yaml_document: {} bytes to {:?}", doc.len(), path);
    Ok(path)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rename path parsing.
//!
//! Diff summaries encode a rename in the path column:
//!
//! ```text
//! force-app/{B.cls => C.cls}          braced: prefix{old => new}suffix
//! src/{a => b}/Widget.cls             braced with suffix
//! src/{ => sub}/Widget.cls            braced with an empty side
//! old.txt => new.txt                  bare: no common prefix or suffix
//! ```

use crate::error::{Error, Result};

/// Arrow separating the old and new segment.
const ARROW: &str = "=>";

/// A decomposed rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Path before the rename.
    pub old: String,
    /// Path after the rename.
    pub new: String,
}

/// Whether a path uses any rename token.
pub fn has_rename_syntax(path: &str) -> bool {
    path.contains(ARROW) || path.contains('{') || path.contains('}')
}

/// Parse a diff-summary path into a rename.
///
/// Returns `Ok(None)` for plain paths and an error when rename tokens are
/// present but do not form a valid braced or bare rename.
pub fn parse_rename(path: &str) -> Result<Option<Rename>> {
    if !has_rename_syntax(path) {
        return Ok(None);
    }

    let opens = path.matches('{').count();
    let closes = path.matches('}').count();
    let arrows = path.matches(ARROW).count();

    if arrows == 0 {
        return Err(malformed(path, "brace without `=>`"));
    }
    if arrows > 1 {
        return Err(malformed(path, "more than one `=>`"));
    }

    match (opens, closes) {
        (0, 0) => parse_bare(path).map(Some),
        (1, 1) => parse_braced(path).map(Some),
        (o, c) if o != c => Err(malformed(path, "unmatched brace")),
        _ => Err(malformed(path, "more than one brace group")),
    }
}

/// Parse `prefix{old => new}suffix`.
fn parse_braced(path: &str) -> Result<Rename> {
    let (open, close) = match (path.find('{'), path.find('}')) {
        (Some(open), Some(close)) => (open, close),
        _ => return Err(malformed(path, "unmatched brace")),
    };
    if close < open {
        return Err(malformed(path, "`}` before `{`"));
    }

    let prefix = &path[..open];
    let inner = &path[open + 1..close];
    let suffix = &path[close + 1..];

    let Some((old, new)) = inner.split_once(ARROW) else {
        return Err(malformed(path, "`=>` outside braces"));
    };
    let (old, new) = (old.trim(), new.trim());
    if old.is_empty() && new.is_empty() {
        return Err(malformed(path, "both sides of the rename are empty"));
    }

    let rename = Rename {
        old: join_segment(prefix, old, suffix),
        new: join_segment(prefix, new, suffix),
    };
    if !is_file_path(&rename.old) || !is_file_path(&rename.new) {
        return Err(malformed(path, "rename side does not name a file"));
    }
    Ok(rename)
}

/// A joined side must be non-empty and must not name a directory.
fn is_file_path(path: &str) -> bool {
    !path.is_empty() && !path.ends_with('/')
}

/// Parse bare `old => new`.
fn parse_bare(path: &str) -> Result<Rename> {
    let Some((old, new)) = path.split_once(ARROW) else {
        return Err(malformed(path, "missing `=>`"));
    };
    let (old, new) = (old.trim(), new.trim());
    if old.is_empty() || new.is_empty() {
        return Err(malformed(path, "empty side in rename"));
    }
    Ok(Rename {
        old: old.to_string(),
        new: new.to_string(),
    })
}

/// Join `prefix + segment + suffix`, collapsing the doubled separator left
/// behind by an empty segment.
fn join_segment(prefix: &str, segment: &str, suffix: &str) -> String {
    if segment.is_empty() {
        if prefix.ends_with('/') && suffix.starts_with('/') {
            return format!("{}{}", prefix, &suffix[1..]);
        }
        if prefix.is_empty() {
            return suffix.trim_start_matches('/').to_string();
        }
    }
    format!("{}{}{}", prefix, segment, suffix)
}

/// Render an old/new pair the way git's diff summary does.
///
/// The common directory prefix and suffix are factored out of the braces;
/// without either the bare `old => new` form is used.
pub fn format_rename(old: &str, new: &str) -> String {
    let (a, b) = (old.as_bytes(), new.as_bytes());

    let mut pfx = 0;
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        if x != y {
            break;
        }
        if *x == b'/' {
            pfx = i + 1;
        }
    }

    // Walk backwards from the terminator. With a prefix the walk may step one
    // byte into it so a shared slash can anchor the suffix.
    let adjust = usize::from(pfx > 0);
    let (mut ia, mut ib) = (a.len(), b.len());
    let mut sfx = 0;
    while ia + adjust >= pfx && ib + adjust >= pfx {
        let (ca, cb) = (a.get(ia), b.get(ib));
        if ca != cb {
            break;
        }
        if ca == Some(&b'/') {
            sfx = a.len() - ia;
        }
        if ia == 0 || ib == 0 {
            break;
        }
        ia -= 1;
        ib -= 1;
    }

    if pfx + sfx == 0 {
        return format!("{} {} {}", old, ARROW, new);
    }

    let a_mid = old.get(pfx..a.len().saturating_sub(sfx)).unwrap_or("");
    let b_mid = new.get(pfx..b.len().saturating_sub(sfx)).unwrap_or("");
    format!(
        "{}{{{} {} {}}}{}",
        &old[..pfx],
        a_mid,
        ARROW,
        b_mid,
        &old[a.len() - sfx..]
    )
}

fn malformed(path: &str, reason: &str) -> Error {
    Error::MalformedRenamePath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "rename_tests.rs"]
mod tests;

use std::io;
use std::path::{Path, PathBuf};

/// Expands a user-supplied path string into an absolute `PathBuf`.
///
/// Resolves a leading `~` to the invoking user's home directory, substitutes
/// `$VAR` and `${VAR}` environment references, and makes the result absolute
/// relative to the current working directory. References that cannot be
/// resolved are passed through untouched, so the function never fails.
pub fn expand_path(input: &str) -> PathBuf {
    let expanded = expand_vars(&expand_home(input));
    let path = Path::new(&expanded);
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn expand_home(input: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return input.to_string();
    };
    if input == "~" {
        return home.to_string_lossy().into_owned();
    }
    if let Some(rest) = input.strip_prefix("~/") {
        return home.join(rest).to_string_lossy().into_owned();
    }
    input.to_string()
}

fn expand_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('$') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        if let Some(braced) = after.strip_prefix('{') {
            if let Some(end) = braced.find('}') {
                let name = &braced[..end];
                match std::env::var(name) {
                    Ok(value) => out.push_str(&value),
                    Err(_) => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &braced[end + 1..];
                continue;
            }
            // Unterminated ${ is treated as literal text.
            out.push('$');
            rest = after;
            continue;
        }
        let end = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if end == 0 {
            out.push('$');
            rest = after;
            continue;
        }
        let name = &after[..end];
        match std::env::var(name) {
            Ok(value) => out.push_str(&value),
            Err(_) => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[end..];
    }
    out.push_str(rest);
    out
}

/// Walks up from the current working directory looking for a project root
/// marker (`Cargo.toml`, `.git`, or a `conf/` directory). Falls back to the
/// working directory itself when no marker is found.
pub fn project_root() -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let mut dir = cwd.as_path();
    loop {
        for marker in ["Cargo.toml", ".git", "conf"] {
            if dir.join(marker).exists() {
                return Ok(dir.to_path_buf());
            }
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Ok(cwd),
        }
    }
}

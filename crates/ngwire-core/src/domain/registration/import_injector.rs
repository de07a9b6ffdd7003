//! Ensures a named import exists for a registered symbol.
//!
//! New statements are placed directly before the `@NgModule({` anchor, one
//! statement per symbol. Existing clauses are never edited. Commented-out
//! imports and anchors do not count.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::comments::blank_comments;
use crate::domain::error::DomainError;

/// Marks the start of the module's registration declaration.
pub const ANCHOR: &str = "@NgModule({";

static ANCHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@NgModule\s*\(\s*\{").expect("anchor pattern compiles"));

// `[^}]*` lets the braces span lines.
static IMPORT_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\{([^}]*)\}\s*from\s*['"]([^'"\n]*)['"]"#)
        .expect("import pattern compiles")
});

// `Name`, `type Name`, `Name as Local`; the last identifier is the binding.
static BINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:type\s+)?[A-Za-z_$][\w$]*(?:\s+as\s+([A-Za-z_$][\w$]*))?$")
        .expect("binding pattern compiles")
});

/// One `import { a, b } from 'path'` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Names the clause brings into scope (`A as B` yields only `B`).
    pub symbols: Vec<String>,
    pub source_path: String,
}

impl ImportStatement {
    pub fn new(symbol: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            symbols: vec![symbol.into()],
            source_path: source_path.into(),
        }
    }

    pub fn imports(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    /// `import { A, B } from 'path';`
    pub fn render(&self) -> String {
        format!(
            "import {{ {} }} from '{}';",
            self.symbols.join(", "),
            self.source_path
        )
    }
}

/// Every named import statement in `source` outside comments, in file order.
pub fn parse_imports(source: &str) -> Vec<ImportStatement> {
    let code = blank_comments(source);
    IMPORT_CLAUSE
        .captures_iter(&code)
        .map(|caps| ImportStatement {
            symbols: caps[1]
                .split(',')
                .map(str::trim)
                .filter_map(local_binding)
                .collect(),
            source_path: caps[2].to_string(),
        })
        .collect()
}

fn local_binding(specifier: &str) -> Option<String> {
    let caps = BINDING.captures(specifier)?;
    let name = match caps.get(1) {
        Some(alias) => alias.as_str(),
        None => specifier.rsplit(char::is_whitespace).next()?,
    };
    Some(name.to_string())
}

/// `\r\n` if the file already uses it, `\n` otherwise.
fn line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Ensure `symbol` is imported from `import_path`.
///
/// Returns `source` unchanged if any import statement already names
/// `symbol`, whatever its path.
pub fn insert(source: &str, symbol: &str, import_path: &str) -> Result<String, DomainError> {
    if parse_imports(source).iter().any(|i| i.imports(symbol)) {
        trace!(symbol, "already imported");
        return Ok(source.to_string());
    }

    let code = blank_comments(source);
    let anchor = ANCHOR_PATTERN
        .find(&code)
        .ok_or(DomainError::AnchorNotFound { anchor: ANCHOR })?;

    let statement = ImportStatement::new(symbol, import_path).render();
    let eol = line_ending(source);

    let mut out = String::with_capacity(source.len() + statement.len() + eol.len());
    out.push_str(&source[..anchor.start()]);
    out.push_str(&statement);
    out.push_str(eol);
    out.push_str(&source[anchor.start()..]);
    Ok(out)
}

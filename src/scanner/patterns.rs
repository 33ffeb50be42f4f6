use once_cell::sync::Lazy;
use regex::Regex;

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"class[ \t]+(?P<class>[a-zA-Z0-9_]*)[ \t]*:[ \t]*XCTestCase|func[ \t]+(?P<func>test[a-zA-Z0-9_]*)[ \t]*\(\)",
    )
    .unwrap()
});

static IF_LINUX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#if[ \t]+os\(Linux\)").unwrap());

/// A test declaration recognized on a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    /// `class Name: XCTestCase`
    Class(&'a str),
    /// `func testName()`, name includes the `test` prefix.
    Function(&'a str),
}

/// Returns the leftmost declaration on `line`, if any.
pub fn match_declaration(line: &str) -> Option<Declaration<'_>> {
    let caps = DECLARATION.captures(line)?;
    if let Some(name) = caps.name("class") {
        return Some(Declaration::Class(name.as_str()));
    }
    caps.name("func")
        .map(|name| Declaration::Function(name.as_str()))
}

/// Conditional-compilation directives that drive the Linux guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    IfLinux,
    Else,
    End,
}

impl Directive {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_start();
        if IF_LINUX.is_match(line) {
            Some(Self::IfLinux)
        } else if line.starts_with("#else") {
            Some(Self::Else)
        } else if line.starts_with("#end") {
            Some(Self::End)
        } else {
            None
        }
    }
}

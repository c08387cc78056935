//! Structured command-line construction

use std::path::Path;

/// Separator placed between command tokens
pub const TOKEN_SEPARATOR: &str = " ";

/// Ordered list of command tokens joined with a single separator.
///
/// Tokens are not quoted or escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuilder {
    tokens: Vec<String>,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            tokens: vec![program.into()],
        }
    }

    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    pub fn args<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// `-D<name>`
    pub fn define(self, name: &str) -> Self {
        self.arg(format!("-D{}", name))
    }

    /// `-I<path>`
    pub fn include(self, path: impl AsRef<Path>) -> Self {
        self.arg(format!("-I{}", path.as_ref().display()))
    }

    /// `-L<path>`
    pub fn library_path(self, path: impl AsRef<Path>) -> Self {
        self.arg(format!("-L{}", path.as_ref().display()))
    }

    /// `-l<name>`
    pub fn link(self, name: &str) -> Self {
        self.arg(format!("-l{}", name))
    }

    /// `-framework <name>`
    pub fn framework(self, name: &str) -> Self {
        self.args(["-framework", name])
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Render the tokens as one command line
    pub fn build(&self) -> String {
        self.tokens.join(TOKEN_SEPARATOR)
    }

    /// Render the command line with `file` appended as the last token
    pub fn build_for(&self, file: &Path) -> String {
        format!("{}{}{}", self.build(), TOKEN_SEPARATOR, file.display())
    }
}

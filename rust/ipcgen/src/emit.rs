//! Output templates and artifact writing.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use ipcgen_codegen::{CodegenError, Language, Role};
use ipcgen_types::Definitions;

pub const DEFAULT_CLIENT_TEMPLATE: &str = "{filename}-client.{ext}";
pub const DEFAULT_SERVER_TEMPLATE: &str = "{filename}-server.{ext}";

#[derive(Debug)]
pub enum EmitError {
    /// An output template uses a placeholder other than `{filename}` or `{ext}`.
    Template { template: String, placeholder: String },
    Codegen { role: Role, source: CodegenError },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Template {
                template,
                placeholder,
            } => write!(
                f,
                "template {template:?}: unknown placeholder {placeholder:?} (expected {{filename}} or {{ext}})"
            ),
            EmitError::Codegen { role, source } => {
                write!(f, "failed to generate {role} code: {source}")
            }
            EmitError::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Template { .. } => None,
            EmitError::Codegen { source, .. } => Some(source),
            EmitError::Write { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Filename,
    Ext,
}

/// An output path template, checked once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(template: &str) -> Result<Self, EmitError> {
        let error = |placeholder: &str| EmitError::Template {
            template: template.to_owned(),
            placeholder: placeholder.to_owned(),
        };

        let mut pieces = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            if open > 0 {
                pieces.push(Piece::Literal(rest[..open].to_owned()));
            }
            let Some(len) = rest[open..].find('}') else {
                return Err(error(&rest[open..]));
            };
            let name = &rest[open + 1..open + len];
            pieces.push(match name {
                "filename" => Piece::Filename,
                "ext" => Piece::Ext,
                other => return Err(error(other)),
            });
            rest = &rest[open + len + 1..];
        }
        if !rest.is_empty() {
            pieces.push(Piece::Literal(rest.to_owned()));
        }
        Ok(Self { pieces })
    }

    pub fn expand(&self, filename: &str, ext: &str) -> String {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.as_str(),
                Piece::Filename => filename,
                Piece::Ext => ext,
            })
            .collect()
    }
}

/// Writes the client and server artifacts of definition files.
#[derive(Debug, Clone)]
pub struct Emitter {
    language: Language,
    client: Template,
    server: Template,
    command_line: String,
}

impl Emitter {
    pub fn new(
        language: Language,
        client: Template,
        server: Template,
        command_line: impl Into<String>,
    ) -> Self {
        Self {
            language,
            client,
            server,
            command_line: command_line.into(),
        }
    }

    /// `DIR/NAME.json` becomes `DIR/` joined with the role's expanded template.
    pub fn output_path(&self, input: &Path, role: Role) -> PathBuf {
        let template = match role {
            Role::Client => &self.client,
            Role::Server => &self.server,
        };
        let filename = input
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        dir.join(template.expand(&filename, self.language.extension()))
    }

    pub fn banner(&self, input: &Path) -> String {
        let prefix = self.language.comment_prefix();
        format!(
            "{prefix} Generated from {} by running \"{}\".\n\
             {prefix} Do not edit: changes are overwritten on the next run.\n\n",
            input.display(),
            self.command_line
        )
    }

    /// Generate and write one role's artifact, returning where it went.
    pub fn emit(
        &self,
        input: &Path,
        definitions: &Definitions,
        role: Role,
    ) -> Result<PathBuf, EmitError> {
        let body = self
            .language
            .generate(definitions, role)
            .map_err(|source| EmitError::Codegen { role, source })?;
        let path = self.output_path(input, role);

        let mut text = self.banner(input);
        text.push_str(&body);
        tracing::debug!(output = %path.display(), bytes = text.len(), "writing artifact");
        std::fs::write(&path, text).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

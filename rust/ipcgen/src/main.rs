//! ipcgen: generate client and server bindings from interface definitions
//!
//! Run with: `ipcgen [-c TEMPLATE] [-s TEMPLATE] [-l cpp|rust] FILE...`

mod emit;

use std::path::Path;
use std::process::ExitCode;

use facet::Facet;
use facet_args as args;
use ipcgen_codegen::{Language, Role};
use ipcgen_types::Definitions;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::emit::{DEFAULT_CLIENT_TEMPLATE, DEFAULT_SERVER_TEMPLATE, Emitter, Template};

/// Generate client and server IPC bindings from interface definition files
#[derive(Facet)]
struct Cli {
    /// Definition files (JSON) to generate bindings for
    #[facet(args::positional, default)]
    files: Vec<String>,

    /// Client output path template; `{filename}` and `{ext}` are expanded
    #[facet(args::named, short = 'c', default)]
    client: Option<String>,

    /// Server output path template; `{filename}` and `{ext}` are expanded
    #[facet(args::named, short = 's', default)]
    server: Option<String>,

    /// Output language: cpp (default) or rust
    #[facet(args::named, short = 'l', default)]
    lang: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            tracing::error!(failed, "some definition files could not be processed");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Process every file and return how many failed.
fn run() -> Result<usize, Box<dyn std::error::Error>> {
    let cli: Cli = args::from_std_args()?;

    if cli.files.is_empty() {
        return Err("no definition files given".into());
    }
    let language: Language = cli.lang.as_deref().unwrap_or("cpp").parse()?;
    let client = Template::parse(cli.client.as_deref().unwrap_or(DEFAULT_CLIENT_TEMPLATE))?;
    let server = Template::parse(cli.server.as_deref().unwrap_or(DEFAULT_SERVER_TEMPLATE))?;
    let emitter = Emitter::new(language, client, server, command_line());

    let mut failed = 0;
    for file in &cli.files {
        if !process_file(&emitter, Path::new(file)) {
            failed += 1;
        }
    }
    Ok(failed)
}

fn process_file(emitter: &Emitter, input: &Path) -> bool {
    let definitions = match Definitions::load(input) {
        Ok(definitions) => definitions,
        Err(e) => {
            tracing::error!(input = %input.display(), "{e}");
            return false;
        }
    };

    let mut ok = true;
    for role in Role::BOTH {
        match emitter.emit(input, &definitions, role) {
            Ok(output) => {
                tracing::info!(input = %input.display(), output = %output.display(), "generated {role}");
            }
            Err(e) => {
                tracing::error!(input = %input.display(), "{e}");
                ok = false;
            }
        }
    }
    ok
}

/// The invocation as recorded in output banners.
fn command_line() -> String {
    let mut words = std::env::args();
    let program = words
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "ipcgen".to_owned());
    std::iter::once(program).chain(words).collect::<Vec<_>>().join(" ")
}

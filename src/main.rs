//! Brace Render CLI
//!
//! Usage:
//!   brace-render [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -V, --vars <FILE>        Variables file (TOML format)
//!   -s, --set <NAME=VALUE>   Set a variable (repeatable)
//!   -m, --mode <MODE>        Substitution mode: single-pass or sequential
//!   --strict                 Fail on placeholders with no variable
//!   -l, --list               List placeholders instead of rendering
//!   --demo                   Render the hello-world example
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use brace_render::{placeholders, Renderer, SubstitutionMode, Template, VariableFile};

#[derive(Parser)]
#[command(name = "brace-render")]
#[command(about = "Substitute {name} placeholders in text")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Variables file (TOML format)
    #[arg(short = 'V', long = "vars")]
    vars: Option<PathBuf>,

    /// Set a variable, overriding the variables file
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Substitution mode: single-pass or sequential
    #[arg(short, long)]
    mode: Option<SubstitutionMode>,

    /// Fail when a placeholder has no variable
    #[arg(long)]
    strict: bool,

    /// List placeholders found in the template
    #[arg(short, long)]
    list: bool,

    /// Render the hello-world example
    #[arg(long)]
    demo: bool,
}

/// Split `NAME=VALUE` at the first `=`. An empty name is allowed and
/// matches the `{}` token.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if cli.demo {
        run_demo();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load variables
    let mut file = match &cli.vars {
        Some(path) => match VariableFile::from_file(path) {
            Ok(f) => {
                info!(
                    path = %path.display(),
                    count = f.variables.len(),
                    "loaded variables file"
                );
                f
            }
            Err(e) => {
                eprintln!("Error loading variables '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => VariableFile::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.list {
        for p in placeholders(&source) {
            println!("{}\t{}..{}", p.name, p.span.start, p.span.end);
        }
        return;
    }

    if let Some(mode) = cli.mode {
        file.mode = Some(mode);
    }
    let mut renderer = file.into_renderer();
    for (name, value) in &cli.set {
        debug!(variable = %name, "set from command line");
        renderer.set_variable(name, value);
    }

    if cli.strict {
        match renderer.try_render(&source) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprint!("{}", e.format(&source, &filename));
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", renderer.render(&source));
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo() {
    let mut template = Renderer::new();
    template.set_variable("name", "John Doe");
    println!("{}", template.render("Hello, {name}!"));
}

fn print_intro() {
    println!(
        r#"Brace Render - substitute {{name}} placeholders in text

USAGE:
    brace-render [OPTIONS] [TEMPLATE]
    echo '<text>' | brace-render --set name=value

OPTIONS:
    -V, --vars <FILE>        Variables file (TOML, [variables] table)
    -s, --set <NAME=VALUE>   Set a variable (repeatable)
    -m, --mode <MODE>        single-pass (default) or sequential
    --strict                 Fail on placeholders with no variable
    -l, --list               List placeholders in the template
    --demo                   Render the hello-world example
    -h, --help               Print help

QUICK START:
    echo 'Hello, {{name}}!' | brace-render --set 'name=John Doe'

Placeholders without a variable are left as they are.
Set RUST_LOG=debug to see what the renderer does."#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment_splits_at_first_equals() {
        assert_eq!(
            parse_assignment("a=b=c"),
            Ok(("a".to_string(), "b=c".to_string()))
        );
    }

    #[test]
    fn test_parse_assignment_empty_value() {
        assert_eq!(parse_assignment("a="), Ok(("a".to_string(), String::new())));
    }

    #[test]
    fn test_parse_assignment_empty_name() {
        assert_eq!(parse_assignment("=x"), Ok((String::new(), "x".to_string())));
    }

    #[test]
    fn test_parse_assignment_requires_equals() {
        assert!(parse_assignment("name").is_err());
    }

    #[test]
    fn test_cli_collects_assignments() {
        let cli = Cli::try_parse_from(["brace-render", "-s", "a=1", "--set", "b=x=y", "--strict"])
            .expect("Should parse");
        assert_eq!(
            cli.set,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x=y".to_string())
            ]
        );
        assert!(cli.strict);
        assert_eq!(cli.mode, None);
    }
}

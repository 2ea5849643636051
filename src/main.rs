use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::info;

use crate::builder::Builder;
use crate::common::EXIT_CODE_ERROR;
use crate::common::EXIT_CODE_SUCCESS;

mod ast;
mod builder;
mod common;
mod cond;
mod export;
mod nfa;
mod parser;
mod reader;

/// Compile a regular expression into a Thompson NFA.
#[derive(clap::Parser)]
#[command(version, about, long_about = None)]
struct ProgramArgs {
    /// Pattern built from alphanumerics, '.', '|', '*' and parentheses.
    regex: String,

    /// Where to write the NFA as JSON.
    #[arg(short = 'o', long, default_value = "nfa.json")]
    output: PathBuf,

    /// Also write the NFA as a Graphviz digraph.
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Do not print the AST.
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() {
    pretty_env_logger::init();

    info!("regex-nfa starts");

    let args = ProgramArgs::parse();

    match run(&args) {
        Ok(()) => process::exit(EXIT_CODE_SUCCESS),
        Err(err) => {
            println!("Error: {:#}", err);
            process::exit(EXIT_CODE_ERROR)
        }
    }
}

fn run(args: &ProgramArgs) -> anyhow::Result<()> {
    let ast_root = crate::parser::Parser::parse_regex_str(&args.regex)?;

    if !args.quiet {
        println!("AST:");
        print!("{}", ast_root);
    }

    let nfa = Builder::new().build(&ast_root);

    export::write_json(&nfa, &args.output)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    info!("Wrote NFA to {}", args.output.display());

    if let Some(dot) = &args.dot {
        export::write_dot(&nfa, dot)
            .with_context(|| format!("cannot write {}", dot.display()))?;
        info!("Wrote digraph to {}", dot.display());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::{fs, path::Path};

    use crate::{ProgramArgs, run};

    fn args(regex: &str, output: &Path) -> ProgramArgs {
        ProgramArgs {
            regex: regex.to_string(),
            output: output.to_path_buf(),
            dot: None,
            quiet: true,
        }
    }

    #[test]
    fn test_run_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nfa.json");

        run(&args("ab|c", &output)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!("q6", written["Start State"]);
        assert_eq!(serde_json::json!(["q7"]), written["Accept States"]);
    }

    #[test]
    fn test_run_writes_dot() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nfa.json");
        let dot = dir.path().join("nfa.dot");

        let mut program_args = args("a*", &output);
        program_args.dot = Some(dot.clone());
        run(&program_args).unwrap();

        assert!(output.exists());
        assert!(fs::read_to_string(&dot).unwrap().starts_with("digraph nfa {"));
    }

    #[test]
    fn test_run_rejects_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nfa.json");

        let err = run(&args("a**", &output)).unwrap_err();
        assert_eq!(
            "invalid regular expression: repeated operator '*' at position 2",
            format!("{:#}", err)
        );
        assert!(!output.exists());

        let err = run(&args("(a", &output)).unwrap_err();
        assert_eq!(
            "invalid regular expression: unmatched '(' opened at position 0",
            format!("{:#}", err)
        );
        assert!(!output.exists());
    }
}

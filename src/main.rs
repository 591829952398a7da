use std::{fs, process::ExitCode};

use clap::Parser;
use quotient::interpreter::{
    evaluator::evaluate,
    lexer::tokenize,
    parser::parse,
    postfix::{render_postfix, to_postfix},
};
use tracing_subscriber::EnvFilter;

/// quotient evaluates integer arithmetic expressions or converts them to
/// postfix notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quotient to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix (reverse Polish) form instead of the value.
    #[arg(short, long, conflicts_with_all = ["tokens", "tree"])]
    postfix: bool,

    /// Prints the token stream, one `offset token` pair per line.
    #[arg(short, long, conflicts_with = "tree")]
    tokens: bool,

    /// Prints the syntax tree as an S-expression.
    #[arg(long)]
    tree: bool,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let mode = Mode::from(&args);

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match run(mode, &source) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// What the binary prints for its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Value,
    Postfix,
    Tokens,
    Tree,
}

impl From<&Args> for Mode {
    fn from(args: &Args) -> Self {
        if args.tokens {
            Self::Tokens
        } else if args.tree {
            Self::Tree
        } else if args.postfix {
            Self::Postfix
        } else {
            Self::Value
        }
    }
}

fn run(mode: Mode, source: &str) -> Result<String, quotient::error::Error> {
    match mode {
        Mode::Tokens => {
            let lines = tokenize(source)?.into_iter()
                                         .map(|(token, offset)| format!("{offset} {token}"))
                                         .collect::<Vec<_>>();
            Ok(lines.join("\n"))
        },
        Mode::Tree => Ok(parse(source)?.to_string()),
        Mode::Postfix => Ok(render_postfix(&to_postfix(&parse(source)?))),
        Mode::Value => Ok(evaluate(&parse(source)?)?.to_string()),
    }
}

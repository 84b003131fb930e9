use std::io::{stdin, stdout, Write};

use anyhow::anyhow;
use clap::Parser;

use generator::Generator;
use parser::{adjacency::Adjacency, parse_with, Expr, ParseOptions};
use scanner::ScanPolicy;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Format {
    /// Nested tuples, e.g. ('number', '3')
    #[default]
    Tree,
    /// Parent -> children lists
    Adjacency,
    /// Graphviz source
    Dot,
}

/// Parse arithmetic expressions into a parse tree.
#[derive(clap::Parser)]
struct Args {
    /// Expression to parse. Starts a prompt if omitted.
    expression: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Reject characters that are not digits, operators or whitespace.
    #[arg(long)]
    strict: bool,

    /// Reject input left over after the expression.
    #[arg(long)]
    complete: bool,

    /// Print N random expressions together with their trees.
    #[arg(long, value_name = "N")]
    generate: Option<usize>,

    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    #[arg(long, default_value_t = generator::DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn options(&self) -> ParseOptions {
        ParseOptions {
            policy: if self.strict { ScanPolicy::Strict } else { ScanPolicy::default() },
            complete: self.complete,
        }
    }
}

fn render(expr: &Expr, format: Format) -> String {
    match format {
        Format::Tree => expr.to_string(),
        Format::Adjacency => Adjacency::from_expr(expr).to_string().trim_end().to_string(),
        Format::Dot => Adjacency::from_expr(expr).to_dot().trim_end().to_string(),
    }
}

fn run(source: &str, args: &Args) -> anyhow::Result<()> {
    match parse_with(source, args.options()) {
        Ok(expr) => {
            println!("{}", render(&expr, args.format));
            Ok(())
        }
        Err(e) => match e.position() {
            Some((line, col)) => Err(anyhow!("error (l. {line}, c. {col}): {e}")),
            None => Err(anyhow!("error: {e}")),
        },
    }
}

fn run_prompt(args: &Args) -> anyhow::Result<()> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = run(&line, args) {
            println!("{}", e);
        }
    }
}

fn run_generate(count: usize, args: &Args) -> anyhow::Result<()> {
    let generator = match args.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    for source in generator.with_max_depth(args.max_depth).take(count) {
        println!("{source}");
        run(&source, args)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("Parse options: {:?}", args.options());

    match (&args.expression, args.generate) {
        (_, Some(count)) => run_generate(count, &args),
        (Some(expression), None) => run(expression, &args),
        (None, None) => run_prompt(&args),
    }
}

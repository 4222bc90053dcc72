use clap::{Parser, ValueEnum};
use exprtree::{
    BinaryOp, BinaryOperation, CopyTree, Expr, FoldConstants, FunctionCall, Number, Variable,
};
use miette::{Diagnostic, Result};
use tracing::info;

/// exprtree - build, print and transform a sample expression tree
#[derive(Parser, Debug)]
#[command(name = "exprtree")]
#[command(about = "Print abs(<var> * sqrt(32 - 16)) and a transformed copy of it", long_about = None)]
struct Args {
    /// Transformation applied before printing
    #[arg(long, value_enum, default_value_t = Transform::Fold)]
    transform: Transform,

    /// Name of the free variable in the sample tree
    #[arg(long, default_value = "var")]
    var_name: String,

    /// Skip evaluating the trees
    #[arg(long)]
    no_eval: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Transform {
    None,
    Copy,
    Fold,
}

#[derive(Debug, thiserror::Error, Diagnostic)]
enum CliError {
    #[error(transparent)]
    #[diagnostic(
        code(exprtree::construction),
        help("variable names must not be empty")
    )]
    Construction(#[from] exprtree::ConstructionError),

    #[error(transparent)]
    #[diagnostic(code(exprtree::evaluation))]
    Evaluation(#[from] exprtree::EvalError),
}

fn sample_tree(var_name: &str) -> Result<Expr, CliError> {
    let minus = BinaryOperation::new(Number::new(32.0), BinaryOp::Sub, Number::new(16.0));
    let call_sqrt = FunctionCall::new("sqrt", minus)?;
    let var = Variable::new(var_name)?;
    let mult = BinaryOperation::new(var, BinaryOp::Mul, call_sqrt);
    Ok(FunctionCall::new("abs", mult)?.into())
}

fn run(args: &Args) -> Result<(), CliError> {
    let tree = sample_tree(&args.var_name)?;
    println!("{tree}");
    if !args.no_eval {
        println!("= {}", tree.evaluate()?);
    }

    let transformed = match args.transform {
        Transform::None => return Ok(()),
        Transform::Copy => tree.transform(&mut CopyTree),
        Transform::Fold => tree.transform(&mut FoldConstants)?,
    };
    info!(
        before = tree.node_count(),
        after = transformed.node_count(),
        "transformed tree"
    );

    println!("{transformed}");
    if !args.no_eval {
        println!("= {}", transformed.evaluate()?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(&args)?;
    Ok(())
}

// Runs each approach to the expression problem on the same small
// expressions and prints what comes out.

use algebra::{create_test_expr, create_test_expr_ext, EvalAlgebra, EvalAlgebraExt, PrintAlgebra};
use clap::{Parser, ValueEnum};
use combine::combine;
use itertools::Itertools;
use visitor::{EvalVisitor, StringifyVisitor};

#[derive(Debug, Parser)]
struct Cli {
    /// Which demonstration to run.
    #[arg(short, long, value_enum, default_value_t = Demo::All)]
    demo: Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Simple,
    Visitor,
    Algebra,
    Combine,
    All,
}

impl Demo {
    fn expand(self) -> Vec<Demo> {
        match self {
            Demo::All => vec![Demo::Simple, Demo::Visitor, Demo::Algebra, Demo::Combine],
            demo => vec![demo],
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let demos = cli.demo.expand();
    log::info!("running {} demonstration(s)", demos.len());

    println!("{}", report(&demos));

    Ok(())
}

fn report(demos: &[Demo]) -> String {
    demos
        .iter()
        .flat_map(|demo| {
            log::debug!("running {demo:?}");
            sections(*demo)
        })
        .join("\n\n")
}

fn sections(demo: Demo) -> Vec<String> {
    match demo {
        Demo::Simple => vec![
            section(
                "Simple test",
                [format!("1 + (2 + 3) = {}", simple::create_test_expr().eval())],
            ),
            section(
                "SimpleExt test",
                [format!(
                    "4 * (5 + 6) = {}",
                    simple::ext::create_test_expr_ext().eval()
                )],
            ),
        ],
        Demo::Visitor => {
            let expr = visitor::create_test_expr();
            vec![section(
                "Visitor test",
                [
                    format!("Eval: {}", expr.accept(&EvalVisitor)),
                    format!("Stringify: {}", expr.accept(&StringifyVisitor)),
                ],
            )]
        }
        Demo::Algebra => vec![
            section(
                "Algebra test",
                [format!("1 + (2 + 3) = {}", create_test_expr(&EvalAlgebra))],
            ),
            section(
                "AlgebraExt test",
                [
                    format!(
                        "4 * (5 + 6) = {}",
                        create_test_expr_ext(&EvalAlgebraExt::default())
                    ),
                    format!("Print: {}", create_test_expr(&PrintAlgebra)),
                    format!("Print: {}", create_test_expr_ext(&PrintAlgebra)),
                ],
            ),
        ],
        Demo::Combine => {
            let alg = combine(EvalAlgebraExt::default(), PrintAlgebra);
            let (value, text) = create_test_expr(&alg);
            let (value_ext, text_ext) = create_test_expr_ext(&alg);
            vec![section(
                "Combine test",
                [
                    format!("1 + (2 + 3) = ({value}, {text})"),
                    format!("4 * (5 + 6) = ({value_ext}, {text_ext})"),
                ],
            )]
        }
        Demo::All => Demo::All.expand().into_iter().flat_map(sections).collect(),
    }
}

fn section(title: &str, lines: impl IntoIterator<Item = String>) -> String {
    std::iter::once(title.to_string())
        .chain(lines.into_iter().map(|line| format!("   {line}")))
        .join("\n")
}

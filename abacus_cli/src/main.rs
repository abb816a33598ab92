//! # Abacus CLI Application
//!
//! Terminal front end for abacus_core. Every subcommand maps onto one core
//! operation; `--json` prints the core's serialized result instead of the
//! human-readable form.
//!
//! Running `abacus` with no subcommand starts an interactive prompt.
//!
//! ## Logging
//!
//! Diagnostics go through `env_logger`; set `RUST_LOG=debug` to see how
//! expressions are normalized before evaluation.

use std::io::{self, BufRead, Read, Write};
use std::process::ExitCode;

use abacus_core::expression::format_number;
use abacus_core::statistics::{NormalDistribution, StatisticsSummary};
use abacus_core::{
    calculate_statistics, combinations, count_unclosed_parentheses, evaluate, factorial,
    has_balanced_parentheses, is_valid_expression, parse_data_input, permutations, sample_range,
    AngleUnit, CalcError, CalculationResult, GraphSample,
};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "abacus", version, about = "Scientific calculator: expressions, statistics and plots")]
struct Cli {
    /// Angle unit for sin/cos/tan and their inverses (deg or rad)
    #[arg(long, global = true, default_value = "rad")]
    angle: AngleUnit,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression, e.g. "2(3+4)" or "sin(90)"
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Report whether an expression parses and how many parentheses are open
    Check {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Descriptive statistics of a data list ("-" reads stdin)
    Stats {
        #[arg(allow_negative_numbers = true, required = true)]
        data: Vec<String>,
    },
    /// n!
    Fact { n: f64 },
    /// Permutations nPr
    Perm { n: f64, r: f64 },
    /// Combinations nCr
    Comb { n: f64, r: f64 },
    /// Normal distribution functions
    Normal {
        #[arg(value_enum)]
        function: NormalFunction,
        /// x for pdf/cdf, probability for inv
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mean: f64,
        #[arg(long, default_value_t = 1.0)]
        std_dev: f64,
    },
    /// Tabulate f(x) over a range
    Plot {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 20)]
        steps: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum NormalFunction {
    Pdf,
    Cdf,
    Inv,
}

#[derive(Serialize)]
struct ExpressionCheck<'a> {
    expression: &'a str,
    valid: bool,
    balanced: bool,
    unclosed_parentheses: usize,
}

#[derive(Serialize)]
struct ScalarOutput<'a> {
    operation: &'a str,
    value: f64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json = cli.json;

    let outcome = match cli.command {
        Some(command) => run_command(command, cli.angle, json).map(|text| println!("{}", text)),
        None => repl(cli.angle),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if json {
                if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                    if let Ok(error_json) = serde_json::to_string_pretty(calc_error) {
                        eprintln!("{}", error_json);
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Execute one subcommand and return the text to print.
fn run_command(command: Command, angle: AngleUnit, json: bool) -> Result<String> {
    log::debug!("running {:?} ({})", command, angle);

    match command {
        Command::Eval { expression } => {
            let result = evaluate(&expression, angle);
            if json {
                return Ok(serde_json::to_string_pretty(&result)?);
            }
            match result {
                CalculationResult::Success { display_value, .. } => Ok(display_value),
                CalculationResult::Failure { error } => Err(anyhow!(error)),
            }
        }
        Command::Check { expression } => {
            let check = ExpressionCheck {
                expression: &expression,
                valid: is_valid_expression(&expression),
                balanced: has_balanced_parentheses(&expression),
                unclosed_parentheses: count_unclosed_parentheses(&expression),
            };
            if json {
                return Ok(serde_json::to_string_pretty(&check)?);
            }
            Ok(format!(
                "valid: {}\nbalanced: {}\nunclosed parentheses: {}",
                status_icon(check.valid),
                status_icon(check.balanced),
                check.unclosed_parentheses
            ))
        }
        Command::Stats { data } => {
            let text = if data.len() == 1 && data[0] == "-" {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                data.join(" ")
            };
            let summary = calculate_statistics(&parse_data_input(&text));
            if json {
                return Ok(serde_json::to_string_pretty(&summary)?);
            }
            Ok(format_summary(&summary))
        }
        Command::Fact { n } => scalar_output("factorial", factorial(n)?, json),
        Command::Perm { n, r } => scalar_output("permutations", permutations(n, r)?, json),
        Command::Comb { n, r } => scalar_output("combinations", combinations(n, r)?, json),
        Command::Normal {
            function,
            value,
            mean,
            std_dev,
        } => {
            let distribution = NormalDistribution::new(mean, std_dev)?;
            let (operation, result) = match function {
                NormalFunction::Pdf => ("normal_pdf", distribution.pdf(value)),
                NormalFunction::Cdf => ("normal_cdf", distribution.cdf(value)),
                NormalFunction::Inv => ("normal_inverse_cdf", distribution.inverse_cdf(value)?),
            };
            scalar_output(operation, result, json)
        }
        Command::Plot {
            expression,
            from,
            to,
            steps,
        } => {
            let samples = sample_range(&expression, from, to, steps);
            if json {
                return Ok(serde_json::to_string_pretty(&samples)?);
            }
            Ok(format_samples(&samples))
        }
    }
}

fn scalar_output(operation: &str, value: f64, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&ScalarOutput { operation, value })?);
    }
    Ok(format_number(value))
}

fn format_summary(summary: &StatisticsSummary) -> String {
    let mode = if summary.mode.is_empty() {
        "none".to_string()
    } else {
        summary
            .mode
            .iter()
            .map(|v| format_number(*v))
            .collect::<Vec<_>>()
            .join(", ")
    };

    [
        format!("  Count:    {}", summary.count),
        format!("  Sum:      {}", format_number(summary.sum)),
        format!("  Mean:     {}", format_number(summary.mean)),
        format!("  Median:   {}", format_number(summary.median)),
        format!("  Mode:     {}", mode),
        format!("  Variance: {}", format_number(summary.variance)),
        format!("  Std Dev:  {}", format_number(summary.std_dev)),
    ]
    .join("\n")
}

fn format_samples(samples: &[GraphSample]) -> String {
    let mut lines = vec![format!("{:>14}  {:>14}", "x", "f(x)")];
    for sample in samples {
        let y = sample.y.map_or_else(|| "undefined".to_string(), format_number);
        lines.push(format!("{:>14}  {:>14}", format_number(sample.x), y));
    }
    lines.join("\n")
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[NO]" }
}

// ============================================================================
// Interactive prompt
// ============================================================================

#[derive(Debug, PartialEq)]
enum ReplAction {
    Print(String),
    Skip,
    Quit,
}

fn repl(mut angle: AngleUnit) -> Result<()> {
    println!("Abacus - Scientific Calculator");
    println!("==============================");
    println!("Type an expression. :deg / :rad switch angle unit, :quit exits.");
    println!();

    let stdin = io::stdin();
    loop {
        print!("[{}] > ", angle.label());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match handle_repl_line(line.trim(), &mut angle) {
            ReplAction::Print(text) => println!("{}", text),
            ReplAction::Skip => {}
            ReplAction::Quit => break,
        }
    }
    Ok(())
}

fn handle_repl_line(line: &str, angle: &mut AngleUnit) -> ReplAction {
    match line {
        "" => ReplAction::Skip,
        ":quit" | ":q" | ":exit" => ReplAction::Quit,
        ":deg" => {
            *angle = AngleUnit::Degrees;
            ReplAction::Print(format!("angle unit: {}", angle))
        }
        ":rad" => {
            *angle = AngleUnit::Radians;
            ReplAction::Print(format!("angle unit: {}", angle))
        }
        expression => {
            let unclosed = count_unclosed_parentheses(expression);
            match evaluate(expression, *angle) {
                CalculationResult::Success { display_value, .. } => {
                    ReplAction::Print(format!("= {}", display_value))
                }
                CalculationResult::Failure { error } if unclosed > 0 => {
                    ReplAction::Print(format!("Error: {} ({} unclosed)", error, unclosed))
                }
                CalculationResult::Failure { error } => ReplAction::Print(format!("Error: {}", error)),
            }
        }
    }
}

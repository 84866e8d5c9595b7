// Copyright (C) 2023  Alex Crawford
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use exprcalc::{evaluate_postfix, infix_to_postfix, is_separator, Error};
use ignore_result::Ignore;

/// Integer expression calculator supporting + - * / % ^, parentheses and
/// unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Don't print the banner or the farewell.
    #[arg(short, long)]
    quiet: bool,

    /// Prompt printed before each interactive line.
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Expressions to evaluate instead of reading from stdin.
    #[arg(allow_hyphen_values = true)]
    exprs: Vec<String>,
}

const BANNER: &str = "\
Expression Calculator (integers)
Supports: + - * / % ^, parentheses, unary minus
Examples:
  -3 + 4*(2-1) ^ 3
  2*-5 + (7 - -(3))
Enter expression (or empty line to quit):
";

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    if !args.exprs.is_empty() {
        let mut ok = true;
        for expr in &args.exprs {
            ok &= report(&mut stdout, expr).context("writing to stdout")?;
        }
        return Ok(if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if !args.quiet {
        writeln!(stdout, "{BANNER}").context("writing to stdout")?;
    }

    let mut lines = io::stdin().lines();
    loop {
        stdout.write_all(args.prompt.as_bytes()).ignore();
        stdout.flush().ignore();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!(":: error reading from stdin ({err})");
                break;
            }
            None => break,
        };
        if line.trim_matches(is_separator).is_empty() {
            break;
        }
        report(&mut stdout, &line).context("writing to stdout")?;
    }

    if !args.quiet {
        writeln!(stdout, "Goodbye!").context("writing to stdout")?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the postfix form and value of `expr`, or the phase that rejected it.
/// Returns whether the expression evaluated.
fn report(out: &mut impl Write, expr: &str) -> io::Result<bool> {
    let postfix = match infix_to_postfix(expr) {
        Ok(postfix) => postfix,
        Err(err) => return report_error(out, err.into()),
    };
    writeln!(out, "Postfix: {postfix}")?;

    match evaluate_postfix(&postfix) {
        Ok(value) => {
            writeln!(out, "Result: {value}")?;
            Ok(true)
        }
        Err(err) => report_error(out, err.into()),
    }
}

fn report_error(out: &mut impl Write, err: Error) -> io::Result<bool> {
    writeln!(out, "Error ({}): {err}", err.phase())?;
    Ok(false)
}

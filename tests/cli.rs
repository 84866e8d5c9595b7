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

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn exprcalc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_exprcalc"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start exprcalc");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for exprcalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn expression_arguments_may_start_with_minus() {
    let output = exprcalc(&["-2^2", "-3 + 4*(2-1) ^ 3"], "");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout(&output),
        "Postfix: 2 ~ 2 ^\nResult: 4\nPostfix: 3 ~ 4 2 1 - 3 ^ * +\nResult: 1\n"
    );
}

#[test]
fn failing_argument_sets_exit_status() {
    let output = exprcalc(&["1+1", "5%0"], "");
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Postfix: 1 1 +\nResult: 2\nPostfix: 5 0 %\nError (evaluate): Modulo by zero\n"
    );
}

#[test]
fn session_reports_each_line_and_stops_at_blank_line() {
    let output = exprcalc(&["--quiet", "--prompt", ""], "2+3*4\n(1+2\n5/0\n \t\n7\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Postfix: 2 3 4 * +\nResult: 14\n\
         Error (infix->postfix): Mismatched parentheses\n\
         Postfix: 5 0 /\nError (evaluate): Division by zero\n"
    );
}

#[test]
fn session_prints_banner_and_goodbye() {
    let output = exprcalc(&[], "1\n");
    let out = stdout(&output);
    assert!(out.starts_with("Expression Calculator (integers)\n"), "{out}");
    assert!(out.contains("> Postfix: 1\nResult: 1\n"), "{out}");
    assert!(out.ends_with("> Goodbye!\n"), "{out}");
}

#[test]
fn non_ascii_space_is_not_a_blank_line() {
    let output = exprcalc(&["-q", "-p", ""], "\u{a0}\n\n");
    assert_eq!(stdout(&output), "Error (infix->postfix): Invalid character: '\u{a0}'\n");
}

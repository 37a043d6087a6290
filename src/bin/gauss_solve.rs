//! `gauss_solve <file>`: solve the linear system stored in a text file.
//!
//! One matrix row per line; the last column is always the right-hand side.

use std::process::ExitCode;

use numlab::{ErrorKind, NumericError, Precision, parse_exact_matrix, solve, solve_summary};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: gauss_solve <matrix-file>");
        return ExitCode::from(1);
    };

    match run(&path) {
        Ok(lines) => {
            println!("{}", lines.join("\n"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            match err.kind() {
                ErrorKind::FileAccess => ExitCode::from(2),
                ErrorKind::InputFormat | ErrorKind::DegenerateInput => ExitCode::from(3),
            }
        }
    }
}

fn run(path: &str) -> Result<Vec<String>, NumericError> {
    let text = std::fs::read_to_string(path).map_err(|source| NumericError::FileAccess {
        path: path.to_string(),
        source,
    })?;
    let precision = Precision::default();
    let result = solve(parse_exact_matrix(&text)?, &precision)?;
    Ok(solve_summary(&result, &precision))
}

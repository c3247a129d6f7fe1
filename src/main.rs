use clap::Parser;
use std::process;
use vershift::{Operands, Outcome, Version, VersionError};

/// Exit code for a conditional check that answers `false`, kept far away from
/// the usual error codes so scripts can tell "not greater" apart from "bad
/// input".
const EXIT_FALSE: i32 = 100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The version string to operate on
    provided: String,

    /// Test whether the provided version is greater than this version
    /// (separators ignored)
    #[arg(
        long,
        value_name = "VERSION",
        conflicts_with_all = ["lesserthan", "base", "increment", "set", "minimum", "format", "pad"]
    )]
    greaterthan: Option<String>,

    /// Test whether the provided version is lesser than this version
    /// (separators ignored)
    #[arg(
        long,
        value_name = "VERSION",
        conflicts_with_all = ["base", "increment", "set", "minimum", "format", "pad"]
    )]
    lesserthan: Option<String>,

    /// Snap to this version, bumping the next-finer component if already
    /// aligned with it (separators ignored)
    #[arg(long, value_name = "VERSION")]
    base: Option<String>,

    /// Increase components by the amounts provided. Also accepts `major`,
    /// `minor`, `patch`, or `package` (separators ignored)
    #[arg(long, value_name = "VERSION")]
    increment: Option<String>,

    /// Overwrite components with the non-zero values provided (separators
    /// ignored)
    #[arg(long, value_name = "VERSION")]
    set: Option<String>,

    /// Raise components to at least the values provided (separators ignored)
    #[arg(long, value_name = "VERSION")]
    minimum: Option<String>,

    /// Render the result with the separators of this version (numbers
    /// ignored)
    #[arg(long, value_name = "VERSION")]
    format: Option<String>,

    /// Zero-pad each component to the width given at the same position
    /// (separators ignored)
    #[arg(long, value_name = "VERSION")]
    pad: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(String, i32), VersionError> {
    let provided: Version = cli.provided.parse()?;
    let operands = Operands {
        greater: parse_operand(cli.greaterthan.as_deref())?,
        lesser: parse_operand(cli.lesserthan.as_deref())?,
        base: parse_operand(cli.base.as_deref())?,
        increment: parse_operand(cli.increment.as_deref().map(translate_increment))?,
        set: parse_operand(cli.set.as_deref())?,
        minimum: parse_operand(cli.minimum.as_deref())?,
        format: parse_operand(cli.format.as_deref())?,
        pad: parse_operand(cli.pad.as_deref())?,
    };

    Ok(match operands.evaluate(&provided) {
        Outcome::Condition(true) => ("true".to_string(), 0),
        Outcome::Condition(false) => ("false".to_string(), EXIT_FALSE),
        Outcome::Transformed(rendered) => (rendered, 0),
    })
}

fn parse_operand(value: Option<&str>) -> Result<Option<Version>, VersionError> {
    value.map(str::parse).transpose()
}

/// The increment flag accepts symbolic names for the common bump
/// granularities, translated to version strings before parsing.
fn translate_increment(value: &str) -> &str {
    match value {
        "major" => "1",
        "minor" => "0.1",
        "patch" => "0.0.1",
        "package" => "0.0.0.1",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["vershift"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_conditional_flags_conflict() {
        let args = [
            ["1.2.3", "--greaterthan", "1.0", "--lesserthan", "2.0"],
            ["1.2.3", "--greaterthan", "1.0", "--set", "2"],
            ["1.2.3", "--lesserthan", "2.0", "--increment", "major"],
            ["1.2.3", "--greaterthan", "1.0", "--pad", "3"],
            ["1.2.3", "--lesserthan", "2.0", "--format", "9-8"],
        ];

        for case in args {
            let mut full = vec!["vershift"];
            full.extend_from_slice(&case);
            assert!(
                Cli::try_parse_from(full).is_err(),
                "expected conflict for {case:?}"
            );
        }
    }

    #[test]
    fn test_positional_argument_count() {
        assert!(Cli::try_parse_from(["vershift"]).is_err());
        assert!(Cli::try_parse_from(["vershift", "1.2.3", "4.5.6"]).is_err());
    }

    #[test]
    fn test_run_conditional() {
        let args = [
            (vec!["2.0.0", "--greaterthan", "1.9.9"], "true", 0),
            (vec!["1.9.9", "--greaterthan", "1.9.9"], "false", EXIT_FALSE),
            (vec!["1.2", "--lesserthan", "1.2.3"], "true", 0),
            (vec!["1.3", "--lesserthan", "1.2.3"], "false", EXIT_FALSE),
        ];

        for (case, expected_output, expected_code) in args {
            let (output, code) = run(&cli(&case)).unwrap();
            assert_eq!(expected_output, output);
            assert_eq!(expected_code, code);
        }
    }

    #[test]
    fn test_run_transformations() {
        let args = [
            (vec!["1.2.3", "--base", "1.2"], "1.2.4"),
            (vec!["1.2.3", "--increment", "0.0.2"], "1.2.5"),
            (vec!["1.2.3", "--set", "0.1"], "1.1.0"),
            (vec!["1.2.3", "--minimum", "5.6"], "5.6.3"),
            (vec!["1.2.3", "--base", "1.2", "--format", "9-8"], "1-2-4"),
            (vec!["1.2.3", "--pad", "3.3"], "001.002.3"),
            (vec!["v1_2-3", "--increment", "0.0.1"], "v1_2-4"),
            (vec!["1.2.3"], "1.2.3"),
        ];

        for (case, expected) in args {
            let (output, code) = run(&cli(&case)).unwrap();
            assert_eq!(expected, output);
            assert_eq!(0, code);
        }
    }

    #[test]
    fn test_run_symbolic_increments() {
        let args = [
            (vec!["1.2.3", "--increment", "major"], "2.0.0"),
            (vec!["1.2.3", "--increment", "minor"], "1.3.0"),
            (vec!["1.2.3", "--increment", "patch"], "1.2.4"),
            (vec!["1.2.3.4", "--increment", "package"], "1.2.3.5"),
        ];

        for (case, expected) in args {
            let (output, code) = run(&cli(&case)).unwrap();
            assert_eq!(expected, output);
            assert_eq!(0, code);
        }
    }

    #[test]
    fn test_run_bad_provided() {
        let result = run(&cli(&["not-a-version"]));
        assert_eq!(
            Err(VersionError::NoNumbers {
                input: "not-a-version".to_string()
            }),
            result
        );
    }

    #[test]
    fn test_run_bad_operand() {
        let result = run(&cli(&["1.2.3", "--base", "..."]));
        assert_eq!(
            Err(VersionError::NoNumbers {
                input: "...".to_string()
            }),
            result
        );
    }
}

//! Command-line argument handling and help text.
use crate::config::{Config, ErrorPolicy};
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub help: bool,
    pub root: Option<PathBuf>,
    pub skip_invalid: bool,
    pub preview: bool,
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => parsed.help = true,
                "-r" | "--root" => match args.next() {
                    Some(path) => parsed.root = Some(PathBuf::from(path)),
                    None => bail!("--root requires a path"),
                },
                "--skip-invalid" => parsed.skip_invalid = true,
                "--preview" => parsed.preview = true,
                s if s.starts_with('-') => bail!("Unknown option '{}'", s),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        if positional.len() > 2 {
            bail!("Expected at most 2 paths (input file, output directory)");
        }
        let mut positional = positional.into_iter();
        parsed.input = positional.next();
        parsed.output_dir = positional.next();
        Ok(parsed)
    }

    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.skip_invalid {
            config.error_policy = ErrorPolicy::Skip;
        }
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Coursecal v{} - Turn a course schedule spreadsheet into a recurring-event calendar",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [--root <path>] [--skip-invalid] [--preview] [INPUT] [OUTPUT_DIR]",
        binary_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    INPUT                 Schedule workbook (default: input/courses.xlsx)");
    println!("    OUTPUT_DIR            Directory receiving courses.ics (default: output)");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    --skip-invalid        Skip malformed meeting patterns instead of aborting.");
    println!("    --preview             Print every class occurrence; write nothing.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("INPUT FORMAT:");
    println!("    The sheet needs 'Section' and 'Meeting Patterns' columns. Each pattern line reads:");
    println!("    2024-01-16 - 2024-05-06 | Mon Wed Fri | 10:00 a.m.-10:50 a.m. | Building Room 101");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_paths_and_flags() {
        let parsed =
            CliArgs::parse(args(&["--skip-invalid", "in.xlsx", "out", "--root", "/tmp/x"]))
                .unwrap();
        assert!(parsed.skip_invalid);
        assert!(!parsed.preview);
        assert_eq!(parsed.input, Some(PathBuf::from("in.xlsx")));
        assert_eq!(parsed.output_dir, Some(PathBuf::from("out")));
        assert_eq!(parsed.root, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(CliArgs::parse(args(&["--verbose"])).is_err());
        assert!(CliArgs::parse(args(&["a", "b", "c"])).is_err());
        assert!(CliArgs::parse(args(&["--root"])).is_err());
    }

    #[test]
    fn apply_overrides_config() {
        let mut config = Config::default();
        let parsed = CliArgs::parse(args(&["--skip-invalid", "spring.ods"])).unwrap();
        parsed.apply(&mut config);
        assert_eq!(config.input_path, PathBuf::from("spring.ods"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.error_policy, ErrorPolicy::Skip);
    }
}

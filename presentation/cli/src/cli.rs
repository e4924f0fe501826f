use std::path::PathBuf;

use clap::Parser;

/// Replace the Firebase service account in the project's `.env` and JSON file.
#[derive(Parser, Debug)]
#[command(name = "update-firebase-credentials", version)]
pub struct Cli {
    /// Path to the service account JSON file, or the JSON content itself
    #[arg(value_name = "JSON_FILE_OR_CONTENT", allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Project directory holding `.env` [default: parent of the executable's directory]
    #[arg(long, env = "FIREBASE_CREDENTIALS_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,
}

impl Cli {
    /// The input, when exactly one was given.
    pub fn single_input(&self) -> Option<&str> {
        match self.inputs.as_slice() {
            [input] => Some(input.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("update-firebase-credentials").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn should_accept_a_single_input() {
        let cli = parse(&[r#"{"project_id":"p1"}"#]);

        assert_eq!(cli.single_input(), Some(r#"{"project_id":"p1"}"#));
    }

    #[test]
    fn should_reject_zero_or_several_inputs() {
        assert_eq!(parse(&[]).single_input(), None);
        assert_eq!(parse(&["a.json", "b.json"]).single_input(), None);
    }

    #[test]
    fn should_read_project_root_flag() {
        let cli = parse(&["--project-root", "/srv/app", "service.json"]);

        assert_eq!(cli.project_root, Some(PathBuf::from("/srv/app")));
        assert_eq!(cli.single_input(), Some("service.json"));
    }

    #[test]
    fn should_take_hyphen_leading_file_name_as_input() {
        let cli = parse(&["--project-root", "/srv/app", "-sa.json"]);

        assert_eq!(cli.project_root, Some(PathBuf::from("/srv/app")));
        assert_eq!(cli.single_input(), Some("-sa.json"));
    }
}

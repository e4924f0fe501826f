use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

const INLINE: &str = r#"{"project_id":"p1","client_email":"a-b-c@p1.iam.gserviceaccount.com","private_key":"line1\nline2","private_key_id":"abcdefghijklmnop"}"#;
const ENV: &str = "PORT=3000\nFIREBASE_PROJECT_ID=old\nFIREBASE_CLIENT_EMAIL=old@old.iam.gserviceaccount.com\nFIREBASE_PRIVATE_KEY=\"old\"\nDATABASE_URL=postgres://localhost/app\n";

fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_update-firebase-credentials"))
        .arg("--project-root")
        .arg(root)
        .args(args)
        .env_remove("RESTART_COMMAND")
        .env_remove("VERIFY_COMMAND")
        .output()
        .unwrap()
}

fn project_with_env(content: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), content).unwrap();
    dir
}

fn file_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn backups(root: &Path) -> Vec<String> {
    file_names(root)
        .into_iter()
        .filter(|name| name.starts_with(".env.backup."))
        .collect()
}

#[test]
fn should_print_usage_and_exit_1_without_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_update-firebase-credentials"))
        .env_remove("FIREBASE_CREDENTIALS_PROJECT_ROOT")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.starts_with("Usage:\n"));
}

#[test]
fn should_print_usage_and_touch_nothing_with_two_arguments() {
    let project = project_with_env(ENV);

    let output = run(project.path(), &[INLINE, INLINE]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Usage:\n"));
    assert_eq!(file_names(project.path()), vec![".env".to_string()]);
}

#[test]
fn should_update_env_and_save_json_from_inline_content() {
    let project = project_with_env(ENV);

    let output = run(project.path(), &[INLINE]);

    assert!(output.status.success(), "{:?}", output);
    let env = fs::read_to_string(project.path().join(".env")).unwrap();
    assert_eq!(
        env,
        "PORT=3000\nFIREBASE_PROJECT_ID=p1\nFIREBASE_CLIENT_EMAIL=a-b-c@p1.iam.gserviceaccount.com\nFIREBASE_PRIVATE_KEY=\"line1\\nline2\"\nDATABASE_URL=postgres://localhost/app\n"
    );

    let json = fs::read_to_string(project.path().join("p1-firebase-adminsdk-c-abcdefghijkl.json"))
        .unwrap();
    let saved: serde_json::Value = serde_json::from_str(&json).unwrap();
    let expected: serde_json::Value = serde_json::from_str(INLINE).unwrap();
    assert_eq!(saved, expected);
    assert!(json.starts_with("{\n  \"project_id\": \"p1\""));

    let backups = backups(project.path());
    assert_eq!(backups.len(), 1);
    let stamp = backups[0].trim_start_matches(".env.backup.");
    assert_eq!(stamp.len(), 14);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(
        fs::read_to_string(project.path().join(&backups[0])).unwrap(),
        ENV
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Project ID: p1"));
    assert!(stdout.contains("Private Key: 11 characters"));
    assert!(stdout.contains("pm2 restart gig-core"));
}

#[test]
fn should_copy_credential_file_under_its_own_name() {
    let project = project_with_env(ENV);
    let downloads = tempdir().unwrap();
    let source = downloads.path().join("my-service-account.json");
    fs::write(&source, INLINE).unwrap();

    let output = run(project.path(), &[&source.display().to_string()]);

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        fs::read_to_string(project.path().join("my-service-account.json")).unwrap(),
        INLINE
    );
    assert!(
        fs::read_to_string(project.path().join(".env"))
            .unwrap()
            .contains("FIREBASE_PROJECT_ID=p1\n")
    );
    assert!(!project.path().join("p1-firebase-adminsdk-c-abcdefghijkl.json").exists());
}

#[test]
fn should_produce_the_same_env_when_run_twice() {
    let project = project_with_env(ENV);

    assert!(run(project.path(), &[INLINE]).status.success());
    let first = fs::read_to_string(project.path().join(".env")).unwrap();
    assert!(run(project.path(), &[INLINE]).status.success());
    let second = fs::read_to_string(project.path().join(".env")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn should_not_add_keys_missing_from_env() {
    let project = project_with_env("PORT=3000\nFIREBASE_CLIENT_EMAIL=old@x\n");

    let output = run(project.path(), &[INLINE]);

    assert!(output.status.success(), "{:?}", output);
    let env = fs::read_to_string(project.path().join(".env")).unwrap();
    assert_eq!(
        env,
        "PORT=3000\nFIREBASE_CLIENT_EMAIL=a-b-c@p1.iam.gserviceaccount.com\n"
    );
}

#[test]
fn should_fail_and_modify_nothing_on_invalid_input() {
    let project = project_with_env(ENV);

    let output = run(project.path(), &["/definitely/not/here.json"]);

    assert!(!output.status.success());
    assert_eq!(file_names(project.path()), vec![".env".to_string()]);
    assert_eq!(fs::read_to_string(project.path().join(".env")).unwrap(), ENV);
    assert!(!output.stderr.is_empty());
}

#[test]
fn should_fail_when_required_field_is_missing() {
    let project = project_with_env(ENV);

    let output = run(project.path(), &[r#"{"project_id":"p1","client_email":"e@x"}"#]);

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("private_key"));
    assert_eq!(file_names(project.path()), vec![".env".to_string()]);
}

#[test]
fn should_fail_without_creating_env_when_it_is_absent() {
    let project = tempdir().unwrap();

    let output = run(project.path(), &[INLINE]);

    assert!(!output.status.success());
    assert!(file_names(project.path()).is_empty());
}

#[test]
fn should_read_hyphen_leading_file_name_as_a_path() {
    let project = project_with_env(ENV);
    let workdir = tempdir().unwrap();
    fs::write(workdir.path().join("-sa.json"), INLINE).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_update-firebase-credentials"))
        .current_dir(workdir.path())
        .arg("--project-root")
        .arg(project.path())
        .arg("-sa.json")
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(
        fs::read_to_string(project.path().join(".env"))
            .unwrap()
            .contains("FIREBASE_PROJECT_ID=p1\n")
    );
    assert_eq!(
        fs::read_to_string(project.path().join("-sa.json")).unwrap(),
        INLINE
    );
}

#[test]
fn should_report_credential_file_in_banner() {
    let project = project_with_env(ENV);

    let output = run(project.path(), &[INLINE]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("   Credentials: p1-firebase-adminsdk-c-abcdefghijkl.json (saved)\n"));
    assert!(stdout.contains("   Backup: .env.backup."));
    assert!(!stdout.contains("did not read back"));
}


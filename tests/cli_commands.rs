mod common;

use common::{FROZEN_REQUIREMENTS, TestContext};
use predicates::prelude::*;

const POSTGRES_SETUP: &str = "name: Proj1
database:
  engine: postgresql
  name: db1
  user: postgres
  port: 5432
";

#[test]
fn generate_writes_redacted_setup_and_secret_file() {
    let ctx = TestContext::new();
    ctx.write_setup(POSTGRES_SETUP);

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully generated config file"));

    let setup = ctx.read("setup.yaml");
    assert!(setup.contains("engine: $DATABASE_ENGINE"));
    assert!(setup.contains("psycopg2-binary"));
    assert!(!setup.contains("db1"));

    let secrets = ctx.read(".env");
    assert!(secrets.contains("DATABASE_ENGINE=postgresql\n"));
    assert!(secrets.contains("DATABASE_NAME=db1\n"));
    assert!(secrets.contains("DATABASE_PORT=5432\n"));
    assert!(secrets.lines().any(|line| line.starts_with("SECRET_KEY=_") && line.len() == "SECRET_KEY=_".len() + 64));
}

#[test]
fn generate_name_argument_overrides_document() {
    let ctx = TestContext::new();
    ctx.write_setup("name: Proj1\n");

    ctx.cli().args(["generate", "My Site"]).assert().success();

    assert!(ctx.read("setup.yaml").contains("name: My Site"));
}

#[test]
fn generate_is_repeatable_on_its_own_output() {
    let ctx = TestContext::new();
    ctx.write_setup(
        "name: Proj1
database:
  engine: postgresql
  password: pa$word
  option:
    sslmode: require
",
    );

    ctx.cli().arg("generate").assert().success();
    let first = ctx.read(".env");
    ctx.cli().arg("generate").assert().success();
    let second = ctx.read(".env");

    assert!(first.contains("DATABASE_PASSWORD=pa$word\n"));
    assert!(first.contains(r#"DATABASE_OPTION={"sslmode":"require"}"#));
    assert_eq!(first, second);

    let setup = ctx.read("setup.yaml");
    assert!(setup.contains("engine: $DATABASE_ENGINE"));
    assert!(!setup.contains("$DATABASE_DATABASE"));
}

#[test]
fn invalid_database_field_is_reported() {
    let ctx = TestContext::new();
    ctx.write_setup("name: Proj1\ndatabase:\n  engine: postgresql\n  flavour: spicy\n");

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid Config Data"));

    assert!(!ctx.exists(".env"));
}

#[test]
fn missing_custom_env_file_warns_but_continues() {
    let ctx = TestContext::new();
    ctx.write_setup("name: Proj1\n");

    ctx.cli()
        .args(["generate", "--env", "missing.env"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid env file"));
}

#[test]
fn env_file_values_resolve_indirections() {
    let ctx = TestContext::new();
    ctx.write_setup("name: $PROJECT_TITLE\n");
    std::fs::write(ctx.work_dir().join("cli.env"), "PROJECT_TITLE=From Env\n").unwrap();

    ctx.cli().arg("generate").assert().success();

    assert!(ctx.read("setup.yaml").contains("name: From Env"));
}

#[cfg(unix)]
#[test]
fn create_builds_project_tree() {
    let ctx = TestContext::new();
    ctx.write_setup("name: Proj1\nlibraries:\n  - django-rest-framework\n");

    ctx.cli()
        .arg("create")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.. Writing Setup Files"))
        .stdout(predicate::str::contains("5.. Creating Requirement File"))
        .stdout(predicate::str::contains("Project successfully generated"));

    for path in [
        "src/Proj1/settings.py",
        "src/Proj1/config.py",
        "src/Proj1/urls.py",
        "src/Proj1/__init__.py",
        "src/manage.py",
        "src/.gitignore",
        "src/static",
        "src/media",
        "src/template",
    ] {
        assert!(ctx.exists(path), "missing {}", path);
    }

    let settings = ctx.read("src/Proj1/settings.py");
    assert!(settings.contains("'rest_framework',"));
    assert!(settings.contains("ROOT_URLCONF = 'Proj1.urls'"));
    assert_eq!(ctx.read("requirements.txt"), FROZEN_REQUIREMENTS);

    let calls = ctx.pip_calls();
    assert!(calls.contains(&"install djangorestframework".to_string()));
    assert!(calls.contains(&"install django-cors-headers".to_string()));
    assert_eq!(calls.last().map(String::as_str), Some("freeze"));
}

#[cfg(unix)]
#[test]
fn create_twice_reports_existing_project() {
    let ctx = TestContext::new();
    ctx.write_setup("name: Proj1\n");

    ctx.cli().arg("startproject").assert().success();
    let calls_after_first = ctx.pip_calls().len();

    ctx.cli()
        .arg("create")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("2.. Creating Source Folder"))
        .stdout(predicate::str::contains("3.. Installing Libraries").not())
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.pip_calls().len(), calls_after_first);
}

#[cfg(unix)]
#[test]
fn install_reads_secrets_back_from_env_file() {
    let ctx = TestContext::new();
    ctx.write_setup(POSTGRES_SETUP);

    ctx.cli().arg("generate").assert().success();
    ctx.cli().arg("install-dependencies").assert().success();

    assert_eq!(ctx.pip_calls(), vec!["install psycopg2-binary"]);
}

#[cfg(unix)]
#[test]
fn install_uses_existing_manifest() {
    let ctx = TestContext::new();
    ctx.write_setup("name: Proj1\nlibraries: [celery]\n");
    std::fs::write(ctx.work_dir().join("requirements.txt"), "celery\n").unwrap();

    ctx.cli().arg("install").assert().success().stdout(predicate::str::contains("Installed 2 target(s)"));

    let calls = ctx.pip_calls();
    assert_eq!(calls[0], "install celery");
    assert!(calls[1].starts_with("install -r ") && calls[1].ends_with("requirements.txt"));
}

use assert_cmd::{Command, cargo_bin_cmd};
use predicates::prelude::predicate;
use testing::{TestRepo, precommit_with_cspell};

fn repoma(repo: &TestRepo) -> Command {
    let mut cmd = cargo_bin_cmd!("repoma");
    cmd.current_dir(repo.root())
        .env_remove("REPOMA_ROOT")
        .env_remove("REPOMA_AUTHOR_NAME")
        .env_remove("REPOMA_AUTHOR_EMAIL")
        .env_remove("REPOMA_CSPELL_TEMPLATE")
        .env_remove("REPOMA_IGNORE_AUTHOR");
    cmd
}

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_lists_subcommands() {
        let repo = TestRepo::new();
        repoma(&repo)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("check-dev-files"))
            .stdout(predicate::str::contains("set-nb-cells"));
    }

    #[test]
    fn test_version_flag() {
        let repo = TestRepo::new();
        repoma(&repo)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("repoma"));
    }

    #[test]
    fn test_no_args_shows_usage() {
        let repo = TestRepo::new();
        repoma(&repo)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage:"));
    }
}

mod check_dev_files {
    use super::*;

    #[test]
    fn test_empty_repository_exits_zero() {
        let repo = TestRepo::new();
        repoma(&repo).arg("check-dev-files").assert().success();
    }

    #[test]
    fn test_rewritten_files_exit_one() {
        let repo = TestRepo::new();
        repo.write("tox.ini", "[tox]\nenvlist = py\n\n[flake8]\nmax-line-length = 88\n");

        repoma(&repo)
            .arg("check-dev-files")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Section [flake8] of tox.ini has been moved to .flake8"
            ));

        assert!(repo.read(".flake8").contains("max-line-length = 88"));
        repoma(&repo).arg("check-dev-files").assert().success();
    }

    #[test]
    fn test_root_flag_selects_repository() {
        let repo = TestRepo::new();
        let elsewhere = TestRepo::new();
        repo.write("tox.ini", "[flake8]\nmax-line-length = 88\n");

        repoma(&elsewhere)
            .args(["--root"])
            .arg(repo.root())
            .arg("check-dev-files")
            .assert()
            .code(1);

        assert!(repo.exists(".flake8"));
        assert!(!elsewhere.exists(".flake8"));
    }

    #[test]
    fn test_disabled_check_is_skipped() {
        let repo = TestRepo::new();
        repo.write("tox.ini", "[flake8]\nmax-line-length = 88\n");

        repoma(&repo)
            .args(["check-dev-files", "--no-tox"])
            .assert()
            .success();

        assert!(!repo.exists(".flake8"));
    }

    #[test]
    fn test_corrupt_cspell_config_exits_two() {
        let repo = TestRepo::new();
        repo.write(".pre-commit-config.yaml", &precommit_with_cspell());
        repo.write(".cspell.json", "{ not json");

        repoma(&repo)
            .arg("check-dev-files")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Error:"))
            .stderr(predicate::str::contains(".cspell.json"));
    }

    #[test]
    fn test_invalid_settings_file_exits_two() {
        let repo = TestRepo::new();
        repo.write("settings.toml", "ignore_author = \"maybe\"\n");

        repoma(&repo)
            .args(["check-dev-files", "--config", "settings.toml"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to load settings"));
    }
}

mod set_nb_cells {
    use super::*;

    const NOTEBOOK: &str = r##"{
 "cells": [
  {"cell_type": "markdown", "metadata": {}, "source": ["# Title"]}
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 4
}
"##;

    #[test]
    fn test_notebook_is_updated_then_stable() {
        let repo = TestRepo::new();
        repo.write("docs/usage.ipynb", NOTEBOOK);

        repoma(&repo)
            .args(["set-nb-cells", "docs/usage.ipynb"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Updated boilerplate cells in"));

        let notebook = repo.read_json("docs/usage.ipynb");
        assert!(notebook["cells"].as_array().is_some_and(|cells| cells.len() == 3));

        repoma(&repo)
            .args(["set-nb-cells", "docs/usage.ipynb"])
            .assert()
            .success();
    }

    #[test]
    fn test_install_cell_without_package_name_exits_two() {
        let repo = TestRepo::new();
        repo.write("docs/usage.ipynb", NOTEBOOK);

        repoma(&repo)
            .args(["set-nb-cells", "--add-install-cell", "docs/usage.ipynb"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("setup.cfg"));
    }

    #[test]
    fn test_no_files_is_a_no_op() {
        let repo = TestRepo::new();
        repoma(&repo).arg("set-nb-cells").assert().success();
    }
}

mod completion {
    use super::*;

    #[test]
    fn test_bash_completion() {
        let repo = TestRepo::new();
        repoma(&repo)
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("repoma"));
    }
}

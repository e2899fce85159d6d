use std::path::PathBuf;

use checks::{NotebookCellOptions, set_nb_cells};
use config::ConfigPaths;
use errors::CheckError;
use serde_json::json;
use testing::TestRepo;

fn write_notebook(repo: &TestRepo, name: &str) -> PathBuf {
    let notebook = json!({
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["# Analysis\n", "Some text"]},
            {"cell_type": "code", "execution_count": null, "metadata": {}, "outputs": [], "source": ["import numpy as np"]}
        ],
        "metadata": {"language_info": {"name": "python"}},
        "nbformat": 4,
        "nbformat_minor": 4
    });
    repo.write(name, &notebook.to_string());
    repo.path(name)
}

#[test]
fn test_cells_are_added_once() {
    let repo = TestRepo::new();
    repo.write("setup.cfg", "[metadata]\nname = ampform\n");
    let file = write_notebook(&repo, "docs/usage.ipynb");
    let paths = ConfigPaths::new(repo.root());
    let options = NotebookCellOptions {
        add_install_cell: true,
        ..NotebookCellOptions::default()
    };

    let result = set_nb_cells(&paths, std::slice::from_ref(&file), &options);
    match result {
        Err(CheckError::NonConformant(err)) => {
            assert!(err.message().starts_with("Updated boilerplate cells in "));
            assert!(err.message().ends_with("usage.ipynb"));
        }
        other => panic!("Expected NonConformant, got {other:?}")
    }

    let notebook = repo.read_json("docs/usage.ipynb");
    let cells = notebook["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 5);
    assert_eq!(
        cells[0]["source"],
        json!([
            "# WARNING: advised to install a specific version, e.g. ampform==0.1.2\n",
            "%pip install -q ampform"
        ])
    );
    assert_eq!(cells[0]["metadata"]["tags"], json!(["remove-cell", "skip-execution"]));
    assert_eq!(cells[1]["metadata"]["tags"], json!(["remove-cell"]));
    assert_eq!(cells[2]["source"], json!(["```{autolink-concat}\n", "```"]));
    assert_eq!(notebook["metadata"]["language_info"]["name"], json!("python"));

    let written = repo.read("docs/usage.ipynb");
    assert!(written.starts_with("{\n \"cells\": [\n  {\n   \"cell_type\": \"code\""));
    assert!(written.ends_with("}\n"));

    set_nb_cells(&paths, &[file], &options).unwrap();
}

#[test]
fn test_every_modified_notebook_is_reported() {
    let repo = TestRepo::new();
    let files = vec![
        write_notebook(&repo, "a.ipynb"),
        write_notebook(&repo, "b.ipynb"),
    ];

    let result = set_nb_cells(
        &ConfigPaths::new(repo.root()),
        &files,
        &NotebookCellOptions::default()
    );

    let message = match result {
        Err(CheckError::NonConformant(err)) => err.into_message(),
        other => panic!("Expected NonConformant, got {other:?}")
    };
    let lines: Vec<&str> = message.split("\n\n").collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("a.ipynb"));
    assert!(lines[1].ends_with("b.ipynb"));
}

#[test]
fn test_install_cell_requires_package_name() {
    let repo = TestRepo::new();
    let file = write_notebook(&repo, "demo.ipynb");
    let options = NotebookCellOptions {
        add_install_cell: true,
        ..NotebookCellOptions::default()
    };

    let result = set_nb_cells(&ConfigPaths::new(repo.root()), &[file], &options);

    assert!(matches!(result, Err(CheckError::Defect(_))));
}

#[test]
fn test_missing_notebook_is_defect() {
    let repo = TestRepo::new();
    let result = set_nb_cells(
        &ConfigPaths::new(repo.root()),
        &[repo.path("missing.ipynb")],
        &NotebookCellOptions::default()
    );
    assert!(matches!(result, Err(CheckError::Defect(_))));
}

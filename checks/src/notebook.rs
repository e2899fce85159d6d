//! # Notebook Boilerplate Cells
//!
//! Adds or refreshes the standard cells of Jupyter notebooks:
//! - an optional `%pip install` cell, hidden from rendered pages, for
//!   notebook servers that do not install the package themselves
//! - a configuration cell setting SVG figures and `STATIC_WEB_PAGE`
//! - an `autolink-concat` directive before the first Markdown cell
//!
//! A notebook opts out entirely with `<!-- no-set-nb-cells -->` in any
//! Markdown cell, and out of the directive with `<!-- no autolink-concat -->`.

use std::path::{Path, PathBuf};

use adapters::notebook::{cell_source, new_code_cell, new_markdown_cell};
use adapters::{Notebook, NotebookAccessor};
use config::{ConfigFile, ConfigPaths};
use errors::{CheckResult, Defect};
use mk_core::{Executor, Outcome, sync_artifact};
use serde_json::{Value, json};

const SKIP_STATEMENT: &str = "<!-- no-set-nb-cells -->";
const SKIP_AUTOLINK_STATEMENT: &str = "<!-- no autolink-concat -->";
const AUTOLINK_CONCAT_CELL: &str = "```{autolink-concat}\n```";

const CONFIG_CELL: &str = "%config InlineBackend.figure_formats = ['svg']
import os

STATIC_WEB_PAGE = {\"EXECUTE_NB\", \"READTHEDOCS\"}.intersection(os.environ)";
const DISPLAY_IMPORT: &str = "import os\n\nfrom IPython.display import display  # noqa: F401";

/// What `set-nb-cells` should do to each notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookCellOptions {
    pub add_install_cell: bool,
    /// Extras appended to the package, e.g. `doc,viz`
    pub extras_require: Option<String>,
    pub additional_packages: Vec<String>,
    pub no_autolink_concat: bool,
    pub no_config_cell: bool
}

impl NotebookCellOptions {
    fn install_cell(&self, package: &str) -> String {
        let mut content = format!(
            "# WARNING: advised to install a specific version, e.g. {package}==0.1.2\n%pip install -q {package}"
        );
        if let Some(extras) = self.extras_require.as_deref().map(str::trim) {
            if !extras.is_empty() {
                content.push_str(&format!("[{extras}]"));
            }
        }
        let packages: Vec<&str> = self
            .additional_packages
            .iter()
            .map(|package| package.trim())
            .filter(|package| !package.is_empty())
            .collect();
        if !packages.is_empty() {
            content.push(' ');
            content.push_str(&packages.join(" "));
        }
        content
    }

    fn config_cell(&self) -> String {
        let wants_display = self
            .additional_packages
            .iter()
            .any(|package| package.to_lowercase().contains("ipython"));
        if wants_display {
            CONFIG_CELL.replacen("import os", DISPLAY_IMPORT, 1)
        } else {
            CONFIG_CELL.to_string()
        }
    }
}

fn config_cell_metadata() -> Value {
    json!({
        "hideCode": true,
        "hideOutput": true,
        "hidePrompt": true,
        "jupyter": {"source_hidden": true},
        "slideshow": {"slide_type": "skip"},
        "tags": ["remove-cell"]
    })
}

fn install_cell_metadata() -> Value {
    let mut metadata = config_cell_metadata();
    metadata["tags"] = json!(["remove-cell", "skip-execution"]);
    metadata
}

/// Update every notebook in `files`, reporting each one that changed.
///
/// The package name for the install cell comes from `setup.cfg`; it is only
/// required when `add_install_cell` is set.
pub fn set_nb_cells(paths: &ConfigPaths, files: &[PathBuf], options: &NotebookCellOptions) -> CheckResult {
    let package = if options.add_install_cell {
        let Some(name) = crate::setup_cfg::package_name(paths)? else {
            return Err(Defect::parse(
                &paths.path(ConfigFile::SetupCfg),
                "an install cell needs [metadata] name"
            )
            .into());
        };
        Some(name)
    } else {
        None
    };

    let mut executor = Executor::new();
    for file in files {
        executor.run_check(|| update_notebook(file, options, package.as_deref()))?;
    }
    executor.finalize()
}

pub fn update_notebook(path: &Path, options: &NotebookCellOptions, package: Option<&str>) -> Result<Outcome, Defect> {
    let updated = sync_artifact(&NotebookAccessor, path, |notebook| {
        apply_cells(notebook, options, package);
        Ok(())
    })?;
    Ok(match updated {
        Some(()) => Outcome::report(format!("Updated boilerplate cells in {}", path.display())),
        None => Outcome::Unchanged
    })
}

/// Bring the boilerplate cells of `notebook` into canonical form.
pub fn apply_cells(notebook: &mut Notebook, options: &NotebookCellOptions, package: Option<&str>) {
    if notebook.has_markdown_statement(SKIP_STATEMENT) {
        tracing::debug!("Notebook opted out of boilerplate cells");
        return;
    }
    let mut index = 0;
    if let Some(package) = package.filter(|_| options.add_install_cell) {
        notebook.set_code_cell(
            index,
            new_code_cell(&options.install_cell(package), install_cell_metadata())
        );
        index += 1;
    }
    if !options.no_config_cell {
        notebook.set_code_cell(index, new_code_cell(&options.config_cell(), config_cell_metadata()));
    }
    if !options.no_autolink_concat {
        insert_autolink_concat(notebook);
    }
}

fn insert_autolink_concat(notebook: &mut Notebook) {
    if notebook.has_markdown_statement(SKIP_AUTOLINK_STATEMENT) {
        return;
    }
    let Some(index) = notebook.first_markdown_index() else {
        return;
    };
    if cell_source(&notebook.cells()[index]) == AUTOLINK_CONCAT_CELL {
        return;
    }
    notebook.insert_cell(index, new_markdown_cell(AUTOLINK_CONCAT_CELL));
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters::notebook::cell_type;

    fn notebook(cells: Value) -> Notebook {
        Notebook::from_value(json!({
            "cells": cells,
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 4
        }))
        .unwrap()
    }

    #[test]
    fn test_install_cell_content() {
        let options = NotebookCellOptions {
            add_install_cell: true,
            extras_require: Some("doc,viz".to_string()),
            additional_packages: vec!["ipympl".to_string(), " tqdm ".to_string()],
            ..NotebookCellOptions::default()
        };
        assert_eq!(
            options.install_cell("ampform"),
            "# WARNING: advised to install a specific version, e.g. ampform==0.1.2\n%pip install -q ampform[doc,viz] ipympl tqdm"
        );
    }

    #[test]
    fn test_config_cell_with_ipython() {
        let options = NotebookCellOptions {
            additional_packages: vec!["IPython".to_string()],
            ..NotebookCellOptions::default()
        };
        let content = options.config_cell();
        assert!(content.contains("import os\n\nfrom IPython.display import display  # noqa: F401\n"));
        assert!(!NotebookCellOptions::default().config_cell().contains("IPython"));
    }

    #[test]
    fn test_install_metadata_tags() {
        assert_eq!(
            install_cell_metadata()["tags"],
            json!(["remove-cell", "skip-execution"])
        );
        assert_eq!(install_cell_metadata()["hideCode"], json!(true));
    }

    #[test]
    fn test_apply_cells_inserts_before_markdown_title() {
        let mut nb = notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": "# Title"}
        ]));
        let options = NotebookCellOptions {
            add_install_cell: true,
            ..NotebookCellOptions::default()
        };

        apply_cells(&mut nb, &options, Some("ampform"));

        let types: Vec<_> = nb.cells().iter().map(|c| cell_type(c).unwrap()).collect();
        assert_eq!(types, vec!["code", "code", "markdown", "markdown"]);
        assert!(cell_source(&nb.cells()[0]).contains("%pip install -q ampform"));
        assert!(cell_source(&nb.cells()[1]).starts_with("%config InlineBackend"));
        assert_eq!(cell_source(&nb.cells()[2]), AUTOLINK_CONCAT_CELL);
        assert_eq!(cell_source(&nb.cells()[3]), "# Title");
    }

    #[test]
    fn test_apply_cells_is_idempotent() {
        let mut nb = notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": "# Title"},
            {"cell_type": "code", "metadata": {}, "outputs": [], "execution_count": 3, "source": "1 + 1"}
        ]));
        let options = NotebookCellOptions::default();

        apply_cells(&mut nb, &options, None);
        let once = nb.clone();
        apply_cells(&mut nb, &options, None);

        assert_eq!(nb, once);
    }

    #[test]
    fn test_skip_statement() {
        let mut nb = notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": "<!-- no-set-nb-cells -->\n# Title"}
        ]));
        let before = nb.clone();

        apply_cells(&mut nb, &NotebookCellOptions::default(), None);

        assert_eq!(nb, before);
    }

    #[test]
    fn test_autolink_suppressed() {
        let mut nb = notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": "# Title\n<!-- no autolink-concat -->"}
        ]));
        let options = NotebookCellOptions {
            no_config_cell: true,
            ..NotebookCellOptions::default()
        };

        apply_cells(&mut nb, &options, None);

        assert_eq!(nb.cells().len(), 1);
    }
}

use colored::Colorize;

pub fn hint(msg: &str) {
    eprintln!("{} {}", "hint:".cyan().bold(), msg.dimmed());
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), msg);
}

/// Print the combined report of a non-conformant run.
pub fn non_conformant(report: &str) {
    eprintln!("{report}");
    hint("Stage the rewritten files and commit again");
}

/// Print an aborting error with its cause chain.
pub fn defect(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause);
    }
}

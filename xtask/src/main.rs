//! xtask - Build tasks for blocklog
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use blocklog::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for blocklog")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&cmd, "blocklog", &man_dir)?;

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Render `cmd` and its visible subcommands as `<stem>[-sub].1`.
fn render_man(cmd: &Command, stem: &str, man_dir: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let file = man_dir.join(format!("{}.1", stem));
    fs::write(&file, buffer).with_context(|| format!("Failed to write {}", file.display()))?;
    println!("Generated: {}", file.display());

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        render_man(sub, &format!("{}-{}", stem, sub.get_name()), man_dir)?;
    }
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# blocklog Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = sub.get_name();
        markdown.push_str(&format!("- [{}](#blocklog-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str("## blocklog\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    push_arguments(&mut markdown, &cmd);

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = sub.get_name();
        markdown.push_str(&format!("## blocklog {}\n\n", name));
        if let Some(about) = sub.get_about() {
            markdown.push_str(&format!("{}\n\n", about));
        }
        push_arguments(&mut markdown, sub);

        if let Some(long_about) = sub.get_long_about() {
            markdown.push_str("### Description\n\n```\n");
            markdown.push_str(&format!("{}\n", long_about));
            markdown.push_str("```\n\n");
        }

        for nested in sub.get_subcommands().filter(|s| !s.is_hide_set()) {
            markdown.push_str(&format!("#### blocklog {} {}\n\n", name, nested.get_name()));
            if let Some(about) = nested.get_about() {
                markdown.push_str(&format!("{}\n\n", about));
            }
            push_arguments(&mut markdown, nested);
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).context("Failed to write COMMANDS.md")?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(arg.get_id().as_str(), "help" | "version")
}

/// Append "Arguments" and "Options" sections for a command.
fn push_arguments(markdown: &mut String, cmd: &Command) {
    let args: Vec<&Arg> = cmd.get_arguments().filter(|a| !is_builtin(a)).collect();

    let positional: Vec<&&Arg> = args.iter().filter(|a| a.is_positional()).collect();
    if !positional.is_empty() {
        markdown.push_str("### Arguments\n\n");
        for arg in positional {
            markdown.push_str(&format!("- `<{}>`", arg.get_id().as_str().to_uppercase()));
            push_help(markdown, arg);
        }
        markdown.push('\n');
    }

    let options: Vec<&&Arg> = args.iter().filter(|a| !a.is_positional()).collect();
    if !options.is_empty() {
        markdown.push_str("### Options\n\n");
        for arg in options {
            let flag = match (arg.get_short(), arg.get_long()) {
                (Some(s), Some(l)) => format!("-{}, --{}", s, l),
                (None, Some(l)) => format!("--{}", l),
                (Some(s), None) => format!("-{}", s),
                (None, None) => continue,
            };
            markdown.push_str(&format!("- `{}`", flag));
            push_help(markdown, arg);
        }
        markdown.push('\n');
    }
}

fn push_help(markdown: &mut String, arg: &Arg) {
    if let Some(help) = arg.get_help() {
        markdown.push_str(&format!(": {}", help));
    }
    markdown.push('\n');
}

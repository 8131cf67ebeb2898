//! Development tasks for chatcsv
//!
//! Usage: `cargo run -p xtask -- gen-man [--out-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use chatcsv::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "chatcsv development tasks")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for chatcsv and its subcommands
    GenMan {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::GenMan { out_dir } => gen_man(&out_dir),
    }
}

fn gen_man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    write_page(out_dir, "chatcsv", cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let name = format!("chatcsv-{}", sub.get_name());
        write_page(out_dir, &name, sub.clone().name(name.clone()))?;
    }
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;

    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

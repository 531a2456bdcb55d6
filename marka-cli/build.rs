use clap::{Arg, ArgAction, Command};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs; build scripts can't access
// src/ modules, so the completion command is redeclared here.
fn completion_cli() -> Command {
    Command::new("marka")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mark, unmark and render symmetric markup in flashcard fields")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-styles")
                .long("list-styles")
                .help("List configured styles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markers.json configuration file"),
        )
        .subcommand(Command::new("mark").arg(Arg::new("text")).arg(Arg::new("style").long("style")))
        .subcommand(Command::new("unmark").arg(Arg::new("text")))
        .subcommand(Command::new("render").arg(Arg::new("text")))
        .subcommand(Command::new("filter").arg(Arg::new("name")).arg(Arg::new("text")))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    generate_to(Bash, &mut cmd, "marka", &outdir)?;
    generate_to(Zsh, &mut cmd, "marka", &outdir)?;
    generate_to(Fish, &mut cmd, "marka", &outdir)?;

    Ok(())
}

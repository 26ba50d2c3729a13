use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// Build scripts can't access src/ modules, so the definition is repeated here
fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .help("Path to the snapshot file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn page_arg() -> Arg {
    Arg::new("page")
        .long("page")
        .short('p')
        .value_name("ID")
        .help("Id of the page to render")
        .required(true)
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("notion-md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Notion pages into vault-ready Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-pages")
                .long("list-pages")
                .value_name("SNAPSHOT")
                .help("List the pages recorded in a snapshot")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a notion-md.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Render a page to Markdown (default command)")
                .arg(snapshot_arg())
                .arg(page_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no-frontmatter")
                        .long("no-frontmatter")
                        .help("Do not prepend the notion_url / notion_id header")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the block tree of a page")
                .arg(snapshot_arg())
                .arg(page_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "notion-md", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "notion-md", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "notion-md", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}

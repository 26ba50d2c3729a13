// Command-line interface for notion-md
//
// This binary renders Notion pages recorded in a snapshot file into vault Markdown.
//
// A snapshot is the JSON dump of the block listings of one or more pages, page by page, exactly as
// the API returned them (see notion_babel::source::snapshot). The rendering itself lives in
// notion-babel; this crate only picks files, loads configuration and reports errors.
//
// Usage:
//  notion-md <snapshot> --page <id> [-o <file>] [--no-frontmatter]          - Render a page (default)
//  notion-md convert <snapshot> --page <id> [-o <file>] [--no-frontmatter]  - Same as above (explicit)
//  notion-md inspect <snapshot> --page <id>                                 - Show the block tree
//  notion-md --list-pages <snapshot>                                        - List recorded pages
//
// Every command accepts --config <path>, layered over ./notion-md.toml and the built-in defaults.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use notion_babel::formats::treeviz::to_treeviz_str;
use notion_babel::{LogDiagnostics, MarkdownRenderer, RenderRules, SnapshotSource};
use notion_config::{Loader, NotionConfig, LOCAL_CONFIG_FILE};
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("notion-md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Notion pages into vault-ready Markdown")
        .long_about(
            "notion-md renders Notion block trees, recorded in a snapshot file, into\n\
            Obsidian-flavored Markdown.\n\n\
            Commands:\n  \
            - convert: Render a page to Markdown (default)\n  \
            - inspect: Show the block tree of a page\n\n\
            Examples:\n  \
            notion-md snapshot.json --page abc123               # Markdown on stdout\n  \
            notion-md snapshot.json --page abc123 -o page.md    # Markdown to a file\n  \
            notion-md inspect snapshot.json --page abc123       # Block tree\n  \
            notion-md --list-pages snapshot.json                # Recorded pages",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Render a page recorded in a snapshot to Markdown.\n\n\
                    The output starts with a YAML header holding notion_url and notion_id,\n\
                    unless --no-frontmatter is given or [output] frontmatter = false.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    notion-md convert snapshot.json --page abc123\n  \
                    notion-md snapshot.json --page abc123 -o page.md   # 'convert' is optional",
                )
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
                .long_about(
                    "Print one line per block: icon, block type and a short label.\n\n\
                    Children are fetched the same way convert fetches them, so pagination\n\
                    problems in a snapshot show up here too.\n\n\
                    Examples:\n  \
                    notion-md inspect snapshot.json --page abc123",
                )
                .arg(snapshot_arg())
                .arg(page_arg()),
        )
}

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

/// Prefix `convert` when the first argument is not a known subcommand or a flag.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = vec![args[0].clone(), "convert".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    if let Some(path) = matches.get_one::<String>("list-pages") {
        handle_list_pages_command(path);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let config = load_cli_config(
                matches.get_one::<String>("config").map(|s| s.as_str()),
                sub_matches.get_flag("no-frontmatter"),
            );
            handle_convert_command(sub_matches, &config);
        }
        Some(("inspect", sub_matches)) => {
            let (snapshot, page) = snapshot_and_page(sub_matches);
            handle_inspect_command(snapshot, page);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn snapshot_and_page(matches: &ArgMatches) -> (&str, &str) {
    let snapshot = matches
        .get_one::<String>("snapshot")
        .expect("snapshot is required");
    let page = matches.get_one::<String>("page").expect("page is required");
    (snapshot, page)
}

fn open_snapshot(path: &str) -> SnapshotSource {
    SnapshotSource::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading snapshot '{path}': {e}");
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &NotionConfig) {
    let (snapshot_path, page_id) = snapshot_and_page(matches);
    let source = open_snapshot(snapshot_path);
    let rules = RenderRules::from(&config.render);

    let markdown = MarkdownRenderer::new(&source, &rules, &LogDiagnostics)
        .render_document(page_id)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    let mut document = String::new();
    if config.output.frontmatter {
        let url = source.page(page_id).map(|info| info.url.as_str());
        if url.is_none() {
            log::warn!("page {page_id} has no metadata in the snapshot, notion_url left empty");
        }
        document.push_str(&frontmatter(page_id, url.unwrap_or_default()));
    }
    document.push_str(&markdown);
    if !document.is_empty() && !document.ends_with('\n') {
        document.push('\n');
    }

    match matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, document).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{document}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(snapshot_path: &str, page_id: &str) {
    let source = open_snapshot(snapshot_path);
    let output = to_treeviz_str(&source, page_id).unwrap_or_else(|e| {
        eprintln!("Inspect error: {e}");
        std::process::exit(1);
    });
    print!("{output}");
}

/// Handle the list-pages command
fn handle_list_pages_command(snapshot_path: &str) {
    let source = open_snapshot(snapshot_path);
    let mut empty = true;
    for (id, info) in source.pages() {
        empty = false;
        let title = if info.title.is_empty() {
            "Untitled"
        } else {
            info.title.as_str()
        };
        println!("{id}  {title}");
    }
    if empty {
        eprintln!("No pages recorded in '{snapshot_path}'");
    }
}

/// YAML header linking the note back to its page.
fn frontmatter(page_id: &str, url: &str) -> String {
    format!("---\nnotion_url: {url}\nnotion_id: {page_id}\n---\n\n")
}

fn load_cli_config(explicit_path: Option<&str>, no_frontmatter: bool) -> NotionConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = if no_frontmatter {
        loader
            .set_override("output.frontmatter", false)
            .unwrap_or_else(|err| {
                eprintln!("Failed to apply --no-frontmatter: {err}");
                std::process::exit(1);
            })
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

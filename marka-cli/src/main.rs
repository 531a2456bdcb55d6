// Command-line interface for marka
//
// This binary is the stand-in for the host-application glue: where the
// flashcard application wires the engine into editor menus and template
// filters, the CLI exposes the same operations as subcommands.
//
// Usage:
//  marka mark <text> --style <NAME>      - Wrap text in the named style's markup
//  marka unmark <text>                   - Strip all recognized markup
//  marka render <text>                   - Render markup into classed HTML spans
//  marka filter <name> <text>            - Apply a named field filter (marked/unmarked)
//  marka --list-styles [--json]          - List configured styles
//
// `<text>` of `-` reads from stdin. Styles come from the embedded defaults,
// optionally layered with a user file via --config. Invalid markup prints an
// explanatory message to stderr and exits non-zero; stdout stays untouched.

use clap::{Arg, ArgAction, Command, ValueHint};
use marka_config::Loader;
use marka_engine::{FilterRegistry, InvalidMarkup, MarkupEngine};
use std::io::Read;

fn build_cli() -> Command {
    Command::new("marka")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mark, unmark and render symmetric markup in flashcard fields")
        .long_about(
            "marka wraps text in lightweight symmetric markup (*text*, ~~text~~),\n\
            renders that markup into styled HTML spans, or strips it back to\n\
            plain text.\n\n\
            Styles are loaded from the embedded defaults; pass --config to layer\n\
            a user markers.json on top.\n\n\
            Examples:\n  \
            marka mark 'lazy dog' --style Highlight   # ==lazy dog==\n  \
            marka render '==lazy dog=='               # <span class=\"marker highlight\">lazy dog</span>\n  \
            marka unmark '==lazy dog=='               # lazy dog\n  \
            marka filter marked '==lazy dog=='        # template-filter analog\n  \
            echo '==lazy dog==' | marka render -      # read text from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-styles")
                .long("list-styles")
                .help("List configured styles")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("With --list-styles, emit the style list as JSON")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markers.json configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("mark")
                .about("Wrap text in a style's markup")
                .arg(
                    Arg::new("text")
                        .help("Text to mark, or '-' for stdin")
                        .required(true),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .value_name("NAME")
                        .help("Name of the configured style to apply")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("unmark")
                .about("Strip all recognized markup from text")
                .arg(
                    Arg::new("text")
                        .help("Text to unmark, or '-' for stdin")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render recognized markup into classed HTML spans")
                .arg(
                    Arg::new("text")
                        .help("Text to render, or '-' for stdin")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("filter")
                .about("Apply a named field filter (marked, unmarked)")
                .long_about(
                    "Apply a named field filter, the way a card template filter\n\
                    like {{marked:Front}} or {{unmarked:Front}} would. Unknown\n\
                    filter names leave the text unchanged.",
                )
                .arg(Arg::new("name").help("Filter name").required(true))
                .arg(
                    Arg::new("text")
                        .help("Field text, or '-' for stdin")
                        .required(true),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let engine = load_engine(matches.get_one::<String>("config").map(String::as_str));

    if matches.get_flag("list-styles") {
        handle_list_styles(&engine, matches.get_flag("json"));
        return;
    }

    match matches.subcommand() {
        Some(("mark", sub_matches)) => {
            let text = read_text(sub_matches.get_one::<String>("text").expect("text is required"));
            let style_name = sub_matches
                .get_one::<String>("style")
                .expect("style is required");

            let markup = match engine.find_style(style_name) {
                Some(style) => style.markup().to_string(),
                None => {
                    eprintln!("Error: Unknown style '{style_name}'");
                    eprintln!("Use --list-styles to see the configured styles");
                    std::process::exit(1);
                }
            };

            print_or_exit(engine.mark(&text, &markup));
        }
        Some(("unmark", sub_matches)) => {
            let text = read_text(sub_matches.get_one::<String>("text").expect("text is required"));
            print_or_exit(engine.unmark(&text));
        }
        Some(("render", sub_matches)) => {
            let text = read_text(sub_matches.get_one::<String>("text").expect("text is required"));
            print_or_exit(engine.render(&text));
        }
        Some(("filter", sub_matches)) => {
            let name = sub_matches.get_one::<String>("name").expect("name is required");
            let text = read_text(sub_matches.get_one::<String>("text").expect("text is required"));

            let registry = FilterRegistry::with_defaults(engine);
            print_or_exit(registry.apply(name, &text));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Load styles (defaults plus optional user file) and compile the engine.
/// Configuration errors are fatal: report and refuse to run.
fn load_engine(config_path: Option<&str>) -> MarkupEngine {
    let loader = match config_path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };

    let engine = loader.build().and_then(|config| config.engine());
    match engine {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn handle_list_styles(engine: &MarkupEngine, as_json: bool) {
    if as_json {
        let styles: Vec<_> = engine.styles().collect();
        match serde_json::to_string_pretty(&styles) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    for style in engine.styles() {
        println!(
            "{:<12} {:<4} {}",
            style.name(),
            style.markup(),
            style.class_attribute()
        );
    }
}

/// Resolve the text argument, reading stdin when it is `-`.
fn read_text(arg: &str) -> String {
    if arg != "-" {
        return arg.to_string();
    }

    let mut text = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("Error reading stdin: {err}");
        std::process::exit(1);
    }

    // Shell pipelines append a trailing newline that is not part of the field.
    text.trim_end_matches(['\r', '\n']).to_string()
}

fn print_or_exit(result: Result<String, InvalidMarkup>) {
    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

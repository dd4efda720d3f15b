use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use docnav::{DocnavError, PageProcessor, code_block, hint_box};
use docnav::snippets::code_block_in;
use log::info;

/// Adds chapter sidebars to rendered documentation pages and renders template snippets.
#[derive(Parser, Debug)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the chapter sidebar into an HTML page.
    Sidebar {
        /// Input page; reads stdin when omitted.
        input: Option<PathBuf>,
        /// Output file; writes stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// JSON file with sidebar settings.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Sidebar title.
        #[arg(long)]
        title: Option<String>,
        /// Id of the element the sidebar is placed after.
        #[arg(long)]
        main_id: Option<String>,
        /// Build even when the page lacks the opt-in marker.
        #[arg(long)]
        force: bool,
    },
    /// Print the navigation tree of a page as JSON.
    Outline {
        input: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Wrap source code in a highlighted code block.
    CodeBlock {
        input: Option<PathBuf>,
        /// Highlighter language class.
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Wrap HTML content in a hint box.
    HintBox { input: Option<PathBuf> },
}

fn main() -> Result<(), DocnavError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sidebar {
            input,
            output,
            config,
            title,
            main_id,
            force,
        } => {
            let mut builder = PageProcessor::builder().with_force(force);
            if let Some(path) = config {
                builder = builder.with_config_file(path)?;
            }
            if let Some(title) = title {
                builder = builder.with_title(title);
            }
            if let Some(main_id) = main_id {
                builder = builder.with_main_id(main_id);
            }
            let processor = builder.build()?;

            let html = read_input(input.as_deref())?;
            let page = processor.process_lenient(&html);
            write_output(output.as_deref(), &page)?;
        }
        Command::Outline {
            input,
            config,
            pretty,
        } => {
            let mut builder = PageProcessor::builder();
            if let Some(path) = config {
                builder = builder.with_config_file(path)?;
            }
            let processor = builder.build()?;

            let tree = processor.outline(&read_input(input.as_deref())?);
            let json = if pretty {
                serde_json::to_string_pretty(&tree)?
            } else {
                serde_json::to_string(&tree)?
            };
            write_output(None, &format!("{json}\n"))?;
        }
        Command::CodeBlock { input, language } => {
            let code = read_input(input.as_deref())?;
            let html = match language {
                Some(language) => code_block_in(&language, &code),
                None => code_block(&code),
            };
            write_output(None, &html)?;
        }
        Command::HintBox { input } => {
            let content = read_input(input.as_deref())?;
            write_output(None, &hint_box(|| content))?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, DocnavError> {
    match path {
        Some(path) => {
            info!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<(), DocnavError> {
    match path {
        Some(path) => {
            fs::write(path, contents)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use uadocctl::cmd_build::{self, BuildArgs};
use uadocctl::cmd_children;
use uadocctl::cmd_import;
use uadocctl::cmd_index;
use uadocctl::cmd_resolve;
use uadocctl::cmd_show::{self, Selector};
use uadocctl::common;

#[derive(Parser, Debug)]
#[command(name = "uadocctl", version, about = "OPC UA nodeset documentation CLI")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output JSON where applicable
    #[arg(long)]
    json: bool,
    /// Documentation source directory; nodeset paths resolve against it
    #[arg(long, global = true)]
    src_dir: Option<PathBuf>,
    /// Document the nodeset is imported from, relative to --src-dir
    #[arg(long, global = true, default_value = "index")]
    doc: String,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Load a nodeset and print a summary
    Import { source: String },
    /// Render a single node
    Show {
        source: String,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// Node type used with --name (UAObject, Variable, ...)
        #[arg(long = "type")]
        node_type: Option<String>,
        #[arg(long, default_value = "clean")]
        layout: String,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        hide: bool,
    },
    /// Resolve a reference target to its display name
    Resolve { source: String, token: String },
    /// List the children of a node
    Children { source: String, parent: String },
    /// Render documents for every node plus index pages
    Build {
        source: String,
        #[arg(long, default_value = "_build/opcua")]
        out: PathBuf,
        /// Comma separated node types; all when omitted
        #[arg(long)]
        types: Option<String>,
        #[arg(long, default_value = "clean")]
        layout: String,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        no_indices: bool,
    },
    /// Print the variable or reference index
    Index {
        source: String,
        #[arg(long)]
        references: bool,
        #[arg(long)]
        types: Option<String>,
    },
}

fn main() -> Result<()> {
    let Cli {
        verbose,
        json,
        src_dir,
        doc,
        cmd,
    } = Cli::parse();

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let locate = |arg: &str| common::import_source(src_dir.as_deref(), &doc, arg);

    match cmd {
        Cmd::Import { source } => cmd_import::run(&locate(&source), json)?,
        Cmd::Show {
            source,
            id,
            name,
            node_type,
            layout,
            style,
            hide,
        } => {
            let selector = Selector::from_args(id, name, node_type)?;
            let options = common::render_options(&layout, style, hide)?;
            cmd_show::run(&locate(&source), selector, options, json)?
        }
        Cmd::Resolve { source, token } => cmd_resolve::run(&locate(&source), &token, json)?,
        Cmd::Children { source, parent } => {
            cmd_children::run(&locate(&source), &parent, json)?
        }
        Cmd::Build {
            source,
            out,
            types,
            layout,
            style,
            no_indices,
        } => {
            let args = BuildArgs {
                source: locate(&source),
                out,
                types: common::parse_types(types.as_deref())?,
                options: common::render_options(&layout, style, false)?,
                indices: !no_indices,
            };
            cmd_build::run(args, json)?
        }
        Cmd::Index {
            source,
            references,
            types,
        } => {
            let types = common::parse_types(types.as_deref())?;
            cmd_index::run(&locate(&source), references, &types, json)?
        }
    };

    Ok(())
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Three subcommands, one per place the HTML can come from:
// - file: a local .html/.htm file
// - url:  a web page (its URL is also the base for relative links)
// - html: HTML given on the command line, or piped in on stdin
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-extractor",
    version,
    about = "Extract and analyze <a href> links from HTML files, web pages and raw markup",
    long_about = "link-extractor finds every <a href=\"...\"> in a piece of HTML and reports, for each link, \
                  its absolute form, scheme, domain and path. Relative links are resolved against a base URL."
)]
pub struct Cli {
    /// Print debug logs to stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract links from a local .html/.htm file
    ///
    /// Example: link-extractor file index.html --base https://example.com
    File {
        /// Path to the HTML file
        path: PathBuf,

        /// URL of the page, used to resolve relative links
        #[arg(long)]
        base: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Download a web page and extract its links
    ///
    /// Example: link-extractor url https://example.com --unique
    Url {
        /// Page to download; also the base for relative links
        url: String,

        /// Give up on the download after this many seconds
        #[arg(long, default_value_t = 25)]
        timeout: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract links from HTML text (reads stdin when TEXT is omitted)
    ///
    /// Example: echo '<a href="/x">x</a>' | link-extractor html --base https://example.com
    Html {
        /// The HTML itself
        text: Option<String>,

        /// URL of the page, used to resolve relative links
        #[arg(long)]
        base: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Report each distinct href only once
    #[arg(long)]
    pub unique: bool,

    /// Output results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}

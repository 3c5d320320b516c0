//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::{convert::Infallible, path::PathBuf};

use crate::view::SortOrder;

/// Mini GitHub Blog page renderer
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Root directory path
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: miniblog.toml)
    #[arg(short = 'C', long, default_value = "miniblog.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of the `render` command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Page template to render (relative to `root`)
    pub page: PathBuf,

    /// Search query typed into `#search`
    #[arg(short, long)]
    pub query: Option<String>,

    /// Option selected in `#sort`: `newest`, anything else sorts oldest first
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOrder>,

    /// Slug of the post to show on a post page
    #[arg(long)]
    pub slug: Option<String>,

    /// Browser-style location, the slug is read from its query string.
    ///
    /// Example: `--location "post.html?slug=hello-world"`
    #[arg(short, long)]
    pub location: Option<String>,

    /// Override `[data.source]`: a file path or an http(s) URL
    #[arg(short, long)]
    pub data: Option<String>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

/// What `render` prints.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The rewritten page
    #[default]
    Html,
    /// The view-model the page was rendered from
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template blog
    Init {
        /// the name(path) of blog directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Render a page template with the posts of the data file
    Render(RenderArgs),
}

/// Read `--sort` the way the `#sort` select is read.
fn parse_sort(value: &str) -> Result<SortOrder, Infallible> {
    Ok(SortOrder::from_select_value(value))
}

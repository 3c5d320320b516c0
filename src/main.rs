//! miniblog - renders the pages of a static, GitHub Pages style blog.

mod boot;
mod cli;
mod config;
mod data;
mod init;
mod logger;
mod page;
mod utils;
mod view;

use anyhow::{Context, Result};
use boot::{BootContext, boot};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat, RenderArgs};
use config::SiteConfig;
use init::new_blog;
use std::{
    fs,
    io::{self, Write},
};
use utils::minify::minify_page;
use view::ViewState;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => new_blog(&config),
        Commands::Render(args) => {
            config.validate()?;
            render(&config, args)
        }
    }
}

/// Render one page template and write the result.
fn render(config: &SiteConfig, args: &RenderArgs) -> Result<()> {
    let page_path = config.get_root().join(&args.page);
    let template = fs::read(&page_path)
        .with_context(|| format!("Failed to read page `{}`", page_path.display()))?;

    let mut ctx = BootContext::for_page(&page_path, &config.data.source, config.formatter());
    ctx.state = ViewState::new(
        args.query.clone().unwrap_or_default(),
        args.sort.unwrap_or_default(),
    );
    ctx.slug = args.slug.clone();
    ctx.location = args.location.clone();

    let Some(rendered) = boot(&template, &ctx)? else {
        log!("warn"; "`{}` has neither #posts nor #post-article, nothing to render", args.page.display());
        return Ok(());
    };

    let output = match args.format {
        OutputFormat::Html => minify_page(rendered.html(), config.render.minify).into_owned(),
        OutputFormat::Json => rendered.to_json()?.into_bytes(),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write `{}`", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

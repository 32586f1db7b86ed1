//! The `folio` command line: build, print, or check the portfolio page.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use folio::{
    default_portfolio, truncate_to_width, PageRenderer, Portfolio, SchemeChoice, TypeScale,
};

#[derive(Parser)]
#[command(name = "folio", version, about = "Generate the portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and write index.html into the output directory.
    Build {
        /// Output directory, created if missing.
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
        /// Color scheme of the generated page.
        #[arg(long, value_enum, default_value_t = SchemeArg::Auto)]
        scheme: SchemeArg,
        /// Directory of templates shadowing the built-ins.
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Render the page to stdout.
    Print {
        /// Color scheme of the generated page.
        #[arg(long, value_enum, default_value_t = SchemeArg::Auto)]
        scheme: SchemeArg,
        /// Directory of templates shadowing the built-ins.
        #[arg(long)]
        templates: Option<PathBuf>,
    },
    /// Validate the type scale and content table, and print the inventory.
    Check,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
    Auto,
}

impl From<SchemeArg> for SchemeChoice {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => SchemeChoice::Light,
            SchemeArg::Dark => SchemeChoice::Dark,
            SchemeArg::Auto => SchemeChoice::Auto,
        }
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Build { out, scheme, templates } => {
            let renderer = renderer_for(templates)?;
            let scheme = SchemeChoice::from(scheme).resolve();
            let path = renderer.write(default_portfolio(), scheme, &out)?;
            let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
            println!(
                "{} wrote {} ({} bytes, {} scheme)",
                style("✓").green().bold(),
                path.display(),
                size,
                scheme.class()
            );
        }
        Command::Print { scheme, templates } => {
            let renderer = renderer_for(templates)?;
            let scheme = SchemeChoice::from(scheme).resolve();
            let html = renderer.render(default_portfolio(), scheme)?;
            println!("{html}");
        }
        Command::Check => {
            let scale = TypeScale::default();
            scale.validate().context("type scale check failed")?;
            let portfolio = default_portfolio();
            portfolio.validate().context("content check failed")?;
            print_inventory(portfolio);
            println!("{} scale and content are complete", style("✓").green().bold());
        }
    }
    Ok(())
}

fn renderer_for(templates: Option<PathBuf>) -> anyhow::Result<PageRenderer> {
    let scale = TypeScale::default();
    let renderer = match templates {
        Some(dir) => PageRenderer::with_template_dir(scale, dir)?,
        None => PageRenderer::new(scale)?,
    };
    Ok(renderer)
}

fn print_inventory(portfolio: &Portfolio) {
    let dim = |s: &str| style(s.to_string()).dim();

    println!("{}", style(&portfolio.profile.name).bold());
    println!("  {} {}", dim("contacts"), portfolio.contacts.len());
    println!("  {} {}", dim("experience"), portfolio.experience.entries.len());
    for entry in &portfolio.experience.entries {
        println!("    - {}", truncate_to_width(&entry.title, 48));
    }
    println!("  {} {}", dim("projects"), portfolio.projects.entries.len());
    for entry in &portfolio.projects.entries {
        println!("    - {}", truncate_to_width(&entry.title, 48));
    }
    println!("  {} {}", dim("tech stack"), portfolio.tech_stack.items.len());
    println!("  {} {}", dim("education"), portfolio.education.entries.len());
    for entry in &portfolio.education.entries {
        println!("    - {}", truncate_to_width(&entry.course, 48));
    }
}

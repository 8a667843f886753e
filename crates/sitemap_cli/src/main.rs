//! CLI entry point.
//!
//! # Responsibility
//! - Build (or reload) a sitemap, run a scripted edit pass and save it.
//! - Keep output deterministic for quick local sanity checks.

use clap::Parser;
use log::info;
use sitemap_core::db::open_db;
use sitemap_core::{
    core_version, default_log_level, init_logging, Canvas, CanvasConfig, NoopSitemapRepository,
    SaveNotification, SitemapRepository, SitemapService, SqliteSitemapRepository, UuidIds,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sitemap", about = "Build, edit and save a sitemap wireframe")]
struct Cli {
    /// SQLite file to load from and save to (nothing is stored if omitted)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    }

    let result = match &cli.db {
        Some(path) => run_with_db(path),
        None => run(SitemapService::new(NoopSitemapRepository)),
    };
    match result {
        Ok(notification) if notification.is_success() => {
            println!("{}", notification.message());
            ExitCode::SUCCESS
        }
        Ok(notification) => {
            eprintln!("ERROR: {}", notification.message());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_with_db(path: &Path) -> Result<SaveNotification, String> {
    let conn = open_db(path).map_err(|err| format!("failed to open `{}`: {err}", path.display()))?;
    let repo = SqliteSitemapRepository::try_new(&conn).map_err(|err| err.to_string())?;
    run(SitemapService::new(repo))
}

fn run<R: SitemapRepository>(service: SitemapService<R>) -> Result<SaveNotification, String> {
    let config = CanvasConfig::default();
    let mut canvas = match service.load(config.clone()).map_err(|err| err.to_string())? {
        Some(canvas) => canvas,
        None => Canvas::seeded(config).map_err(|err| err.to_string())?,
    };

    let home = canvas
        .nodes()
        .first()
        .map(|node| node.id.clone())
        .ok_or_else(|| "sitemap has no pages".to_string())?;
    let page = canvas.add_node().map_err(|err| err.to_string())?;
    canvas.connect(&home, &page);

    let mut section_ids = UuidIds;
    if let Some(mut editor) = canvas.edit_node(&page, &mut section_ids) {
        editor.add_section().map_err(|err| err.to_string())?;
        editor.add_section().map_err(|err| err.to_string())?;
    }

    println!("sitemap_core version={}", core_version());
    for node in canvas.nodes() {
        let sections: Vec<&str> = node.sections.iter().map(|s| s.label.as_str()).collect();
        println!("page {} [{}]", node.label, sections.join(", "));
    }
    for edge in canvas.edges() {
        println!("edge {} -> {}", edge.source, edge.target);
    }
    info!(
        "event=cli_run module=cli status=ok nodes={} edges={}",
        canvas.nodes().len(),
        canvas.edges().len()
    );

    Ok(service.save(&canvas))
}

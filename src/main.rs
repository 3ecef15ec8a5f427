use clap::Parser;
use art_portfolio::{browse, check, cli, config, error, listing, logging, source};
use cli::{Cli, Commands};
use config::Config;
use error::{PortfolioError, Result};
use portfolio_common::Gallery;
use source::Source;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Check { source } => {
            let source = Source::parse(&config.resolve_source(source.as_deref()), config.timeout())?;
            println!("🖼  portfolio - 検証: {}\n", source.describe());

            println!("[1/3] ドキュメントを読み込み中...");
            let load = source.load().await;
            match (&load.site, &load.site_error) {
                (Some(site), _) => println!("✔ サイト情報: {}", site.page_title()),
                (None, Some(e)) => println!("⚠ サイト情報を読み込めません（空欄で表示されます）: {}", e),
                (None, None) => {}
            }
            let gallery = require_gallery(load.gallery)?;
            println!(
                "✔ ギャラリー: {}コレクション / {}点\n",
                gallery.sections().len(),
                gallery.len()
            );

            println!("[2/3] 作品データを確認中...");
            let duplicates = gallery.duplicate_files();
            if duplicates.is_empty() {
                println!("✔ 重複なし\n");
            } else {
                for file in &duplicates {
                    println!("⚠ 重複したファイル: {}", file);
                }
                println!();
            }

            match source.root_dir() {
                Some(root) => {
                    println!("[3/3] 画像ファイルを確認中...");
                    let report = check::verify_assets(root, &gallery, !cli.verbose);
                    for file in &report.missing {
                        println!("✘ 画像が見つかりません: images/{}", file);
                    }
                    for (file, reason) in &report.unreadable {
                        println!("✘ 画像を読み込めません: images/{} ({})", file, reason);
                    }
                    for file in &report.unreferenced {
                        println!("⚠ どの作品からも参照されていない画像: images/{}", file);
                    }
                    if report.is_clean() {
                        println!("✔ すべての画像を確認しました");
                    }
                }
                None => println!("[3/3] URLソースのため画像確認をスキップ"),
            }

            println!("\n✅ 検証完了");
        }

        Commands::List { source } => {
            let source = Source::parse(&config.resolve_source(source.as_deref()), config.timeout())?;
            let load = source.load().await;
            if let Some(site) = &load.site {
                println!("{}\n", site.page_title());
            }
            let gallery = require_gallery(load.gallery)?;
            print!("{}", listing::format_listing(&gallery));
        }

        Commands::Browse { source, start } => {
            let source = Source::parse(&config.resolve_source(source.as_deref()), config.timeout())?;
            let load = source.load().await;
            let gallery = require_gallery(load.gallery)?;
            browse::run_browse(&gallery, start)?;
        }

        Commands::Config { source, timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(source) = source {
                config.default_source = Some(source);
                changed = true;
            }
            if let Some(timeout) = timeout {
                config.timeout_seconds = timeout;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  既定ソース: {}", config.default_source.as_deref().unwrap_or("(未設定)"));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}

/// ギャラリーが読めなければページと同じ文言で終了
fn require_gallery(gallery: portfolio_common::Result<Gallery>) -> Result<Gallery> {
    gallery.map_err(|e| {
        println!("✘ {}", portfolio_common::GALLERY_ERROR_MESSAGE);
        PortfolioError::GalleryUnavailable(e.to_string())
    })
}

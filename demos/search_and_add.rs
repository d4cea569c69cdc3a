//! Searches the station for a keyword, queues the best match and prints the task list.
//!
//! ```text
//! DS_HOST=192.168.1.20 DS_USER=admin DS_PASSWORD=secret \
//!     cargo run --example search_and_add -- "big buck bunny"
//! ```

use color_eyre::{eyre::WrapErr, Result};
use comfy_table::Table;
use download_station::station::DEFAULT_QUALITY;
use download_station::{DownloadStation, PollOptions};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let keyword = env::args().nth(1).unwrap_or_else(|| "big buck bunny".to_string());
    let quality = env::var("DS_QUALITY").unwrap_or_else(|_| DEFAULT_QUALITY.to_string());

    let station = DownloadStation::builder()
        .host(env::var("DS_HOST").wrap_err("DS_HOST is not set")?)
        .port(env::var("DS_PORT").unwrap_or_else(|_| "5000".to_string()))
        .username(env::var("DS_USER").wrap_err("DS_USER is not set")?)
        .password(env::var("DS_PASSWORD").wrap_err("DS_PASSWORD is not set")?)
        .connect()
        .await?;

    // Stop polling after five minutes, or on Ctrl-C.
    let token = tokio_util::sync::CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });
    let options = PollOptions::new()
        .deadline(Duration::from_secs(300))
        .cancel_token(token);

    let results = station
        .search_until_finished(&keyword, &quality, &options)
        .await?;
    println!("{} results for {keyword:?}", results.total);

    if let Some(uri) = results
        .best()
        .and_then(|item| item.get("download_uri"))
        .and_then(|uri| uri.as_str())
    {
        let added = station.create_task(uri, "").await?;
        println!("Best match queued: {added}");
    }

    if let Some(list) = station.list_tasks().await? {
        let mut table = Table::new();
        table.set_header(vec!["Id", "Status", "Size", "Title"]);
        for task in &list.tasks {
            table.add_row(vec![
                task.id.clone(),
                task.status.to_string(),
                task.size.to_string(),
                task.title.clone(),
            ]);
        }
        println!("{table}");
    }

    station.logout().await;
    Ok(())
}

use std::sync::Arc;

use anyhow::Context;
use blogpost_core::impls::{S3ObjectFetcher, TracingLogger};
use blogpost_core::{BlogPostAccess, GetPostRequest, StorageConfig, handle};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

/// `LOG_FORMAT=json` なら JSON、それ以外は人が読む形式
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true);
    if json {
        builder.json().with_current_span(true).flatten_event(true).init();
    } else {
        builder.compact().init();
    }
}

/// 引数に id があればそれを、無ければ stdin の JSON（`{"id": 1}`）を読む
async fn read_request() -> anyhow::Result<GetPostRequest> {
    if let Some(arg) = std::env::args().nth(1) {
        let id = arg
            .parse::<i64>()
            .with_context(|| format!("post id must be an integer, got {arg:?}"))?;
        return Ok(GetPostRequest { id });
    }

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("could not read request from stdin")?;
    serde_json::from_str(&input).context("request must look like {\"id\": <integer>}")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // (A) 設定と request を読む
    let config = StorageConfig::from_env()?;
    let request = read_request().await?;
    tracing::debug!(?config, ?request, "starting");

    // (B) S3 と tracing をつないだ Access Component を作る
    let fetcher = S3ObjectFetcher::from_config(&config).await;
    let access = BlogPostAccess::new(
        config,
        Arc::new(fetcher),
        Arc::new(TracingLogger::default()),
    );

    // (C) 記事を取って JSON で出す（失敗時はエラー記事）
    let post = handle(&access, request).await;
    println!("{}", serde_json::to_string(&post)?);
    Ok(())
}

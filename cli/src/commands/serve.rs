use cafe_common::config::Config;
use cafe_core::http;

use super::build_resolver;

pub async fn serve(cfg: &Config) -> anyhow::Result<()> {
    let resolver = build_resolver(cfg)?;
    http::serve(cfg.addr, resolver).await
}

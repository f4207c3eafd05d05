use cafe_common::config::Config;
use cafe_common::models::query::CafeQuery;

use super::build_resolver;

/// Prints the payload on stdout. Logs go to stderr, so the output can be piped.
pub fn query(
    city: Option<String>,
    count: Option<String>,
    search: Option<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let resolver = build_resolver(cfg)?;
    let query = CafeQuery::new(city, count, search);

    let payload = resolver.respond(&query)?;
    println!("{payload}");
    Ok(())
}

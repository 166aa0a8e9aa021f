// Issue a session token for an existing user
//
// Usage: create_session <username> [days]
//
// Prints the token to store in the `sessionid` cookie. There is no
// sign-in page; this is how a browser session gets created.

#[cfg(feature = "ssr")]
const DEFAULT_TTL_DAYS: i64 = 30;

#[cfg(feature = "ssr")]
fn main() -> anyhow::Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

#[cfg(feature = "ssr")]
async fn async_main() -> anyhow::Result<()> {
    use anyhow::{bail, Context};
    use storefront::web_app::api::config::ServerConfig;
    use storefront::web_app::api::{db, queries, session};

    let mut args = std::env::args().skip(1);
    let Some(username) = args.next() else {
        bail!("usage: create_session <username> [days]");
    };
    let days = match args.next() {
        Some(raw) => raw.parse::<i64>().with_context(|| format!("invalid day count {:?}", raw))?,
        None => DEFAULT_TTL_DAYS,
    };

    let config = ServerConfig::load();
    let pool = db::create_pool(&config).await?;

    let Some(user_id) = queries::find_user_id(&pool, &username).await? else {
        bail!("no user named {:?}", username);
    };

    let token = session::create_session(&pool, user_id, chrono::Duration::days(days)).await?;

    println!("✓ Session for {} (id {}) valid for {} days", username, user_id, days);
    println!("{}={}", session::SESSION_COOKIE, token);
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo run --features ssr --bin create_session");
}

// Storefront web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - PostgreSQL connection pool, schema applied on start
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use storefront::web_app::api::config::ServerConfig;
    use storefront::web_app::api::db;
    use storefront::web_app::app::{shell, App as WebApp};
    use tracing_subscriber::EnvFilter;

    // Configuration first: .env may carry RUST_LOG
    let config = ServerConfig::load();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let pool = db::create_pool(&config).await.map_err(io_error)?;
    tracing::info!("Connected to database (max {} connections)", config.max_connections);

    db::init_db(pool.clone());
    db::init_media_base(config.media_base_url.clone());
    db::apply_schema(&pool).await.map_err(io_error)?;

    if let Err(e) = seed_database(&pool).await {
        tracing::error!("Failed to seed database: {}", e);
    }

    let conf = leptos_config::get_configuration(None).map_err(io_error)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root = site_root.to_string();

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .route("/api/{tail:.*}", handle_server_fns())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
fn io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

/// Load data/catalog.json when the catalog is empty
#[cfg(feature = "ssr")]
async fn seed_database(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use storefront::web_app::api::seed;
    use storefront::web_app::model::CatalogImport;

    let count = seed::product_count(pool).await?;
    if count > 0 {
        tracing::info!("Database already contains {} products, skipping seed.", count);
        return Ok(());
    }

    let path = Path::new("data/catalog.json");
    if !path.exists() {
        tracing::warn!("No products and no {} to seed from", path.display());
        return Ok(());
    }

    tracing::info!("Seeding database from {}...", path.display());
    let catalog: CatalogImport = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let inserted = seed::seed_catalog(pool, &catalog).await?;

    tracing::info!("Database seeded with {} products.", inserted);
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sa_api::{create_app, AppState};
use sa_core::repositories::{MockUserRepository, UserRepository};
use sa_core::services::{BcryptPasswordHasher, JwtResetTokenService, PasswordPolicy};
use sa_infra::database::{DatabasePool, MySqlUserRepository};
use sa_infra::email::LogEmailService;
use sa_shared::config::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        address = %config.server.bind_address(),
        "Starting Sahelis account service"
    );

    if config.auth.reset_token.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("RESET_TOKEN_SECRET must be set in production");
        }
        tracing::warn!("Using the default reset token secret; set RESET_TOKEN_SECRET");
    }

    match &config.database {
        Some(database) => {
            let pool = DatabasePool::new(database)
                .await
                .context("failed to connect to the database")?;
            pool.run_migrations()
                .await
                .context("failed to create the account schema")?;
            tracing::info!(pool = %pool.get_statistics(), "Database ready");

            let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
            let result = serve(&config, repository, "mysql", Some(pool.clone())).await;
            pool.close().await;
            result
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; accounts are kept in memory");
            serve(&config, Arc::new(MockUserRepository::new()), "memory", None).await
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if logging.compact {
        builder.compact().init();
    } else {
        builder.init();
    }
}

async fn serve<U>(
    config: &AppConfig,
    repository: Arc<U>,
    store: &str,
    database: Option<DatabasePool>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
{
    let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.password.hash_cost));
    let tokens = Arc::new(JwtResetTokenService::new(&config.auth.reset_token));
    let email = Arc::new(LogEmailService::new(
        &config.email,
        config.environment.is_development(),
    ));

    let mut app_state = AppState::new(
        repository,
        hasher,
        tokens,
        email,
        PasswordPolicy::from(&config.auth.password),
        config.email.public_base_url.clone(),
        store,
    );
    if let Some(pool) = database {
        app_state = app_state.with_database(pool);
    }
    let app_state = web::Data::new(app_state);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(config.server.bind_address())
        .with_context(|| format!("failed to bind {}", config.server.bind_address()))?
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

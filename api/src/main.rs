use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;
use sqlx::MySqlPool;

use ba_core::services::account::AccountService;
use ba_core::services::mail::MailService;
use ba_core::services::password_reset::PasswordResetService;
use ba_core::services::secret::SecretStore;
use ba_core::services::verification::{VerificationConfig, VerificationService};
use ba_infra::database::{create_pool, MySqlTokenRepository, MySqlUserRepository};
use ba_infra::mail::{MockMailService, SmtpMailService};
use ba_shared::config::{AppConfig, MailDriver};

mod app;
mod dto;
mod middleware;
mod routes;

use routes::user::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting BloomAccess API server");

    let config = AppConfig::from_env();
    info!("Server will bind to: {}", config.server.bind_address());

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    match config.mail.driver {
        MailDriver::Mock => {
            info!("Mail driver: mock (messages are echoed to the console)");
            run(config, pool, Arc::new(MockMailService::new())).await
        }
        MailDriver::Smtp => {
            let mail = SmtpMailService::new(&config.mail)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            info!("Mail driver: smtp via {}", config.mail.smtp_host);
            run(config, pool, Arc::new(mail)).await
        }
    }
}

/// Wire the lifecycle services over the given mail transport and serve.
async fn run<M>(config: AppConfig, pool: MySqlPool, mail: Arc<M>) -> io::Result<()>
where
    M: MailService + 'static,
{
    let users = Arc::new(MySqlUserRepository::new(pool.clone()));
    let tokens = Arc::new(MySqlTokenRepository::new(pool));
    let secrets = Arc::new(SecretStore::with_cost(config.secrets.bcrypt_cost));

    let verification = Arc::new(VerificationService::new(
        tokens.clone(),
        users.clone(),
        mail.clone(),
        secrets.clone(),
        VerificationConfig {
            app_url: config.server.public_url.clone(),
            ..Default::default()
        },
    ));
    let accounts = Arc::new(AccountService::new(
        users.clone(),
        secrets.clone(),
        verification.clone(),
    ));
    let password_reset = Arc::new(PasswordResetService::new(tokens, users, mail, secrets));

    let app_state = web::Data::new(AppState {
        accounts,
        verification,
        password_reset,
    });

    let bind_address = config.server.bind_address();
    HttpServer::new(move || app::create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

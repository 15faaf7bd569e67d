use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::str::FromStr;

use studytrack::auth::{AuthMiddleware, TokenService};
use studytrack::config::Config;
use studytrack::routes;
use studytrack::store::{TaskStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let mut connect_options = PgConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL must be a valid postgres URL");
    if config.database_require_tls {
        connect_options = connect_options.ssl_mode(PgSslMode::Require);
    }

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let tokens = TokenService::new(config.jwt_secret.clone());
    let users = UserStore::new(pool.clone());
    let tasks = TaskStore::new(pool.clone());
    let http = reqwest::Client::new();

    log::info!("server on {}", config.server_url());

    let host = config.server_host.clone();
    let port = config.server_port;

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(users.clone()))
            .app_data(web::Data::new(tasks.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(web::Data::new(http.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware::new(tokens.clone()))
                    .configure(routes::config),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

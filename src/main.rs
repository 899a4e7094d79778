use std::fs::OpenOptions;

use actix_web::{web, App, HttpServer};
use sea_orm::Database;
use tracing::Level;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{filter, fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::{auth::Authority, payroll::generator::PayrollGenerator};

mod config;
mod utils;

mod entity;
mod auth;
mod payroll;
mod pages;

#[actix_web::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let config::Config {
        host_address,
        database_opt,
        jwt_key,
        log_path
    } = config::load();

    let log_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_path)
        .unwrap();

    let subscriber = Registry::default()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_line_number(true)
                .with_filter(EnvFilter::from_default_env())
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(filter::LevelFilter::from_level(Level::TRACE))
        );

    tracing::subscriber::set_global_default(subscriber).unwrap();

    let database = web::Data::new(Database::connect(database_opt).await.expect("Unable to connect to database"));
    let authority = web::Data::new(Authority::new(jwt_key.as_bytes()));
    let generator = web::Data::new(PayrollGenerator::default());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(database.clone())
            .app_data(authority.clone())
            .app_data(generator.clone())
            .wrap(TracingLogger::default())
            .configure(pages::config)
    });

    server
        .bind(host_address).unwrap()
        .run().await.unwrap();
}

use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web, App, HttpServer,
};
use clap::Parser;
use database::database::{
    database::Database,
    options::{DatabaseOptions, IdAssignment},
};
use person_registry::configure;
use std::io;

/// 📇 Person Registry, an in-memory HTTP service for adding, listing and deleting people
///
/// Try it with `curl -X POST -d '{"name":"Ada","surname":"Lovelace"}' 127.0.0.1:8080/add`
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, default_value = "8080")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Log every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,

    /// Consume an id on every add attempt, including rejected ones (matches the id sequence of
    /// older deployments)
    #[clap(long)]
    legacy_id_sequence: bool,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let id_assignment = match args.legacy_id_sequence {
        true => IdAssignment::BeforeValidation,
        false => IdAssignment::AfterValidation,
    };

    let database_options = DatabaseOptions::default().set_id_assignment(id_assignment);

    let database = web::Data::new(Database::new(database_options));

    log::info!("Server is running on {}:{}", args.address, args.port);

    // Start HTTP server
    HttpServer::new(move || {
        let app = App::new()
            .app_data(database.clone())
            .configure(configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()));

        app
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}

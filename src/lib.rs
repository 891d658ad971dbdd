use actix_web::web;

pub mod error;
pub mod handlers;

/// Registers the registry endpoints. The caller provides the shared
/// `web::Data<database::database::database::Database>` via `App::app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/add")
            .route(web::post().to(handlers::add_person))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(web::resource("/get").route(web::route().to(handlers::list_people)))
    .service(
        web::resource("/delete")
            .route(web::delete().to(handlers::delete_person))
            .default_service(web::to(handlers::method_not_allowed)),
    );
}

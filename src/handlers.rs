use actix_web::{http::header::ContentType, web, HttpResponse};
use database::{
    consts::consts::PersonId,
    database::{database::Database, table::table::RegistryError},
    model::person::NewPerson,
};

use crate::error::ApiError;

/// POST /add -- body is decoded by hand so clients are not required to send a JSON content type
pub async fn add_person(
    database: web::Data<Database>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let new_person: NewPerson =
        serde_json::from_slice(&body).map_err(ApiError::MalformedRequest)?;

    let person = database.add(new_person).map_err(|e| {
        match &e {
            RegistryError::Duplicate { name, surname } => {
                log::warn!("Rejected add, already registered: {} {}", name, surname)
            }
            _ => log::warn!("Rejected add: {}", e),
        }
        e
    })?;

    log::info!(
        "Person added [id: {}]: {} {}",
        person.id,
        person.name,
        person.surname
    );

    Ok(HttpResponse::Created()
        .insert_header(ContentType::plaintext())
        .body(format!(
            "Person added: {} {}\n",
            person.name, person.surname
        )))
}

/// GET /get (any method is accepted)
pub async fn list_people(database: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let people = database.list();

    log::debug!("Listing {} people", people.len());

    let json = serde_json::to_vec(&people).map_err(ApiError::Serialization)?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::json())
        .body(json))
}

/// DELETE /delete?id=<id> -- when `id` is repeated the first value is used
pub async fn delete_person(
    database: web::Data<Database>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = query
        .into_inner()
        .into_iter()
        .find_map(|(key, value)| (key == "id").then_some(value))
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingId)?;

    let id: PersonId = raw_id.parse().map_err(|_| {
        log::warn!("Rejected delete, id is not a number: {}", raw_id);
        ApiError::UnknownId
    })?;

    database.delete(id).map_err(|e| {
        if let RegistryError::NotFound(missing) = &e {
            log::warn!("Rejected delete, no person with id: {}", missing);
        }
        e
    })?;

    log::info!("Person deleted [id: {}]", id);

    Ok(HttpResponse::Ok().finish())
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

use crate::configuration::Environment;
use crate::constant::{CONTACT_API_WORKING, MESSAGE_SENT};
use crate::domain::ContactSubmission;
use crate::email_client::EmailClient;
use crate::error::ContactError;
use crate::request::ContactData;
use crate::telemetry;
use crate::utils;
use actix_web::{web, Either, HttpResponse};
use serde::Serialize;

/// The form may arrive as JSON or url-encoded.
pub type ContactBody = Either<web::Json<ContactData>, web::Form<ContactData>>;

#[tracing::instrument(
    name = "Sending a contact message",
    skip(body, email_client),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty
    )
)]
pub async fn send_contact(
    body: ContactBody,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let data = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };
    let submission: ContactSubmission = data.try_into().map_err(|e| {
        tracing::info!("Rejected contact submission: {}", e);
        ContactError::ValidationError(e)
    })?;
    telemetry::record_field("submitter_email", &submission.email());
    telemetry::record_field("submitter_name", &submission.name());

    email_client.dispatch(&submission).await.map_err(|e| {
        tracing::error!("Failed to send contact emails: {:?}", e);
        ContactError::DispatchError(e)
    })?;

    Ok(utils::json_success(MESSAGE_SENT))
}

#[derive(Serialize)]
struct LivenessReport {
    success: bool,
    message: &'static str,
    timestamp: String,
    environment: &'static str,
}

/// Always 200, whatever state the mail server is in.
#[tracing::instrument(name = "Contact API liveness", skip(environment))]
pub async fn contact_test(environment: web::Data<Environment>) -> HttpResponse {
    HttpResponse::Ok().json(LivenessReport {
        success: true,
        message: CONTACT_API_WORKING,
        timestamp: utils::iso_timestamp(),
        environment: environment.as_str(),
    })
}

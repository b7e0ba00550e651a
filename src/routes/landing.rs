use actix_web::{HttpResponse, http::header::ContentType, web};
use tera::{Context as TeraContext, Tera};

use crate::{
    domain::REGISTERED_MESSAGE,
    form::{FieldError, SUBMISSION_FAILED_MESSAGE, SuccessDialog},
    routes::e500,
};

pub const SUBMIT_EMAIL_PATH: &str = "/api/submit-email";

/// Renders the signup page. The inline script mirrors the messages and
/// checks of [`crate::form::EmailForm`] so both clients behave the same.
pub async fn landing_page(tera: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    let mut ctx = TeraContext::new();
    ctx.insert("submit_url", SUBMIT_EMAIL_PATH);
    ctx.insert("required_message", FieldError::Required.message());
    ctx.insert("invalid_message", FieldError::InvalidFormat.message());
    ctx.insert("failed_message", SUBMISSION_FAILED_MESSAGE);
    ctx.insert("registered_message", REGISTERED_MESSAGE);
    ctx.insert("dialog_title", SuccessDialog::TITLE);
    ctx.insert("dialog_tagline", SuccessDialog::TAGLINE);

    let page = tera.render("landing.html", &ctx).map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}

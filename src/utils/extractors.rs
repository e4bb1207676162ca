//! Extractores de Axum con rechazo propio
//!
//! Envuelven `Json` y `Path` para que un cuerpo mal formado o un id no numérico
//! respondan 400 con el cuerpo de error de la API.

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

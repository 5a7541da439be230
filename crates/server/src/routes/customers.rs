//! Customer CRUD handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use storeroom_core::{CustomerId, Email};

use crate::db::CustomerRepository;
use crate::error::{AppError, Result};
use crate::models::{Customer, NewCustomer};
use crate::routes::DeleteResponse;
use crate::state::AppState;

/// Build the customers router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list).post(create))
        .route(
            "/customers/{id}",
            get(get_one).put(replace).delete(delete_one),
        )
}

/// Request body for creating or replacing a customer.
///
/// Every field is optional at the serde level so a missing field becomes a
/// 400 validation failure instead of a body-rejection, mirroring the
/// original per-field checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl CustomerPayload {
    /// Validate the payload into a full field set.
    fn validate(self) -> Result<NewCustomer> {
        let (Some(name), Some(email), Some(address), Some(phone_number)) =
            (self.name, self.email, self.address, self.phone_number)
        else {
            return Err(AppError::Validation("Missing required fields".to_owned()));
        };

        let email = Email::parse(&email)
            .map_err(|e| AppError::Validation(format!("Invalid email: {e}")))?;

        Ok(NewCustomer {
            name,
            email,
            address,
            phone_number,
        })
    }
}

/// Parse a path id; an id that is not even shaped like one cannot resolve.
fn parse_id(id: &str) -> Result<CustomerId> {
    CustomerId::parse(id).map_err(|_| AppError::NotFound("Customer".to_owned()))
}

/// List all customers.
async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    let customers = CustomerRepository::new(state.pool()).list().await?;
    Ok(Json(customers))
}

/// Create a new customer.
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Customer>)> {
    let new = payload.validate()?;
    let customer = CustomerRepository::new(state.pool()).insert(new).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Fetch a customer by id.
async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Customer>> {
    let id = parse_id(&id)?;
    let customer = CustomerRepository::new(state.pool())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_owned()))?;
    Ok(Json(customer))
}

/// Replace all of a customer's fields.
async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<Customer>> {
    let id = parse_id(&id)?;
    let new = payload.validate()?;
    let customer = CustomerRepository::new(state.pool())
        .replace(&id, new)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_owned()))?;
    Ok(Json(customer))
}

/// Delete a customer unconditionally by id.
///
/// Orders referencing the customer are left untouched; the inconsistency is
/// accepted and observable only through unresolved references on order reads.
async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_id(&id)?;
    let deleted = CustomerRepository::new(state.pool()).delete(&id).await?;
    if deleted {
        Ok(Json(DeleteResponse {
            message: "Customer deleted successfully",
        }))
    } else {
        Err(AppError::NotFound("Customer".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CustomerPayload {
        CustomerPayload {
            name: Some("Jane Doe".to_owned()),
            email: Some("jane@example.com".to_owned()),
            address: Some("1 Main St".to_owned()),
            phone_number: Some("555-0100".to_owned()),
        }
    }

    #[test]
    fn validate_accepts_full_payload() {
        let new = full_payload().validate().unwrap();
        assert_eq!(new.name, "Jane Doe");
        assert_eq!(new.email.as_str(), "jane@example.com");
    }

    #[test]
    fn validate_rejects_missing_field() {
        let payload = CustomerPayload {
            phone_number: None,
            ..full_payload()
        };
        assert!(matches!(
            payload.validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let payload = CustomerPayload {
            email: Some("not-an-email".to_owned()),
            ..full_payload()
        };
        assert!(matches!(payload.validate(), Err(AppError::Validation(_))));
    }
}

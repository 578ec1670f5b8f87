//! Single-endpoint operation dispatch.
//!
//! The service exposes one handler for every path and verb; the `method`
//! query parameter selects the operation and `id` selects the target
//! ticket. Request bodies are parsed as JSON regardless of the declared
//! content type, and every response carries a JSON content type, empty
//! ones included.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ticketd_core::{CreateTicketRequest, TicketError, TicketPatch};

use crate::state::AppState;

/// Operation selected by the `method` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AllTickets,
    TicketById,
    CreateTicket,
    DeleteById,
    UpdateById,
}

impl Operation {
    /// Parse the dispatch key. Unknown keys map to no operation, which the
    /// handler answers with a bare 404.
    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "allTickets" => Some(Operation::AllTickets),
            "ticketById" => Some(Operation::TicketById),
            "createTicket" => Some(Operation::CreateTicket),
            "deleteById" => Some(Operation::DeleteById),
            "updateById" => Some(Operation::UpdateById),
            _ => None,
        }
    }
}

/// Query parameters for the dispatch endpoint.
#[derive(Debug, Deserialize)]
pub struct DispatchParams {
    pub method: Option<String>,
    pub id: Option<String>,
}

/// Body for record-not-found responses.
#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// Body for internal and parse failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DispatchParams>,
    body: Bytes,
) -> Response {
    let operation = params.method.as_deref().and_then(Operation::parse);

    let mut response = match operation {
        Some(Operation::AllTickets) => all_tickets(&state),
        Some(Operation::TicketById) => ticket_by_id(&state, params.id.as_deref()),
        Some(Operation::CreateTicket) => create_ticket(&state, &body),
        Some(Operation::DeleteById) => delete_by_id(&state, params.id.as_deref()),
        Some(Operation::UpdateById) => update_by_id(&state, params.id.as_deref(), &body),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    // The content type is JSON regardless of outcome, even for empty bodies.
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}

fn all_tickets(state: &AppState) -> Response {
    match state.ticket_store().all() {
        Ok(tickets) => (StatusCode::OK, Json(tickets)).into_response(),
        Err(e) => internal_error(e),
    }
}

fn ticket_by_id(state: &AppState, id: Option<&str>) -> Response {
    // A missing id behaves as a lookup miss.
    match state.ticket_store().get(id.unwrap_or_default()) {
        Ok(Some(ticket)) => (StatusCode::OK, Json(ticket)).into_response(),
        Ok(None) => ticket_not_found(),
        Err(e) => internal_error(e),
    }
}

/// Parse a JSON body, treating an absent body as an empty object.
fn parse_json_body<T: serde::de::DeserializeOwned + Default>(
    body: &Bytes,
) -> Result<T, serde_json::Error> {
    if body.is_empty() {
        Ok(T::default())
    } else {
        serde_json::from_slice(body)
    }
}

fn create_ticket(state: &AppState, body: &Bytes) -> Response {
    let request: CreateTicketRequest = match parse_json_body(body) {
        Ok(request) => request,
        Err(e) => return bad_request(&e),
    };

    match state.ticket_store().create(request) {
        Ok(ticket) => {
            tracing::info!(ticket_id = %ticket.id, "Ticket created");
            (StatusCode::OK, Json(ticket)).into_response()
        }
        Err(e) => internal_error(e),
    }
}

fn delete_by_id(state: &AppState, id: Option<&str>) -> Response {
    match state.ticket_store().delete(id.unwrap_or_default()) {
        Ok(()) => {
            tracing::info!(ticket_id = %id.unwrap_or_default(), "Ticket deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(TicketError::NotFound(_)) => ticket_not_found(),
        Err(e) => internal_error(e),
    }
}

fn update_by_id(state: &AppState, id: Option<&str>, body: &Bytes) -> Response {
    let patch: TicketPatch = match parse_json_body(body) {
        Ok(patch) => patch,
        Err(e) => return bad_request(&e),
    };

    match state.ticket_store().update(id.unwrap_or_default(), patch) {
        Ok(ticket) => {
            tracing::info!(ticket_id = %ticket.id, "Ticket updated");
            (StatusCode::OK, Json(ticket)).into_response()
        }
        Err(TicketError::NotFound(_)) => ticket_not_found(),
        Err(e) => internal_error(e),
    }
}

fn ticket_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody {
            message: "Ticket not found".to_string(),
        }),
    )
        .into_response()
}

fn bad_request(e: &serde_json::Error) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(e: TicketError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
        .into_response()
}

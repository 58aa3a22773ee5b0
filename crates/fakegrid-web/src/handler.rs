use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fakegrid_types::{Capability, CapabilityKind};

use crate::state::SharedGridState;

/// Operation types accepted by the container-create endpoint, mapped to the
/// capability kind they mint. Closed table: adding a container type is one
/// entry here.
const OPERATION_KINDS: &[(&str, CapabilityKind)] = &[("mkdir-immutable", CapabilityKind::Dir2Chk)];

fn kind_for_operation(operation: &str) -> Option<CapabilityKind> {
    OPERATION_KINDS
        .iter()
        .find(|(name, _)| *name == operation)
        .map(|(_, kind)| *kind)
}

fn valid_operations() -> String {
    OPERATION_KINDS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Deserialize)]
pub struct CreateParams {
    t: Option<String>,
}

#[derive(Deserialize)]
pub struct DownloadParams {
    uri: Option<String>,
}

/// `PUT /uri` — store a raw byte payload under a fresh immutable-file
/// capability and return the capability string.
pub async fn upload(State(state): State<SharedGridState>, body: Bytes) -> Response {
    match state.add_data(CapabilityKind::Chk, body) {
        Ok(cap) => (StatusCode::CREATED, cap.into_string()).into_response(),
        Err(err) => {
            // Duplicate capability out of a fresh mint is a generator
            // regression; surface it, never absorb it.
            tracing::error!(error = %err, "upload failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// `POST /uri?t=<operation>` — store the payload under a fresh capability
/// of the kind selected by the declared operation type.
pub async fn create(
    State(state): State<SharedGridState>,
    Query(params): Query<CreateParams>,
    body: Bytes,
) -> Response {
    let Some(operation) = params.t else {
        return (
            StatusCode::BAD_REQUEST,
            format!(
                "missing operation type 't' (valid are {})",
                valid_operations()
            ),
        )
            .into_response();
    };
    let Some(kind) = kind_for_operation(&operation) else {
        return (
            StatusCode::BAD_REQUEST,
            format!(
                "unrecognized operation type '{operation}' (valid are {})",
                valid_operations()
            ),
        )
            .into_response();
    };
    match state.add_data(kind, body) {
        Ok(cap) => (StatusCode::CREATED, cap.into_string()).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "container create failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

/// `GET /uri?uri=<capability>` — return the stored payload, or a
/// descriptive miss message.
///
/// A miss is ordinary response content, not an error: tests built on the
/// double assert on the "No data" text the way a real client would see a
/// grid report an unknown capability.
pub async fn download(
    State(state): State<SharedGridState>,
    Query(params): Query<DownloadParams>,
) -> Response {
    let Some(requested) = params.uri else {
        return (
            StatusCode::BAD_REQUEST,
            "missing capability in query parameters".to_string(),
        )
            .into_response();
    };

    // Malformed capability strings can't be in the store, so they get the
    // same miss message as well-formed-but-absent ones.
    let data = Capability::parse(&requested)
        .ok()
        .and_then(|cap| state.get_data(&cap));

    match data {
        Some(data) => data.into_response(),
        None => format!("No data for '{requested}'").into_response(),
    }
}

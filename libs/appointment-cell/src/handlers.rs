use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Duration;
use serde_json::{json, Value};
use uuid::Uuid;

use professional_cell::ScheduleError;
use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentError, AppointmentListQuery, AvailabilityQuery,
    BookAppointmentRequest, RescheduleAppointmentRequest, RescheduleOptionsQuery,
};
use crate::services::availability::AvailabilityService;
use crate::state::AppointmentState;

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<AppointmentState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let ledger = state.ledger.read().await;
    let service = AvailabilityService::new(&state.catalog, &ledger);

    let slots = service
        .available_slots(query.professional_id, query.date, query.duration_minutes)
        .map_err(into_app_error)?;

    let total = slots.len();
    Ok(Json(json!({
        "professional_id": query.professional_id,
        "date": query.date,
        "duration_minutes": query.duration_minutes,
        "slots": slots,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppointmentState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let ledger = state.ledger.read().await;
    let appointments = ledger.list(query.professional_id, query.status);

    let total = appointments.len();
    Ok(Json(json!({
        "appointments": appointments,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let ledger = state.ledger.read().await;
    let appointment = ledger.get(appointment_id).map_err(into_app_error)?.clone();

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppointmentState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let patient = state
        .profiles
        .require()
        .await
        .map_err(|_| into_app_error(AppointmentError::IncompleteProfile))?;

    let professional = state
        .catalog
        .get(request.professional_id)
        .map_err(|_| into_app_error(AppointmentError::ProfessionalNotFound))?;

    let mut ledger = state.ledger.write().await;
    let appointment = ledger
        .create(professional, request.start, request.end, patient)
        .map_err(into_app_error)?;
    let snapshot = ledger.snapshot();
    drop(ledger);

    state.persist(&snapshot).await;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let mut ledger = state.ledger.write().await;
    let appointment = ledger.cancel(appointment_id).map_err(into_app_error)?;
    let snapshot = ledger.snapshot();
    drop(ledger);

    state.persist(&snapshot).await;
    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn get_reschedule_options(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<Uuid>,
    Query(query): Query<RescheduleOptionsQuery>,
) -> Result<Json<Value>, AppError> {
    let ledger = state.ledger.read().await;
    let service = AvailabilityService::new(&state.catalog, &ledger);

    let slots = service
        .reschedule_options(appointment_id, query.date)
        .map_err(into_app_error)?;

    let total = slots.len();
    Ok(Json(json!({
        "appointment_id": appointment_id,
        "date": query.date,
        "slots": slots,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let mut ledger = state.ledger.write().await;

    // Reschedule moves an appointment, it never resizes it: derive the
    // new end from the current duration.
    let new_end = {
        let current = ledger.get(appointment_id).map_err(into_app_error)?;
        request.new_start + Duration::minutes(current.duration_minutes())
    };

    let appointment = ledger
        .reschedule(appointment_id, request.new_start, new_end)
        .map_err(into_app_error)?;
    let snapshot = ledger.snapshot();
    drop(ledger);

    state.persist(&snapshot).await;
    Ok(Json(appointment))
}

fn into_app_error(err: AppointmentError) -> AppError {
    match err {
        AppointmentError::NotFound | AppointmentError::ProfessionalNotFound => {
            AppError::NotFound(err.to_string())
        }
        AppointmentError::SlotNoLongerAvailable => AppError::Conflict(err.to_string()),
        AppointmentError::DurationMismatch { .. }
        | AppointmentError::CannotRescheduleCancelled
        | AppointmentError::IncompleteProfile => AppError::BadRequest(err.to_string()),
        AppointmentError::Schedule(ref schedule_err) => match schedule_err {
            ScheduleError::NoScheduleForWeekday(_) | ScheduleError::NotFound => {
                AppError::NotFound(err.to_string())
            }
            ScheduleError::Catalog(_) => AppError::Internal(err.to_string()),
            _ => AppError::ValidationError(err.to_string()),
        },
    }
}

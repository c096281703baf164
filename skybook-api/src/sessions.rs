use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use skybook_catalog::{
    BaggageOption, Flight, FlightId, MealOption, OptionId, PriceBreakdown, SeatMap, SeatToggle,
};
use skybook_core::{SearchParams, SearchRequest};
use skybook_order::{
    AddonToggle, BookingConfirmation, BookingDraft, PassengerDetails, PaymentDetails, WizardStep,
};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppJson};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub step: WizardStep,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub step: WizardStep,
    pub search: Option<SearchParams>,
    pub flight_id: Option<FlightId>,
    pub seats: Vec<String>,
    pub baggage: Vec<OptionId>,
    pub meals: Vec<OptionId>,
    pub quote: Option<PriceBreakdown>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FlightView {
    pub id: FlightId,
    pub airline: String,
    pub flight_number: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub duration: String,
    pub aircraft: String,
    pub base_price: i32,
    pub available_seats: usize,
    pub baggage_options: Vec<BaggageOption>,
    pub meal_options: Vec<MealOption>,
}

impl From<&Flight> for FlightView {
    fn from(flight: &Flight) -> Self {
        Self {
            id: flight.id,
            airline: flight.airline.clone(),
            flight_number: flight.flight_number.clone(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            duration: flight.duration_label(),
            aircraft: flight.aircraft.clone(),
            base_price: flight.base_price,
            available_seats: flight.seats.iter().filter(|s| s.available).count(),
            baggage_options: flight.baggage_options.clone(),
            meal_options: flight.meal_options.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlightListResponse {
    pub search: SearchParams,
    pub flights: Vec<FlightView>,
}

#[derive(Debug, Deserialize)]
pub struct SelectFlightRequest {
    pub flight_id: FlightId,
}

#[derive(Debug, Serialize)]
pub struct BookingView {
    pub flight: FlightView,
    pub search: SearchParams,
    pub required_seats: usize,
    pub quote: PriceBreakdown,
}

#[derive(Debug, Serialize)]
pub struct SeatToggleResponse {
    pub result: SeatToggle,
    pub selected: Vec<String>,
    pub required: usize,
}

#[derive(Debug, Serialize)]
pub struct AddonToggleResponse {
    pub result: AddonToggle,
    pub selected: Vec<OptionId>,
    pub quote: PriceBreakdown,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/{id}", get(get_session).delete(end_session))
        .route("/v1/sessions/{id}/search", post(search_flights))
        .route("/v1/sessions/{id}/flights", get(list_flights))
        .route("/v1/sessions/{id}/flight", post(select_flight))
        .route("/v1/sessions/{id}/seat-map", get(seat_map))
        .route("/v1/sessions/{id}/seats/{seat_id}", post(toggle_seat))
        .route("/v1/sessions/{id}/baggage/{option_id}", post(toggle_baggage))
        .route("/v1/sessions/{id}/meals/{option_id}", post(toggle_meal))
        .route("/v1/sessions/{id}/quote", get(quote))
        .route("/v1/sessions/{id}/passenger", put(set_passenger))
        .route("/v1/sessions/{id}/payment", put(set_payment))
        .route("/v1/sessions/{id}/booking", post(submit_booking))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/sessions
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let mut sessions = state.sessions.write().await;
    let session = sessions.create();

    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.id,
            step: session.step(),
        }),
    )
}

/// GET /v1/sessions/{id}
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id)?;
    let draft = session.draft().ok();

    Ok(Json(SessionSummary {
        session_id: session.id,
        step: session.step(),
        search: session.search().cloned(),
        flight_id: draft.map(|d| d.flight().id),
        seats: draft.map(|d| d.selected_seats().iter().cloned().collect()).unwrap_or_default(),
        baggage: draft.map(|d| d.selected_baggage().iter().copied().collect()).unwrap_or_default(),
        meals: draft.map(|d| d.selected_meals().iter().copied().collect()).unwrap_or_default(),
        quote: draft.map(|d| d.quote(&state.pricing)),
        created_at: session.created_at,
        last_active: session.last_active,
    }))
}

/// DELETE /v1/sessions/{id}
async fn end_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, AppError> {
    state.sessions.write().await.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/sessions/{id}/search
async fn search_flights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<SearchRequest>,
) -> Result<Json<FlightListResponse>, AppError> {
    let search = SearchParams::try_from(req)?;

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id)?;
    let flights: Vec<FlightView> = session
        .submit_search(search.clone(), state.catalog.as_ref())
        .await
        .iter()
        .map(FlightView::from)
        .collect();

    Ok(Json(FlightListResponse { search, flights }))
}

/// GET /v1/sessions/{id}/flights
async fn list_flights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlightListResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id)?;
    let flights: Vec<FlightView> = session.flights()?.iter().map(FlightView::from).collect();
    // flights() only succeeds once a search exists
    let search = session
        .search()
        .cloned()
        .ok_or_else(|| AppError::ConflictError("No search submitted".to_string()))?;

    Ok(Json(FlightListResponse { search, flights }))
}

/// POST /v1/sessions/{id}/flight
async fn select_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<SelectFlightRequest>,
) -> Result<Json<BookingView>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id)?;
    let draft = session.select_flight(req.flight_id)?;

    Ok(Json(booking_view(draft, &state)))
}

/// GET /v1/sessions/{id}/seat-map
async fn seat_map(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SeatMap>, AppError> {
    let mut sessions = state.sessions.write().await;
    let draft = sessions.get_mut(&id)?.draft()?;
    Ok(Json(draft.seat_map()))
}

/// POST /v1/sessions/{id}/seats/{seat_id}
async fn toggle_seat(
    State(state): State<AppState>,
    Path((id, seat_id)): Path<(Uuid, String)>,
) -> Result<Json<SeatToggleResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let draft = sessions.get_mut(&id)?.draft_mut()?;
    let result = draft.toggle_seat(&seat_id);
    if !result.changed() {
        debug!("Session {}: seat {} left unchanged ({:?})", id, seat_id, result);
    }

    Ok(Json(SeatToggleResponse {
        result,
        selected: draft.selected_seats().iter().cloned().collect(),
        required: draft.seats().required(),
    }))
}

/// POST /v1/sessions/{id}/baggage/{option_id}
async fn toggle_baggage(
    State(state): State<AppState>,
    Path((id, option_id)): Path<(Uuid, OptionId)>,
) -> Result<Json<AddonToggleResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let draft = sessions.get_mut(&id)?.draft_mut()?;
    let result = draft.toggle_baggage(option_id);
    debug!("Session {}: baggage {} -> {:?}", id, option_id, result);

    Ok(Json(AddonToggleResponse {
        result,
        selected: draft.selected_baggage().iter().copied().collect(),
        quote: draft.quote(&state.pricing),
    }))
}

/// POST /v1/sessions/{id}/meals/{option_id}
async fn toggle_meal(
    State(state): State<AppState>,
    Path((id, option_id)): Path<(Uuid, OptionId)>,
) -> Result<Json<AddonToggleResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let draft = sessions.get_mut(&id)?.draft_mut()?;
    let result = draft.toggle_meal(option_id);
    debug!("Session {}: meal {} -> {:?}", id, option_id, result);

    Ok(Json(AddonToggleResponse {
        result,
        selected: draft.selected_meals().iter().copied().collect(),
        quote: draft.quote(&state.pricing),
    }))
}

/// GET /v1/sessions/{id}/quote
async fn quote(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<PriceBreakdown>, AppError> {
    let mut sessions = state.sessions.write().await;
    let draft = sessions.get_mut(&id)?.draft()?;
    Ok(Json(draft.quote(&state.pricing)))
}

/// PUT /v1/sessions/{id}/passenger
async fn set_passenger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<PassengerDetails>,
) -> Result<StatusCode, AppError> {
    let mut sessions = state.sessions.write().await;
    sessions.get_mut(&id)?.draft_mut()?.set_passenger(req);
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /v1/sessions/{id}/payment
async fn set_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<PaymentDetails>,
) -> Result<StatusCode, AppError> {
    let mut sessions = state.sessions.write().await;
    sessions.get_mut(&id)?.draft_mut()?.set_payment(req);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/sessions/{id}/booking
async fn submit_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let mut sessions = state.sessions.write().await;
    let confirmation = sessions.get_mut(&id)?.submit_booking(&state.pricing)?;
    Ok(Json(confirmation))
}

fn booking_view(draft: &BookingDraft, state: &AppState) -> BookingView {
    BookingView {
        flight: FlightView::from(draft.flight()),
        search: draft.search().clone(),
        required_seats: draft.seats().required(),
        quote: draft.quote(&state.pricing),
    }
}

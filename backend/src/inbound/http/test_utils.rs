//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};
use mockable::DefaultClock;

use crate::domain::ports::StorageProbe;
use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::MemoryStore;

/// State over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let clock = Arc::new(DefaultClock);
    HttpState::new(HttpStatePorts::backed_by(
        Arc::new(MemoryStore::new(clock.clone())),
        clock,
    ))
}

/// In-memory state with the storage probe replaced.
pub fn state_with_probe(probe: impl StorageProbe + 'static) -> HttpState {
    let mut state = memory_state();
    state.storage = Arc::new(probe);
    state
}

/// App with every community route registered over `state`.
pub fn community_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

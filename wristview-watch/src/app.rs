//! Route table and navigation shortcuts.

use crate::model::BeaconState;
use crate::screens::{
    ContactsScreen, EmergencyConfirmationScreen, EmergencyScreen, HomeScreen, NewsScreen,
    TeamScreen,
};
use wristview::{AppContext, Router};

wristview::named_routes! {
    home => "/",
    contacts => "/contacts",
    news => "/news",
    team => "/team",
    emergency => "/emergency",
    emergency_confirmation => "/emergency-confirmation",
}

/// Build the watch's router: one factory per destination, shared beacon
/// state threaded into the screens that read or write it, home as the
/// screen shown at startup.
pub fn build_router(cx: &AppContext) -> Router {
    let beacon = cx.new_entity(BeaconState::default());
    let home_beacon = beacon.clone();
    let confirmation_beacon = beacon;

    Router::new()
        .route(HOME, move |_| Box::new(HomeScreen::new(home_beacon.clone())))
        .route(CONTACTS, |_| Box::new(ContactsScreen::new()))
        .route(NEWS, |_| Box::new(NewsScreen::new()))
        .route(TEAM, |_| Box::new(TeamScreen::new()))
        .route(EMERGENCY, |_| Box::new(EmergencyScreen::new()))
        .route(EMERGENCY_CONFIRMATION, move |_| {
            Box::new(EmergencyConfirmationScreen::new(confirmation_beacon.clone()))
        })
        .starts_at(HOME)
}

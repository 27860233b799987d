#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive front end for the Alerta Vecinal client.
//!
//! Walks through the app's screens from a terminal menu: sign-in, the
//! incident map, nearby emergency resources, community chat, the profile
//! and settings. Backends are the simulated ones the app ships with, plus
//! Nominatim for address lookups.

mod account;
mod chat;
mod map;
mod settings;

use std::sync::Arc;

use alerta_vecinal_account::{
    EmergencyContacts, ProfileService, Session, SimulatedAuthService, auth::DEFAULT_AUTH_DELAY,
};
use alerta_vecinal_chat::ChatStore;
use alerta_vecinal_geo_models::region::DEFAULT_CENTER;
use alerta_vecinal_geocoder::NominatimGeocoder;
use alerta_vecinal_location::SimulatedLocationProvider;
use alerta_vecinal_map::MapSession;
use alerta_vecinal_settings::SettingsStore;
use dialoguer::Select;

/// Everything the app keeps for the lifetime of the process.
struct App {
    session: Session,
    profile: ProfileService,
    contacts: EmergencyContacts,
    map: MapSession,
    chat: ChatStore,
    settings: SettingsStore,
}

/// Top-level screens.
enum Tool {
    Account,
    Map,
    Resources,
    Chat,
    Profile,
    Settings,
    Exit,
}

impl Tool {
    const ALL: &[Self] = &[
        Self::Account,
        Self::Map,
        Self::Resources,
        Self::Chat,
        Self::Profile,
        Self::Settings,
        Self::Exit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Account => "Sign in / sign up",
            Self::Map => "Incident map",
            Self::Resources => "Nearby emergency resources",
            Self::Chat => "Community chat",
            Self::Profile => "Profile & emergency contacts",
            Self::Settings => "Settings",
            Self::Exit => "Exit",
        }
    }
}

fn init_logger() {
    pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .try_init()
        .ok(); // Ignore error if logger was already set
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    println!("Alerta Vecinal");
    println!();

    let settings = SettingsStore::load(SettingsStore::default_path())?;
    let mut app = App {
        session: Session::new(Arc::new(SimulatedAuthService::new(DEFAULT_AUTH_DELAY))),
        profile: ProfileService::default(),
        contacts: EmergencyContacts::default(),
        map: MapSession::new(
            Arc::new(SimulatedLocationProvider::fixed(DEFAULT_CENTER)),
            Arc::new(NominatimGeocoder::new()?),
        ),
        chat: ChatStore::with_sample_messages(),
        settings,
    };

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    loop {
        println!();
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Tool::ALL[idx] {
            Tool::Account => account::run(&mut app.session).await?,
            Tool::Map => map::run(&mut app.map).await?,
            Tool::Resources => map::run_resources(&mut app.map).await?,
            Tool::Chat => chat::run(&mut app.chat)?,
            Tool::Profile => account::run_profile(&mut app.profile, &mut app.contacts).await?,
            Tool::Settings => settings::run(&mut app.settings)?,
            Tool::Exit => break,
        }
    }

    Ok(())
}

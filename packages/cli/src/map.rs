//! The incident map and nearby resources screens.

use alerta_vecinal_geo_models::Coordinate;
use alerta_vecinal_incident::suggest::{DEFAULT_SUGGESTION_DELAY, suggest_addresses_after};
use alerta_vecinal_incident_models::IncidentType;
use alerta_vecinal_location::DEFAULT_UPDATE_INTERVAL;
use alerta_vecinal_map::{Camera, MapSession};
use dialoguer::{Confirm, Input, Select};

/// Number of position fixes collected when ranking resources.
const TRACKED_UPDATES: u32 = 3;
const MAX_SUGGESTIONS: usize = 3;

enum MapAction {
    List,
    Filter,
    Recent,
    CenterOnUser,
    Tap,
    ReportHere,
    ZoomIn,
    ZoomOut,
    TogglePerspective,
    Back,
}

impl MapAction {
    const ALL: &[Self] = &[
        Self::List,
        Self::Filter,
        Self::Recent,
        Self::CenterOnUser,
        Self::Tap,
        Self::ReportHere,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::TogglePerspective,
        Self::Back,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::List => "List visible incidents",
            Self::Filter => "Filter by type",
            Self::Recent => "Jump to most recent",
            Self::CenterOnUser => "Center on my location",
            Self::Tap => "Tap the map (report at a point)",
            Self::ReportHere => "Report at my location (typed address)",
            Self::ZoomIn => "Zoom in",
            Self::ZoomOut => "Zoom out",
            Self::TogglePerspective => "Toggle 3-D view",
            Self::Back => "Back",
        }
    }
}

/// The incident map.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub async fn run(map: &mut MapSession) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = MapAction::ALL.iter().map(MapAction::label).collect();

    loop {
        print_camera(map.camera());
        let idx = Select::new()
            .with_prompt("Mapa")
            .items(&labels)
            .default(0)
            .interact()?;

        match MapAction::ALL[idx] {
            MapAction::List => print_incidents(map),
            MapAction::Filter => {
                let types = IncidentType::predefined();
                let titles: Vec<&str> = types.iter().map(IncidentType::title).collect();
                let idx = Select::new()
                    .with_prompt("Tipo (seleccionar de nuevo para quitar el filtro)")
                    .items(&titles)
                    .interact()?;
                map.toggle_filter(types[idx].clone());
                match map.filter() {
                    Some(filter) => println!("Filtro: {filter}"),
                    None => println!("Sin filtro"),
                }
            }
            MapAction::Recent => match map.show_recent() {
                Some(incident) => println!("{} - {}", incident.title(), incident.address),
                None => println!("No hay incidentes."),
            },
            MapAction::CenterOnUser => match map.center_on_user().await {
                Some(coordinate) => println!("Ubicación: {coordinate}"),
                None => println!("No se pudo obtener la ubicación."),
            },
            MapAction::Tap => {
                let latitude: f64 = Input::new().with_prompt("Latitud").interact_text()?;
                let longitude: f64 = Input::new().with_prompt("Longitud").interact_text()?;
                let address = map
                    .handle_tap(Coordinate::new(latitude, longitude))
                    .await
                    .to_string();
                println!("Dirección: {address}");
                report(map).await?;
            }
            MapAction::ReportHere => {
                let address = prompt_address().await?;
                if map.select_user_location(address) {
                    report(map).await?;
                } else {
                    println!("Centra el mapa en tu ubicación primero.");
                }
            }
            MapAction::ZoomIn => map.zoom_in(),
            MapAction::ZoomOut => map.zoom_out(),
            MapAction::TogglePerspective => map.set_perspective(!map.is_perspective()),
            MapAction::Back => return Ok(()),
        }
    }
}

fn print_camera(camera: Camera) {
    match camera {
        Camera::Region(region) => println!(
            "\n[{}  span {:.3}°]",
            region.center, region.span.latitude_delta
        ),
        Camera::Perspective {
            center,
            distance,
            pitch,
            ..
        } => println!("\n[{center}  3-D {distance:.0} m, {pitch:.0}°]"),
    }
}

fn print_incidents(map: &MapSession) {
    let incidents = map.visible_incidents();
    if incidents.is_empty() {
        println!("No hay incidentes.");
        return;
    }
    for incident in incidents {
        println!(
            "#{:<5} {:<22} {}  ({})",
            incident.id,
            incident.title(),
            incident.address,
            incident.timestamp().format("%d/%m %H:%M")
        );
        if let Some(description) = &incident.description {
            println!("       {description}");
        }
    }
}

/// Lets the user type an address, offering completions.
async fn prompt_address() -> Result<String, Box<dyn std::error::Error>> {
    let query: String = Input::new()
        .with_prompt("Dirección")
        .allow_empty(true)
        .interact_text()?;
    let suggestions = suggest_addresses_after(&query, DEFAULT_SUGGESTION_DELAY).await;
    if suggestions.is_empty() {
        return Ok(query);
    }

    let mut options = address_options(query, suggestions);
    let idx = Select::new()
        .with_prompt("Sugerencias")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(options.swap_remove(idx))
}

/// The typed text first, then at most [`MAX_SUGGESTIONS`] completions.
fn address_options(query: String, suggestions: Vec<String>) -> Vec<String> {
    std::iter::once(query)
        .chain(suggestions.into_iter().take(MAX_SUGGESTIONS))
        .collect()
}

/// Fills in and files a report at the current selection.
async fn report(map: &mut MapSession) -> Result<(), Box<dyn std::error::Error>> {
    let Some(mut draft) = map.report_at_selection() else {
        return Ok(());
    };

    let types = IncidentType::predefined();
    let mut titles: Vec<&str> = types.iter().map(IncidentType::title).collect();
    titles.push("Otro");
    let idx = Select::new()
        .with_prompt("Tipo de incidente")
        .items(&titles)
        .default(0)
        .interact()?;
    draft.selected_type = types.get(idx).cloned();
    if draft.selected_type.is_none() {
        draft.custom_type = Input::new()
            .with_prompt("Tipo")
            .allow_empty(true)
            .interact_text()?;
    }

    draft.address = Input::new()
        .with_prompt("Dirección")
        .default(draft.address.clone())
        .allow_empty(true)
        .interact_text()?;
    if let Some(found) = map.resolve_address(&draft.address).await {
        log::debug!("'{}' resolves to {found}", draft.address);
    }
    draft.description = Input::new()
        .with_prompt("Descripción")
        .allow_empty(true)
        .interact_text()?;
    let video: String = Input::new()
        .with_prompt("Video (URL, opcional)")
        .allow_empty(true)
        .interact_text()?;
    if !video.is_empty() {
        draft.video_url = Some(video);
    }

    if !draft.can_submit() {
        println!("La dirección es obligatoria.");
        return Ok(());
    }
    if !Confirm::new()
        .with_prompt(format!("Reportar {}?", draft.final_type()))
        .default(true)
        .interact()?
    {
        return Ok(());
    }

    match map.submit_report(draft) {
        Ok(incident) => println!("Reporte #{} enviado.", incident.id),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// Nearby emergency resources, ranked as the user's position updates.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub async fn run_resources(map: &mut MapSession) -> Result<(), Box<dyn std::error::Error>> {
    let mut subscription = map.subscribe_location();
    let stop = subscription.stop_handle();
    let stopper = async {
        tokio::time::sleep(DEFAULT_UPDATE_INTERVAL * TRACKED_UPDATES).await;
        stop.stop();
    };
    let (updates, ()) = tokio::join!(map.track_resources(&mut subscription), stopper);
    log::debug!("Ranked resources from {updates} position updates");

    let resources = map.nearby_resources();
    for resource in &resources {
        let distance = map
            .resources()
            .describe(resource)
            .unwrap_or_else(|| "distancia desconocida".to_string());
        println!(
            "{:<9} {:<36} {:<10} {distance}",
            resource.resource_type, resource.name, resource.phone
        );
    }

    let mut names: Vec<&str> = resources.iter().map(|r| r.name.as_str()).collect();
    names.push("Volver");
    let idx = Select::new()
        .with_prompt("Llamar")
        .items(&names)
        .default(names.len() - 1)
        .interact()?;
    if let Some(resource) = resources.get(idx) {
        println!("Llamando {}", resource.dial_uri());
    }

    Ok(())
}

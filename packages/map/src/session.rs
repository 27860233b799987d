//! State and actions behind the map screen.

use std::sync::Arc;

use alerta_vecinal_geo_models::{
    Coordinate, MapRegion,
    region::{INCIDENT_SPAN_DELTA, USER_SPAN_DELTA},
};
use alerta_vecinal_geocoder::Geocoder;
use alerta_vecinal_incident::{IncidentCatalog, IncidentError, IncidentReport};
use alerta_vecinal_incident_models::{Incident, IncidentType};
use alerta_vecinal_location::{LocationProvider, LocationSubscription};
use alerta_vecinal_resource::{Resource, ResourceCatalog};
use futures::StreamExt as _;

use crate::Camera;

/// Address shown for a tapped point the geocoder could not describe.
pub const FALLBACK_ADDRESS: &str = "Ubicación seleccionada";

/// One open map screen.
pub struct MapSession {
    incidents: IncidentCatalog,
    resources: ResourceCatalog,
    region: MapRegion,
    filter: Option<IncidentType>,
    user_location: Option<Coordinate>,
    selected_location: Option<Coordinate>,
    pending_address: String,
    perspective: bool,
    location: Arc<dyn LocationProvider>,
    geocoder: Arc<dyn Geocoder>,
}

impl std::fmt::Debug for MapSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSession")
            .field("incidents", &self.incidents.len())
            .field("region", &self.region)
            .field("filter", &self.filter)
            .field("user_location", &self.user_location)
            .field("selected_location", &self.selected_location)
            .field("perspective", &self.perspective)
            .finish_non_exhaustive()
    }
}

impl MapSession {
    /// Opens the map over the default region with no incidents and the
    /// seeded emergency resources.
    #[must_use]
    pub fn new(location: Arc<dyn LocationProvider>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            incidents: IncidentCatalog::new(),
            resources: ResourceCatalog::seeded(),
            region: MapRegion::default(),
            filter: None,
            user_location: None,
            selected_location: None,
            pending_address: String::new(),
            perspective: false,
            location,
            geocoder,
        }
    }

    #[must_use]
    pub fn with_incidents(mut self, incidents: IncidentCatalog) -> Self {
        self.incidents = incidents;
        self
    }

    #[must_use]
    pub const fn incidents(&self) -> &IncidentCatalog {
        &self.incidents
    }

    #[must_use]
    pub const fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }

    #[must_use]
    pub const fn region(&self) -> MapRegion {
        self.region
    }

    #[must_use]
    pub const fn filter(&self) -> Option<&IncidentType> {
        self.filter.as_ref()
    }

    #[must_use]
    pub const fn user_location(&self) -> Option<Coordinate> {
        self.user_location
    }

    #[must_use]
    pub const fn selected_location(&self) -> Option<Coordinate> {
        self.selected_location
    }

    /// Address that a report started from the current selection will carry.
    #[must_use]
    pub fn pending_address(&self) -> &str {
        &self.pending_address
    }

    /// Incidents shown as markers under the current type filter.
    #[must_use]
    pub fn visible_incidents(&self) -> Vec<&Incident> {
        self.incidents.filter(self.filter.as_ref())
    }

    /// Selects `incident_type` as the filter, or clears the filter if it
    /// was already selected.
    pub fn toggle_filter(&mut self, incident_type: IncidentType) {
        if self.filter.as_ref() == Some(&incident_type) {
            self.filter = None;
        } else {
            self.filter = Some(incident_type);
        }
    }

    /// Clears the filter and jumps to the latest incident, if any.
    pub fn show_recent(&mut self) -> Option<&Incident> {
        self.filter = None;
        let last = self.incidents.last()?;
        self.region.focus(last.coordinate, INCIDENT_SPAN_DELTA);
        Some(last)
    }

    pub fn zoom_in(&mut self) {
        self.region.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.region.zoom_out();
    }

    pub const fn set_perspective(&mut self, enabled: bool) {
        self.perspective = enabled;
    }

    #[must_use]
    pub const fn is_perspective(&self) -> bool {
        self.perspective
    }

    #[must_use]
    pub const fn camera(&self) -> Camera {
        Camera::for_region(self.region, self.perspective)
    }

    /// Asks for the device position and centers on it.
    ///
    /// A failed request is logged and leaves the session untouched.
    pub async fn center_on_user(&mut self) -> Option<Coordinate> {
        match self.location.request_location().await {
            Ok(coordinate) => {
                self.user_location = Some(coordinate);
                self.region.focus(coordinate, USER_SPAN_DELTA);
                Some(coordinate)
            }
            Err(e) => {
                log::warn!("Could not get user location: {e}");
                None
            }
        }
    }

    /// Selects the tapped point for a new report and looks up its address.
    ///
    /// Returns the address that will prefill the report, which is
    /// [`FALLBACK_ADDRESS`] when the point cannot be described.
    pub async fn handle_tap(&mut self, coordinate: Coordinate) -> &str {
        self.selected_location = Some(coordinate);

        let address = match self.geocoder.reverse(coordinate).await {
            Ok(Some(placemark)) => placemark.format_address(),
            Ok(None) => String::new(),
            Err(e) => {
                log::warn!("Reverse geocoding {coordinate} failed: {e}");
                String::new()
            }
        };

        self.pending_address = if address.is_empty() {
            FALLBACK_ADDRESS.to_string()
        } else {
            address
        };
        &self.pending_address
    }

    /// Selects the user's last known position for a report whose address
    /// was typed by hand. Returns `false` when the position is unknown.
    pub fn select_user_location(&mut self, address: impl Into<String>) -> bool {
        self.pending_address = address.into();
        self.selected_location = self.user_location;
        self.selected_location.is_some()
    }

    /// Starts a report draft at the selected point, prefilled with the
    /// pending address.
    #[must_use]
    pub fn report_at_selection(&self) -> Option<IncidentReport> {
        let coordinate = self.selected_location?;
        Some(IncidentReport {
            address: self.pending_address.clone(),
            ..IncidentReport::at(coordinate)
        })
    }

    /// Looks up where a typed report address lies.
    ///
    /// The result is informational: a draft stays at the point that was
    /// tapped or located. Blank input and [`FALLBACK_ADDRESS`] are not
    /// looked up, and a failed lookup yields `None`.
    pub async fn resolve_address(&self, address: &str) -> Option<Coordinate> {
        let address = address.trim();
        if address.is_empty() || address == FALLBACK_ADDRESS {
            return None;
        }
        match self.geocoder.forward(address).await {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Geocoding '{address}' failed: {e}");
                None
            }
        }
    }

    /// Files `report` and clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`IncidentError`] if the draft is incomplete; the selection
    /// is kept so the form can be corrected.
    pub fn submit_report(&mut self, report: IncidentReport) -> Result<&Incident, IncidentError> {
        let incident = report.submit()?;
        self.selected_location = None;
        self.pending_address.clear();
        Ok(self.incidents.add(incident))
    }

    /// Starts continuous location updates for the resource list.
    #[must_use]
    pub fn subscribe_location(&self) -> LocationSubscription {
        self.location.subscribe()
    }

    /// Records a position fix and re-ranks resources by distance from it.
    pub fn apply_location_update(&mut self, coordinate: Coordinate) {
        self.user_location = Some(coordinate);
        self.resources.update_distances(coordinate);
    }

    /// Feeds updates into [`apply_location_update`](Self::apply_location_update)
    /// until the subscription ends or is stopped. Returns the number of
    /// updates applied.
    pub async fn track_resources(&mut self, subscription: &mut LocationSubscription) -> usize {
        let mut updates = 0;
        while let Some(coordinate) = subscription.next().await {
            self.apply_location_update(coordinate);
            updates += 1;
        }
        log::debug!("Stopped tracking resources after {updates} updates");
        updates
    }

    /// Resources nearest first. Before the first position fix this is the
    /// registry order.
    #[must_use]
    pub fn nearby_resources(&self) -> Vec<&Resource> {
        self.resources.sorted()
    }
}

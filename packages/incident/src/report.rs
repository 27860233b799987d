//! Draft of a new incident report, as filled in on the "add marker" form.

use alerta_vecinal_geo_models::Coordinate;
use alerta_vecinal_incident_models::{Incident, IncidentType, Photo};
use rand::Rng as _;

use crate::IncidentError;

/// Range that generated report ids are drawn from.
pub const GENERATED_ID_RANGE: std::ops::RangeInclusive<i64> = 1000..=9999;

/// The in-progress "new incident" form.
///
/// A predefined type is selected by default. Clearing the selection lets
/// the reporter name their own type in [`custom_type`](Self::custom_type).
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentReport {
    pub coordinate: Option<Coordinate>,
    pub address: String,
    pub selected_type: Option<IncidentType>,
    pub custom_type: String,
    pub description: String,
    pub photos: Vec<Photo>,
    pub video_url: Option<String>,
}

impl Default for IncidentReport {
    fn default() -> Self {
        Self {
            coordinate: None,
            address: String::new(),
            selected_type: Some(IncidentType::Robbery),
            custom_type: String::new(),
            description: String::new(),
            photos: Vec::new(),
            video_url: None,
        }
    }
}

impl IncidentReport {
    /// Starts a report pinned at `coordinate`.
    #[must_use]
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            ..Self::default()
        }
    }

    /// The type the report will be filed under.
    ///
    /// The selected predefined type wins; otherwise the custom text becomes
    /// an "other" type, falling back to the generic placeholder.
    #[must_use]
    pub fn final_type(&self) -> IncidentType {
        self.selected_type
            .clone()
            .unwrap_or_else(|| IncidentType::other(self.custom_type.clone()))
    }

    /// Whether the form has everything needed to submit.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.coordinate.is_some() && !self.address.trim().is_empty()
    }

    /// Files the report under a random id in [`GENERATED_ID_RANGE`].
    ///
    /// # Errors
    ///
    /// * [`IncidentError::MissingCoordinate`] if no location was picked
    /// * [`IncidentError::MissingAddress`] if the address is blank
    pub fn submit(self) -> Result<Incident, IncidentError> {
        let id = rand::rng().random_range(GENERATED_ID_RANGE);
        self.submit_with_id(id)
    }

    /// Files the report under `id`.
    ///
    /// # Errors
    ///
    /// * [`IncidentError::MissingCoordinate`] if no location was picked
    /// * [`IncidentError::MissingAddress`] if the address is blank
    pub fn submit_with_id(self, id: i64) -> Result<Incident, IncidentError> {
        let coordinate = self.coordinate.ok_or(IncidentError::MissingCoordinate)?;
        if self.address.trim().is_empty() {
            return Err(IncidentError::MissingAddress);
        }

        let incident_type = self.final_type();
        let mut incident = Incident::new(id, incident_type, coordinate, self.address);

        if !self.description.is_empty() {
            incident = incident.with_description(self.description);
        }
        if !self.photos.is_empty() {
            incident = incident.with_photos(self.photos);
        }
        if let Some(video_url) = self.video_url {
            incident = incident.with_video_url(video_url);
        }

        log::info!(
            "Submitted incident {} ({}) at {}",
            incident.id,
            incident.title(),
            incident.address
        );

        Ok(incident)
    }
}

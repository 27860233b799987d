//! Append-only collection of reported incidents.

use alerta_vecinal_incident_models::{Incident, IncidentType};

/// The incidents known to this client, in the order they were reported.
///
/// There is no deduplication and no capacity bound; reports are never
/// edited or removed.
#[derive(Debug, Clone, Default)]
pub struct IncidentCatalog {
    incidents: Vec<Incident>,
}

impl IncidentCatalog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            incidents: Vec::new(),
        }
    }

    /// Appends a report to the end of the catalog and returns it.
    pub fn add(&mut self, incident: Incident) -> &Incident {
        log::debug!(
            "Adding incident {} ({}) at {}",
            incident.id,
            incident.incident_type.id(),
            incident.coordinate
        );
        self.incidents.push(incident);
        &self.incidents[self.incidents.len() - 1]
    }

    /// Incidents whose type equals `incident_type`, or every incident when
    /// no filter is set.
    ///
    /// "Other" types match on their label as well as the variant.
    #[must_use]
    pub fn filter(&self, incident_type: Option<&IncidentType>) -> Vec<&Incident> {
        match incident_type {
            None => self.incidents.iter().collect(),
            Some(wanted) => self
                .incidents
                .iter()
                .filter(|incident| &incident.incident_type == wanted)
                .collect(),
        }
    }

    /// The most recently added incident.
    #[must_use]
    pub fn last(&self) -> Option<&Incident> {
        self.incidents.last()
    }

    /// Incidents from newest to oldest report.
    pub fn recent(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter().rev()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    #[must_use]
    pub fn all(&self) -> &[Incident] {
        &self.incidents
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.incidents.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

impl Extend<Incident> for IncidentCatalog {
    fn extend<T: IntoIterator<Item = Incident>>(&mut self, iter: T) {
        for incident in iter {
            self.add(incident);
        }
    }
}

impl FromIterator<Incident> for IncidentCatalog {
    fn from_iter<T: IntoIterator<Item = Incident>>(iter: T) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use alerta_vecinal_geo_models::Coordinate;

    use super::*;

    fn incident(id: i64, incident_type: IncidentType) -> Incident {
        Incident::new(
            id,
            incident_type,
            Coordinate::new(8.38, -80.15),
            format!("Casa #{id}"),
        )
    }

    fn catalog() -> IncidentCatalog {
        [
            incident(1, IncidentType::Robbery),
            incident(2, IncidentType::other("Ruido excesivo")),
            incident(3, IncidentType::Fire),
            incident(4, IncidentType::other("Basura")),
            incident(5, IncidentType::Robbery),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn no_filter_returns_everything_in_order() {
        let catalog = catalog();
        let ids: Vec<i64> = catalog.filter(None).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filter_matches_predefined_type() {
        let catalog = catalog();
        let ids: Vec<i64> = catalog
            .filter(Some(&IncidentType::Robbery))
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn filter_matches_other_label_exactly() {
        let catalog = catalog();
        let matched = catalog.filter(Some(&IncidentType::other("Ruido excesivo")));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 2);
        assert!(catalog.filter(Some(&IncidentType::other("Ruido"))).is_empty());
    }

    #[test]
    fn filter_result_is_subset_with_equal_types() {
        let catalog = catalog();
        for wanted in IncidentType::predefined() {
            let matched = catalog.filter(Some(&wanted));
            let expected = catalog
                .all()
                .iter()
                .filter(|i| i.incident_type == wanted)
                .count();
            assert_eq!(matched.len(), expected);
            assert!(matched.iter().all(|i| i.incident_type == wanted));
        }
    }

    #[test]
    fn add_keeps_duplicates() {
        let mut catalog = IncidentCatalog::new();
        let report = incident(7, IncidentType::Medical);
        catalog.add(report.clone());
        catalog.add(report);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn last_and_recent_follow_insertion_order() {
        let catalog = catalog();
        assert_eq!(catalog.last().map(|i| i.id), Some(5));
        let recent: Vec<i64> = catalog.recent().map(|i| i.id).collect();
        assert_eq!(recent, vec![5, 4, 3, 2, 1]);
        assert!(IncidentCatalog::new().last().is_none());
    }

    #[test]
    fn get_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(3).map(Incident::title), Some("Incendio"));
        assert!(catalog.get(99).is_none());
    }
}

//! Emergency resources ranked by distance from the user.

use std::collections::BTreeMap;

use alerta_vecinal_geo_models::Coordinate;

use crate::{Resource, estimate_travel_time, format_distance, registry};

/// Resources plus the most recently computed distance to each of them.
///
/// Distances are unknown until the first location fix arrives; resources
/// without a distance rank after every resource that has one.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
    /// resource id -> meters from the user
    distances: BTreeMap<i64, f64>,
}

impl ResourceCatalog {
    #[must_use]
    pub const fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources,
            distances: BTreeMap::new(),
        }
    }

    /// A catalog of the embedded seed resources.
    #[must_use]
    pub fn seeded() -> Self {
        let resources = registry::seed_resources();
        log::debug!("Loaded {} emergency resources", resources.len());
        Self::new(resources)
    }

    /// Recomputes every resource's distance from `user`.
    pub fn update_distances(&mut self, user: Coordinate) {
        self.distances = self
            .resources
            .iter()
            .map(|resource| (resource.id, user.distance_to(resource.coordinate)))
            .collect();
        log::trace!(
            "Updated distances to {} resources from {user}",
            self.distances.len()
        );
    }

    /// Recomputes distances from `user` and returns the ranked resources.
    pub fn sort_by_distance(&mut self, user: Coordinate) -> Vec<&Resource> {
        self.update_distances(user);
        self.sorted()
    }

    /// Resources nearest first, using the last computed distances.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Resource> {
        sort_by_distance(&self.resources, &self.distances)
    }

    #[must_use]
    pub fn distance(&self, resource_id: i64) -> Option<f64> {
        self.distances.get(&resource_id).copied()
    }

    #[must_use]
    pub fn has_distances(&self) -> bool {
        !self.distances.is_empty()
    }

    /// `"<distance> - <travel time>"`, when a distance is known.
    #[must_use]
    pub fn describe(&self, resource: &Resource) -> Option<String> {
        self.distance(resource.id).map(|meters| {
            format!(
                "{} - {}",
                format_distance(meters),
                estimate_travel_time(meters)
            )
        })
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

/// Orders `resources` by ascending distance, treating a missing distance
/// as infinitely far. The sort is stable, so ties keep their input order.
#[must_use]
pub fn sort_by_distance<'a>(
    resources: &'a [Resource],
    distances: &BTreeMap<i64, f64>,
) -> Vec<&'a Resource> {
    let distance_of = |resource: &Resource| {
        distances
            .get(&resource.id)
            .copied()
            .unwrap_or(f64::INFINITY)
    };

    let mut sorted: Vec<&Resource> = resources.iter().collect();
    sorted.sort_by(|a, b| distance_of(a).total_cmp(&distance_of(b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceType;

    fn resource(id: i64, latitude: f64, longitude: f64) -> Resource {
        Resource {
            id,
            resource_type: ResourceType::Police,
            name: format!("Puesto {id}"),
            coordinate: Coordinate::new(latitude, longitude),
            phone: "104".to_string(),
        }
    }

    #[test]
    fn sorts_ascending_with_unknown_last() {
        let resources = vec![resource(1, 0.0, 0.0), resource(2, 0.0, 0.0), resource(3, 0.0, 0.0)];
        let distances = BTreeMap::from([(1, 900.0), (3, 100.0)]);
        let ids: Vec<i64> = sort_by_distance(&resources, &distances)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn unknown_distances_keep_input_order() {
        let resources = vec![resource(5, 0.0, 0.0), resource(4, 0.0, 0.0)];
        let ids: Vec<i64> = sort_by_distance(&resources, &BTreeMap::new())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![5, 4]);
    }

    #[test]
    fn seeded_catalog_sorts_by_live_position() {
        let mut catalog = ResourceCatalog::seeded();
        assert!(!catalog.has_distances());

        // Standing next to the Antón fire station.
        let user = Coordinate::new(8.4003, -80.2650);
        assert_eq!(
            catalog.sort_by_distance(user)[0].name,
            "Cuerpo de Bomberos de Antón"
        );

        let sorted = catalog.sorted();

        let distances: Vec<f64> = sorted
            .iter()
            .map(|r| catalog.distance(r.id).unwrap())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn describe_combines_distance_and_eta() {
        let mut catalog = ResourceCatalog::new(vec![resource(1, 8.3754, -80.1589)]);
        let target = catalog.resources()[0].clone();
        assert!(catalog.describe(&target).is_none());

        catalog.update_distances(Coordinate::new(8.3754, -80.1589));
        assert_eq!(
            catalog.describe(&target).as_deref(),
            Some("0 metros - 0 min caminando")
        );
    }
}

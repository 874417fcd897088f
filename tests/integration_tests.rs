// Integration tests for CareFind

use carefind::core::{
    acquire_location, categories, filter, rank, RankedView, ALL_CATEGORIES,
    distance::haversine_distance,
    geolocation::{DeniedLocation, FixedLocation, LocationError, NoGeolocation},
    navigation::{Screen, ViewAction, ViewState},
};
use carefind::models::{Coordinate, Facility, FacilityKind, Specialty};
use carefind::services::Catalog;
use std::time::Duration;

const BENGALURU: Coordinate = Coordinate::new(12.9716, 77.5946);

fn create_facility(id: u32, lat: f64, lng: f64, categories: &[&str]) -> Facility {
    Facility {
        id,
        name: format!("Facility {}", id),
        kind: FacilityKind::Hospital,
        address: format!("{} Main Road", id),
        rating: 4.5,
        reviews: 100,
        services: vec!["Emergency".to_string()],
        specialties: categories
            .iter()
            .enumerate()
            .map(|(i, category)| Specialty {
                id: id * 100 + i as u32,
                name: format!("{} {}", category, i),
                category: category.to_string(),
                description: String::new(),
                available_doctors: 2,
            })
            .collect(),
        is_open: true,
        phone: String::new(),
        email: String::new(),
        website: String::new(),
        operating_hours: "24/7".to_string(),
        location: Coordinate::new(lat, lng),
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    let points = [
        BENGALURU,
        Coordinate::new(0.0, 0.0),
        Coordinate::new(89.9999, -179.9999),
        Coordinate::new(-45.0, 170.0),
    ];

    for point in points {
        assert!(haversine_distance(point, point) < 1e-6, "{:?}", point);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let points = [
        BENGALURU,
        Coordinate::new(40.7128, -74.0060),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(0.0, 180.0),
    ];

    for a in points {
        for b in points {
            let forward = haversine_distance(a, b);
            let backward = haversine_distance(b, a);
            assert!((forward - backward).abs() < 1e-9, "{:?} <-> {:?}", a, b);
        }
    }
}

#[test]
fn test_distance_accuracy() {
    // New York to Los Angeles (approximately 3936 km)
    let distance = haversine_distance(
        Coordinate::new(40.7128, -74.0060),
        Coordinate::new(34.0522, -118.2437),
    );
    assert!((distance - 3936.0).abs() < 10.0, "Expected ~3936km, got {}", distance);
}

#[test]
fn test_two_facility_scenario() {
    let facilities = vec![
        create_facility(1, 12.9716, 77.5946, &[]),
        create_facility(2, 12.9816, 77.6046, &[]),
    ];

    let ranked = rank(Some(BENGALURU), &facilities);

    assert_eq!(ranked[0].facility.id, 1);
    assert_eq!(ranked[1].facility.id, 2);
    assert!(ranked[0].distance_km.unwrap() < 1e-6);
    let far = ranked[1].distance_km.unwrap();
    assert!((far - 1.55).abs() < 0.05, "Expected ~1.55km, got {}", far);
}

#[test]
fn test_rank_is_sorted_permutation() {
    let facilities: Vec<Facility> = (0..40)
        .map(|i| {
            let offset = ((i * 37) % 23) as f64 * 0.01;
            create_facility(i, 12.9 + offset, 77.5 - offset, &[])
        })
        .collect();

    let ranked = rank(Some(BENGALURU), &facilities);

    assert_eq!(ranked.len(), facilities.len());
    let mut ids: Vec<u32> = ranked.iter().map(|r| r.facility.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..40).collect::<Vec<u32>>());

    for pair in ranked.windows(2) {
        assert!(pair[0].distance_km.unwrap() <= pair[1].distance_km.unwrap());
    }
}

#[test]
fn test_rank_leaves_catalog_untouched() {
    let catalog = Catalog::builtin();
    let before = catalog.facilities().to_vec();

    let _ = rank(Some(Coordinate::new(12.94, 77.59)), catalog.facilities());

    assert_eq!(catalog.facilities(), before.as_slice());
}

#[test]
fn test_builtin_catalog_from_city_center() {
    let catalog = Catalog::builtin();

    let view = RankedView::build(Some(BENGALURU), catalog.facilities());
    let ids: Vec<u32> = view.facilities.iter().map(|r| r.facility.id).collect();

    // St. Mary's and HealthPlus are both ~1.55 km away, St. Mary's marginally closer
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(view.heading, "Nearby Facilities");
}

#[test]
fn test_categories_scenario() {
    let facility = create_facility(1, 0.0, 0.0, &["Cardiology", "Cardiology", "Emergency"]);

    let result = categories(&facility);
    assert_eq!(result[0], ALL_CATEGORIES);
    assert_eq!(result.len(), 3);
    assert!(result.contains(&"Cardiology".to_string()));
    assert!(result.contains(&"Emergency".to_string()));

    let cardiology: Vec<u32> = filter(&facility, "Cardiology").iter().map(|s| s.id).collect();
    assert_eq!(cardiology, vec![100, 101]);
}

#[test]
fn test_filter_all_matches_source() {
    let catalog = Catalog::builtin();

    for facility in catalog.facilities() {
        let all = filter(facility, ALL_CATEGORIES);
        assert_eq!(all.len(), facility.specialties.len());
        for (filtered, source) in all.iter().zip(&facility.specialties) {
            assert_eq!(filtered.id, source.id);
        }
    }
}

#[test]
fn test_location_fallback_shows_catalog_order() {
    let catalog = Catalog::builtin();
    let timeout = Duration::from_millis(100);

    for outcome in [
        tokio_test::block_on(acquire_location(DeniedLocation(LocationError::PermissionDenied), timeout)),
        tokio_test::block_on(acquire_location(NoGeolocation, timeout)),
    ] {
        assert!(outcome.is_unavailable());

        let view = RankedView::build(outcome.coordinate(), catalog.facilities());
        let ids: Vec<u32> = view.facilities.iter().map(|r| r.facility.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(view.facilities.iter().all(|r| r.distance_km.is_none()));
        assert!(view.location_unavailable);
        assert_eq!(view.heading, "All Facilities");
    }
}

#[test]
fn test_located_session_ranks_from_position() {
    let catalog = Catalog::builtin();
    // Next to Metro Emergency Hospital in the south
    let outcome = tokio_test::block_on(acquire_location(
        FixedLocation(Coordinate::new(12.9400, 77.5950)),
        Duration::from_millis(100),
    ));

    let view = RankedView::build(outcome.coordinate(), catalog.facilities());

    assert_eq!(view.facilities[0].facility.id, 4);
    assert!(view.sorted_by_distance);
}

#[test]
fn test_browsing_flow() {
    let catalog = Catalog::builtin();

    let state = ViewState::default()
        .apply(ViewAction::SelectFacility(4))
        .apply(ViewAction::SetSpecialtyFilter("Cardiology".to_string()));

    let Screen::FacilityDetail(id) = state.screen() else {
        panic!("expected facility detail, got {:?}", state.screen());
    };
    let facility = catalog.facility(id).unwrap();
    let shown = filter(facility, &state.specialty_filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "Cardiology");

    // A stale filter never carries over to the next facility
    let state = state.apply(ViewAction::Back).apply(ViewAction::SelectFacility(3));
    let facility = catalog.facility(3).unwrap();
    assert_eq!(filter(facility, &state.specialty_filter).len(), 3);
}

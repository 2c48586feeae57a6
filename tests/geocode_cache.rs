use trackviz_rs::geocode::cache::GeocodeCache;
use trackviz_rs::types::address::AddressFields;

fn sample_address() -> AddressFields {
    AddressFields {
        road: "Main Street".to_string(),
        city: "Springfield".to_string(),
        postcode: "1234".to_string(),
        country: "Portugal".to_string(),
    }
}

#[test]
fn store_then_lookup_returns_the_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = GeocodeCache::open(&dir.path().join("cache.db")).expect("open");

    cache.store(45.12349, 13.731, &sample_address()).expect("store");

    let entry = cache
        .lookup(45.12349, 13.731)
        .expect("lookup")
        .expect("entry");
    assert_eq!(entry.lat_key, "45.123");
    assert_eq!(entry.road, "Main Street");
    assert_eq!(entry.city, "Springfield");
    assert_eq!(entry.postcode, "1234");
    assert_eq!(entry.country, "Portugal");
}

#[test]
fn lookup_on_a_missing_key_returns_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = GeocodeCache::open(&dir.path().join("cache.db")).expect("open");

    assert!(cache.lookup(45.123, 13.731).expect("lookup").is_none());
}

#[test]
fn equivalent_coordinates_share_a_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = GeocodeCache::open(&dir.path().join("cache.db")).expect("open");

    cache.store(45.12349, 13.731, &sample_address()).expect("store");

    // 45.12349 and 45.1235 both round to the 45.123 key.
    let entry = cache
        .lookup(45.1235, 13.731)
        .expect("lookup")
        .expect("entry");
    assert_eq!(entry.road, "Main Street");
}

#[test]
fn first_stored_payload_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = GeocodeCache::open(&dir.path().join("cache.db")).expect("open");

    cache.store(45.123, 13.731, &sample_address()).expect("store");

    let other = AddressFields {
        road: "Other Road".to_string(),
        city: "Shelbyville".to_string(),
        postcode: "9999".to_string(),
        country: "Spain".to_string(),
    };
    cache.store(45.12312, 13.73101, &other).expect("store again");

    let entry = cache
        .lookup(45.123, 13.731)
        .expect("lookup")
        .expect("entry");
    assert_eq!(entry.road, "Main Street");
    assert_eq!(entry.city, "Springfield");
}

#[test]
fn points_straddling_a_rounding_boundary_are_distinct_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cache = GeocodeCache::open(&dir.path().join("cache.db")).expect("open");

    cache.store(45.1231, 13.731, &sample_address()).expect("store");

    // ~20 m away but across the 3-decimal boundary.
    assert!(cache.lookup(45.1236, 13.731).expect("lookup").is_none());
}

#[test]
fn entries_persist_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cache.db");

    {
        let cache = GeocodeCache::open(&path).expect("open");
        cache.store(45.123, 13.731, &sample_address()).expect("store");
    }

    let reopened = GeocodeCache::open(&path).expect("reopen");
    let entry = reopened
        .lookup(45.123, 13.731)
        .expect("lookup")
        .expect("entry");
    assert_eq!(entry.country, "Portugal");
}

#[test]
fn coordinate_key_is_fixed_three_decimals() {
    assert_eq!(GeocodeCache::coordinate_key(45.12349), "45.123");
    assert_eq!(GeocodeCache::coordinate_key(45.1235), "45.123");
    assert_eq!(GeocodeCache::coordinate_key(-8.5), "-8.500");
    assert_eq!(GeocodeCache::coordinate_key(0.0), "0.000");
}

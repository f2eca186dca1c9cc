use chrono::{NaiveDate, NaiveTime};
use kundali_base::{
    ALL_RASHIS, BHAVA_COUNT, BirthDetails, Graha, MAHADASHA_TABLE, PlacedGraha, Rashi,
    bhava_rashi, build_bhavas, mahadasha_for_year, node_pair,
};

#[test]
fn aries_lagna_golden() {
    let bhavas = build_bhavas(Rashi::Mesha);
    let signs: Vec<u8> = bhavas.iter().map(|b| b.rashi.number()).collect();
    assert_eq!(signs, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(bhavas[6].rashi, Rashi::Tula);
    assert_eq!(bhavas[11].rashi, Rashi::Meena);
}

#[test]
fn pisces_lagna_wraps() {
    let signs: Vec<u8> = build_bhavas(Rashi::Meena)
        .iter()
        .map(|b| b.rashi.number())
        .collect();
    assert_eq!(signs, [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn every_lagna_covers_every_sign_once() {
    for lagna in ALL_RASHIS {
        let bhavas = build_bhavas(lagna);
        assert_eq!(bhavas.len(), BHAVA_COUNT);
        let mut seen: Vec<Rashi> = bhavas.iter().map(|b| b.rashi).collect();
        seen.sort();
        assert_eq!(seen, ALL_RASHIS);
        for (i, b) in bhavas.iter().enumerate() {
            assert_eq!(b.number as usize, i + 1);
            assert_eq!(b.rashi, bhava_rashi(lagna, b.number));
            assert!(b.grahas.is_empty());
        }
    }
}

#[test]
fn nodes_always_six_apart() {
    for rahu in 0..BHAVA_COUNT as u8 {
        let (r, k) = node_pair(rahu);
        assert_eq!(r, rahu);
        assert_eq!((k + 12 - r) % 12, 6);
    }
}

#[test]
fn dasha_partition_for_every_year() {
    for year in 1990..2100 {
        let sel = mahadasha_for_year(year);
        let pos = MAHADASHA_TABLE
            .iter()
            .position(|p| *p == sel.current)
            .unwrap();
        assert_eq!(sel.upcoming.as_slice(), &MAHADASHA_TABLE[pos + 1..]);
    }
}

#[test]
fn birth_details_json_shape() {
    let d = BirthDetails::new(
        "Arjun Sharma",
        NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
        NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
        "Mumbai, India",
    );
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["date"], "1990-05-14");
    assert_eq!(v["time"], "06:30:00");
    assert_eq!(v["latitude"], 0.0);
    let back: BirthDetails = serde_json::from_value(v).unwrap();
    assert_eq!(back, d);
}

#[test]
fn dasha_json_uses_graha_variant() {
    let v = serde_json::to_value(mahadasha_for_year(2040)).unwrap();
    assert_eq!(v["current"]["graha"], "Buddh");
    assert_eq!(v["current"]["planet"], "Mercury");
    assert_eq!(v["current"]["start_year"], 2034);
    assert_eq!(v["upcoming"].as_array().unwrap().len(), 3);
    assert_eq!(v["upcoming"][2]["planet"], "Sun");
}

#[test]
fn placed_graha_json_has_display_name() {
    let v = serde_json::to_value(PlacedGraha::new(Graha::Guru, Rashi::Dhanu, 21.19, false, 3))
        .unwrap();
    assert_eq!(v["graha"], "Guru");
    assert_eq!(v["full_name"], "Jupiter");
    assert_eq!(v["rashi"], "Dhanu");
    assert_eq!(v["bhava"], 3);
}

/// Property tests over the library: every generated row respects the record
/// invariants for any seed, center, spread and lookback.
use candlegen::timestamp::FixedClock;
use candlegen::{Catalog, GenerateConfig, Position, PositionMode, WorldBounds, generate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_mode() -> impl Strategy<Value = PositionMode> {
    prop_oneof![
        Just(PositionMode::Worldwide(WorldBounds::Geographic)),
        Just(PositionMode::Worldwide(WorldBounds::WebMercator)),
        (-120.0..120.0f64, -250.0..250.0f64, 0.0..400.0f64).prop_map(|(lat, lng, spread)| {
            PositionMode::Centered {
                center: Position::new(lat, lng),
                spread,
            }
        }),
    ]
}

fn parse_position(field: &str) -> (f64, f64) {
    let inner = &field[1..field.len() - 1];
    let (lat, lng) = inner.split_once(',').unwrap();
    (lat.parse().unwrap(), lng.parse().unwrap())
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn rows_respect_invariants(
        seed in any::<u64>(),
        count in 0u64..60,
        days_back in 0u32..400,
        mode in arb_mode(),
    ) {
        let catalog = Catalog::fallback();
        let now: jiff::Timestamp = "2025-09-01T08:00:00.25Z".parse().unwrap();
        let clock = FixedClock(now);
        let mut rng = StdRng::seed_from_u64(seed);
        let config = GenerateConfig { count, days_back, mode };

        let mut out = Vec::new();
        let summary = generate(&config, &catalog, &clock, &mut rng, &mut out).unwrap();
        prop_assert_eq!(summary.rows, count);

        let text = String::from_utf8(out).unwrap();
        prop_assert_eq!(text.lines().count() as u64, count + 1);

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut rows = 0u64;
        for record in reader.records() {
            let record = record.unwrap();
            rows += 1;
            prop_assert_eq!(record.len(), 5);

            let pos = &record[0];
            prop_assert!(pos.starts_with('{') && pos.ends_with('}'), "{}", pos);
            let (lat, lng) = parse_position(pos);
            prop_assert!((-90.0..=90.0).contains(&lat), "lat {}", lat);
            prop_assert!((-180.0..=180.0).contains(&lng), "lng {}", lng);

            prop_assert!(catalog.contains(&record[1]));
            prop_assert_eq!(&record[2], &record[3]);

            let ts: jiff::Timestamp = record[2].parse().unwrap();
            prop_assert!(ts <= now);
            let max_back = jiff::SignedDuration::from_secs(
                i64::from(days_back) * 86_400 + 23 * 3600 + 59 * 60 + 59,
            );
            prop_assert!(now.duration_since(ts) <= max_back);
        }
        prop_assert_eq!(rows, count);
    }

    #[test]
    fn zero_spread_yields_clamped_center(
        seed in any::<u64>(),
        lat in -200.0..200.0f64,
        lng in -400.0..400.0f64,
    ) {
        let mode = PositionMode::Centered { center: Position::new(lat, lng), spread: 0.0 };
        let mut rng = StdRng::seed_from_u64(seed);
        let expected = Position::new(lat, lng).clamped();
        for _ in 0..10 {
            prop_assert_eq!(mode.sample(&mut rng), expected);
        }
    }

    #[test]
    fn non_finite_center_and_spread_stay_in_bounds(
        seed in any::<u64>(),
        lat in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY), -100.0..100.0f64],
        lng in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY), -200.0..200.0f64],
        spread in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY), 0.0..400.0f64],
    ) {
        let mode = PositionMode::Centered { center: Position::new(lat, lng), spread };
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..10 {
            let p = mode.sample(&mut rng);
            prop_assert!((-90.0..=90.0).contains(&p.lat), "lat {}", p.lat);
            prop_assert!((-180.0..=180.0).contains(&p.lng), "lng {}", p.lng);
        }
    }

    #[test]
    fn rendered_position_parses_back(lat in -90.0..=90.0f64, lng in -180.0..=180.0f64) {
        let rendered = Position::new(lat, lng).to_string();
        prop_assert_eq!(parse_position(&rendered), (lat, lng));
    }
}

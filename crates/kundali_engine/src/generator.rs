//! Mock chart generation.
//!
//! The generator does no astronomy. It draws a uniform lagna, derives the
//! house signs from it, drops every graha into a uniformly random house
//! (Rahu random, Ketu opposite), and attaches a random daily horoscope and
//! the mahadasha periods for the current calendar year.

use std::future::Future;

use chrono::{Datelike, Local};
use kundali_base::{
    ALL_ENERGIES, ALL_MOODS, ALL_RASHIS, BHAVA_COUNT, Bhava, BirthDetails, ChartResult,
    DailyHoroscope, Graha, KundaliError, PlacedGraha, Rashi, SAPTA_GRAHAS, build_bhavas,
    mahadasha_for_year, node_pair,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::GeneratorConfig;

/// Something that turns birth details into a chart.
pub trait ChartGenerator {
    fn generate(
        &self,
        details: BirthDetails,
    ) -> impl Future<Output = Result<ChartResult, KundaliError>>;
}

/// Calendar year on the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Degrees within a sign, uniform over the two-decimal values in [0, 30).
fn random_degree<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.random_range(0..3000u32)) / 100.0
}

fn random_lagna<R: Rng>(rng: &mut R) -> Rashi {
    ALL_RASHIS[rng.random_range(0..ALL_RASHIS.len())]
}

fn random_horoscope<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> DailyHoroscope {
    let lo = config.luck_min.min(config.luck_max);
    let hi = config.luck_min.max(config.luck_max);
    let luck = rng.random_range(lo..=hi);
    let energy = ALL_ENERGIES[rng.random_range(0..ALL_ENERGIES.len())];
    let mood = ALL_MOODS[rng.random_range(0..ALL_MOODS.len())];
    DailyHoroscope::new(luck, energy, mood)
}

/// Draw degree and retrograde flag for `graha` and append it to a house.
fn place_graha<R: Rng>(
    rng: &mut R,
    bhavas: &mut [Bhava],
    graha: Graha,
    house_index: u8,
    config: &GeneratorConfig,
) {
    let degree = random_degree(rng);
    let roll = rng.random::<f64>() < config.retrograde_probability;
    let retrograde = roll || (graha.is_node() && config.nodes_always_retrograde);

    let bhava = &mut bhavas[house_index as usize];
    bhava.grahas.push(PlacedGraha::new(
        graha,
        bhava.rashi,
        degree,
        retrograde,
        bhava.number,
    ));
}

/// Generate a chart from an explicit random source and year.
///
/// Deterministic for a seeded `rng`. The birth details are carried into the
/// result untouched.
pub fn generate_chart_with<R: Rng>(
    rng: &mut R,
    details: BirthDetails,
    current_year: i32,
    config: &GeneratorConfig,
) -> ChartResult {
    let ascendant = random_lagna(rng);
    let mut bhavas = build_bhavas(ascendant);

    let (rahu_index, ketu_index) = node_pair(rng.random_range(0..BHAVA_COUNT as u8));
    debug!(
        lagna = ascendant.western_name(),
        rahu_house = rahu_index + 1,
        ketu_house = ketu_index + 1,
        "placed lagna and nodes"
    );

    for graha in SAPTA_GRAHAS {
        let house_index = rng.random_range(0..BHAVA_COUNT as u8);
        place_graha(rng, &mut bhavas, graha, house_index, config);
    }
    place_graha(rng, &mut bhavas, Graha::Rahu, rahu_index, config);
    place_graha(rng, &mut bhavas, Graha::Ketu, ketu_index, config);

    let daily_horoscope = random_horoscope(rng, config);
    let dashas = mahadasha_for_year(current_year);
    debug!(
        year = current_year,
        mahadasha = dashas.current.planet,
        upcoming = dashas.upcoming.len(),
        "selected mahadasha"
    );

    ChartResult {
        ascendant,
        bhavas,
        details,
        daily_horoscope,
        current_mahadasha: dashas.current,
        next_mahadashas: dashas.upcoming,
    }
}

/// Generate a chart after the configured artificial delay.
///
/// Uses the thread RNG and the local calendar year. The delay is a plain
/// timer: dropping the future abandons it without side effects.
pub async fn generate_chart(
    details: BirthDetails,
    config: &GeneratorConfig,
) -> Result<ChartResult, KundaliError> {
    RandomChartGenerator::new(config.clone())
        .generate(details)
        .await
}

/// [`ChartGenerator`] backed by [`generate_chart_with`].
///
/// With no seed and no year this is [`generate_chart`].
#[derive(Debug, Clone, Default)]
pub struct RandomChartGenerator {
    pub config: GeneratorConfig,
    /// Fixed RNG seed for reproducible charts.
    pub seed: Option<u64>,
    /// Fixed "current" year for mahadasha selection.
    pub year: Option<i32>,
}

impl RandomChartGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            seed: None,
            year: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

impl ChartGenerator for RandomChartGenerator {
    async fn generate(&self, details: BirthDetails) -> Result<ChartResult, KundaliError> {
        self.config.validate()?;
        info!(
            name = %details.name,
            delay_ms = self.config.delay_ms,
            seed = ?self.seed,
            "generating chart"
        );
        tokio::time::sleep(self.config.delay()).await;

        let year = self.year.unwrap_or_else(current_year);
        let chart = match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                generate_chart_with(&mut rng, details, year, &self.config)
            }
            None => generate_chart_with(&mut rand::rng(), details, year, &self.config),
        };
        info!(lagna = chart.ascendant.western_name(), "chart ready");
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn details() -> BirthDetails {
        BirthDetails::new(
            "Arjun Sharma",
            NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            "Mumbai, India",
        )
    }

    fn seeded(seed: u64) -> ChartResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_chart_with(&mut rng, details(), 2040, &GeneratorConfig::immediate())
    }

    #[test]
    fn degree_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let d = random_degree(&mut rng);
            assert!((0.0..30.0).contains(&d), "degree {d}");
        }
    }

    #[test]
    fn same_seed_same_chart() {
        assert_eq!(seeded(42), seeded(42));
    }

    #[test]
    fn details_carried_through() {
        let chart = seeded(1);
        assert_eq!(chart.details, details());
    }

    #[test]
    fn placed_grahas_record_their_house() {
        let chart = seeded(3);
        for b in &chart.bhavas {
            for p in &b.grahas {
                assert_eq!(p.bhava, b.number);
                assert_eq!(p.rashi, b.rashi);
            }
        }
    }

    #[test]
    fn nodes_forced_retrograde_when_configured() {
        let config = GeneratorConfig {
            nodes_always_retrograde: true,
            retrograde_probability: 0.0,
            ..GeneratorConfig::immediate()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let chart = generate_chart_with(&mut rng, details(), 2040, &config);
        for p in chart.bhavas.iter().flat_map(|b| &b.grahas) {
            assert_eq!(p.retrograde, p.graha.is_node(), "{}", p.graha);
        }
    }

    #[test]
    fn zero_probability_never_retrograde() {
        let config = GeneratorConfig {
            retrograde_probability: 0.0,
            ..GeneratorConfig::immediate()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let chart = generate_chart_with(&mut rng, details(), 2040, &config);
        assert!(chart.bhavas.iter().flat_map(|b| &b.grahas).all(|p| !p.retrograde));
    }

    #[test]
    fn fixed_luck_range() {
        let config = GeneratorConfig {
            luck_min: 77,
            luck_max: 77,
            ..GeneratorConfig::immediate()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let chart = generate_chart_with(&mut rng, details(), 2040, &config);
        assert_eq!(chart.daily_horoscope.luck, 77);
    }

    #[test]
    fn every_graha_placed_once_in_processing_order() {
        use kundali_base::ALL_GRAHAS;
        for seed in 0..50 {
            let chart = seeded(seed);
            let position = |g: Graha| ALL_GRAHAS.iter().position(|&x| x == g);
            let mut seen = Vec::new();
            for b in &chart.bhavas {
                let order: Vec<_> = b.grahas.iter().map(|p| position(p.graha)).collect();
                assert!(order.is_sorted(), "house {} out of order", b.number);
                seen.extend(b.grahas.iter().map(|p| p.graha));
            }
            seen.sort_by_key(|&g| position(g));
            assert_eq!(seen, ALL_GRAHAS);
        }
    }

    #[test]
    fn lagna_is_house_one_sign() {
        for seed in 0..50 {
            let chart = seeded(seed);
            assert_eq!(chart.bhavas[0].rashi, chart.ascendant);
        }
    }

    #[tokio::test]
    async fn async_generation_without_delay() {
        let chart = generate_chart(details(), &GeneratorConfig::immediate())
            .await
            .unwrap();
        assert_eq!(chart.bhavas.len(), 12);
    }

    #[tokio::test]
    async fn async_generation_rejects_invalid_config() {
        let config = GeneratorConfig {
            retrograde_probability: -0.1,
            ..GeneratorConfig::immediate()
        };
        let err = generate_chart(details(), &config).await.unwrap_err();
        assert!(matches!(err, KundaliError::Config(_)));
    }

    #[tokio::test]
    async fn async_generation_uses_current_year() {
        let chart = generate_chart(details(), &GeneratorConfig::immediate())
            .await
            .unwrap();
        let expected = mahadasha_for_year(current_year());
        assert_eq!(chart.current_mahadasha, expected.current);
        assert_eq!(chart.next_mahadashas, expected.upcoming);
    }

    #[tokio::test]
    async fn both_entry_points_reject_invalid_config() {
        let config = GeneratorConfig {
            luck_min: 90,
            luck_max: 10,
            ..GeneratorConfig::immediate()
        };
        let direct = generate_chart(details(), &config).await.unwrap_err();
        let via_trait = RandomChartGenerator::new(config)
            .with_seed(1)
            .generate(details())
            .await
            .unwrap_err();
        assert_eq!(direct, via_trait);
    }

    #[tokio::test]
    async fn seeded_generator_is_reproducible() {
        let g = RandomChartGenerator::new(GeneratorConfig::immediate())
            .with_seed(42)
            .with_year(2040);
        let a = g.generate(details()).await.unwrap();
        let b = g.generate(details()).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a, seeded(42));
    }
}

//! Characterization Physics
//!
//! The derivation formulas, each exposed on its own so the constants and
//! threshold tie-breaks stay auditable in isolation. Unit conventions:
//! stellar radius/mass in solar units, planet radius/mass in Earth units,
//! period in days, temperatures in Kelvin, semi-major axis in AU.

use crate::constants::{DAYS_PER_YEAR, G_EARTH, RSUN_TO_AU, V_ESCAPE_EARTH};

use super::types::{HabitableZone, PhysicalProfile, PlanetType, SystemParams};

// Habitable-zone insolation bands (S/S_earth), both bounds exclusive.
pub const HZ_CONSERVATIVE: (f64, f64) = (0.32, 1.10);
pub const HZ_OPTIMISTIC: (f64, f64) = (0.2, 1.7);

// Planet-type radius thresholds (Earth radii), strict `<`.
pub const ROCKY_MAX_RADIUS: f64 = 1.6;
pub const TRANSITIONAL_MAX_RADIUS: f64 = 2.5;

// Temperate equilibrium-temperature band (K), inclusive.
pub const TEMPERATE_TEQ: (f64, f64) = (200.0, 320.0);

/// Semi-major axis (AU) via Kepler's third law, planet mass taken as
/// negligible relative to the star (standard simplification).
pub fn semi_major_axis_au(stellar_mass: f64, period_days: f64) -> f64 {
    (stellar_mass * (period_days / DAYS_PER_YEAR).powi(2)).powf(1.0 / 3.0)
}

/// Blackbody equilibrium temperature (K).
pub fn equilibrium_temperature(
    stellar_temp: f64,
    stellar_radius: f64,
    sma_au: f64,
    albedo: f64,
) -> f64 {
    let rstar_au = stellar_radius * RSUN_TO_AU;
    stellar_temp * (rstar_au / (2.0 * sma_au)).sqrt() * (1.0 - albedo).powf(0.25)
}

/// Composition category by radius. Strict `<` comparisons, first match wins.
pub fn planet_type(radius: f64) -> PlanetType {
    if radius < ROCKY_MAX_RADIUS {
        PlanetType::Rocky
    } else if radius < TRANSITIONAL_MAX_RADIUS {
        PlanetType::Transitional
    } else {
        PlanetType::Gaseous
    }
}

/// Habitable-zone membership by insolation. Both band bounds are exclusive,
/// so an insolation sitting exactly on a bound falls outside that band.
pub fn habitable_zone(insolation: f64) -> HabitableZone {
    if insolation > HZ_CONSERVATIVE.0 && insolation < HZ_CONSERVATIVE.1 {
        HabitableZone::Conservative
    } else if insolation > HZ_OPTIMISTIC.0 && insolation < HZ_OPTIMISTIC.1 {
        HabitableZone::Optimistic
    } else {
        HabitableZone::Outside
    }
}

/// Geometric transit probability, capped at 1.
pub fn transit_probability(stellar_radius: f64, sma_au: f64) -> f64 {
    ((stellar_radius * RSUN_TO_AU) / sma_au).min(1.0)
}

/// Surface gravity (m/s²) from Earth-relative mass and radius.
pub fn surface_gravity(planet_mass: f64, radius: f64) -> f64 {
    G_EARTH * (planet_mass / radius.powi(2))
}

/// Escape velocity (km/s) from Earth-relative mass and radius.
pub fn escape_velocity(planet_mass: f64, radius: f64) -> f64 {
    V_ESCAPE_EARTH * (planet_mass / radius).sqrt()
}

/// Composite habitability score in [0, 1].
///
/// Additive point system; the radius and insolation bands each contribute at
/// most one bonus, the eccentricity and temperature bonuses are independent,
/// and the sum is capped at 1.0.
pub fn habitability_score(radius: f64, insolation: f64, eccentricity: f64, teq: f64) -> f64 {
    let mut score: f64 = 0.0;

    if radius < ROCKY_MAX_RADIUS {
        score += 0.4;
    } else if radius < TRANSITIONAL_MAX_RADIUS {
        score += 0.2;
    }

    match habitable_zone(insolation) {
        HabitableZone::Conservative => score += 0.4,
        HabitableZone::Optimistic => score += 0.2,
        HabitableZone::Outside => {}
    }

    if eccentricity < 0.2 {
        score += 0.1;
    }
    if (TEMPERATE_TEQ.0..=TEMPERATE_TEQ.1).contains(&teq) {
        score += 0.1;
    }

    score.min(1.0)
}

/// Derive the full physical profile for one system. Pure.
pub fn characterize(params: &SystemParams) -> PhysicalProfile {
    let sma = semi_major_axis_au(params.stellar_mass, params.period);
    let teq = equilibrium_temperature(
        params.stellar_temp,
        params.stellar_radius,
        sma,
        params.albedo,
    );

    PhysicalProfile {
        teq,
        planet_type: planet_type(params.radius),
        habitable_zone: habitable_zone(params.insolation),
        transit_probability: transit_probability(params.stellar_radius, sma),
        surface_gravity: surface_gravity(params.planet_mass, params.radius),
        escape_velocity: escape_velocity(params.planet_mass, params.radius),
        habitability_score: habitability_score(
            params.radius,
            params.insolation,
            params.eccentricity,
            teq,
        ),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semi_major_axis_earth_analog() {
        let sma = semi_major_axis_au(1.0, 365.25);
        assert!((sma - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_semi_major_axis_scales_with_mass() {
        // Doubling stellar mass at fixed period grows the orbit.
        assert!(semi_major_axis_au(2.0, 365.25) > semi_major_axis_au(1.0, 365.25));
    }

    #[test]
    fn test_equilibrium_temperature_earth_analog() {
        // Teq = 5772 * sqrt(0.00465047 / 2) * 0.7^0.25 ≈ 254.6 K
        let teq = equilibrium_temperature(5772.0, 1.0, 1.0, 0.3);
        assert!((teq - 254.6).abs() < 1.0, "teq = {}", teq);
    }

    #[test]
    fn test_planet_type_thresholds_strict() {
        assert_eq!(planet_type(1.0), PlanetType::Rocky);
        assert_eq!(planet_type(1.59), PlanetType::Rocky);
        assert_eq!(planet_type(1.6), PlanetType::Transitional);
        assert_eq!(planet_type(2.49), PlanetType::Transitional);
        assert_eq!(planet_type(2.5), PlanetType::Gaseous);
        assert_eq!(planet_type(11.2), PlanetType::Gaseous);
    }

    #[test]
    fn test_habitable_zone_bounds_exclusive() {
        // Conservative band (0.32, 1.10), both ends exclusive.
        assert_eq!(habitable_zone(0.32), HabitableZone::Optimistic);
        assert_eq!(habitable_zone(0.33), HabitableZone::Conservative);
        assert_eq!(habitable_zone(1.09), HabitableZone::Conservative);
        assert_eq!(habitable_zone(1.10), HabitableZone::Optimistic);
        // Optimistic band (0.2, 1.7), both ends exclusive.
        assert_eq!(habitable_zone(0.2), HabitableZone::Outside);
        assert_eq!(habitable_zone(1.7), HabitableZone::Outside);
        assert_eq!(habitable_zone(1.69), HabitableZone::Optimistic);
        assert_eq!(habitable_zone(0.21), HabitableZone::Optimistic);
    }

    #[test]
    fn test_transit_probability_capped() {
        assert!((transit_probability(1.0, 1.0) - RSUN_TO_AU).abs() < 1e-12);
        assert_eq!(transit_probability(10.0, 1e-4), 1.0);
    }

    #[test]
    fn test_surface_gravity_and_escape_velocity_earth() {
        assert!((surface_gravity(1.0, 1.0) - 9.80665).abs() < 1e-12);
        assert!((escape_velocity(1.0, 1.0) - 11.186).abs() < 1e-12);
    }

    #[test]
    fn test_habitability_score_caps_at_one() {
        // Rocky + conservative + circular + temperate = 0.4+0.4+0.1+0.1 = 1.0
        let score = habitability_score(1.0, 1.0, 0.0, 255.0);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_habitability_score_single_band_per_category() {
        // Transitional radius takes 0.2, not 0.4+0.2.
        let score = habitability_score(2.0, 10.0, 0.5, 1000.0);
        assert_eq!(score, 0.2);
    }

    #[test]
    fn test_characterize_earth_analog() {
        let profile = characterize(&SystemParams::default());

        assert_eq!(profile.planet_type, PlanetType::Rocky);
        assert_eq!(profile.habitable_zone, HabitableZone::Conservative);
        assert!(profile.habitability_score >= 0.9);
        assert!((profile.surface_gravity - 9.80665).abs() < 1e-9);
        assert!((profile.escape_velocity - 11.186).abs() < 1e-9);
        assert!(profile.transit_probability > 0.0 && profile.transit_probability < 0.01);
    }

    #[test]
    fn test_characterize_hot_jupiter() {
        let params = SystemParams {
            period: 3.5,
            radius: 12.0,
            planet_mass: 300.0,
            insolation: 93.59,
            ..SystemParams::default()
        };
        let profile = characterize(&params);

        assert_eq!(profile.planet_type, PlanetType::Gaseous);
        assert_eq!(profile.habitable_zone, HabitableZone::Outside);
        assert!(profile.teq > 1000.0);
        assert!(profile.habitability_score <= 0.1);
    }
}

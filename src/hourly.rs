use crate::icons;
use crate::models::report::HourlySample;
use crate::models::weather_api::DayForecast;
use crate::temperature::parse_temperature;

/// Hours between synthesized samples
const LATTICE_STEP_HOURS: u32 = 3;
/// Last lattice offset, in hours from midnight today
const LATTICE_END_HOURS: u32 = 72;

/// Vertical chart coordinate of the coldest sample, the SVG y axis grows downwards
pub const CHART_BOTTOM: i32 = 75;
/// Vertical chart coordinate of the warmest sample
pub const CHART_TOP: i32 = 20;
/// Coordinate used when the whole series sits at one temperature
pub const CHART_FLAT: i32 = 47;

/// Temperatures resolved from the sparse daily forecasts.
///
/// The source often reports today's maximum as null late in the cycle, in
/// which case tomorrow's maximum stands in as the reference. That fallback
/// never applies to today's minimum: 'has_min' is true only when today's own
/// minimum parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTemps {
    pub reference: i32,
    pub min: i32,
    pub has_min: bool,
    pub tomorrow_min: i32,
    pub tomorrow_max: i32,
}

impl ResolvedTemps {
    /// Resolves reference and boundary temperatures from the first two forecast days
    ///
    /// # Arguments
    ///
    /// * 'today' - today's forecast entry
    /// * 'tomorrow' - tomorrow's forecast entry, when the source provided one
    pub fn resolve(today: &DayForecast, tomorrow: Option<&DayForecast>) -> ResolvedTemps {
        let mut reference = 0;
        if let Ok(temp) = parse_temperature(today.max_celsius()) {
            reference = temp;
        } else if let Some(t) = tomorrow {
            if let Ok(temp) = parse_temperature(t.max_celsius()) {
                reference = temp;
            }
        }

        let (min, has_min) = match parse_temperature(today.min_celsius()) {
            Ok(temp) => (temp, true),
            Err(_) => (0, false),
        };

        let tomorrow_min = tomorrow
            .and_then(|t| parse_temperature(t.min_celsius()).ok())
            .unwrap_or(0);
        let tomorrow_max = tomorrow
            .and_then(|t| parse_temperature(t.max_celsius()).ok())
            .unwrap_or(0);

        ResolvedTemps { reference, min, has_min, tomorrow_min, tomorrow_max }
    }
}

/// Per day synthesis parameters: the telop, the four rain probability buckets
/// and the temperature assigned to each 6 hour bucket
struct DayRules<'a> {
    telop: &'a str,
    rain: [&'a str; 4],
    bucket_temps: [i32; 4],
}

impl<'a> DayRules<'a> {
    /// Today's bucket temperatures are fixed offsets from the reference
    /// maximum, a rough stand-in for the intraday granularity the source lacks
    fn today(forecast: &'a DayForecast, temps: &ResolvedTemps) -> DayRules<'a> {
        DayRules {
            telop: &forecast.telop,
            rain: forecast.rain_buckets(),
            bucket_temps: [
                temps.reference - 4,
                temps.reference,
                temps.reference,
                temps.reference - 2,
            ],
        }
    }

    /// Tomorrow swings between its own minimum at night and maximum at midday
    fn tomorrow(forecast: &'a DayForecast, temps: &ResolvedTemps) -> DayRules<'a> {
        DayRules {
            telop: &forecast.telop,
            rain: forecast.rain_buckets(),
            bucket_temps: [
                temps.tomorrow_min,
                temps.tomorrow_max,
                temps.tomorrow_max - 2,
                temps.tomorrow_min + 2,
            ],
        }
    }
}

/// Synthesizes the hour by hour forecast series from the sparse daily data.
///
/// Walks a lattice of 3 hour offsets from midnight today up to 72 hours out
/// and keeps only offsets strictly beyond the current hour. Each kept point
/// gets one sample from its day's parameter set: offsets below 24 use today's
/// rules, everything from 24 on uses tomorrow's, with the hour of day taken
/// modulo 24. Without a second forecast day no series can be synthesized and
/// the result is empty.
///
/// # Arguments
///
/// * 'forecasts' - the daily forecast entries, today first
/// * 'temps' - resolved reference and boundary temperatures
/// * 'current_hour' - the current hour of day, 0-23
/// * 'cap' - maximum number of samples to produce
pub fn synthesize_hourly(
    forecasts: &[DayForecast],
    temps: &ResolvedTemps,
    current_hour: u32,
    cap: usize,
) -> Vec<HourlySample> {
    if forecasts.len() < 2 {
        return Vec::new();
    }

    let today = DayRules::today(&forecasts[0], temps);
    let tomorrow = DayRules::tomorrow(&forecasts[1], temps);

    let mut samples = Vec::new();
    for offset in (0..=LATTICE_END_HOURS).step_by(LATTICE_STEP_HOURS as usize) {
        // Future points only: the slot of the current hour itself is skipped
        if offset <= current_hour {
            continue;
        }
        if samples.len() >= cap {
            break;
        }

        let day = if offset >= 24 { &tomorrow } else { &today };
        let hour_in_day = offset % 24;
        let bucket = (hour_in_day / 6) as usize;

        samples.push(HourlySample {
            time: format!("{:02}:00", hour_in_day),
            temp: day.bucket_temps[bucket],
            description: day.telop.to_string(),
            icon: icons::classify(day.telop).glyph(),
            rain_chance: day.rain[bucket].to_string(),
            chart_coord: 0,
        });
    }

    assign_chart_coords(&mut samples);

    samples
}

/// Maps each sample's temperature onto the chart's vertical axis.
///
/// The y axis grows downwards, so the warmest sample gets the smallest
/// coordinate (CHART_TOP) and the coldest the largest (CHART_BOTTOM). A flat
/// series sits at CHART_FLAT for every sample.
///
/// # Arguments
///
/// * 'samples' - the synthesized series to annotate in place
pub fn assign_chart_coords(samples: &mut [HourlySample]) {
    let Some(first) = samples.first() else {
        return;
    };

    let mut min = first.temp;
    let mut max = first.temp;
    for sample in samples.iter() {
        min = min.min(sample.temp);
        max = max.max(sample.temp);
    }

    let range = max - min;
    if range == 0 {
        for sample in samples.iter_mut() {
            sample.chart_coord = CHART_FLAT;
        }
        return;
    }

    let span = (CHART_BOTTOM - CHART_TOP) as f64;
    for sample in samples.iter_mut() {
        let scaled = ((sample.temp - min) as f64 * span / range as f64).round() as i32;
        sample.chart_coord = CHART_BOTTOM - scaled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather_api::{CelsiusValue, ChanceOfRain, Detail, Temperature};

    fn celsius(value: Option<&str>) -> Option<CelsiusValue> {
        Some(CelsiusValue { celsius: value.map(str::to_string) })
    }

    fn day(telop: &str, min: Option<&str>, max: Option<&str>, rain: [&str; 4]) -> DayForecast {
        DayForecast {
            date: "2025-09-30".to_string(),
            telop: telop.to_string(),
            detail: Detail::default(),
            temperature: Temperature { min: celsius(min), max: celsius(max) },
            chance_of_rain: ChanceOfRain {
                t00_06: rain[0].to_string(),
                t06_12: rain[1].to_string(),
                t12_18: rain[2].to_string(),
                t18_24: rain[3].to_string(),
            },
        }
    }

    fn two_days() -> Vec<DayForecast> {
        vec![
            day("晴れ", Some("18"), Some("28"), ["0%", "10%", "20%", "30%"]),
            day("曇り", Some("19"), Some("25"), ["40%", "50%", "60%", "70%"]),
        ]
    }

    #[test]
    fn resolves_reference_from_today() {
        let days = two_days();
        let temps = ResolvedTemps::resolve(&days[0], days.get(1));

        assert_eq!(temps.reference, 28);
        assert_eq!(temps.min, 18);
        assert!(temps.has_min);
        assert_eq!(temps.tomorrow_min, 19);
        assert_eq!(temps.tomorrow_max, 25);
    }

    #[test]
    fn reference_falls_back_to_tomorrow_but_min_does_not() {
        let today = day("晴れ", None, None, ["-", "-", "-", "-"]);
        let tomorrow = day("曇り", Some("21"), Some("30"), ["-", "-", "-", "-"]);

        let temps = ResolvedTemps::resolve(&today, Some(&tomorrow));

        assert_eq!(temps.reference, 30);
        assert_eq!(temps.min, 0);
        assert!(!temps.has_min);
    }

    #[test]
    fn missing_tomorrow_resolves_to_zeroes() {
        let today = day("晴れ", None, None, ["-", "-", "-", "-"]);

        let temps = ResolvedTemps::resolve(&today, None);

        assert_eq!(temps.reference, 0);
        assert_eq!(temps.tomorrow_min, 0);
        assert_eq!(temps.tomorrow_max, 0);
    }

    #[test]
    fn emits_future_points_only() {
        let days = two_days();
        let temps = ResolvedTemps::resolve(&days[0], days.get(1));

        let samples = synthesize_hourly(&days, &temps, 12, 20);

        // First kept offset is 15, the slot at the current hour itself is gone
        assert_eq!(samples[0].time, "15:00");
        assert_eq!(samples[0].temp, 28);
        assert_eq!(samples[0].rain_chance, "20%");
    }

    #[test]
    fn late_evening_leaves_only_tomorrow() {
        let days = two_days();
        let temps = ResolvedTemps::resolve(&days[0], days.get(1));

        let samples = synthesize_hourly(&days, &temps, 23, 20);

        // Today's offsets all end at 21, so everything left belongs to tomorrow
        assert_eq!(samples[0].time, "00:00");
        assert_eq!(samples[0].temp, 19);
        assert_eq!(samples[0].description, "曇り");
        assert!(samples.iter().all(|s| s.description == "曇り"));
    }

    #[test]
    fn tomorrow_buckets_follow_min_max_swing() {
        let days = two_days();
        let temps = ResolvedTemps::resolve(&days[0], days.get(1));

        let samples = synthesize_hourly(&days, &temps, 20, 20);

        let at = |label: &str| samples.iter().find(|s| s.time == label).unwrap();

        // Offset 21 is still today
        assert_eq!(at("21:00").temp, 26);
        assert_eq!(at("21:00").rain_chance, "30%");
        // Offsets 27 and 33 are tomorrow's night and morning buckets
        assert_eq!(at("03:00").temp, 19);
        assert_eq!(at("03:00").rain_chance, "40%");
        assert_eq!(at("09:00").temp, 25);
        assert_eq!(at("09:00").rain_chance, "50%");
        // Offsets 36 and 42 take the afternoon and evening adjustments
        assert_eq!(at("12:00").temp, 23);
        assert_eq!(at("18:00").temp, 21);
    }

    #[test]
    fn caps_the_series_length() {
        let days = two_days();
        let temps = ResolvedTemps::resolve(&days[0], days.get(1));

        // 24 lattice points remain past hour 0, the cap keeps 20
        let samples = synthesize_hourly(&days, &temps, 0, 20);
        assert_eq!(samples.len(), 20);

        let all = synthesize_hourly(&days, &temps, 0, 100);
        assert_eq!(all.len(), 24);
    }

    #[test]
    fn single_day_produces_nothing() {
        let days = vec![day("晴れ", Some("18"), Some("28"), ["0%", "0%", "0%", "0%"])];
        let temps = ResolvedTemps::resolve(&days[0], None);

        assert!(synthesize_hourly(&days, &temps, 0, 20).is_empty());
    }

    fn sample(temp: i32) -> HourlySample {
        HourlySample {
            time: "00:00".to_string(),
            temp,
            description: String::new(),
            icon: "",
            rain_chance: String::new(),
            chart_coord: 0,
        }
    }

    #[test]
    fn flat_series_sits_at_the_flat_coordinate() {
        let mut samples = vec![sample(20), sample(20), sample(20)];

        assign_chart_coords(&mut samples);

        assert!(samples.iter().all(|s| s.chart_coord == CHART_FLAT));
    }

    #[test]
    fn extremes_map_to_the_axis_bounds() {
        let mut samples = vec![sample(19), sample(25), sample(21)];

        assign_chart_coords(&mut samples);

        assert_eq!(samples[0].chart_coord, CHART_BOTTOM);
        assert_eq!(samples[1].chart_coord, CHART_TOP);
        // Warmer means numerically smaller
        assert!(samples[2].chart_coord < samples[0].chart_coord);
        assert!(samples[2].chart_coord > samples[1].chart_coord);
    }
}

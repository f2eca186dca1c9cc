//! Plain-text dashboard: a header plus one of three tabs.

use chrono::NaiveDate;
use kundali_base::{Bhava, COSMIC_GUIDANCE, ChartResult, DashaPeriod, PlacedGraha};

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Chart,
    Horoscope,
    Profile,
}

pub const ALL_TABS: [Tab; 3] = [Tab::Chart, Tab::Horoscope, Tab::Profile];

impl Tab {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Horoscope => "horoscope",
            Self::Profile => "profile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TABS.into_iter().find(|t| t.name() == name)
    }
}

/// Name line and "location • birth year" line.
pub fn render_header(chart: &ChartResult) -> String {
    let d = &chart.details;
    format!("{}\n{} • {}", d.name, d.location, d.birth_year())
}

fn planet_line(p: &PlacedGraha) -> String {
    let mut s = format!("{} {}°", p.full_name, p.degree);
    if p.retrograde {
        s.push_str(" R");
    }
    s
}

fn house_lines(b: &Bhava, out: &mut Vec<String>) {
    let badge = if b.is_lagna() { " [Lagna]" } else { "" };
    out.push(format!(
        "{} House{badge}  {}",
        b.ordinal(),
        b.rashi.western_name()
    ));
    out.push(format!("  {}", b.traits().join(" · ")));
    if !b.grahas.is_empty() {
        let planets: Vec<String> = b.grahas.iter().map(planet_line).collect();
        out.push(format!("  Planetary Influences: {}", planets.join(", ")));
    }
}

fn dasha_lines(p: &DashaPeriod, indent: &str, out: &mut Vec<String>) {
    out.push(format!("{indent}{} - {}", p.start_year, p.end_year));
    out.push(format!("{indent}{} Mahadasha", p.planet));
    out.push(format!("{indent}{}", p.description));
}

/// Lagna, mahadasha timeline, and house analysis.
pub fn render_chart_tab(chart: &ChartResult) -> String {
    let mut out = Vec::new();
    let lagna = chart.ascendant;
    out.push(format!(
        "Lagna: {} {} ({})",
        lagna.western_name(),
        lagna.symbol(),
        lagna.name()
    ));
    out.push(String::new());

    out.push("Mahadasha Periods".to_string());
    out.push("  Current Phase".to_string());
    dasha_lines(&chart.current_mahadasha, "  ", &mut out);
    for next in &chart.next_mahadashas {
        out.push(String::new());
        dasha_lines(next, "    ", &mut out);
    }
    out.push(String::new());

    out.push("House Analysis".to_string());
    for b in &chart.bhavas {
        house_lines(b, &mut out);
    }
    out.join("\n")
}

/// Date, daily reading, and guidance.
pub fn render_horoscope_tab(chart: &ChartResult, today: NaiveDate) -> String {
    let h = &chart.daily_horoscope;
    let mut out = vec![
        "Today's Horoscope".to_string(),
        today.format("%B %-d, %Y").to_string(),
        String::new(),
        "Daily Insights".to_string(),
        h.description.to_string(),
        format!(
            "Luck: {}%   Energy: {}   Mood: {}",
            h.luck,
            h.energy.name(),
            h.mood.name()
        ),
        String::new(),
        "Cosmic Guidance".to_string(),
    ];
    for (area, text) in COSMIC_GUIDANCE {
        out.push(area.to_uppercase());
        out.push(format!("  {text}"));
    }
    out.join("\n")
}

/// Name, location, and birth moment.
pub fn render_profile_tab(chart: &ChartResult) -> String {
    let d = &chart.details;
    [
        d.name.clone(),
        d.location.clone(),
        format!(
            "Born {} at {}",
            d.date.format("%Y-%m-%d"),
            d.time.format("%H:%M")
        ),
    ]
    .join("\n")
}

/// Header followed by the selected tab.
pub fn render_dashboard(chart: &ChartResult, tab: Tab, today: NaiveDate) -> String {
    let body = match tab {
        Tab::Chart => render_chart_tab(chart),
        Tab::Horoscope => render_horoscope_tab(chart, today),
        Tab::Profile => render_profile_tab(chart),
    };
    format!("{}\n\n{body}\n", render_header(chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use kundali_base::{BirthDetails, Graha, mahadasha_for_year};
    use kundali_engine::{GeneratorConfig, generate_chart_with};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn chart(year: i32) -> ChartResult {
        let details = BirthDetails::new(
            "Arjun Sharma",
            NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            "Mumbai, India",
        );
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        generate_chart_with(&mut rng, details, year, &GeneratorConfig::immediate())
    }

    #[test]
    fn tab_names_round_trip() {
        for t in ALL_TABS {
            assert_eq!(Tab::from_name(t.name()), Some(t));
        }
        assert_eq!(Tab::from_name("settings"), None);
        assert_eq!(Tab::default(), Tab::Chart);
    }

    #[test]
    fn header() {
        assert_eq!(render_header(&chart(2026)), "Arjun Sharma\nMumbai, India • 1990");
    }

    #[test]
    fn chart_tab_lists_everything() {
        let c = chart(2040);
        let text = render_chart_tab(&c);
        assert!(text.starts_with(&format!("Lagna: {}", c.ascendant.western_name())));
        assert!(text.contains("  2034 - 2051\n  Mercury Mahadasha"));
        for p in &mahadasha_for_year(2040).upcoming {
            assert!(text.contains(&format!("    {} Mahadasha", p.planet)));
        }
        assert!(!text.contains("Saturn Mahadasha"));
        assert!(text.contains("1st House [Lagna]"));
        assert!(text.contains("12th House  "));
        assert!(text.contains("PERSONALITY · FAME · PHYSIQUE"));
        assert_eq!(text.matches(" House").count(), 12);
        for g in [Graha::Surya, Graha::Rahu, Graha::Ketu] {
            assert!(text.contains(g.english_name()));
        }
    }

    #[test]
    fn planet_line_marks_retrograde() {
        let p = PlacedGraha::new(Graha::Shani, kundali_base::Rashi::Makara, 12.5, true, 10);
        assert_eq!(planet_line(&p), "Saturn 12.5° R");
    }

    #[test]
    fn horoscope_tab() {
        let c = chart(2026);
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let text = render_horoscope_tab(&c, today);
        assert!(text.contains("October 19, 2026"));
        assert!(text.contains(&format!("Luck: {}%", c.daily_horoscope.luck)));
        assert!(text.contains("RELATIONSHIPS"));
        assert!(text.contains("CAREER"));
    }

    #[test]
    fn profile_tab() {
        let text = render_profile_tab(&chart(2026));
        assert_eq!(text, "Arjun Sharma\nMumbai, India\nBorn 1990-05-14 at 06:30");
    }

    #[test]
    fn dashboard_has_header_then_body() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let text = render_dashboard(&chart(2026), Tab::Profile, today);
        assert!(text.starts_with("Arjun Sharma\nMumbai, India • 1990\n\nArjun Sharma"));
        assert!(text.ends_with('\n'));
    }
}

use serde::{Deserialize, Serialize};

/// Current conditions as delivered by the weather collaborator. The
/// temperature arrives as a formatted display string ("21.5°C"); the engine
/// parses the leading number back out and ignores the unit suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: String,
    #[serde(default)]
    pub feels_like: Option<String>,
    #[serde(default)]
    pub precipitation: Option<String>,
}

impl WeatherSnapshot {
    pub fn new(temperature: impl Into<String>) -> Self {
        Self { temperature: temperature.into(), feels_like: None, precipitation: None }
    }

    /// Leading signed decimal of the temperature string, or `None` when the
    /// string does not start with a number. Callers degrade to no filtering
    /// on `None`; a malformed reading never blocks suggestions.
    pub fn temperature_degrees(&self) -> Option<f64> {
        parse_leading_number(&self.temperature)
    }
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut saw_digit = false;
    let mut saw_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => saw_digit = true,
            b'.' if !saw_dot => saw_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !saw_digit {
        return None;
    }

    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::WeatherSnapshot;

    #[test]
    fn parses_leading_number_and_ignores_unit_suffix() {
        assert_eq!(WeatherSnapshot::new("28°C").temperature_degrees(), Some(28.0));
        assert_eq!(WeatherSnapshot::new("21.5°C").temperature_degrees(), Some(21.5));
        assert_eq!(WeatherSnapshot::new("-3.2 °C").temperature_degrees(), Some(-3.2));
        assert_eq!(WeatherSnapshot::new("+9C").temperature_degrees(), Some(9.0));
    }

    #[test]
    fn unparseable_temperature_degrades_to_none() {
        assert_eq!(WeatherSnapshot::new("warm").temperature_degrees(), None);
        assert_eq!(WeatherSnapshot::new("").temperature_degrees(), None);
        assert_eq!(WeatherSnapshot::new("-").temperature_degrees(), None);
        assert_eq!(WeatherSnapshot::new("°C").temperature_degrees(), None);
    }
}

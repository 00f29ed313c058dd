use std::env;

use rewear_core::AppConfig;

pub fn run(config: &AppConfig) -> String {
    let mut lines =
        vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "suggestion.neglect_threshold_days",
        &config.suggestion.neglect_threshold_days.to_string(),
        Some("REWEAR_NEGLECT_THRESHOLD_DAYS"),
    ));
    lines.push(render_line(
        "suggestion.complementary_count",
        &config.suggestion.complementary_count.to_string(),
        Some("REWEAR_COMPLEMENTARY_COUNT"),
    ));

    lines.push(render_line("weather.cold_below", &config.weather.cold_below.to_string(), None));
    lines.push(render_line("weather.warm_above", &config.weather.warm_above.to_string(), None));
    lines.push(render_line("weather.hot_above", &config.weather.hot_above.to_string(), None));

    lines.push(render_line(
        "inference.base_url",
        &config.inference.base_url,
        Some("REWEAR_INFERENCE_URL"),
    ));
    let api_key = if config.inference.api_key.is_some() { "<redacted>" } else { "<unset>" };
    lines.push(render_line("inference.api_key", api_key, Some("REWEAR_INFERENCE_API_KEY")));
    lines.push(render_line(
        "inference.timeout_secs",
        &config.inference.timeout_secs.to_string(),
        Some("REWEAR_INFERENCE_TIMEOUT_SECS"),
    ));

    lines.push(render_line("logging.level", &config.logging.level, Some("REWEAR_LOG_LEVEL")));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        Some("REWEAR_LOG_FORMAT"),
    ));

    lines.join("\n")
}

fn render_line(key: &str, value: &str, env_key: Option<&str>) -> String {
    let source = match env_key {
        Some(env_key) if env::var_os(env_key).is_some() => format!("env ({env_key})"),
        _ => "file or default".to_string(),
    };
    format!("- {key} = {value} (source: {source})")
}

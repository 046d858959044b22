//! Result formatter - formats lookup results for output

use crate::database::ResolvedLocation;
use serde_json::json;

#[cfg(feature = "colored-output")]
use colored::Colorize;

const NOT_FOUND: &str = "[Not found]";

fn highlight(text: &str, use_color: bool) -> String {
    #[cfg(feature = "colored-output")]
    {
        if use_color {
            return text.green().to_string();
        }
    }
    #[cfg(not(feature = "colored-output"))]
    let _ = use_color;
    text.to_string()
}

/// One-line rendering: `query -> Mountain View, United States (US)`
pub fn format_result(query: &str, location: Option<&ResolvedLocation>, use_color: bool) -> String {
    match location {
        Some(location) => format!("{} -> {}", query, highlight(&location.to_string(), use_color)),
        None => format!("{} -> {}", query, NOT_FOUND),
    }
}

/// Every field of the result, one per line, absent values shown as `-`
pub fn format_fields(query: &str, location: Option<&ResolvedLocation>) -> String {
    let Some(location) = location else {
        return format!("{} -> {}", query, NOT_FOUND);
    };

    let fields = location.fields();
    let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut result = format!("{}:", query);
    for (name, value) in fields {
        let value = value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        result.push_str(&format!("\n  {:<width$}  {}", name, value, width = width));
    }
    result
}

/// JSON object with the query and its result (`null` when not found)
pub fn format_json(query: &str, location: Option<&ResolvedLocation>, pretty: bool) -> Result<String, serde_json::Error> {
    let value = json!({
        "query": query,
        "result": location,
    });

    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

/// Append ` [info]` after every IPv4 address in `line` that `lookup` resolves
///
/// The rest of the line, line ending included, is left untouched.
pub fn annotate_line<F>(line: &str, mut lookup: F, use_color: bool) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(line.len());
    let mut last = 0;

    for (_, end, ip) in super::matcher::find_ipv4(line) {
        result.push_str(&line[last..end]);
        if let Some(info) = lookup(ip) {
            result.push_str(&format!(" [{}]", highlight(&info, use_color)));
        }
        last = end;
    }

    result.push_str(&line[last..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{CountryId, RegionRecord};

    fn us() -> ResolvedLocation {
        ResolvedLocation::Country(CountryId::new(225).unwrap())
    }

    #[test]
    fn test_format_result_plain() {
        assert_eq!(format_result("8.8.8.8", Some(&us()), false), "8.8.8.8 -> United States (US)");
        assert_eq!(format_result("10.0.0.1", None, false), "10.0.0.1 -> [Not found]");
    }

    #[test]
    fn test_highlight_keeps_text() {
        assert_eq!(highlight("United States (US)", false), "United States (US)");
        assert!(highlight("United States (US)", true).contains("United States (US)"));
    }

    #[test]
    fn test_format_fields() {
        let region = ResolvedLocation::Region(RegionRecord {
            country_code: "US".to_string(),
            region: Some("NY".to_string()),
        });
        let text = format_fields("1.2.3.4", Some(&region));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "1.2.3.4:");
        assert_eq!(lines[1], "  country_code  US");
        assert_eq!(lines[2], "  region        NY");
        assert_eq!(lines[3], "  time_zone     America/New_York");
    }

    #[test]
    fn test_format_json() {
        let json = format_json("8.8.8.8", Some(&us()), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["query"], "8.8.8.8");
        assert_eq!(value["result"]["edition"], "country");
        assert_eq!(value["result"]["country_code"], "US");

        let json = format_json("10.0.0.1", None, true).unwrap();
        assert!(json.contains("\"result\": null"));
    }

    #[test]
    fn test_annotate_line() {
        let line = "from 8.8.8.8 via 10.0.0.1 done\n";
        let annotated = annotate_line(
            line,
            |ip| (ip == "8.8.8.8").then(|| "United States (US)".to_string()),
            false,
        );
        assert_eq!(annotated, "from 8.8.8.8 [United States (US)] via 10.0.0.1 done\n");
    }

    #[test]
    fn test_annotate_line_without_addresses() {
        let line = "nothing to see here";
        assert_eq!(annotate_line(line, |_| Some("x".to_string()), false), line);
    }
}

use crate::domain::model::Rate;
use crate::utils::error::Result;

pub fn render_json(rates: &[Rate]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rates)?)
}

/// Plain-text table, one quote per line, in the order the service returned.
pub fn render_table(rates: &[Rate]) -> String {
    if rates.is_empty() {
        return "No rates returned".to_string();
    }

    let mut lines = vec![format!(
        "{:<40} {:<8} {:<18} {:<28} {:>10}  {}",
        "SERVICE", "CARRIER", "MAIL CLASS", "PACKAGE", "TOTAL", "FLAGS"
    )];

    for rate in rates {
        let mut flags = Vec::new();
        if rate.cheapest {
            flags.push("cheapest");
        }
        if rate.fastest {
            flags.push("fastest");
        }

        lines.push(format!(
            "{:<40} {:<8} {:<18} {:<28} {:>10.2}  {}",
            rate.title,
            rate.carrier.carrier_key,
            rate.mail_class_key,
            rate.package_type_key,
            rate.total_price,
            flags.join(",")
        ));
    }

    lines.join("\n")
}

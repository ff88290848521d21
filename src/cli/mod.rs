//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod products;
mod score;

pub use products::{run_products, ProductsCommand};
pub use score::{run_score, ScoreCommand};

/// Parse `--weights a,b,c,d` into four bucket weights.
///
/// Range and sum checks are left to config validation.
pub fn parse_weights(s: &str) -> Result<[f64; 4], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("expected 4 comma-separated weights, got {}", parts.len()));
    }
    let mut weights = [0.0_f64; 4];
    for (slot, part) in weights.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid weight {part:?}: {e}"))?;
    }
    Ok(weights)
}

/// Parse `--delimiter`, accepting `tab` and `\t` for a tab character.
pub fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "tab" | "\\t" | "\t" => return Ok('\t'),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weights() {
        assert_eq!(
            parse_weights("0.28,0.26, 0.24 ,0.22").unwrap(),
            [0.28, 0.26, 0.24, 0.22]
        );
        assert!(parse_weights("0.5,0.5").is_err());
        assert!(parse_weights("a,b,c,d").is_err());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";").unwrap(), ';');
        assert_eq!(parse_delimiter("tab").unwrap(), '\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), '\t');
        assert!(parse_delimiter(";;").is_err());
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("§").is_err());
    }
}

/// Returns the trimmed name, or `None` when the input is blank. Blank
/// input rejects the whole add/edit without surfacing an error.
pub fn clean_name(name: &str) -> Option<String> {
  let trimmed = name.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Parses a display-unit ("k") amount entered by the user and scales it
/// to base units. Empty or non-numeric input yields `None`. Negative
/// values pass through; the ledger stores them as entered.
pub fn parse_display_amount(input: &str) -> Option<f64> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return None;
  }
  match trimmed.parse::<f64>() {
    Ok(value) if value.is_finite() => Some(value * 1000.0),
    _ => None,
  }
}

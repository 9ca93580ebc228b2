/// Compact display form of a base-unit amount: the value divided by
/// 1000 with one decimal place, or none when it divides evenly, suffixed
/// with the unit marker. 5000 -> "5k", 3500 -> "3.5k".
pub fn format_amount(amount: f64) -> String {
  let scaled = amount / 1000.0;
  if amount % 1000.0 == 0.0 {
    format!("{:.0}k", scaled)
  } else {
    format!("{:.1}k", scaled)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn whole_thousands_drop_the_decimal() {
    assert_eq!(format_amount(5000.0), "5k");
    assert_eq!(format_amount(215_000.0), "215k");
    assert_eq!(format_amount(0.0), "0k");
  }

  #[test]
  fn partial_thousands_keep_one_decimal() {
    assert_eq!(format_amount(3500.0), "3.5k");
    assert_eq!(format_amount(2400.0), "2.4k");
    assert_eq!(format_amount(2500.0), "2.5k");
  }

  #[test]
  fn negative_balances_format_the_same_way() {
    assert_eq!(format_amount(-8000.0), "-8k");
    assert_eq!(format_amount(-3500.0), "-3.5k");
  }
}

use super::*;

#[test]
fn test_halves_sum_exactly() {
    let total: Points = [Points::whole(2), Points::HALF, Points::HALF, Points::ONE, Points::whole(2)]
        .iter()
        .sum();
    assert_eq!(total, Points::whole(6));
    assert_eq!(total.as_f64(), 6.0);
}

#[test]
fn test_times_applies_weight() {
    assert_eq!(Points::HALF.times(2), Points::ONE);
    assert_eq!(Points::ONE.times(0), Points::ZERO);
}

#[test]
fn test_display_uses_one_decimal() {
    assert_eq!(Points::whole(2).to_string(), "2.0");
    assert_eq!(Points::HALF.to_string(), "0.5");
    assert_eq!(Points::from_halves(-3).to_string(), "-1.5");
    assert_eq!(Points::ZERO.to_string(), "0.0");
}

#[test]
fn test_parse_accepts_integers_and_halves() {
    assert_eq!("2".parse::<Points>().unwrap(), Points::whole(2));
    assert_eq!("2.0".parse::<Points>().unwrap(), Points::whole(2));
    assert_eq!(" 4.5 ".parse::<Points>().unwrap(), Points::from_halves(9));
}

#[test]
fn test_parse_rejects_quarters() {
    assert!("0.25".parse::<Points>().is_err());
    assert!("abc".parse::<Points>().is_err());
}

#[test]
fn test_json_roundtrip_as_string() {
    let json = serde_json::to_string(&Points::from_halves(7)).unwrap();
    assert_eq!(json, "\"3.5\"");
    let back: Points = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Points::from_halves(7));

    let from_number: Points = serde_json::from_str("1.5").unwrap();
    assert_eq!(from_number, Points::from_halves(3));
}

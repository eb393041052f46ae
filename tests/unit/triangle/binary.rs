use super::*;

#[test]
fn one_renders_without_prefix() {
    assert_eq!(BinaryEntry::one().to_binary_string(), "1");
    assert_eq!(BinaryEntry::from_u128(0).to_binary_string(), "0");
    assert!(BinaryEntry::from_u128(0).is_zero());
}

#[test]
fn plus_matches_native_arithmetic() {
    let a = BinaryEntry::from_u128(5);
    let b = BinaryEntry::from_u128(6);
    let sum = a.plus(&b);
    assert_eq!(sum.to_u128(), Some(11));
    assert_eq!(sum.to_binary_string(), "1011");
    assert_eq!(sum.bit_len(), 4);
}

#[test]
fn plus_carries_into_new_limb() {
    let max = BinaryEntry::from_u128(u128::from(u64::MAX));
    let sum = max.plus(&BinaryEntry::one());
    assert_eq!(sum.to_u128(), Some(1u128 << 64));
    assert_eq!(sum.bit_len(), 65);

    let s = sum.to_binary_string();
    assert_eq!(s.len(), 65);
    assert!(s.starts_with('1'));
    assert!(s[1..].chars().all(|c| c == '0'));
}

#[test]
fn wide_values_render_inner_limbs_zero_padded() {
    let v = BinaryEntry::from_u128((1u128 << 64) | 1);
    let s = v.to_binary_string();
    assert_eq!(s.len(), 65);
    assert!(s.starts_with('1'));
    assert!(s.ends_with('1'));
    assert_eq!(s.matches('1').count(), 2);
}

#[test]
fn to_u128_is_none_past_two_limbs() {
    let big = BinaryEntry::from_u128(u128::MAX).plus(&BinaryEntry::one());
    assert_eq!(big.bit_len(), 129);
    assert_eq!(big.to_u128(), None);
}

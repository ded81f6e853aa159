// 🔢 Display formatting for amounts
//
// Bangladesh groups digits the South Asian way: the last three digits, then
// pairs (1,00,000 is one lakh). A flat 3-digit grouping would be wrong here.

use crate::denomination::{Denomination, TAKA_SIGN};

/// Group an integer as `12,34,567`
pub fn group_south_asian(n: u128) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `৳` followed by the grouped amount
pub fn format_taka(n: u128) -> String {
    format!("{}{}", TAKA_SIGN, group_south_asian(n))
}

/// `৳500 x 3 = ৳1500`, or nothing when no notes of this kind are entered
pub fn breakdown(denomination: Denomination, count: u64) -> Option<String> {
    if count == 0 {
        return None;
    }
    let product = u128::from(denomination.value()) * u128::from(count);
    Some(format!(
        "{} x {} = {}{}",
        denomination, count, TAKA_SIGN, product
    ))
}

/// Text shown inside an input field; a zero count shows as a blank field
pub fn input_display(count: u64) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

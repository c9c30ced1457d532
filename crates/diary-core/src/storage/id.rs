//! Entry id generation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

const ID_PREFIX: &str = "entry";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an id of the form `entry-<unix-millis>-<9 base-36 chars>`.
///
/// The suffix comes from a v4 UUID. Ids are collision-resistant, not
/// guaranteed unique.
pub fn generate_id(now: DateTime<Utc>) -> String {
    format!(
        "{}-{}-{}",
        ID_PREFIX,
        now.timestamp_millis(),
        base36_suffix(Uuid::new_v4().as_u128())
    )
}

fn base36_suffix(mut value: u128) -> String {
    let mut out = [b'0'; SUFFIX_LEN];
    for slot in out.iter_mut().rev() {
        *slot = BASE36[(value % 36) as usize];
        value /= 36;
    }
    out.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_id_format() {
        let now = Utc.timestamp_millis_opt(1_712_345_678_901).unwrap();
        let id = generate_id(now);

        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "entry");
        assert_eq!(parts[1], "1712345678901");
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_differ_within_same_millisecond() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..500).map(|_| generate_id(now)).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_base36_suffix_pads() {
        assert_eq!(base36_suffix(0), "000000000");
        assert_eq!(base36_suffix(35), "00000000z");
        assert_eq!(base36_suffix(36), "000000010");
    }
}

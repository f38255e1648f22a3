use chrono::Utc;
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_CHARS: usize = 11;

/// Generate a probabilistically unique id.
///
/// Base-36 epoch milliseconds followed by random base-36 characters. Not
/// collision-free; fine for single-device, low-volume data.
pub fn generate_id() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut id = to_base36(millis);

    let mut rng = rand::thread_rng();
    id.extend((0..RANDOM_CHARS).map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char));
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

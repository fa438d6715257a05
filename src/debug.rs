use std::fmt::Write;

/// Space-separated upper-case hex, e.g. `7E FF 06`, for log records.
pub fn to_string(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 3);
    for (i, e) in data.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", e);
    }
    s
}

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate the short numeric code the seller keys in at the locker terminal.
///
/// Always six digits, never starts with 0 (locker keypads drop leading
/// zeroes on some firmware revisions).
pub fn dropoff_code() -> String {
    use rand::Rng;
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

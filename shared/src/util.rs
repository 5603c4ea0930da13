/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000);
    (ts << 12) | rand_bits
}

/// Parse a `YYYY-MM-DD` event date
pub fn parse_event_date(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

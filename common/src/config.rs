pub struct Config {
    /// Quiet level: 1 drops the banner and section headers, 2 also drops
    /// per-item detail lines.
    pub quiet: u8,
    /// Capture a backtrace inside the panic hook before unwinding starts.
    pub backtrace: bool,
}

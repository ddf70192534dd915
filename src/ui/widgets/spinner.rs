/// Frames of the loading spinner.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the spinner frame for `index`.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

/// Growth stage of the emotion garden for a number of logged moods.
pub fn growth_message(entries: usize) -> &'static str {
    if entries < 3 {
        "Your garden is just sprouting 🌱"
    } else if entries < 7 {
        "Your garden is blooming 🌸"
    } else {
        "Your garden is thriving! 🌳"
    }
}

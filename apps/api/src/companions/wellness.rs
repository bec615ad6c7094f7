pub const WELLNESS_TIPS: [&str; 4] = [
    "Take a deep breath and stretch 🧘",
    "Try a 2-minute meditation 🧠",
    "Step outside for some fresh air 🌳",
    "Drink a glass of water 💧",
];

/// Serves tips in a fixed rotation.
#[derive(Debug, Default)]
pub struct WellnessTipRotor {
    served: usize,
}

impl WellnessTipRotor {
    pub fn next_tip(&mut self) -> &'static str {
        let tip = WELLNESS_TIPS[self.served % WELLNESS_TIPS.len()];
        self.served = self.served.wrapping_add(1);
        tip
    }
}

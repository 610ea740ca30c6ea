use rand::seq::SliceRandom;
use rand::Rng;

const QUOTES: [&str; 6] = [
    "Success is the sum of small efforts repeated day in and day out. – Robert Collier",
    "Don't watch the clock; do what it does. Keep going. – Sam Levenson",
    "The expert in anything was once a beginner. – Helen Hayes",
    "Education is the most powerful weapon which you can use to change the world. – Nelson Mandela",
    "கல்வி கற்றால் நேர்மை வரும். – திருவள்ளுவர்",
    "அறிவே ஆற்றல். – கலாம்",
];

#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: &'static [&'static str],
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteBook {
    pub fn new() -> Self {
        Self { quotes: &QUOTES }
    }

    pub fn all(&self) -> &'static [&'static str] {
        self.quotes
    }

    /// Uniform pick; every call is independent.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        // Never empty: the list is a non-empty constant.
        self.quotes.choose(rng).copied().unwrap_or(QUOTES[0])
    }

    pub fn random(&self) -> &'static str {
        self.pick(&mut rand::thread_rng())
    }
}

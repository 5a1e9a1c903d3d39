/// Number words that cannot be composed from smaller parts. Every entry above nine is an exception
/// to the "<ones>teen" / "<tens>-<ones>" rules, so `14`, `16`, `17` and `19` are not listed.
static IRREGULAR_WORDS: &[(u32, &str)] = &[
    (0, "zero"),
    (1, "one"),
    (2, "two"),
    (3, "three"),
    (4, "four"),
    (5, "five"),
    (6, "six"),
    (7, "seven"),
    (8, "eight"),
    (9, "nine"),
    (10, "ten"),
    (11, "eleven"),
    (12, "twelve"),
    (13, "thirteen"),
    (15, "fifteen"),
    (18, "eighteen"),
    (20, "twenty"),
    (30, "thirty"),
    (40, "forty"),
    (50, "fifty"),
    (60, "sixty"),
    (70, "seventy"),
    (80, "eighty"),
    (90, "ninety"),
];

/// Read-only view of the irregular number words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordLookup;

impl WordLookup {
    pub fn get(self, n: u32) -> Option<&'static str> {
        IRREGULAR_WORDS
            .binary_search_by_key(&n, |&(value, _)| value)
            .ok()
            .map(|i| IRREGULAR_WORDS[i].1)
    }

    pub fn contains(self, n: u32) -> bool {
        self.get(n).is_some()
    }

    /// All entries, ascending by value.
    pub fn iter(self) -> impl Iterator<Item = (u32, &'static str)> {
        IRREGULAR_WORDS.iter().copied()
    }
}

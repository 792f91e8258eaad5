//! Stateless novelty helpers. No store access, no state; randomness is the
//! only impurity and stays behind the `random_*`/`sleigh_order` functions
//! so the deterministic parts remain directly testable.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rand::seq::SliceRandom;

pub const NAUGHTY_WORDS: [&str; 3] = ["coal", "nothing", "socks"];

pub const NICE_MESSAGES: [&str; 4] = [
    "Santa is checking his list twice...",
    "The elves are hard at work!",
    "Rudolph approves of your wish!",
    "Mrs. Claus added this to the priority list!",
];

pub const CHRISTMAS_FACTS: [&str; 8] = [
    "The tradition of Christmas trees originated in Germany in the 16th century.",
    "Jingle Bells was originally written for Thanksgiving, not Christmas.",
    "The first artificial Christmas trees were made of dyed goose feathers.",
    "Christmas was once banned in England from 1647 to 1660.",
    "Rudolph the Red-Nosed Reindeer was created for a department store coloring book in 1939.",
    "The Twelve Days of Christmas gifts would cost over $40,000 today.",
    "Iceland has 13 Santa figures called the Yule Lads who visit children.",
    "The largest gingerbread house ever made was bigger than a tennis court.",
];

pub const REINDEER: [&str; 9] = [
    "Dasher", "Dancer", "Prancer", "Vixen", "Comet", "Cupid", "Donner", "Blitzen", "Rudolph",
];

const GIFTS_LOW: [&str; 5] = [
    "Handwritten card",
    "Homemade cookies",
    "Photo album",
    "Knitted scarf",
    "Book",
];
const GIFTS_MEDIUM: [&str; 5] = [
    "Board game",
    "Cozy blanket",
    "Headphones",
    "Art supplies",
    "Plant",
];
const GIFTS_HIGH: [&str; 5] = [
    "Smart watch",
    "Weekend getaway",
    "Designer item",
    "Cooking class",
    "Concert tickets",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub date: NaiveDate,
}

/// Time remaining until the next Christmas midnight (UTC). Past the 25th
/// the target rolls over to next year.
pub fn countdown_to_christmas(now: DateTime<Utc>) -> Countdown {
    let mut date = christmas_for(now.year());
    if now > midnight_utc(date) {
        date = christmas_for(now.year() + 1);
    }
    let total = (midnight_utc(date) - now).num_seconds().max(0);
    Countdown {
        days: total / 86_400,
        hours: total % 86_400 / 3_600,
        minutes: total % 3_600 / 60,
        seconds: total % 60,
        date,
    }
}

fn christmas_for(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 25).expect("Dec 25 is a valid date")
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub nice: bool,
    pub coal_probability: u32,
}

/// Deterministic classification: sum the name's UTF-16 code units (the
/// wire contract hashes surrogate pairs as two units); nice iff the sum
/// mod 10 exceeds 2. Naughty names get a coal probability in 50..=99.
pub fn naughty_or_nice(name: &str) -> Verdict {
    let hash: u32 = name.encode_utf16().map(u32::from).sum();
    let nice = hash % 10 > 2;
    let coal_probability = if nice { 0 } else { hash % 50 + 50 };
    Verdict { nice, coal_probability }
}

pub fn is_naughty_wish(wish: &str) -> bool {
    let lowered = wish.to_lowercase();
    NAUGHTY_WORDS.iter().any(|w| lowered.contains(w))
}

pub fn random_fact() -> &'static str {
    pick(&CHRISTMAS_FACTS)
}

pub fn random_nice_message() -> &'static str {
    pick(&NICE_MESSAGES)
}

/// Tonight's sleigh formation: the nine reindeer in random order.
pub fn sleigh_order() -> Vec<&'static str> {
    let mut order = REINDEER.to_vec();
    order.shuffle(&mut rand::thread_rng());
    order
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Low,
    Medium,
    High,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Tier selection: under 25 is low, over 100 is high, everything else
/// (including an unparseable or absent budget) is medium.
pub fn budget_tier(budget: Option<&str>) -> BudgetTier {
    let amount: f64 = budget.and_then(|b| b.trim().parse().ok()).unwrap_or(0.0);
    if amount != 0.0 && amount < 25.0 {
        BudgetTier::Low
    } else if amount > 100.0 {
        BudgetTier::High
    } else {
        BudgetTier::Medium
    }
}

pub fn suggestions_for(tier: BudgetTier) -> &'static [&'static str] {
    match tier {
        BudgetTier::Low => &GIFTS_LOW,
        BudgetTier::Medium => &GIFTS_MEDIUM,
        BudgetTier::High => &GIFTS_HIGH,
    }
}

pub fn random_gift(tier: BudgetTier) -> &'static str {
    pick(suggestions_for(tier))
}

pub const TREE_MIN_HEIGHT: i64 = 3;
pub const TREE_MAX_HEIGHT: i64 = 15;
pub const TREE_DEFAULT_HEIGHT: i64 = 5;

pub fn clamp_tree_height(raw: i64) -> usize {
    raw.clamp(TREE_MIN_HEIGHT, TREE_MAX_HEIGHT) as usize
}

/// ASCII tree: star on top, alternating `*`/`o` branch rows, double `|||`
/// trunk. Row `i` is `2i - 1` characters wide between the slashes.
pub fn render_tree(height: usize) -> String {
    let mut lines = Vec::with_capacity(height + 3);
    lines.push(format!("{}*", " ".repeat(height)));
    for i in 1..=height {
        let (first, second) = if i % 2 == 0 { ('o', '*') } else { ('*', 'o') };
        let mut row = String::from("/");
        while row.len() < i {
            row.push(first);
        }
        while row.len() < i * 2 - 1 {
            row.push(second);
        }
        row.push('\\');
        lines.push(format!("{}{}", " ".repeat(height - i), row));
    }
    let trunk = format!("{}|||", " ".repeat(height.saturating_sub(1)));
    lines.push(trunk.clone());
    lines.push(trunk);
    lines.join("\n")
}

fn pick(options: &'static [&'static str]) -> &'static str {
    options
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn countdown_on_christmas_eve() {
        let now = Utc.with_ymd_and_hms(2025, 12, 24, 0, 0, 0).unwrap();
        let c = countdown_to_christmas(now);
        assert_eq!((c.days, c.hours, c.minutes, c.seconds), (1, 0, 0, 0));
        assert_eq!(c.date, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    }

    #[test]
    fn countdown_rolls_over_after_the_25th() {
        let now = Utc.with_ymd_and_hms(2025, 12, 26, 0, 0, 0).unwrap();
        let c = countdown_to_christmas(now);
        assert_eq!(c.date, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
        assert_eq!(c.days, 364);
    }

    #[test]
    fn countdown_components_stay_in_range() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 13, 37, 42).unwrap();
        let c = countdown_to_christmas(now);
        assert!(c.days >= 0);
        assert!((0..24).contains(&c.hours));
        assert!((0..60).contains(&c.minutes));
        assert!((0..60).contains(&c.seconds));
    }

    #[test]
    fn classification_is_deterministic() {
        assert_eq!(naughty_or_nice("abc"), naughty_or_nice("abc"));
        let nice = naughty_or_nice("abc");
        assert!(nice.nice);
        assert_eq!(nice.coal_probability, 0);
        // code-unit sum 722, 722 % 10 == 2, 722 % 50 + 50 == 72
        let naughty = naughty_or_nice("Scrooge");
        assert!(!naughty.nice);
        assert_eq!(naughty.coal_probability, 72);
    }

    #[test]
    fn classification_hashes_surrogate_pairs_as_two_units() {
        // U+1F600 encodes as 0xD83D 0xDE00: unit sum 112189, 9 > 2 means
        // nice, whereas the scalar value 128512 would have read naughty.
        let verdict = naughty_or_nice("\u{1F600}");
        assert!(verdict.nice);
        assert_eq!(verdict.coal_probability, 0);
    }

    #[test]
    fn naughty_words_are_case_insensitive() {
        assert!(is_naughty_wish("a lump of COAL"));
        assert!(is_naughty_wish("socks again"));
        assert!(!is_naughty_wish("a pony"));
    }

    #[test]
    fn sleigh_order_is_a_permutation() {
        let order = sleigh_order();
        assert_eq!(order.len(), REINDEER.len());
        let mut sorted = order.clone();
        sorted.sort_unstable();
        let mut expected = REINDEER.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn budget_tiers() {
        assert_eq!(budget_tier(None), BudgetTier::Medium);
        assert_eq!(budget_tier(Some("10")), BudgetTier::Low);
        assert_eq!(budget_tier(Some("50")), BudgetTier::Medium);
        assert_eq!(budget_tier(Some("150")), BudgetTier::High);
        assert_eq!(budget_tier(Some("not-a-number")), BudgetTier::Medium);
        // zero is not a usable budget; fall through to medium
        assert_eq!(budget_tier(Some("0")), BudgetTier::Medium);
    }

    #[test]
    fn gift_comes_from_the_selected_tier() {
        let gift = random_gift(BudgetTier::High);
        assert!(suggestions_for(BudgetTier::High).contains(&gift));
    }

    #[test]
    fn tree_height_is_clamped() {
        assert_eq!(clamp_tree_height(1), 3);
        assert_eq!(clamp_tree_height(99), 15);
        assert_eq!(clamp_tree_height(7), 7);
    }

    #[test]
    fn renders_the_three_row_tree_exactly() {
        let expected = "   *\n  /\\\n /o*\\\n/**oo\\\n  |||\n  |||";
        assert_eq!(render_tree(3), expected);
    }

    #[test]
    fn tree_rows_grow_by_two() {
        let tree = render_tree(5);
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines.len(), 5 + 3);
        for (i, line) in lines.iter().enumerate().take(6).skip(1) {
            assert_eq!(line.trim_start().len(), 2 * i, "row {i} width");
        }
    }
}

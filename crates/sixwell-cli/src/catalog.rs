//! Static presentation metadata for the six dimensions.
//!
//! Labels, prompts, colors, and motivational copy are owned here, by the
//! presentation layer. The core library never consults any of this.

use sixwell_core::Dimension;

/// Display metadata for one dimension.
pub struct DimensionInfo {
    pub dimension: Dimension,
    pub label: &'static str,
    pub prompt: &'static str,
    pub action: &'static str,
    pub motivation: &'static str,
    pub color: &'static str,
}

pub const CATALOG: [DimensionInfo; 6] = [
    DimensionInfo {
        dimension: Dimension::Social,
        label: "Social Connection",
        prompt: "Did you connect with someone today?",
        action: "I reached out today",
        motivation: "Every hello strengthens your circle.",
        color: "#d46d50",
    },
    DimensionInfo {
        dimension: Dimension::Movement,
        label: "Healthy Movement",
        prompt: "Did you move your body today?",
        action: "I moved today",
        motivation: "Small steps lead to big change.",
        color: "#0097A7",
    },
    DimensionInfo {
        dimension: Dimension::Brain,
        label: "Learning & Brain Health",
        prompt: "What did you learn today?",
        action: "I learned something new",
        motivation: "Curiosity keeps your mind sharp.",
        color: "#8cbACF",
    },
    DimensionInfo {
        dimension: Dimension::Nutrition,
        label: "Nutrition & Healthy Living",
        prompt: "Did you eat something nourishing?",
        action: "I ate healthy today",
        motivation: "Fuel your body, feed your energy.",
        color: "#f4d6c6",
    },
    DimensionInfo {
        dimension: Dimension::Purpose,
        label: "Purpose & Meaning",
        prompt: "Did you reflect or give back today?",
        action: "I found purpose today",
        motivation: "Meaning makes every day richer.",
        color: "#f7ddb6",
    },
    DimensionInfo {
        dimension: Dimension::SelfCare,
        label: "Self-Care & Emotional Well-Being",
        prompt: "Did you pause and rest today?",
        action: "I took time for me",
        motivation: "Rest is strength in disguise.",
        color: "#01395e",
    },
];

/// Look up the catalog entry for a dimension.
pub fn info(dimension: Dimension) -> &'static DimensionInfo {
    &CATALOG[dimension.index()]
}

/// Display progress as 0-100, capped at the configured target.
///
/// This is the ring-fill derivation; the tracker itself keeps counting
/// past the target.
pub fn progress_pct(count: u32, target: u32) -> f64 {
    if target == 0 {
        return 100.0;
    }
    (f64::from(count) / f64::from(target) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_in_canonical_order() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert_eq!(entry.dimension.index(), i);
        }
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        assert_eq!(progress_pct(0, 30), 0.0);
        assert_eq!(progress_pct(15, 30), 50.0);
        assert_eq!(progress_pct(30, 30), 100.0);
        assert_eq!(progress_pct(45, 30), 100.0);
        assert_eq!(progress_pct(1, 0), 100.0);
    }
}

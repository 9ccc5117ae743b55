use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIER_BOUNDS;
use crate::errors::FlipError;

/// Category of the message shown after a MaxFlips attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Greeting {
    NoFlip,
    Meh,
    Good,
    Wow,
}

impl Greeting {
    pub fn message(&self) -> &'static str {
        match self {
            Greeting::NoFlip => "No flip? Give it a spin!",
            Greeting::Meh => "Meh.",
            Greeting::Good => "Pretty good!",
            Greeting::Wow => "Wow!",
        }
    }
}

/// A tier covers `[from, next tier's from)`; the last one is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingTier {
    pub from: u32,
    pub greeting: Greeting,
}

/// Ordered greeting tiers.
///
/// # Examples
///
/// ```
/// use flip_rs::game::{Greeting, GreetingTiers};
///
/// let tiers = GreetingTiers::default();
/// assert_eq!(tiers.greeting_for(0), Greeting::NoFlip);
/// assert_eq!(tiers.greeting_for(2), Greeting::Meh);
/// assert_eq!(tiers.greeting_for(4), Greeting::Good);
/// assert_eq!(tiers.greeting_for(50), Greeting::Wow);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GreetingTier>", into = "Vec<GreetingTier>")]
pub struct GreetingTiers {
    tiers: Vec<GreetingTier>,
}

impl Default for GreetingTiers {
    fn default() -> Self {
        let greetings = [Greeting::NoFlip, Greeting::Meh, Greeting::Good, Greeting::Wow];
        Self {
            tiers: DEFAULT_TIER_BOUNDS
                .iter()
                .zip(greetings)
                .map(|(&from, greeting)| GreetingTier { from, greeting })
                .collect(),
        }
    }
}

impl GreetingTiers {
    /// Returns InvalidConfig unless the first tier starts at 0 and bounds strictly increase.
    pub fn new(tiers: Vec<GreetingTier>) -> Result<Self, FlipError> {
        match tiers.first() {
            Some(first) if first.from == 0 => {}
            _ => {
                return Err(FlipError::InvalidConfig(
                    "greeting tiers must start at 0 flips".to_string(),
                ))
            }
        }
        if tiers.windows(2).any(|pair| pair[1].from <= pair[0].from) {
            return Err(FlipError::InvalidConfig(
                "greeting tier bounds must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { tiers })
    }

    pub fn greeting_for(&self, rotations: u32) -> Greeting {
        self.tiers
            .iter()
            .rev()
            .find(|tier| tier.from <= rotations)
            .map(|tier| tier.greeting)
            .unwrap_or(Greeting::NoFlip)
    }

    pub fn tiers(&self) -> &[GreetingTier] {
        &self.tiers
    }
}

impl TryFrom<Vec<GreetingTier>> for GreetingTiers {
    type Error = FlipError;

    fn try_from(value: Vec<GreetingTier>) -> Result<Self, Self::Error> {
        GreetingTiers::new(value)
    }
}

impl From<GreetingTiers> for Vec<GreetingTier> {
    fn from(value: GreetingTiers) -> Self {
        value.tiers
    }
}

/// Label shown next to the count, e.g. "4 flips".
pub fn flip_label(rotations: u32) -> String {
    if rotations == 1 {
        "1 flip".to_string()
    } else {
        format!("{} flips", rotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_boundaries() {
        let tiers = GreetingTiers::default();
        let expected = [
            (0, Greeting::NoFlip),
            (1, Greeting::Meh),
            (2, Greeting::Meh),
            (3, Greeting::Good),
            (4, Greeting::Good),
            (5, Greeting::Wow),
            (6, Greeting::Wow),
        ];
        for (rotations, greeting) in expected {
            assert_eq!(tiers.greeting_for(rotations), greeting, "{} flips", rotations);
        }
        assert_eq!(tiers.greeting_for(4).message(), "Pretty good!");
    }

    #[test]
    fn test_custom_tiers() {
        let tiers = GreetingTiers::new(vec![
            GreetingTier {
                from: 0,
                greeting: Greeting::Meh,
            },
            GreetingTier {
                from: 10,
                greeting: Greeting::Wow,
            },
        ])
        .unwrap();
        assert_eq!(tiers.greeting_for(9), Greeting::Meh);
        assert_eq!(tiers.greeting_for(10), Greeting::Wow);
    }

    #[test]
    fn test_invalid_tiers() {
        assert!(GreetingTiers::new(vec![]).is_err());
        let not_from_zero = vec![GreetingTier {
            from: 1,
            greeting: Greeting::Meh,
        }];
        assert!(GreetingTiers::new(not_from_zero).is_err());
        let unsorted = vec![
            GreetingTier {
                from: 0,
                greeting: Greeting::NoFlip,
            },
            GreetingTier {
                from: 3,
                greeting: Greeting::Good,
            },
            GreetingTier {
                from: 3,
                greeting: Greeting::Wow,
            },
        ];
        assert!(GreetingTiers::new(unsorted).is_err());
    }

    #[test]
    fn test_tiers_deserialize_with_validation() {
        let json = r#"[{"from":0,"greeting":"NoFlip"},{"from":2,"greeting":"Wow"}]"#;
        let tiers: GreetingTiers = serde_json::from_str(json).unwrap();
        assert_eq!(tiers.greeting_for(2), Greeting::Wow);

        let json = r#"[{"from":2,"greeting":"Wow"}]"#;
        assert!(serde_json::from_str::<GreetingTiers>(json).is_err());
    }

    #[test]
    fn test_flip_label() {
        assert_eq!(flip_label(0), "0 flips");
        assert_eq!(flip_label(1), "1 flip");
        assert_eq!(flip_label(4), "4 flips");
    }
}

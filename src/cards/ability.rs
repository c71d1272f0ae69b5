//! Ability tags and their effects.
//!
//! Abilities are encoded as strings on card templates: a bare name is a
//! flag (`"Taunt"`, `"Flying"`), a name with an amount is a magnitude
//! effect (`"Heal:5"`, `"Burn:3"`). Parsing is total - an unrecognized
//! name still parses, resolves as a logged no-op, and round-trips back
//! to its tag. New content strings can ship before engine support lands
//! without crashing old matches.

use serde::{Deserialize, Serialize};

/// A parsed ability tag: name plus optional magnitude.
///
/// ```
/// use duelforge::cards::Ability;
///
/// let heal = Ability::parse("Heal: 5");
/// assert_eq!(heal.name(), "Heal");
/// assert_eq!(heal.amount(), Some(5));
/// assert_eq!(heal.tag(), "Heal:5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    name: String,
    amount: Option<i64>,
}

impl Ability {
    /// Parse a tag of the form `"<Name>"` or `"<Name>:<amount>"`.
    ///
    /// Whitespace around the name and amount is tolerated (card data in
    /// the wild contains `"Heal: 5"`). A malformed amount is kept as
    /// part of the name so the tag is preserved verbatim in the log.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        if let Some((name, amount)) = tag.split_once(':') {
            if let Ok(amount) = amount.trim().parse::<i64>() {
                return Self {
                    name: name.trim().to_string(),
                    amount: Some(amount),
                };
            }
        }
        Self {
            name: tag.trim().to_string(),
            amount: None,
        }
    }

    /// The ability name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The magnitude, if the tag carried one.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    /// Render the canonical tag form.
    #[must_use]
    pub fn tag(&self) -> String {
        match self.amount {
            Some(amount) => format!("{}:{}", self.name, amount),
            None => self.name.clone(),
        }
    }

    /// Resolve the tag into the effect the engine applies.
    #[must_use]
    pub fn effect(&self) -> AbilityEffect {
        match (self.name.as_str(), self.amount) {
            ("Heal", Some(amount)) => AbilityEffect::Heal(amount),
            ("Burn", Some(amount)) => AbilityEffect::Burn(amount),
            (name, _) => match Keyword::from_name(name) {
                Some(keyword) => AbilityEffect::Passive(keyword),
                None => AbilityEffect::Unknown,
            },
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// What an ability does when its card is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Restore health to the caster's side, capped at the health ceiling.
    Heal(i64),
    /// Bonus damage to the opposing side on cast, on top of card attack.
    Burn(i64),
    /// Recognized keyword carried passively by the board entity.
    Passive(Keyword),
    /// Unrecognized tag: logged, never applied, never fatal.
    Unknown,
}

/// Recognized flag abilities.
///
/// Keywords ride on summoned creatures and equipped artifacts. The
/// resolver logs them so snapshots show what a board entity carries;
/// they exert no combat modifier of their own. Bare `Heal` and `Burn`
/// (no amount) are the flag forms of those names found in generated
/// card content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Taunt,
    Quick,
    Flying,
    Shield,
    Poison,
    Freeze,
    Burn,
    Heal,
}

impl Keyword {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Taunt" => Some(Keyword::Taunt),
            "Quick" => Some(Keyword::Quick),
            "Flying" => Some(Keyword::Flying),
            "Shield" => Some(Keyword::Shield),
            "Poison" => Some(Keyword::Poison),
            "Freeze" => Some(Keyword::Freeze),
            "Burn" => Some(Keyword::Burn),
            "Heal" => Some(Keyword::Heal),
            _ => None,
        }
    }

    /// The keyword's display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Keyword::Taunt => "Taunt",
            Keyword::Quick => "Quick",
            Keyword::Flying => "Flying",
            Keyword::Shield => "Shield",
            Keyword::Poison => "Poison",
            Keyword::Freeze => "Freeze",
            Keyword::Burn => "Burn",
            Keyword::Heal => "Heal",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

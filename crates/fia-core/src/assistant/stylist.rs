//! Offline rule-based stylist.
//!
//! Suggests a full outfit (top, bottom, shoes, accessory) from an event,
//! the weather and a mood without calling any service. Temperatures above
//! 68°F count as warm; anything else, including unreadable input, as cool.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::types::OutfitRequest;

const WARM_THRESHOLD_F: f64 = 68.0;

const WARM_TOPS: &[&str] = &["light blouse", "flowy top", "short-sleeve crop tee"];
const COOL_TOPS: &[&str] = &["cozy sweater", "long-sleeve turtleneck", "denim jacket over a tee"];
const WARM_BOTTOMS: &[&str] = &["high-waisted shorts", "midi skirt", "linen pants"];
const COOL_BOTTOMS: &[&str] = &["jeans", "leather pants", "maxi skirt"];
const CASUAL_SHOES: &[&str] = &["white sneakers", "ankle boots", "cute flats"];
const DRESSY_SHOES: &[&str] = &["block heels", "strappy sandals", "loafers"];
const ACCESSORIES: &[&str] = &[
    "gold hoops",
    "tote bag",
    "crossbody purse",
    "statement necklace",
    "stacked rings",
];

/// Which half of the wardrobe the weather calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climate {
    Warm,
    Cool,
}

impl Climate {
    /// Classify a weather string such as `"70°F"` or `"55 F"`.
    pub fn from_weather(weather: &str) -> Self {
        let degrees = weather
            .trim()
            .trim_end_matches(|c: char| c == 'F' || c == 'f' || c == '°' || c.is_whitespace())
            .parse::<f64>();

        match degrees {
            Ok(t) if t > WARM_THRESHOLD_F => Climate::Warm,
            _ => Climate::Cool,
        }
    }
}

/// Concrete pieces picked for one suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    pub top: &'static str,
    pub bottom: &'static str,
    pub shoes: &'static str,
    pub accessory: &'static str,
}

/// Offline outfit generator with an injectable random source.
pub struct RuleBasedStylist {
    rng: Mutex<StdRng>,
}

impl Default for RuleBasedStylist {
    fn default() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl RuleBasedStylist {
    /// Deterministic stylist for reproducible suggestions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick the pieces for `request`.
    pub fn pick(&self, request: &OutfitRequest) -> Outfit {
        let (tops, bottoms) = match Climate::from_weather(&request.weather) {
            Climate::Warm => (WARM_TOPS, WARM_BOTTOMS),
            Climate::Cool => (COOL_TOPS, COOL_BOTTOMS),
        };
        let shoes = if request.mood.to_lowercase().contains("casual") {
            CASUAL_SHOES
        } else {
            DRESSY_SHOES
        };

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Outfit {
            top: choose(tops, &mut rng),
            bottom: choose(bottoms, &mut rng),
            shoes: choose(shoes, &mut rng),
            accessory: choose(ACCESSORIES, &mut rng),
        }
    }

    /// Render a personalised style note for `request`.
    pub fn suggest(&self, request: &OutfitRequest) -> String {
        let outfit = self.pick(request);
        format!(
            "For a {} when it's around {}, go for a {} with {}, pair it with {}, and add {} to complete the look. \
             Since you're feeling {}, try adding your personal touch, maybe a pop of color or bold makeup!",
            request.event.to_lowercase(),
            request.weather,
            outfit.top,
            outfit.bottom,
            outfit.shoes,
            outfit.accessory,
            request.mood.to_lowercase(),
        )
    }
}

fn choose(items: &'static [&'static str], rng: &mut StdRng) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

use rand::Rng;

/// A prize shown when the chest opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reward {
    pub image_url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static REWARD_CATALOG: [Reward; 4] = [
    Reward {
        image_url: "https://placehold.co/400x300/FFD700/000000?text=Gold+Coins",
        title: "Golden Coins",
        description: "1000 gold coins for your adventure!",
    },
    Reward {
        image_url: "https://placehold.co/400x300/FF6347/FFFFFF?text=Magic+Sword",
        title: "Magic Sword",
        description: "A powerful weapon for your quests!",
    },
    Reward {
        image_url: "https://placehold.co/400x300/9370DB/FFFFFF?text=Mystery+Potion",
        title: "Mystery Potion",
        description: "Restores health and magical energy!",
    },
    Reward {
        image_url: "https://placehold.co/400x300/32CD32/000000?text=Enchanted+Shield",
        title: "Enchanted Shield",
        description: "Protection against dark magic!",
    },
];

/// Uniform pick over the catalog. Repeats across openings are allowed.
#[inline]
pub fn pick_reward<R: Rng + ?Sized>(rng: &mut R) -> &'static Reward {
    &REWARD_CATALOG[rng.gen_range(0..REWARD_CATALOG.len())]
}

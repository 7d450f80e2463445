//! Display formatting for API tags.
//!
//! PokéAPI identifies everything by lowercase hyphenated tags
//! ("pallet-town-area", "ultra-sun", "old-rod"). These helpers turn tags
//! into readable labels for menus, lists and encounter tables.

/// Title-case a hyphenated tag: "viridian-forest-area" -> "Viridian Forest Area".
///
/// Used for location areas, version names, species names, and as the
/// fallback for encounter methods without a table entry.
pub fn title_case_tag(tag: &str) -> String {
    tag.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable label for an encounter method tag.
///
/// Tags with game-specific meanings get curated labels; anything else
/// falls back to `title_case_tag`, which reads fine for most of them.
pub fn method_label(tag: &str) -> String {
    let label = match tag {
        "walk" => "Walking in tall grass",
        "old-rod" => "Old Rod",
        "good-rod" => "Good Rod",
        "super-rod" => "Super Rod",
        "surf" => "Surfing",
        "rock-smash" => "Rock Smash",
        "headbutt" => "Headbutt",
        "dark-grass" => "Dark grass",
        "grass-spots" => "Grass spots",
        "cave-spots" => "Cave spots",
        "bridge-spots" => "Bridge spots",
        "super-rod-spots" => "Super Rod (spots)",
        "surf-spots" => "Surfing (spots)",
        "yellow-flowers" => "Yellow flowers",
        "purple-flowers" => "Purple flowers",
        "red-flowers" => "Red flowers",
        "rough-terrain" => "Rough terrain",
        "gift" => "Gift/event",
        "gift-egg" => "Gift egg",
        "only-one" => "Only one (legendary)",
        "seaweed" => "Seaweed",
        "fishing" => "Fishing",
        "squirt-bottle" => "Squirt Bottle",
        "wailmer-pail" => "Wailmer Pail",
        "devon-scope" => "Devon Scope",
        "pokeradar" => "Poké Radar",
        "slot2-ruby" => "Slot 2 Ruby",
        "slot2-sapphire" => "Slot 2 Sapphire",
        "slot2-emerald" => "Slot 2 Emerald",
        "slot2-firered" => "Slot 2 FireRed",
        "slot2-leafgreen" => "Slot 2 LeafGreen",
        "gift-for-pokedex" => "Gift (Pokédex)",
        "gift-for-saving-girl" => "Gift (saving the girl)",
        "honey-tree" => "Honey tree",
        _ => return title_case_tag(tag),
    };
    label.to_string()
}

/// National dex number as displayed on a roster entry: 25 -> "#025".
pub fn dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

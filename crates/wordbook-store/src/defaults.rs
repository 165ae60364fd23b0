use wordbook_types::{Dictionary, Entry};

const DEFAULT_ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("vacant", "empty", "", "Daily Use"),
    ("apple", "a fruit that is round and red or green", "/ˈæp.əl/", "Food"),
    ("book", "a set of printed pages bound together", "/bʊk/", "Daily Use"),
    ("cat", "a small domesticated carnivorous mammal", "/kæt/", "Daily Use"),
    ("dog", "a domesticated canid, often kept as a pet", "/dɔːɡ/", "Daily Use"),
    ("house", "a building for human habitation", "/haʊs/", "Daily Use"),
    (
        "car",
        "a road vehicle powered by an engine, typically with four wheels",
        "/kɑːr/",
        "Daily Use",
    ),
    (
        "tree",
        "a perennial plant with an elongated stem, or trunk, supporting branches and leaves",
        "/triː/",
        "Nature",
    ),
    (
        "river",
        "a large natural stream of water flowing in a channel to the sea, a lake, or another river",
        "/ˈrɪv.ər/",
        "Nature",
    ),
    (
        "mountain",
        "a large natural elevation of the earth's surface rising abruptly from the surrounding level",
        "/ˈmaʊn.tən/",
        "Nature",
    ),
    (
        "sky",
        "the region of the atmosphere and outer space seen from the earth",
        "/skaɪ/",
        "Nature",
    ),
    (
        "sun",
        "the star at the center of our solar system that provides light and heat",
        "/sʌn/",
        "Science",
    ),
    ("moon", "the natural satellite that orbits the earth", "/muːn/", "Science"),
    (
        "water",
        "a transparent, tasteless, odorless liquid essential for most plant and animal life",
        "/ˈwɔː.tər/",
        "Nature",
    ),
    (
        "fire",
        "the visible, gaseous part of a combustion process producing heat and light",
        "/faɪər/",
        "Science",
    ),
];

/// Built-in words every dictionary starts from
pub fn default_dictionary() -> Dictionary {
    DEFAULT_ENTRIES
        .iter()
        .map(|&(word, definition, phonetics, category)| {
            (word.to_string(), Entry::new(definition, phonetics, category))
        })
        .collect()
}

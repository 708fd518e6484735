use std::{borrow::Cow, sync::LazyLock};

use ahash::{AHashMap, AHashSet};

/// Shortest stem a suffix rule may leave behind.
const MIN_STEM_LEN: usize = 3;

/// Irregular plurals the suffix rules cannot recover.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("elves", "elf"),
    ("scarves", "scarf"),
    ("hooves", "hoof"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("stimuli", "stimulus"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("quizzes", "quiz"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("goes", "go"),
    ("lenses", "lens"),
];

/// Singulars ending in `-ie`, whose plurals would otherwise go through `ies -> y`.
const IE_NOUNS: &[&str] = &[
    "movie",
    "zombie",
    "selfie",
    "cookie",
    "rookie",
    "hoodie",
    "brownie",
    "smoothie",
    "calorie",
    "goodie",
    "aussie",
    "hippie",
    "veggie",
    "newbie",
    "bestie",
    "genie",
    "pixie",
    "prairie",
    "lingerie",
    "sweetie",
    "freebie",
    "groupie",
    "junkie",
    "foodie",
    "techie",
    "birdie",
    "bootie",
    "eyrie",
    "cowrie",
    "boogie",
];

/// Words that end like plurals but are already their own base form.
const INVARIANT_WORDS: &[&str] = &[
    "news",
    "series",
    "species",
    "means",
    "thanks",
    "physics",
    "mathematics",
    "economics",
    "politics",
    "always",
    "perhaps",
    "towards",
    "afterwards",
    "chaos",
    "christmas",
    "canvas",
    "atlas",
    "alias",
    "bias",
    "lens",
];

/// Endings that look plural but are not (`class`, `bus`, `basis`).
const NON_PLURAL_ENDINGS: &[&str] = &["ss", "us", "is"];

/// `(suffix, replacement)`, tried longest first.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("ies", "y"),
    ("xes", "x"),
    ("s", ""),
];

static EXCEPTIONS: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUNS.iter().copied().collect());

static IE_SINGULARS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| IE_NOUNS.iter().copied().collect());

static INVARIANTS: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| INVARIANT_WORDS.iter().copied().collect());

/// Dictionary-free noun lemmatizer.
///
/// Treats every token as a noun, the same default a WordNet lemmatizer uses
/// when no part of speech is given: plurals collapse to their singular and
/// everything else (verbs, adjectives) passes through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounLemmatizer;

impl NounLemmatizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reduce a lowercase token to its base form.
    pub fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some(&lemma) = EXCEPTIONS.get(word) {
            return Cow::Borrowed(lemma);
        }
        if INVARIANTS.contains(word) || NON_PLURAL_ENDINGS.iter().any(|end| word.ends_with(end)) {
            return Cow::Borrowed(word);
        }

        for &(suffix, replacement) in SUFFIX_RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if suffix == "ies" {
                // "ties" -> "tie", not "ty"
                if stem.chars().count() < 2 {
                    continue;
                }
                if let Some(singular) = word.strip_suffix('s').filter(|w| IE_SINGULARS.contains(w)) {
                    return Cow::Borrowed(singular);
                }
            }
            if stem.chars().count() + replacement.len() < MIN_STEM_LEN {
                return Cow::Borrowed(word);
            }
            return if replacement.is_empty() {
                Cow::Borrowed(stem)
            } else {
                Cow::Owned(format!("{stem}{replacement}"))
            };
        }
        Cow::Borrowed(word)
    }
}

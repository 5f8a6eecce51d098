//! Read-only word lists consulted by the parser.

static SUFFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

static SURNAME_PREFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/surname_prefixes.rs"));

static TITLES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/titles.rs"));

static CONJUNCTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/conjunctions.rs"));

static FORCE_CASE: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/force_case.rs"));

static MC_CASE_PREFIXES: &[&str] = include!(concat!(env!("OUT_DIR"), "/mc_case_prefixes.rs"));

static MC_CASE_EXCEPTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/mc_case_exceptions.rs"));

static ENGLISH: Lexicon = Lexicon {
    suffixes: &SUFFIXES,
    surname_prefixes: &SURNAME_PREFIXES,
    titles: &TITLES,
    conjunctions: &CONJUNCTIONS,
    force_case: &FORCE_CASE,
    mc_case_prefixes: MC_CASE_PREFIXES,
    mc_case_exceptions: &MC_CASE_EXCEPTIONS,
};

/// The lookup tables that drive parsing and capitalization.
///
/// Tables are generated at compile time from `build/lexicon.json` and are
/// never mutated, so a single `&'static Lexicon` can be shared freely across
/// threads.
///
/// All keys are lowercase; every query lowercases its argument first.
#[derive(Debug)]
pub struct Lexicon {
    suffixes: &'static phf::Set<&'static str>,
    surname_prefixes: &'static phf::Set<&'static str>,
    titles: &'static phf::Set<&'static str>,
    conjunctions: &'static phf::Set<&'static str>,
    force_case: &'static phf::Map<&'static str, &'static str>,
    mc_case_prefixes: &'static [&'static str],
    mc_case_exceptions: &'static phf::Set<&'static str>,
}

impl Lexicon {
    /// The built-in English-oriented tables.
    pub fn english() -> &'static Lexicon {
        &ENGLISH
    }

    /// Is this word a generational or professional suffix, with or without
    /// a trailing period?
    ///
    /// ```
    /// use full_name_parser::Lexicon;
    ///
    /// let lexicon = Lexicon::english();
    /// assert!(lexicon.is_suffix("Jr."));
    /// assert!(lexicon.is_suffix("PH.D."));
    /// assert!(!lexicon.is_suffix("Smith"));
    /// ```
    pub fn is_suffix(&self, word: &str) -> bool {
        matches_abbreviation(self.suffixes, word)
    }

    /// Is this exact (lowercased) word listed as a suffix? Unlike
    /// `is_suffix`, no trailing-period folding is done.
    pub fn is_suffix_entry(&self, word: &str) -> bool {
        self.suffixes.contains(&*word.to_lowercase())
    }

    /// Is this word an honorific title, with or without a trailing period?
    pub fn is_title(&self, word: &str) -> bool {
        matches_abbreviation(self.titles, word)
    }

    pub fn is_surname_prefix(&self, word: &str) -> bool {
        self.surname_prefixes.contains(&*word.to_lowercase())
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        self.conjunctions.contains(&*word.to_lowercase())
    }

    /// The fixed spelling of a word whose capitalization never depends on
    /// position, e.g. `van` or `Ph.D.`.
    pub fn forced_case(&self, word: &str) -> Option<&'static str> {
        self.force_case.get(&*word.to_lowercase()).copied()
    }

    /// Prefixes after which the next letter is capitalized (`Mc`, `O'`),
    /// longest first.
    pub fn mc_case_prefixes(&self) -> &'static [&'static str] {
        self.mc_case_prefixes
    }

    /// Capitalized words that begin with a McCase prefix but are not
    /// capitalized after it (`Machado`, not `MacHado`).
    pub fn is_mc_case_exception(&self, capitalized: &str) -> bool {
        self.mc_case_exceptions.contains(capitalized)
    }
}

// A word matches if its lowercase form, minus at most one trailing period,
// is listed either bare or with the period restored
fn matches_abbreviation(set: &phf::Set<&'static str>, word: &str) -> bool {
    let lower = word.to_lowercase();
    let key = lower.strip_suffix('.').unwrap_or(&lower);

    if set.contains(key) {
        return true;
    }

    let mut dotted = String::with_capacity(key.len() + 1);
    dotted.push_str(key);
    dotted.push('.');
    set.contains(&*dotted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_with_and_without_period() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_suffix("jr"));
        assert!(lexicon.is_suffix("Jr."));
        assert!(lexicon.is_suffix("III"));
        assert!(lexicon.is_suffix("m.d."));
        assert!(lexicon.is_suffix("M.D"));
        assert!(!lexicon.is_suffix("John"));
        assert!(!lexicon.is_suffix(""));
    }

    #[test]
    fn suffix_entry_is_exact() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_suffix_entry("PhD"));
        assert!(lexicon.is_suffix_entry("Ph.D."));
        assert!(!lexicon.is_suffix_entry("jr."));
        assert!(!lexicon.is_suffix_entry("cpa"));
    }

    #[test]
    fn titles() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_title("Mr."));
        assert!(lexicon.is_title("DR"));
        assert!(lexicon.is_title("Professor"));
        assert!(lexicon.is_title("sr"));
        assert!(!lexicon.is_title("Smith"));
    }

    #[test]
    fn first_conjunction_is_found() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_conjunction("&"));
        assert!(lexicon.is_conjunction("AND"));
        assert!(lexicon.is_conjunction("y"));
        assert!(!lexicon.is_conjunction("or"));
    }

    #[test]
    fn particles() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_surname_prefix("Van"));
        assert!(lexicon.is_surname_prefix("de"));
        assert!(lexicon.is_surname_prefix("BÄCK"));
        assert!(!lexicon.is_surname_prefix("Smith"));
    }

    #[test]
    fn forced_case() {
        let lexicon = Lexicon::english();
        assert_eq!(Some("van"), lexicon.forced_case("VAN"));
        assert_eq!(Some("III"), lexicon.forced_case("iii"));
        assert_eq!(Some("Ph.D."), lexicon.forced_case("PH.D."));
        assert_eq!(None, lexicon.forced_case("Smith"));
    }

    #[test]
    fn mc_case_prefixes_longest_first() {
        let prefixes = Lexicon::english().mc_case_prefixes();
        assert_eq!(Some(&"mac"), prefixes.first());
        assert!(prefixes.contains(&"o'"));
    }
}

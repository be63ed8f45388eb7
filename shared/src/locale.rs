//! Locale digits
//!
//! Picks the decimal digits a locale writes numbers with and swaps them in
//! for ASCII ones. Only digits are localized; separators and the AM/PM
//! suffix stay as they are.

/// Decimal digit set, identified by its zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitStyle {
    zero: char,
}

/// Unicode numbering system names (the `-u-nu-` keyword) and their zeros
const NUMBERING_SYSTEMS: &[(&str, char)] = &[
    ("latn", '0'),
    ("arab", '\u{0660}'),
    ("arabext", '\u{06F0}'),
    ("beng", '\u{09E6}'),
    ("deva", '\u{0966}'),
    ("mymr", '\u{1040}'),
    ("tibt", '\u{0F20}'),
    ("thai", '\u{0E50}'),
    ("khmr", '\u{17E0}'),
    ("laoo", '\u{0ED0}'),
];

/// Arabic-speaking regions that default to Latin digits
const ARABIC_LATIN_REGIONS: &[&str] = &["MA", "DZ", "TN", "LY", "EH"];

impl DigitStyle {
    pub const ASCII: DigitStyle = DigitStyle { zero: '0' };

    /// Digits of the user's locale, ASCII when it can't be determined
    pub fn system() -> Self {
        match sys_locale::get_locale() {
            Some(tag) => {
                let style = Self::for_locale(&tag);
                log::debug!("locale {} uses digit zero {:?}", tag, style.zero);
                style
            }
            None => {
                log::debug!("no system locale, using ASCII digits");
                Self::ASCII
            }
        }
    }

    /// Digits for a BCP 47 tag such as "ar-EG", "fa_IR" or "th-TH-u-nu-thai"
    pub fn for_locale(tag: &str) -> Self {
        // POSIX tags may carry an encoding or modifier ("fa_IR.UTF-8@foo")
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let subtags: Vec<&str> = tag.split(['-', '_']).collect();

        // An explicit numbering system wins
        if let Some(pos) = subtags
            .windows(2)
            .position(|pair| pair[0].eq_ignore_ascii_case("nu"))
        {
            if let Some(style) = Self::for_numbering_system(subtags[pos + 1]) {
                return style;
            }
        }

        let language = subtags.first().copied().unwrap_or_default().to_ascii_lowercase();
        let region = subtags
            .iter()
            .skip(1)
            .find(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
            .map(|s| s.to_ascii_uppercase());

        let system = match language.as_str() {
            "ar" => match region.as_deref() {
                Some(r) if ARABIC_LATIN_REGIONS.contains(&r) => "latn",
                _ => "arab",
            },
            "fa" | "ps" => "arabext",
            "bn" => "beng",
            "mr" | "ne" => "deva",
            "my" => "mymr",
            "dz" => "tibt",
            _ => "latn",
        };
        Self::for_numbering_system(system).unwrap_or(Self::ASCII)
    }

    fn for_numbering_system(name: &str) -> Option<Self> {
        NUMBERING_SYSTEMS
            .iter()
            .find(|(system, _)| system.eq_ignore_ascii_case(name))
            .map(|&(_, zero)| DigitStyle { zero })
    }

    pub fn is_ascii(&self) -> bool {
        self.zero == '0'
    }

    /// Replace every ASCII digit in `text`
    pub fn localize(&self, text: &str) -> String {
        if self.is_ascii() {
            return text.to_string();
        }
        text.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => char::from_u32(self.zero as u32 + d).unwrap_or(c),
                None => c,
            })
            .collect()
    }
}

impl Default for DigitStyle {
    fn default() -> Self {
        Self::ASCII
    }
}

use bitflags::bitflags;

bitflags! {
    /// Matching modes of a [`MatchPattern`](super::MatchPattern).
    ///
    /// Letters follow the usual `/source/flags` notation: `g`, `i`, `m`, `s`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u8 {
        const GLOBAL = 1 << 0;
        const IGNORE_CASE = 1 << 1;
        const MULTI_LINE = 1 << 2;
        const DOT_ALL = 1 << 3;
    }
}

impl PatternFlags {
    /// `u` is accepted and maps to no flag since matching is always
    /// Unicode-aware. `y` (sticky) has no equivalent and is rejected.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'u' => Some(PatternFlags::empty()),
            'g' => Some(PatternFlags::GLOBAL),
            'i' => Some(PatternFlags::IGNORE_CASE),
            'm' => Some(PatternFlags::MULTI_LINE),
            's' => Some(PatternFlags::DOT_ALL),
            _ => None,
        }
    }

    pub fn letters(&self) -> String {
        let mut out = String::with_capacity(4);
        for (flag, letter) in [
            (PatternFlags::GLOBAL, 'g'),
            (PatternFlags::IGNORE_CASE, 'i'),
            (PatternFlags::MULTI_LINE, 'm'),
            (PatternFlags::DOT_ALL, 's'),
        ] {
            if self.contains(flag) {
                out.push(letter);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_emitted_in_canonical_order() {
        let flags = PatternFlags::DOT_ALL | PatternFlags::GLOBAL | PatternFlags::IGNORE_CASE;
        assert_eq!(flags.letters(), "gis");
        assert_eq!(PatternFlags::empty().letters(), "");
    }

    #[test]
    fn unknown_letter_is_rejected() {
        assert_eq!(PatternFlags::from_letter('m'), Some(PatternFlags::MULTI_LINE));
        assert_eq!(PatternFlags::from_letter('y'), None);
    }

    #[test]
    fn unicode_letter_is_accepted_without_setting_a_flag() {
        assert_eq!(PatternFlags::from_letter('u'), Some(PatternFlags::empty()));
    }
}

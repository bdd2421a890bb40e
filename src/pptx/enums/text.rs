//! Enumerations used by text frames, paragraphs and runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

base_enum! {
    /// Type of automatic sizing allowed for a text frame.
    ///
    /// Word wrap interacts with this setting to decide the exact behavior. An
    /// absent setting is inherited from the layout placeholder or the theme.
    ///
    /// Corresponds to the MS API `MsoAutoSize` enumeration. It has no markup
    /// tokens; the markup uses distinct child elements instead.
    pub enum MsoAutoSize ("MsoAutoSize") {
        /// No automatic sizing of the shape or text.
        None = 0, "NONE",
            "No automatic sizing of the shape or text will be done.\n\nText can freely extend \
             beyond the horizontal and vertical edges of the shape bounding box.";
        /// Shape height, and possibly width, grows to fit the text.
        ShapeToFitText = 1, "SHAPE_TO_FIT_TEXT",
            "The shape height and possibly width are adjusted to fit the text.\n\nNote this \
             setting interacts with the TextFrame.word_wrap property setting. If word wrap is \
             turned on, only the height of the shape will be adjusted; soft line breaks will be \
             used to fit the text horizontally.";
        /// Font size shrinks to fit the text within the shape.
        TextToFitShape = 2, "TEXT_TO_FIT_SHAPE",
            "The font size is reduced as necessary to fit the text within the shape.";
        /// Return value only.
        Mixed = -2, "MIXED",
            "Return value only; indicates a combination of automatic sizing schemes are used.";
    }
}

xml_enum! {
    /// Type of underline for text.
    ///
    /// Corresponds to the MS API `MsoTextUnderlineType` enumeration. Also
    /// available as [`MsoUnderline`].
    pub enum MsoTextUnderlineType ("MsoTextUnderlineType") {
        None = 0, "NONE", Some("none"), "Specifies no underline.";
        DashHeavyLine = 8, "DASH_HEAVY_LINE", Some("dashHeavy"), "Specifies a dash underline.";
        DashLine = 7, "DASH_LINE", Some("dash"), "Specifies a dash line underline.";
        DashLongHeavyLine = 10, "DASH_LONG_HEAVY_LINE", Some("dashLongHeavy"),
            "Specifies a long heavy line underline.";
        DashLongLine = 9, "DASH_LONG_LINE", Some("dashLong"),
            "Specifies a dashed long line underline.";
        DotDashHeavyLine = 12, "DOT_DASH_HEAVY_LINE", Some("dotDashHeavy"),
            "Specifies a dot dash heavy line underline.";
        DotDashLine = 11, "DOT_DASH_LINE", Some("dotDash"),
            "Specifies a dot dash line underline.";
        DotDotDashHeavyLine = 14, "DOT_DOT_DASH_HEAVY_LINE", Some("dotDotDashHeavy"),
            "Specifies a dot dot dash heavy line underline.";
        DotDotDashLine = 13, "DOT_DOT_DASH_LINE", Some("dotDotDash"),
            "Specifies a dot dot dash line underline.";
        DottedHeavyLine = 6, "DOTTED_HEAVY_LINE", Some("dottedHeavy"),
            "Specifies a dotted heavy line underline.";
        DottedLine = 5, "DOTTED_LINE", Some("dotted"), "Specifies a dotted line underline.";
        DoubleLine = 3, "DOUBLE_LINE", Some("dbl"), "Specifies a double line underline.";
        HeavyLine = 4, "HEAVY_LINE", Some("heavy"), "Specifies a heavy line underline.";
        SingleLine = 2, "SINGLE_LINE", Some("sng"), "Specifies a single line underline.";
        WavyDoubleLine = 17, "WAVY_DOUBLE_LINE", Some("wavyDbl"),
            "Specifies a wavy double line underline.";
        WavyHeavyLine = 16, "WAVY_HEAVY_LINE", Some("wavyHeavy"),
            "Specifies a wavy heavy line underline.";
        WavyLine = 15, "WAVY_LINE", Some("wavy"), "Specifies a wavy line underline.";
        Words = 1, "WORDS", Some("words"), "Specifies underlining words.";
        /// Return value only.
        Mixed = -2, "MIXED", None, "Specifies a mix of underline types (read-only).";
    }
}

/// Alias of [`MsoTextUnderlineType`].
pub type MsoUnderline = MsoTextUnderlineType;

xml_enum! {
    /// Vertical alignment of text in a text frame.
    ///
    /// An absent setting is inherited from the placeholder or the theme.
    ///
    /// Corresponds to the MS API `MsoVerticalAnchor` enumeration. Also
    /// available as [`MsoAnchor`].
    pub enum MsoVerticalAnchor ("MsoVerticalAnchor") {
        /// Aligns text to top of text frame.
        Top = 1, "TOP", Some("t"), "Aligns text to top of text frame";
        /// Centers text vertically.
        Middle = 3, "MIDDLE", Some("ctr"), "Centers text vertically";
        /// Aligns text to bottom of text frame.
        Bottom = 4, "BOTTOM", Some("b"), "Aligns text to bottom of text frame";
        /// Return value only.
        Mixed = -2, "MIXED", None,
            "Return value only; indicates a combination of the other states.";
    }
}

/// Alias of [`MsoVerticalAnchor`].
pub type MsoAnchor = MsoVerticalAnchor;

xml_enum! {
    /// Horizontal alignment of one or more paragraphs.
    ///
    /// Corresponds to the MS API `PpParagraphAlignment` enumeration. Also
    /// available as [`PpAlign`].
    pub enum PpParagraphAlignment ("PpParagraphAlignment") {
        Center = 2, "CENTER", Some("ctr"), "Center align";
        Distribute = 5, "DISTRIBUTE", Some("dist"),
            "Evenly distributes e.g. Japanese characters from left to right within a line";
        Justify = 4, "JUSTIFY", Some("just"),
            "Justified, i.e. each line both begins and ends at the margin.\n\nSpacing between \
             words is adjusted such that the line exactly fills the width of the paragraph.";
        JustifyLow = 7, "JUSTIFY_LOW", Some("justLow"),
            "Justify using a small amount of space between words.";
        Left = 1, "LEFT", Some("l"), "Left aligned";
        Right = 3, "RIGHT", Some("r"), "Right aligned";
        ThaiDistribute = 6, "THAI_DISTRIBUTE", Some("thaiDist"), "Thai distributed";
        /// Return value only.
        Mixed = -2, "MIXED", None,
            "Multiple alignments are present in a set of paragraphs (read-only).";
    }
}

/// Alias of [`PpParagraphAlignment`].
pub type PpAlign = PpParagraphAlignment;

xml_enum! {
    /// Numbering scheme of an auto-numbered bullet.
    ///
    /// Codes are not ordered by name (`ALPHA_LC_PERIOD` is 0 while
    /// `ALPHA_LC_PAREN_BOTH` is 8); they follow the MS API and must stay as is.
    ///
    /// Corresponds to the MS API `MsoNumberedBulletStyle` enumeration.
    pub enum MsoNumberedBulletStyle ("MsoNumberedBulletStyle") {
        AlphaLcParenBoth = 8, "ALPHA_LC_PAREN_BOTH", Some("alphaLCParenBoth"),
            "Lowercase alphabetical bullet with opening and closing parentheses.";
        AlphaLcParenRight = 9, "ALPHA_LC_PAREN_RIGHT", Some("alphaLCParenRight"),
            "Lowercase alphabetical bullet with closing parenthesis.";
        AlphaLcPeriod = 0, "ALPHA_LC_PERIOD", Some("alphaLCPeriod"),
            "Lowercase alphabetical bullet with period.|";
        AlphaUcParenBoth = 10, "ALPHA_UC_PAREN_BOTH", Some("alphaUCParenBoth"),
            "Uppercase alphabetical bullet with opening and closing parentheses.";
        AlphaUcParenRight = 11, "ALPHA_UC_PAREN_RIGHT", Some("alphaUCParenRight"),
            "Uppercase alphabetical bullet with closing parenthesis.";
        AlphaUcPeriod = 1, "ALPHA_UC_PERIOD", Some("alphaUCPeriod"),
            "Uppercase alphabetical bullet with period.";
        ArabicAbjadDash = 24, "ARABIC_ABJAD_DASH", Some("arabicAbjadDash"),
            "Arabic Abjad bullet with a dash.";
        ArabicAlphaDash = 23, "ARABIC_ALPHA_DASH", Some("arabicAlphaDash"),
            "Arabic alphabetical bullet with a dash.";
        ArabicDbPeriod = 29, "ARABIC_DB_PERIOD", Some("arabicDBPeriod"),
            "Arabic DB bullet with period.";
        ArabicDbPlain = 28, "ARABIC_DB_PLAIN", Some("arabicDBPlain"), "Plain Arabic DB bullet.";
        ArabicParenBoth = 12, "ARABIC_PAREN_BOTH", Some("arabicParenBoth"),
            "Arabic bullet with opening and closing parentheses.";
        ArabicParenRight = 2, "ARABIC_PAREN_RIGHT", Some("arabicParenRight"),
            "Arabic bullet with closing parenthesis.";
        ArabicPeriod = 3, "ARABIC_PERIOD", Some("arabicPeriod"), "Arabic bullet with period.";
        ArabicPlain = 13, "ARABIC_PLAIN", Some("arabicPlain"), "Plain Arabic bullet.";
        CircleNumDbPlain = 18, "CIRCLE_NUM_DB_PLAIN", Some("circleNumDBPlain"),
            "Circled number bullet.";
        CircleNumWdBlackPlain = 20, "CIRCLE_NUM_WD_BLACK_PLAIN", Some("circleNumWDBlackPlain"),
            "Circled number WD black bullet.";
        CircleNumWdWhitePlain = 19, "CIRCLE_NUM_WD_WHITE_PLAIN", Some("circleNumWDWhitePlain"),
            "Circled number WD white bullet.";
        HebrewAlphaDash = 25, "HEBREW_ALPHA_DASH", Some("hebrewAlphaDash"),
            "Hebrew alphabetical bullet with dash.";
        HindiAlpha1Period = 40, "HINDI_ALPHA1_PERIOD", Some("hindiAlpha1Period"),
            "Hindi alphabetical bullet 1 with period.";
        HindiAlphaPeriod = 36, "HINDI_ALPHA_PERIOD", Some("hindiAlphaPeriod"),
            "Hindi alphabetical bullet with period.";
        HindiNumParenRight = 39, "HINDI_NUM_PAREN_RIGHT", Some("hindiNumParenRight"),
            "Hindi numbered bullet with closing parenthesis.";
        HindiNumPeriod = 37, "HINDI_NUM_PERIOD", Some("hindiNumPeriod"),
            "Hindi numbered bullet with period.";
        KanjiKoreanPeriod = 27, "KANJI_KOREAN_PERIOD", Some("kanjiKoreanPeriod"),
            "Korean Kanji bullet with period.";
        KanjiKoreanPlain = 26, "KANJI_KOREAN_PLAIN", Some("kanjiKoreanPlain"),
            "Korean Kanji bullet.";
        KanjiSimpChinDbPeriod = 38, "KANJI_SIMP_CHIN_DB_PERIOD", Some("kanjiSimpChinDBPeriod"),
            "Simplified Chinese Kanji bulllet with period.";
        RomanLcParenBoth = 4, "ROMAN_LC_PAREN_BOTH", Some("romanLCParenBoth"),
            "Lowercase roman bullet with opening and closing parentheses.";
        RomanLcParenRight = 5, "ROMAN_LC_PAREN_RIGHT", Some("romanLCParenRight"),
            "Lowercase roman bullet with closing parenthesis.";
        RomanLcPeriod = 6, "ROMAN_LC_PERIOD", Some("romanLCPeriod"),
            "Lowercase roman bullet with period.";
        RomanUcParenBoth = 14, "ROMAN_UC_PAREN_BOTH", Some("romanUCParenBoth"),
            "Uppercase roman bullet with opening and closing parentheses.";
        RomanUcParenRight = 15, "ROMAN_UC_PAREN_RIGHT", Some("romanUCParenRight"),
            "Uppercase roman bullet with closing parenthesis.";
        RomanUcPeriod = 7, "ROMAN_UC_PERIOD", Some("romanUCPeriod"),
            "Uppercase roman bullet with period.";
        SimpChinPeriod = 17, "SIMP_CHIN_PERIOD", Some("simpChinPeriod"),
            "Simplified Chinese bulllet with period.";
        SimpChinPlain = 16, "SIMP_CHIN_PLAIN", Some("simpChinPlain"),
            "Simplified Chinese bullet.";
        /// Return value only.
        StyleMixed = -2, "STYLE_MIXED", Some("styleMixed"),
            "Return value only; indicates a combination of the other states. ";
        ThaiAlphaParenBoth = 32, "THAI_ALPHA_PAREN_BOTH", Some("thaiAlphaParenBoth"),
            "Thai alphabetical bullet with opening and closing parentheses.";
        ThaiAlphaParenRight = 31, "THAI_ALPHA_PAREN_RIGHT", Some("thaiAlphaParenRight"),
            "Thai alphabetical bullet with closing parenthesis.";
        ThaiAlphaPeriod = 30, "THAI_ALPHA_PERIOD", Some("thaiAlphaPeriod"),
            "Thai alphabetical bullet with period.";
        ThaiNumParenBoth = 35, "THAI_NUM_PAREN_BOTH", Some("thaiNumParenBoth"),
            "Thai numerical bullet with opening and closing parentheses.";
        ThaiNumParenRight = 34, "THAI_NUM_PAREN_RIGHT", Some("thaiNumParenRight"),
            "Thai numerical bullet with closing parenthesis.";
        ThaiNumPeriod = 33, "THAI_NUM_PERIOD", Some("thaiNumPeriod"),
            "Thai numerical bullet with period.";
        TradChinPeriod = 22, "TRAD_CHIN_PERIOD", Some("tradChinPeriod"),
            "Traditional Chinese bulllet with period.";
        TradChinPlain = 21, "TRAD_CHIN_PLAIN", Some("tradChinPlain"),
            "Traditional Chinese bulllet.";
    }
}

/// Kind of bullet applied to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BulletStyleType {
    /// Bullets explicitly disabled
    NoBullet,
    /// Literal glyph text
    Custom,
    /// Auto-numbered
    Numbered,
    /// Inherited from the layout, master or theme
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::pptx::enums::{BaseEnum, BaseXmlEnum};
    use std::any::TypeId;
    use std::collections::HashSet;

    fn assert_value_roundtrip<E: BaseEnum>() {
        for &member in E::MEMBERS {
            assert_eq!(E::from_value(member.value()).unwrap(), member);
            assert_eq!(E::from_name(member.name()).unwrap(), member);
        }
    }

    fn assert_xml_roundtrip<E: BaseXmlEnum>() {
        assert_value_roundtrip::<E>();
        for &member in E::MEMBERS {
            if let Some(token) = member.xml_value() {
                assert_eq!(E::from_xml(token).unwrap(), member);
                assert_eq!(member.to_xml().unwrap(), token);
            }
        }
    }

    fn assert_unique_values<E: BaseEnum>() {
        let values: HashSet<i32> = E::MEMBERS.iter().map(|m| m.value()).collect();
        assert_eq!(values.len(), E::MEMBERS.len(), "duplicate code in {}", E::NAME);
    }

    fn assert_unknown_lookups_fail<E: BaseEnum>() {
        assert_eq!(
            E::from_value(999),
            Err(Error::UnknownValue {
                enumeration: E::NAME,
                value: 999
            })
        );
        assert!(matches!(
            E::from_name("NOT_A_MEMBER"),
            Err(Error::UnknownName { .. })
        ));
    }

    #[test]
    fn test_roundtrip_every_member() {
        assert_value_roundtrip::<MsoAutoSize>();
        assert_xml_roundtrip::<MsoTextUnderlineType>();
        assert_xml_roundtrip::<MsoVerticalAnchor>();
        assert_xml_roundtrip::<PpParagraphAlignment>();
        assert_xml_roundtrip::<MsoNumberedBulletStyle>();
    }

    #[test]
    fn test_member_counts_and_unique_codes() {
        assert_eq!(MsoAutoSize::MEMBERS.len(), 4);
        assert_eq!(MsoTextUnderlineType::MEMBERS.len(), 19);
        assert_eq!(MsoVerticalAnchor::MEMBERS.len(), 4);
        assert_eq!(PpParagraphAlignment::MEMBERS.len(), 8);
        assert_eq!(MsoNumberedBulletStyle::MEMBERS.len(), 42);

        assert_unique_values::<MsoAutoSize>();
        assert_unique_values::<MsoTextUnderlineType>();
        assert_unique_values::<MsoVerticalAnchor>();
        assert_unique_values::<PpParagraphAlignment>();
        assert_unique_values::<MsoNumberedBulletStyle>();
    }

    #[test]
    fn test_unknown_lookups() {
        assert_unknown_lookups_fail::<MsoAutoSize>();
        assert_unknown_lookups_fail::<MsoTextUnderlineType>();
        assert_unknown_lookups_fail::<MsoVerticalAnchor>();
        assert_unknown_lookups_fail::<PpParagraphAlignment>();
        assert_unknown_lookups_fail::<MsoNumberedBulletStyle>();

        assert_eq!(
            PpAlign::from_xml("middle"),
            Err(Error::UnknownXmlValue {
                enumeration: "PpParagraphAlignment",
                value: "middle".to_string()
            })
        );
        assert!(MsoUnderline::from_xml("single").is_err());
        assert!(MsoAnchor::from_xml("").is_err());
        assert!(MsoNumberedBulletStyle::from_xml("AlphaLcPeriod").is_err());
    }

    #[test]
    fn test_exact_codes_and_tokens() {
        assert_eq!(MsoAutoSize::ShapeToFitText.value(), 1);
        assert_eq!(MsoAutoSize::Mixed.value(), -2);
        assert_eq!(MsoUnderline::SingleLine.to_xml().unwrap(), "sng");
        assert_eq!(MsoUnderline::Words.value(), 1);
        assert_eq!(MsoUnderline::from_xml("wavyDbl").unwrap().value(), 17);
        assert_eq!(MsoAnchor::Middle.to_xml().unwrap(), "ctr");
        assert_eq!(MsoAnchor::from_value(4).unwrap(), MsoAnchor::Bottom);
        assert_eq!(PpAlign::JustifyLow.to_xml().unwrap(), "justLow");
        assert_eq!(PpAlign::from_xml("l").unwrap().value(), 1);
    }

    #[test]
    fn test_numbered_codes_are_not_reordered() {
        assert_eq!(MsoNumberedBulletStyle::AlphaLcPeriod.value(), 0);
        assert_eq!(MsoNumberedBulletStyle::AlphaLcParenBoth.value(), 8);
        assert_eq!(MsoNumberedBulletStyle::HindiAlpha1Period.value(), 40);
        assert_eq!(
            MsoNumberedBulletStyle::from_value(3).unwrap(),
            MsoNumberedBulletStyle::ArabicPeriod
        );
        assert_eq!(
            MsoNumberedBulletStyle::from_xml("circleNumWDBlackPlain").unwrap(),
            MsoNumberedBulletStyle::CircleNumWdBlackPlain
        );
        // Declaration order, not code order
        assert_eq!(
            MsoNumberedBulletStyle::MEMBERS[0],
            MsoNumberedBulletStyle::AlphaLcParenBoth
        );
    }

    #[test]
    fn test_aliases_are_the_same_type() {
        assert_eq!(
            TypeId::of::<MsoUnderline>(),
            TypeId::of::<MsoTextUnderlineType>()
        );
        assert_eq!(TypeId::of::<MsoAnchor>(), TypeId::of::<MsoVerticalAnchor>());
        assert_eq!(TypeId::of::<PpAlign>(), TypeId::of::<PpParagraphAlignment>());
    }

    #[test]
    fn test_mixed_sentinels() {
        assert!(MsoAutoSize::Mixed.is_mixed());
        assert!(MsoUnderline::Mixed.is_mixed());
        assert!(MsoAnchor::Mixed.is_mixed());
        assert!(PpAlign::Mixed.is_mixed());
        assert!(MsoNumberedBulletStyle::StyleMixed.is_mixed());
        assert!(!PpAlign::Left.is_mixed());

        assert_eq!(
            PpAlign::Mixed.validate_settable(),
            Err(Error::ReadOnlyValue {
                enumeration: "PpParagraphAlignment",
                member: "MIXED"
            })
        );
        assert!(MsoAutoSize::Mixed.validate_settable().is_err());
        assert!(MsoNumberedBulletStyle::StyleMixed.validate_settable().is_err());
        assert_eq!(
            MsoAutoSize::TextToFitShape.validate_settable(),
            Ok(MsoAutoSize::TextToFitShape)
        );
    }

    #[test]
    fn test_mixed_has_no_markup_token() {
        assert_eq!(MsoUnderline::Mixed.xml_value(), None);
        assert_eq!(
            MsoAnchor::Mixed.to_xml(),
            Err(Error::NoXmlRepresentation {
                enumeration: "MsoVerticalAnchor",
                member: "MIXED"
            })
        );
        assert!(PpAlign::Mixed.to_xml().is_err());
        assert_eq!(
            MsoNumberedBulletStyle::StyleMixed.to_xml().unwrap(),
            "styleMixed"
        );
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(MsoAutoSize::ShapeToFitText.to_string(), "SHAPE_TO_FIT_TEXT (1)");
        assert_eq!(PpAlign::Mixed.to_string(), "MIXED (-2)");
        assert_eq!("CENTER".parse::<PpAlign>().unwrap(), PpAlign::Center);
        assert!("Center".parse::<PpAlign>().is_err());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(MsoAnchor::Top.description(), "Aligns text to top of text frame");
        assert!(
            MsoAutoSize::None
                .description()
                .starts_with("No automatic sizing of the shape or text will be done.\n\n")
        );
        assert!(PpAlign::Justify.description().contains("exactly fills the width"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_symbolic_name() {
        let json = serde_json::to_string(&MsoUnderline::DoubleLine).unwrap();
        assert_eq!(json, "\"DOUBLE_LINE\"");
        let back: MsoNumberedBulletStyle = serde_json::from_str("\"ROMAN_UC_PERIOD\"").unwrap();
        assert_eq!(back, MsoNumberedBulletStyle::RomanUcPeriod);
        let kind = serde_json::to_string(&BulletStyleType::NoBullet).unwrap();
        assert_eq!(kind, "\"NoBullet\"");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_from_value_only_accepts_known_codes(code in -100i32..100) {
                let known = MsoNumberedBulletStyle::MEMBERS.iter().any(|m| m.value() == code);
                prop_assert_eq!(MsoNumberedBulletStyle::from_value(code).is_ok(), known);
            }
        }
    }
}

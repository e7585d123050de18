#![forbid(unsafe_code)]

//! Static Unicode block range data.
//!
//! One entry per assigned block from the Unicode Character Database
//! `Blocks.txt`, converted to half-open `[start, end)` ranges. The table is
//! sorted ascending and pairwise non-overlapping; `blocks::find_block` relies
//! on both properties and the test suite verifies them exhaustively.

use crate::blocks::BlockRange;

/// Every assigned Unicode block, sorted by starting code point.
pub const BLOCKS: &[BlockRange] = &[
    BlockRange::new(0x0000, 0x0080), // Basic Latin
    BlockRange::new(0x0080, 0x0100), // Latin-1 Supplement
    BlockRange::new(0x0100, 0x0180), // Latin Extended-A
    BlockRange::new(0x0180, 0x0250), // Latin Extended-B
    BlockRange::new(0x0250, 0x02B0), // IPA Extensions
    BlockRange::new(0x02B0, 0x0300), // Spacing Modifier Letters
    BlockRange::new(0x0300, 0x0370), // Combining Diacritical Marks
    BlockRange::new(0x0370, 0x0400), // Greek and Coptic
    BlockRange::new(0x0400, 0x0500), // Cyrillic
    BlockRange::new(0x0500, 0x0530), // Cyrillic Supplement
    BlockRange::new(0x0530, 0x0590), // Armenian
    BlockRange::new(0x0590, 0x0600), // Hebrew
    BlockRange::new(0x0600, 0x0700), // Arabic
    BlockRange::new(0x0700, 0x0750), // Syriac
    BlockRange::new(0x0750, 0x0780), // Arabic Supplement
    BlockRange::new(0x0780, 0x07C0), // Thaana
    BlockRange::new(0x07C0, 0x0800), // NKo
    BlockRange::new(0x0800, 0x0840), // Samaritan
    BlockRange::new(0x0840, 0x0860), // Mandaic
    BlockRange::new(0x0860, 0x0870), // Syriac Supplement
    BlockRange::new(0x0870, 0x08A0), // Arabic Extended-B
    BlockRange::new(0x08A0, 0x0900), // Arabic Extended-A
    BlockRange::new(0x0900, 0x0980), // Devanagari
    BlockRange::new(0x0980, 0x0A00), // Bengali
    BlockRange::new(0x0A00, 0x0A80), // Gurmukhi
    BlockRange::new(0x0A80, 0x0B00), // Gujarati
    BlockRange::new(0x0B00, 0x0B80), // Oriya
    BlockRange::new(0x0B80, 0x0C00), // Tamil
    BlockRange::new(0x0C00, 0x0C80), // Telugu
    BlockRange::new(0x0C80, 0x0D00), // Kannada
    BlockRange::new(0x0D00, 0x0D80), // Malayalam
    BlockRange::new(0x0D80, 0x0E00), // Sinhala
    BlockRange::new(0x0E00, 0x0E80), // Thai
    BlockRange::new(0x0E80, 0x0F00), // Lao
    BlockRange::new(0x0F00, 0x1000), // Tibetan
    BlockRange::new(0x1000, 0x10A0), // Myanmar
    BlockRange::new(0x10A0, 0x1100), // Georgian
    BlockRange::new(0x1100, 0x1200), // Hangul Jamo
    BlockRange::new(0x1200, 0x1380), // Ethiopic
    BlockRange::new(0x1380, 0x13A0), // Ethiopic Supplement
    BlockRange::new(0x13A0, 0x1400), // Cherokee
    BlockRange::new(0x1400, 0x1680), // Unified Canadian Aboriginal Syllabics
    BlockRange::new(0x1680, 0x16A0), // Ogham
    BlockRange::new(0x16A0, 0x1700), // Runic
    BlockRange::new(0x1700, 0x1720), // Tagalog
    BlockRange::new(0x1720, 0x1740), // Hanunoo
    BlockRange::new(0x1740, 0x1760), // Buhid
    BlockRange::new(0x1760, 0x1780), // Tagbanwa
    BlockRange::new(0x1780, 0x1800), // Khmer
    BlockRange::new(0x1800, 0x18B0), // Mongolian
    BlockRange::new(0x18B0, 0x1900), // Unified Canadian Aboriginal Syllabics Extended
    BlockRange::new(0x1900, 0x1950), // Limbu
    BlockRange::new(0x1950, 0x1980), // Tai Le
    BlockRange::new(0x1980, 0x19E0), // New Tai Lue
    BlockRange::new(0x19E0, 0x1A00), // Khmer Symbols
    BlockRange::new(0x1A00, 0x1A20), // Buginese
    BlockRange::new(0x1A20, 0x1AB0), // Tai Tham
    BlockRange::new(0x1AB0, 0x1B00), // Combining Diacritical Marks Extended
    BlockRange::new(0x1B00, 0x1B80), // Balinese
    BlockRange::new(0x1B80, 0x1BC0), // Sundanese
    BlockRange::new(0x1BC0, 0x1C00), // Batak
    BlockRange::new(0x1C00, 0x1C50), // Lepcha
    BlockRange::new(0x1C50, 0x1C80), // Ol Chiki
    BlockRange::new(0x1C80, 0x1C90), // Cyrillic Extended-C
    BlockRange::new(0x1C90, 0x1CC0), // Georgian Extended
    BlockRange::new(0x1CC0, 0x1CD0), // Sundanese Supplement
    BlockRange::new(0x1CD0, 0x1D00), // Vedic Extensions
    BlockRange::new(0x1D00, 0x1D80), // Phonetic Extensions
    BlockRange::new(0x1D80, 0x1DC0), // Phonetic Extensions Supplement
    BlockRange::new(0x1DC0, 0x1E00), // Combining Diacritical Marks Supplement
    BlockRange::new(0x1E00, 0x1F00), // Latin Extended Additional
    BlockRange::new(0x1F00, 0x2000), // Greek Extended
    BlockRange::new(0x2000, 0x2070), // General Punctuation
    BlockRange::new(0x2070, 0x20A0), // Superscripts and Subscripts
    BlockRange::new(0x20A0, 0x20D0), // Currency Symbols
    BlockRange::new(0x20D0, 0x2100), // Combining Diacritical Marks for Symbols
    BlockRange::new(0x2100, 0x2150), // Letterlike Symbols
    BlockRange::new(0x2150, 0x2190), // Number Forms
    BlockRange::new(0x2190, 0x2200), // Arrows
    BlockRange::new(0x2200, 0x2300), // Mathematical Operators
    BlockRange::new(0x2300, 0x2400), // Miscellaneous Technical
    BlockRange::new(0x2400, 0x2440), // Control Pictures
    BlockRange::new(0x2440, 0x2460), // Optical Character Recognition
    BlockRange::new(0x2460, 0x2500), // Enclosed Alphanumerics
    BlockRange::new(0x2500, 0x2580), // Box Drawing
    BlockRange::new(0x2580, 0x25A0), // Block Elements
    BlockRange::new(0x25A0, 0x2600), // Geometric Shapes
    BlockRange::new(0x2600, 0x2700), // Miscellaneous Symbols
    BlockRange::new(0x2700, 0x27C0), // Dingbats
    BlockRange::new(0x27C0, 0x27F0), // Miscellaneous Mathematical Symbols-A
    BlockRange::new(0x27F0, 0x2800), // Supplemental Arrows-A
    BlockRange::new(0x2800, 0x2900), // Braille Patterns
    BlockRange::new(0x2900, 0x2980), // Supplemental Arrows-B
    BlockRange::new(0x2980, 0x2A00), // Miscellaneous Mathematical Symbols-B
    BlockRange::new(0x2A00, 0x2B00), // Supplemental Mathematical Operators
    BlockRange::new(0x2B00, 0x2C00), // Miscellaneous Symbols and Arrows
    BlockRange::new(0x2C00, 0x2C60), // Glagolitic
    BlockRange::new(0x2C60, 0x2C80), // Latin Extended-C
    BlockRange::new(0x2C80, 0x2D00), // Coptic
    BlockRange::new(0x2D00, 0x2D30), // Georgian Supplement
    BlockRange::new(0x2D30, 0x2D80), // Tifinagh
    BlockRange::new(0x2D80, 0x2DE0), // Ethiopic Extended
    BlockRange::new(0x2DE0, 0x2E00), // Cyrillic Extended-A
    BlockRange::new(0x2E00, 0x2E80), // Supplemental Punctuation
    BlockRange::new(0x2E80, 0x2F00), // CJK Radicals Supplement
    BlockRange::new(0x2F00, 0x2FE0), // Kangxi Radicals
    BlockRange::new(0x2FF0, 0x3000), // Ideographic Description Characters
    BlockRange::new(0x3000, 0x3040), // CJK Symbols and Punctuation
    BlockRange::new(0x3040, 0x30A0), // Hiragana
    BlockRange::new(0x30A0, 0x3100), // Katakana
    BlockRange::new(0x3100, 0x3130), // Bopomofo
    BlockRange::new(0x3130, 0x3190), // Hangul Compatibility Jamo
    BlockRange::new(0x3190, 0x31A0), // Kanbun
    BlockRange::new(0x31A0, 0x31C0), // Bopomofo Extended
    BlockRange::new(0x31C0, 0x31F0), // CJK Strokes
    BlockRange::new(0x31F0, 0x3200), // Katakana Phonetic Extensions
    BlockRange::new(0x3200, 0x3300), // Enclosed CJK Letters and Months
    BlockRange::new(0x3300, 0x3400), // CJK Compatibility
    BlockRange::new(0x3400, 0x4DC0), // CJK Unified Ideographs Extension A
    BlockRange::new(0x4DC0, 0x4E00), // Yijing Hexagram Symbols
    BlockRange::new(0x4E00, 0xA000), // CJK Unified Ideographs
    BlockRange::new(0xA000, 0xA490), // Yi Syllables
    BlockRange::new(0xA490, 0xA4D0), // Yi Radicals
    BlockRange::new(0xA4D0, 0xA500), // Lisu
    BlockRange::new(0xA500, 0xA640), // Vai
    BlockRange::new(0xA640, 0xA6A0), // Cyrillic Extended-B
    BlockRange::new(0xA6A0, 0xA700), // Bamum
    BlockRange::new(0xA700, 0xA720), // Modifier Tone Letters
    BlockRange::new(0xA720, 0xA800), // Latin Extended-D
    BlockRange::new(0xA800, 0xA830), // Syloti Nagri
    BlockRange::new(0xA830, 0xA840), // Common Indic Number Forms
    BlockRange::new(0xA840, 0xA880), // Phags-pa
    BlockRange::new(0xA880, 0xA8E0), // Saurashtra
    BlockRange::new(0xA8E0, 0xA900), // Devanagari Extended
    BlockRange::new(0xA900, 0xA930), // Kayah Li
    BlockRange::new(0xA930, 0xA960), // Rejang
    BlockRange::new(0xA960, 0xA980), // Hangul Jamo Extended-A
    BlockRange::new(0xA980, 0xA9E0), // Javanese
    BlockRange::new(0xA9E0, 0xAA00), // Myanmar Extended-B
    BlockRange::new(0xAA00, 0xAA60), // Cham
    BlockRange::new(0xAA60, 0xAA80), // Myanmar Extended-A
    BlockRange::new(0xAA80, 0xAAE0), // Tai Viet
    BlockRange::new(0xAAE0, 0xAB00), // Meetei Mayek Extensions
    BlockRange::new(0xAB00, 0xAB30), // Ethiopic Extended-A
    BlockRange::new(0xAB30, 0xAB70), // Latin Extended-E
    BlockRange::new(0xAB70, 0xABC0), // Cherokee Supplement
    BlockRange::new(0xABC0, 0xAC00), // Meetei Mayek
    BlockRange::new(0xAC00, 0xD7B0), // Hangul Syllables
    BlockRange::new(0xD7B0, 0xD800), // Hangul Jamo Extended-B
    BlockRange::new(0xD800, 0xDB80), // High Surrogates
    BlockRange::new(0xDB80, 0xDC00), // High Private Use Surrogates
    BlockRange::new(0xDC00, 0xE000), // Low Surrogates
    BlockRange::new(0xE000, 0xF900), // Private Use Area
    BlockRange::new(0xF900, 0xFB00), // CJK Compatibility Ideographs
    BlockRange::new(0xFB00, 0xFB50), // Alphabetic Presentation Forms
    BlockRange::new(0xFB50, 0xFE00), // Arabic Presentation Forms-A
    BlockRange::new(0xFE00, 0xFE10), // Variation Selectors
    BlockRange::new(0xFE10, 0xFE20), // Vertical Forms
    BlockRange::new(0xFE20, 0xFE30), // Combining Half Marks
    BlockRange::new(0xFE30, 0xFE50), // CJK Compatibility Forms
    BlockRange::new(0xFE50, 0xFE70), // Small Form Variants
    BlockRange::new(0xFE70, 0xFF00), // Arabic Presentation Forms-B
    BlockRange::new(0xFF00, 0xFFF0), // Halfwidth and Fullwidth Forms
    BlockRange::new(0xFFF0, 0x10000), // Specials
    BlockRange::new(0x10000, 0x10080), // Linear B Syllabary
    BlockRange::new(0x10080, 0x10100), // Linear B Ideograms
    BlockRange::new(0x10100, 0x10140), // Aegean Numbers
    BlockRange::new(0x10140, 0x10190), // Ancient Greek Numbers
    BlockRange::new(0x10190, 0x101D0), // Ancient Symbols
    BlockRange::new(0x101D0, 0x10200), // Phaistos Disc
    BlockRange::new(0x10280, 0x102A0), // Lycian
    BlockRange::new(0x102A0, 0x102E0), // Carian
    BlockRange::new(0x102E0, 0x10300), // Coptic Epact Numbers
    BlockRange::new(0x10300, 0x10330), // Old Italic
    BlockRange::new(0x10330, 0x10350), // Gothic
    BlockRange::new(0x10350, 0x10380), // Old Permic
    BlockRange::new(0x10380, 0x103A0), // Ugaritic
    BlockRange::new(0x103A0, 0x103E0), // Old Persian
    BlockRange::new(0x10400, 0x10450), // Deseret
    BlockRange::new(0x10450, 0x10480), // Shavian
    BlockRange::new(0x10480, 0x104B0), // Osmanya
    BlockRange::new(0x104B0, 0x10500), // Osage
    BlockRange::new(0x10500, 0x10530), // Elbasan
    BlockRange::new(0x10530, 0x10570), // Caucasian Albanian
    BlockRange::new(0x10570, 0x105C0), // Vithkuqi
    BlockRange::new(0x10600, 0x10780), // Linear A
    BlockRange::new(0x10780, 0x107C0), // Latin Extended-F
    BlockRange::new(0x10800, 0x10840), // Cypriot Syllabary
    BlockRange::new(0x10840, 0x10860), // Imperial Aramaic
    BlockRange::new(0x10860, 0x10880), // Palmyrene
    BlockRange::new(0x10880, 0x108B0), // Nabataean
    BlockRange::new(0x108E0, 0x10900), // Hatran
    BlockRange::new(0x10900, 0x10920), // Phoenician
    BlockRange::new(0x10920, 0x10940), // Lydian
    BlockRange::new(0x10980, 0x109A0), // Meroitic Hieroglyphs
    BlockRange::new(0x109A0, 0x10A00), // Meroitic Cursive
    BlockRange::new(0x10A00, 0x10A60), // Kharoshthi
    BlockRange::new(0x10A60, 0x10A80), // Old South Arabian
    BlockRange::new(0x10A80, 0x10AA0), // Old North Arabian
    BlockRange::new(0x10AC0, 0x10B00), // Manichaean
    BlockRange::new(0x10B00, 0x10B40), // Avestan
    BlockRange::new(0x10B40, 0x10B60), // Inscriptional Parthian
    BlockRange::new(0x10B60, 0x10B80), // Inscriptional Pahlavi
    BlockRange::new(0x10B80, 0x10BB0), // Psalter Pahlavi
    BlockRange::new(0x10C00, 0x10C50), // Old Turkic
    BlockRange::new(0x10C80, 0x10D00), // Old Hungarian
    BlockRange::new(0x10D00, 0x10D40), // Hanifi Rohingya
    BlockRange::new(0x10E60, 0x10E80), // Rumi Numeral Symbols
    BlockRange::new(0x10E80, 0x10EC0), // Yezidi
    BlockRange::new(0x10EC0, 0x10F00), // Arabic Extended-C
    BlockRange::new(0x10F00, 0x10F30), // Old Sogdian
    BlockRange::new(0x10F30, 0x10F70), // Sogdian
    BlockRange::new(0x10F70, 0x10FB0), // Old Uyghur
    BlockRange::new(0x10FB0, 0x10FE0), // Chorasmian
    BlockRange::new(0x10FE0, 0x11000), // Elymaic
    BlockRange::new(0x11000, 0x11080), // Brahmi
    BlockRange::new(0x11080, 0x110D0), // Kaithi
    BlockRange::new(0x110D0, 0x11100), // Sora Sompeng
    BlockRange::new(0x11100, 0x11150), // Chakma
    BlockRange::new(0x11150, 0x11180), // Mahajani
    BlockRange::new(0x11180, 0x111E0), // Sharada
    BlockRange::new(0x111E0, 0x11200), // Sinhala Archaic Numbers
    BlockRange::new(0x11200, 0x11250), // Khojki
    BlockRange::new(0x11280, 0x112B0), // Multani
    BlockRange::new(0x112B0, 0x11300), // Khudawadi
    BlockRange::new(0x11300, 0x11380), // Grantha
    BlockRange::new(0x11400, 0x11480), // Newa
    BlockRange::new(0x11480, 0x114E0), // Tirhuta
    BlockRange::new(0x11580, 0x11600), // Siddham
    BlockRange::new(0x11600, 0x11660), // Modi
    BlockRange::new(0x11660, 0x11680), // Mongolian Supplement
    BlockRange::new(0x11680, 0x116D0), // Takri
    BlockRange::new(0x11700, 0x11750), // Ahom
    BlockRange::new(0x11800, 0x11850), // Dogra
    BlockRange::new(0x118A0, 0x11900), // Warang Citi
    BlockRange::new(0x11900, 0x11960), // Dives Akuru
    BlockRange::new(0x119A0, 0x11A00), // Nandinagari
    BlockRange::new(0x11A00, 0x11A50), // Zanabazar Square
    BlockRange::new(0x11A50, 0x11AB0), // Soyombo
    BlockRange::new(0x11AB0, 0x11AC0), // Unified Canadian Aboriginal Syllabics Extended-A
    BlockRange::new(0x11AC0, 0x11B00), // Pau Cin Hau
    BlockRange::new(0x11B00, 0x11B60), // Devanagari Extended-A
    BlockRange::new(0x11C00, 0x11C70), // Bhaiksuki
    BlockRange::new(0x11C70, 0x11CC0), // Marchen
    BlockRange::new(0x11D00, 0x11D60), // Masaram Gondi
    BlockRange::new(0x11D60, 0x11DB0), // Gunjala Gondi
    BlockRange::new(0x11EE0, 0x11F00), // Makasar
    BlockRange::new(0x11F00, 0x11F51), // Kawi
    BlockRange::new(0x11FB0, 0x11FC0), // Lisu Supplement
    BlockRange::new(0x11FC0, 0x12000), // Tamil Supplement
    BlockRange::new(0x12000, 0x12400), // Cuneiform
    BlockRange::new(0x12400, 0x12480), // Cuneiform Numbers and Punctuation
    BlockRange::new(0x12480, 0x12550), // Early Dynastic Cuneiform
    BlockRange::new(0x12F90, 0x13000), // Cypro-Minoan
    BlockRange::new(0x13000, 0x13430), // Egyptian Hieroglyphs
    BlockRange::new(0x13430, 0x13440), // Egyptian Hieroglyph Format Controls
    BlockRange::new(0x14400, 0x14680), // Anatolian Hieroglyphs
    BlockRange::new(0x16800, 0x16A40), // Bamum Supplement
    BlockRange::new(0x16A40, 0x16A70), // Mro
    BlockRange::new(0x16A70, 0x16AD0), // Tangsa
    BlockRange::new(0x16AD0, 0x16B00), // Bassa Vah
    BlockRange::new(0x16B00, 0x16B90), // Pahawh Hmong
    BlockRange::new(0x16E40, 0x16EA0), // Medefaidrin
    BlockRange::new(0x16F00, 0x16FA0), // Miao
    BlockRange::new(0x16FE0, 0x17000), // Ideographic Symbols and Punctuation
    BlockRange::new(0x17000, 0x18800), // Tangut
    BlockRange::new(0x18800, 0x18B00), // Tangut Components
    BlockRange::new(0x18B00, 0x18D00), // Khitan Small Script
    BlockRange::new(0x18D00, 0x18D80), // Tangut Supplement
    BlockRange::new(0x1AFF0, 0x1B000), // Kana Extended-B
    BlockRange::new(0x1B000, 0x1B100), // Kana Supplement
    BlockRange::new(0x1B100, 0x1B130), // Kana Extended-A
    BlockRange::new(0x1B130, 0x1B170), // Small Kana Extension
    BlockRange::new(0x1B170, 0x1B300), // Nushu
    BlockRange::new(0x1BC00, 0x1BCA0), // Duployan
    BlockRange::new(0x1BCA0, 0x1BCB0), // Shorthand Format Controls
    BlockRange::new(0x1CF00, 0x1CFD0), // Znamenny Musical Notation
    BlockRange::new(0x1D000, 0x1D100), // Byzantine Musical Symbols
    BlockRange::new(0x1D100, 0x1D200), // Musical Symbols
    BlockRange::new(0x1D200, 0x1D250), // Ancient Greek Musical Notation
    BlockRange::new(0x1D2C0, 0x1D2E0), // Kaktovik Numerals
    BlockRange::new(0x1D2E0, 0x1D300), // Mayan Numerals
    BlockRange::new(0x1D300, 0x1D360), // Tai Xuan Jing Symbols
    BlockRange::new(0x1D360, 0x1D380), // Counting Rod Numerals
    BlockRange::new(0x1D400, 0x1D800), // Mathematical Alphanumeric Symbols
    BlockRange::new(0x1D800, 0x1DAB0), // Sutton SignWriting
    BlockRange::new(0x1DF00, 0x1E000), // Latin Extended-G
    BlockRange::new(0x1E000, 0x1E030), // Glagolitic Supplement
    BlockRange::new(0x1E030, 0x1E090), // Cyrillic Extended-D
    BlockRange::new(0x1E100, 0x1E150), // Nyiakeng Puachue Hmong
    BlockRange::new(0x1E290, 0x1E2C0), // Toto
    BlockRange::new(0x1E2C0, 0x1E300), // Wancho
    BlockRange::new(0x1E4D0, 0x1E500), // Nag Mundari
    BlockRange::new(0x1E7E0, 0x1E800), // Ethiopic Extended-B
    BlockRange::new(0x1E800, 0x1E8E0), // Mende Kikakui
    BlockRange::new(0x1E900, 0x1E960), // Adlam
    BlockRange::new(0x1EC70, 0x1ECC0), // Indic Siyaq Numbers
    BlockRange::new(0x1ED00, 0x1ED50), // Ottoman Siyaq Numbers
    BlockRange::new(0x1EE00, 0x1EF00), // Arabic Mathematical Alphabetic Symbols
    BlockRange::new(0x1F000, 0x1F030), // Mahjong Tiles
    BlockRange::new(0x1F030, 0x1F0A0), // Domino Tiles
    BlockRange::new(0x1F0A0, 0x1F100), // Playing Cards
    BlockRange::new(0x1F100, 0x1F200), // Enclosed Alphanumeric Supplement
    BlockRange::new(0x1F200, 0x1F300), // Enclosed Ideographic Supplement
    BlockRange::new(0x1F300, 0x1F600), // Miscellaneous Symbols and Pictographs
    BlockRange::new(0x1F600, 0x1F650), // Emoticons
    BlockRange::new(0x1F650, 0x1F680), // Ornamental Dingbats
    BlockRange::new(0x1F680, 0x1F700), // Transport and Map Symbols
    BlockRange::new(0x1F700, 0x1F780), // Alchemical Symbols
    BlockRange::new(0x1F780, 0x1F800), // Geometric Shapes Extended
    BlockRange::new(0x1F800, 0x1F900), // Supplemental Arrows-C
    BlockRange::new(0x1F900, 0x1FA00), // Supplemental Symbols and Pictographs
    BlockRange::new(0x1FA00, 0x1FA70), // Chess Symbols
    BlockRange::new(0x1FA70, 0x1FB00), // Symbols and Pictographs Extended-A
    BlockRange::new(0x1FB00, 0x1FC00), // Symbols for Legacy Computing
    BlockRange::new(0x20000, 0x2A6E0), // CJK Unified Ideographs Extension B
    BlockRange::new(0x2A700, 0x2B740), // CJK Unified Ideographs Extension C
    BlockRange::new(0x2B740, 0x2B820), // CJK Unified Ideographs Extension D
    BlockRange::new(0x2B820, 0x2CEB0), // CJK Unified Ideographs Extension E
    BlockRange::new(0x2CEB0, 0x2EBF0), // CJK Unified Ideographs Extension F
    BlockRange::new(0x2F800, 0x2FA20), // CJK Compatibility Ideographs Supplement
    BlockRange::new(0x30000, 0x31350), // CJK Unified Ideographs Extension G
    BlockRange::new(0x31350, 0x323B0), // CJK Unified Ideographs Extension H
    BlockRange::new(0xE0000, 0xE0080), // Tags
    BlockRange::new(0xE0100, 0xE01F0), // Variation Selectors Supplement
    BlockRange::new(0xF0000, 0x100000), // Supplementary Private Use Area-A
    BlockRange::new(0x100000, 0x110000), // Supplementary Private Use Area-B
];

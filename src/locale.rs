//! Locale identifiers: short form, canonical form, and ISO-639 lookups.

use phf::phf_map;

/// ISO 639-3 codes reported by the language guesser, mapped to the ISO 639-1
/// codes used by locale folder names.
static ISO639_3_TO_1: phf::Map<&'static str, &'static str> = phf_map! {
    "afr" => "af",
    "aka" => "ak",
    "amh" => "am",
    "ara" => "ar",
    "aze" => "az",
    "bel" => "be",
    "ben" => "bn",
    "bul" => "bg",
    "cat" => "ca",
    "ces" => "cs",
    "cmn" => "zh",
    "dan" => "da",
    "deu" => "de",
    "ell" => "el",
    "eng" => "en",
    "epo" => "eo",
    "est" => "et",
    "fin" => "fi",
    "fra" => "fr",
    "guj" => "gu",
    "heb" => "he",
    "hin" => "hi",
    "hrv" => "hr",
    "hun" => "hu",
    "hye" => "hy",
    "ind" => "id",
    "ita" => "it",
    "jav" => "jv",
    "jpn" => "ja",
    "kan" => "kn",
    "kat" => "ka",
    "khm" => "km",
    "kor" => "ko",
    "lat" => "la",
    "lav" => "lv",
    "lit" => "lt",
    "mal" => "ml",
    "mar" => "mr",
    "mkd" => "mk",
    "mya" => "my",
    "nep" => "ne",
    "nld" => "nl",
    "nob" => "nb",
    "ori" => "or",
    "pan" => "pa",
    "pes" => "fa",
    "pol" => "pl",
    "por" => "pt",
    "ron" => "ro",
    "rus" => "ru",
    "sin" => "si",
    "slk" => "sk",
    "slv" => "sl",
    "sna" => "sn",
    "spa" => "es",
    "srp" => "sr",
    "swe" => "sv",
    "tam" => "ta",
    "tel" => "te",
    "tgl" => "tl",
    "tha" => "th",
    "tuk" => "tk",
    "tur" => "tr",
    "ukr" => "uk",
    "urd" => "ur",
    "uzb" => "uz",
    "vie" => "vi",
    "yid" => "yi",
    "zul" => "zu",
};

/// Map an ISO 639-3 code to ISO 639-1, if known.
pub fn iso639_1(code3: &str) -> Option<&'static str> {
    ISO639_3_TO_1.get(code3).copied()
}

/// Reverse lookup: ISO 639-1 to ISO 639-3.
pub fn iso639_3(code1: &str) -> Option<&'static str> {
    let code1 = code1.to_lowercase();
    ISO639_3_TO_1
        .entries()
        .find(|(_, short)| **short == code1)
        .map(|(long, _)| *long)
}

/// English name of the language behind a locale, e.g. "German" for "de-CH".
pub fn language_name(locale: &str) -> Option<&'static str> {
    let code3 = iso639_3(&short_form(locale))?;
    whatlang::Lang::from_code(code3).map(|lang| lang.eng_name())
}

/// The language part of a locale, lowercased: "pt-BR" -> "pt".
pub fn short_form(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

/// Canonical spelling of a locale: language lowercase, region uppercase,
/// script titlecase ("zh-hant-tw" -> "zh-Hant-TW").
pub fn canonicalize(locale: &str) -> String {
    let mut parts = locale.trim().split(['-', '_']);
    let mut out = parts.next().unwrap_or("").to_lowercase();
    for part in parts {
        out.push('-');
        match part.len() {
            2 | 3 if part.chars().all(|c| c.is_ascii_alphanumeric()) => {
                out.push_str(&part.to_uppercase())
            }
            4 => {
                let mut chars = part.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                }
            }
            _ => out.push_str(&part.to_lowercase()),
        }
    }
    out
}

/// Case-insensitive comparison of two language codes.
pub fn same_language(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

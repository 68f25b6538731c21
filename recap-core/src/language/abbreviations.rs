//! Abbreviation tables consulted before accepting a sentence break.
//!
//! Entries are lowercase without their trailing period. Inner periods stay
//! (`e.g`, `i.e`).

pub(super) const ENGLISH: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co",
    "corp", "vol", "no", "fig", "approx", "dept", "est", "min", "max", "jan", "feb",
    "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "e.g", "i.e",
    "a.m", "p.m", "u.s", "cf", "al", "gen", "gov", "rep", "sen", "ave", "blvd",
];

pub(super) const SPANISH: &[&str] = &[
    "sr", "sra", "srta", "dr", "dra", "ud", "uds", "lic", "ing", "prof", "etc", "pág",
    "pag", "vol", "núm", "num", "aprox", "av", "avda", "dpto", "cía", "ej", "p.ej", "ee.uu",
    "admón", "art", "cap", "gral", "tel",
];

pub(super) const FRENCH: &[&str] = &[
    "m", "mm", "mme", "mmes", "mlle", "mlles", "dr", "pr", "me", "etc", "p", "pp", "vol",
    "env", "cf", "av", "bd", "ex", "fig", "n°", "no", "art", "chap", "éd", "tél", "st",
    "ste",
];

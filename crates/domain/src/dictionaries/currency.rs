//! Currency unit vocabulary.

use super::{Dictionary, Term};

pub static CURRENCY_UNITS: Dictionary = Dictionary::new(
    "currency_units",
    &[
        Term::new("cp", "cp", "bakır", "").with_aliases(&["copper"]),
        Term::new("sp", "sp", "gümüş", "").with_aliases(&["silver"]),
        Term::new("ep", "ep", "elektrum", "").with_aliases(&["electrum"]),
        Term::new("gp", "gp", "altın", "").with_aliases(&["gold"]),
        Term::new("pp", "pp", "platin", "").with_aliases(&["platinum"]),
    ],
);

//! Element lookup tables: atomic number to symbol, symbol to CPK color.

/// Symbol used for atomic numbers outside the table.
pub const UNKNOWN_SYMBOL: &str = "X";

/// Neutral gray for elements without a listed color.
pub const NEUTRAL_COLOR: [f32; 3] = [0.75, 0.75, 0.75];

// Index `n - 1` holds the symbol for atomic number `n`.
const SYMBOLS: [&str; 86] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al",
    "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe",
    "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr",
    "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm",
    "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W",
    "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
];

// Jmol-style CPK palette for the elements that show up in small molecules.
const COLORS: &[(&str, [f32; 3])] = &[
    ("H", [1.0, 1.0, 1.0]),
    ("C", [0.56, 0.56, 0.56]),
    ("N", [0.19, 0.31, 0.97]),
    ("O", [1.0, 0.05, 0.05]),
    ("F", [0.56, 0.88, 0.31]),
    ("Cl", [0.12, 0.94, 0.12]),
    ("Br", [0.65, 0.16, 0.16]),
    ("I", [0.58, 0.0, 0.58]),
    ("S", [1.0, 1.0, 0.19]),
    ("P", [1.0, 0.5, 0.0]),
    ("B", [1.0, 0.71, 0.71]),
    ("Na", [0.67, 0.36, 0.95]),
    ("K", [0.56, 0.25, 0.83]),
    ("Mg", [0.54, 1.0, 0.0]),
    ("Ca", [0.24, 1.0, 0.0]),
    ("Fe", [0.88, 0.4, 0.2]),
    ("Zn", [0.49, 0.5, 0.69]),
    ("Cu", [0.78, 0.5, 0.2]),
    ("Si", [0.94, 0.78, 0.63]),
    ("Li", [0.8, 0.5, 1.0]),
];

/// Symbol for an atomic number, or [`UNKNOWN_SYMBOL`].
#[must_use]
pub fn symbol_for_atomic_number(number: u32) -> &'static str {
    (number as usize)
        .checked_sub(1)
        .and_then(|i| SYMBOLS.get(i))
        .copied()
        .unwrap_or(UNKNOWN_SYMBOL)
}

/// CPK color for a symbol, matched case-insensitively.
#[must_use]
pub fn cpk_color(symbol: &str) -> Option<[f32; 3]> {
    let symbol = symbol.trim();
    COLORS
        .iter()
        .find(|(s, _)| s.eq_ignore_ascii_case(symbol))
        .map(|(_, c)| *c)
}

/// Whether a symbol names hydrogen (or its isotopes written as D/T).
#[must_use]
pub fn is_hydrogen(symbol: &str) -> bool {
    matches!(symbol.trim().to_ascii_uppercase().as_str(), "H" | "D" | "T")
}

/// Whether a symbol names carbon.
#[must_use]
pub fn is_carbon(symbol: &str) -> bool {
    symbol.trim().eq_ignore_ascii_case("C")
}

/// Display form of a symbol: first letter upper case, rest lower case.
#[must_use]
pub fn canonical_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// `#rrggbb` form of an RGB triple in [0, 1].
#[must_use]
pub fn to_hex(color: [f32; 3]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_numbers_map_to_symbols() {
        assert_eq!(symbol_for_atomic_number(1), "H");
        assert_eq!(symbol_for_atomic_number(6), "C");
        assert_eq!(symbol_for_atomic_number(17), "Cl");
        assert_eq!(symbol_for_atomic_number(86), "Rn");
    }

    #[test]
    fn unknown_atomic_numbers_map_to_sentinel() {
        assert_eq!(symbol_for_atomic_number(0), UNKNOWN_SYMBOL);
        assert_eq!(symbol_for_atomic_number(255), UNKNOWN_SYMBOL);
    }

    #[test]
    fn color_lookup_ignores_case() {
        assert_eq!(cpk_color("cl"), cpk_color("Cl"));
        assert_eq!(cpk_color("O"), Some([1.0, 0.05, 0.05]));
        assert_eq!(cpk_color("Xx"), None);
    }

    #[test]
    fn symbols_are_canonicalized() {
        assert_eq!(canonical_symbol("CL"), "Cl");
        assert_eq!(canonical_symbol(" n "), "N");
        assert_eq!(canonical_symbol(""), "");
    }

    #[test]
    fn hex_encoding() {
        assert_eq!(to_hex([1.0, 0.0, 0.5]), "#ff0080");
        assert_eq!(to_hex([2.0, -1.0, 0.0]), "#ff0000");
    }

    #[test]
    fn hydrogen_detection() {
        assert!(is_hydrogen("h"));
        assert!(is_hydrogen("D"));
        assert!(!is_hydrogen("He"));
    }
}

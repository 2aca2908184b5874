/// Embedded Lorentz-Drude parameter sets (Rakić et al., Appl. Opt. 37, 5271 (1998)).
///
/// Each entry: (symbol, lowercase names, plasma energy ωp (eV), Drude strength f0,
/// Drude damping Γ0 (eV), oscillators as (fj, Γj (eV), ωj (eV))).
/// ε∞ is 1 for every entry.
pub(crate) type PresetEntry = (
    &'static str,
    &'static [&'static str],
    f64,
    f64,
    f64,
    &'static [(f64, f64, f64)],
);

pub(crate) const PRESETS: &[PresetEntry] = &[
    (
        "Ag",
        &["silver"],
        9.01,
        0.845,
        0.048,
        &[
            (0.065, 3.886, 0.816),
            (0.124, 0.452, 4.481),
            (0.011, 0.065, 8.185),
            (0.840, 0.916, 9.083),
            (5.646, 2.419, 20.29),
        ],
    ),
    (
        "Au",
        &["gold"],
        9.03,
        0.760,
        0.053,
        &[
            (0.024, 0.241, 0.415),
            (0.010, 0.345, 0.830),
            (0.071, 0.870, 2.969),
            (0.601, 2.494, 4.304),
            (4.384, 2.214, 13.32),
        ],
    ),
    (
        "Al",
        &["aluminum", "aluminium"],
        14.98,
        0.523,
        0.047,
        &[
            (0.227, 0.333, 0.162),
            (0.050, 0.312, 1.544),
            (0.166, 1.351, 1.808),
            (0.030, 3.382, 3.473),
        ],
    ),
    (
        "Cu",
        &["copper"],
        10.83,
        0.575,
        0.030,
        &[
            (0.061, 0.378, 0.291),
            (0.104, 1.056, 2.957),
            (0.723, 3.213, 5.300),
            (0.638, 4.305, 11.18),
        ],
    ),
];

/// Find a preset by symbol or any of its names (case-insensitive).
pub(crate) fn find_preset(name: &str) -> Option<&'static PresetEntry> {
    let lower = name.to_lowercase();
    PRESETS.iter().find(|entry| {
        entry.0.eq_ignore_ascii_case(name) || entry.1.iter().any(|alias| *alias == lower)
    })
}

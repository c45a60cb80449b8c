/// BT−VT to Johnson B−V conversion factor for Tycho-sourced colour indices.
///
/// Reference: ESA SP-1200, Volume 1, eq. 1.3.20 (pg. 57).
/// PDF mirror: https://www.cosmos.esa.int/documents/532822/552851/vol1_all.pdf
const TYCHO_BV_FACTOR: f64 = 0.85;

/// `mag_src` code marking rows whose colour index is a Tycho BT−VT
/// measurement.
const TYCHO_MAG_SRC: &str = "T";

/// Convert a raw catalog colour index to Johnson B−V.
///
/// Only Tycho-sourced rows need the conversion; every other `mag_src` code
/// passes through unchanged.
pub fn correct_colour_index(ci: f64, mag_src: &str) -> f64 {
    if mag_src == TYCHO_MAG_SRC {
        ci * TYCHO_BV_FACTOR
    } else {
        ci
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tycho_rows_are_scaled() {
        assert_eq!(correct_colour_index(0.5, "T"), 0.5 * 0.85);
        assert_eq!(correct_colour_index(-0.12, "T"), -0.12 * 0.85);
    }

    #[test]
    fn other_sources_pass_through() {
        for src in ["H", "G", "U", ""] {
            assert_eq!(correct_colour_index(0.5, src), 0.5);
        }
    }
}

//! # Tabular display for celestial observations
//!
//! [`CelestialTable`] borrows an observation slice and renders it with
//! [`comfy-table`](https://crates.io/crates/comfy-table) when formatted with `{}`:
//!
//! `Body | Constellation | Sign | RA | Dec | Az | Alt`
//!
//! The `Sign` column is the constellation mapped through
//! [`map_constellation_to_sign`](crate::constellations::map_constellation_to_sign);
//! unmapped constellations show `Unknown`.
//!
//! ```rust
//! use starsign::observations::CelestialBodyObservation;
//! use starsign::observations::display::CelestialTable;
//!
//! let obs = vec![CelestialBodyObservation::new("sun", 7.63, 21.5, 183.4, 51.2, "Gemini")];
//! let rendered = CelestialTable::new(&obs).to_string();
//! assert!(rendered.contains("Gemini"));
//! ```
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::constellations::map_constellation_to_sign;
use crate::conversion::{format_dms, format_ra};
use crate::observations::CelestialBodyObservation;

/// Display adaptor rendering observations as a table.
pub struct CelestialTable<'a> {
    observations: &'a [CelestialBodyObservation],
    /// Fractional digits of sexagesimal seconds (default = 1).
    sec_prec: usize,
    /// If `true`, rows are printed sorted by body name.
    sorted: bool,
    with_symbols: bool,
}

impl<'a> CelestialTable<'a> {
    pub fn new(observations: &'a [CelestialBodyObservation]) -> Self {
        Self {
            observations,
            sec_prec: 1,
            sorted: false,
            with_symbols: false,
        }
    }

    /// Set seconds precision for RA/Dec.
    pub fn with_seconds_precision(mut self, p: usize) -> Self {
        self.sec_prec = p;
        self
    }

    /// Print rows sorted by body name (stable on input order).
    pub fn sorted(mut self) -> Self {
        self.sorted = true;
        self
    }

    /// Prefix signs with their glyph, e.g. `♏ Scorpio`.
    pub fn with_symbols(mut self) -> Self {
        self.with_symbols = true;
        self
    }

    fn sign_label(&self, obs: &CelestialBodyObservation) -> String {
        match map_constellation_to_sign(obs.constellation_label()) {
            Ok(sign) if self.with_symbols => format!("{} {sign}", sign.symbol()),
            Ok(sign) => sign.to_string(),
            Err(_) => "Unknown".to_string(),
        }
    }

    fn row_iter(&self) -> Box<dyn Iterator<Item = &'a CelestialBodyObservation> + 'a> {
        if self.sorted {
            Box::new(
                self.observations
                    .iter()
                    .sorted_by(|a, b| a.name.cmp(&b.name)),
            )
        } else {
            Box::new(self.observations.iter())
        }
    }

    fn render(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Body"),
            Cell::new("Constellation"),
            Cell::new("Sign"),
            Cell::new("RA"),
            Cell::new("Dec"),
            Cell::new("Az [°]"),
            Cell::new("Alt [°]"),
        ]);

        for obs in self.row_iter() {
            table.add_row(Row::from(vec![
                Cell::new(&obs.name),
                Cell::new(obs.constellation_label()),
                Cell::new(self.sign_label(obs)),
                Cell::new(format_ra(obs.equatorial.right_ascension_hours, self.sec_prec))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format_dms(obs.equatorial.declination_degrees, self.sec_prec))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", obs.horizontal.azimuth_degrees))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", obs.horizontal.altitude_degrees))
                    .set_alignment(CellAlignment::Right),
            ]));
        }
        table
    }
}

impl fmt::Display for CelestialTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

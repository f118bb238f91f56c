//! Gridded depth-duration-frequency records and lookups.

use tracing::debug;

use crate::error::IdfError;

/// One row of a gridded precipitation dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRecord {
    /// Latitude of the grid cell (degrees).
    pub lat: f64,
    /// Longitude of the grid cell (degrees).
    pub lon: f64,
    /// Return period (years).
    pub return_period: f64,
    /// Storm duration (minutes).
    pub duration_min: f64,
    /// Total precipitation depth (mm).
    pub precip_mm: f64,
}

/// Coordinates of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Latitude (degrees).
    pub lat: f64,
    /// Longitude (degrees).
    pub lon: f64,
}

/// One duration of an intensity table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRow {
    /// Storm duration (minutes).
    pub duration_min: f64,
    /// Total precipitation depth (mm).
    pub precip_mm: f64,
    /// Mean intensity over the duration (mm/h).
    pub intensity_mm_hr: f64,
}

/// Mean intensity in mm/h of `precip_mm` falling over `duration_min`.
///
/// # Errors
///
/// Returns [`IdfError::NonPositiveDuration`] if `duration_min <= 0`.
pub fn intensity_mm_hr(precip_mm: f64, duration_min: f64) -> Result<f64, IdfError> {
    if !(duration_min > 0.0) {
        return Err(IdfError::NonPositiveDuration {
            duration: duration_min,
        });
    }
    Ok(precip_mm / (duration_min / 60.0))
}

/// Gridded precipitation dataset.
#[derive(Debug, Clone)]
pub struct PrecipGrid {
    records: Vec<GridRecord>,
}

impl PrecipGrid {
    /// Builds a grid from records.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::EmptyGrid`] for no records, or
    /// [`IdfError::InvalidRecord`] for a record with a non-finite field.
    pub fn new(records: Vec<GridRecord>) -> Result<Self, IdfError> {
        if records.is_empty() {
            return Err(IdfError::EmptyGrid);
        }
        for (index, r) in records.iter().enumerate() {
            let fields = [
                ("lat", r.lat),
                ("lon", r.lon),
                ("RP", r.return_period),
                ("duration", r.duration_min),
                ("precip_mm", r.precip_mm),
            ];
            if let Some((name, v)) = fields.iter().find(|(_, v)| !v.is_finite()) {
                return Err(IdfError::InvalidRecord {
                    index,
                    reason: format!("{name} is not finite ({v})"),
                });
            }
        }
        debug!(n_records = records.len(), "precipitation grid loaded");
        Ok(Self { records })
    }

    /// All records.
    pub fn records(&self) -> &[GridRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; an empty grid cannot be built.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean latitude and longitude over all records.
    pub fn centroid(&self) -> GridCell {
        let lats: Vec<f64> = self.records.iter().map(|r| r.lat).collect();
        let lons: Vec<f64> = self.records.iter().map(|r| r.lon).collect();
        GridCell {
            lat: sluice_stats::mean(&lats),
            lon: sluice_stats::mean(&lons),
        }
    }

    /// Distinct cells in first-seen order.
    pub fn cells(&self) -> Vec<GridCell> {
        let mut cells: Vec<GridCell> = Vec::new();
        for r in &self.records {
            let cell = GridCell {
                lat: r.lat,
                lon: r.lon,
            };
            if !cells.contains(&cell) {
                cells.push(cell);
            }
        }
        cells
    }

    /// Cell nearest to `(lat, lon)` by Euclidean distance in degrees. Ties go
    /// to the first record.
    pub fn nearest_cell(&self, lat: f64, lon: f64) -> GridCell {
        let dist = |r: &GridRecord| ((r.lat - lat).powi(2) + (r.lon - lon).powi(2)).sqrt();
        let mut best = &self.records[0];
        let mut best_d = dist(best);
        for r in &self.records[1..] {
            let d = dist(r);
            if d < best_d {
                best = r;
                best_d = d;
            }
        }
        GridCell {
            lat: best.lat,
            lon: best.lon,
        }
    }

    fn at(&self, cell: GridCell) -> impl Iterator<Item = &GridRecord> {
        self.records
            .iter()
            .filter(move |r| r.lat == cell.lat && r.lon == cell.lon)
    }

    /// Sorted distinct return periods available at `cell`.
    pub fn return_periods(&self, cell: GridCell) -> Vec<f64> {
        let mut rps: Vec<f64> = self.at(cell).map(|r| r.return_period).collect();
        rps.sort_by(f64::total_cmp);
        rps.dedup();
        rps
    }

    /// Depth and intensity per duration at `cell` for `return_period`,
    /// sorted by duration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`IdfError::NoData`] | no record for the cell and return period |
    /// | [`IdfError::NonPositiveDuration`] | a matching record has duration <= 0 |
    pub fn intensity_table(
        &self,
        cell: GridCell,
        return_period: f64,
    ) -> Result<Vec<IntensityRow>, IdfError> {
        let mut rows = self
            .at(cell)
            .filter(|r| r.return_period == return_period)
            .map(|r| {
                Ok(IntensityRow {
                    duration_min: r.duration_min,
                    precip_mm: r.precip_mm,
                    intensity_mm_hr: intensity_mm_hr(r.precip_mm, r.duration_min)?,
                })
            })
            .collect::<Result<Vec<_>, IdfError>>()?;
        if rows.is_empty() {
            return Err(IdfError::NoData {
                return_period,
                lat: cell.lat,
                lon: cell.lon,
            });
        }
        rows.sort_by(|a, b| a.duration_min.total_cmp(&b.duration_min));
        Ok(rows)
    }

    /// Nearest cell to `(lat, lon)` and its intensity table for
    /// `return_period`.
    ///
    /// # Errors
    ///
    /// See [`PrecipGrid::intensity_table`].
    pub fn lookup(
        &self,
        lat: f64,
        lon: f64,
        return_period: f64,
    ) -> Result<(GridCell, Vec<IntensityRow>), IdfError> {
        let cell = self.nearest_cell(lat, lon);
        let table = self.intensity_table(cell, return_period)?;
        Ok((cell, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rec(lat: f64, lon: f64, rp: f64, dur: f64, p: f64) -> GridRecord {
        GridRecord {
            lat,
            lon,
            return_period: rp,
            duration_min: dur,
            precip_mm: p,
        }
    }

    fn grid() -> PrecipGrid {
        PrecipGrid::new(vec![
            rec(45.0, -73.0, 2.0, 60.0, 20.0),
            rec(45.0, -73.0, 2.0, 5.0, 6.0),
            rec(45.0, -73.0, 100.0, 60.0, 50.0),
            rec(46.0, -74.0, 2.0, 60.0, 18.0),
            rec(46.0, -74.0, 10.0, 30.0, 22.0),
        ])
        .unwrap()
    }

    #[test]
    fn nearest_cell_by_degrees() {
        let g = grid();
        assert_eq!(g.nearest_cell(45.2, -73.1), GridCell { lat: 45.0, lon: -73.0 });
        assert_eq!(g.nearest_cell(45.9, -74.4), GridCell { lat: 46.0, lon: -74.0 });
    }

    #[test]
    fn return_periods_sorted_distinct() {
        let g = grid();
        let cell = GridCell { lat: 45.0, lon: -73.0 };
        assert_eq!(g.return_periods(cell), vec![2.0, 100.0]);
    }

    #[test]
    fn intensity_sorted_by_duration() {
        let g = grid();
        let rows = g.intensity_table(GridCell { lat: 45.0, lon: -73.0 }, 2.0).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].duration_min, 5.0);
        assert_relative_eq!(rows[0].intensity_mm_hr, 72.0, epsilon = 1e-12);
        assert_relative_eq!(rows[1].intensity_mm_hr, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_return_period() {
        let g = grid();
        assert!(matches!(
            g.lookup(45.0, -73.0, 10.0),
            Err(IdfError::NoData { .. })
        ));
    }

    #[test]
    fn zero_duration_rejected() {
        let g = PrecipGrid::new(vec![rec(0.0, 0.0, 2.0, 0.0, 5.0)]).unwrap();
        assert!(matches!(
            g.intensity_table(GridCell { lat: 0.0, lon: 0.0 }, 2.0),
            Err(IdfError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn empty_and_invalid() {
        assert!(matches!(PrecipGrid::new(vec![]), Err(IdfError::EmptyGrid)));
        assert!(matches!(
            PrecipGrid::new(vec![rec(f64::NAN, 0.0, 2.0, 5.0, 1.0)]),
            Err(IdfError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn centroid_and_cells() {
        let g = grid();
        let c = g.centroid();
        assert_relative_eq!(c.lat, 45.4, epsilon = 1e-12);
        assert_relative_eq!(c.lon, -73.4, epsilon = 1e-12);
        assert_eq!(g.cells().len(), 2);
    }
}

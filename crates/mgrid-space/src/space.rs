//! [`MgrsSpace`]: grid construction and navigation over injected providers.

use std::cmp::Ordering;
use std::fmt;

use mgrid_core::{
    Cardinal, CellAnchor, Compass, ConfigError, GeodesyProvider, GridCodec, GridError, GridRef,
    Heading, HeadingOrder, LatLon, Precision, Rect,
};
use mgrid_geodesy::{MgrsCodec, Vincenty};

use crate::config::SpaceConfig;
use crate::grid::{Grid, Source};

/// The navigation surface for MGRS grids.
///
/// Every operation that needs a projection or a geodesic goes through the
/// two providers held here. [`MgrsSpace::wgs84`] wires the built-in
/// WGS84 implementations; [`MgrsSpace::with_providers`] accepts any
/// substitutes.
///
/// # Examples
///
/// ```
/// use mgrid_space::MgrsSpace;
///
/// let space = MgrsSpace::wgs84();
/// let g = space.grid("4QGH94933312").unwrap();
/// assert_eq!(g.size(), 10);
/// assert_eq!(space.north(&g).unwrap().id(), "4QGH94933313");
/// ```
pub struct MgrsSpace {
    codec: Box<dyn GridCodec>,
    geodesy: Box<dyn GeodesyProvider>,
}

impl MgrsSpace {
    /// Built-in MGRS codec and Vincenty geodesy with default settings.
    pub fn wgs84() -> Self {
        Self::with_providers(Box::new(MgrsCodec::default()), Box::new(Vincenty::wgs84()))
    }

    /// Built-in providers configured by `config`.
    ///
    /// Returns `Err` if `config` fails [`SpaceConfig::validate`].
    pub fn from_config(config: SpaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_providers(
            Box::new(MgrsCodec::new(config.anchor)),
            Box::new(Vincenty::with_config(config.vincenty)?),
        ))
    }

    /// Use the given providers.
    pub fn with_providers(codec: Box<dyn GridCodec>, geodesy: Box<dyn GeodesyProvider>) -> Self {
        Self { codec, geodesy }
    }

    /// The grid codec.
    pub fn codec(&self) -> &dyn GridCodec {
        self.codec.as_ref()
    }

    /// The geodesy provider.
    pub fn geodesy(&self) -> &dyn GeodesyProvider {
        self.geodesy.as_ref()
    }

    // ── Construction ────────────────────────────────────────────

    /// Parse a grid identifier and decode its reference point.
    ///
    /// Whitespace and case are ignored. Returns
    /// `Err(GridError::Codec(CodecError::Malformed { .. }))` if `id` is
    /// not an MGRS reference.
    pub fn grid(&self, id: &str) -> Result<Grid, GridError> {
        let gridref = GridRef::parse(id)?;
        let point = self.codec.decode(&gridref.to_string())?;
        Ok(Grid::new(gridref, point, Source::GridId))
    }

    /// The cell of the given precision containing `(latitude, longitude)`.
    ///
    /// The grid's coordinates are those of the cell's reference point,
    /// not the input point.
    pub fn grid_at(
        &self,
        latitude: f64,
        longitude: f64,
        precision: Precision,
    ) -> Result<Grid, GridError> {
        self.grid_at_point(LatLon::new(latitude, longitude)?, precision)
    }

    /// [`grid_at`](Self::grid_at) for a [`LatLon`].
    pub fn grid_at_point(&self, point: LatLon, precision: Precision) -> Result<Grid, GridError> {
        self.locate(point, precision, Source::LatLon)
    }

    fn locate(
        &self,
        point: LatLon,
        precision: Precision,
        source: Source,
    ) -> Result<Grid, GridError> {
        let id = self.codec.encode(point, precision)?;
        let gridref = GridRef::parse(&id)?;
        let reference = self.codec.decode(&id)?;
        Ok(Grid::new(gridref, reference, source))
    }

    /// Centre of `grid`'s cell, the origin of every translation and
    /// refinement.
    fn centre(&self, grid: &Grid) -> Result<LatLon, GridError> {
        match self.codec.anchor() {
            CellAnchor::Centre => Ok(grid.point()),
            CellAnchor::SouthWest => Ok(self.codec.centre(grid.id())?),
        }
    }

    // ── Resizing ────────────────────────────────────────────────

    /// The cell at `precision` related to `grid`.
    ///
    /// Coarsening truncates the identifier's digits and never touches the
    /// geodesy provider. Refining re-encodes the centre of the cell at the
    /// finer precision, so `resize(resize(g, coarse), fine)` is generally
    /// not `g`.
    pub fn resize(&self, grid: &Grid, precision: Precision) -> Result<Grid, GridError> {
        match precision.cmp(&grid.precision()) {
            Ordering::Equal => Ok(grid.clone()),
            Ordering::Less => {
                let gridref = grid.gridref().truncate(precision);
                let point = self.codec.decode(&gridref.to_string())?;
                Ok(Grid::new(gridref, point, Source::Upsize))
            }
            Ordering::Greater => self.locate(self.centre(grid)?, precision, Source::Downsize),
        }
    }

    /// `steps` precision levels coarser, stopping at 100 km.
    pub fn coarser(&self, grid: &Grid, steps: u8) -> Result<Grid, GridError> {
        self.resize(grid, grid.precision().coarser(steps))
    }

    /// `steps` precision levels finer, stopping at 1 m.
    pub fn finer(&self, grid: &Grid, steps: u8) -> Result<Grid, GridError> {
        self.resize(grid, grid.precision().finer(steps))
    }

    /// The 1 m cell for `grid`.
    pub fn mgrs1(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.resize(grid, Precision::M1)
    }

    /// The 10 m cell for `grid`.
    pub fn mgrs10(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.resize(grid, Precision::M10)
    }

    /// The 100 m cell for `grid`.
    pub fn mgrs100(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.resize(grid, Precision::M100)
    }

    /// The 1 km cell for `grid`.
    pub fn mgrs1000(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.resize(grid, Precision::KM1)
    }

    /// Alias of [`mgrs1000`](Self::mgrs1000).
    pub fn mgrs1k(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.mgrs1000(grid)
    }

    /// The 10 km cell for `grid`.
    pub fn mgrs10000(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.resize(grid, Precision::KM10)
    }

    /// Alias of [`mgrs10000`](Self::mgrs10000).
    pub fn mgrs10k(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.mgrs10000(grid)
    }

    /// The 100 km square for `grid`.
    pub fn mgrs100000(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.resize(grid, Precision::KM100)
    }

    /// Alias of [`mgrs100000`](Self::mgrs100000).
    pub fn mgrs100k(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.mgrs100000(grid)
    }

    // ── Traversal ───────────────────────────────────────────────

    /// The same-precision cell reached by travelling `distance_m` metres
    /// along `azimuth_deg` from the centre of `grid`'s cell.
    ///
    /// Under the default [`CellAnchor::Centre`] the start is the grid's
    /// reference point. A south-west anchor still travels from the
    /// centre, so a one-cell step never starts on a cell edge.
    pub fn translate(
        &self,
        grid: &Grid,
        distance_m: f64,
        azimuth_deg: f64,
    ) -> Result<Grid, GridError> {
        let dest = self.geodesy.project(self.centre(grid)?, distance_m, azimuth_deg);
        self.locate(dest, grid.precision(), Source::Translation)
    }

    /// The adjacent cell towards `towards`, one cell edge away.
    pub fn step(&self, grid: &Grid, towards: Cardinal) -> Result<Grid, GridError> {
        self.translate(grid, f64::from(grid.size()), towards.azimuth())
    }

    /// Neighbour to the north.
    pub fn north(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.step(grid, Cardinal::North)
    }

    /// Neighbour to the east.
    pub fn east(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.step(grid, Cardinal::East)
    }

    /// Neighbour to the south.
    pub fn south(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.step(grid, Cardinal::South)
    }

    /// Neighbour to the west.
    pub fn west(&self, grid: &Grid) -> Result<Grid, GridError> {
        self.step(grid, Cardinal::West)
    }

    /// The four cardinal neighbours, in the order north, east, south, west.
    pub fn neighbours(&self, grid: &Grid) -> Result<[Grid; 4], GridError> {
        Ok([
            self.north(grid)?,
            self.east(grid)?,
            self.south(grid)?,
            self.west(grid)?,
        ])
    }

    // ── Measurement ─────────────────────────────────────────────

    /// Geodesic distance in metres between reference points.
    pub fn distance(&self, a: &Grid, b: &Grid) -> f64 {
        self.geodesy.inverse(a.point(), b.point()).distance_m
    }

    /// [`distance`](Self::distance) in kilometres.
    pub fn distance_km(&self, a: &Grid, b: &Grid) -> f64 {
        self.distance(a, b) / 1000.0
    }

    /// Initial azimuth from `a` to `b`, degrees in `[0, 360)`.
    pub fn bearing(&self, a: &Grid, b: &Grid) -> f64 {
        let azimuth = self.geodesy.inverse(a.point(), b.point()).azimuth_fwd;
        let wrapped = azimuth.rem_euclid(360.0);
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    }

    /// The compass heading from `a` to `b` at the given granularity.
    pub fn heading(&self, a: &Grid, b: &Grid, order: HeadingOrder) -> &'static Heading {
        Compass::classify(self.bearing(a, b), order)
    }

    // ── Adjacency ───────────────────────────────────────────────

    /// `true` if `a` and `b` share an edge.
    ///
    /// Equal-size cells adjoin when one is a cardinal neighbour of the
    /// other. For unequal sizes, the smaller cell's neighbours are
    /// coarsened to the larger cell's precision and compared with it.
    /// Diagonal contact never counts.
    pub fn adjoins(&self, a: &Grid, b: &Grid) -> Result<bool, GridError> {
        if a.precision() == b.precision() {
            return Ok(self.neighbours(a)?.contains(b));
        }
        let (smaller, larger) = if a.precision() > b.precision() {
            (a, b)
        } else {
            (b, a)
        };
        Ok(self.neighbours(smaller)?.iter().any(|n| larger.contains(n)))
    }

    // ── Geometry ────────────────────────────────────────────────

    /// Corners of `grid`'s cell, found by geodesic offsets from its
    /// reference point.
    pub fn cell_bounds(&self, grid: &Grid) -> Rect {
        let size = f64::from(grid.size());
        let (behind, ahead) = match self.codec.anchor() {
            CellAnchor::Centre => (size / 2.0, size / 2.0),
            CellAnchor::SouthWest => (0.0, size),
        };
        let origin = grid.point();
        let reach = |distance: f64, cardinal: Cardinal| {
            self.geodesy.project(origin, distance, cardinal.azimuth())
        };
        let north = reach(ahead, Cardinal::North).latitude;
        let east = reach(ahead, Cardinal::East).longitude;
        let (south, west) = if behind > 0.0 {
            (
                reach(behind, Cardinal::South).latitude,
                reach(behind, Cardinal::West).longitude,
            )
        } else {
            (origin.latitude, origin.longitude)
        };
        Rect::from_extremes(north, south, east, west)
    }
}

impl Default for MgrsSpace {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl fmt::Debug for MgrsSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MgrsSpace")
            .field("anchor", &self.codec.anchor())
            .finish_non_exhaustive()
    }
}

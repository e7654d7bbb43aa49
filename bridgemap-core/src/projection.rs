//! Coordinate reference systems of the bridge data.

/// NAD 1983 State Plane South Dakota North, U.S. survey feet (ESRI:102749).
///
/// The false easting is given in meters, as usual for PROJ definitions.
pub const SD_STATE_PLANE_NORTH_FT: &str = "+proj=lcc +lat_1=44.41666666666666 +lat_2=45.68333333333333 +lat_0=43.83333333333334 +lon_0=-100 +x_0=600000 +y_0=0 +datum=NAD83 +units=us-ft +no_defs";

/// WGS 84 geographic coordinates (EPSG:4326).
pub const WGS84_LONGLAT: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Length of a U.S. survey foot in meters.
pub const US_SURVEY_FOOT: f64 = 1200.0 / 3937.0;

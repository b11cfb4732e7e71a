/// A place to report sun times for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Name shown on the `Location:` line
    pub name: &'static str,
    /// IANA timezone identifier used for local times (e.g. "Europe/Tallinn")
    pub time_zone: &'static str,
}

pub const TARTU: Location = Location {
    latitude: 58.3776,
    longitude: 26.7290,
    name: "Tartu, Estonia",
    time_zone: "Europe/Tallinn",
};

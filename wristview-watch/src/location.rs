//! Position source for the emergency beacon.

/// A geographic position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
}

/// The device's current position, or `None` when no fix is available.
///
/// Fixed coordinates until the positioning hardware is wired up.
// TODO: read from the GNSS driver once the device exposes one.
pub fn current_fix() -> Option<Fix> {
    Some(Fix {
        latitude: -33.862_934_4,
        longitude: 151.208_588_1,
    })
}

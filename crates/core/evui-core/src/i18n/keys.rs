//! Key paths referenced by the formatter-facing views.

pub const LOADPOINT_POWER: &str = "main.loadpointDetails.power";
pub const LOADPOINT_CHARGED: &str = "main.loadpointDetails.charged";
pub const LOADPOINT_DURATION: &str = "main.loadpointDetails.duration";
pub const LOADPOINT_REMAINING: &str = "main.loadpointDetails.remaining";
pub const LOADPOINT_RANGE: &str = "main.loadpointDetails.vehicleRange";
pub const LOADPOINT_FALLBACK_NAME: &str = "main.loadpoint.fallbackName";
pub const VEHICLE_FALLBACK_NAME: &str = "main.vehicle.fallbackName";
pub const VEHICLE_MIN_CHARGE: &str = "main.vehicleSubline.mincharge";
pub const ENERGY_HOME_POWER: &str = "main.energyflow.homePower";
pub const ENERGY_PV_PRODUCTION: &str = "main.energyflow.pvProduction";
pub const ENERGY_GRID_IMPORT: &str = "main.energyflow.gridImport";
pub const ENERGY_PV_EXPORT: &str = "main.energyflow.pvExport";
pub const VERSION: &str = "footer.version.version";

pub const ALL: &[&str] = &[
    LOADPOINT_POWER,
    LOADPOINT_CHARGED,
    LOADPOINT_DURATION,
    LOADPOINT_REMAINING,
    LOADPOINT_RANGE,
    LOADPOINT_FALLBACK_NAME,
    VEHICLE_FALLBACK_NAME,
    VEHICLE_MIN_CHARGE,
    ENERGY_HOME_POWER,
    ENERGY_PV_PRODUCTION,
    ENERGY_GRID_IMPORT,
    ENERGY_PV_EXPORT,
    VERSION,
];
